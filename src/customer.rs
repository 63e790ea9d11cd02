use std::fmt::Display;

use csv::StringRecord;
use serde::Deserialize;
use thiserror::Error;

/// A data row must have exactly these fields, in this order:
/// age, default-flag, balance, housing-flag, loan-flag.
pub const FIELD_COUNT: usize = 5;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid {field}: {source}")]
    Numeric {
        field: &'static str,
        source: std::num::ParseIntError,
    },
    #[error("unreadable row: {0}")]
    Row(#[from] csv::Error),
}

/// One row exactly as it sits in the file, every field still text.
/// Field names are positional; the file's header content is ignored.
#[derive(Debug, Deserialize)]
struct RawCustomer {
    age: String,
    defaulted: String,
    balance: String,
    housing: String,
    loan: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Customer {
    pub age: i32,
    /// True when the source field was "yes" in any casing.
    /// Anything else, recognized or not, counts as not defaulted.
    pub defaulted: bool,
    pub balance: i64,
    /// Same "yes"-or-anything-else contract as `defaulted`.
    pub housing: bool,
    pub loan: bool,
}

impl TryFrom<RawCustomer> for Customer {
    type Error = RecordError;
    fn try_from(raw: RawCustomer) -> Result<Self, Self::Error> {
        // Validating here means the store never holds a half-parsed row.
        Ok(Customer {
            age: parse_numeric(&raw.age, "age")?,
            defaulted: is_yes(&raw.defaulted),
            balance: parse_numeric(&raw.balance, "balance")?,
            housing: is_yes(&raw.housing),
            loan: is_yes(&raw.loan),
        })
    }
}

/// Parse one delimited record into a `Customer`, or say why it can't be one.
pub fn customer_from_record(record: &StringRecord) -> Result<Customer, RecordError> {
    if record.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount(record.len()));
    }
    let raw: RawCustomer = record.deserialize(None)?;
    raw.try_into()
}

fn parse_numeric<T>(field: &str, name: &'static str) -> Result<T, RecordError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    field
        .trim()
        .parse()
        .map_err(|source| RecordError::Numeric { field: name, source })
}

fn is_yes(field: &str) -> bool {
    field.trim().eq_ignore_ascii_case("yes")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Age: {}, Default: {}, Balance: {}, Housing: {}, Loan: {}",
            self.age,
            yes_no(self.defaulted),
            self.balance,
            yes_no(self.housing),
            yes_no(self.loan)
        )
    }
}
