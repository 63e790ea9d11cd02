use std::fmt::Display;
use std::path::Path;

use log::{error, info, warn};

use crate::customer::{customer_from_record, Customer};

/// What one load pass did: rows that made it into the store and rows that
/// were rejected. Each rejection is also logged with its line number.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/**
 * Derived default makes sense here,
 * an empty store with nothing loaded yet.
 */
#[derive(Default)]
pub struct CustomerRecords {
    customers: Vec<Customer>,
}

impl CustomerRecords {
    /// Read `path` and replace the store's contents with whatever parses.
    ///
    /// The first line is a header and is always consumed, whatever it says.
    /// A row without exactly five fields, or with a non-numeric age or
    /// balance, is logged and skipped; a bad row never aborts the load.
    /// A missing or unreadable file leaves the store empty. Nothing here
    /// panics or returns an error to the caller.
    pub fn load(&mut self, path: &Path) -> LoadReport {
        self.customers.clear();
        let mut report = LoadReport::default();

        // quoting(false): the format has no escaping, commas always split.
        // flexible(true): wrong-width rows come back as records to reject
        // instead of reader errors.
        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .quoting(false)
            .flexible(true)
            .from_path(path)
        {
            Ok(reader) => reader,
            Err(err) => {
                match err.kind() {
                    csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                        error!("file not found: {}", path.display());
                    }
                    _ => error!("cannot read {}: {}", path.display(), err),
                }
                return report;
            }
        };

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    // Read failure mid-file; keep what was parsed so far.
                    error!("stopped reading {}: {}", path.display(), err);
                    break;
                }
            };
            // Line numbers are 1-based against the raw file, header included.
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match customer_from_record(&record) {
                Ok(customer) => {
                    self.customers.push(customer);
                    report.loaded += 1;
                }
                Err(err) => {
                    let row = record.iter().collect::<Vec<_>>().join(",");
                    warn!("skipping line {line} ({row}): {err}");
                    report.skipped += 1;
                }
            }
        }

        info!("read {} records from {}", report.loaded, path.display());
        report
    }

    /// Every defaulted customer, in file order. The matching count is the
    /// returned vector's length; nothing is cached or recomputed elsewhere.
    pub fn defaulted_accounts(&self) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.defaulted).collect()
    }

    pub fn count_total(&self) -> usize {
        self.customers.len()
    }

    pub fn count_defaulted(&self) -> usize {
        self.customers.iter().filter(|c| c.defaulted).count()
    }
}

impl Display for CustomerRecords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.customers.is_empty() {
            return writeln!(f, "No customer records to display. Please read from file first.");
        }
        writeln!(f, "--- All Customer Records ---")?;
        writeln!(f, "----------------------------")?;
        for customer in &self.customers {
            writeln!(f, "{}", customer)?;
        }
        writeln!(f, "----------------------------")?;
        writeln!(f, "Total Customers Displayed: {}", self.customers.len())
    }
}
