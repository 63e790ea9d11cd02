mod customer;
mod records;

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use crate::records::CustomerRecords;

#[derive(Parser, Debug)]
struct Args {
    /// Customer data file: one header line, then
    /// age,default,balance,housing,loan per row.
    #[clap(default_value = "MyData.csv")]
    data_filepath: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut records = CustomerRecords::default();

    println!("Reading data from {}...", args.data_filepath.display());
    records.load(&args.data_filepath);
    println!("\nRecords have been read");
    println!("Number of records : {}", records.count_total());

    let defaulted = records.defaulted_accounts();
    println!("\nDefaulted Members ages :");
    if defaulted.is_empty() {
        println!("No defaulted customers found.");
    } else {
        for (i, customer) in defaulted.iter().enumerate() {
            println!("No {} : {}", i + 1, customer.age);
        }
    }

    println!("\n{}", records);
}
