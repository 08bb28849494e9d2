//! CSV read demo
//!
//! Parses the file given on the command line and prints every row with
//! its field count, the way a quick inspection tool would. Malformed
//! input stops the run with the error kind.
//!
//! Usage: cargo run --example csv_read -- file.csv

use csvstream::CsvReader;
use std::process::exit;

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: csv_read file.csv");
            exit(1);
        }
    };

    let mut reader = match CsvReader::open(&path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("open {} failed: {}", path, e);
            exit(1);
        }
    };

    loop {
        match reader.read_row() {
            Ok(Some(row)) => {
                println!(
                    "row={},field_count={}: {}",
                    reader.row_count(),
                    row.len(),
                    row.to_strings().join(",\t")
                );
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("parse failed: {}", e);
                exit(1);
            }
        }
    }

    println!("\nparse succeeded! row_count={}", reader.row_count());
}
