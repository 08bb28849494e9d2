//! CSV write demo
//!
//! Demonstrates the writer surface:
//! - plain rows with default configuration
//! - fields needing quotes (delimiters, quotes, newlines)
//! - empty-row vs empty-field output forms
//! - custom delimiter and line break configuration
//!
//! Usage: cargo run --example csv_write

use csvstream::{row, CsvWriter, LineBreak, QuotePolicy};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== CSV Writer Demo ===\n");

    // Example 1: plain CSV
    println!("1. Writing plain CSV...");
    {
        let mut writer = CsvWriter::create("demo_output.csv")?;
        writer.write_row(&row!["Name", "Age", "City"])?;
        writer.write_row(&row!["Alice", "30", "New York"])?;
        writer.write_row(&row!["Bob", "25", "San Francisco"])?;
        println!("   Rows written: {}", writer.row_count());
        writer.finish()?;
        println!("   Created demo_output.csv");
    }

    // Example 2: edge cases
    println!("\n2. Writing edge cases...");
    {
        let mut writer = CsvWriter::create("demo_edge_cases.csv")?;
        writer.write_row(&row!["Field Type", "Value"])?;
        writer.write_row(&row!["Comma", "a,b,c"])?;
        writer.write_row(&row!["Quotes", "Say \"Hello\""])?;
        writer.write_row(&row!["Multiline", "Line 1\nLine 2"])?;
        writer.write_row(&row![])?;
        writer.write_row(&row![""])?;
        println!("   Rows written: {}", writer.row_count());
        writer.finish()?;
        println!("   Created demo_edge_cases.csv");
    }

    // Example 3: custom configuration
    println!("\n3. Writing with semicolon delimiter, quote-all, CRLF...");
    {
        let file = std::fs::File::create("demo_semicolon.csv")?;
        let mut writer =
            CsvWriter::with_config(file, b';', QuotePolicy::All, LineBreak::CrLf)?;
        writer.write_row(&row!["Country", "Capital"])?;
        writer.write_row(&row!["France", "Paris"])?;
        writer.write_row(&row!["Germany", "Berlin"])?;
        println!("   Rows written: {}", writer.row_count());
        writer.finish()?;
        println!("   Created demo_semicolon.csv");
    }

    // Example 4: batch writing
    println!("\n4. Writing multiple rows at once...");
    {
        let mut writer = CsvWriter::create("demo_batch.csv")?;
        let rows = vec![
            row!["Month", "Revenue"],
            row!["January", "125000"],
            row!["February", "130000"],
            row!["March", "145000"],
        ];
        writer.write_rows(&rows)?;
        println!("   Rows written: {}", writer.row_count());
        writer.finish()?;
        println!("   Created demo_batch.csv");
    }

    println!("\n=== Demo complete ===");
    Ok(())
}
