//! Strict streaming CSV parsing and writing
//!
//! A CSV file is treated as a list of rows, and a row as a list of
//! fields. Rows are separated by `\n`, `\r`, or `\r\n`; fields are
//! separated by a configurable delimiter (default `,`, never `\r`, `\n`,
//! or `"`). Fields may be quoted with `"`; inside quotes, delimiters and
//! line breaks are ordinary bytes and a literal quote is escaped as
//! `""`. Fields are byte-transparent: no character-set interpretation,
//! no type inference.
//!
//! Parsing is strict. A quote in an unquoted field, a closing quote not
//! followed by a delimiter or line break, or an unclosed quote at end of
//! input is an error, not a guess.
//!
//! Some shapes worth knowing:
//! - an empty line is a row with zero fields;
//! - a line of `""` is a row with one field, the empty string;
//! - a line of `""""` is a row with one field holding a single `"`.
//!
//! The writer applies the inverse rules (including the two empty forms
//! above), so any row list round-trips through a write-then-parse.
//!
//! # Parsing
//!
//! ```
//! use csvstream::CsvParser;
//!
//! let mut parser = CsvParser::new(&b"a,b\n\"c,d\",e\n"[..]);
//! while let Some(row) = parser.next_row().unwrap() {
//!     println!("{} fields: {:?}", row.len(), row.to_strings());
//! }
//! ```
//!
//! # Writing
//!
//! ```
//! use csvstream::{row, CsvWriter};
//!
//! let mut writer = CsvWriter::from_writer(Vec::new());
//! writer.write_row(&row!["a", "b,c"]).unwrap();
//! let bytes = writer.finish().unwrap();
//! assert_eq!(bytes, b"a,\"b,c\"\n");
//! ```
//!
//! # Files
//!
//! ```no_run
//! use csvstream::{CsvReader, CsvWriter, row};
//!
//! let mut writer = CsvWriter::create("cities.csv").unwrap();
//! writer.write_row(&row!["Paris", "France"]).unwrap();
//! writer.finish().unwrap();
//!
//! let mut reader = CsvReader::open("cities.csv").unwrap();
//! for row in reader.rows() {
//!     println!("{:?}", row.unwrap().to_strings());
//! }
//! ```

pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod types;

pub use csv::{CsvEncoder, CsvParser, LineBreak, QuotePolicy, DEFAULT_FIELD_DELIMITER};
pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
pub use error::{CsvError, Result};
pub use types::{Field, Row};
