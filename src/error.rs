//! Error types for CSV parsing and writing

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors reported by the parser, the encoder, and the stream layers
#[derive(Error, Debug)]
pub enum CsvError {
    /// An allocation failed. This variant carries no payload so that
    /// reporting allocation failure never allocates.
    #[error("out of memory")]
    OutOfMemory,

    /// The configured field delimiter is `\r`, `\n`, or `"`
    #[error("invalid field delimiter")]
    InvalidFieldDelimiter,

    /// The underlying byte source or sink failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input violates the quoting rules
    #[error("invalid format: {0}")]
    InvalidFormat(&'static str),

    /// Unrecognized quote style name
    #[error("invalid quote style: {0}")]
    InvalidQuoteStyle(String),

    /// Unrecognized line break name
    #[error("invalid line break: {0}")]
    InvalidLineBreak(String),
}

impl From<TryReserveError> for CsvError {
    fn from(_: TryReserveError) -> Self {
        CsvError::OutOfMemory
    }
}
