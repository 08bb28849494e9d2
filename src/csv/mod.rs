//! Core CSV codec: streaming parser, row encoder, and their configuration

mod encoder;
mod parser;

pub use encoder::CsvEncoder;
pub use parser::CsvParser;

use crate::error::{CsvError, Result};
use std::str::FromStr;

pub(crate) const QUOTE: u8 = b'"';
pub(crate) const CR: u8 = b'\r';
pub(crate) const LF: u8 = b'\n';

/// Field delimiter used when none is configured
pub const DEFAULT_FIELD_DELIMITER: u8 = b',';

/// A field delimiter must not collide with the framing bytes
pub(crate) fn validate_field_delimiter(delimiter: u8) -> Result<()> {
    match delimiter {
        CR | LF | QUOTE => Err(CsvError::InvalidFieldDelimiter),
        _ => Ok(()),
    }
}

/// Quoting policy applied by the writer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuotePolicy {
    /// Quote every field
    All,
    /// Quote only fields that could not round-trip unquoted
    #[default]
    Minimal,
}

impl FromStr for QuotePolicy {
    type Err = CsvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(QuotePolicy::All),
            "minimal" => Ok(QuotePolicy::Minimal),
            _ => Err(CsvError::InvalidQuoteStyle(s.to_string())),
        }
    }
}

/// Line terminator emitted by the writer
///
/// The parser accepts all three regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineBreak {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
}

impl LineBreak {
    /// The terminator byte sequence
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineBreak::Lf => b"\n",
            LineBreak::CrLf => b"\r\n",
            LineBreak::Cr => b"\r",
        }
    }
}

impl FromStr for LineBreak {
    type Err = CsvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineBreak::Lf),
            "crlf" => Ok(LineBreak::CrLf),
            "cr" => Ok(LineBreak::Cr),
            _ => Err(CsvError::InvalidLineBreak(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_validation() {
        assert!(validate_field_delimiter(b',').is_ok());
        assert!(validate_field_delimiter(b'\t').is_ok());
        assert!(validate_field_delimiter(b';').is_ok());

        for bad in [b'\r', b'\n', b'"'] {
            assert!(matches!(
                validate_field_delimiter(bad),
                Err(CsvError::InvalidFieldDelimiter)
            ));
        }
    }

    #[test]
    fn test_quote_policy_from_str() {
        assert_eq!("all".parse::<QuotePolicy>().unwrap(), QuotePolicy::All);
        assert_eq!("Minimal".parse::<QuotePolicy>().unwrap(), QuotePolicy::Minimal);
        assert!(matches!(
            "sometimes".parse::<QuotePolicy>(),
            Err(CsvError::InvalidQuoteStyle(_))
        ));
    }

    #[test]
    fn test_line_break_from_str() {
        assert_eq!("lf".parse::<LineBreak>().unwrap(), LineBreak::Lf);
        assert_eq!("CRLF".parse::<LineBreak>().unwrap(), LineBreak::CrLf);
        assert_eq!("cr".parse::<LineBreak>().unwrap(), LineBreak::Cr);
        assert!(matches!(
            "unix".parse::<LineBreak>(),
            Err(CsvError::InvalidLineBreak(_))
        ));
    }

    #[test]
    fn test_line_break_bytes() {
        assert_eq!(LineBreak::Lf.as_bytes(), b"\n");
        assert_eq!(LineBreak::CrLf.as_bytes(), b"\r\n");
        assert_eq!(LineBreak::Cr.as_bytes(), b"\r");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(QuotePolicy::default(), QuotePolicy::Minimal);
        assert_eq!(LineBreak::default(), LineBreak::Lf);
    }
}
