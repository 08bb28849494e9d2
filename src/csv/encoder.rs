//! Row serialization with parser-compatible quoting

use crate::csv::{validate_field_delimiter, LineBreak, QuotePolicy, CR, DEFAULT_FIELD_DELIMITER, LF, QUOTE};
use crate::error::Result;
use crate::types::Row;

/// Encoder turning rows back into CSV bytes
///
/// The quoting rules are the exact inverse of the parser's, so encoded
/// output re-parses to the same rows. Two forms are fixed regardless of
/// policy: a zero-field row becomes a bare line break, and a row holding
/// one empty field becomes `""` so the two stay distinguishable.
///
/// # Example
///
/// ```
/// use csvstream::{row, CsvEncoder};
///
/// let encoder = CsvEncoder::default();
/// let mut buffer = Vec::new();
/// encoder.encode_row(&row!["a\"b", "c,d"], &mut buffer).unwrap();
/// assert_eq!(buffer, b"\"a\"\"b\",\"c,d\"\n");
/// ```
pub struct CsvEncoder {
    delimiter: u8,
    quote_policy: QuotePolicy,
    line_break: LineBreak,
}

impl CsvEncoder {
    /// Create an encoder, validating the field delimiter
    pub fn new(delimiter: u8, quote_policy: QuotePolicy, line_break: LineBreak) -> Result<Self> {
        validate_field_delimiter(delimiter)?;
        Ok(CsvEncoder {
            delimiter,
            quote_policy,
            line_break,
        })
    }

    /// The configured field delimiter
    pub fn field_delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Serialize one row, appending to `buffer`
    ///
    /// Worst-case capacity is reserved up front via `try_reserve`, so the
    /// only failure here is out of memory.
    pub fn encode_row(&self, row: &Row, buffer: &mut Vec<u8>) -> Result<()> {
        // every byte doubled plus quotes and delimiter, per field
        let mut needed = self.line_break.as_bytes().len();
        for field in row {
            needed += 2 * field.len() + 3;
        }
        buffer.try_reserve(needed)?;

        if row.is_empty() {
            // zero-field row: a bare line
        } else if row.len() == 1 && row[0].is_empty() {
            // sole empty field: `""` keeps it distinct from an empty line
            buffer.push(QUOTE);
            buffer.push(QUOTE);
        } else {
            for (i, field) in row.iter().enumerate() {
                if i > 0 {
                    buffer.push(self.delimiter);
                }
                self.encode_field(field.as_bytes(), buffer);
            }
        }

        buffer.extend_from_slice(self.line_break.as_bytes());
        Ok(())
    }

    fn encode_field(&self, field: &[u8], buffer: &mut Vec<u8>) {
        if self.needs_quoting(field) {
            buffer.push(QUOTE);
            for &b in field {
                if b == QUOTE {
                    buffer.push(QUOTE);
                    buffer.push(QUOTE);
                } else {
                    buffer.push(b);
                }
            }
            buffer.push(QUOTE);
        } else {
            buffer.extend_from_slice(field);
        }
    }

    fn needs_quoting(&self, field: &[u8]) -> bool {
        match self.quote_policy {
            QuotePolicy::All => true,
            QuotePolicy::Minimal => field
                .iter()
                .any(|&b| b == QUOTE || b == CR || b == LF || b == self.delimiter),
        }
    }
}

impl Default for CsvEncoder {
    fn default() -> Self {
        CsvEncoder {
            delimiter: DEFAULT_FIELD_DELIMITER,
            quote_policy: QuotePolicy::default(),
            line_break: LineBreak::default(),
        }
    }
}
