//! Streaming CSV parser with strict quoting rules

use crate::csv::{validate_field_delimiter, CR, DEFAULT_FIELD_DELIMITER, LF, QUOTE};
use crate::error::{CsvError, Result};
use crate::types::Row;
use std::io::BufRead;

/// Pull parser turning a byte stream into rows
///
/// The parser reads one byte at a time with a single byte of pushback and
/// accepts `\n`, `\r`, and `\r\n` as row terminators. Quoting is strict:
/// a `"` inside an unquoted field, a closing quote followed by anything
/// other than a delimiter or line break, and an unclosed quote at end of
/// input are all format errors rather than guesses.
///
/// The parser does not own the source's lifetime concerns; hand it any
/// [`BufRead`] and drop it when done.
///
/// # Example
///
/// ```
/// use csvstream::CsvParser;
///
/// let mut parser = CsvParser::new(&b"a,b\n\"c,d\"\n"[..]);
/// while let Some(row) = parser.next_row().unwrap() {
///     println!("{:?}", row.to_strings());
/// }
/// ```
pub struct CsvParser<R: BufRead> {
    input: R,
    field_delimiter: u8,
    pushback: Option<u8>,
}

enum State {
    /// Between fields, including at row start
    Start,
    /// Inside a field body
    InField,
}

impl<R: BufRead> CsvParser<R> {
    /// Create a parser with the default `,` field delimiter
    pub fn new(input: R) -> Self {
        CsvParser {
            input,
            field_delimiter: DEFAULT_FIELD_DELIMITER,
            pushback: None,
        }
    }

    /// Create a parser with a custom field delimiter
    ///
    /// The delimiter must not be `\r`, `\n`, or `"`.
    pub fn with_field_delimiter(input: R, delimiter: u8) -> Result<Self> {
        validate_field_delimiter(delimiter)?;
        let mut parser = CsvParser::new(input);
        parser.field_delimiter = delimiter;
        Ok(parser)
    }

    /// Change the field delimiter, effective from the next row
    pub fn set_field_delimiter(&mut self, delimiter: u8) -> Result<()> {
        validate_field_delimiter(delimiter)?;
        self.field_delimiter = delimiter;
        Ok(())
    }

    /// The configured field delimiter
    pub fn field_delimiter(&self) -> u8 {
        self.field_delimiter
    }

    /// Parse the next row
    ///
    /// Returns `Ok(Some(row))` for a parsed row, `Ok(None)` once the
    /// input is exhausted, and `Err` on an io or format error. The three
    /// outcomes are distinct: end of input is not an error, and an empty
    /// line is a row with zero fields, not the end.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        let mut row = Row::new();
        let mut buffer: Vec<u8> = Vec::new();
        let mut state = State::Start;
        // latched when the current field opened with a quote; always false in Start
        let mut quoted = false;

        loop {
            let c = self.next_byte()?;
            match state {
                State::Start => match c {
                    Some(QUOTE) => {
                        quoted = true;
                        state = State::InField;
                    }
                    Some(b) if b == CR || b == LF => {
                        self.consume_line_break(b)?;
                        // a delimiter came right before, so the row ends
                        // with an empty field; a bare line stays zero-field
                        if !row.is_empty() {
                            row.append(&buffer)?;
                        }
                        return Ok(Some(row));
                    }
                    Some(b) if b == self.field_delimiter => {
                        row.append(&buffer)?;
                        buffer.clear();
                    }
                    Some(b) => {
                        push_byte(&mut buffer, b)?;
                        state = State::InField;
                    }
                    None => {
                        return if row.is_empty() {
                            Ok(None)
                        } else {
                            row.append(&buffer)?;
                            Ok(Some(row))
                        };
                    }
                },

                State::InField => match c {
                    Some(QUOTE) => {
                        if !quoted {
                            return Err(CsvError::InvalidFormat(
                                "quote in unquoted field must be escaped",
                            ));
                        }
                        // one byte of lookahead decides: escape, end of
                        // field, end of row, or illegal format
                        match self.next_byte()? {
                            Some(QUOTE) => push_byte(&mut buffer, QUOTE)?,
                            Some(b) if b == self.field_delimiter => {
                                row.append(&buffer)?;
                                buffer.clear();
                                state = State::Start;
                                quoted = false;
                            }
                            Some(b) if b == CR || b == LF => {
                                self.consume_line_break(b)?;
                                row.append(&buffer)?;
                                return Ok(Some(row));
                            }
                            _ => {
                                return Err(CsvError::InvalidFormat(
                                    "closing quote must be followed by field delimiter or line break",
                                ));
                            }
                        }
                    }
                    Some(b) if b == CR || b == LF => {
                        if quoted {
                            push_byte(&mut buffer, b)?;
                        } else {
                            self.consume_line_break(b)?;
                            row.append(&buffer)?;
                            return Ok(Some(row));
                        }
                    }
                    Some(b) if b == self.field_delimiter => {
                        if quoted {
                            push_byte(&mut buffer, b)?;
                        } else {
                            row.append(&buffer)?;
                            buffer.clear();
                            state = State::Start;
                            quoted = false;
                        }
                    }
                    Some(b) => push_byte(&mut buffer, b)?,
                    None => {
                        if quoted {
                            return Err(CsvError::InvalidFormat("unclosed quote"));
                        }
                        // treat end of input like end of row; the next
                        // call returns None
                        row.append(&buffer)?;
                        return Ok(Some(row));
                    }
                },
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        if let Some(b) = self.pushback.take() {
            return Ok(Some(b));
        }
        let buf = self.input.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let b = buf[0];
        self.input.consume(1);
        Ok(Some(b))
    }

    /// Rows end at `\r`, `\n`, or `\r\n`; after a `\r` terminator, a
    /// following `\n` belongs to the same line break
    fn consume_line_break(&mut self, terminator: u8) -> Result<()> {
        if terminator == CR {
            if let Some(b) = self.next_byte()? {
                if b != LF {
                    self.pushback = Some(b);
                }
            }
        }
        Ok(())
    }
}

fn push_byte(buffer: &mut Vec<u8>, b: u8) -> Result<()> {
    if buffer.len() == buffer.capacity() {
        buffer.try_reserve(1)?;
    }
    buffer.push(b);
    Ok(())
}
