//! Stream-facing CSV writing with buffered output

use crate::csv::{CsvEncoder, LineBreak, QuotePolicy};
use crate::error::Result;
use crate::types::Row;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// CSV writer over any byte sink
///
/// Rows are encoded into a reused buffer and written through in one
/// call, so memory usage stays constant regardless of how many rows are
/// written. Output round-trips through [`CsvParser`](crate::CsvParser)
/// with the matching delimiter.
///
/// # Examples
///
/// ```no_run
/// use csvstream::{row, CsvWriter};
///
/// let mut writer = CsvWriter::create("output.csv").unwrap();
/// writer.write_row(&row!["Name", "Age", "City"]).unwrap();
/// writer.write_row(&row!["Alice", "30", "NYC"]).unwrap();
/// writer.finish().unwrap();
/// ```
///
/// Any [`Write`] works as a sink:
///
/// ```
/// use csvstream::{row, CsvWriter};
///
/// let mut writer = CsvWriter::from_writer(Vec::new());
/// writer.write_row(&row!["a", "b"]).unwrap();
/// assert_eq!(writer.finish().unwrap(), b"a,b\n");
/// ```
pub struct CsvWriter<W: Write> {
    sink: W,
    encoder: CsvEncoder,
    buffer: Vec<u8>,
    row_count: u64,
}

impl CsvWriter<BufWriter<File>> {
    /// Create a CSV file writer with default configuration
    /// (`,` delimiter, minimal quoting, LF line breaks)
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "creating csv file");
        let file = File::create(path)?;
        Ok(CsvWriter::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Create a writer over any byte sink with default configuration
    pub fn from_writer(sink: W) -> Self {
        CsvWriter {
            sink,
            encoder: CsvEncoder::default(),
            buffer: Vec::with_capacity(4096),
            row_count: 0,
        }
    }

    /// Create a writer with explicit configuration
    ///
    /// The delimiter is validated here; an invalid choice is an error
    /// rather than malformed output later.
    pub fn with_config(
        sink: W,
        delimiter: u8,
        quote_policy: QuotePolicy,
        line_break: LineBreak,
    ) -> Result<Self> {
        Ok(CsvWriter {
            sink,
            encoder: CsvEncoder::new(delimiter, quote_policy, line_break)?,
            buffer: Vec::with_capacity(4096),
            row_count: 0,
        })
    }

    /// Write one row
    ///
    /// A zero-field row becomes a blank line and a row with a single
    /// empty field becomes `""`, so both re-parse to what was written.
    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        self.buffer.clear();
        self.encoder.encode_row(row, &mut self.buffer)?;
        self.sink.write_all(&self.buffer)?;
        self.row_count += 1;
        Ok(())
    }

    /// Write multiple rows at once
    pub fn write_rows<'a, I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Row>,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Number of rows written
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush buffered output to the sink
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Flush and return the underlying sink
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        debug!(rows = self.row_count, "finished csv output");
        Ok(self.sink)
    }
}
