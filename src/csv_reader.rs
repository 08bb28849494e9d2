//! Stream-facing CSV reading with row iteration

use crate::csv::CsvParser;
use crate::error::Result;
use crate::types::Row;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// CSV reader over any byte source
///
/// Wraps the streaming parser with buffering, row counting, and an
/// iterator interface. Memory usage is bounded by the largest single
/// field, regardless of input size.
///
/// # Examples
///
/// ```no_run
/// use csvstream::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap();
/// for row_result in reader.rows() {
///     let row = row_result.unwrap();
///     println!("{:?}", row.to_strings());
/// }
/// ```
///
/// Any [`Read`] works as a source:
///
/// ```
/// use csvstream::CsvReader;
///
/// let mut reader = CsvReader::from_reader(&b"a,b\nc,d\n"[..]);
/// assert_eq!(reader.rows().count(), 2);
/// ```
pub struct CsvReader<R: Read> {
    parser: CsvParser<BufReader<R>>,
    row_count: u64,
}

impl CsvReader<File> {
    /// Open a CSV file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening csv file");
        let file = File::open(path)?;
        Ok(CsvReader::from_reader(file))
    }
}

impl<R: Read> CsvReader<R> {
    /// Create a reader over any byte source
    pub fn from_reader(reader: R) -> Self {
        CsvReader {
            parser: CsvParser::new(BufReader::new(reader)),
            row_count: 0,
        }
    }

    /// Set a custom field delimiter (builder pattern)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvstream::CsvReader;
    ///
    /// let reader = CsvReader::open("data.csv")
    ///     .unwrap()
    ///     .with_delimiter(b';')
    ///     .unwrap();
    /// ```
    pub fn with_delimiter(mut self, delimiter: u8) -> Result<Self> {
        self.parser.set_field_delimiter(delimiter)?;
        Ok(self)
    }

    /// Read a single row
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvstream::CsvReader;
    ///
    /// let mut reader = CsvReader::open("data.csv").unwrap();
    /// while let Some(row) = reader.read_row().unwrap() {
    ///     println!("{:?}", row.to_strings());
    /// }
    /// ```
    pub fn read_row(&mut self) -> Result<Option<Row>> {
        let row = self.parser.next_row()?;
        if row.is_some() {
            self.row_count += 1;
        }
        Ok(row)
    }

    /// Get iterator over rows
    pub fn rows(&mut self) -> Rows<'_, R> {
        Rows { reader: self }
    }

    /// Number of rows read so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }
}

/// Iterator over CSV rows
pub struct Rows<'a, R: Read> {
    reader: &'a mut CsvReader<R>,
}

impl<R: Read> Iterator for Rows<'_, R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_row().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvError;
    use std::io::Write;

    #[test]
    fn test_read_plain_csv() -> Result<()> {
        let path = "test_reader_plain.csv";
        std::fs::write(path, "Name,Age,City\nAlice,30,NYC\nBob,25,SF\n")?;

        let mut reader = CsvReader::open(path)?;
        let mut rows = vec![];
        for row_result in reader.rows() {
            rows.push(row_result?.to_strings());
        }

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Name", "Age", "City"]);
        assert_eq!(rows[1], vec!["Alice", "30", "NYC"]);
        assert_eq!(reader.row_count(), 3);

        std::fs::remove_file(path).ok();
        Ok(())
    }

    #[test]
    fn test_read_custom_delimiter() -> Result<()> {
        let path = "test_reader_semicolon.csv";
        std::fs::write(path, "France;Paris\nGermany;Berlin\n")?;

        let mut reader = CsvReader::open(path)?.with_delimiter(b';')?;
        let row = reader.read_row()?.unwrap();
        assert_eq!(row.to_strings(), vec!["France", "Paris"]);

        std::fs::remove_file(path).ok();
        Ok(())
    }

    #[test]
    fn test_read_from_memory() {
        let mut reader = CsvReader::from_reader(&b"a,b\n\"c\nd\",e\n"[..]);
        let rows: Vec<_> = reader.rows().map(|r| r.unwrap().to_strings()).collect();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c\nd", "e"]]);
    }

    #[test]
    fn test_iterator_surfaces_error() {
        let mut reader = CsvReader::from_reader(&b"ok\nab\"cd\n"[..]);
        let mut rows = reader.rows();
        assert!(rows.next().unwrap().is_ok());
        assert!(matches!(
            rows.next().unwrap(),
            Err(CsvError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            CsvReader::open("test_reader_nonexistent.csv"),
            Err(CsvError::Io(_))
        ));
    }

    #[test]
    fn test_row_count_tracks_reads() -> Result<()> {
        let path = "test_reader_count.csv";
        {
            let mut f = std::fs::File::create(path)?;
            for i in 0..100 {
                writeln!(f, "{},{}", i, i * 2)?;
            }
        }

        let mut reader = CsvReader::open(path)?;
        assert_eq!(reader.rows().filter(|r| r.is_ok()).count(), 100);
        assert_eq!(reader.row_count(), 100);

        std::fs::remove_file(path).ok();
        Ok(())
    }
}
