//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over transactions from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use chainblock::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(tx) => println!("Read transaction {}", tx.id()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as `Err(LedgerError::ParseError)` with
//!   the file line number, and iteration continues with the next row

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, Transaction};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one row at a time; memory use does not grow with file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
    finished: bool,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow short rows (a row may omit the amount); rows longer than the
    ///   header are rejected per row
    /// - Use an 8KB buffer
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened successfully
    /// * `Err(LedgerError::FileNotFound)` if there is no file at `path`
    /// * `Err(LedgerError::IoError)` for any other open failure
    /// * `Err(LedgerError::ParseError)` if the header row cannot be read
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            finished: false,
        })
    }

    fn convert_current(&self, line: Option<u64>) -> Result<Transaction, LedgerError> {
        if self.record.len() > self.headers.len() {
            return Err(LedgerError::parse_error(
                line,
                format!(
                    "Expected at most {} fields, found {}",
                    self.headers.len(),
                    self.record.len()
                ),
            ));
        }

        let csv_record: CsvRecord = self
            .record
            .deserialize(Some(&self.headers))
            .map_err(|e| LedgerError::parse_error(line, e.to_string()))?;
        convert_csv_record(csv_record).map_err(|e| LedgerError::parse_error(line, error_message(e)))
    }
}

impl Iterator for SyncReader {
    type Item = Result<Transaction, LedgerError>;

    /// Get the next transaction from the CSV file
    ///
    /// Line numbers are file lines where the row starts, so blank lines and
    /// quoted fields spanning several lines are accounted for.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Transaction))` - Successfully parsed row
    /// * `Some(Err(LedgerError::ParseError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(true) => {}
            Ok(false) => {
                self.finished = true;
                return None;
            }
            Err(e) => {
                // An I/O failure will not clear up on the next read
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    self.finished = true;
                }
                return Some(Err(e.into()));
            }
        }

        let line = self.record.position().map(|pos| pos.line());
        Some(self.convert_current(line))
    }
}

/// Strip an inner parse error down to its message so line info is not doubled
fn error_message(error: LedgerError) -> String {
    match error {
        LedgerError::ParseError { message, .. } => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionStatus;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "id,status,from,to,amount\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_reader_new_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_sync_reader_iterates_valid_row() {
        let file = create_temp_csv(&format!("{}1,SUCCESSFUL,alice,bob,10.50\n", HEADER));

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        let tx = records[0].as_ref().unwrap();
        assert_eq!(tx.id(), 1);
        assert_eq!(tx.status(), TransactionStatus::Successful);
        assert_eq!(tx.from(), "alice");
        assert_eq!(tx.to(), "bob");
        assert_eq!(tx.amount(), Decimal::new(1050, 2));
    }

    #[test]
    fn test_sync_reader_handles_whitespace_and_case() {
        let file = create_temp_csv(&format!("{}  7 , failed ,  alice , bob ,  3.5  \n", HEADER));

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        let tx = records[0].as_ref().unwrap();
        assert_eq!(tx.id(), 7);
        assert_eq!(tx.status(), TransactionStatus::Failed);
        assert_eq!(tx.from(), "alice");
        assert_eq!(tx.amount(), Decimal::new(35, 1));
    }

    #[test]
    fn test_sync_reader_includes_line_numbers_in_errors() {
        let file = create_temp_csv(&format!(
            "{}1,FAILED,a,b,1.0\n2,PENDING,a,b,2.0\nthree,FAILED,a,b,3.0\n4,FAILED,a,b,x\n",
            HEADER
        ));

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 4);
        assert!(records[0].is_ok());
        assert!(matches!(
            records[1],
            Err(LedgerError::ParseError { line: Some(3), .. })
        ));
        assert!(matches!(
            records[2],
            Err(LedgerError::ParseError { line: Some(4), .. })
        ));
        let error = records[3].as_ref().unwrap_err().to_string();
        assert!(error.contains("line 5"));
        assert!(error.contains("Invalid amount"));
    }

    #[test]
    fn test_sync_reader_reports_file_lines_across_blank_and_multiline_rows() {
        let file = create_temp_csv(&format!(
            "{}{}{}",
            HEADER,
            "1,FAILED,a,b,1.0\n\n\n2,PENDING,a,b,2.0\n",
            "3,FAILED,\"multi\nline\",b,3.0\n4,FAILED,a,b,x\n"
        ));

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 4);
        assert!(records[0].is_ok());
        assert!(matches!(
            records[1],
            Err(LedgerError::ParseError { line: Some(5), .. })
        ));
        let multiline = records[2].as_ref().unwrap();
        assert_eq!(multiline.id(), 3);
        assert_eq!(multiline.from(), "multi\nline");
        assert!(matches!(
            records[3],
            Err(LedgerError::ParseError { line: Some(8), .. })
        ));
    }

    #[test]
    fn test_sync_reader_rejects_rows_longer_than_header() {
        let file = create_temp_csv(&format!(
            "{}1,FAILED,a,b,1.0,junk,more\n2,FAILED,a,b,2.0\n",
            HEADER
        ));

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 2);
        let error = records[0].as_ref().unwrap_err();
        assert!(matches!(error, LedgerError::ParseError { line: Some(2), .. }));
        assert!(error.to_string().contains("Expected at most 5 fields, found 7"));
        assert_eq!(records[1].as_ref().unwrap().id(), 2);
    }

    #[test]
    fn test_sync_reader_continues_after_error() {
        let file = create_temp_csv(&format!(
            "{}1,FAILED,a,b,1.0\n2,FAILED,a,b\n3,ABORTED,a,b,3.0\n",
            HEADER
        ));

        let valid: Vec<_> = SyncReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].id(), 1);
        assert_eq!(valid[1].id(), 3);
    }

    #[test]
    fn test_sync_reader_handles_empty_file_after_header() {
        let file = create_temp_csv(HEADER);
        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();
        assert!(records.is_empty());
    }
}
