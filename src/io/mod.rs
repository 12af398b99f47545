//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, output serialization)
//! - `sync_reader` - Streaming CSV reader with iterator interface
//! - `loader` - Builds a `TransactionStore` from a CSV file

pub mod csv_format;
pub mod loader;
pub mod sync_reader;

pub use csv_format::{convert_csv_record, write_parties_csv, write_transactions_csv, CsvRecord};
pub use loader::load_store;
pub use sync_reader::SyncReader;
