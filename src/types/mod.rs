//! Types module
//!
//! Contains core data structures used throughout the ledger:
//! - `transaction`: Transaction records, identifiers and statuses
//! - `error`: Error types for the ledger

pub mod error;
pub mod transaction;

pub use error::LedgerError;
pub use transaction::{Transaction, TransactionId, TransactionStatus};
