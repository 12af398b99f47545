//! Error types for the chainblock ledger
//!
//! # Error Categories
//!
//! - **Lookup Errors**: unknown transaction IDs, queries that match nothing.
//!   Together these are the store's single "not found" kind.
//! - **Input Errors**: unknown status names, malformed CSV rows.
//! - **File I/O Errors**: file not found, permission denied, etc.

use crate::types::TransactionId;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No transaction is stored under the given ID
    #[error("Transaction {id} not found for {operation}")]
    TransactionNotFound {
        /// Transaction ID that was not found
        id: TransactionId,
        /// Operation that failed
        operation: String,
    },

    /// A query that treats an empty result as a failure matched nothing
    ///
    /// Not every query behaves this way: range and maximum-amount queries
    /// return an empty list instead.
    #[error("No transactions match {query}")]
    NoMatchingTransactions {
        /// Description of the query, including its arguments
        query: String,
    },

    /// A status name that is not one of the known statuses
    #[error("Invalid transaction status '{value}'")]
    InvalidStatus {
        /// The rejected input
        value: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable while loading: the malformed row is skipped.
    #[error(
        "CSV parse error{}: {message}",
        line.map(|l| format!(" at line {}", l)).unwrap_or_default()
    )]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a TransactionNotFound error
    pub fn transaction_not_found(id: TransactionId, operation: &str) -> Self {
        LedgerError::TransactionNotFound {
            id,
            operation: operation.to_string(),
        }
    }

    /// Create a NoMatchingTransactions error
    pub fn no_matching_transactions(query: impl Into<String>) -> Self {
        LedgerError::NoMatchingTransactions {
            query: query.into(),
        }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(value: &str) -> Self {
        LedgerError::InvalidStatus {
            value: value.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// True for the lookup failures a store reports
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::TransactionNotFound { .. } | LedgerError::NoMatchingTransactions { .. }
        )
    }
}
