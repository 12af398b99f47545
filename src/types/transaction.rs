//! Transaction-related types for the chainblock ledger
//!
//! This module defines the transaction record held by the store and the
//! status tag attached to it.

use crate::types::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction identifier
///
/// Supports transaction IDs from 0 to 4,294,967,295
pub type TransactionId = u32;

/// Status tag attached to a transaction
///
/// The store applies no transition rules: any status may be replaced by any
/// other through [`crate::TransactionStore::change_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// The transfer was attempted and failed
    Failed,

    /// The transfer completed
    Successful,

    /// The transfer was cancelled before completion
    Aborted,

    /// The transfer was rejected for lack of authorization
    Unauthorized,
}

impl TransactionStatus {
    /// All statuses, in declaration order
    pub const ALL: [TransactionStatus; 4] = [
        TransactionStatus::Failed,
        TransactionStatus::Successful,
        TransactionStatus::Aborted,
        TransactionStatus::Unauthorized,
    ];

    /// Upper-case name used for display and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Successful => "SUCCESSFUL",
            TransactionStatus::Aborted => "ABORTED",
            TransactionStatus::Unauthorized => "UNAUTHORIZED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = LedgerError;

    /// Parse a status name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TransactionStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LedgerError::invalid_status(s))
    }
}

/// A financial transfer record
///
/// Every field except `status` is fixed at construction. The status can be
/// replaced in place, which is how the store implements status changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    status: TransactionStatus,
    from: String,
    to: String,
    amount: Decimal,
}

impl Transaction {
    /// Create a new transaction record
    ///
    /// The amount is expected to be non-negative but this is not enforced.
    pub fn new(
        id: TransactionId,
        status: TransactionStatus,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Transaction {
            id,
            status,
            from: from.into(),
            to: to.into(),
            amount,
        }
    }

    /// Transaction identifier
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Current status
    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    /// Sender identifier
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Receiver identifier
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Transferred amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Replace the status
    pub fn set_status(&mut self, status: TransactionStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::upper("SUCCESSFUL", TransactionStatus::Successful)]
    #[case::lower("failed", TransactionStatus::Failed)]
    #[case::mixed("AbOrTeD", TransactionStatus::Aborted)]
    #[case::padded("  unauthorized ", TransactionStatus::Unauthorized)]
    fn test_status_from_str(#[case] input: &str, #[case] expected: TransactionStatus) {
        assert_eq!(input.parse::<TransactionStatus>().unwrap(), expected);
    }

    #[rstest]
    #[case::unknown("PENDING")]
    #[case::empty("")]
    fn test_status_from_str_rejects_unknown(#[case] input: &str) {
        let result = input.parse::<TransactionStatus>();
        assert!(matches!(
            result,
            Err(LedgerError::InvalidStatus { value }) if value == input
        ));
    }

    #[test]
    fn test_status_display_round_trips_through_from_str() {
        for status in TransactionStatus::ALL {
            assert_eq!(status.to_string().parse::<TransactionStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_set_status_only_touches_status() {
        let mut tx = Transaction::new(
            7,
            TransactionStatus::Failed,
            "alice",
            "bob",
            Decimal::new(1050, 2),
        );

        tx.set_status(TransactionStatus::Successful);

        assert_eq!(tx.status(), TransactionStatus::Successful);
        assert_eq!(tx.id(), 7);
        assert_eq!(tx.from(), "alice");
        assert_eq!(tx.to(), "bob");
        assert_eq!(tx.amount(), Decimal::new(1050, 2));
    }
}
