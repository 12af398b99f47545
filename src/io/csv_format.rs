//! CSV format handling for transaction rows and query output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to transactions
//! - Transaction and sender/receiver output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{LedgerError, Transaction, TransactionId, TransactionStatus};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Header shared by transaction input and output files
pub const TRANSACTION_HEADER: [&str; 5] = ["id", "status", "from", "to", "amount"];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: id, status, from, to, amount.
/// Status and amount stay strings here so conversion can report which value
/// was rejected.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: TransactionId,
    pub status: String,
    pub from: String,
    pub to: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a Transaction
///
/// - Parses the status name (case-insensitive)
/// - Parses the amount string into a Decimal; the amount is required
///
/// Negative amounts are accepted.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Transaction, LedgerError> {
    let status = TransactionStatus::from_str(&csv_record.status)?;

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str(amount_str.trim()).map_err(|_| {
                LedgerError::parse_error(
                    None,
                    format!("Invalid amount '{}' for tx {}", amount_str, csv_record.id),
                )
            })?
        }
        _ => {
            return Err(LedgerError::parse_error(
                None,
                format!("Transaction {} requires an amount", csv_record.id),
            ))
        }
    };

    Ok(Transaction::new(
        csv_record.id,
        status,
        csv_record.from,
        csv_record.to,
        amount,
    ))
}

fn write_error(context: &str, error: impl std::fmt::Display) -> LedgerError {
    LedgerError::IoError {
        message: format!("Failed to write {}: {}", context, error),
    }
}

/// Write transactions to CSV in the order given
///
/// Columns: id, status, from, to, amount. Amounts keep their own scale.
pub fn write_transactions_csv(
    transactions: &[&Transaction],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(TRANSACTION_HEADER)
        .map_err(|e| write_error("CSV header", e))?;

    for tx in transactions {
        writer
            .write_record(&[
                tx.id().to_string(),
                tx.status().to_string(),
                tx.from().to_string(),
                tx.to().to_string(),
                tx.amount().to_string(),
            ])
            .map_err(|e| write_error("transaction record", e))?;
    }

    writer.flush().map_err(|e| write_error("output", e))?;

    Ok(())
}

/// Write a single-column CSV of senders or receivers in the order given
pub fn write_parties_csv(
    header: &str,
    parties: &[&str],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([header])
        .map_err(|e| write_error("CSV header", e))?;

    for party in parties {
        writer
            .write_record([*party])
            .map_err(|e| write_error("party record", e))?;
    }

    writer.flush().map_err(|e| write_error("output", e))?;

    Ok(())
}
