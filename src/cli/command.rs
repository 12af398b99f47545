//! Query execution
//!
//! Runs one [`Query`] against a loaded store and writes the result as CSV.
//! Store errors are returned unchanged so the binary can report them.

use crate::cli::args::Query;
use crate::core::TransactionStore;
use crate::io::csv_format::{write_parties_csv, write_transactions_csv};
use crate::types::LedgerError;
use std::io::Write;

impl Query {
    /// Execute the query and write its result to `output`
    ///
    /// `count` writes a bare number, sender/receiver queries a single-column
    /// CSV, every other query a transaction CSV.
    pub fn execute(
        &self,
        store: &TransactionStore,
        output: &mut dyn Write,
    ) -> Result<(), LedgerError> {
        match self {
            Query::Count => {
                writeln!(output, "{}", store.count())?;
                Ok(())
            }
            Query::Get { id } => write_transactions_csv(&[store.get_by_id(*id)?], output),
            Query::ByStatus { status } => {
                write_transactions_csv(&store.get_by_status(*status)?, output)
            }
            Query::SendersByStatus { status } => {
                write_parties_csv("from", &store.get_senders_by_status(*status)?, output)
            }
            Query::ReceiversByStatus { status } => {
                write_parties_csv("to", &store.get_receivers_by_status(*status)?, output)
            }
            Query::All => {
                write_transactions_csv(&store.get_all_ordered_by_amount_desc_then_by_id(), output)
            }
            Query::BySender { sender } => write_transactions_csv(
                &store.get_by_sender_ordered_by_amount_desc(sender)?,
                output,
            ),
            Query::ByReceiver { receiver } => write_transactions_csv(
                &store.get_by_receiver_ordered_by_amount_then_by_id(receiver)?,
                output,
            ),
            Query::ByStatusMaxAmount { status, max_amount } => write_transactions_csv(
                &store.get_by_status_and_max_amount(*status, *max_amount),
                output,
            ),
            Query::BySenderMinAmount { sender, min_amount } => write_transactions_csv(
                &store.get_by_sender_and_min_amount_desc(sender, *min_amount)?,
                output,
            ),
            Query::ByReceiverAmountRange { receiver, lo, hi } => write_transactions_csv(
                &store.get_by_receiver_and_amount_range(receiver, *lo, *hi)?,
                output,
            ),
            Query::AmountRange { lo, hi } => {
                write_transactions_csv(&store.get_all_in_amount_range(*lo, *hi), output)
            }
        }
    }
}
