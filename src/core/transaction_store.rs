//! In-memory transaction ledger
//!
//! This module provides the TransactionStore component: a keyed collection of
//! transactions supporting insertion, lookup, status changes, removal and a
//! fixed catalog of filtered and sorted views.
//!
//! # Natural Order
//!
//! Next to the id map the store keeps the sequence in which ids were inserted.
//! Iteration, range queries and the "reverse" queries all walk this sequence,
//! so their output order depends on insertion order rather than on ids.
//!
//! # Duplicate Handling
//!
//! If a transaction with an already stored ID is added, only the first
//! occurrence is kept. The later one is ignored without an error.
//!
//! # Empty Results
//!
//! Exact-match queries (status, sender, receiver) fail with
//! [`LedgerError::NoMatchingTransactions`] when nothing matches. The
//! maximum-amount and plain amount-range queries return an empty list instead.

use crate::types::{LedgerError, Transaction, TransactionId, TransactionStatus};
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Keyed in-memory collection of transactions
///
/// Maintains a HashMap of transaction ID to transaction plus the insertion
/// sequence of the stored IDs.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    /// Map of transaction ID to stored transaction
    transactions: HashMap<TransactionId, Transaction>,
    /// Stored IDs in insertion order
    insertion_order: Vec<TransactionId>,
}

impl TransactionStore {
    /// Create a new empty transaction store
    pub fn new() -> Self {
        TransactionStore {
            transactions: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Number of stored transactions
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Add a transaction
    ///
    /// If a transaction with the same ID already exists, the new transaction
    /// is ignored and the stored one is left untouched.
    ///
    /// # Returns
    ///
    /// * `true` - If the transaction was inserted
    /// * `false` - If the ID was already present
    pub fn add(&mut self, transaction: Transaction) -> bool {
        let id = transaction.id();
        if self.transactions.contains_key(&id) {
            debug!("Ignoring duplicate transaction {}", id);
            return false;
        }

        self.transactions.insert(id, transaction);
        self.insertion_order.push(id);
        debug!("Stored transaction {}", id);
        true
    }

    /// Whether a transaction with this ID is stored
    pub fn contains(&self, id: TransactionId) -> bool {
        self.transactions.contains_key(&id)
    }

    /// Whether a transaction with the same ID as `transaction` is stored
    ///
    /// Only the ID is compared; the other fields may differ.
    pub fn contains_transaction(&self, transaction: &Transaction) -> bool {
        self.contains(transaction.id())
    }

    /// Replace the status of a stored transaction
    ///
    /// No transition rules are applied.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the status was updated
    /// * `Err(LedgerError::TransactionNotFound)` - If the ID is not stored
    pub fn change_status(
        &mut self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Result<(), LedgerError> {
        let tx = self
            .transactions
            .get_mut(&id)
            .ok_or_else(|| LedgerError::transaction_not_found(id, "change_status"))?;
        debug!("Transaction {} status {} -> {}", id, tx.status(), status);
        tx.set_status(status);
        Ok(())
    }

    /// Remove a stored transaction and return it
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The removed transaction
    /// * `Err(LedgerError::TransactionNotFound)` - If the ID is not stored
    pub fn remove_by_id(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let tx = self
            .transactions
            .remove(&id)
            .ok_or_else(|| LedgerError::transaction_not_found(id, "remove_by_id"))?;
        self.insertion_order.retain(|stored| *stored != id);
        debug!("Removed transaction {}", id);
        Ok(tx)
    }

    /// Get a stored transaction
    ///
    /// # Returns
    ///
    /// * `Ok(&Transaction)` - If the transaction exists
    /// * `Err(LedgerError::TransactionNotFound)` - If the ID is not stored
    pub fn get_by_id(&self, id: TransactionId) -> Result<&Transaction, LedgerError> {
        self.transactions
            .get(&id)
            .ok_or_else(|| LedgerError::transaction_not_found(id, "get_by_id"))
    }

    /// Iterate over all stored transactions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.transactions.get(id))
    }

    /// All transactions with `status`, ordered by amount descending
    ///
    /// Fails with [`LedgerError::NoMatchingTransactions`] if none match.
    pub fn get_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        let matches = self.filter(|tx| tx.status() == status);
        let matches = require_matches(matches, || format!("status {}", status))?;
        Ok(sort_by_amount_desc(matches))
    }

    /// Senders of all transactions with `status`, in [`Self::get_by_status`] order
    pub fn get_senders_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<&str>, LedgerError> {
        Ok(self
            .get_by_status(status)?
            .into_iter()
            .map(|tx| tx.from())
            .collect())
    }

    /// Receivers of all transactions with `status`, in [`Self::get_by_status`] order
    pub fn get_receivers_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<&str>, LedgerError> {
        Ok(self
            .get_by_status(status)?
            .into_iter()
            .map(|tx| tx.to())
            .collect())
    }

    /// Every transaction, ordered by amount descending, then by ID ascending
    ///
    /// Never fails. An empty store yields an empty list.
    pub fn get_all_ordered_by_amount_desc_then_by_id(&self) -> Vec<&Transaction> {
        let mut all: Vec<&Transaction> = self.iter().collect();
        all.sort_by(|a, b| b.amount().cmp(&a.amount()).then(a.id().cmp(&b.id())));
        all
    }

    /// All transactions sent by `sender`, ordered by amount descending
    ///
    /// Fails with [`LedgerError::NoMatchingTransactions`] if none match.
    pub fn get_by_sender_ordered_by_amount_desc(
        &self,
        sender: &str,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        let matches = self.filter(|tx| tx.from() == sender);
        let matches = require_matches(matches, || format!("sender {}", sender))?;
        Ok(sort_by_amount_desc(matches))
    }

    /// All transactions received by `receiver`, ordered by amount descending
    ///
    /// Equal amounts keep insertion order; there is no ID tie-break.
    /// Fails with [`LedgerError::NoMatchingTransactions`] if none match.
    pub fn get_by_receiver_ordered_by_amount_then_by_id(
        &self,
        receiver: &str,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        let matches = self.filter(|tx| tx.to() == receiver);
        let matches = require_matches(matches, || format!("receiver {}", receiver))?;
        Ok(sort_by_amount_desc(matches))
    }

    /// Transactions with `status` and `amount <= max_amount`, newest insertion first
    ///
    /// The result is not sorted by amount. Never fails.
    pub fn get_by_status_and_max_amount(
        &self,
        status: TransactionStatus,
        max_amount: Decimal,
    ) -> Vec<&Transaction> {
        self.filter_reversed(|tx| tx.status() == status && tx.amount() <= max_amount)
    }

    /// Transactions from `sender` with `amount > min_amount`, newest insertion first
    ///
    /// The result is not sorted by amount.
    /// Fails with [`LedgerError::NoMatchingTransactions`] if none match.
    pub fn get_by_sender_and_min_amount_desc(
        &self,
        sender: &str,
        min_amount: Decimal,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        let matches = self.filter_reversed(|tx| tx.from() == sender && tx.amount() > min_amount);
        require_matches(matches, || {
            format!("sender {} with amount above {}", sender, min_amount)
        })
    }

    /// Transactions to `receiver` with `lo <= amount < hi`, newest insertion first
    ///
    /// Fails with [`LedgerError::NoMatchingTransactions`] if none match.
    pub fn get_by_receiver_and_amount_range(
        &self,
        receiver: &str,
        lo: Decimal,
        hi: Decimal,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        let matches = self
            .filter_reversed(|tx| tx.to() == receiver && tx.amount() >= lo && tx.amount() < hi);
        require_matches(matches, || {
            format!("receiver {} with amount in [{}, {})", receiver, lo, hi)
        })
    }

    /// Transactions with `lo <= amount <= hi`, in insertion order
    ///
    /// Never fails.
    pub fn get_all_in_amount_range(&self, lo: Decimal, hi: Decimal) -> Vec<&Transaction> {
        self.filter(|tx| tx.amount() >= lo && tx.amount() <= hi)
    }

    fn filter<P>(&self, predicate: P) -> Vec<&Transaction>
    where
        P: Fn(&Transaction) -> bool,
    {
        self.iter().filter(|tx| predicate(tx)).collect()
    }

    fn filter_reversed<P>(&self, predicate: P) -> Vec<&Transaction>
    where
        P: Fn(&Transaction) -> bool,
    {
        let mut matches = self.filter(predicate);
        matches.reverse();
        matches
    }
}

/// Stable sort, so equal amounts keep insertion order
fn sort_by_amount_desc(mut transactions: Vec<&Transaction>) -> Vec<&Transaction> {
    transactions.sort_by(|a, b| b.amount().cmp(&a.amount()));
    transactions
}

fn require_matches<T, F>(matches: Vec<T>, query: F) -> Result<Vec<T>, LedgerError>
where
    F: FnOnce() -> String,
{
    if matches.is_empty() {
        return Err(LedgerError::no_matching_transactions(query()));
    }
    Ok(matches)
}
