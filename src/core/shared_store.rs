//! Thread-safe wrapper around the transaction store
//!
//! `SharedTransactionStore` guards a single [`TransactionStore`] with one
//! `parking_lot::Mutex`. Every method holds the lock for exactly one store
//! operation, reads and writes alike, so the operations are serialized.
//!
//! Queries return owned values (cloned transactions, owned sender/receiver
//! strings) because borrowed results cannot outlive the lock guard.

use crate::core::transaction_store::TransactionStore;
use crate::types::{LedgerError, Transaction, TransactionId, TransactionStatus};
use parking_lot::Mutex;
use rust_decimal::Decimal;

/// Transaction store shared between threads behind a single lock
///
/// Semantics match [`TransactionStore`] method for method, including which
/// queries fail on an empty result.
#[derive(Debug, Default)]
pub struct SharedTransactionStore {
    inner: Mutex<TransactionStore>,
}

fn cloned(transactions: Vec<&Transaction>) -> Vec<Transaction> {
    transactions.into_iter().cloned().collect()
}

fn owned(parties: Vec<&str>) -> Vec<String> {
    parties.into_iter().map(str::to_owned).collect()
}

impl SharedTransactionStore {
    pub fn new() -> Self {
        Self::from_store(TransactionStore::new())
    }

    /// Wrap an existing store, e.g. one built by [`crate::io::load_store`]
    pub fn from_store(store: TransactionStore) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    /// Release the lock wrapper and return the underlying store
    pub fn into_inner(self) -> TransactionStore {
        self.inner.into_inner()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().count()
    }

    pub fn add(&self, transaction: Transaction) -> bool {
        self.inner.lock().add(transaction)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.inner.lock().contains(id)
    }

    pub fn contains_transaction(&self, transaction: &Transaction) -> bool {
        self.inner.lock().contains_transaction(transaction)
    }

    pub fn change_status(
        &self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Result<(), LedgerError> {
        self.inner.lock().change_status(id, status)
    }

    pub fn remove_by_id(&self, id: TransactionId) -> Result<Transaction, LedgerError> {
        self.inner.lock().remove_by_id(id)
    }

    pub fn get_by_id(&self, id: TransactionId) -> Result<Transaction, LedgerError> {
        self.inner.lock().get_by_id(id).cloned()
    }

    pub fn get_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.inner.lock().get_by_status(status).map(cloned)
    }

    pub fn get_senders_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<String>, LedgerError> {
        self.inner.lock().get_senders_by_status(status).map(owned)
    }

    pub fn get_receivers_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<String>, LedgerError> {
        self.inner.lock().get_receivers_by_status(status).map(owned)
    }

    pub fn get_all_ordered_by_amount_desc_then_by_id(&self) -> Vec<Transaction> {
        cloned(self.inner.lock().get_all_ordered_by_amount_desc_then_by_id())
    }

    pub fn get_by_sender_ordered_by_amount_desc(
        &self,
        sender: &str,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.inner
            .lock()
            .get_by_sender_ordered_by_amount_desc(sender)
            .map(cloned)
    }

    pub fn get_by_receiver_ordered_by_amount_then_by_id(
        &self,
        receiver: &str,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.inner
            .lock()
            .get_by_receiver_ordered_by_amount_then_by_id(receiver)
            .map(cloned)
    }

    pub fn get_by_status_and_max_amount(
        &self,
        status: TransactionStatus,
        max_amount: Decimal,
    ) -> Vec<Transaction> {
        cloned(
            self.inner
                .lock()
                .get_by_status_and_max_amount(status, max_amount),
        )
    }

    pub fn get_by_sender_and_min_amount_desc(
        &self,
        sender: &str,
        min_amount: Decimal,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.inner
            .lock()
            .get_by_sender_and_min_amount_desc(sender, min_amount)
            .map(cloned)
    }

    pub fn get_by_receiver_and_amount_range(
        &self,
        receiver: &str,
        lo: Decimal,
        hi: Decimal,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.inner
            .lock()
            .get_by_receiver_and_amount_range(receiver, lo, hi)
            .map(cloned)
    }

    pub fn get_all_in_amount_range(&self, lo: Decimal, hi: Decimal) -> Vec<Transaction> {
        cloned(self.inner.lock().get_all_in_amount_range(lo, hi))
    }
}

impl From<TransactionStore> for SharedTransactionStore {
    fn from(store: TransactionStore) -> Self {
        Self::from_store(store)
    }
}
