//! Core ledger module
//!
//! - `transaction_store` - The keyed transaction store and its query catalog
//! - `shared_store` - Single-lock wrapper for use across threads

pub mod shared_store;
pub mod transaction_store;

pub use shared_store::SharedTransactionStore;
pub use transaction_store::TransactionStore;
