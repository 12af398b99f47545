//! Chainblock Library
//! # Overview
//!
//! An in-memory ledger of financial transactions: insertion, lookup, status
//! changes, removal and a fixed catalog of filtered and sorted query views.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Transaction, TransactionStatus, LedgerError)
//! - [`core`] - The ledger itself:
//!   - [`core::transaction_store`] - Keyed store and query catalog
//!   - [`core::shared_store`] - Single-lock wrapper for multi-threaded use
//! - [`io`] - CSV loading and output
//! - [`cli`] - CLI arguments parsing and query execution
//!
//! # Query Catalog
//!
//! | Query | Order | No match |
//! |---|---|---|
//! | `get_by_status` (+ senders/receivers) | amount desc | error |
//! | `get_all_ordered_by_amount_desc_then_by_id` | amount desc, id asc | empty |
//! | `get_by_sender_ordered_by_amount_desc` | amount desc | error |
//! | `get_by_receiver_ordered_by_amount_then_by_id` | amount desc | error |
//! | `get_by_status_and_max_amount` | reverse insertion | empty |
//! | `get_by_sender_and_min_amount_desc` | reverse insertion | error |
//! | `get_by_receiver_and_amount_range` | reverse insertion | error |
//! | `get_all_in_amount_range` | insertion | empty |

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{SharedTransactionStore, TransactionStore};
pub use io::load_store;
pub use types::{LedgerError, Transaction, TransactionId, TransactionStatus};
