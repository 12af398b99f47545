//! Chainblock CLI
//!
//! Loads transactions from a CSV file into an in-memory ledger and runs one
//! query against it.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv count
//! cargo run -- transactions.csv by-status successful
//! cargo run -- -v transactions.csv amount-range 10.60 10.80
//! ```
//!
//! Query results are written to stdout as CSV; logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unknown transaction, query matched nothing, etc.)

use chainblock::cli;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args);

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
