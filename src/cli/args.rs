use crate::types::{TransactionId, TransactionStatus};
use clap::{ArgAction, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Load a transaction ledger from CSV and run one query against it
#[derive(Parser, Debug)]
#[command(name = "chainblock")]
#[command(about = "Query an in-memory transaction ledger loaded from CSV", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transaction rows
    #[arg(value_name = "INPUT", help = "Path to the input CSV file (id,status,from,to,amount)")]
    pub input_file: PathBuf,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub query: Query,
}

/// Query catalog exposed on the command line
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Query {
    /// Print the number of stored transactions
    Count,

    /// Print one transaction
    Get {
        #[arg(value_name = "ID")]
        id: TransactionId,
    },

    /// Transactions with a status, by amount descending
    ByStatus {
        #[arg(value_name = "STATUS")]
        status: TransactionStatus,
    },

    /// Senders of transactions with a status, by amount descending
    SendersByStatus {
        #[arg(value_name = "STATUS")]
        status: TransactionStatus,
    },

    /// Receivers of transactions with a status, by amount descending
    ReceiversByStatus {
        #[arg(value_name = "STATUS")]
        status: TransactionStatus,
    },

    /// Every transaction, by amount descending then ID ascending
    All,

    /// Transactions from a sender, by amount descending
    BySender {
        #[arg(value_name = "SENDER")]
        sender: String,
    },

    /// Transactions to a receiver, by amount descending
    ByReceiver {
        #[arg(value_name = "RECEIVER")]
        receiver: String,
    },

    /// Transactions with a status and amount <= MAX, latest inserted first
    ByStatusMaxAmount {
        #[arg(value_name = "STATUS")]
        status: TransactionStatus,
        #[arg(value_name = "MAX", allow_negative_numbers = true)]
        max_amount: Decimal,
    },

    /// Transactions from a sender with amount > MIN, latest inserted first
    BySenderMinAmount {
        #[arg(value_name = "SENDER")]
        sender: String,
        #[arg(value_name = "MIN", allow_negative_numbers = true)]
        min_amount: Decimal,
    },

    /// Transactions to a receiver with LO <= amount < HI, latest inserted first
    ByReceiverAmountRange {
        #[arg(value_name = "RECEIVER")]
        receiver: String,
        #[arg(value_name = "LO", allow_negative_numbers = true)]
        lo: Decimal,
        #[arg(value_name = "HI", allow_negative_numbers = true)]
        hi: Decimal,
    },

    /// Transactions with LO <= amount <= HI, in file order
    AmountRange {
        #[arg(value_name = "LO", allow_negative_numbers = true)]
        lo: Decimal,
        #[arg(value_name = "HI", allow_negative_numbers = true)]
        hi: Decimal,
    },
}

impl CliArgs {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::count(&["program", "in.csv", "count"], Query::Count)]
    #[case::get(&["program", "in.csv", "get", "42"], Query::Get { id: 42 })]
    #[case::by_status(
        &["program", "in.csv", "by-status", "successful"],
        Query::ByStatus { status: TransactionStatus::Successful }
    )]
    #[case::senders_by_status(
        &["program", "in.csv", "senders-by-status", "FAILED"],
        Query::SendersByStatus { status: TransactionStatus::Failed }
    )]
    #[case::receivers_by_status(
        &["program", "in.csv", "receivers-by-status", "aborted"],
        Query::ReceiversByStatus { status: TransactionStatus::Aborted }
    )]
    #[case::all(&["program", "in.csv", "all"], Query::All)]
    #[case::by_sender(
        &["program", "in.csv", "by-sender", "alice"],
        Query::BySender { sender: "alice".to_string() }
    )]
    #[case::by_receiver(
        &["program", "in.csv", "by-receiver", "bob"],
        Query::ByReceiver { receiver: "bob".to_string() }
    )]
    #[case::by_status_max_amount(
        &["program", "in.csv", "by-status-max-amount", "unauthorized", "10.80"],
        Query::ByStatusMaxAmount {
            status: TransactionStatus::Unauthorized,
            max_amount: Decimal::new(1080, 2),
        }
    )]
    #[case::by_sender_min_amount(
        &["program", "in.csv", "by-sender-min-amount", "alice", "5"],
        Query::BySenderMinAmount { sender: "alice".to_string(), min_amount: Decimal::new(5, 0) }
    )]
    #[case::by_receiver_amount_range(
        &["program", "in.csv", "by-receiver-amount-range", "bob", "1.5", "3"],
        Query::ByReceiverAmountRange {
            receiver: "bob".to_string(),
            lo: Decimal::new(15, 1),
            hi: Decimal::new(3, 0),
        }
    )]
    #[case::amount_range(
        &["program", "in.csv", "amount-range", "10.60", "10.80"],
        Query::AmountRange { lo: Decimal::new(1060, 2), hi: Decimal::new(1080, 2) }
    )]
    #[case::amount_range_negative_lo(
        &["program", "in.csv", "amount-range", "-5", "10"],
        Query::AmountRange { lo: Decimal::new(-5, 0), hi: Decimal::new(10, 0) }
    )]
    #[case::receiver_amount_range_negative_bounds(
        &["program", "in.csv", "by-receiver-amount-range", "bob", "-1.5", "-0.5"],
        Query::ByReceiverAmountRange {
            receiver: "bob".to_string(),
            lo: Decimal::new(-15, 1),
            hi: Decimal::new(-5, 1),
        }
    )]
    #[case::status_max_amount_negative(
        &["program", "in.csv", "by-status-max-amount", "failed", "-2"],
        Query::ByStatusMaxAmount {
            status: TransactionStatus::Failed,
            max_amount: Decimal::new(-2, 0),
        }
    )]
    #[case::sender_min_amount_negative(
        &["program", "in.csv", "by-sender-min-amount", "alice", "-0.25"],
        Query::BySenderMinAmount { sender: "alice".to_string(), min_amount: Decimal::new(-25, 2) }
    )]
    fn test_query_parsing(#[case] args: &[&str], #[case] expected: Query) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("in.csv"));
        assert_eq!(parsed.query, expected);
    }

    #[rstest]
    #[case::default(&["program", "in.csv", "count"], "warn")]
    #[case::info(&["program", "-v", "in.csv", "count"], "info")]
    #[case::debug(&["program", "-vv", "in.csv", "count"], "debug")]
    #[case::debug_repeated(&["program", "-v", "-v", "-v", "in.csv", "count"], "debug")]
    fn test_log_level(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level(), expected);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::missing_query(&["program", "in.csv"])]
    #[case::unknown_query(&["program", "in.csv", "by-colour", "red"])]
    #[case::invalid_status(&["program", "in.csv", "by-status", "PENDING"])]
    #[case::invalid_id(&["program", "in.csv", "get", "abc"])]
    #[case::invalid_amount(&["program", "in.csv", "amount-range", "low", "10"])]
    #[case::missing_range_bound(&["program", "in.csv", "amount-range", "1"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
