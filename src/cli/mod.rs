// CLI module
// Command-line interface, argument parsing and query execution

mod args;
mod command;

pub use args::{CliArgs, Query};

use crate::io::load_store;
use crate::types::LedgerError;
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints a message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Initialize `env_logger` on stderr
///
/// `RUST_LOG` wins when set; otherwise the level comes from `-v` flags.
pub fn init_logging(args: &CliArgs) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Load the input file and run the requested query, writing to `output`
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), LedgerError> {
    let store = load_store(&args.input_file)?;
    args.query.execute(&store, output)
}
