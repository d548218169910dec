//! CLI module for adt
//!
//! Provides command-line access to a union definition file:
//! - types: list namespace and tags
//! - check: validate JSON lines from stdin
//! - construct: build one variant value from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    check, construct, load_registry, run_command, types, CheckSummary, INVALID_JSON_CODE,
};
pub use errors::{CliError, CliErrorCode, CliResult};

use crate::observability::Logger;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    Logger::set_threshold(cli.log_level);
    run_command(cli.command)
}
