//! CLI argument definitions using clap
//!
//! Commands:
//! - adt types --schema <path>
//! - adt check --schema <path>
//! - adt construct <Variant> --schema <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::Severity;

/// adt - validate and construct tagged union values
#[derive(Parser, Debug)]
#[command(name = "adt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Minimum log severity written (trace, info, warn, error, fatal)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Severity,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the namespace and registered tags of a definition
    Types {
        /// Path to the union definition file
        #[arg(long, default_value = "./union.json")]
        schema: PathBuf,
    },

    /// Validate JSON values read one per line from stdin
    Check {
        /// Path to the union definition file
        #[arg(long, default_value = "./union.json")]
        schema: PathBuf,
    },

    /// Construct one value of a variant from fields read on stdin
    Construct {
        /// Variant name (unnamespaced)
        variant: String,

        /// Path to the union definition file
        #[arg(long, default_value = "./union.json")]
        schema: PathBuf,
    },
}

impl Command {
    /// Definition file the command operates on
    pub fn schema_path(&self) -> &PathBuf {
        match self {
            Command::Types { schema } | Command::Check { schema } => schema,
            Command::Construct { schema, .. } => schema,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
