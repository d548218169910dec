//! CLI command implementations
//!
//! Each command loads a definition, builds the registry, then talks JSON
//! over the given reader and writer. `run_command` wires them to stdin and
//! stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::union::UnionRegistry;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_lines, read_value, write_error, write_response};

/// Error code written for input lines that are not JSON.
pub const INVALID_JSON_CODE: &str = "ADT_CLI_INVALID_JSON";

/// Outcome counts of a `check` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Run a parsed command against stdin/stdout
pub fn run_command(command: Command) -> CliResult<()> {
    let registry = load_registry(command.schema_path())?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match command {
        Command::Types { .. } => types(&registry, &mut stdout),
        Command::Check { .. } => check(&registry, stdin.lock(), &mut stdout).map(|_| ()),
        Command::Construct { variant, .. } => {
            construct(&registry, &variant, &mut stdin.lock(), &mut stdout)
        }
    }
}

/// Load and build the registry a command works with
pub fn load_registry(path: &Path) -> CliResult<UnionRegistry> {
    UnionRegistry::from_path(path).map_err(CliError::from)
}

/// Write the registry's namespace and tags
pub fn types<W: Write>(registry: &UnionRegistry, output: &mut W) -> CliResult<()> {
    let variants: Vec<Value> = registry
        .variants()
        .map(|v| json!({ "name": v.name(), "tag": v.tag() }))
        .collect();

    write_response(
        output,
        json!({ "namespace": registry.namespace(), "variants": variants }),
    )
}

/// Validate each input line, writing one response per line.
///
/// Rejected values do not stop the run; only I/O errors do.
pub fn check<R: BufRead, W: Write>(
    registry: &UnionRegistry,
    input: R,
    output: &mut W,
) -> CliResult<CheckSummary> {
    let mut summary = CheckSummary::default();

    for line in read_lines(input) {
        let (line_no, text) = line?;

        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                summary.rejected += 1;
                write_error(output, INVALID_JSON_CODE, &format!("line {}: {}", line_no, e))?;
                continue;
            }
        };

        match registry.validate(value) {
            Ok(value) => {
                summary.accepted += 1;
                write_response(output, value)?;
            }
            Err(e) => {
                summary.rejected += 1;
                write_error(output, e.code(), &format!("line {}: {}", line_no, e.message()))?;
            }
        }
    }

    Ok(summary)
}

/// Construct one value of `variant` from the fields on `input`
pub fn construct<R: BufRead, W: Write>(
    registry: &UnionRegistry,
    variant: &str,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    let fields = read_value(input)?;

    match registry.construct(variant, fields) {
        Ok(value) => write_response(output, value.into_value()),
        Err(e) => {
            write_error(output, e.code(), &e.message())?;
            Err(CliError::from(e))
        }
    }
}
