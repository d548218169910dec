//! JSON line I/O for the CLI
//!
//! - One JSON value per input line
//! - One JSON response object per output line
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Reads a whole input as one JSON value. Blank input is `null`.
pub fn read_value<R: BufRead>(input: &mut R) -> CliResult<Value> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(CliError::from)
}

/// Iterates non-blank input lines, paired with their 1-based line number.
pub fn read_lines<R: BufRead>(input: R) -> impl Iterator<Item = CliResult<(usize, String)>> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)).map_err(CliError::from))
        .filter(|item| !matches!(item, Ok((_, l)) if l.trim().is_empty()))
}

/// Write a success response
pub fn write_response<W: Write>(output: &mut W, data: Value) -> CliResult<()> {
    write_line(output, &json!({ "status": "ok", "data": data }))
}

/// Write an error response
pub fn write_error<W: Write>(output: &mut W, code: &str, message: &str) -> CliResult<()> {
    write_line(
        output,
        &json!({ "status": "error", "code": code, "message": message }),
    )
}

fn write_line<W: Write>(output: &mut W, response: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *output, response)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
