//! Command-line boundary: argument handling, file reading, JSON output.
//!
//! `run` is the whole shell minus process glue, so the stdout/stderr
//! contract stays testable in-process. Stdout carries only the JSON result;
//! every failure maps to one stderr line and exit code 1.

use std::fs;
use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::error::ExtractError;
use crate::extractor;

/// Failure classes the shell reports. The `Display` output is the exact
/// stderr line; all of them exit with code 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing filename")]
    MissingArgument,

    #[error("SyntaxError: {0}")]
    Syntax(ExtractError),

    #[error("Failed: {0:#}")]
    Failed(anyhow::Error),
}

/// Run the extraction for the given process arguments (program name already
/// stripped), returning the JSON line to print on stdout.
///
/// Only the first argument is consulted; extras are ignored.
pub fn run(args: &[String]) -> Result<String, CliError> {
    let path = args.first().ok_or(CliError::MissingArgument)?;
    let source = read_source(Path::new(path)).map_err(CliError::Failed)?;

    let names = extractor::extract_names(&source).map_err(|e| match e {
        ExtractError::Syntax { .. } => CliError::Syntax(e),
        other => CliError::Failed(anyhow::Error::new(other)),
    })?;

    serde_json::to_string(&names).map_err(|e| CliError::Failed(anyhow::Error::new(e)))
}

/// Read a file as UTF-8 text. The handle is released before parsing begins;
/// decode failures surface like any other read failure.
fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
}
