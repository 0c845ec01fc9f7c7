//! Error types for parsing and extraction.

use thiserror::Error;

/// Failures surfaced by name extraction.
///
/// Extraction either returns a complete result or fails whole; no partial
/// name lists are ever produced.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source is not valid Python. Carries the position of the first
    /// error or missing node in the tree (1-based line).
    #[error("invalid syntax at line {row}, column {column}")]
    Syntax { row: usize, column: usize },

    /// The tree-sitter parser could not be configured or produced no tree.
    #[error("parser failure: {0}")]
    Parser(String),
}
