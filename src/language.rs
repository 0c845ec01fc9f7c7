//! Shared tree-sitter configuration for Python.
//!
//! All parser construction goes through here so the grammar is wired up in
//! exactly one place.

use tree_sitter::{Node, Parser, Tree};

use crate::error::ExtractError;

/// Parse Python source text into a tree-sitter syntax tree.
///
/// tree-sitter is error-tolerant and produces a tree for any input, so a
/// parse failure here means the tree contains at least one error or missing
/// node. Such trees are rejected whole rather than extracted partially.
pub fn parse(source: &str) -> Result<Tree, ExtractError> {
    let mut parser = Parser::new();
    let language: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();
    parser
        .set_language(&language)
        .map_err(|e| ExtractError::Parser(format!("failed to set parser language: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ExtractError::Parser("parser returned no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        let (row, column) = first_error_position(root);
        return Err(ExtractError::Syntax { row, column });
    }

    Ok(tree)
}

/// Locate the first error or missing node, for the syntax diagnostic.
fn first_error_position(node: Node) -> (usize, usize) {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        return (pos.row + 1, pos.column);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return first_error_position(child);
        }
    }

    // has_error() on an ancestor guarantees a matching descendant; this arm
    // only runs if the tree disagrees with itself.
    let pos = node.start_position();
    (pos.row + 1, pos.column)
}
