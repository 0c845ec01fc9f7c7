//! Name extraction over a parsed Python syntax tree.
//!
//! This module is organized into focused sub-modules:
//! - functions: function definition names
//! - assignments: bare-identifier assignment targets
//!
//! Everything else in the grammar (classes, imports, augmented and annotated
//! assignments, unpacking patterns, lambdas, comprehension and loop
//! bindings) is out of scope and contributes no names.

pub(crate) mod assignments;
pub(crate) mod functions;

use std::collections::HashSet;

use tree_sitter::Node;

use crate::error::ExtractError;
use crate::language;

/// Collects declared names from Python source code.
pub struct NameExtractor {
    source: String,
    names: HashSet<String>,
}

impl NameExtractor {
    pub fn new(source: String) -> Self {
        Self {
            source,
            names: HashSet::new(),
        }
    }

    /// Parse the source and collect every function name and bare-identifier
    /// assignment target found anywhere in the tree.
    ///
    /// Duplicates collapse; the returned order is the set's iteration order,
    /// not source order.
    pub fn extract_names(mut self) -> Result<Vec<String>, ExtractError> {
        let tree = language::parse(&self.source)?;
        self.traverse_tree(tree.root_node());

        tracing::debug!("extracted {} names", self.names.len());
        Ok(self.names.into_iter().collect())
    }

    fn traverse_tree(&mut self, node: Node) {
        match node.kind() {
            // Covers `async def` as well; the grammar uses one node kind.
            "function_definition" => {
                if let Some(name) = functions::function_name(self, node) {
                    self.names.insert(name);
                }
            }
            "assignment" => {
                // Can contribute zero names for compound or annotated targets
                let targets = assignments::assignment_targets(self, node);
                self.names.extend(targets);
            }
            _ => {}
        }

        // Recursively traverse children
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse_tree(child);
        }
    }

    pub(crate) fn node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        let content_bytes = self.source.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }
}

/// Extract declared names from Python source text.
///
/// Convenience entry point over [`NameExtractor`].
pub fn extract_names(source: &str) -> Result<Vec<String>, ExtractError> {
    NameExtractor::new(source.to_string()).extract_names()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_set(source: &str) -> HashSet<String> {
        extract_names(source)
            .unwrap()
            .into_iter()
            .collect()
    }

    fn expected(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn function_and_local_assignment() {
        assert_eq!(
            name_set("def foo():\n    x = 1\n"),
            expected(&["foo", "x"])
        );
    }

    #[test]
    fn chained_assignment_yields_every_target() {
        let names = name_set("a = b = 5\n");
        assert!(names.contains("a"));
        assert!(names.contains("b"));
    }

    #[test]
    fn tuple_unpacking_is_excluded() {
        assert!(name_set("x, y = 1, 2\n").is_empty());
    }

    #[test]
    fn nested_functions_are_captured() {
        assert_eq!(
            name_set("def f():\n    def g():\n        pass\n"),
            expected(&["f", "g"])
        );
    }

    #[test]
    fn async_functions_are_captured() {
        assert_eq!(
            name_set("async def fetch():\n    pass\n"),
            expected(&["fetch"])
        );
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(name_set("").is_empty());
    }

    #[test]
    fn whitespace_only_source_yields_nothing() {
        assert!(name_set("\n\n    \n").is_empty());
    }

    #[test]
    fn redefinitions_collapse_to_one_entry() {
        let names =
            extract_names("def foo():\n    pass\n\ndef foo():\n    pass\n\nfoo = 1\n").unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0], "foo");
    }

    #[test]
    fn unsupported_declaration_forms_are_excluded() {
        let source = "\
import os
from json import dumps as to_json

class Widget:
    pass

x += 1
y: int = 2
(q := 10)
";
        assert!(name_set(source).is_empty());
    }

    #[test]
    fn attribute_and_subscript_targets_are_excluded() {
        let source = "\
def setup(obj, table):
    obj.field = 1
    table[0] = 2
";
        assert_eq!(name_set(source), expected(&["setup"]));
    }

    #[test]
    fn class_body_assignments_and_methods_are_captured() {
        let source = "\
class Widget:
    label = 'w'

    def render(self):
        return self.label
";
        assert_eq!(name_set(source), expected(&["label", "render"]));
    }

    #[test]
    fn loop_and_comprehension_bindings_are_excluded() {
        let source = "\
for i in range(3):
    pass

squares = [n * n for n in range(3)]
";
        assert_eq!(name_set(source), expected(&["squares"]));
    }

    #[test]
    fn output_has_no_duplicates() {
        let names = extract_names("a = 1\na = 2\nb = a\n").unwrap();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn syntax_error_fails_the_whole_extraction() {
        let err = extract_names("def good():\n    pass\n\ndef bad(:\n").unwrap_err();
        assert!(matches!(err, ExtractError::Syntax { .. }));
    }

    #[test]
    fn inventory_sample_matches_expected_names() {
        let source = include_str!("../../test_samples/inventory.py");
        assert_eq!(
            name_set(source),
            expected(&["CONFIG", "label", "render", "make_widget", "w", "total"])
        );
    }
}
