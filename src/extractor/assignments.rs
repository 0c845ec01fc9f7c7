//! Bare-identifier assignment target extraction.

use tree_sitter::Node;

use super::NameExtractor;

/// Extract the target names of a simple assignment.
///
/// Only a bare identifier on the left-hand side counts. Attribute and
/// subscript targets, `pattern_list`/`tuple_pattern` unpacking, and
/// annotated assignments (`x: int = 5`, which the grammar also parses as an
/// `assignment` node, distinguished by its `type` field) contribute
/// nothing.
///
/// Chained assignments (`a = b = 5`) nest an inner `assignment` node on the
/// right-hand side, so the caller's full-tree walk reaches every chained
/// target through this same path.
pub(super) fn assignment_targets(extractor: &NameExtractor, node: Node) -> Vec<String> {
    if node.child_by_field_name("type").is_some() {
        return vec![];
    }

    let left = match node.child_by_field_name("left") {
        Some(left) => left,
        None => return vec![],
    };

    match left.kind() {
        "identifier" => vec![extractor.node_text(&left)],
        _ => vec![],
    }
}
