//! Function definition name extraction.

use tree_sitter::Node;

use super::NameExtractor;

/// Extract the name of a `function_definition` node from its `name` field.
///
/// The grammar folds `async def` into the same node kind, so async
/// functions arrive here too. A definition without a name field (possible
/// only in malformed trees, which the parser already rejects) yields
/// nothing.
pub(super) fn function_name(extractor: &NameExtractor, node: Node) -> Option<String> {
    let name_node = node.child_by_field_name("name")?;
    Some(extractor.node_text(&name_node))
}
