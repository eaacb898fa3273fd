//! Structural predicates over nodes. Nothing here has side effects.

use crate::tree::{Node, Tree};
use crate::value::{Value, ValueType};

use super::text::segments;

pub(crate) fn classify(tree: &Tree, node: Node) -> ValueType {
    tree.value_type(node)
}

/// Text whose content trims to nothing.
pub(crate) fn is_empty_text(tree: &Tree, node: Node) -> bool {
    matches!(tree.value(node), Value::Text(text) if text.get().trim().is_empty())
}

/// Text that spans more than one line once wrapping blank lines are dropped.
pub(crate) fn is_multiline(text: &str) -> bool {
    segments(text).len() > 1
}

/// The children the walker descends into.
///
/// A template contributes the children of its content fragment instead of
/// its own. Whitespace-only text never takes part.
pub(crate) fn active_children(tree: &Tree, node: Node) -> Vec<Node> {
    let parent = tree.template_content(node).unwrap_or(node);
    tree.children(parent)
        .filter(|child| !is_empty_text(tree, *child))
        .collect()
}

/// The text of the only active child, if that child is text.
pub(crate) fn single_text_child<'a>(tree: &'a Tree, children: &[Node]) -> Option<&'a str> {
    match children {
        [only] => tree.text_str(*only),
        _ => None,
    }
}
