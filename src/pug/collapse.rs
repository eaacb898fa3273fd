use crate::tree::{Node, Tree};
use crate::value::ValueType;

use super::classify::{active_children, classify, is_multiline};
use super::context::RenderContext;
use super::shorthand::render_head;
use super::text::inline_text;

/// A run of single-child elements ending in one line of text.
#[derive(Debug)]
pub(crate) struct Chain<'a> {
    elements: Vec<Node>,
    text: &'a str,
}

/// The outcome of following a single-child chain.
#[derive(Debug)]
pub(crate) enum Collapse<'a> {
    Chain(Chain<'a>),
    /// The chain does not collapse, and neither does any chain starting at
    /// one of these elements, since each ends the same way.
    Broken(Vec<Node>),
}

/// Follow single active children down from `node` as long as they are
/// elements. The chain collapses if it ends in a single line of text.
pub(crate) fn collapse_chain<'a>(
    tree: &'a Tree,
    node: Node,
    context: &RenderContext,
) -> Collapse<'a> {
    let mut elements = Vec::new();
    let mut current = node;
    loop {
        let Some(name) = tree.tag_name(current) else {
            return Collapse::Broken(elements);
        };
        elements.push(current);
        if context.is_omitted_pre(name) {
            return Collapse::Broken(elements);
        }
        let children = active_children(tree, current);
        let [child] = children.as_slice() else {
            return Collapse::Broken(elements);
        };
        match classify(tree, *child) {
            ValueType::Element => current = *child,
            ValueType::Text => {
                return match tree.text_str(*child) {
                    Some(text) if !is_multiline(text) => Collapse::Chain(Chain { elements, text }),
                    _ => Collapse::Broken(elements),
                };
            }
            _ => return Collapse::Broken(elements),
        }
    }
}

/// Render a chain as `headA: headB text`.
pub(crate) fn collapsed_line(tree: &Tree, chain: &Chain, context: &RenderContext) -> String {
    let heads = chain
        .elements
        .iter()
        .filter_map(|node| tree.element(*node))
        .map(|element| render_head(tree, element, context))
        .collect::<Vec<_>>();
    let mut line = heads.join(": ");
    let text = inline_text(chain.text);
    if !text.is_empty() {
        line.push(' ');
        line.push_str(&text);
    }
    line
}
