use ahash::{HashSet, HashSetExt};

use crate::tree::{Node, Tree};
use crate::value::{Element, Value};

use super::classify::{active_children, is_multiline, single_text_child};
use super::collapse::{collapse_chain, collapsed_line, Collapse};
use super::context::RenderContext;
use super::options::Options;
use super::shorthand::render_head;
use super::text::{comment_lines, format_text, inline_text, piped_lines, Adjacent, Marker};

/// What rendering a single node produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emitted {
    Lines(usize),
    /// The node has no line of its own.
    Skipped,
}

// What remains to be done below a node once its own lines are out.
enum Subtree {
    Done,
    Descend { children: Vec<Node>, depth: usize },
}

struct Walker<'a> {
    tree: &'a Tree,
    context: RenderContext,
    lines: Vec<String>,
    // elements known not to collapse, found on an earlier broken chain
    broken: HashSet<Node>,
}

impl<'a> Walker<'a> {
    fn new(tree: &'a Tree, options: &Options) -> Self {
        Walker {
            tree,
            context: RenderContext::new(options),
            lines: Vec::new(),
            broken: HashSet::new(),
        }
    }

    fn push(&mut self, lines: Vec<String>) -> Emitted {
        if lines.is_empty() {
            return Emitted::Skipped;
        }
        let count = lines.len();
        self.lines.extend(lines);
        Emitted::Lines(count)
    }

    fn walk(&mut self, root: Node) {
        // depth-first, children pushed in reverse so they pop in order
        let mut stack = vec![(root, 0)];
        while let Some((node, depth)) = stack.pop() {
            let (emitted, subtree) = self.render(node, depth);
            match emitted {
                Emitted::Lines(count) => tracing::trace!(?node, depth, count, "emitted"),
                Emitted::Skipped => tracing::trace!(?node, depth, "no lines for node"),
            }
            if let Subtree::Descend { children, depth } = subtree {
                stack.extend(children.into_iter().rev().map(|child| (child, depth)));
            }
        }
    }

    fn render(&mut self, node: Node, depth: usize) -> (Emitted, Subtree) {
        let tree = self.tree;
        match tree.value(node) {
            Value::Document => {
                let children = active_children(tree, node);
                (Emitted::Skipped, Subtree::Descend { children, depth })
            }
            Value::DocumentType(_) => {
                let line = format!("{}doctype html", self.context.indent(depth));
                (self.push(vec![line]), Subtree::Done)
            }
            Value::Text(text) => {
                let adjacent = Adjacent {
                    before: tree
                        .previous_sibling(node)
                        .map_or(false, |sibling| tree.is_element(sibling)),
                    after: tree
                        .next_sibling(node)
                        .map_or(false, |sibling| tree.is_element(sibling)),
                };
                let lines = piped_lines(
                    text.get(),
                    &self.context.indent(depth),
                    adjacent,
                    self.context.sibling_spacing,
                );
                (self.push(lines), Subtree::Done)
            }
            Value::Comment(comment) => {
                let lines = comment_lines(
                    comment.get(),
                    &self.context.indent(depth),
                    &self.context.indent(depth + 1),
                );
                (self.push(lines), Subtree::Done)
            }
            Value::Element(element) => self.element(node, element, depth),
        }
    }

    fn element(&mut self, node: Node, element: &Element, depth: usize) -> (Emitted, Subtree) {
        let tree = self.tree;
        let indent = self.context.indent(depth);
        let name = tree.name_str(element.name());
        let head = render_head(tree, element, &self.context);

        if self.context.is_omitted_pre(name) {
            let lines = vec![
                format!("{}{}", indent, head),
                format!("{}//- content omitted", self.context.indent(depth + 1)),
            ];
            return (self.push(lines), Subtree::Done);
        }

        if self.context.collapse && !self.broken.contains(&node) {
            match collapse_chain(tree, node, &self.context) {
                Collapse::Chain(chain) => {
                    tracing::trace!(?node, "collapsed");
                    let line = format!("{}{}", indent, collapsed_line(tree, &chain, &self.context));
                    return (self.push(vec![line]), Subtree::Done);
                }
                Collapse::Broken(elements) => self.broken.extend(elements),
            }
        }

        let children = active_children(tree, node);
        if let Some(text) = single_text_child(tree, &children) {
            let lines = if !is_multiline(text) {
                vec![format!("{}{} {}", indent, head, inline_text(text))]
            } else if self.context.is_preserve_tag(name) {
                let mut lines = vec![format!("{}{}.", indent, head)];
                lines.extend(format_text(
                    text,
                    &self.context.indent(depth + 1),
                    Marker::Bare,
                    true,
                ));
                lines
            } else {
                let mut lines = vec![format!("{}{}", indent, head)];
                lines.extend(format_text(
                    text,
                    &self.context.indent(depth + 1),
                    Marker::Pipe,
                    false,
                ));
                lines
            };
            return (self.push(lines), Subtree::Done);
        }

        let emitted = self.push(vec![format!("{}{}", indent, head)]);
        (
            emitted,
            Subtree::Descend {
                children,
                depth: depth + 1,
            },
        )
    }
}

impl Tree {
    /// Convert a node and everything below it to Pug.
    ///
    /// A document renders its children at the outermost level; any other
    /// node renders itself there. Lines are joined with `\n`, without a
    /// trailing newline.
    ///
    /// ```rust
    /// use pugot::{Options, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.parse(r#"<div id="app"><p>Hello</p><p>World</p></div>"#)?;
    /// assert_eq!(
    ///     tree.to_pug(root, &Options::default()),
    ///     "#app\n  p Hello\n  p World"
    /// );
    /// # Ok::<(), pugot::Error>(())
    /// ```
    pub fn to_pug(&self, node: Node, options: &Options) -> String {
        let mut walker = Walker::new(self, options);
        walker.walk(node);
        tracing::debug!(lines = walker.lines.len(), "converted to pug");
        walker.lines.join("\n")
    }
}
