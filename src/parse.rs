use std::rc::Rc;

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::encoding::decode;
use crate::error::Error;
use crate::tree::{Node, Tree};

// implied by the HTML tree builder around any fragment
const WRAPPERS: &[&str] = &["html", "head", "body"];

fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .get(..needle.len())
        .map_or(false, |start| start.eq_ignore_ascii_case(needle))
}

// Markup that starts, after comments and whitespace, with a doctype or an
// `<html>` tag is a whole document. Anything else is a fragment.
fn is_document(markup: &str) -> bool {
    let mut rest = markup.trim_start();
    while let Some(comment) = rest.strip_prefix("<!--") {
        match comment.find("-->") {
            Some(end) => rest = comment[end + 3..].trim_start(),
            None => return false,
        }
    }
    starts_with_ignore_case(rest, "<!doctype") || starts_with_ignore_case(rest, "<html")
}

// The nodes a fragment consists of, in order. The HTML parser always builds
// `html`, `head` and `body` around them; those are unwrapped again.
fn fragment_handles(document: &Handle) -> Vec<Handle> {
    let mut handles = Vec::new();
    let mut pending = document.children.borrow().iter().rev().cloned().collect::<Vec<_>>();
    while let Some(handle) = pending.pop() {
        match &handle.data {
            NodeData::Element { name, .. } if WRAPPERS.contains(&&*name.local) => {
                pending.extend(handle.children.borrow().iter().rev().cloned());
            }
            NodeData::Doctype { .. } => {}
            _ => handles.push(handle),
        }
    }
    handles
}

fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

impl Tree {
    // text following text becomes one node, as happens when wrappers are
    // unwrapped between two runs of text
    fn append_joined_text(&mut self, parent: Node, text: &str) -> Result<(), Error> {
        if let Some(last) = self.last_child(parent) {
            if let Some(existing) = self.text_mut(last) {
                let mut joined = existing.get().to_string();
                joined.push_str(text);
                existing.set(joined);
                return Ok(());
            }
        }
        self.append_text(parent, text)?;
        Ok(())
    }

    // Copy parsed nodes into the arena below `parent`.
    fn append_handles(&mut self, parent: Node, handles: Vec<Handle>) -> Result<(), Error> {
        let mut stack = handles
            .into_iter()
            .rev()
            .map(|handle| (handle, parent))
            .collect::<Vec<_>>();
        while let Some((handle, parent)) = stack.pop() {
            let target = match &handle.data {
                NodeData::Document => Some(parent),
                NodeData::Doctype { name, .. } => {
                    let doctype = self.new_doctype(name);
                    self.append(parent, doctype)?;
                    None
                }
                NodeData::Text { contents } => {
                    self.append_joined_text(parent, &contents.borrow())?;
                    None
                }
                // `<?...>` arrives as a comment starting with `?`
                NodeData::Comment { contents } if contents.starts_with('?') => None,
                NodeData::Comment { contents } => {
                    self.append_comment(parent, contents)?;
                    None
                }
                NodeData::Element {
                    name,
                    attrs,
                    template_contents,
                    ..
                } => {
                    let name_id = self.add_name(&name.local);
                    let node = self.append_element(parent, name_id)?;
                    for attribute in attrs.borrow().iter() {
                        let name_id = self.add_name(&attribute_name(&attribute.name));
                        if let Some(element) = self.element_mut(node) {
                            // the first of repeated attributes wins
                            if element.get_attribute(name_id).is_none() {
                                element.set_attribute(name_id, attribute.value.to_string());
                            }
                        }
                    }
                    let content = template_contents.borrow().clone();
                    match content {
                        Some(fragment) => {
                            let content = self.new_document();
                            self.set_template_content(node, content)?;
                            stack.push((fragment, content));
                            None
                        }
                        None => Some(node),
                    }
                }
                NodeData::ProcessingInstruction { .. } => None,
            };
            if let Some(target) = target {
                stack.extend(
                    handle
                        .children
                        .borrow()
                        .iter()
                        .rev()
                        .map(|child| (Rc::clone(child), target)),
                );
            }
        }
        Ok(())
    }

    /// Parse HTML into a new document node.
    ///
    /// Parsing follows the HTML standard through `html5ever`, so any input is
    /// accepted: void elements, boolean and unquoted attributes, a stray `<`
    /// in text and unclosed tags all recover the way a browser does. Text and
    /// attribute values have their character references decoded.
    ///
    /// Markup starting with a doctype or an `<html>` tag (comments and
    /// whitespace aside) is a whole document and keeps the `html`, `head` and
    /// `body` elements the parser implies. Other markup is a fragment: its
    /// nodes become the children of the document node, as with `innerHTML`.
    ///
    /// ```rust
    /// use pugot::{Tree, ValueType};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.parse("<!-- note --><p>a<br>b</p>")?;
    /// let children = tree
    ///     .children(root)
    ///     .map(|child| tree.value_type(child))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(children, [ValueType::Comment, ValueType::Element]);
    ///
    /// let p = tree.last_child(root).unwrap();
    /// assert_eq!(tree.children(p).count(), 3);
    /// # Ok::<(), pugot::Error>(())
    /// ```
    pub fn parse(&mut self, markup: &str) -> Result<Node, Error> {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(markup);
        let handles = if is_document(markup) {
            dom.document.children.borrow().clone()
        } else {
            fragment_handles(&dom.document)
        };
        let document = self.new_document();
        self.append_handles(document, handles)?;
        tracing::debug!(
            nodes = self.descendants(document).count(),
            bytes = markup.len(),
            "parsed markup"
        );
        Ok(document)
    }

    /// Parse markup given as bytes.
    ///
    /// The character encoding is detected from a byte order mark or a
    /// declaration in the markup, falling back to UTF-8.
    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<Node, Error> {
        let markup = decode(bytes)?;
        self.parse(&markup)
    }
}
