//! A fixed representation of a tree of nodes.
//!
//! A [`Tree`] is an arena, which makes it awkward to describe a tree as a
//! plain value. The types here describe a document without any dependency on
//! a [`Tree`]; call `build` to create the nodes in one.
//!
//! ```rust
//! use pugot::fixed;
//!
//! let document = fixed::Document {
//!     children: vec![fixed::Content::Element(fixed::Element {
//!         name: "p".to_string(),
//!         attributes: vec![("class".to_string(), "lead".to_string())],
//!         children: vec![fixed::Content::Text("Example".to_string())],
//!     })],
//! };
//!
//! let mut tree = pugot::Tree::new();
//! let root = document.build(&mut tree)?;
//! assert_eq!(tree.to_pug(root, &pugot::Options::default()), "p.lead Example");
//! # Ok::<(), pugot::Error>(())
//! ```

use crate::error::Error;
use crate::tree::{Node, Tree};

/// A fixed representation of a document or fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    /// Top-level content
    pub children: Vec<Content>,
}

/// A fixed representation of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes in order; a repeated name overwrites the earlier value
    pub attributes: Vec<(String, String)>,
    /// Children
    pub children: Vec<Content>,
}

/// A fixed representation of content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    /// A text node
    Text(String),
    /// A comment node
    Comment(String),
    /// An element node
    Element(Element),
}

impl Document {
    /// Create a document node with this content in the tree.
    pub fn build(&self, tree: &mut Tree) -> Result<Node, Error> {
        let document = tree.new_document();
        for child in &self.children {
            let node = child.build(tree)?;
            tree.append(document, node)?;
        }
        Ok(document)
    }
}

impl Element {
    /// Create an element node in the tree.
    pub fn build(&self, tree: &mut Tree) -> Result<Node, Error> {
        let name = tree.add_name(&self.name);
        let node = tree.new_element(name);
        for (name, value) in &self.attributes {
            let name = tree.add_name(name);
            if let Some(element) = tree.element_mut(node) {
                element.set_attribute(name, value.as_str());
            }
        }
        for child in &self.children {
            let child = child.build(tree)?;
            tree.append(node, child)?;
        }
        Ok(node)
    }
}

impl Content {
    fn build(&self, tree: &mut Tree) -> Result<Node, Error> {
        Ok(match self {
            Content::Text(text) => tree.new_text(text),
            Content::Comment(comment) => tree.new_comment(comment),
            Content::Element(element) => element.build(tree)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pug::Options;

    #[test]
    fn test_build() {
        let mut tree = Tree::new();
        let document = Document {
            children: vec![
                Content::Comment(" nav ".to_string()),
                Content::Element(Element {
                    name: "nav".to_string(),
                    attributes: vec![("id".to_string(), "top".to_string())],
                    children: vec![
                        Content::Text("Go ".to_string()),
                        Content::Element(Element {
                            name: "a".to_string(),
                            attributes: vec![],
                            children: vec![Content::Text("home".to_string())],
                        }),
                    ],
                }),
            ],
        };
        let root = document.build(&mut tree).unwrap();
        assert_eq!(
            tree.to_pug(root, &Options::default()),
            "// nav\nnav#top\n  | Go \n  a home"
        );
    }
}
