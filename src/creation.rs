use crate::name::NameId;
use crate::tree::{Node, Tree};
use crate::value::{Comment, DocumentType, Element, Text, Value};

/// ## Creation
///
/// Nodes are created unattached; use the manipulation methods such as
/// [`Tree::append`] to put them into a tree.
impl Tree {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(value))
    }

    /// Create a new document node.
    ///
    /// This also serves as the content fragment of a `<template>`.
    pub fn new_document(&mut self) -> Node {
        self.new_node(Value::Document)
    }

    /// Create a new, unattached element node given a name id.
    ///
    /// ```rust
    /// use pugot::{Options, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let div = tree.add_name("div");
    /// let class = tree.add_name("class");
    /// let node = tree.new_element(div);
    /// tree.element_mut(node).unwrap().set_attribute(class, "card");
    ///
    /// assert_eq!(tree.to_pug(node, &Options::default()), ".card");
    /// ```
    pub fn new_element(&mut self, name_id: NameId) -> Node {
        self.new_node(Value::Element(Element::new(name_id)))
    }

    /// Create a new, unattached text node.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string())))
    }

    /// Create a new, unattached comment node.
    pub fn new_comment(&mut self, comment: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(comment.to_string())))
    }

    /// Create a new, unattached document type node.
    pub fn new_doctype(&mut self, declaration: &str) -> Node {
        self.new_node(Value::DocumentType(DocumentType::new(
            declaration.to_string(),
        )))
    }
}
