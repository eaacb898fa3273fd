use crate::name::NameId;
use crate::tree::Node;

/// The type of a node in the tree.
///
/// Access it using [`Value::value_type`] or
/// [`Tree::value_type`](crate::Tree::value_type).
///
/// Use it if you only care about the kind of a node and don't need to match
/// on its payload.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document or document fragment that holds everything else.
    Document,
    /// Element; it has a name and attributes.
    Element,
    /// Text.
    Text,
    /// Comment.
    Comment,
    /// Document type declaration.
    DocumentType,
}

/// A node value.
///
/// Access it using [`Tree::value`](crate::Tree::value) or mutably using
/// [`Tree::value_mut`](crate::Tree::value_mut).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Document or document fragment. It has no payload of its own.
    Document,
    /// Element; it has a name, attributes and possibly template content.
    Element(Element),
    /// Text, kept as written in the source.
    Text(Text),
    /// Comment.
    Comment(Comment),
    /// Document type declaration, such as `<!DOCTYPE html>`.
    DocumentType(DocumentType),
}

impl Value {
    /// Returns the type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Document => ValueType::Document,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
            Value::DocumentType(_) => ValueType::DocumentType,
        }
    }
}

/// Attributes in source order.
pub type Attributes = Vec<(NameId, String)>;

/// Element value.
///
/// Example: `<div>` or `<a href="/">`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name_id: NameId,
    pub(crate) attributes: Attributes,
    pub(crate) template_content: Option<Node>,
}

impl Element {
    pub(crate) fn new(name_id: NameId) -> Self {
        Element {
            name_id,
            attributes: Attributes::new(),
            template_content: None,
        }
    }

    /// The name of the element.
    pub fn name(&self) -> NameId {
        self.name_id
    }

    /// The attributes of the element, in source order.
    ///
    /// ```rust
    /// use pugot::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.parse(r#"<a href="/" title="home"/>"#)?;
    /// let a = tree.first_child(root).unwrap();
    /// let element = tree.element(a).unwrap();
    /// let names = element
    ///     .attributes()
    ///     .iter()
    ///     .map(|(name, _)| tree.name_str(*name))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(names, ["href", "title"]);
    /// # Ok::<(), pugot::Error>(())
    /// ```
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name_id: NameId) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| *name == name_id)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute value.
    ///
    /// An existing attribute keeps its position; a new one goes last.
    pub fn set_attribute<S: Into<String>>(&mut self, name_id: NameId, value: S) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(name, _)| *name == name_id) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name_id, value)),
        }
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, name_id: NameId) {
        self.attributes.retain(|(name, _)| *name != name_id);
    }

    /// The disconnected content fragment of a `<template>` element, if any.
    pub fn template_content(&self) -> Option<Node> {
        self.template_content
    }
}

/// Text value.
///
/// Example: `Bar` in `<foo>Bar</foo>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// Comment value.
///
/// Example: `<!-- foo -->`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the comment text.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// Document type declaration value.
///
/// Only the text between `<!DOCTYPE` and `>` is kept; it isn't reproduced
/// in Pug output, which always says `doctype html`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentType {
    pub(crate) declaration: String,
}

impl DocumentType {
    pub(crate) fn new(declaration: String) -> Self {
        DocumentType { declaration }
    }

    /// The declaration text, e.g. `html`.
    pub fn get(&self) -> &str {
        &self.declaration
    }
}
