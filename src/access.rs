use crate::tree::{Node, Tree};

/// ## Read-only access
///
/// Navigation never follows template content: a `<template>` element has no
/// children of its own. Use [`Tree::template_content`] to get at them.
impl Tree {
    /// Get parent node.
    ///
    /// Returns [`None`] if this is a root or the node is unattached.
    ///
    /// ```rust
    /// let mut tree = pugot::Tree::new();
    /// let root = tree.parse("<p>Example</p>").unwrap();
    /// let p = tree.first_child(root).unwrap();
    /// let text = tree.first_child(p).unwrap();
    /// assert_eq!(tree.parent(text), Some(p));
    /// assert_eq!(tree.parent(p), Some(root));
    /// assert_eq!(tree.parent(root), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if there is no next sibling.
    ///
    /// ```rust
    /// let mut tree = pugot::Tree::new();
    /// let root = tree.parse("<p><a></a><b></b></p>").unwrap();
    /// let p = tree.first_child(root).unwrap();
    /// let a = tree.first_child(p).unwrap();
    /// let b = tree.next_sibling(a).unwrap();
    /// assert_eq!(tree.next_sibling(b), None);
    /// assert_eq!(tree.previous_sibling(b), Some(a));
    /// ```
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    ///
    /// Returns [`None`] if there is no previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over the child nodes of this node.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    ///
    /// ```rust
    /// let mut tree = pugot::Tree::new();
    /// let root = tree.parse("<a><b><c></c></b></a>").unwrap();
    /// let a = tree.first_child(root).unwrap();
    /// let b = tree.first_child(a).unwrap();
    /// let c = tree.first_child(b).unwrap();
    ///
    /// let ancestors = tree.ancestors(c).collect::<Vec<_>>();
    /// assert_eq!(ancestors, vec![c, b, a, root]);
    /// ```
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the descendants of this node, including this one, in
    /// document order (pre-order depth-first).
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }
}
