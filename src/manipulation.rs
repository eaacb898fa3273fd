use crate::error::Error;
use crate::name::NameId;
use crate::tree::{Node, Tree};
use crate::value::{Value, ValueType};

/// ## Manipulation
///
/// This maintains a simple structure:
/// - Only documents and elements have children.
/// - A document is always a root: it cannot be appended anywhere.
///
/// Template content is not a child of its template element; it hangs off the
/// element and is set with [`Tree::set_template_content`].
impl Tree {
    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        match self.value_type(parent) {
            ValueType::Document | ValueType::Element => {}
            _ => return Err(Error::InvalidParent(parent)),
        }
        if self.value_type(child) == ValueType::Document {
            return Err(Error::InvalidChild(child));
        }
        Ok(())
    }

    /// Append a child to the end of the children of the given parent.
    ///
    /// If the child was attached elsewhere it is moved.
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        parent
            .get()
            .checked_append(child.get(), self.arena_mut())
            .map_err(|_| Error::InvalidChild(child))
    }

    /// Append a text node to a parent node given text.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let node = self.new_text(text);
        self.append(parent, node)?;
        Ok(node)
    }

    /// Append an element node to a parent node given a name.
    pub fn append_element(&mut self, parent: Node, name_id: NameId) -> Result<Node, Error> {
        let node = self.new_element(name_id);
        self.append(parent, node)?;
        Ok(node)
    }

    /// Append a comment node to a parent node given comment text.
    pub fn append_comment(&mut self, parent: Node, comment: &str) -> Result<Node, Error> {
        let node = self.new_comment(comment);
        self.append(parent, node)?;
        Ok(node)
    }

    /// Attach a document fragment as the content of a template element.
    ///
    /// ```rust
    /// use pugot::{Options, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let template = tree.add_name("template");
    /// let li = tree.add_name("li");
    /// let node = tree.new_element(template);
    /// let content = tree.new_document();
    /// let item = tree.append_element(content, li)?;
    /// tree.append_text(item, "entry")?;
    /// tree.set_template_content(node, content)?;
    ///
    /// assert_eq!(tree.to_pug(node, &Options::default()), "template: li entry");
    /// # Ok::<(), pugot::Error>(())
    /// ```
    pub fn set_template_content(&mut self, template: Node, content: Node) -> Result<(), Error> {
        if self.value_type(content) != ValueType::Document {
            return Err(Error::InvalidParent(content));
        }
        match self.value_mut(template) {
            Value::Element(element) => {
                element.template_content = Some(content);
                Ok(())
            }
            _ => Err(Error::InvalidParent(template)),
        }
    }
}
