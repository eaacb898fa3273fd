use crate::tree::Tree;
use crate::value::Element;

use super::context::RenderContext;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Can this value follow `#` in Pug?
fn is_shorthand_id(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_name_char)
}

/// Can this class token follow `.` in Pug? Pug needs at least one letter or
/// underscore, and nothing like `:`, `.` or `/`.
fn is_shorthand_class(token: &str) -> bool {
    token.chars().all(is_name_char) && token.chars().any(|c| c.is_ascii_alphabetic() || c == '_')
}

fn quoted(value: &str, quote: char) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push(quote);
    for c in value.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\\' => result.push_str("\\\\"),
            c if c == quote => {
                result.push('\\');
                result.push(c);
            }
            c => result.push(c),
        }
    }
    result.push(quote);
    result
}

/// Accumulates the parts of a head line as attributes are visited.
///
/// Attributes are rendered as they come, except `id` and `class` which are
/// deferred into the `#id.class` prefix. Class tokens that can't be written
/// as shorthand are deferred into a `class` attribute that goes last.
#[derive(Debug)]
struct Head<'a> {
    tag: &'a str,
    id: Option<&'a str>,
    plain_classes: Vec<&'a str>,
    special_classes: Vec<&'a str>,
    attributes: Vec<String>,
    shortened: bool,
}

impl<'a> Head<'a> {
    fn new(tag: &'a str) -> Self {
        Head {
            tag,
            id: None,
            plain_classes: Vec::new(),
            special_classes: Vec::new(),
            attributes: Vec::new(),
            shortened: false,
        }
    }

    fn attribute(&mut self, name: &str, value: &str, context: &RenderContext) {
        // an empty value is what a boolean attribute parses to
        if value.is_empty() {
            self.attributes.push(name.to_string());
        } else {
            self.attributes
                .push(format!("{}={}", name, quoted(value, context.quote)));
        }
    }

    fn id(&mut self, name: &str, value: &'a str, context: &RenderContext) {
        if is_shorthand_id(value) {
            self.id = Some(value);
            self.shortened = true;
        } else {
            self.attribute(name, value, context);
        }
    }

    fn class(&mut self, value: &'a str) {
        for token in value.split_whitespace() {
            if is_shorthand_class(token) {
                self.plain_classes.push(token);
                self.shortened = true;
            } else {
                self.special_classes.push(token);
            }
        }
    }

    fn render(mut self, context: &RenderContext) -> String {
        let mut result = String::new();
        if !(self.shortened && self.tag.eq_ignore_ascii_case("div")) {
            result.push_str(self.tag);
        }
        if let Some(id) = self.id {
            result.push('#');
            result.push_str(id);
        }
        for class in &self.plain_classes {
            result.push('.');
            result.push_str(class);
        }
        if !self.special_classes.is_empty() {
            let classes = self.special_classes.join(" ");
            self.attribute("class", &classes, context);
        }
        if !self.attributes.is_empty() {
            result.push('(');
            result.push_str(&self.attributes.join(context.separator));
            result.push(')');
        }
        result
    }
}

/// Render the head of an element: its tag with `#id.class` shorthand and
/// remaining attributes, e.g. `#app.p-a(class="foo:hover")`.
pub(crate) fn render_head(tree: &Tree, element: &Element, context: &RenderContext) -> String {
    let mut head = Head::new(tree.name_str(element.name()));
    for (name_id, value) in element.attributes() {
        let name = tree.name_str(*name_id);
        if name.eq_ignore_ascii_case("id") {
            head.id(name, value, context);
        } else if name.eq_ignore_ascii_case("class") {
            head.class(value);
        } else {
            head.attribute(name, value, context);
        }
    }
    head.render(context)
}
