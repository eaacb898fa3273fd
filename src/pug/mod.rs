//! Conversion of trees to Pug.
//!
//! The walker visits a tree depth-first and writes one or more lines per
//! node. Elements get a head (`tag#id.class(attr="value")`), chains of
//! single children collapse onto one `:`-joined line, and text becomes
//! inline text, piped lines or a dot block.

mod classify;
mod collapse;
mod context;
mod options;
mod shorthand;
mod text;
mod walker;

pub use options::{Options, SiblingSpacing};

use crate::error::Error;
use crate::tree::Tree;

/// Convert HTML markup to Pug.
///
/// Absent or blank markup converts to an empty string. Markup is parsed the
/// way a browser parses it, see [`Tree::parse`], so malformed HTML converts
/// too.
///
/// ```rust
/// use pugot::{convert, Options};
///
/// let pug = convert(r#"<div class="p-a foo:hover">Hi</div>"#, &Options::default())?;
/// assert_eq!(pug, r#".p-a(class="foo:hover") Hi"#);
///
/// assert_eq!(convert(None::<&str>, &Options::default())?, "");
/// # Ok::<(), pugot::Error>(())
/// ```
pub fn convert<'a>(
    markup: impl Into<Option<&'a str>>,
    options: &Options,
) -> Result<String, Error> {
    let markup = match markup.into() {
        Some(markup) if !markup.trim().is_empty() => markup,
        _ => return Ok(String::new()),
    };
    let mut tree = Tree::new();
    let root = tree.parse(markup)?;
    Ok(tree.to_pug(root, options))
}
