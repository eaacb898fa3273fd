//! Convert HTML into [Pug](https://pugjs.org) templates.
//!
//! Markup is parsed into a [`Tree`], an arena of nodes, which is then
//! written out as indentation-based Pug: closing tags disappear, `id` and
//! `class` attributes become `#id.class` shorthand, and chains of elements
//! that wrap a single child collapse onto one line.
//!
//! ```rust
//! use pugot::{convert, Options};
//!
//! let html = r#"<div id="app"><span>Hello World</span></div>"#;
//! assert_eq!(convert(html, &Options::default())?, "#app: span Hello World");
//!
//! let options = Options {
//!     collapse: false,
//!     ..Default::default()
//! };
//! assert_eq!(convert(html, &options)?, "#app\n  span Hello World");
//! # Ok::<(), pugot::Error>(())
//! ```
//!
//! When you need more control, parse into a [`Tree`] yourself and call
//! [`Tree::to_pug`] on any node in it. Trees can also be built by hand with
//! the creation and manipulation methods on [`Tree`].
#![forbid(unsafe_code)]

mod access;
mod creation;
mod encoding;
mod error;
mod idmap;
mod manipulation;
mod name;
mod parse;
mod pug;
mod tree;
mod value;
mod valueaccess;

pub mod fixed;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use error::Error;
pub use name::NameId;
pub use pug::{convert, Options, SiblingSpacing};
pub use tree::{Node, Tree};
pub use value::{Attributes, Comment, DocumentType, Element, Text, Value, ValueType};
