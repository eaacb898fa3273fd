//! Proptest support for pugot
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module generates arbitrary HTML-like documents
//! as [`fixed`](crate::fixed) values, which you turn into nodes with
//! `build`.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pugot = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::{Content, Document, Element};

// no preserve tags, so every line is indented by whole levels
const ELEMENT_NAMES: &[&str] = &["div", "span", "p", "ul", "li", "a", "DIV"];
const ATTRIBUTE_NAMES: &[&str] = &["id", "class", "title", "data-x", "href"];
const CLASS_TOKENS: &[&str] = &["a", "p-a", "foo:hover", "p-1.5", "w-1/2", "_x", "12"];
const TEXT: &str = "[a-z \n\t|]{0,20}";
const ATTRIBUTE_VALUE: &str = "[a-z0-9 :./\"'\\\\-]{0,10}";

fn arb_class() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(CLASS_TOKENS), 0..4)
        .prop_map(|tokens| tokens.join(" "))
}

fn arb_attribute() -> impl Strategy<Value = (String, String)> {
    prop::sample::select(ATTRIBUTE_NAMES).prop_flat_map(|name| {
        let value = if name == "class" {
            arb_class().boxed()
        } else {
            ATTRIBUTE_VALUE.boxed()
        };
        value.prop_map(move |value| (name.to_string(), value))
    })
}

fn unduplicate_attributes(attributes: &[(String, String)]) -> Vec<(String, String)> {
    let mut seen = HashSet::default();
    attributes
        .iter()
        .filter(|(name, _)| seen.insert(name.clone()))
        .cloned()
        .collect()
}

fn element(name: &str, attributes: &[(String, String)], children: Vec<Content>) -> Element {
    Element {
        name: name.to_string(),
        attributes: unduplicate_attributes(attributes),
        children,
    }
}

fn arb_content() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        TEXT.prop_map(Content::Text),
        TEXT.prop_map(Content::Comment),
    ];

    leaf.prop_recursive(
        6,   // levels deep
        128, // maximum size of 128 nodes
        6,   // up to 6 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::collection::vec(arb_attribute(), 0..4),
                prop::collection::vec(inner, 0..6),
            )
                .prop_map(|(name, attributes, children)| {
                    Content::Element(element(name, &attributes, children))
                })
        },
    )
}

/// Generate a random element with arbitrary content.
pub fn arb_element() -> impl Strategy<Value = Element> {
    (
        prop::sample::select(ELEMENT_NAMES),
        prop::collection::vec(arb_attribute(), 0..4),
        prop::collection::vec(arb_content(), 0..6),
    )
        .prop_map(|(name, attributes, children)| element(name, &attributes, children))
}

/// Generate a random document.
///
/// This produces a value that can be turned into a node using its `build`
/// method.
///
/// Example:
///
/// ```notrust
/// use pugot::proptest::arb_document;
/// use pugot::{Options, Tree};
///
/// proptest! {
///   #[test]
///   fn test_to_pug_is_deterministic(document in arb_document()) {
///     let mut tree = Tree::new();
///     let root = document.build(&mut tree).unwrap();
///     let options = Options::default();
///     prop_assert_eq!(tree.to_pug(root, &options), tree.to_pug(root, &options));
///   }
/// }
/// ```
pub fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(arb_content(), 0..6).prop_map(|children| Document { children })
}
