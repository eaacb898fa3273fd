use crate::tree::Node;

/// Errors raised while building or parsing a tree.
///
/// Parsing markup never fails; HTML recovers from any input. Building a
/// tree by hand or decoding bytes can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node cannot hold children: only documents and elements can.
    #[error("node {0:?} cannot have children")]
    InvalidParent(Node),
    /// A document node cannot be placed inside another node.
    #[error("node {0:?} is a document and cannot be appended")]
    InvalidChild(Node),
    /// The byte input declares or looks like an encoding we cannot decode.
    #[error("unknown character encoding")]
    UnknownEncoding,
}
