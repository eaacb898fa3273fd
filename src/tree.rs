use indextree::{Arena, NodeId};

use crate::name::{NameId, NameLookup};
use crate::value::Value;

pub(crate) type TreeArena = Arena<Value>;

/// A node in the tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Tree` struct owns all node data: one or more parsed documents,
/// fragments and the names they use.
///
/// Converting to Pug only ever borrows a `Tree`; the tree itself is built by
/// [`Tree::parse`] or by hand with the creation and manipulation methods.
///
/// `Tree` is implemented in several sections focusing on different aspects
/// of accessing and manipulating the data.
#[derive(Debug)]
pub struct Tree {
    pub(crate) arena: TreeArena,
    pub(crate) name_lookup: NameLookup,
}

impl Tree {
    /// Create a new, empty `Tree`.
    pub fn new() -> Self {
        Tree {
            arena: TreeArena::new(),
            name_lookup: NameLookup::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &TreeArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut TreeArena {
        &mut self.arena
    }

    /// Look up a name id, adding the name if it's new.
    pub fn add_name(&mut self, name: &str) -> NameId {
        self.name_lookup.get_id_mut(name.to_string())
    }

    /// Look up a name id without adding it.
    ///
    /// Returns [`None`] if the name has never been used in this tree.
    pub fn name(&self, name: &str) -> Option<NameId> {
        self.name_lookup.get_id(name)
    }

    /// The string for a name id.
    pub fn name_str(&self, name_id: NameId) -> &str {
        self.name_lookup.get_value(name_id)
    }

    /// The number of nodes ever allocated in this tree.
    pub fn node_count(&self) -> usize {
        self.arena.count()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
