use crate::idmap::{IdIndex, IdMap};

/// An interned tag or attribute name.
///
/// Obtain one with [`Tree::add_name`](crate::Tree::add_name) and turn it back
/// into a string with [`Tree::name_str`](crate::Tree::name_str).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameId(u32);

impl IdIndex<NameId> for NameId {
    fn to_id(index: usize) -> NameId {
        NameId(index as u32)
    }

    fn from_id(id: NameId) -> usize {
        id.0 as usize
    }
}

pub(crate) type NameLookup = IdMap<NameId, String>;
