//! Partition engine: split the catalogue into source and target items.

use crate::model::{Item, ItemKey, KeySet, Side};

/// Items split by target-key membership, catalogue order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Items not in the target key set.
    pub source: Vec<&'a Item>,
    /// Items in the target key set.
    pub target: Vec<&'a Item>,
}

impl<'a> Partition<'a> {
    /// Items of one side.
    pub fn side(&self, side: Side) -> &[&'a Item] {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    /// Consume and keep only one side.
    pub fn into_side(self, side: Side) -> Vec<&'a Item> {
        match side {
            Side::Source => self.source,
            Side::Target => self.target,
        }
    }
}

/// Split `items` by membership of their key in `target_keys`.
///
/// Unknown keys in `target_keys` contribute nothing.
pub fn partition<'a>(items: &'a [Item], target_keys: &KeySet) -> Partition<'a> {
    let (target, source): (Vec<&Item>, Vec<&Item>) =
        items.iter().partition(|item| target_keys.contains(&item.key));
    Partition { source, target }
}

/// Which side an item with `key` belongs to.
pub fn side_of(key: &ItemKey, target_keys: &KeySet) -> Side {
    if target_keys.contains(key) {
        Side::Target
    } else {
        Side::Source
    }
}
