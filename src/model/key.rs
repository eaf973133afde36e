//! Item keys and ordered key sets.
//!
//! Keys are compared by value. A string key `"1"` and an integer key `1` are
//! distinct, mirroring strict equality in the host framework.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== ItemKey =====

/// Opaque identifier of an item, unique within an [`OptionStore`](super::OptionStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    /// Integer key.
    Int(i64),
    /// String key.
    Str(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Int(n) => write!(f, "{n}"),
            ItemKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        ItemKey::Str(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        ItemKey::Str(s)
    }
}

impl From<i64> for ItemKey {
    fn from(n: i64) -> Self {
        ItemKey::Int(n)
    }
}

// ===== KeySet =====

/// Insertion-ordered set of keys.
///
/// Membership is what matters to the engine, but the insertion order is kept
/// so that emitted key lists are stable (a key selected first is reported
/// first). Equality compares order too; use [`KeySet::same_members`] for
/// plain set equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySet(IndexSet<ItemKey>);

impl KeySet {
    /// Empty set.
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no key is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership test.
    pub fn contains(&self, key: &ItemKey) -> bool {
        self.0.contains(key)
    }

    /// Insert at the end. Returns false if the key was already present.
    pub fn insert(&mut self, key: ItemKey) -> bool {
        self.0.insert(key)
    }

    /// Remove a key, keeping the order of the rest. Returns false if it was
    /// absent.
    pub fn remove(&mut self, key: &ItemKey) -> bool {
        self.0.shift_remove(key)
    }

    /// Keep only the keys matching `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&ItemKey) -> bool) {
        self.0.retain(|key| keep(key));
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, ItemKey> {
        self.0.iter()
    }

    /// Owned vector of keys, insertion order.
    pub fn to_vec(&self) -> Vec<ItemKey> {
        self.0.iter().cloned().collect()
    }

    /// Union: keys of `self` followed by the keys of `other` not yet present.
    pub fn union(&self, other: &KeySet) -> KeySet {
        let mut out = self.clone();
        out.extend(other.iter().cloned());
        out
    }

    /// Keys of `self` that are not in `other`, order preserved.
    pub fn difference(&self, other: &KeySet) -> KeySet {
        self.0
            .iter()
            .filter(|k| !other.contains(k))
            .cloned()
            .collect()
    }

    /// Same members regardless of order.
    pub fn same_members(&self, other: &KeySet) -> bool {
        self.0 == other.0
    }
}

impl PartialEq for KeySet {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for KeySet {}

impl FromIterator<ItemKey> for KeySet {
    fn from_iter<I: IntoIterator<Item = ItemKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<ItemKey> for KeySet {
    fn extend<I: IntoIterator<Item = ItemKey>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a ItemKey;
    type IntoIter = indexmap::set::Iter<'a, ItemKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for KeySet {
    type Item = ItemKey;
    type IntoIter = indexmap::set::IntoIter<ItemKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<ItemKey>> for KeySet {
    fn from(keys: Vec<ItemKey>) -> Self {
        keys.into_iter().collect()
    }
}

// ===== Tests =====
