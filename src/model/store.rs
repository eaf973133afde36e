//! Option store: the ordered item catalogue.
//!
//! The store is rebuilt by the caller whenever its data changes. The engine
//! never keeps a copy between calls; it only remembers keys.

use super::{Item, ItemKey, KeySet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Field used by [`OptionStore::sorted_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Sort by item key.
    Key,
    /// Sort by title text.
    Title,
}

/// Sort direction for [`OptionStore::sorted_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Batch update applied by [`OptionStore::with_updates`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    /// Item to update.
    pub key: ItemKey,
    /// New disabled flag, if changing.
    #[serde(default)]
    pub disabled: Option<bool>,
}

/// Ordered, key-unique catalogue of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionStore {
    items: Vec<Item>,
    index: HashMap<ItemKey, usize>,
}

impl OptionStore {
    /// Build a store, dropping later items whose key was already seen.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut store = Self::default();
        for item in items {
            if store.index.contains_key(&item.key) {
                warn!(key = %item.key, "duplicate item key dropped from option store");
                continue;
            }
            store.index.insert(item.key.clone(), store.items.len());
            store.items.push(item);
        }
        store
    }

    /// All items, catalogue order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up one item by key.
    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.index.get(key).map(|&i| &self.items[i])
    }

    /// True when an item with `key` exists.
    pub fn contains(&self, key: &ItemKey) -> bool {
        self.index.contains_key(key)
    }

    /// Items whose key is in `keys`, in catalogue order.
    pub fn find(&self, keys: &KeySet) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| keys.contains(&item.key))
            .collect()
    }

    /// True iff every key refers to an item of this store.
    pub fn validate_keys<'a>(&self, keys: impl IntoIterator<Item = &'a ItemKey>) -> bool {
        keys.into_iter().all(|k| self.contains(k))
    }

    /// Copy of `keys` without the keys that no longer exist here.
    pub fn retain_known(&self, keys: &KeySet) -> KeySet {
        keys.iter().filter(|k| self.contains(k)).cloned().collect()
    }

    /// Copy of `keys` keeping only keys of enabled items.
    pub fn retain_selectable(&self, keys: &KeySet) -> KeySet {
        keys.iter()
            .filter(|k| self.get(k).is_some_and(Item::is_selectable))
            .cloned()
            .collect()
    }

    /// All disabled items, catalogue order.
    pub fn disabled_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.disabled).collect()
    }

    /// New store with items stably sorted by `key` in `order`.
    pub fn sorted_by(&self, key: SortKey, order: SortOrder) -> OptionStore {
        let mut items = self.items.clone();
        items.sort_by(|a, b| {
            let ord = match key {
                SortKey::Key => compare_keys(&a.key, &b.key),
                SortKey::Title => a.title.cmp(&b.title),
            };
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        OptionStore::new(items)
    }

    /// New store with `updates` applied. Updates for unknown keys are ignored.
    pub fn with_updates(&self, updates: &[ItemUpdate]) -> OptionStore {
        let mut items = self.items.clone();
        for update in updates {
            let Some(&i) = self.index.get(&update.key) else {
                continue;
            };
            if let Some(disabled) = update.disabled {
                items[i].disabled = disabled;
            }
        }
        OptionStore::new(items)
    }
}

impl FromIterator<Item> for OptionStore {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        OptionStore::new(iter)
    }
}

// Integers sort before strings; each kind by natural order.
fn compare_keys(a: &ItemKey, b: &ItemKey) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (ItemKey::Int(x), ItemKey::Int(y)) => x.cmp(y),
        (ItemKey::Str(x), ItemKey::Str(y)) => x.cmp(y),
        (ItemKey::Int(_), ItemKey::Str(_)) => Ordering::Less,
        (ItemKey::Str(_), ItemKey::Int(_)) => Ordering::Greater,
    }
}
