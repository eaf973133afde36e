//! Selection coordinator.
//!
//! One selection set spans both sides. These functions are pure: each takes
//! the current set and returns the next one, leaving storage and event
//! emission to the controller.

use super::partition::side_of;
use crate::model::{Item, ItemKey, KeySet, Side, Sides};
use serde::{Deserialize, Serialize};

// ===== Transitions =====

/// Flip membership of `item`. Disabled items leave the set unchanged.
pub fn toggle(selection: &KeySet, item: &Item) -> KeySet {
    let mut next = selection.clone();
    if !item.is_selectable() {
        return next;
    }
    if !next.remove(&item.key) {
        next.insert(item.key.clone());
    }
    next
}

/// Select-all as a toggle over the enabled items of `partition_items`.
///
/// If every enabled item is already selected they are all deselected;
/// otherwise the missing ones are added. Disabled items are never added.
pub fn select_all_in(partition_items: &[&Item], selection: &KeySet) -> KeySet {
    let enabled: KeySet = partition_items
        .iter()
        .filter(|item| item.is_selectable())
        .map(|item| item.key.clone())
        .collect();

    let all_selected = enabled.iter().all(|key| selection.contains(key));

    let mut next = selection.clone();
    if all_selected {
        next.retain(|key| !enabled.contains(key));
    } else {
        next.extend(enabled);
    }
    next
}

/// Remove every key of `moved` from `selection`.
pub fn prune_for_move(selection: &KeySet, moved: &KeySet) -> KeySet {
    selection.difference(moved)
}

/// Remove the keys selected on `side`.
pub fn clear_side(selection: &KeySet, target_keys: &KeySet, side: Side) -> KeySet {
    let mut next = selection.clone();
    next.retain(|key| side_of(key, target_keys) != side);
    next
}

// ===== Derived views =====

/// Split the selection by the side each key currently belongs to.
pub fn derive_sides(selection: &KeySet, target_keys: &KeySet) -> Sides<KeySet> {
    let mut sides: Sides<KeySet> = Sides::default();
    for key in selection {
        sides[side_of(key, target_keys)].insert(key.clone());
    }
    sides
}

/// Two-array selection shape passed to `on_select_change`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSplit {
    /// Selected keys currently in the source partition.
    pub source_selected_keys: Vec<ItemKey>,
    /// Selected keys currently in the target partition.
    pub target_selected_keys: Vec<ItemKey>,
}

/// External notification shape of the selection.
pub fn split_notification(selection: &KeySet, target_keys: &KeySet) -> SelectionSplit {
    let sides = derive_sides(selection, target_keys);
    SelectionSplit {
        source_selected_keys: sides.source.to_vec(),
        target_selected_keys: sides.target.to_vec(),
    }
}

// ===== Check state =====

/// Tri-state of a side's "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckState {
    /// Every enabled item is selected (and there is at least one).
    All,
    /// Some but not all enabled items are selected.
    Partial,
    /// No enabled item is selected.
    None,
}

/// Selection counts over a list of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    /// Selected enabled items.
    pub selected_count: usize,
    /// Enabled items.
    pub total_count: usize,
    /// Derived tri-state.
    pub state: CheckState,
}

/// Count selected enabled items of `items`.
pub fn selection_summary(items: &[&Item], selection: &KeySet) -> SelectionSummary {
    let enabled = items.iter().filter(|item| item.is_selectable());
    let (total_count, selected_count) = enabled.fold((0, 0), |(total, selected), item| {
        (total + 1, selected + usize::from(selection.contains(&item.key)))
    });

    let state = if total_count > 0 && selected_count == total_count {
        CheckState::All
    } else if selected_count == 0 {
        CheckState::None
    } else {
        CheckState::Partial
    };

    SelectionSummary {
        selected_count,
        total_count,
        state,
    }
}

/// Header counter text, e.g. `"2 / 5"`.
pub fn format_count(count: usize, total: usize) -> String {
    format!("{count} / {total}")
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
