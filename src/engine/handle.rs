//! Imperative control surface.
//!
//! A [`TransferHandle`] binds an engine to the catalogue of the current
//! render. Every method forwards to the same [`Transfer`] operation the event
//! handlers use, so both paths share one implementation.

use super::events::TransferListener;
use super::transfer::Transfer;
use crate::model::{Direction, Item, KeySet, OptionStore, Side};

/// Engine plus catalogue, borrowed for the duration of a call sequence.
#[derive(Debug)]
pub struct TransferHandle<'a, L> {
    engine: &'a mut Transfer<L>,
    store: &'a OptionStore,
}

impl<L: TransferListener> Transfer<L> {
    /// Imperative handle over `store`.
    pub fn handle<'a>(&'a mut self, store: &'a OptionStore) -> TransferHandle<'a, L> {
        TransferHandle {
            engine: self,
            store,
        }
    }
}

impl<'a, L: TransferListener> TransferHandle<'a, L> {
    /// Catalogue the handle reads from.
    pub fn data_source(&self) -> &'a OptionStore {
        self.store
    }

    /// Current target keys.
    pub fn get_target_keys(&self) -> KeySet {
        self.engine.target_keys(self.store)
    }

    /// Replace the target keys, emitting `on_change`.
    pub fn set_target_keys(&mut self, keys: KeySet) {
        self.engine.set_target_keys(self.store, keys);
    }

    /// Current selected keys.
    pub fn get_selected_keys(&self) -> KeySet {
        self.engine.selected_keys(self.store)
    }

    /// Replace the selected keys, emitting `on_select_change`.
    pub fn set_selected_keys(&mut self, keys: KeySet) {
        self.engine.set_selected_keys(self.store, keys);
    }

    /// Move `keys` regardless of selection or search visibility.
    pub fn move_to(&mut self, direction: Direction, keys: &KeySet) -> bool {
        self.engine.move_to(self.store, direction, keys)
    }

    /// Select-all toggle over the filtered items of `side`.
    pub fn select_all_in_side(&mut self, side: Side) {
        self.engine.select_all(self.store, side);
    }

    /// Deselect everything on `side`.
    pub fn clear_selection_in_side(&mut self, side: Side) {
        self.engine.clear_selection(self.store, side);
    }

    /// Set the search text of `side`.
    pub fn search(&mut self, side: Side, text: impl Into<String>) {
        self.engine.search(side, text);
    }

    /// Clear the search text of `side`.
    pub fn clear_search(&mut self, side: Side) {
        self.engine.clear_search(side);
    }

    /// Disable user interactions.
    pub fn disable(&mut self) {
        self.engine.set_disabled(true);
    }

    /// Re-enable user interactions.
    pub fn enable(&mut self) {
        self.engine.set_disabled(false);
    }

    /// Restore defaults (owned values only) and clear search and pages.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Items in the source partition.
    pub fn get_source_items(&self) -> Vec<&'a Item> {
        self.engine.source_items(self.store)
    }

    /// Items in the target partition.
    pub fn get_target_items(&self) -> Vec<&'a Item> {
        self.engine.target_items(self.store)
    }

    /// Selected items, catalogue order.
    pub fn get_selected_items(&self) -> Vec<&'a Item> {
        self.engine.selected_items(self.store)
    }
}
