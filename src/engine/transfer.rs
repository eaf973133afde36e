//! Transfer state controller.
//!
//! `Transfer` owns the only mutable state of the engine: target keys,
//! selected keys (each either owned or caller-controlled) and per-side
//! search text and page numbers. The item catalogue is passed in on every
//! call and never stored.
//!
//! # State Machine
//!
//! Two orthogonal per-side axes, no global mode:
//!
//! - Source side: idle ⇄ searching (search text empty or not)
//! - Target side: idle ⇄ searching
//!
//! # Operations
//!
//! - `toggle_item`, `select_all`: selection changes, emit `on_select_change`
//! - `move_selected`: move the origin side's selection, emit `on_change`
//!   then `on_select_change`; nothing selected means nothing emitted
//! - `search`: set text, reset page to 1, emit `on_search`
//! - `change_page`: clamp into range, no emission
//! - `reset`: restore owned defaults, clear search and pages

use super::events::TransferListener;
use super::filter::{filter, FilterPredicate};
use super::ownership::Ownership;
use super::pagination::{clamp_page, paginate, Page, PaginationConfig};
use super::partition::{partition, side_of, Partition};
use super::selection::{
    clear_side, derive_sides, prune_for_move, select_all_in, selection_summary,
    split_notification, toggle, SelectionSummary,
};
use crate::model::{Direction, Item, ItemKey, KeySet, OptionStore, Side, Sides};
use tracing::{debug, trace};

// ===== Options =====

/// Construction-time configuration.
///
/// `target_keys`/`selected_keys` set to `Some` make that value controlled.
/// The `default_*` values seed uncontrolled state once and are what
/// [`Transfer::reset`] restores.
#[derive(Debug, Clone, Default)]
pub struct TransferOptions {
    /// Controlled target keys.
    pub target_keys: Option<KeySet>,
    /// Initial target keys when uncontrolled.
    pub default_target_keys: KeySet,
    /// Controlled selected keys.
    pub selected_keys: Option<KeySet>,
    /// Initial selected keys when uncontrolled.
    pub default_selected_keys: KeySet,
    /// Page settings for both sides.
    pub pagination: PaginationConfig,
    /// Component-wide disabled flag.
    pub disabled: bool,
    /// Single-list mode: the target list is display-only, so user actions
    /// on it (toggle, select-all, moving back to source) are ignored.
    pub one_way: bool,
    /// Search predicate replacing the default title/description match.
    pub filter: Option<FilterPredicate>,
}

// ===== Per-side state =====

/// Search text and page number of one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideState {
    /// Current search text.
    pub search: String,
    /// Stored 1-based page.
    pub page: usize,
}

impl Default for SideState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

/// Everything a list renderer needs for one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideView<'a> {
    /// Which side.
    pub side: Side,
    /// Current search text.
    pub search: String,
    /// Visible page of the filtered items.
    pub page: Page<'a>,
    /// Selected keys belonging to this side.
    pub selected: KeySet,
    /// Check state over the filtered items.
    pub summary: SelectionSummary,
}

// ===== Transfer =====

/// Dual-list transfer engine.
#[derive(Debug)]
pub struct Transfer<L = ()> {
    target_keys: Ownership<KeySet>,
    selected_keys: Ownership<KeySet>,
    default_target_keys: KeySet,
    default_selected_keys: KeySet,
    sides: Sides<SideState>,
    pagination: PaginationConfig,
    disabled: bool,
    one_way: bool,
    filter: Option<FilterPredicate>,
    listener: L,
}

impl Transfer<()> {
    /// Engine that discards notifications.
    pub fn silent(options: TransferOptions) -> Self {
        Transfer::new(options, ())
    }
}

impl<L: TransferListener> Transfer<L> {
    /// Create an engine reporting to `listener`.
    pub fn new(options: TransferOptions, listener: L) -> Self {
        let TransferOptions {
            target_keys,
            default_target_keys,
            selected_keys,
            default_selected_keys,
            pagination,
            disabled,
            one_way,
            filter,
        } = options;

        Self {
            target_keys: Ownership::new(target_keys, default_target_keys.clone()),
            selected_keys: Ownership::new(selected_keys, default_selected_keys.clone()),
            default_target_keys,
            default_selected_keys,
            sides: Sides::default(),
            pagination,
            disabled,
            one_way,
            filter,
            listener,
        }
    }

    // ----- listener -----

    /// Listener reference.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable listener reference.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the engine and return its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    // ----- plain accessors -----

    /// Component-wide disabled flag.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set the component-wide disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        debug!(disabled, "transfer disabled flag changed");
        self.disabled = disabled;
    }

    /// Single-list mode flag.
    pub fn is_one_way(&self) -> bool {
        self.one_way
    }

    /// Page settings.
    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }

    /// Stored state of one side.
    pub fn side_state(&self, side: Side) -> &SideState {
        &self.sides[side]
    }

    /// True when target keys are caller-controlled.
    pub fn is_target_controlled(&self) -> bool {
        self.target_keys.is_controlled()
    }

    /// True when selected keys are caller-controlled.
    pub fn is_selection_controlled(&self) -> bool {
        self.selected_keys.is_controlled()
    }

    // ----- controlled values -----

    /// Re-apply the caller's controlled target keys (next render).
    pub fn sync_target_keys(&mut self, keys: KeySet) {
        self.target_keys.sync_external(keys);
    }

    /// Re-apply the caller's controlled selected keys (next render).
    pub fn sync_selected_keys(&mut self, keys: KeySet) {
        self.selected_keys.sync_external(keys);
    }

    // ----- derived reads -----

    /// Current target keys, without keys missing from `store`.
    pub fn target_keys(&self, store: &OptionStore) -> KeySet {
        store.retain_known(self.target_keys.resolve())
    }

    /// Current selected keys, without keys missing from `store` or
    /// belonging to disabled items.
    pub fn selected_keys(&self, store: &OptionStore) -> KeySet {
        store.retain_selectable(self.selected_keys.resolve())
    }

    /// Source and target items.
    pub fn partition<'a>(&self, store: &'a OptionStore) -> Partition<'a> {
        partition(store.items(), self.target_keys.resolve())
    }

    /// Items of `side` narrowed by that side's search text.
    pub fn filtered<'a>(&self, store: &'a OptionStore, side: Side) -> Vec<&'a Item> {
        let items = self.partition(store).into_side(side);
        filter(items, &self.sides[side].search, self.filter.as_ref())
    }

    /// Page count of `side` under its current search.
    pub fn total_pages(&self, store: &OptionStore, side: Side) -> usize {
        self.pagination.total_pages(self.filtered(store, side).len())
    }

    /// Full derived view of one side.
    ///
    /// The page is clamped into range even if the stored page went stale
    /// because of an external change (a controlled value or a new
    /// catalogue).
    pub fn view<'a>(&self, store: &'a OptionStore, side: Side) -> SideView<'a> {
        let filtered = self.filtered(store, side);
        let total_pages = self.pagination.total_pages(filtered.len());
        let page_number = clamp_page(self.sides[side].page, total_pages);
        let page = paginate(&filtered, page_number, &self.pagination);

        let selection = self.selected_keys(store);
        let selected = derive_sides(&selection, self.target_keys.resolve())[side].clone();
        let summary = selection_summary(&filtered, &selection);

        trace!(%side, total = page.total, page = page.page, "side view computed");

        SideView {
            side,
            search: self.sides[side].search.clone(),
            page,
            selected,
            summary,
        }
    }

    /// Items in the source partition.
    pub fn source_items<'a>(&self, store: &'a OptionStore) -> Vec<&'a Item> {
        self.partition(store).source
    }

    /// Items in the target partition.
    pub fn target_items<'a>(&self, store: &'a OptionStore) -> Vec<&'a Item> {
        self.partition(store).target
    }

    /// Selected items, catalogue order.
    pub fn selected_items<'a>(&self, store: &'a OptionStore) -> Vec<&'a Item> {
        store.find(self.selected_keys.resolve())
    }

    // ----- selection operations -----

    /// Toggle selection of the item with `key`.
    ///
    /// The side is implied by target membership. No-op when the engine or
    /// the item is disabled, or the key is unknown.
    pub fn toggle_item(&mut self, store: &OptionStore, key: &ItemKey) {
        if self.disabled {
            return;
        }
        let Some(item) = store.get(key) else {
            debug!(%key, "toggle ignored for unknown key");
            return;
        };
        if !item.is_selectable() {
            return;
        }
        if self.one_way && side_of(key, self.target_keys.resolve()) == Side::Target {
            debug!(%key, "toggle ignored: target list is display-only");
            return;
        }

        let next = toggle(&self.selected_keys(store), item);
        debug!(%key, selected = next.contains(key), "item toggled");
        self.commit_selection(store, next);
    }

    /// Select-all toggle over the filtered items of `side`.
    pub fn select_all(&mut self, store: &OptionStore, side: Side) {
        if self.disabled || (self.one_way && side == Side::Target) {
            return;
        }
        let filtered = self.filtered(store, side);
        let next = select_all_in(&filtered, &self.selected_keys(store));
        debug!(%side, visible = filtered.len(), "select all toggled");
        self.commit_selection(store, next);
    }

    /// Replace the whole selection.
    ///
    /// Unknown and disabled keys are dropped. Always emits.
    pub fn set_selected_keys(&mut self, store: &OptionStore, keys: KeySet) {
        let next: KeySet = keys
            .iter()
            .filter(|k| store.get(k).is_some_and(Item::is_selectable))
            .cloned()
            .collect();
        self.commit_selection(store, next);
    }

    /// Deselect everything on `side`. Always emits.
    pub fn clear_selection(&mut self, store: &OptionStore, side: Side) {
        let next = clear_side(
            &self.selected_keys(store),
            self.target_keys.resolve(),
            side,
        );
        self.commit_selection(store, next);
    }

    // ----- move operations -----

    /// Move the selected keys of the origin side of `direction`.
    ///
    /// Returns false (and emits nothing) when nothing was selected there.
    pub fn move_selected(&mut self, store: &OptionStore, direction: Direction) -> bool {
        if self.disabled || (self.one_way && direction == Direction::ToSource) {
            return false;
        }
        let target = self.target_keys(store);
        let move_keys = derive_sides(&self.selected_keys(store), &target)[direction.origin()].clone();
        if move_keys.is_empty() {
            debug!(%direction, "move ignored: nothing selected");
            return false;
        }
        self.apply_move(store, target, direction, move_keys);
        true
    }

    /// Move arbitrary keys, bypassing selection and search visibility.
    ///
    /// Unknown keys and keys already on the destination side are ignored.
    pub fn move_to(&mut self, store: &OptionStore, direction: Direction, keys: &KeySet) -> bool {
        let target = self.target_keys(store);
        let move_keys: KeySet = keys
            .iter()
            .filter(|k| store.contains(k) && side_of(k, &target) == direction.origin())
            .cloned()
            .collect();
        if move_keys.is_empty() {
            debug!(%direction, "move_to ignored: no movable keys");
            return false;
        }
        self.apply_move(store, target, direction, move_keys);
        true
    }

    /// Replace the target key set.
    ///
    /// Reported as `toTarget` with the added keys, or `toSource` with the
    /// removed keys when nothing was added. No change emits nothing.
    pub fn set_target_keys(&mut self, store: &OptionStore, keys: KeySet) {
        let current = self.target_keys(store);
        let next = store.retain_known(&keys);

        let added = next.difference(&current);
        let removed = current.difference(&next);
        let (direction, move_keys) = if !added.is_empty() {
            (Direction::ToTarget, added.clone())
        } else if !removed.is_empty() {
            (Direction::ToSource, removed.clone())
        } else {
            return;
        };

        self.target_keys.propose(next.clone());
        self.listener
            .on_change(&next.to_vec(), direction, &move_keys.to_vec());

        let selection = self.selected_keys(store);
        let pruned = prune_for_move(&selection, &added.union(&removed));
        if pruned != selection {
            self.selected_keys.propose(pruned.clone());
            self.emit_selection(&pruned, &next);
        }
        self.normalize_pages(store);
    }

    // Fixed order: target keys, on_change, selection prune, on_select_change.
    fn apply_move(
        &mut self,
        store: &OptionStore,
        target: KeySet,
        direction: Direction,
        move_keys: KeySet,
    ) {
        let next_target = match direction {
            Direction::ToTarget => target.union(&move_keys),
            Direction::ToSource => target.difference(&move_keys),
        };

        let stored = self.target_keys.propose(next_target.clone());
        debug!(%direction, moved = move_keys.len(), stored, "keys moved");
        self.listener
            .on_change(&next_target.to_vec(), direction, &move_keys.to_vec());

        let pruned = prune_for_move(&self.selected_keys(store), &move_keys);
        self.selected_keys.propose(pruned.clone());
        self.emit_selection(&pruned, &next_target);

        self.normalize_pages(store);
    }

    // ----- search and pages -----

    /// Set the search text of `side` and go back to page 1.
    ///
    /// Selection is untouched: hidden items stay selected.
    pub fn search(&mut self, side: Side, text: impl Into<String>) {
        let text = text.into();
        debug!(%side, text = %text, "search changed");
        let state = &mut self.sides[side];
        state.search = text;
        state.page = 1;
        self.listener.on_search(side, &state.search);
    }

    /// Clear the search text of `side`. Emits `on_search` with `""`.
    pub fn clear_search(&mut self, side: Side) {
        self.search(side, String::new());
    }

    /// Go to `page` on `side`, clamped into `1..=total_pages`.
    pub fn change_page(&mut self, store: &OptionStore, side: Side, page: usize) {
        let total_pages = self.total_pages(store, side);
        let clamped = clamp_page(page, total_pages);
        if clamped != page {
            debug!(%side, requested = page, clamped, "page request clamped");
        }
        self.sides[side].page = clamped;
    }

    /// Restore owned values to their defaults and clear search and pages.
    ///
    /// Controlled values are left to the caller.
    pub fn reset(&mut self) {
        self.target_keys.propose(self.default_target_keys.clone());
        self.selected_keys.propose(self.default_selected_keys.clone());
        self.sides = Sides::default();
        debug!("transfer reset");
    }

    // ----- internals -----

    fn commit_selection(&mut self, store: &OptionStore, next: KeySet) {
        self.selected_keys.propose(next.clone());
        let target = self.target_keys(store);
        self.emit_selection(&next, &target);
    }

    fn emit_selection(&mut self, selection: &KeySet, target: &KeySet) {
        let split = split_notification(selection, target);
        self.listener
            .on_select_change(&split.source_selected_keys, &split.target_selected_keys);
    }

    // Pull stored pages back into range after a partition changed size.
    fn normalize_pages(&mut self, store: &OptionStore) {
        for side in Side::ALL {
            let total_pages = self.total_pages(store, side);
            let page = self.sides[side].page;
            let clamped = clamp_page(page, total_pages);
            if clamped != page {
                trace!(%side, page, clamped, "stored page pulled back into range");
                self.sides[side].page = clamped;
            }
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "transfer_tests.rs"]
mod tests;
