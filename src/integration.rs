//! Intent replay.
//!
//! Pure glue between the JSON shell and the engine: a script of [`Intent`]s
//! is applied in order to a recording [`Transfer`], and the result is
//! summarized as a [`ReplayReport`]. No I/O happens here.

use crate::engine::selection::format_count;
use crate::engine::{CheckState, Transfer, TransferEvent, TransferListener};
use crate::model::{Direction, ItemKey, KeySet, OptionStore, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One scripted user or host action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Intent {
    /// Toggle one item's checkbox.
    Toggle {
        /// Item key.
        key: ItemKey,
    },
    /// Header "select all" checkbox of a side.
    SelectAll {
        /// Side clicked.
        side: Side,
    },
    /// Move button.
    Move {
        /// Move direction.
        direction: Direction,
    },
    /// Type into a side's search box.
    Search {
        /// Side searched.
        side: Side,
        /// Search text.
        text: String,
    },
    /// Pager click.
    ChangePage {
        /// Side paged.
        side: Side,
        /// Requested 1-based page.
        page: usize,
    },
    /// Return to defaults.
    Reset,
    /// Imperative: replace the target keys.
    SetTargetKeys {
        /// New target keys.
        keys: KeySet,
    },
    /// Imperative: replace the selection.
    SetSelectedKeys {
        /// New selection.
        keys: KeySet,
    },
    /// Imperative: move specific keys.
    MoveTo {
        /// Move direction.
        direction: Direction,
        /// Keys to move.
        keys: KeySet,
    },
    /// Imperative: clear one side's selection.
    ClearSelection {
        /// Side cleared.
        side: Side,
    },
    /// Imperative: clear one side's search.
    ClearSearch {
        /// Side cleared.
        side: Side,
    },
    /// Toggle the component-wide disabled flag.
    SetDisabled {
        /// New flag value.
        disabled: bool,
    },
    /// Host pushes a new controlled target value.
    ///
    /// Only meaningful when target keys are controlled; an uncontrolled
    /// engine logs and ignores it.
    SyncTargetKeys {
        /// Controlled target keys.
        keys: KeySet,
    },
    /// Host pushes a new controlled selection. Ignored when uncontrolled.
    SyncSelectedKeys {
        /// Controlled selection.
        keys: KeySet,
    },
}

/// Serializable state of one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideSnapshot {
    /// Current search text.
    pub search: String,
    /// Current page (clamped).
    pub page: usize,
    /// Items after search.
    pub total: usize,
    /// Page count.
    pub total_pages: usize,
    /// Keys on the current page, in catalogue order.
    pub visible: Vec<ItemKey>,
    /// Selected keys belonging to this side.
    pub selected: Vec<ItemKey>,
    /// Header counter text.
    pub count_label: String,
    /// Header checkbox state.
    pub check_state: CheckState,
}

/// Serializable state of the whole component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Effective target keys.
    pub target_keys: Vec<ItemKey>,
    /// Effective selection.
    pub selected_keys: Vec<ItemKey>,
    /// Component-wide disabled flag.
    pub disabled: bool,
    /// Source side.
    pub source: SideSnapshot,
    /// Target side.
    pub target: SideSnapshot,
}

/// Result of a replay: every emitted event plus the final state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Events in emission order.
    pub events: Vec<TransferEvent>,
    /// State after the last intent.
    pub snapshot: Snapshot,
}

/// Apply one intent.
pub fn apply_intent<L: TransferListener>(
    transfer: &mut Transfer<L>,
    store: &OptionStore,
    intent: Intent,
) {
    debug!(?intent, "applying intent");
    match intent {
        Intent::Toggle { key } => transfer.toggle_item(store, &key),
        Intent::SelectAll { side } => transfer.select_all(store, side),
        Intent::Move { direction } => {
            transfer.move_selected(store, direction);
        }
        Intent::Search { side, text } => transfer.search(side, text),
        Intent::ChangePage { side, page } => transfer.change_page(store, side, page),
        Intent::Reset => transfer.reset(),
        Intent::SetTargetKeys { keys } => transfer.set_target_keys(store, keys),
        Intent::SetSelectedKeys { keys } => transfer.set_selected_keys(store, keys),
        Intent::MoveTo { direction, keys } => {
            transfer.move_to(store, direction, &keys);
        }
        Intent::ClearSelection { side } => transfer.clear_selection(store, side),
        Intent::ClearSearch { side } => transfer.clear_search(side),
        Intent::SetDisabled { disabled } => transfer.set_disabled(disabled),
        Intent::SyncTargetKeys { keys } => transfer.sync_target_keys(keys),
        Intent::SyncSelectedKeys { keys } => transfer.sync_selected_keys(keys),
    }
}

/// Capture the current state.
pub fn snapshot<L: TransferListener>(transfer: &Transfer<L>, store: &OptionStore) -> Snapshot {
    let side_snapshot = |side: Side| {
        let view = transfer.view(store, side);
        SideSnapshot {
            search: view.search,
            page: view.page.page,
            total: view.page.total,
            total_pages: view.page.total_pages,
            visible: view.page.items.iter().map(|item| item.key.clone()).collect(),
            selected: view.selected.to_vec(),
            count_label: format_count(view.summary.selected_count, view.summary.total_count),
            check_state: view.summary.state,
        }
    };

    Snapshot {
        target_keys: transfer.target_keys(store).to_vec(),
        selected_keys: transfer.selected_keys(store).to_vec(),
        disabled: transfer.is_disabled(),
        source: side_snapshot(Side::Source),
        target: side_snapshot(Side::Target),
    }
}

/// Apply `intents` in order and report what happened.
///
/// Events already recorded on the listener before the call are discarded.
pub fn replay(
    transfer: &mut Transfer<Vec<TransferEvent>>,
    store: &OptionStore,
    intents: impl IntoIterator<Item = Intent>,
) -> ReplayReport {
    transfer.listener_mut().clear();

    for intent in intents {
        apply_intent(transfer, store, intent);
    }

    let events = std::mem::take(transfer.listener_mut());
    debug!(events = events.len(), "replay finished");

    ReplayReport {
        events,
        snapshot: snapshot(transfer, store),
    }
}

#[cfg(test)]
#[path = "integration_tests.rs"]
mod tests;
