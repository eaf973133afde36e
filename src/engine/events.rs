//! Outbound notifications.
//!
//! The controller reports what happened through a [`TransferListener`].
//! `Vec<TransferEvent>` records events, `()` discards them and [`Callbacks`]
//! forwards to closures.

use crate::model::{Direction, ItemKey, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One emitted notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TransferEvent {
    /// Keys moved between partitions.
    #[serde(rename_all = "camelCase")]
    Change {
        /// Target keys after the move.
        target_keys: Vec<ItemKey>,
        /// Direction of the move.
        direction: Direction,
        /// Keys that moved.
        move_keys: Vec<ItemKey>,
    },
    /// Selection changed.
    #[serde(rename_all = "camelCase")]
    SelectChange {
        /// Selected keys in the source partition.
        source_selected_keys: Vec<ItemKey>,
        /// Selected keys in the target partition.
        target_selected_keys: Vec<ItemKey>,
    },
    /// Search text of a side was set.
    Search {
        /// Side searched.
        side: Side,
        /// New search text.
        text: String,
    },
}

/// Receiver of controller notifications. All methods default to no-ops.
pub trait TransferListener {
    /// Fired once per successful move.
    fn on_change(&mut self, _target_keys: &[ItemKey], _direction: Direction, _move_keys: &[ItemKey]) {
    }

    /// Fired after any selection-affecting operation.
    fn on_select_change(&mut self, _source_selected: &[ItemKey], _target_selected: &[ItemKey]) {}

    /// Fired on every search, even when nothing matches.
    fn on_search(&mut self, _side: Side, _text: &str) {}
}

impl TransferListener for () {}

impl TransferListener for Vec<TransferEvent> {
    fn on_change(&mut self, target_keys: &[ItemKey], direction: Direction, move_keys: &[ItemKey]) {
        self.push(TransferEvent::Change {
            target_keys: target_keys.to_vec(),
            direction,
            move_keys: move_keys.to_vec(),
        });
    }

    fn on_select_change(&mut self, source_selected: &[ItemKey], target_selected: &[ItemKey]) {
        self.push(TransferEvent::SelectChange {
            source_selected_keys: source_selected.to_vec(),
            target_selected_keys: target_selected.to_vec(),
        });
    }

    fn on_search(&mut self, side: Side, text: &str) {
        self.push(TransferEvent::Search {
            side,
            text: text.to_string(),
        });
    }
}

type ChangeFn = Box<dyn FnMut(&[ItemKey], Direction, &[ItemKey])>;
type SelectChangeFn = Box<dyn FnMut(&[ItemKey], &[ItemKey])>;
type SearchFn = Box<dyn FnMut(Side, &str)>;

/// Closure-based listener, one optional callback per event.
#[derive(Default)]
pub struct Callbacks {
    on_change: Option<ChangeFn>,
    on_select_change: Option<SelectChangeFn>,
    on_search: Option<SearchFn>,
}

impl Callbacks {
    /// No callbacks registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the move callback.
    pub fn on_change(mut self, f: impl FnMut(&[ItemKey], Direction, &[ItemKey]) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Register the selection callback.
    pub fn on_select_change(mut self, f: impl FnMut(&[ItemKey], &[ItemKey]) + 'static) -> Self {
        self.on_select_change = Some(Box::new(f));
        self
    }

    /// Register the search callback.
    pub fn on_search(mut self, f: impl FnMut(Side, &str) + 'static) -> Self {
        self.on_search = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_select_change", &self.on_select_change.is_some())
            .field("on_search", &self.on_search.is_some())
            .finish()
    }
}

impl TransferListener for Callbacks {
    fn on_change(&mut self, target_keys: &[ItemKey], direction: Direction, move_keys: &[ItemKey]) {
        if let Some(f) = self.on_change.as_mut() {
            f(target_keys, direction, move_keys);
        }
    }

    fn on_select_change(&mut self, source_selected: &[ItemKey], target_selected: &[ItemKey]) {
        if let Some(f) = self.on_select_change.as_mut() {
            f(source_selected, target_selected);
        }
    }

    fn on_search(&mut self, side: Side, text: &str) {
        if let Some(f) = self.on_search.as_mut() {
            f(side, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn recorder_captures_events_in_order() {
        let mut events: Vec<TransferEvent> = Vec::new();
        events.on_search(Side::Source, "x");
        events.on_select_change(&[ItemKey::from("1")], &[]);

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], TransferEvent::Search { side: Side::Source, .. }));
    }

    #[test]
    fn callbacks_forward_to_closures() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut callbacks = Callbacks::new().on_search(move |side, text| {
            sink.borrow_mut().push(format!("{side}:{text}"));
        });

        TransferListener::on_search(&mut callbacks, Side::Target, "abc");
        TransferListener::on_change(&mut callbacks, &[], Direction::ToTarget, &[]);

        assert_eq!(*seen.borrow(), vec!["target:abc".to_string()]);
    }

    #[test]
    fn change_event_serializes_with_camel_case_fields() {
        let event = TransferEvent::Change {
            target_keys: vec![ItemKey::from("1")],
            direction: Direction::ToTarget,
            move_keys: vec![ItemKey::from("1")],
        };
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["event"], "change");
        assert_eq!(json["direction"], "toTarget");
        assert_eq!(json["moveKeys"][0], "1");
    }
}
