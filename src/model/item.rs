//! Selectable item type.

use super::ItemKey;
use serde::{Deserialize, Serialize};

/// One selectable entry of the catalogue.
///
/// `title` and `description` are display payloads; the engine only reads them
/// through the default search predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable unique identifier.
    pub key: ItemKey,
    /// Primary display text.
    pub title: String,
    /// Secondary display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled items never enter the selection set.
    #[serde(default)]
    pub disabled: bool,
}

impl Item {
    /// Enabled item with a title and no description.
    pub fn new(key: impl Into<ItemKey>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            disabled: false,
        }
    }

    /// Builder: attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// True when the item may be selected.
    pub fn is_selectable(&self) -> bool {
        !self.disabled
    }
}
