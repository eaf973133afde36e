//! Filter engine: per-side text search.
//!
//! Performs case-insensitive substring matching against the title and the
//! description. A caller-supplied predicate replaces the default match
//! entirely. Disabled items are matched like any other item.

use crate::model::Item;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied search predicate `(query, item) -> matches`.
///
/// Panics raised by the predicate are not caught by the engine.
#[derive(Clone)]
pub struct FilterPredicate(Arc<dyn Fn(&str, &Item) -> bool + Send + Sync>);

impl FilterPredicate {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&str, &Item) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Evaluate the predicate.
    pub fn matches(&self, query: &str, item: &Item) -> bool {
        (self.0)(query, item)
    }
}

impl fmt::Debug for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FilterPredicate(..)")
    }
}

/// Default predicate: case-insensitive substring of title or description.
pub fn default_matches(query: &str, item: &Item) -> bool {
    let query_lower = query.to_lowercase();
    matches_lowered(&query_lower, item)
}

fn matches_lowered(query_lower: &str, item: &Item) -> bool {
    item.title.to_lowercase().contains(query_lower)
        || item
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query_lower))
}

/// Narrow `items` to those matching `query`.
///
/// An empty query returns the input unchanged.
pub fn filter<'a>(
    items: Vec<&'a Item>,
    query: &str,
    predicate: Option<&FilterPredicate>,
) -> Vec<&'a Item> {
    if query.is_empty() {
        return items;
    }

    match predicate {
        Some(predicate) => items
            .into_iter()
            .filter(|item| predicate.matches(query, item))
            .collect(),
        None => {
            let query_lower = query.to_lowercase();
            items
                .into_iter()
                .filter(|item| matches_lowered(&query_lower, item))
                .collect()
        }
    }
}
