//! Controlled vs uncontrolled state.
//!
//! Ownership is a sum type: either the engine owns the value, or the caller
//! supplies it on every render. Every read goes through [`Ownership::resolve`].

use tracing::warn;

/// Who holds the authoritative value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ownership<T> {
    /// Uncontrolled: the engine stores and returns its own copy.
    Owned(T),
    /// Controlled: the caller's value is the single source of truth.
    External(T),
}

impl<T> Ownership<T> {
    /// Controlled when `controlled` is given, otherwise owned and seeded with
    /// `default`. The default is read once, here.
    pub fn new(controlled: Option<T>, default: T) -> Self {
        match controlled {
            Some(value) => Ownership::External(value),
            None => Ownership::Owned(default),
        }
    }

    /// Current value.
    pub fn resolve(&self) -> &T {
        match self {
            Ownership::Owned(value) | Ownership::External(value) => value,
        }
    }

    /// True when the caller controls the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Ownership::External(_))
    }

    /// Offer a new value produced by an engine operation.
    ///
    /// Owned values are replaced. Controlled values are left untouched; the
    /// caller learns about the proposal through a callback and re-applies it
    /// with [`Ownership::sync_external`] if it agrees. Returns whether the
    /// value was stored.
    pub fn propose(&mut self, next: T) -> bool {
        match self {
            Ownership::Owned(value) => {
                *value = next;
                true
            }
            Ownership::External(_) => false,
        }
    }

    /// Apply the caller's latest controlled value.
    ///
    /// Ignored for owned values: switching an uncontrolled engine to
    /// controlled mid-life is not supported.
    pub fn sync_external(&mut self, next: T) {
        match self {
            Ownership::External(value) => *value = next,
            Ownership::Owned(_) => {
                warn!("controlled value supplied to an uncontrolled transfer; ignoring");
            }
        }
    }
}
