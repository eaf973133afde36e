//! Domain model types (pure).
//!
//! All types in this module are plain data with no engine state attached.

pub mod error;
pub mod item;
pub mod key;
pub mod side;
pub mod store;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use item::Item;
pub use key::{ItemKey, KeySet};
pub use side::{Direction, Side, Sides};
pub use store::{ItemUpdate, OptionStore, SortKey, SortOrder};
