//! Transfer state engine (pure).
//!
//! Data flows one way per operation: an intent enters [`Transfer`], which
//! reads the catalogue and its own key state, runs partition → filter →
//! pagination to decide what is visible, updates the selection and reports
//! through a [`TransferListener`].
//!
//! # Module Structure
//!
//! - `partition`: source/target split by target-key membership
//! - `filter`: per-side text search with optional custom predicate
//! - `pagination`: page slicing and page-count math
//! - `selection`: pure selection transitions and derived views
//! - `ownership`: controlled vs uncontrolled values
//! - `events`: outbound notifications and listeners
//! - `transfer`: the controller
//! - `handle`: imperative control surface over the controller

pub mod events;
pub mod filter;
pub mod handle;
pub mod ownership;
pub mod pagination;
pub mod partition;
pub mod selection;
pub mod transfer;

// Re-export for convenience
pub use events::{Callbacks, TransferEvent, TransferListener};
pub use filter::FilterPredicate;
pub use handle::TransferHandle;
pub use ownership::Ownership;
pub use pagination::{Page, PaginationConfig, DEFAULT_PAGE_SIZE};
pub use partition::Partition;
pub use selection::{CheckState, SelectionSplit, SelectionSummary};
pub use transfer::{SideState, SideView, Transfer, TransferOptions};
