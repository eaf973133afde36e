//! Transfer Engine
//!
//! State engine for a dual-list transfer selector: one catalogue of items
//! split into a source and a target list, each with its own search box,
//! pager and checkboxes, and a pair of move buttons between them.
//!
//! The crate follows a Pure Core / Impure Shell layout:
//! - `model` and `engine` are pure and deterministic
//! - `source`, `config` and `logging` do the I/O for the binary
//! - `integration` replays scripted intents and builds the JSON report
//!
//! ```
//! use transfer_engine::engine::{Transfer, TransferOptions};
//! use transfer_engine::model::{Direction, Item, ItemKey, OptionStore};
//!
//! let store: OptionStore = vec![Item::new(1, "One"), Item::new(2, "Two")]
//!     .into_iter()
//!     .collect();
//! let mut transfer = Transfer::silent(TransferOptions::default());
//!
//! transfer.toggle_item(&store, &ItemKey::from(2));
//! transfer.move_selected(&store, Direction::ToTarget);
//!
//! assert_eq!(transfer.target_keys(&store).to_vec(), vec![ItemKey::from(2)]);
//! ```

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod source;

// Re-export script replay
pub mod integration;
