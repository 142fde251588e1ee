//! Services module - pure logic over the training tree.
//!
//! Nothing in here performs I/O. Storage lives in [`crate::storage`] and the
//! write-through owner of the tree in [`crate::state`].
//!
//! # Components
//!
//! - [`training_ops`]: add/delete days and exercises, add/update/delete history
//!   entries, lookups and summary counts
//! - [`parsing`]: lenient leading-number parsing for form input
//! - [`seed`]: demo tree for a first start

pub mod parsing;
pub mod seed;
pub mod training_ops;

pub use seed::demo_training_days;
pub use training_ops::{
    TreeSummary, add_exercise_to_training_day, add_history_entry, add_history_entry_on,
    add_training_day, delete_exercise, delete_history_entry, delete_training_day, find_day,
    find_entry, find_exercise, latest_entry, update_history_entry,
};
