//! Data models for GymTrain.
//!
//! - [`TrainingDay`], [`Exercise`], [`HistoryEntry`]: the persisted training tree
//! - [`Measure`]: reps/weight value with the bodyweight and not-a-number markers
//! - [`EntryInput`]: raw form text for adding or editing a history entry
//! - [`UserProfile`]: flat profile record stored next to the tree
//! - [`Slide`]: one card of the landing page slideshow
//! - [`AppSettings`]: settings loaded by [`ConfigManager`](crate::config::ConfigManager)
//!
//! The training tree is owned top-down: a day owns its exercises, an exercise
//! owns its history. Everything derives `Serialize`/`Deserialize` so the whole
//! tree is written as one JSON document.

pub mod config;
pub mod profile;
pub mod slide;
pub mod training;

pub use config::{AppSettings, CarouselSettings, LoggingSettings};
pub use profile::UserProfile;
pub use slide::{PLACEHOLDER_IMAGE, Slide, default_slides};
pub use training::{EntryInput, Exercise, HistoryEntry, Measure, TrainingDay};
