// GymTrain - training log data store and landing page slideshow
//
// This is the library crate containing the core logic and data structures.
// The binary crate (main.rs) wires settings, logging and storage together.

pub mod carousel;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

// Re-export commonly used types for convenience
pub use carousel::{CarouselError, CarouselLayout, LoopingCarousel};
pub use config::ConfigManager;
pub use models::{
    AppSettings, EntryInput, Exercise, HistoryEntry, Measure, Slide, TrainingDay, UserProfile,
};
pub use state::{TrackerEvent, TrainingTracker};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, TrainingRepository};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
