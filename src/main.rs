//! GymTrain - training log data store and landing page slideshow
//!
//! Main entry point.
//!
//! # Execution Flow
//!
//! 1. Load settings from `GymTrain Data/gymtrain.yaml` plus `GYMTRAIN_*` overrides
//! 2. Initialize logging → logs/gymtrain.<date>
//! 3. Create a tokio runtime for storage I/O
//! 4. Open the [`TrainingTracker`] on a file-backed store (loads tree and profile once)
//! 5. Build the landing page carousel
//! 6. Report what was loaded, log the session summary and shut down
//!
//! The config directory can be overridden with `GYMTRAIN_CONFIG_DIR`.

use anyhow::{Context, Result};
use gymtrain::models::default_slides;
use gymtrain::{
    APP_NAME, CarouselLayout, ConfigManager, FileStore, LoopingCarousel, TrainingRepository,
    TrainingTracker, VERSION,
};
use std::time::Duration;

const DEFAULT_CONFIG_DIR: &str = "GymTrain Data";

fn main() -> Result<()> {
    let config_dir =
        std::env::var("GYMTRAIN_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config_manager = ConfigManager::new(&config_dir)?;
    let settings = config_manager.load_settings()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = gymtrain::logging::setup_logging(&settings.logging)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("gymtrain-worker")
        .build()
        .context("Failed to create tokio runtime")?;

    let repository = TrainingRepository::new(FileStore::new(&settings.data_dir))
        .with_seed(settings.seed_demo_data);
    let tracker = runtime.block_on(TrainingTracker::open(repository));

    let summary = tracker.summary();
    tracing::info!(
        "Training data ready ({:?}): {} days, {} exercises, {} entries",
        tracker.load_source(),
        summary.days,
        summary.exercises,
        summary.entries
    );
    for day in tracker.days() {
        tracing::info!("  {} ({} exercises)", day.name, day.exercises.len());
    }

    let carousel = LoopingCarousel::new(default_slides(), CarouselLayout::from(settings.carousel))?;
    tracing::info!(
        "Carousel ready with {} slides, showing \"{}\"",
        carousel.len(),
        carousel.active_slide().title
    );

    tracker.metrics().log_summary();

    runtime.shutdown_timeout(Duration::from_secs(5));
    tracing::info!("Application shutdown complete");
    Ok(())
}
