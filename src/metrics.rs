// Session metrics
//
// Lightweight counters for what the training tracker did during a session

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Session counters
///
/// Uses atomic operations so a shared `Arc<Metrics>` can be read from any
/// thread while the tracker keeps recording.
#[derive(Debug)]
pub struct Metrics {
    /// Tree loads performed
    loads: AtomicU64,

    /// Loads that fell back to an empty tree because the record was unreadable
    load_fallbacks: AtomicU64,

    /// Mutations that changed the tree
    mutations: AtomicU64,

    /// Successful writes
    saves: AtomicU64,

    /// Failed writes
    save_failures: AtomicU64,

    /// Events delivered to at least one subscriber
    broadcasts: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            loads: AtomicU64::new(0),
            load_fallbacks: AtomicU64::new(0),
            mutations: AtomicU64::new(0),
            saves: AtomicU64::new(0),
            save_failures: AtomicU64::new(0),
            broadcasts: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_load(&self, fell_back: bool) {
        self.loads.fetch_add(1, Ordering::Relaxed);
        if fell_back {
            self.load_fallbacks.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_mutation(&self) {
        self.mutations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_save(&self) {
        self.saves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_save_failed(&self) {
        self.save_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_broadcast(&self) {
        self.broadcasts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn loads(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn load_fallbacks(&self) -> u64 {
        self.load_fallbacks.load(Ordering::Relaxed)
    }

    pub fn mutations(&self) -> u64 {
        self.mutations.load(Ordering::Relaxed)
    }

    pub fn saves(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }

    pub fn save_failures(&self) -> u64 {
        self.save_failures.load(Ordering::Relaxed)
    }

    pub fn broadcasts(&self) -> u64 {
        self.broadcasts.load(Ordering::Relaxed)
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Share of writes that failed, 0.0 when nothing was written
    pub fn save_failure_rate(&self) -> f64 {
        let failed = self.save_failures();
        let total = self.saves() + failed;
        if total > 0 {
            failed as f64 / total as f64
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("=== Session Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Loads: {} ({} fell back), mutations: {}",
            self.loads(),
            self.load_fallbacks(),
            self.mutations()
        );
        tracing::info!(
            "Saves: {} ok, {} failed ({:.1}%), events broadcast: {}",
            self.saves(),
            self.save_failures(),
            self.save_failure_rate() * 100.0,
            self.broadcasts()
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.loads(), 0);
        assert_eq!(metrics.saves(), 0);
    }

    #[test]
    fn test_record_loads() {
        let metrics = Metrics::new();
        metrics.record_load(false);
        metrics.record_load(true);

        assert_eq!(metrics.loads(), 2);
        assert_eq!(metrics.load_fallbacks(), 1);
    }

    #[test]
    fn test_save_failure_rate() {
        let metrics = Metrics::new();
        assert_eq!(metrics.save_failure_rate(), 0.0);

        metrics.record_save();
        metrics.record_save();
        metrics.record_save();
        metrics.record_save_failed();

        assert_eq!(metrics.save_failure_rate(), 0.25);
    }

    #[test]
    fn test_uptime() {
        let metrics = Metrics::new();
        thread::sleep(Duration::from_millis(10));
        assert!(metrics.uptime().as_millis() >= 10);
    }

    #[test]
    fn test_mutation_and_broadcast_counters() {
        let metrics = Metrics::new();
        metrics.record_mutation();
        metrics.record_broadcast();
        metrics.record_broadcast();

        assert_eq!(metrics.mutations(), 1);
        assert_eq!(metrics.broadcasts(), 2);
    }
}
