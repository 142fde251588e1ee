// Training state - the single owner of the training tree
//
// TrainingTracker holds the current tree and profile, applies the pure
// mutations from services::training_ops, and saves the full tree after every
// one of them. Change and persistence events go out on a tokio broadcast
// channel so a UI layer can react (and show save failures) without polling.

use crate::metrics::Metrics;
use crate::models::{EntryInput, TrainingDay, UserProfile};
use crate::services::{TreeSummary, training_ops};
use crate::storage::{KeyValueStore, LoadSource, TrainingRepository};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Events emitted by [`TrainingTracker`]
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerEvent {
    DayAdded { day_id: String },
    DayDeleted { day_id: String },

    ExerciseAdded { day_id: String, exercise_id: String },
    ExerciseDeleted { day_id: String, exercise_id: String },

    EntryAdded {
        day_id: String,
        exercise_id: String,
        entry_id: String,
    },
    EntryUpdated {
        day_id: String,
        exercise_id: String,
        entry_id: String,
    },
    EntryDeleted {
        day_id: String,
        exercise_id: String,
        entry_id: String,
    },

    ProfileUpdated,

    /// The full record was written
    Persisted,

    /// The write failed; in-memory state is kept but not durable
    PersistFailed { message: String },
}

/// Owned training state with write-through persistence.
///
/// All mutations take `&mut self` and await their save before returning, so
/// saves never overlap and are applied in the order the mutations were made.
///
/// Every mutation method returns the events it emitted. Unknown ids are not
/// an error: the tree stays as it was, no change event is emitted, and the
/// (unchanged) tree is still saved.
pub struct TrainingTracker<S> {
    repository: TrainingRepository<S>,
    days: Vec<TrainingDay>,
    profile: UserProfile,
    load_source: LoadSource,
    events_tx: broadcast::Sender<TrackerEvent>,
    metrics: Arc<Metrics>,
}

impl<S: KeyValueStore> TrainingTracker<S> {
    /// Load tree and profile once and take ownership of the repository.
    pub async fn open(repository: TrainingRepository<S>) -> Self {
        let (events_tx, _) = broadcast::channel(100);
        let metrics = Arc::new(Metrics::new());

        let loaded = repository.load_detailed().await;
        let profile = repository.load_profile().await;
        metrics.record_load(loaded.source == LoadSource::Fallback);

        Self {
            repository,
            days: loaded.days,
            profile,
            load_source: loaded.source,
            events_tx,
            metrics,
        }
    }

    /// How the tree was obtained at startup.
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn days(&self) -> &[TrainingDay] {
        &self.days
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn summary(&self) -> TreeSummary {
        TreeSummary::of(&self.days)
    }

    pub fn repository(&self) -> &TrainingRepository<S> {
        &self.repository
    }

    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    /// Receive all future events. Multiple subscribers are supported.
    pub fn subscribe(&self) -> broadcast::Receiver<TrackerEvent> {
        self.events_tx.subscribe()
    }

    pub async fn add_training_day(&mut self, name: &str) -> Vec<TrackerEvent> {
        let updated = training_ops::add_training_day(&self.days, name);
        let event = updated.last().map(|day| TrackerEvent::DayAdded {
            day_id: day.id.clone(),
        });
        self.commit(updated, event).await
    }

    pub async fn delete_training_day(&mut self, day_id: &str) -> Vec<TrackerEvent> {
        let updated = training_ops::delete_training_day(&self.days, day_id);
        let event = TrackerEvent::DayDeleted {
            day_id: day_id.to_string(),
        };
        self.commit_if_changed(updated, event).await
    }

    pub async fn add_exercise(&mut self, day_id: &str, name: &str) -> Vec<TrackerEvent> {
        let updated = training_ops::add_exercise_to_training_day(&self.days, day_id, name);
        let event = training_ops::find_day(&updated, day_id)
            .and_then(|day| day.exercises.last())
            .map(|exercise| TrackerEvent::ExerciseAdded {
                day_id: day_id.to_string(),
                exercise_id: exercise.id.clone(),
            });
        self.commit_if_changed_with(updated, event).await
    }

    pub async fn delete_exercise(&mut self, day_id: &str, exercise_id: &str) -> Vec<TrackerEvent> {
        let updated = training_ops::delete_exercise(&self.days, day_id, exercise_id);
        let event = TrackerEvent::ExerciseDeleted {
            day_id: day_id.to_string(),
            exercise_id: exercise_id.to_string(),
        };
        self.commit_if_changed(updated, event).await
    }

    /// Log a new entry dated today.
    pub async fn add_history_entry(
        &mut self,
        day_id: &str,
        exercise_id: &str,
        input: &EntryInput,
    ) -> Vec<TrackerEvent> {
        let updated = training_ops::add_history_entry(&self.days, day_id, exercise_id, input);
        let event = training_ops::latest_entry(&updated, day_id, exercise_id).map(|entry| {
            TrackerEvent::EntryAdded {
                day_id: day_id.to_string(),
                exercise_id: exercise_id.to_string(),
                entry_id: entry.id.clone(),
            }
        });
        self.commit_if_changed_with(updated, event).await
    }

    pub async fn update_history_entry(
        &mut self,
        day_id: &str,
        exercise_id: &str,
        entry_id: &str,
        input: &EntryInput,
    ) -> Vec<TrackerEvent> {
        let updated =
            training_ops::update_history_entry(&self.days, day_id, exercise_id, entry_id, input);
        let event = TrackerEvent::EntryUpdated {
            day_id: day_id.to_string(),
            exercise_id: exercise_id.to_string(),
            entry_id: entry_id.to_string(),
        };
        self.commit_if_changed(updated, event).await
    }

    pub async fn delete_history_entry(
        &mut self,
        day_id: &str,
        exercise_id: &str,
        entry_id: &str,
    ) -> Vec<TrackerEvent> {
        let updated = training_ops::delete_history_entry(&self.days, day_id, exercise_id, entry_id);
        let event = TrackerEvent::EntryDeleted {
            day_id: day_id.to_string(),
            exercise_id: exercise_id.to_string(),
            entry_id: entry_id.to_string(),
        };
        self.commit_if_changed(updated, event).await
    }

    /// Replace the profile and save it.
    pub async fn update_profile(&mut self, profile: UserProfile) -> Vec<TrackerEvent> {
        let mut events = Vec::new();
        if profile != self.profile {
            self.profile = profile;
            events.push(TrackerEvent::ProfileUpdated);
        }

        let result = self.repository.save_profile(&self.profile).await;
        events.push(self.persist_event(result.map_err(|e| e.to_string())));

        for event in &events {
            self.emit(event.clone());
        }
        events
    }

    async fn commit_if_changed(
        &mut self,
        updated: Vec<TrainingDay>,
        event: TrackerEvent,
    ) -> Vec<TrackerEvent> {
        let event = (updated != self.days).then_some(event);
        self.commit(updated, event).await
    }

    async fn commit_if_changed_with(
        &mut self,
        updated: Vec<TrainingDay>,
        event: Option<TrackerEvent>,
    ) -> Vec<TrackerEvent> {
        let event = event.filter(|_| updated != self.days);
        self.commit(updated, event).await
    }

    // Swap in the new tree, then write it through.
    async fn commit(
        &mut self,
        updated: Vec<TrainingDay>,
        change: Option<TrackerEvent>,
    ) -> Vec<TrackerEvent> {
        let mut events = Vec::with_capacity(2);
        if let Some(change) = change {
            self.days = updated;
            self.metrics.record_mutation();
            events.push(change);
        }

        let result = self.repository.save(&self.days).await;
        events.push(self.persist_event(result.map_err(|e| e.to_string())));

        for event in &events {
            self.emit(event.clone());
        }
        events
    }

    fn persist_event(&self, result: Result<(), String>) -> TrackerEvent {
        match result {
            Ok(()) => {
                self.metrics.record_save();
                TrackerEvent::Persisted
            }
            Err(message) => {
                tracing::error!("Error saving training data: {}", message);
                self.metrics.record_save_failed();
                TrackerEvent::PersistFailed { message }
            }
        }
    }

    fn emit(&self, event: TrackerEvent) {
        // No subscribers is fine
        if self.events_tx.send(event).is_ok() {
            self.metrics.record_broadcast();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Measure;
    use crate::storage::MemoryStore;

    async fn empty_tracker() -> TrainingTracker<MemoryStore> {
        TrainingTracker::open(TrainingRepository::new(MemoryStore::new())).await
    }

    #[tokio::test]
    async fn test_open_empty() {
        let tracker = empty_tracker().await;
        assert!(tracker.days().is_empty());
        assert!(tracker.profile().is_empty());
        assert_eq!(tracker.load_source(), LoadSource::Empty);
        assert_eq!(tracker.metrics().loads(), 1);
    }

    #[tokio::test]
    async fn test_add_day_emits_and_persists() {
        let mut tracker = empty_tracker().await;

        let events = tracker.add_training_day("Push Day").await;

        let day_id = tracker.days()[0].id.clone();
        assert_eq!(
            events,
            vec![TrackerEvent::DayAdded { day_id }, TrackerEvent::Persisted]
        );

        let stored = tracker.repository().load().await;
        assert_eq!(stored, tracker.days());
    }

    #[tokio::test]
    async fn test_unknown_id_saves_without_change_event() {
        let mut tracker = empty_tracker().await;
        tracker.add_training_day("Push Day").await;

        let events = tracker.delete_training_day("missing").await;

        assert_eq!(events, vec![TrackerEvent::Persisted]);
        assert_eq!(tracker.days().len(), 1);
        assert_eq!(tracker.metrics().mutations(), 1);
    }

    #[tokio::test]
    async fn test_entry_lifecycle() {
        let mut tracker = empty_tracker().await;
        tracker.add_training_day("Pull Day").await;
        let day_id = tracker.days()[0].id.clone();

        let events = tracker.add_exercise(&day_id, "Pull-ups").await;
        let exercise_id = tracker.days()[0].exercises[0].id.clone();
        assert!(matches!(
            &events[0],
            TrackerEvent::ExerciseAdded { exercise_id: id, .. } if *id == exercise_id
        ));

        tracker
            .add_history_entry(&day_id, &exercise_id, &EntryInput::new("3", "8", "BW"))
            .await;
        let entry_id = tracker.days()[0].exercises[0].history[0].id.clone();

        tracker
            .update_history_entry(
                &day_id,
                &exercise_id,
                &entry_id,
                &EntryInput::new("4", "10", "5").with_date("2025-01-01"),
            )
            .await;
        let entry = &tracker.days()[0].exercises[0].history[0];
        assert_eq!(entry.id, entry_id);
        assert_eq!(entry.weight, Measure::Amount(5.0));

        let events = tracker.delete_history_entry(&day_id, &exercise_id, &entry_id).await;
        assert!(matches!(events[0], TrackerEvent::EntryDeleted { .. }));
        assert!(tracker.days()[0].exercises[0].history.is_empty());

        tracker.delete_exercise(&day_id, &exercise_id).await;
        assert!(tracker.days()[0].exercises.is_empty());
    }

    #[tokio::test]
    async fn test_profile_update() {
        let mut tracker = empty_tracker().await;
        let profile = UserProfile {
            name: "Robin".to_string(),
            ..UserProfile::default()
        };

        let events = tracker.update_profile(profile.clone()).await;
        assert_eq!(events, vec![TrackerEvent::ProfileUpdated, TrackerEvent::Persisted]);
        assert_eq!(tracker.repository().load_profile().await, profile);
    }

    #[tokio::test]
    async fn test_subscribe_receives_events() {
        let mut tracker = empty_tracker().await;
        let mut rx = tracker.subscribe();

        tracker.add_training_day("Leg Day").await;

        assert!(matches!(rx.try_recv(), Ok(TrackerEvent::DayAdded { .. })));
        assert!(matches!(rx.try_recv(), Ok(TrackerEvent::Persisted)));
    }
}
