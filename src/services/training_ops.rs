//! Pure mutations over the training tree.
//!
//! Every function borrows the current tree and returns a new one; nothing is
//! modified in place. An id that matches nothing leaves the returned tree equal
//! to the input. Persisting the result is the caller's job (see
//! [`crate::state::TrainingTracker`]).

use chrono::Utc;
use uuid::Uuid;

use crate::models::{EntryInput, Exercise, HistoryEntry, TrainingDay};

/// Fresh identifier for a day, exercise or history entry.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Today's calendar date (UTC) in `YYYY-MM-DD` form.
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn add_training_day(days: &[TrainingDay], name: &str) -> Vec<TrainingDay> {
    let mut updated = days.to_vec();
    updated.push(TrainingDay::new(fresh_id(), name));
    updated
}

pub fn delete_training_day(days: &[TrainingDay], day_id: &str) -> Vec<TrainingDay> {
    days.iter().filter(|day| day.id != day_id).cloned().collect()
}

pub fn add_exercise_to_training_day(
    days: &[TrainingDay],
    day_id: &str,
    exercise_name: &str,
) -> Vec<TrainingDay> {
    map_day(days, day_id, |day| {
        day.exercises.push(Exercise::new(fresh_id(), exercise_name));
    })
}

pub fn delete_exercise(days: &[TrainingDay], day_id: &str, exercise_id: &str) -> Vec<TrainingDay> {
    map_day(days, day_id, |day| {
        day.exercises.retain(|exercise| exercise.id != exercise_id);
    })
}

/// Append an entry dated today.
pub fn add_history_entry(
    days: &[TrainingDay],
    day_id: &str,
    exercise_id: &str,
    input: &EntryInput,
) -> Vec<TrainingDay> {
    add_history_entry_on(days, day_id, exercise_id, input, &today())
}

/// Append an entry with an explicit date. `input.date` is ignored.
pub fn add_history_entry_on(
    days: &[TrainingDay],
    day_id: &str,
    exercise_id: &str,
    input: &EntryInput,
    date: &str,
) -> Vec<TrainingDay> {
    map_exercise(days, day_id, exercise_id, |exercise| {
        exercise.history.push(HistoryEntry {
            id: fresh_id(),
            date: date.to_string(),
            sets: input.parsed_sets(),
            reps: input.parsed_reps(),
            weight: input.parsed_weight(),
        });
    })
}

/// Replace date, sets, reps and weight of one entry, keeping its id.
///
/// When `input.date` is `None` the stored date is kept.
pub fn update_history_entry(
    days: &[TrainingDay],
    day_id: &str,
    exercise_id: &str,
    entry_id: &str,
    input: &EntryInput,
) -> Vec<TrainingDay> {
    map_exercise(days, day_id, exercise_id, |exercise| {
        for entry in exercise.history.iter_mut().filter(|entry| entry.id == entry_id) {
            if let Some(date) = &input.date {
                entry.date = date.clone();
            }
            entry.sets = input.parsed_sets();
            entry.reps = input.parsed_reps();
            entry.weight = input.parsed_weight();
        }
    })
}

pub fn delete_history_entry(
    days: &[TrainingDay],
    day_id: &str,
    exercise_id: &str,
    entry_id: &str,
) -> Vec<TrainingDay> {
    map_exercise(days, day_id, exercise_id, |exercise| {
        exercise.history.retain(|entry| entry.id != entry_id);
    })
}

fn map_day<F>(days: &[TrainingDay], day_id: &str, mut edit: F) -> Vec<TrainingDay>
where
    F: FnMut(&mut TrainingDay),
{
    days.iter()
        .map(|day| {
            let mut day = day.clone();
            if day.id == day_id {
                edit(&mut day);
            }
            day
        })
        .collect()
}

fn map_exercise<F>(
    days: &[TrainingDay],
    day_id: &str,
    exercise_id: &str,
    mut edit: F,
) -> Vec<TrainingDay>
where
    F: FnMut(&mut Exercise),
{
    map_day(days, day_id, |day| {
        for exercise in day.exercises.iter_mut().filter(|ex| ex.id == exercise_id) {
            edit(exercise);
        }
    })
}

pub fn find_day<'a>(days: &'a [TrainingDay], day_id: &str) -> Option<&'a TrainingDay> {
    days.iter().find(|day| day.id == day_id)
}

pub fn find_exercise<'a>(
    days: &'a [TrainingDay],
    day_id: &str,
    exercise_id: &str,
) -> Option<&'a Exercise> {
    find_day(days, day_id)?
        .exercises
        .iter()
        .find(|exercise| exercise.id == exercise_id)
}

pub fn find_entry<'a>(
    days: &'a [TrainingDay],
    day_id: &str,
    exercise_id: &str,
    entry_id: &str,
) -> Option<&'a HistoryEntry> {
    find_exercise(days, day_id, exercise_id)?
        .history
        .iter()
        .find(|entry| entry.id == entry_id)
}

/// Most recently appended entry of an exercise.
pub fn latest_entry<'a>(
    days: &'a [TrainingDay],
    day_id: &str,
    exercise_id: &str,
) -> Option<&'a HistoryEntry> {
    find_exercise(days, day_id, exercise_id)?.history.last()
}

/// Counts shown on the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub days: usize,
    pub exercises: usize,
    pub entries: usize,
}

impl TreeSummary {
    pub fn of(days: &[TrainingDay]) -> Self {
        let exercises = days.iter().flat_map(|day| &day.exercises);
        let (exercise_count, entries) = exercises.fold((0, 0), |(count, entries), exercise| {
            (count + 1, entries + exercise.history.len())
        });

        Self {
            days: days.len(),
            exercises: exercise_count,
            entries,
        }
    }
}
