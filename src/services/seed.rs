//! Demo tree used when nothing has been persisted yet and seeding is enabled.

use crate::models::{Exercise, HistoryEntry, Measure, TrainingDay};
use crate::services::training_ops::fresh_id;

fn entry(date: &str, sets: i64, reps: f64, weight: Measure) -> HistoryEntry {
    HistoryEntry {
        id: fresh_id(),
        date: date.to_string(),
        sets: Some(sets),
        reps: Measure::Amount(reps),
        weight,
    }
}

fn kg(value: f64) -> Measure {
    Measure::Amount(value)
}

/// Push / Pull / Leg split with a few logged sessions.
pub fn demo_training_days() -> Vec<TrainingDay> {
    vec![
        TrainingDay::new("td1", "Push Day").with_exercises(vec![
            Exercise::new("ex1", "Bench Press").with_history(vec![
                entry("2025-05-26", 3, 8.0, kg(60.0)),
                entry("2025-06-02", 3, 9.0, kg(62.5)),
            ]),
            Exercise::new("ex2", "Shoulder Press")
                .with_history(vec![entry("2025-05-26", 4, 10.0, kg(30.0))]),
            Exercise::new("ex3", "Triceps Pushdown")
                .with_history(vec![entry("2025-05-26", 3, 12.0, kg(20.0))]),
        ]),
        TrainingDay::new("td2", "Pull Day").with_exercises(vec![
            Exercise::new("ex4", "Deadlift")
                .with_history(vec![entry("2025-05-27", 3, 5.0, kg(100.0))]),
            Exercise::new("ex5", "Pull-ups")
                .with_history(vec![entry("2025-05-27", 3, 8.0, Measure::Bodyweight)]),
        ]),
        TrainingDay::new("td3", "Leg Day").with_exercises(vec![
            Exercise::new("ex6", "Squats")
                .with_history(vec![entry("2025-05-28", 4, 8.0, kg(80.0))]),
            Exercise::new("ex7", "Leg Press")
                .with_history(vec![entry("2025-05-28", 3, 12.0, kg(150.0))]),
        ]),
    ]
}
