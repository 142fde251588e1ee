use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::services::parsing;

/// A named training day (e.g. "Push Day") owning its exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDay {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl TrainingDay {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            exercises: Vec::new(),
        }
    }

    pub fn with_exercises(mut self, exercises: Vec<Exercise>) -> Self {
        self.exercises = exercises;
        self
    }
}

/// An exercise inside a training day, with its logged history in append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Exercise {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }
}

/// One logged performance of an exercise.
///
/// `sets` is `None` when the typed value was not a number; it is persisted as
/// JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub date: String,
    pub sets: Option<i64>,
    pub reps: Measure,
    pub weight: Measure,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets = match self.sets {
            Some(sets) => sets.to_string(),
            None => "NaN".to_string(),
        };
        write!(f, "{}: {} x {} @ {}", self.date, sets, self.reps, self.weight)
    }
}

/// Value of a rep count or a weight.
///
/// Persisted form: `"BW"` for [`Measure::Bodyweight`], a JSON number for
/// [`Measure::Amount`] and `null` for [`Measure::Unparsed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// No added load / bodyweight reps.
    Bodyweight,
    Amount(f64),
    /// The typed text was neither "bw" nor a number. Stored as-is, never rejected.
    Unparsed,
}

impl Measure {
    pub const BODYWEIGHT_MARKER: &'static str = "BW";

    /// Interpret raw user text: "bw" in any case is the bodyweight sentinel,
    /// everything else goes through the lenient leading-number parse.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(Self::BODYWEIGHT_MARKER) {
            return Measure::Bodyweight;
        }
        match parsing::parse_float(raw) {
            Some(value) => Measure::Amount(value),
            None => Measure::Unparsed,
        }
    }

    pub fn is_bodyweight(&self) -> bool {
        matches!(self, Measure::Bodyweight)
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Measure::Amount(value) => Some(*value),
            _ => None,
        }
    }

    /// Weight in pounds for display, rounded to a whole number (halves round
    /// up). `None` for bodyweight and unparsed values, shown as "N/A".
    pub fn to_lbs(&self) -> Option<f64> {
        self.amount().map(|kg| (kg * KG_TO_LBS + 0.5).floor())
    }
}

const KG_TO_LBS: f64 = 2.2;

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Bodyweight => write!(f, "{}", Self::BODYWEIGHT_MARKER),
            Measure::Amount(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            Measure::Amount(value) => write!(f, "{}", value),
            Measure::Unparsed => write!(f, "NaN"),
        }
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Measure::Bodyweight => serializer.serialize_str(Self::BODYWEIGHT_MARKER),
            Measure::Amount(value) => serializer.serialize_f64(*value),
            Measure::Unparsed => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MeasureVisitor)
    }
}

struct MeasureVisitor;

impl<'de> Visitor<'de> for MeasureVisitor {
    type Value = Measure;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, \"BW\" or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Measure, E> {
        Ok(Measure::Amount(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Measure, E> {
        Ok(Measure::Amount(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Measure, E> {
        Ok(Measure::Amount(value as f64))
    }

    // Older data kept numbers as text.
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Measure, E> {
        Ok(Measure::parse(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Measure, E> {
        Ok(Measure::Unparsed)
    }

    fn visit_none<E: de::Error>(self) -> Result<Measure, E> {
        Ok(Measure::Unparsed)
    }
}

/// Raw text typed into the add/edit entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryInput {
    /// Only used by updates; a new entry is always dated today.
    pub date: Option<String>,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl EntryInput {
    pub fn new(
        sets: impl Into<String>,
        reps: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            date: None,
            sets: sets.into(),
            reps: reps.into(),
            weight: weight.into(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn parsed_sets(&self) -> Option<i64> {
        parsing::parse_int(&self.sets)
    }

    pub fn parsed_reps(&self) -> Measure {
        Measure::parse(&self.reps)
    }

    pub fn parsed_weight(&self) -> Measure {
        Measure::parse(&self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_parse_bodyweight_any_case() {
        assert_eq!(Measure::parse("bw"), Measure::Bodyweight);
        assert_eq!(Measure::parse("BW"), Measure::Bodyweight);
        assert_eq!(Measure::parse("Bw"), Measure::Bodyweight);
    }

    #[test]
    fn test_measure_parse_numbers_and_garbage() {
        assert_eq!(Measure::parse("62.5"), Measure::Amount(62.5));
        assert_eq!(Measure::parse("60kg"), Measure::Amount(60.0));
        assert_eq!(Measure::parse("heavy"), Measure::Unparsed);
        // Only the exact marker counts, surrounding spaces do not.
        assert_eq!(Measure::parse(" bw"), Measure::Unparsed);
    }

    #[test]
    fn test_measure_parse_overflow_is_unparsed() {
        assert_eq!(Measure::parse("1e999"), Measure::Unparsed);
        assert_eq!(Measure::parse("Infinity"), Measure::Unparsed);
    }

    #[test]
    fn test_measure_to_lbs() {
        assert_eq!(Measure::Amount(60.0).to_lbs(), Some(132.0));
        assert_eq!(Measure::Amount(62.5).to_lbs(), Some(138.0));
        // 2.5 * 2.2 = 5.5 rounds up
        assert_eq!(Measure::Amount(2.5).to_lbs(), Some(6.0));
        assert_eq!(Measure::Amount(-2.5).to_lbs(), Some(-5.0));
        assert_eq!(Measure::Bodyweight.to_lbs(), None);
        assert_eq!(Measure::Unparsed.to_lbs(), None);
    }

    #[test]
    fn test_measure_json_forms() {
        assert_eq!(serde_json::to_string(&Measure::Bodyweight).unwrap(), "\"BW\"");
        assert_eq!(serde_json::to_string(&Measure::Amount(62.5)).unwrap(), "62.5");
        assert_eq!(serde_json::to_string(&Measure::Unparsed).unwrap(), "null");

        let parsed: Measure = serde_json::from_str("\"BW\"").unwrap();
        assert_eq!(parsed, Measure::Bodyweight);
        let parsed: Measure = serde_json::from_str("8").unwrap();
        assert_eq!(parsed, Measure::Amount(8.0));
        let parsed: Measure = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Measure::Unparsed);
    }

    #[test]
    fn test_measure_display() {
        assert_eq!(Measure::Bodyweight.to_string(), "BW");
        assert_eq!(Measure::Amount(60.0).to_string(), "60");
        assert_eq!(Measure::Amount(62.5).to_string(), "62.5");
        assert_eq!(Measure::Unparsed.to_string(), "NaN");
    }

    #[test]
    fn test_history_entry_json_shape() {
        let entry = HistoryEntry {
            id: "e1".to_string(),
            date: "2025-05-26".to_string(),
            sets: Some(3),
            reps: Measure::Amount(8.0),
            weight: Measure::Bodyweight,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["sets"], 3);
        assert_eq!(value["reps"], 8.0);
        assert_eq!(value["weight"], "BW");
        assert_eq!(entry.to_string(), "2025-05-26: 3 x 8 @ BW");
    }

    #[test]
    fn test_entry_input_parsing() {
        let input = EntryInput::new("3", "bw", "abc").with_date("2025-01-01");

        assert_eq!(input.date.as_deref(), Some("2025-01-01"));
        assert_eq!(input.parsed_sets(), Some(3));
        assert!(input.parsed_reps().is_bodyweight());
        assert_eq!(input.parsed_weight(), Measure::Unparsed);
    }

    #[test]
    fn test_day_without_exercises_field_deserializes() {
        let day: TrainingDay = serde_json::from_str(r#"{"id":"td1","name":"Leg Day"}"#).unwrap();
        assert!(day.exercises.is_empty());
    }
}
