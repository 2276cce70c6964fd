//! Domain model for a progress record.

use serde::{Deserialize, Serialize};

/// One observation of the working load for one exercise at one time.
///
/// Rows are append-only; the history of an exercise is the ordered list of
/// its records. `date` uses the storage timestamp format
/// `YYYY-MM-DD HH:MM:SS` in São Paulo local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub exercise_id: String,
    /// Working weight in kilograms.
    pub load: f64,
    pub date: String,
}

impl ProgressRecord {
    pub fn new(exercise_id: impl Into<String>, load: f64, date: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            load,
            date: date.into(),
        }
    }
}
