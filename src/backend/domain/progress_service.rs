//! Progress logging service.
//!
//! Sits between the load editor widget and the storage layer: validates the
//! load, stamps the record with the São Paulo storage timestamp, and appends
//! it to the progress table.

use anyhow::{bail, Result};
use log::info;
use std::sync::Arc;

use crate::backend::domain::models::progress::ProgressRecord;
use crate::backend::storage::ProgressStorage;
use crate::datetime;

#[derive(Clone)]
pub struct ProgressService {
    repository: Arc<dyn ProgressStorage>,
}

impl ProgressService {
    pub fn new(repository: Arc<dyn ProgressStorage>) -> Self {
        Self { repository }
    }

    /// Append one observation of the working load for an exercise.
    ///
    /// The record's date is stamped here, from the current São Paulo time,
    /// so callers only supply the measurement itself.
    pub fn log_progress(&self, exercise_id: &str, load: f64) -> Result<ProgressRecord> {
        if !load.is_finite() || load < 0.0 {
            bail!("load must be a non-negative number, got {}", load);
        }

        let record = ProgressRecord::new(exercise_id, load, datetime::now_sao_paulo().banco);
        self.repository.insert_progress(&record)?;

        info!(
            "💪 Logged progress for {}: {}kg",
            record.exercise_id, record.load
        );
        Ok(record)
    }

    /// Full load history for one exercise, oldest first.
    pub fn history(&self, exercise_id: &str) -> Result<Vec<ProgressRecord>> {
        self.repository.list_progress(exercise_id)
    }
}
