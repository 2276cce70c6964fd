//! # Storage Traits
//!
//! Storage abstraction for the progress table. The trait keeps the domain
//! layer agnostic of the backing store; the shipped implementation is CSV,
//! and tests substitute an in-memory store.

use anyhow::Result;
use crate::backend::domain::models::progress::ProgressRecord;

/// Interface to the append-only progress table.
///
/// All operations are synchronous; the widgets run on the desktop UI thread
/// and writes are small single rows.
pub trait ProgressStorage: Send + Sync {
    /// Append a progress record. Rows are never updated or deleted.
    fn insert_progress(&self, record: &ProgressRecord) -> Result<()>;

    /// List all records for one exercise, oldest first.
    fn list_progress(&self, exercise_id: &str) -> Result<Vec<ProgressRecord>>;
}
