//! # Backend Module
//!
//! Synchronous backend for the desktop widgets: domain models, the progress
//! service, and CSV-backed storage. There is no IO/REST layer; the widgets
//! call services directly on the UI thread.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that orchestrates the services.
pub struct Backend {
    pub progress_service: Arc<domain::ProgressService>,
}

impl Backend {
    /// Create a backend storing its data under the given directory.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = CsvConnection::new(data_dir)?;
        let repository = Arc::new(storage::csv::ProgressRepository::new(connection));
        let progress_service = Arc::new(domain::ProgressService::new(repository));

        Ok(Backend { progress_service })
    }
}
