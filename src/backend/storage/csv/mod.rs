//! # CSV Storage Module
//!
//! CSV-backed implementation of the progress table. A single `progress.csv`
//! file under the data directory holds the append-only rows:
//!
//! ```csv
//! exercise_id,load,date
//! supino-reto,42.5,2025-03-10 18:22:41
//! ```

pub mod connection;
pub mod progress_repository;

pub use connection::CsvConnection;
pub use progress_repository::ProgressRepository;
