use anyhow::Result;
use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::backend::domain::models::progress::ProgressRecord;
use crate::backend::storage::traits::ProgressStorage;

/// CSV-based progress repository.
///
/// Inserts append to the end of `progress.csv`; the header row is written
/// once when the file is created by the connection.
#[derive(Debug, Clone)]
pub struct ProgressRepository {
    connection: CsvConnection,
}

impl ProgressRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<ProgressRecord>> {
        self.connection.ensure_progress_file_exists()?;

        let file = File::open(self.connection.progress_file_path())?;
        let mut csv_reader = ReaderBuilder::new().from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: ProgressRecord = result?;
            records.push(record);
        }
        Ok(records)
    }
}

impl ProgressStorage for ProgressRepository {
    fn insert_progress(&self, record: &ProgressRecord) -> Result<()> {
        self.connection.ensure_progress_file_exists()?;

        let file = OpenOptions::new()
            .append(true)
            .open(self.connection.progress_file_path())?;
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));

        csv_writer.serialize(record)?;
        csv_writer.flush()?;

        info!(
            "Stored progress record: {} {}kg at {}",
            record.exercise_id, record.load, record.date
        );
        Ok(())
    }

    fn list_progress(&self, exercise_id: &str) -> Result<Vec<ProgressRecord>> {
        let records = self
            .read_all()?
            .into_iter()
            .filter(|r| r.exercise_id == exercise_id)
            .collect();
        Ok(records)
    }
}
