use anyhow::Result;
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const PROGRESS_FILE_NAME: &str = "progress.csv";
const PROGRESS_HEADER: &str = "exercise_id,load,date";

/// CsvConnection manages file paths and ensures the progress CSV file exists.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Get the file path of the progress table.
    pub fn progress_file_path(&self) -> PathBuf {
        self.base_directory.join(PROGRESS_FILE_NAME)
    }

    /// Create the progress file with its header row if it doesn't exist yet.
    pub fn ensure_progress_file_exists(&self) -> Result<()> {
        let path = self.progress_file_path();
        if !path.exists() {
            let mut file = OpenOptions::new().create(true).write(true).open(&path)?;
            writeln!(file, "{}", PROGRESS_HEADER)?;
            info!("Created progress file: {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_base_directory_and_progress_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");

        let connection = CsvConnection::new(&data_dir).unwrap();
        assert!(data_dir.exists());

        connection.ensure_progress_file_exists().unwrap();
        let contents = std::fs::read_to_string(connection.progress_file_path()).unwrap();
        assert_eq!(contents.trim(), "exercise_id,load,date");
    }

    #[test]
    fn ensure_is_idempotent_and_preserves_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();

        connection.ensure_progress_file_exists().unwrap();
        std::fs::write(
            connection.progress_file_path(),
            "exercise_id,load,date\nsupino,40.0,2025-01-01 10:00:00\n",
        )
        .unwrap();

        connection.ensure_progress_file_exists().unwrap();
        let contents = std::fs::read_to_string(connection.progress_file_path()).unwrap();
        assert!(contents.contains("supino,40.0"));
    }
}
