pub mod csv;
pub mod traits;

pub use self::csv::{CsvConnection, ProgressRepository};
pub use traits::ProgressStorage;
