pub mod profile;
pub mod progress;

pub use profile::{ThemeChoice, UserProfile};
pub use progress::ProgressRecord;
