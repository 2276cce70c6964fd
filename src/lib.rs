//! # Workout Tracker Widgets
//!
//! egui widgets and helpers for a workout-tracking desktop application:
//! an interval (rest) timer dialog, an inline load editor that appends
//! progress records to CSV storage, a user-preference applier for visual
//! theming, and a São Paulo-localized date/time helper.
//!
//! The widgets are self-contained: each one owns its state and is rendered
//! immediate-mode by calling its `show`/`ui` method every frame. Storage
//! access goes through the synchronous backend services in [`backend`].

pub mod backend;
pub mod datetime;
pub mod ui;

pub use backend::Backend;
pub use ui::components::interval_timer::{IntervalTimerDialog, TimerPhase};
pub use ui::components::load_editor::LoadEditor;
pub use ui::components::notifications::Notifier;
pub use ui::components::preferences::apply_user_preferences;
