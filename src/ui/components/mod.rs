//! # UI Components Module
//!
//! The widgets and helpers that make up the workout tracker UI.
//!
//! ## Module Organization:
//! - `interval_timer` - Modal rest-interval countdown dialog
//! - `load_editor` - Inline working-load editor with confirmation
//! - `preferences` - User profile to visual theme application
//! - `notifications` - Transient snack-bar feedback
//! - `theme` - Color palette and scheme derivation

pub mod interval_timer;
pub mod load_editor;
pub mod notifications;
pub mod preferences;
pub mod theme;

pub use interval_timer::{IntervalTimerDialog, TimerError, TimerPhase};
pub use load_editor::{ConfirmChoice, EditorMode, LoadEditor, SaveLoadError};
pub use notifications::{NotificationKind, Notifier};
pub use preferences::apply_user_preferences;
