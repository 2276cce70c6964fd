//! # Load Editor Widget
//!
//! Inline editor for an exercise's working load. The row shows the current
//! load as `"<kg>kg"`; flipping it into editing mode swaps in a numeric
//! field, and saving asks for confirmation before appending a progress
//! record through the backend service.
//!
//! ## Responsibilities:
//! - Display/editing mode toggle with an enable/disable switch
//! - Numeric input filtering (digits and at most one decimal point)
//! - Yes/no confirmation modal before any write
//! - Success and failure feedback through the shared snack bar

use eframe::egui;
use log::{error, info};
use std::sync::Arc;
use thiserror::Error;

use super::notifications::Notifier;
use crate::backend::domain::ProgressService;

/// Failure kinds on the save path. Parse failures never reach the store;
/// store failures carry the underlying description for the notification.
#[derive(Debug, Error)]
pub enum SaveLoadError {
    #[error("invalid load value '{0}'")]
    InvalidInput(String),
    #[error("{0}")]
    Store(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Display,
    Editing,
}

/// Outcome of the confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
}

pub struct LoadEditor {
    exercise_id: String,
    current_load: f64,
    input: String,
    mode: EditorMode,
    enabled: bool,
    confirm_open: bool,
    confirm_just_opened: bool,
    service: Arc<ProgressService>,
    notifier: Notifier,
    on_save: Option<Box<dyn FnMut(f64)>>,
}

impl LoadEditor {
    /// Create an editor for one exercise. `initial_load` is clamped to zero
    /// if negative. `on_save` is invoked with the new load after every
    /// successful write.
    pub fn new(
        initial_load: f64,
        exercise_id: impl Into<String>,
        service: Arc<ProgressService>,
        notifier: Notifier,
        on_save: Option<Box<dyn FnMut(f64)>>,
    ) -> Self {
        let initial_load = if initial_load.is_finite() {
            initial_load.max(0.0)
        } else {
            0.0
        };
        Self {
            exercise_id: exercise_id.into(),
            current_load: initial_load,
            input: String::new(),
            mode: EditorMode::Display,
            enabled: true,
            confirm_open: false,
            confirm_just_opened: false,
            service,
            notifier,
            on_save,
        }
    }

    /// Builder-style interactivity toggle.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    /// The visible load label, e.g. `"22.5kg"`.
    pub fn label(&self) -> String {
        format!("{}kg", self.current_load)
    }

    /// Flip into editing mode. No-op while disabled.
    pub fn start_edit(&mut self) {
        if !self.enabled || self.mode == EditorMode::Editing {
            return;
        }
        self.input = format!("{}", self.current_load);
        self.mode = EditorMode::Editing;
        info!("✏️ Editing load for {}", self.exercise_id);
    }

    /// Leave editing mode without saving.
    pub fn cancel_edit(&mut self) {
        self.mode = EditorMode::Display;
        self.confirm_open = false;
    }

    /// Replace the text in the input field, as typing would.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.sanitize_input();
    }

    /// Open the confirmation modal. No-op while disabled or not editing.
    pub fn request_save(&mut self) {
        if !self.enabled || self.mode != EditorMode::Editing {
            return;
        }
        self.confirm_open = true;
        self.confirm_just_opened = true;
    }

    /// Resolve the confirmation. "Yes" parses the input, appends the
    /// progress record, updates the label and fires `on_save`; "No" (or a
    /// dismissal) discards the edit. Either way the widget returns to
    /// display mode.
    pub fn confirm_save(&mut self, choice: ConfirmChoice) {
        self.confirm_open = false;

        if choice == ConfirmChoice::Yes {
            match self.commit_save() {
                Ok(load) => {
                    self.current_load = load;
                    self.notifier
                        .success(format!("Carga atualizada para {}kg", load));
                    if let Some(on_save) = self.on_save.as_mut() {
                        on_save(load);
                    }
                }
                Err(err) => {
                    error!("Failed to save load for {}: {}", self.exercise_id, err);
                    self.notifier.error(format!("Não foi possível salvar: {}", err));
                }
            }
        }

        self.mode = EditorMode::Display;
    }

    fn commit_save(&self) -> Result<f64, SaveLoadError> {
        let load = parse_load(&self.input)?;
        self.service.log_progress(&self.exercise_id, load)?;
        Ok(load)
    }

    /// Keep the input numeric: digits plus at most one decimal point.
    fn sanitize_input(&mut self) {
        let mut seen_dot = false;
        self.input.retain(|c| {
            if c.is_ascii_digit() {
                true
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                false
            }
        });
    }

    /// Render the inline row and, when open, the confirmation modal.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| match self.mode {
            EditorMode::Display => {
                ui.label(
                    egui::RichText::new(self.label())
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .strong(),
                );
                let edit_button = egui::Button::new("✏").frame(false);
                if ui.add_enabled(self.enabled, edit_button).clicked() {
                    self.start_edit();
                }
            }
            EditorMode::Editing => {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .hint_text("kg")
                        .desired_width(70.0)
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
                );
                if response.changed() {
                    self.sanitize_input();
                }

                let save_button = egui::Button::new("Salvar");
                if ui.add_enabled(self.enabled, save_button).clicked() {
                    self.request_save();
                }
                if ui.button("✕").clicked() {
                    self.cancel_edit();
                }
            }
        });

        if self.confirm_open {
            self.show_confirmation(ui.ctx());
        }
    }

    /// Yes/no confirmation modal, rendered above everything else.
    fn show_confirmation(&mut self, ctx: &egui::Context) {
        let mut choice: Option<ConfirmChoice> = None;
        let modal_size = egui::vec2(320.0, 170.0);

        egui::Area::new(egui::Id::new("load_confirm_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(egui::Color32::WHITE)
                            .stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(79, 109, 245)))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(18.0))
                            .show(ui, |ui| {
                                ui.set_min_size(modal_size);
                                ui.set_max_size(modal_size);

                                ui.vertical_centered(|ui| {
                                    ui.add_space(8.0);
                                    ui.label(
                                        egui::RichText::new("Salvar nova carga?")
                                            .font(egui::FontId::new(
                                                20.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(egui::Color32::from_rgb(60, 60, 60)),
                                    );
                                    ui.add_space(6.0);
                                    let shown = if self.input.trim().is_empty() {
                                        "0".to_string()
                                    } else {
                                        self.input.trim().to_string()
                                    };
                                    ui.label(
                                        egui::RichText::new(format!("{}kg", shown))
                                            .font(egui::FontId::new(
                                                16.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .color(egui::Color32::from_rgb(100, 100, 100)),
                                    );
                                    ui.add_space(16.0);

                                    ui.horizontal(|ui| {
                                        ui.add_space(60.0);
                                        let yes_button = egui::Button::new(
                                            egui::RichText::new("Sim")
                                                .color(egui::Color32::WHITE),
                                        )
                                        .fill(egui::Color32::from_rgb(79, 109, 245))
                                        .rounding(egui::Rounding::same(8.0))
                                        .min_size(egui::vec2(80.0, 34.0));
                                        if ui.add(yes_button).clicked() {
                                            choice = Some(ConfirmChoice::Yes);
                                        }

                                        ui.add_space(20.0);

                                        let no_button = egui::Button::new(
                                            egui::RichText::new("Não")
                                                .color(egui::Color32::from_rgb(100, 100, 100)),
                                        )
                                        .fill(egui::Color32::from_rgb(245, 245, 245))
                                        .rounding(egui::Rounding::same(8.0))
                                        .min_size(egui::vec2(80.0, 34.0));
                                        if ui.add(no_button).clicked() {
                                            choice = Some(ConfirmChoice::No);
                                        }
                                    });
                                });
                            });
                    });
                });

                // Backdrop click dismisses, same as answering "No". Skip the
                // click that opened the modal.
                if !self.confirm_just_opened && ui.ctx().input(|i| i.pointer.any_click()) {
                    if let Some(pointer_pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
                        let modal_rect = egui::Rect::from_center_size(
                            ui.ctx().screen_rect().center(),
                            modal_size,
                        );
                        if !modal_rect.contains(pointer_pos) {
                            choice = Some(ConfirmChoice::No);
                        }
                    }
                }
                self.confirm_just_opened = false;
            });

        if let Some(choice) = choice {
            self.confirm_save(choice);
        }
    }
}

fn parse_load(input: &str) -> Result<f64, SaveLoadError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let digits_and_one_dot = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.')
        && trimmed.matches('.').count() <= 1;
    if !digits_and_one_dot {
        return Err(SaveLoadError::InvalidInput(trimmed.to_string()));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| SaveLoadError::InvalidInput(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::progress::ProgressRecord;
    use crate::backend::storage::ProgressStorage;
    use crate::ui::components::notifications::NotificationKind;
    use anyhow::{anyhow, Result};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    /// In-memory progress store with a switchable failure mode.
    #[derive(Default)]
    struct MockStorage {
        rows: Mutex<Vec<ProgressRecord>>,
        fail_with: Mutex<Option<String>>,
    }

    impl MockStorage {
        fn rows(&self) -> Vec<ProgressRecord> {
            self.rows.lock().unwrap().clone()
        }

        fn fail_next(&self, message: &str) {
            *self.fail_with.lock().unwrap() = Some(message.to_string());
        }
    }

    impl ProgressStorage for MockStorage {
        fn insert_progress(&self, record: &ProgressRecord) -> Result<()> {
            if let Some(message) = self.fail_with.lock().unwrap().clone() {
                return Err(anyhow!(message));
            }
            self.rows.lock().unwrap().push(record.clone());
            Ok(())
        }

        fn list_progress(&self, exercise_id: &str) -> Result<Vec<ProgressRecord>> {
            Ok(self
                .rows()
                .into_iter()
                .filter(|r| r.exercise_id == exercise_id)
                .collect())
        }
    }

    struct Fixture {
        storage: Arc<MockStorage>,
        notifier: Notifier,
        saved: Rc<RefCell<Vec<f64>>>,
        editor: LoadEditor,
    }

    fn fixture(initial_load: f64) -> Fixture {
        let storage = Arc::new(MockStorage::default());
        let service = Arc::new(ProgressService::new(storage.clone()));
        let notifier = Notifier::new();
        let saved = Rc::new(RefCell::new(Vec::new()));
        let saved_sink = saved.clone();

        let editor = LoadEditor::new(
            initial_load,
            "supino-reto",
            service,
            notifier.clone(),
            Some(Box::new(move |load| saved_sink.borrow_mut().push(load))),
        );

        Fixture {
            storage,
            notifier,
            saved,
            editor,
        }
    }

    #[test]
    fn confirming_yes_appends_one_row_and_fires_on_save() {
        let mut fx = fixture(20.0);

        fx.editor.start_edit();
        fx.editor.set_input("22.5");
        fx.editor.request_save();
        fx.editor.confirm_save(ConfirmChoice::Yes);

        let rows = fx.storage.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].exercise_id, "supino-reto");
        assert_eq!(rows[0].load, 22.5);
        assert_eq!(rows[0].date.len(), 19);

        assert_eq!(fx.editor.label(), "22.5kg");
        assert_eq!(fx.editor.mode(), EditorMode::Display);
        assert_eq!(*fx.saved.borrow(), vec![22.5]);
        assert_eq!(
            fx.notifier.current().unwrap().kind,
            NotificationKind::Success
        );
    }

    #[test]
    fn confirming_no_never_writes() {
        let mut fx = fixture(20.0);

        fx.editor.start_edit();
        fx.editor.set_input("25");
        fx.editor.request_save();
        fx.editor.confirm_save(ConfirmChoice::No);

        assert!(fx.storage.rows().is_empty());
        assert_eq!(fx.editor.label(), "20kg");
        assert_eq!(fx.editor.mode(), EditorMode::Display);
        assert!(fx.saved.borrow().is_empty());
    }

    #[test]
    fn store_failure_leaves_load_unchanged_and_surfaces_the_error() {
        let mut fx = fixture(20.0);
        fx.storage.fail_next("disk full");

        fx.editor.start_edit();
        fx.editor.set_input("22.5");
        fx.editor.request_save();
        fx.editor.confirm_save(ConfirmChoice::Yes);

        assert!(fx.storage.rows().is_empty());
        assert_eq!(fx.editor.label(), "20kg");
        assert!(fx.saved.borrow().is_empty());
        assert_eq!(fx.editor.mode(), EditorMode::Display);

        let notification = fx.notifier.current().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(notification.text.contains("disk full"));
    }

    #[test]
    fn empty_input_writes_zero() {
        let mut fx = fixture(20.0);

        fx.editor.start_edit();
        fx.editor.set_input("");
        fx.editor.request_save();
        fx.editor.confirm_save(ConfirmChoice::Yes);

        let rows = fx.storage.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].load, 0.0);
        assert_eq!(fx.editor.label(), "0kg");
    }

    #[test]
    fn malformed_input_is_surfaced_and_not_written() {
        let mut fx = fixture(20.0);

        fx.editor.start_edit();
        // Bypasses sanitization to exercise the parse guard directly.
        fx.editor.input = "2.2.5".to_string();
        fx.editor.request_save();
        fx.editor.confirm_save(ConfirmChoice::Yes);

        assert!(fx.storage.rows().is_empty());
        assert_eq!(fx.editor.label(), "20kg");
        assert_eq!(
            fx.notifier.current().unwrap().kind,
            NotificationKind::Error
        );
    }

    #[test]
    fn disabled_editor_ignores_edit_requests() {
        let mut fx = fixture(20.0);
        fx.editor.disable();

        fx.editor.start_edit();
        assert_eq!(fx.editor.mode(), EditorMode::Display);

        fx.editor.enable();
        fx.editor.start_edit();
        assert_eq!(fx.editor.mode(), EditorMode::Editing);
    }

    #[test]
    fn input_sanitization_keeps_digits_and_one_dot() {
        let mut fx = fixture(20.0);
        fx.editor.start_edit();

        fx.editor.set_input("2a2.5.0kg");
        assert_eq!(fx.editor.input, "22.50");
    }

    #[test]
    fn negative_initial_load_is_clamped_to_zero() {
        let fx = fixture(-10.0);
        assert_eq!(fx.editor.current_load(), 0.0);
        assert_eq!(fx.editor.label(), "0kg");
    }

    #[test]
    fn parse_load_accepts_empty_and_decimal_values() {
        assert_eq!(parse_load("").unwrap(), 0.0);
        assert_eq!(parse_load("  ").unwrap(), 0.0);
        assert_eq!(parse_load("22.5").unwrap(), 22.5);
        assert_eq!(parse_load("40").unwrap(), 40.0);
        assert!(parse_load("2.2.5").is_err());
        assert!(parse_load("abc").is_err());
        assert!(parse_load("-5").is_err());
    }
}
