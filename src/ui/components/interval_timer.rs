//! # Interval Timer Dialog
//!
//! Modal rest-interval countdown. One background ticker thread drives the
//! clock; the dialog itself is rendered immediate-mode from shared atomic
//! state, so the ticker never touches widgets. The ticker marshals UI
//! updates by requesting a repaint, and the next frame reads the atomics.
//!
//! ## Responsibilities:
//! - Countdown state machine (idle/running/paused/finished/aborted)
//! - Pause, resume, reset and close controls
//! - Exactly-once completion side effects (haptic pulse, notifications,
//!   completion callback)
//!
//! Access discipline for the shared state: UI handlers write `phase` (and
//! `remaining` on reset); the ticker reads `phase` and writes `remaining`.

use eframe::egui;
use log::{info, warn};
use notify_rust::Notification;
use std::f32::consts::PI;
use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

use super::notifications::Notifier;

/// How long the ticker naps while paused before re-checking the phase.
const PAUSED_POLL: Duration = Duration::from_millis(120);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("interval duration must be at least one second")]
    ZeroDuration,
    #[error("timer was already started")]
    AlreadyStarted,
}

/// Discrete lifecycle state of the countdown.
///
/// `Finished` and `Aborted` are terminal; no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TimerPhase {
    Idle = 0,
    Running = 1,
    Paused = 2,
    Finished = 3,
    Aborted = 4,
}

impl TimerPhase {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => TimerPhase::Running,
            2 => TimerPhase::Paused,
            3 => TimerPhase::Finished,
            4 => TimerPhase::Aborted,
            _ => TimerPhase::Idle,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TimerPhase::Finished | TimerPhase::Aborted)
    }
}

/// State shared between the UI thread and the ticker.
struct TimerShared {
    duration: u32,
    phase: AtomicU8,
    remaining: AtomicU32,
}

impl TimerShared {
    fn new(duration: u32) -> Self {
        Self {
            duration,
            phase: AtomicU8::new(TimerPhase::Idle as u8),
            remaining: AtomicU32::new(duration),
        }
    }

    fn phase(&self) -> TimerPhase {
        TimerPhase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::SeqCst)
    }

    fn transition(&self, from: TimerPhase, to: TimerPhase) -> bool {
        self.phase
            .compare_exchange(from as u8, to as u8, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Move any non-terminal phase to `to`. Terminal phases stay put.
    fn force_non_terminal(&self, to: TimerPhase) -> bool {
        loop {
            let current = self.phase();
            if current.is_terminal() {
                return false;
            }
            if self.transition(current, to) {
                return true;
            }
        }
    }

    fn decrement(&self) {
        let _ = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |r| r.checked_sub(1));
    }
}

/// Modal countdown dialog for rest intervals between sets.
///
/// Construct with the interval duration, call [`start`](Self::start) once,
/// and render with [`show`](Self::show) every frame until the phase turns
/// terminal.
pub struct IntervalTimerDialog {
    shared: Arc<TimerShared>,
    host: Option<egui::Context>,
    ticker: Option<JoinHandle<()>>,
    notifier: Notifier,
    haptics: Option<Box<dyn Fn() + Send>>,
    on_complete: Option<Box<dyn FnOnce() + Send>>,
    completion_handled: bool,
}

impl std::fmt::Debug for IntervalTimerDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalTimerDialog")
            .field("duration", &self.shared.duration)
            .field("host", &self.host.is_some())
            .field("ticker", &self.ticker.is_some())
            .field("haptics", &self.haptics.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("completion_handled", &self.completion_handled)
            .finish()
    }
}

impl IntervalTimerDialog {
    /// Create a timer counting down from `duration` seconds.
    pub fn new(
        duration: u32,
        on_complete: Option<Box<dyn FnOnce() + Send>>,
    ) -> Result<Self, TimerError> {
        if duration == 0 {
            return Err(TimerError::ZeroDuration);
        }
        Ok(Self {
            shared: Arc::new(TimerShared::new(duration)),
            host: None,
            ticker: None,
            notifier: Notifier::new(),
            haptics: None,
            on_complete,
            completion_handled: false,
        })
    }

    /// Share the app's snack bar instead of a private one.
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Install the host's haptic-feedback primitive, pulsed once on
    /// natural completion.
    pub fn with_haptics(mut self, haptics: Box<dyn Fn() + Send>) -> Self {
        self.haptics = Some(haptics);
        self
    }

    /// Attach to the UI host, open the dialog and spawn the ticker.
    ///
    /// The context is kept as a non-owning back-reference for repaint
    /// requests; its useful lifetime is bounded by the dialog's.
    pub fn start(&mut self, ctx: &egui::Context) -> Result<(), TimerError> {
        if self.ticker.is_some() || !self.shared.transition(TimerPhase::Idle, TimerPhase::Running)
        {
            return Err(TimerError::AlreadyStarted);
        }

        info!("⏱️ Interval timer started: {}s", self.shared.duration);
        self.host = Some(ctx.clone());
        self.ticker = Some(spawn_ticker(Arc::clone(&self.shared), ctx.clone()));
        Ok(())
    }

    /// Running → paused. Idempotent from paused; no-op otherwise.
    pub fn pause(&mut self) {
        if self.shared.transition(TimerPhase::Running, TimerPhase::Paused) {
            info!("⏸️ Interval timer paused at {}s", self.shared.remaining());
            self.request_repaint();
        }
    }

    /// Paused → running. No-op otherwise.
    pub fn resume(&mut self) {
        if self.shared.transition(TimerPhase::Paused, TimerPhase::Running) {
            info!("▶️ Interval timer resumed at {}s", self.shared.remaining());
            self.request_repaint();
        }
    }

    /// Restore the full duration and hold in paused until resumed. The
    /// ticker survives a reset. No-op from a terminal phase.
    pub fn reset(&mut self) {
        if self.shared.force_non_terminal(TimerPhase::Paused) {
            self.shared
                .remaining
                .store(self.shared.duration, Ordering::SeqCst);
            info!("🔄 Interval timer reset to {}s", self.shared.duration);
            self.request_repaint();
        }
    }

    /// Abort the countdown and dismiss the dialog. The completion callback
    /// does not fire. No-op from a terminal phase.
    pub fn close(&mut self) {
        if self.shared.force_non_terminal(TimerPhase::Aborted) {
            info!("❌ Interval timer closed at {}s", self.shared.remaining());
            self.request_repaint();
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.shared.phase()
    }

    pub fn remaining(&self) -> u32 {
        self.shared.remaining()
    }

    pub fn duration(&self) -> u32 {
        self.shared.duration
    }

    /// Whether the background ticker has exited.
    pub fn ticker_finished(&self) -> bool {
        self.ticker.as_ref().map_or(true, JoinHandle::is_finished)
    }

    fn request_repaint(&self) {
        if let Some(host) = &self.host {
            host.request_repaint();
        }
    }

    /// Render the dialog. Call once per frame; after the phase turns
    /// terminal this dismisses the dialog and (on natural expiry) runs the
    /// completion side effects.
    pub fn show(&mut self, ctx: &egui::Context) {
        match self.shared.phase() {
            TimerPhase::Running | TimerPhase::Paused => self.render_dialog(ctx),
            TimerPhase::Finished => self.handle_completion(),
            TimerPhase::Idle | TimerPhase::Aborted => {}
        }
    }

    /// Completion side effects, guarded to run at most once.
    fn handle_completion(&mut self) {
        if self.completion_handled {
            return;
        }
        self.completion_handled = true;

        info!("✅ Interval complete");
        if let Some(haptics) = &self.haptics {
            haptics();
        }
        self.notifier.success("Interval complete");
        show_desktop_notification();

        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        #[derive(Clone, Copy)]
        enum Action {
            Pause,
            Resume,
            Reset,
            Close,
        }
        let mut action: Option<Action> = None;

        let paused = self.shared.phase() == TimerPhase::Paused;
        let remaining = self.shared.remaining();
        let fraction = remaining as f32 / self.shared.duration as f32;
        let modal_size = egui::vec2(300.0, 320.0);

        egui::Area::new(egui::Id::new("interval_timer_overlay"))
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
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(modal_size);
                                ui.set_max_size(modal_size);

                                ui.vertical_centered(|ui| {
                                    ui.add_space(10.0);
                                    ui.label(
                                        egui::RichText::new(format!("Intervalo: {}s", remaining))
                                            .font(egui::FontId::new(
                                                24.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(egui::Color32::from_rgb(60, 60, 60)),
                                    );
                                    ui.add_space(12.0);

                                    draw_progress_ring(ui, fraction, paused);

                                    ui.add_space(16.0);
                                    ui.horizontal(|ui| {
                                        ui.add_space(16.0);

                                        if paused {
                                            if styled_button(ui, "Continuar", true) {
                                                action = Some(Action::Resume);
                                            }
                                        } else if styled_button(ui, "Pausar", true) {
                                            action = Some(Action::Pause);
                                        }

                                        ui.add_space(8.0);
                                        if styled_button(ui, "Reiniciar", false) {
                                            action = Some(Action::Reset);
                                        }
                                        ui.add_space(8.0);
                                        if styled_button(ui, "Fechar", false) {
                                            action = Some(Action::Close);
                                        }
                                    });
                                });
                            });
                    });
                });

                // A click on the backdrop dismisses the dialog, same as the
                // close button.
                if ui.ctx().input(|i| i.pointer.any_click()) {
                    if let Some(pointer_pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
                        let modal_rect = egui::Rect::from_center_size(
                            ui.ctx().screen_rect().center(),
                            modal_size,
                        );
                        if !modal_rect.contains(pointer_pos) {
                            action = Some(Action::Close);
                        }
                    }
                }
            });

        match action {
            Some(Action::Pause) => self.pause(),
            Some(Action::Resume) => self.resume(),
            Some(Action::Reset) => self.reset(),
            Some(Action::Close) => self.close(),
            None => {}
        }
    }
}

impl Drop for IntervalTimerDialog {
    fn drop(&mut self) {
        // The ticker must not outlive the dialog.
        self.shared.force_non_terminal(TimerPhase::Aborted);
    }
}

/// The countdown loop. Exits when the phase turns terminal.
fn spawn_ticker(shared: Arc<TimerShared>, ctx: egui::Context) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            match shared.phase() {
                TimerPhase::Running => {
                    if shared.remaining() == 0 {
                        // Natural expiry. The effects run on the UI thread
                        // on the frame requested below.
                        shared.transition(TimerPhase::Running, TimerPhase::Finished);
                        ctx.request_repaint();
                        break;
                    }
                    ctx.request_repaint();
                    thread::sleep(Duration::from_secs(1));
                    // A pause or reset may have landed during the sleep.
                    if shared.phase() == TimerPhase::Running {
                        shared.decrement();
                    }
                }
                TimerPhase::Paused => thread::sleep(PAUSED_POLL),
                TimerPhase::Idle | TimerPhase::Finished | TimerPhase::Aborted => break,
            }
        }
        ctx.request_repaint();
    })
}

fn styled_button(ui: &mut egui::Ui, text: &str, primary: bool) -> bool {
    let (fill, text_color) = if primary {
        (egui::Color32::from_rgb(79, 109, 245), egui::Color32::WHITE)
    } else {
        (
            egui::Color32::from_rgb(245, 245, 245),
            egui::Color32::from_rgb(100, 100, 100),
        )
    };
    let button = egui::Button::new(egui::RichText::new(text).color(text_color))
        .fill(fill)
        .rounding(egui::Rounding::same(8.0))
        .min_size(egui::vec2(76.0, 32.0));
    ui.add(button).clicked()
}

/// Donut-style countdown ring, filled by the remaining fraction.
fn draw_progress_ring(ui: &mut egui::Ui, fraction: f32, paused: bool) {
    let radius = 60.0;
    let stroke_width = 10.0;
    let desired = egui::vec2(radius * 2.2, radius * 2.2);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let center = rect.center();
    let painter = ui.painter();

    painter.circle_stroke(
        center,
        radius,
        egui::Stroke::new(stroke_width, egui::Color32::from_rgb(230, 230, 230)),
    );

    let fraction = fraction.clamp(0.0, 1.0);
    if fraction > 0.0 {
        let color = if paused {
            egui::Color32::from_rgb(180, 180, 180)
        } else {
            egui::Color32::from_rgb(79, 109, 245)
        };
        let start_angle = -PI / 2.0;
        let end_angle = start_angle + 2.0 * PI * fraction;

        // egui has no native arc, so draw short line segments.
        let num_segments = (((end_angle - start_angle).abs() * radius / 3.0).ceil() as i32)
            .clamp(8, 100);
        let angle_step = (end_angle - start_angle) / num_segments as f32;
        for i in 0..num_segments {
            let angle1 = start_angle + angle_step * i as f32;
            let angle2 = start_angle + angle_step * (i + 1) as f32;
            let point1 = egui::pos2(
                center.x + radius * angle1.cos(),
                center.y + radius * angle1.sin(),
            );
            let point2 = egui::pos2(
                center.x + radius * angle2.cos(),
                center.y + radius * angle2.sin(),
            );
            painter.line_segment([point1, point2], egui::Stroke::new(stroke_width, color));
        }
    }
}

fn show_desktop_notification() {
    if let Err(err) = Notification::new()
        .summary("Workout Tracker")
        .body("Interval complete")
        .show()
    {
        warn!("Failed to show desktop notification: {}", err);
    }
}
