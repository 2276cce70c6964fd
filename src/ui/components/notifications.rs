//! # In-App Notifications
//!
//! Transient snack-bar notifications rendered at the bottom of the screen.
//! Widgets push messages through a shared [`Notifier`] handle; the newest
//! message is shown with a dismiss button and auto-expires after a few
//! seconds.

use eframe::egui;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::theme;

const AUTO_DISMISS: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    raised_at: Instant,
}

#[derive(Debug, Default)]
struct NotificationState {
    queue: VecDeque<Notification>,
}

/// Cloneable handle to the shared notification queue.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    state: Arc<Mutex<NotificationState>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(text.into(), NotificationKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(text.into(), NotificationKind::Error);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(text.into(), NotificationKind::Info);
    }

    fn push(&self, text: String, kind: NotificationKind) {
        let mut state = self.state.lock().unwrap();
        state.queue.push_back(Notification {
            text,
            kind,
            raised_at: Instant::now(),
        });
    }

    /// The notification currently on screen, if any.
    pub fn current(&self) -> Option<Notification> {
        let mut state = self.state.lock().unwrap();
        Self::drop_expired(&mut state);
        state.queue.front().cloned()
    }

    /// Dismiss the notification currently on screen.
    pub fn dismiss(&self) {
        let mut state = self.state.lock().unwrap();
        state.queue.pop_front();
    }

    fn drop_expired(state: &mut NotificationState) {
        while let Some(front) = state.queue.front() {
            if front.raised_at.elapsed() >= AUTO_DISMISS {
                state.queue.pop_front();
            } else {
                break;
            }
        }
    }

    /// Render the snack bar. Call once per frame, after the main content.
    pub fn show(&self, ctx: &egui::Context) {
        let Some(notification) = self.current() else {
            return;
        };

        let accent = match notification.kind {
            NotificationKind::Success => egui::Color32::from_rgb(67, 160, 71),
            NotificationKind::Error => egui::Color32::from_rgb(211, 47, 47),
            NotificationKind::Info => theme::default_primary_color(),
        };

        egui::Area::new(egui::Id::new("snack_bar"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(50, 50, 50))
                    .stroke(egui::Stroke::new(2.0, accent))
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&notification.text)
                                    .font(egui::FontId::new(
                                        14.0,
                                        egui::FontFamily::Proportional,
                                    ))
                                    .color(egui::Color32::WHITE),
                            );
                            ui.add_space(12.0);
                            if ui
                                .button(egui::RichText::new("✕").color(egui::Color32::WHITE))
                                .clicked()
                            {
                                self.dismiss();
                            }
                        });
                    });
            });

        // Keep repainting so the auto-dismiss fires without user input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_message_waits_behind_current() {
        let notifier = Notifier::new();
        notifier.success("saved");
        notifier.error("failed");

        let current = notifier.current().unwrap();
        assert_eq!(current.text, "saved");
        assert_eq!(current.kind, NotificationKind::Success);

        notifier.dismiss();
        let next = notifier.current().unwrap();
        assert_eq!(next.text, "failed");
        assert_eq!(next.kind, NotificationKind::Error);
    }

    #[test]
    fn dismiss_on_empty_queue_is_a_no_op() {
        let notifier = Notifier::new();
        notifier.dismiss();
        assert!(notifier.current().is_none());
    }

    #[test]
    fn handles_share_one_queue() {
        let notifier = Notifier::new();
        let clone = notifier.clone();
        clone.info("hello");
        assert_eq!(notifier.current().unwrap().text, "hello");
    }
}
