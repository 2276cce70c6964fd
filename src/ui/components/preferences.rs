//! # User Preferences Applier
//!
//! Maps a [`UserProfile`] record onto the egui visuals: light/dark theme,
//! primary color scheme, and font family. Application is best-effort; a
//! profile must never block the app from loading, so every failure here is
//! logged and swallowed.

use eframe::egui;
use log::{info, warn};

use super::theme::{self, ColorScheme};
use crate::backend::domain::models::profile::{ThemeChoice, UserProfile};

/// Apply a user's visual preferences to the UI.
pub fn apply_user_preferences(ctx: &egui::Context, profile: &UserProfile) {
    let dark_mode = profile.theme == ThemeChoice::Dark;
    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    let primary = profile
        .primary_color
        .as_deref()
        .map(theme::resolve_palette_color)
        .unwrap_or_else(theme::default_primary_color);
    let scheme = ColorScheme::for_primary(primary, dark_mode);

    visuals.selection.bg_fill = scheme.primary;
    visuals.selection.stroke = egui::Stroke::new(1.0, scheme.on_primary);
    visuals.hyperlink_color = scheme.primary;
    visuals.widgets.active.bg_fill = scheme.primary;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.5, scheme.on_primary);
    visuals.widgets.hovered.bg_fill = scheme.secondary;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.5, scheme.on_secondary);

    ctx.set_visuals(visuals);

    apply_font_family(ctx, profile.font_family.as_deref());

    info!(
        "🎨 Applied preferences: theme={:?}, primary={}",
        profile.theme,
        profile.primary_color.as_deref().unwrap_or("(default)")
    );
}

/// Promote a registered font family to the main text styles.
///
/// egui can only use families whose font data was registered up front, so an
/// unregistered name keeps the default proportional family.
fn apply_font_family(ctx: &egui::Context, font_family: Option<&str>) {
    let Some(name) = font_family else {
        return;
    };

    let family = egui::FontFamily::Name(name.into());
    let registered = ctx.fonts(|fonts| fonts.families().contains(&family));
    if !registered {
        warn!("Font family '{}' is not registered, keeping default", name);
        return;
    }

    ctx.set_style({
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, family.clone()),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, family.clone()),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, family),
        );
        style
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply_in_frame(profile: &UserProfile) -> egui::Context {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            apply_user_preferences(ctx, profile);
        });
        ctx
    }

    #[test]
    fn dark_theme_yields_dark_visuals() {
        let profile = UserProfile::from_json(&json!({"theme": "dark"}));
        let ctx = apply_in_frame(&profile);
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn absent_theme_yields_light_visuals() {
        let profile = UserProfile::from_json(&json!({}));
        let ctx = apply_in_frame(&profile);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn unknown_primary_color_falls_back_without_panicking() {
        let profile = UserProfile::from_json(&json!({
            "theme": "dark",
            "primary_color": "NOT_A_COLOR",
            "font_family": "Inter"
        }));
        let ctx = apply_in_frame(&profile);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(
            ctx.style().visuals.selection.bg_fill,
            theme::default_primary_color()
        );
    }

    #[test]
    fn known_primary_color_lands_in_visuals() {
        let profile = UserProfile::from_json(&json!({"primary_color": "teal"}));
        let ctx = apply_in_frame(&profile);
        assert_eq!(
            ctx.style().visuals.selection.bg_fill,
            theme::resolve_palette_color("TEAL")
        );
    }

    #[test]
    fn unregistered_font_family_keeps_default_text_styles() {
        let profile = UserProfile::from_json(&json!({"font_family": "Inter"}));
        let ctx = apply_in_frame(&profile);
        let style = ctx.style();
        let body = style.text_styles.get(&egui::TextStyle::Body).unwrap();
        assert_eq!(body.family, egui::FontFamily::Proportional);
    }
}
