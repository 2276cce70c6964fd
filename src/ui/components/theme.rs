//! # Color Palette & Theme
//!
//! Centralized color configuration for the workout tracker widgets. The
//! palette is a closed set of named tokens; user preferences reference
//! colors by token name and unknown names resolve to the default.

use eframe::egui::Color32;
use log::warn;

/// Token used when a profile names no primary color, or an unknown one.
pub const DEFAULT_PRIMARY_TOKEN: &str = "INDIGO";

/// The closed palette of named color tokens, resolved by uppercase name.
const PALETTE: &[(&str, Color32)] = &[
    ("RED", Color32::from_rgb(244, 67, 54)),
    ("PINK", Color32::from_rgb(233, 30, 99)),
    ("PURPLE", Color32::from_rgb(156, 39, 176)),
    ("DEEP_PURPLE", Color32::from_rgb(103, 58, 183)),
    ("INDIGO", Color32::from_rgb(63, 81, 181)),
    ("BLUE", Color32::from_rgb(33, 150, 243)),
    ("LIGHT_BLUE", Color32::from_rgb(3, 169, 244)),
    ("CYAN", Color32::from_rgb(0, 188, 212)),
    ("TEAL", Color32::from_rgb(0, 150, 136)),
    ("GREEN", Color32::from_rgb(76, 175, 80)),
    ("LIGHT_GREEN", Color32::from_rgb(139, 195, 74)),
    ("LIME", Color32::from_rgb(205, 220, 57)),
    ("YELLOW", Color32::from_rgb(255, 235, 59)),
    ("AMBER", Color32::from_rgb(255, 193, 7)),
    ("ORANGE", Color32::from_rgb(255, 152, 0)),
    ("DEEP_ORANGE", Color32::from_rgb(255, 87, 34)),
    ("BROWN", Color32::from_rgb(121, 85, 72)),
    ("GREY", Color32::from_rgb(158, 158, 158)),
    ("BLUE_GREY", Color32::from_rgb(96, 125, 139)),
];

/// Resolve a palette token to its color.
///
/// Matching is case-insensitive. Unknown tokens fall back to the default
/// palette color; the miss is logged but never surfaced.
pub fn resolve_palette_color(name: &str) -> Color32 {
    let token = name.trim().to_uppercase();
    match PALETTE.iter().find(|(t, _)| *t == token) {
        Some((_, color)) => *color,
        None => {
            warn!(
                "Unknown palette token '{}', falling back to {}",
                name, DEFAULT_PRIMARY_TOKEN
            );
            default_primary_color()
        }
    }
}

pub fn default_primary_color() -> Color32 {
    resolve_token_strict(DEFAULT_PRIMARY_TOKEN)
}

fn resolve_token_strict(token: &str) -> Color32 {
    PALETTE
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, c)| *c)
        .unwrap_or(Color32::from_rgb(63, 81, 181))
}

/// Four-field color scheme derived from a primary color, matching the
/// theming surface the widgets expose (primary, secondary, on-primary,
/// on-secondary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: Color32,
    pub secondary: Color32,
    pub on_primary: Color32,
    pub on_secondary: Color32,
}

impl ColorScheme {
    /// Derive a scheme from a primary color. The secondary is the primary
    /// shifted toward the background (lighter in light mode, darker in dark
    /// mode); the on-colors pick black or white by luminance for contrast.
    pub fn for_primary(primary: Color32, dark_mode: bool) -> Self {
        let toward = if dark_mode {
            Color32::from_rgb(20, 20, 25)
        } else {
            Color32::WHITE
        };
        let secondary = mix(primary, toward, 0.35);

        Self {
            primary,
            secondary,
            on_primary: contrast_text_color(primary),
            on_secondary: contrast_text_color(secondary),
        }
    }
}

/// Linear interpolation between two colors, componentwise.
fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| (x as f32 * (1.0 - t) + y as f32 * t) as u8;
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Black or white, whichever reads better on the given background.
fn contrast_text_color(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance > 150.0 {
        Color32::from_rgb(30, 30, 30)
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_token_resolves() {
        assert_eq!(resolve_palette_color("TEAL"), Color32::from_rgb(0, 150, 136));
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(
            resolve_palette_color("deep_orange"),
            resolve_palette_color("DEEP_ORANGE")
        );
    }

    #[test]
    fn unknown_token_falls_back_to_default() {
        assert_eq!(resolve_palette_color("NOT_A_COLOR"), default_primary_color());
    }

    #[test]
    fn scheme_on_colors_contrast_with_their_backgrounds() {
        let scheme = ColorScheme::for_primary(resolve_palette_color("YELLOW"), false);
        // Yellow is bright, so the text on it must be dark.
        assert_eq!(scheme.on_primary, Color32::from_rgb(30, 30, 30));

        let scheme = ColorScheme::for_primary(resolve_palette_color("INDIGO"), false);
        assert_eq!(scheme.on_primary, Color32::WHITE);
    }

    #[test]
    fn dark_mode_secondary_is_darker_than_primary() {
        let primary = resolve_palette_color("BLUE");
        let scheme = ColorScheme::for_primary(primary, true);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(scheme.secondary) < sum(primary));
    }
}
