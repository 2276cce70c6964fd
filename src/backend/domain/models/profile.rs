//! Domain model for a user's visual preferences.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Light/dark theme selection. Anything unrecognized decodes as light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

/// User-scoped record of visual preferences.
///
/// Profiles arrive as loosely-typed mappings; every field is optional and
/// unknown keys are ignored. Missing or malformed values fall back to the
/// defaults rather than failing, since preferences are never load-blocking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub theme: ThemeChoice,
    /// Named token from the closed color palette, resolved case-insensitively.
    #[serde(default)]
    pub primary_color: Option<String>,
    /// Font family name expected to be registered with the UI host.
    #[serde(default)]
    pub font_family: Option<String>,
}

impl UserProfile {
    /// Decode a profile from a JSON mapping, tolerating missing keys and
    /// unrecognized values.
    pub fn from_json(value: &Value) -> Self {
        let theme = match value.get("theme").and_then(Value::as_str) {
            Some("dark") => ThemeChoice::Dark,
            _ => ThemeChoice::Light,
        };

        let text_field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            theme,
            primary_color: text_field("primary_color"),
            font_family: text_field("font_family"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_mapping_yields_defaults() {
        let profile = UserProfile::from_json(&json!({}));
        assert_eq!(profile.theme, ThemeChoice::Light);
        assert_eq!(profile.primary_color, None);
        assert_eq!(profile.font_family, None);
    }

    #[test]
    fn dark_theme_is_recognized() {
        let profile = UserProfile::from_json(&json!({"theme": "dark"}));
        assert_eq!(profile.theme, ThemeChoice::Dark);
    }

    #[test]
    fn unrecognized_theme_falls_back_to_light() {
        let profile = UserProfile::from_json(&json!({"theme": "solarized"}));
        assert_eq!(profile.theme, ThemeChoice::Light);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let profile = UserProfile::from_json(&json!({
            "theme": "dark",
            "primary_color": "TEAL",
            "font_family": "Inter",
            "favorite_exercise": "deadlift"
        }));
        assert_eq!(profile.theme, ThemeChoice::Dark);
        assert_eq!(profile.primary_color.as_deref(), Some("TEAL"));
        assert_eq!(profile.font_family.as_deref(), Some("Inter"));
    }

    #[test]
    fn blank_strings_are_treated_as_absent() {
        let profile = UserProfile::from_json(&json!({"primary_color": "  ", "font_family": ""}));
        assert_eq!(profile.primary_color, None);
        assert_eq!(profile.font_family, None);
    }
}
