//! Configuration types for leadboard
//!
//! Defines:
//! - `Settings` - Application settings (`settings.toml`)
//! - `UserPreferences` - Per-user persisted state (`settings.local.toml`)

use leadboard_core::theme::ThemeMode;
use serde::{Deserialize, Serialize};

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use safe Unicode characters (default, works in all
/// terminals) or Nerd Font glyphs (requires a Nerd Font installed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// Application settings (`settings.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Show the keybinding hints in the header
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// User preferences (`settings.local.toml`)
///
/// The persistence surface is deliberately a single key: the theme choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.show_key_hints);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"nerd_fonts\"\n").unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(settings.ui.show_key_hints);
    }

    #[test]
    fn test_settings_deserialize_empty() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_preferences_theme_roundtrip() {
        let prefs = UserPreferences {
            theme: Some(ThemeMode::Dark),
        };
        let serialized = toml::to_string(&prefs).unwrap();
        assert!(serialized.contains("theme = \"dark\""));
        let parsed: UserPreferences = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn test_preferences_empty_file() {
        let prefs: UserPreferences = toml::from_str("").unwrap();
        assert_eq!(prefs.theme, None);
    }
}
