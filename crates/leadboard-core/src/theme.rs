//! Light/dark theme mode and its startup resolution.
//!
//! The mode itself is a plain two-valued flag; the concrete color palettes
//! live in the TUI crate. Resolution order on startup:
//!
//! 1. A previously persisted user choice
//! 2. The terminal's ambient background signal (`COLORFGBG` convention)
//! 3. Light

use serde::{Deserialize, Serialize};

/// The color theme flag. Exactly two values; toggling is a strict flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode. `toggled(toggled(x)) == x` always holds.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(crate::error::Error::config_invalid(format!(
                "unknown theme '{other}' (expected 'light' or 'dark')"
            ))),
        }
    }
}

/// Resolve the startup theme.
///
/// A persisted user choice always wins; the ambient terminal signal is only
/// consulted on first run, and the fallback is light.
pub fn resolve_theme(persisted: Option<ThemeMode>, ambient: Option<ThemeMode>) -> ThemeMode {
    persisted.or(ambient).unwrap_or(ThemeMode::Light)
}

/// Interpret a `COLORFGBG` value ("<fg>;<bg>", ANSI palette indices).
///
/// Background indices 0-6 and 8 are the dark palette entries; 7 and the
/// bright range read as a light background. Unparseable values yield `None`.
pub fn ambient_from_colorfgbg(value: Option<&str>) -> Option<ThemeMode> {
    let raw = value?;
    let bg = raw.rsplit(';').next()?.trim();
    let index: u8 = bg.parse().ok()?;
    if index <= 6 || index == 8 {
        Some(ThemeMode::Dark)
    } else {
        Some(ThemeMode::Light)
    }
}

/// Read the ambient theme signal from the process environment.
pub fn detect_ambient_theme() -> Option<ThemeMode> {
    ambient_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}
