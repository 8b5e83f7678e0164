//! Settings and user-preference persistence.
//!
//! Files live under the platform config dir (`~/.config/leadboard/` on
//! Linux), overridable for tests and via `--config-dir`.

use std::path::{Path, PathBuf};

use leadboard_core::prelude::*;
use leadboard_core::theme::ThemeMode;

use super::types::{Settings, UserPreferences};

const SETTINGS_FILENAME: &str = "settings.toml";
const PREFS_FILENAME: &str = "settings.local.toml";

/// Default configuration directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("leadboard")
}

/// Load settings from `<config_dir>/settings.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let path = config_dir.join(SETTINGS_FILENAME);

    if !path.exists() {
        debug!("No settings file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load user preferences from `<config_dir>/settings.local.toml`
///
/// Returns None if the file doesn't exist (not an error - first run).
pub fn load_user_preferences(config_dir: &Path) -> Option<UserPreferences> {
    let path = config_dir.join(PREFS_FILENAME);

    if !path.exists() {
        debug!("No preferences file at {:?}", path);
        return None;
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

/// Save user preferences to `<config_dir>/settings.local.toml`
///
/// Creates the directory if needed. Uses atomic write (temp file + rename).
pub fn save_user_preferences(config_dir: &Path, prefs: &UserPreferences) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let path = config_dir.join(PREFS_FILENAME);
    let temp_path = config_dir.join(".settings.local.toml.tmp");

    let header = "# User preferences, written by lboard\n\
                  # The theme key records the last explicit light/dark choice.\n\n";

    let content = toml::to_string_pretty(prefs)
        .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

    let full_content = format!("{}{}", header, content);

    // Atomic write: write to temp, then rename
    std::fs::write(&temp_path, full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved preferences to {:?}", path);
    Ok(())
}

/// The persisted theme choice, if any.
pub fn load_persisted_theme(config_dir: &Path) -> Option<ThemeMode> {
    load_user_preferences(config_dir)?.theme
}

/// Record a theme choice, preserving any other preferences in the file.
pub fn persist_theme(config_dir: &Path, theme: ThemeMode) -> Result<()> {
    let mut prefs = load_user_preferences(config_dir).unwrap_or_default();
    prefs.theme = Some(theme);
    save_user_preferences(config_dir, &prefs)
}
