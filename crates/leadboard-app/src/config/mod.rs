//! Configuration file parsing for leadboard
//!
//! Supports:
//! - `settings.toml` - Application settings
//! - `settings.local.toml` - User preferences (the persisted theme choice)

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, load_persisted_theme, load_settings, load_user_preferences, persist_theme,
    save_user_preferences,
};
pub use types::{IconMode, Settings, UiSettings, UserPreferences};
