//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle: configuration and theme resolution,
//! the synchronous draw/poll/update loop, and the side-effect actions the
//! update function hands back (preference persistence).

use std::path::{Path, PathBuf};

use leadboard_app::config::{self, IconMode};
use leadboard_app::handler::UpdateAction;
use leadboard_app::message::Message;
use leadboard_app::state::AppState;
use leadboard_app::update;
use leadboard_core::prelude::*;
use leadboard_core::theme::{detect_ambient_theme, resolve_theme, ThemeMode};

use super::{event, render, terminal};

/// Startup options from the CLI.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Configuration directory; defaults to the platform config dir.
    pub config_dir: Option<PathBuf>,
    /// Force the theme for this session (still persisted on toggle).
    pub theme_override: Option<ThemeMode>,
    /// Force plain Unicode icons regardless of settings.
    pub ascii_icons: bool,
}

/// Run the TUI application
pub fn run(options: RunOptions) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let config_dir = options
        .config_dir
        .unwrap_or_else(config::default_config_dir);

    // Load configuration
    let mut settings = config::load_settings(&config_dir);
    if options.ascii_icons {
        settings.ui.icons = IconMode::Unicode;
    }

    // Theme: CLI override, else persisted > ambient > light
    let theme = options.theme_override.unwrap_or_else(|| {
        resolve_theme(
            config::load_persisted_theme(&config_dir),
            detect_ambient_theme(),
        )
    });
    info!("Starting with theme={theme}, config_dir={config_dir:?}");

    let mut state = AppState::new(settings, theme);

    // Initialize terminal
    let mut term = ratatui::init();

    let result = run_loop(&mut term, &mut state, &config_dir);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    config_dir: &Path,
) -> Result<()> {
    while !state.should_quit {
        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, config_dir);
        }
    }

    Ok(())
}

/// Run a message and any follow-ups through update, performing actions.
fn process_message(state: &mut AppState, message: Message, config_dir: &Path) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        if let Some(action) = result.action {
            handle_action(action, config_dir);
        }
        next = result.message;
    }
}

/// Perform a side-effect action from update.
///
/// Failures are logged and never crash the UI.
fn handle_action(action: UpdateAction, config_dir: &Path) {
    match action {
        UpdateAction::SavePreferences { theme } => {
            if let Err(e) = config::persist_theme(config_dir, theme) {
                warn!("Failed to persist theme preference: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadboard_app::config::Settings;
    use leadboard_app::InputKey;
    use tempfile::tempdir;

    #[test]
    fn test_process_message_follows_key_chain() {
        let temp = tempdir().unwrap();
        let mut state = AppState::new(Settings::default(), ThemeMode::Light);
        // 'q' maps to Quit via the follow-up message chain.
        process_message(&mut state, Message::Key(InputKey::Char('q')), temp.path());
        assert!(state.should_quit);
    }

    #[test]
    fn test_theme_action_persists_choice() {
        let temp = tempdir().unwrap();
        let mut state = AppState::new(Settings::default(), ThemeMode::Light);
        process_message(&mut state, Message::ToggleTheme, temp.path());

        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(
            config::load_persisted_theme(temp.path()),
            Some(ThemeMode::Dark)
        );
    }

    #[test]
    fn test_save_failure_does_not_crash() {
        let temp = tempdir().unwrap();
        // A file where the config dir should be makes the save fail.
        let blocked = temp.path().join("not-a-dir");
        std::fs::write(&blocked, "x").unwrap();

        let mut state = AppState::new(Settings::default(), ThemeMode::Light);
        process_message(&mut state, Message::ToggleTheme, &blocked);
        // The in-memory flip still happened.
        assert_eq!(state.theme, ThemeMode::Dark);
    }
}
