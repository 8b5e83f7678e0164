//! Main update function - handles state transitions (TEA pattern)

use leadboard_core::nav::View;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            let theme = state.toggle_theme();
            UpdateResult::action(UpdateAction::SavePreferences { theme })
        }

        // ─────────────────────────────────────────────────────────
        // Navigation rail
        // ─────────────────────────────────────────────────────────
        Message::NavNext => {
            state.nav.select_next();
            UpdateResult::none()
        }

        Message::NavPrev => {
            state.nav.select_prev();
            UpdateResult::none()
        }

        Message::NavActivate => {
            if let Some(view) = state.nav.activate() {
                state.view = view;
                // Following a link dismisses the narrow-mode overlay.
                state.overlay_open = false;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Overlay rail
        // ─────────────────────────────────────────────────────────
        Message::ToggleOverlay => {
            state.overlay_open = !state.overlay_open;
            UpdateResult::none()
        }

        Message::CloseOverlay => {
            state.overlay_open = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard tabs
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            if state.view == View::Dashboard {
                state.dashboard.active_tab = tab;
            }
            UpdateResult::none()
        }

        Message::NextTab => {
            if state.view == View::Dashboard {
                state.dashboard.active_tab = state.dashboard.active_tab.next();
            }
            UpdateResult::none()
        }

        Message::PrevTab => {
            if state.view == View::Dashboard {
                state.dashboard.active_tab = state.dashboard.active_tab.prev();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Widget display filters (stored only; data stays static)
        // ─────────────────────────────────────────────────────────
        Message::CycleSourceRange => {
            state.dashboard.source_range = state.dashboard.source_range.next();
            UpdateResult::none()
        }

        Message::CycleSourceMetric => {
            state.dashboard.source_metric = state.dashboard.source_metric.next();
            UpdateResult::none()
        }

        Message::CycleTrendRange => {
            state.dashboard.trend_range = state.dashboard.trend_range.next();
            UpdateResult::none()
        }
    }
}
