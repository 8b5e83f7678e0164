//! Key event handlers

use leadboard_core::nav::View;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, DashboardTab};

/// Map a key press to a message, given the current state.
///
/// The overlay captures Esc while open; everything else is global.
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Theme flip
        InputKey::Char('t') => Some(Message::ToggleTheme),

        // Rail overlay (narrow terminals)
        InputKey::Char('m') | InputKey::CharCtrl('b') => Some(Message::ToggleOverlay),
        InputKey::Esc if state.overlay_open => Some(Message::CloseOverlay),

        // Rail navigation
        InputKey::Up => Some(Message::NavPrev),
        InputKey::Down => Some(Message::NavNext),
        InputKey::Enter => Some(Message::NavActivate),

        // Dashboard tabs
        InputKey::Tab | InputKey::Right => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Left => Some(Message::PrevTab),
        InputKey::Char('1') => Some(Message::SelectTab(DashboardTab::Leads)),
        InputKey::Char('2') => Some(Message::SelectTab(DashboardTab::Sales)),

        // Widget display filters (dashboard only)
        InputKey::Char('s') if state.view == View::Dashboard => Some(Message::CycleSourceRange),
        InputKey::Char('d') if state.view == View::Dashboard => Some(Message::CycleSourceMetric),
        InputKey::Char('p') if state.view == View::Dashboard => Some(Message::CycleTrendRange),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let state = AppState::default();
        assert_eq!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::Quit)
        );
        assert_eq!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_esc_only_closes_open_overlay() {
        let mut state = AppState::default();
        assert_eq!(handle_key(&state, InputKey::Esc), None);

        state.overlay_open = true;
        assert_eq!(
            handle_key(&state, InputKey::Esc),
            Some(Message::CloseOverlay)
        );
    }

    #[test]
    fn test_tab_keys() {
        let state = AppState::default();
        assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::NextTab));
        assert_eq!(
            handle_key(&state, InputKey::BackTab),
            Some(Message::PrevTab)
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('2')),
            Some(Message::SelectTab(DashboardTab::Sales))
        );
    }

    #[test]
    fn test_filter_keys_only_on_dashboard() {
        let mut state = AppState::default();
        assert_eq!(
            handle_key(&state, InputKey::Char('s')),
            Some(Message::CycleSourceRange)
        );

        state.view = View::Profile;
        assert_eq!(handle_key(&state, InputKey::Char('s')), None);
        assert_eq!(handle_key(&state, InputKey::Char('d')), None);
        assert_eq!(handle_key(&state, InputKey::Char('p')), None);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = AppState::default();
        assert_eq!(handle_key(&state, InputKey::Char('z')), None);
    }
}
