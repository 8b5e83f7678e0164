//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::DashboardTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event on poll timeout (no periodic work today, kept for parity
    /// with the event loop contract)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    /// Flip light/dark and persist the new choice
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Navigation rail
    // ─────────────────────────────────────────────────────────
    /// Move rail selection down one visible row
    NavNext,
    /// Move rail selection up one visible row
    NavPrev,
    /// Activate the selected row (toggle a group / follow a leaf)
    NavActivate,

    // ─────────────────────────────────────────────────────────
    // Overlay rail (narrow terminals)
    // ─────────────────────────────────────────────────────────
    /// Toggle the slide-in rail overlay
    ToggleOverlay,
    /// Dismiss the overlay (backdrop gesture); idempotent
    CloseOverlay,

    // ─────────────────────────────────────────────────────────
    // Dashboard tabs
    // ─────────────────────────────────────────────────────────
    /// Jump to a specific dashboard tab
    SelectTab(DashboardTab),
    /// Cycle to the next dashboard tab
    NextTab,
    /// Cycle to the previous dashboard tab
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Widget display filters (stored only; data stays static)
    // ─────────────────────────────────────────────────────────
    /// Cycle the sources time range
    CycleSourceRange,
    /// Cycle the sources display metric
    CycleSourceMetric,
    /// Cycle the trend graph period
    CycleTrendRange,
}
