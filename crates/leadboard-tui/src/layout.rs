//! Screen layout definitions for the TUI
//!
//! Provides the responsive shell split: a fixed navigation rail column on
//! wide terminals, full-width content (with the rail as an overlay) on
//! narrow ones.

use ratatui::layout::{Constraint, Layout, Rect};

/// Fixed rail column width on wide terminals.
pub const RAIL_WIDTH: u16 = 24;

/// Terminals narrower than this hide the rail behind the overlay toggle.
pub const NARROW_BREAKPOINT: u16 = 90;

/// Fixed header band height (border rows included).
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation rail column; `None` on narrow terminals.
    pub rail: Option<Rect>,

    /// Header band above the content area only.
    pub header: Rect,

    /// Main content area.
    pub content: Rect,
}

impl ScreenAreas {
    /// Whether the rail is hidden and only reachable via the overlay.
    pub fn is_narrow(&self) -> bool {
        self.rail.is_none()
    }
}

/// Create the shell layout for the given terminal area.
pub fn create(area: Rect) -> ScreenAreas {
    if area.width >= NARROW_BREAKPOINT {
        // Rail column spans full height; header sits above the content only.
        let columns = Layout::horizontal([Constraint::Length(RAIL_WIDTH), Constraint::Min(0)])
            .split(area);
        let rows =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)])
                .split(columns[1]);

        ScreenAreas {
            rail: Some(columns[0]),
            header: rows[0],
            content: rows[1],
        }
    } else {
        let rows =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).split(area);

        ScreenAreas {
            rail: None,
            header: rows[0],
            content: rows[1],
        }
    }
}

/// The rect the rail overlay occupies on a narrow terminal: the full-height
/// left edge, clamped to the terminal width.
pub fn overlay_rail_rect(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: RAIL_WIDTH.min(area.width),
        height: area.height,
    }
}
