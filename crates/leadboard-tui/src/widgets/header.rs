//! Header bar widget.
//!
//! Shows the app brand and current view title on the left, keybinding hints
//! in the middle, and the theme pill on the right. On narrow terminals a
//! menu hint for the overlay rail is added. Sections drop off right-to-left
//! when the terminal cannot fit them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use leadboard_core::nav::View;
use leadboard_core::theme::ThemeMode;

use crate::theme::{styles, IconSet, Palette};

pub struct HeaderBar<'a> {
    view: View,
    theme: ThemeMode,
    palette: &'a Palette,
    icons: IconSet,
    narrow: bool,
    show_key_hints: bool,
}

impl<'a> HeaderBar<'a> {
    pub fn new(view: View, theme: ThemeMode, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            view,
            theme,
            palette,
            icons,
            narrow: false,
            show_key_hints: true,
        }
    }

    /// Narrow terminals get a menu hint for the overlay rail.
    pub fn narrow(mut self, narrow: bool) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn show_key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    fn shortcut_spans(&self) -> Vec<Span<'static>> {
        let p = self.palette;
        let mut spans = Vec::new();
        let hint = |key: &'static str, label: &'static str| {
            vec![
                Span::styled("[", styles::text_muted(p)),
                Span::styled(key, styles::keybinding(p)),
                Span::styled(format!("] {label}  "), styles::text_muted(p)),
            ]
        };

        if self.narrow {
            spans.extend(hint("m", "Menu"));
        }
        if self.view == View::Dashboard {
            spans.extend(hint("Tab", "Section"));
        }
        spans.extend(hint("t", "Theme"));
        spans.extend(hint("q", "Quit"));
        spans
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left section: status dot + brand + current view
        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.dot(), Style::default().fg(p.success)),
            Span::raw(" "),
            Span::styled("leadboard", styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled("/", styles::text_muted(p)),
            Span::raw(" "),
            Span::styled(self.view.title(), styles::text_secondary(p)),
        ]);
        let left_width = left_line.width() as u16;

        // Center section: keybinding hints
        let shortcuts_line = if self.show_key_hints {
            Line::from(self.shortcut_spans())
        } else {
            Line::default()
        };
        let shortcuts_width = shortcuts_line.width() as u16;

        // Right section: theme pill
        let theme_icon = match self.theme {
            ThemeMode::Light => self.icons.sun(),
            ThemeMode::Dark => self.icons.moon(),
        };
        let theme_line = Line::from(vec![
            Span::raw(theme_icon),
            Span::raw(" "),
            Span::styled(self.theme.label(), styles::accent(p)),
            Span::raw(" "),
        ]);
        let theme_width = theme_line.width() as u16;

        let total_width = left_width + shortcuts_width + theme_width + 4;

        if total_width <= inner.width {
            // Everything fits: left | center | right
            buf.set_line(inner.x, inner.y, &left_line, inner.width);

            let shortcuts_x = inner.x + left_width + 2;
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);

            let theme_x = inner.x + inner.width - theme_width;
            if theme_x >= shortcuts_x + shortcuts_width {
                buf.set_line(theme_x, inner.y, &theme_line, theme_width);
            }
        } else if left_width + theme_width + 2 <= inner.width {
            // Hints don't fit, keep brand + theme pill
            buf.set_line(inner.x, inner.y, &left_line, inner.width);
            let theme_x = inner.x + inner.width - theme_width;
            buf.set_line(theme_x, inner.y, &theme_line, theme_width);
        } else {
            // Only the left section fits
            buf.set_line(inner.x, inner.y, &left_line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::{DARK, LIGHT};
    use leadboard_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_header_renders_brand_and_view() {
        let mut term = TestTerminal::with_size(120, 3);
        let header = HeaderBar::new(View::Dashboard, ThemeMode::Dark, &DARK, icons());
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("leadboard"));
        assert!(term.buffer_contains("Dashboard"));
    }

    #[test]
    fn test_header_shows_key_hints() {
        let mut term = TestTerminal::with_size(120, 3);
        let header = HeaderBar::new(View::Dashboard, ThemeMode::Dark, &DARK, icons());
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("[Tab] Section"));
        assert!(term.buffer_contains("[t] Theme"));
        assert!(term.buffer_contains("[q] Quit"));
    }

    #[test]
    fn test_narrow_header_adds_menu_hint() {
        let mut term = TestTerminal::with_size(88, 3);
        let header = HeaderBar::new(View::Dashboard, ThemeMode::Dark, &DARK, icons())
            .narrow(true);
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("[m] Menu"));
    }

    #[test]
    fn test_theme_pill_reflects_mode() {
        let mut term = TestTerminal::with_size(120, 3);
        let header = HeaderBar::new(View::Dashboard, ThemeMode::Light, &LIGHT, icons());
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("Light"));

        let mut term = TestTerminal::with_size(120, 3);
        let header = HeaderBar::new(View::Dashboard, ThemeMode::Dark, &DARK, icons());
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("Dark"));
    }

    #[test]
    fn test_profile_view_drops_tab_hint() {
        let mut term = TestTerminal::with_size(120, 3);
        let header = HeaderBar::new(View::Profile, ThemeMode::Dark, &DARK, icons());
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("Profile"));
        assert!(!term.buffer_contains("[Tab] Section"));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let mut term = TestTerminal::with_size(120, 3);
        let header = HeaderBar::new(View::Dashboard, ThemeMode::Dark, &DARK, icons())
            .show_key_hints(false);
        term.render_widget(header, term.area());
        assert!(!term.buffer_contains("[q] Quit"));
    }

    #[test]
    fn test_narrow_width_degrades_gracefully() {
        let mut term = TestTerminal::with_size(30, 3);
        let header = HeaderBar::new(View::Dashboard, ThemeMode::Dark, &DARK, icons());
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("leadboard"));
    }
}
