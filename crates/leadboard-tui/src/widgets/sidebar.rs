//! Navigation rail widget.
//!
//! Renders the nav tree flattened against the single open-group id: groups
//! show a chevron and expand in place, leaves highlight when their target
//! matches the current view, unassigned leaves render muted. The footer
//! entries sit at the bottom of the rail above nothing but the border.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use leadboard_app::state::NavState;
use leadboard_core::nav::{NavRow, NavSection, NavTarget, View};

use crate::theme::{styles, IconSet, Palette};

pub struct Sidebar<'a> {
    nav: &'a NavState,
    current_view: View,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        nav: &'a NavState,
        current_view: View,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            nav,
            current_view,
            palette,
            icons,
        }
    }

    fn row_line(&self, row: NavRow, index: usize, width: u16) -> Line<'static> {
        let p = self.palette;
        let selected = index == self.nav.selected;
        let label = self.nav.row_label(row);
        let icon = self.icons.nav(self.nav.row_icon(row));

        let indent = if row.child.is_some() { "    " } else { "  " };
        let mut text = format!("{indent}{icon} {label}");

        if self.nav.row_is_group(row) {
            let chevron = if self.nav.row_is_open_group(row) {
                self.icons.chevron_down()
            } else {
                self.icons.chevron_right()
            };
            text.push(' ');
            text.push_str(chevron);
        }

        let text = truncate_to_width(&text, width as usize);

        let style = if selected {
            styles::selected_highlight(p)
        } else {
            match self.nav.row_target(row) {
                Some(NavTarget::View(view)) if view == self.current_view => {
                    styles::accent_bold(p)
                }
                Some(NavTarget::View(_)) => styles::text_primary(p),
                Some(NavTarget::Unassigned) => styles::text_muted(p),
                // Group headers
                None => styles::text_secondary(p),
            }
        };

        // Pad selected rows so the highlight spans the rail width.
        let text = if selected {
            format!("{text:<width$}", width = width as usize)
        } else {
            text
        };

        Line::from(Span::styled(text, style))
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles::border_inactive(p))
            .style(Style::default().bg(p.rail_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Brand row
        let brand = Line::from(vec![
            Span::raw(" "),
            Span::styled("DO", styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled("leadboard", styles::text_muted(p)),
        ]);
        buf.set_line(inner.x, inner.y, &brand, inner.width);

        let rows = self.nav.rows();
        let footer_count = rows
            .iter()
            .filter(|r| r.section == NavSection::Footer)
            .count() as u16;

        // Main rows start below the brand.
        let main_top = inner.y + 2;
        // Footer rows are pinned to the bottom, below a separator.
        let footer_top = inner
            .bottom()
            .saturating_sub(footer_count)
            .max(main_top);

        let mut main_y = main_top;
        let mut footer_y = footer_top;

        for (index, row) in rows.iter().enumerate() {
            let y = match row.section {
                NavSection::Main => {
                    let y = main_y;
                    main_y += 1;
                    y
                }
                NavSection::Footer => {
                    let y = footer_y;
                    footer_y += 1;
                    y
                }
            };
            if y >= inner.bottom() || (row.section == NavSection::Main && y >= footer_top) {
                continue;
            }
            let line = self.row_line(*row, index, inner.width);
            buf.set_line(inner.x, y, &line, inner.width);
        }

        // Separator above the footer block.
        if footer_top > main_top && footer_top - 1 > main_top {
            let separator = "─".repeat(inner.width as usize);
            let line = Line::from(Span::styled(separator, styles::border_inactive(p)));
            buf.set_line(inner.x, footer_top - 1, &line, inner.width);
        }
    }
}

/// Truncate a string to a display width, appending an ellipsis when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}
