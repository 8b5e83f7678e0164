//! Loss reasons and "Other data" summary cards.
//!
//! Two cards side by side: the loss-reason percentage list and the headline
//! stat trio. Tooltips are optional and render as muted footnotes; a missing
//! tooltip renders nothing.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use leadboard_core::metrics::{LossReason, OtherStat};

use crate::theme::{styles, IconSet, Palette};

pub struct ReasonsWidget<'a> {
    reasons: &'a [LossReason],
    stats: &'a [OtherStat],
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> ReasonsWidget<'a> {
    pub fn new(
        reasons: &'a [LossReason],
        stats: &'a [OtherStat],
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            reasons,
            stats,
            palette,
            icons,
        }
    }

    fn render_reasons(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::titled_card(p, "Reasons of leads lost");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 8 {
            return;
        }
        for (i, item) in self.reasons.iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{:>3}%", item.percentage), styles::text_bright(p)),
                Span::raw("  "),
                Span::styled(item.reason.to_string(), styles::text_secondary(p)),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::titled_card(p, "Other data");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 8 {
            return;
        }

        let mut y = inner.y + 1;
        for item in self.stats {
            if y >= inner.bottom() {
                break;
            }
            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(item.value.to_string(), styles::text_bright(p)),
                Span::raw("  "),
                Span::styled(item.label.to_string(), styles::text_secondary(p)),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;

            // Absent-safe footnote for the optional tooltip.
            if let Some(tooltip) = item.tooltip {
                if y < inner.bottom() {
                    let note = Line::from(vec![
                        Span::raw("   "),
                        Span::styled(
                            format!("{} {}", self.icons.info(), tooltip),
                            styles::text_muted(p),
                        ),
                    ]);
                    buf.set_line(inner.x, y, &note, inner.width);
                    y += 1;
                }
            }
        }
    }
}

impl Widget for ReasonsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
        self.render_reasons(columns[0], buf);
        self.render_stats(columns[1], buf);
    }
}
