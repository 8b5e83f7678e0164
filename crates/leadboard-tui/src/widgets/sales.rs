//! Sales overview tab.
//!
//! Placeholder stat cards for the sales section; detailed sales analytics
//! are not part of this dataset.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use leadboard_core::metrics::SalesStat;

use crate::theme::{styles, IconSet, Palette};

pub struct SalesOverview<'a> {
    stats: &'a [SalesStat],
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> SalesOverview<'a> {
    pub fn new(stats: &'a [SalesStat], palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            stats,
            palette,
            icons,
        }
    }

    fn render_stat_card(&self, stat: &SalesStat, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 6 || inner.height == 0 {
            return;
        }

        let title = Line::from(Span::styled(
            format!(" {}", stat.title),
            styles::text_secondary(p),
        ));
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if inner.height >= 2 {
            let value = Line::from(Span::styled(
                format!(" {}", stat.value),
                styles::text_bright(p),
            ));
            buf.set_line(inner.x, inner.y + 1, &value, inner.width);
        }

        if inner.height >= 3 {
            let (arrow, color) = if stat.trending_up {
                (self.icons.trend_up(), p.success)
            } else {
                (self.icons.trend_down(), p.danger)
            };
            let change = Line::from(vec![
                Span::raw(" "),
                Span::styled(arrow, Style::default().fg(color)),
                Span::styled(format!(" {}", stat.change), Style::default().fg(color)),
                Span::styled(" from last month", styles::text_muted(p)),
            ]);
            buf.set_line(inner.x, inner.y + 2, &change, inner.width);
        }
    }
}

impl Widget for SalesOverview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::titled_card(p, "Sales Overview");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 12 || inner.height < 3 {
            return;
        }
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let rows = Layout::vertical([
            Constraint::Length(2), // description
            Constraint::Min(3),    // stat cards
        ])
        .split(inner);

        let description = Line::from(Span::styled(
            "Detailed sales metrics, performance charts, and revenue data.",
            styles::text_secondary(p),
        ));
        buf.set_line(rows[0].x, rows[0].y, &description, rows[0].width);

        if self.stats.is_empty() {
            return;
        }

        let constraints: Vec<Constraint> = self
            .stats
            .iter()
            .map(|_| Constraint::Ratio(1, self.stats.len() as u32))
            .collect();
        let columns = Layout::horizontal(constraints).split(rows[1]);

        for (stat, column) in self.stats.iter().zip(columns.iter()) {
            self.render_stat_card(stat, *column, buf);
        }
    }
}
