//! Leads tracking graph.
//!
//! A braille area chart of closed-won and closed-lost by month: each series
//! fills under its linearly-interpolated curve on its own canvas, rendered
//! in order so the later series reads on top where they overlap.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use leadboard_core::metrics::{TrendPoint, TrendRange};

use crate::theme::{styles, IconSet, Palette};
use crate::widgets::braille::BrailleCanvas;

/// Width reserved for the y-axis labels.
const Y_AXIS_WIDTH: u16 = 5;

pub struct TrendWidget<'a> {
    points: &'a [TrendPoint],
    range: TrendRange,
    total_closed: u32,
    total_lost: u32,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> TrendWidget<'a> {
    pub fn new(
        points: &'a [TrendPoint],
        range: TrendRange,
        total_closed: u32,
        total_lost: u32,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            points,
            range,
            total_closed,
            total_lost,
            palette,
            icons,
        }
    }

    fn y_max(&self) -> f64 {
        let max = self
            .points
            .iter()
            .map(|pt| pt.closed_won.max(pt.closed_lost))
            .max()
            .unwrap_or(0);
        // Round up to the next 20 for a clean axis; never zero.
        (f64::from(max) / 20.0).ceil().max(1.0) * 20.0
    }

    /// Series value at a fractional position along the x axis.
    fn sample(&self, values: &[f64], t: f64) -> f64 {
        match values.len() {
            0 => 0.0,
            1 => values[0],
            n => {
                let pos = t * (n - 1) as f64;
                let i = (pos.floor() as usize).min(n - 2);
                let frac = pos - i as f64;
                values[i] * (1.0 - frac) + values[i + 1] * frac
            }
        }
    }

    fn render_plot(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.points.is_empty() {
            return;
        }

        let width = area.width as usize;
        let height = area.height as usize;
        let y_max = self.y_max();

        let won: Vec<f64> = self.points.iter().map(|p| f64::from(p.closed_won)).collect();
        let lost: Vec<f64> = self
            .points
            .iter()
            .map(|p| f64::from(p.closed_lost))
            .collect();

        let mut canvas_won = BrailleCanvas::new(width, height);
        let mut canvas_lost = BrailleCanvas::new(width, height);

        let dot_w = canvas_won.dot_width();
        let dot_h = canvas_won.dot_height();

        let value_to_dot_y = |value: f64| -> usize {
            let ratio = (value / y_max).clamp(0.0, 1.0);
            let dot = (ratio * (dot_h as f64 - 1.0)) as usize;
            dot_h - 1 - dot
        };

        for dot_x in 0..dot_w {
            let t = if dot_w > 1 {
                dot_x as f64 / (dot_w - 1) as f64
            } else {
                0.0
            };

            // Area fill: from the curve down to the baseline.
            let won_top = value_to_dot_y(self.sample(&won, t));
            canvas_won.fill_column(dot_x, won_top, dot_h);

            let lost_top = value_to_dot_y(self.sample(&lost, t));
            canvas_lost.fill_column(dot_x, lost_top, dot_h);
        }

        canvas_won.render_to_buffer(buf, area, self.palette.accent);
        canvas_lost.render_to_buffer(buf, area, self.palette.danger);
    }

    fn render_y_axis(&self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let style = styles::text_muted(self.palette);
        let y_max = self.y_max();

        let top = Line::from(Span::styled(format!("{:>4} ", y_max as u32), style));
        buf.set_line(area.x, area.y, &top, area.width);

        if area.height >= 4 {
            let mid = Line::from(Span::styled(
                format!("{:>4} ", (y_max / 2.0) as u32),
                style,
            ));
            buf.set_line(area.x, area.y + area.height / 2, &mid, area.width);
        }

        let zero = Line::from(Span::styled(format!("{:>4} ", 0), style));
        buf.set_line(area.x, area.bottom() - 1, &zero, area.width);
    }

    fn render_x_labels(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height == 0 || self.points.is_empty() {
            return;
        }
        let style = styles::text_muted(self.palette);
        let n = self.points.len();
        for (i, point) in self.points.iter().enumerate() {
            let label: String = point.month.chars().take(3).collect();
            let x = if n > 1 {
                area.x
                    + ((i as u32 * u32::from(area.width.saturating_sub(3)) / (n as u32 - 1))
                        as u16)
            } else {
                area.x
            };
            let line = Line::from(Span::styled(label, style));
            buf.set_line(x, area.y, &line, 3);
        }
    }
}

impl Widget for TrendWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::titled_card(p, "Leads tracking");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 12 || inner.height < 5 {
            return;
        }
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let rows = Layout::vertical([
            Constraint::Length(1), // totals + period
            Constraint::Length(1), // legend
            Constraint::Min(3),    // plot
            Constraint::Length(1), // x labels
        ])
        .split(inner);

        // Headline totals, period selector right-aligned
        let totals = Line::from(vec![
            Span::styled(self.total_closed.to_string(), styles::text_bright(p)),
            Span::styled(" total closed   ", styles::text_secondary(p)),
            Span::styled(
                self.total_lost.to_string(),
                Style::default().fg(p.danger),
            ),
            Span::styled(" total lost", styles::text_secondary(p)),
        ]);
        buf.set_line(rows[0].x, rows[0].y, &totals, rows[0].width);

        let period = Line::from(vec![
            Span::styled(format!("{} ", self.icons.calendar()), styles::text_muted(p)),
            Span::styled(self.range.label().to_string(), styles::text_secondary(p)),
            Span::styled("  [p]", styles::keybinding(p)),
        ]);
        let period_width = period.width() as u16;
        if rows[0].width > totals.width() as u16 + period_width + 2 {
            let x = rows[0].right() - period_width;
            buf.set_line(x, rows[0].y, &period, period_width);
        }

        // Legend
        let legend = Line::from(vec![
            Span::styled(format!("{} ", self.icons.dot()), styles::accent(p)),
            Span::styled("Closed won   ", styles::text_secondary(p)),
            Span::styled(
                format!("{} ", self.icons.dot()),
                Style::default().fg(p.danger),
            ),
            Span::styled("Closed lost", styles::text_secondary(p)),
        ]);
        buf.set_line(rows[1].x, rows[1].y, &legend, rows[1].width);

        // Plot with y axis
        let plot_columns =
            Layout::horizontal([Constraint::Length(Y_AXIS_WIDTH), Constraint::Min(8)])
                .split(rows[2]);
        self.render_y_axis(plot_columns[0], buf);
        self.render_plot(plot_columns[1], buf);

        // X labels under the plot only
        let x_label_area = Rect {
            x: plot_columns[1].x,
            y: rows[3].y,
            width: plot_columns[1].width,
            height: rows[3].height,
        };
        self.render_x_labels(x_label_area, buf);
    }
}
