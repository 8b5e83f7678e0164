//! Lead sources widget.
//!
//! A braille donut (one canvas per source, rendered in series order) with a
//! legend of values and shares, a time-range selector line, and the
//! display-metric toggle. The selectors are stored UI state only; the
//! dataset behind the donut is static.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use leadboard_core::metrics::{donut_segments, Source, SourceMetric, SourceTimeRange};

use crate::theme::{styles, IconSet, Palette};
use crate::widgets::braille::BrailleCanvas;

/// Donut inner radius as a fraction of the outer radius.
const DONUT_HOLE: f64 = 0.55;

pub struct SourcesWidget<'a> {
    sources: &'a [Source],
    range: SourceTimeRange,
    metric: SourceMetric,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> SourcesWidget<'a> {
    pub fn new(
        sources: &'a [Source],
        range: SourceTimeRange,
        metric: SourceMetric,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            sources,
            range,
            metric,
            palette,
            icons,
        }
    }

    fn render_donut(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 || self.sources.is_empty() {
            return;
        }

        let width = area.width as usize;
        let height = area.height as usize;
        let segments = donut_segments(self.sources);

        // Dot space is near-square, so the circle stays round.
        let dot_w = (width * 2) as f64;
        let dot_h = (height * 4) as f64;
        let cx = dot_w / 2.0;
        let cy = dot_h / 2.0;
        let outer = (dot_w.min(dot_h) / 2.0 - 1.0).max(1.0);
        let inner = outer * DONUT_HOLE;

        for (source, (start, end)) in self.sources.iter().zip(segments) {
            if end <= start {
                continue;
            }
            let mut canvas = BrailleCanvas::new(width, height);
            let mut angle = start;
            while angle < end {
                let radians = angle.to_radians();
                let mut radius = inner;
                while radius <= outer {
                    // Angle measured from the top, clockwise.
                    let x = cx + radius * radians.sin();
                    let y = cy - radius * radians.cos();
                    if x >= 0.0 && y >= 0.0 {
                        canvas.set(x as usize, y as usize);
                    }
                    radius += 0.5;
                }
                angle += 0.5;
            }
            canvas.render_to_buffer(buf, area, self.palette.accent_color(source.color));
        }
    }

    fn legend_line(&self, source: &Source) -> Line<'static> {
        let p = self.palette;
        Line::from(vec![
            Span::styled(
                self.icons.dot().to_string(),
                Style::default().fg(p.accent_color(source.color)),
            ),
            Span::raw(" "),
            Span::styled(format!("{:<10}", source.name), styles::text_secondary(p)),
            Span::styled(
                format!("{:>7}", format_dollars(source.value)),
                styles::text_primary(p),
            ),
            Span::styled(format!("{:>5}%", source.percentage), styles::text_muted(p)),
        ])
    }

    fn metric_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, metric) in SourceMetric::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted(p)));
            }
            let style = if *metric == self.metric {
                styles::selected_highlight(p)
            } else {
                styles::text_muted(p)
            };
            spans.push(Span::styled(metric.label().to_string(), style));
        }
        spans.push(Span::styled("  [d]", styles::keybinding(p)));
        Line::from(spans)
    }
}

impl Widget for SourcesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_card(self.palette, "Sources");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 6 || inner.height < 3 {
            return;
        }
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let rows = Layout::vertical([
            Constraint::Length(1), // period selector
            Constraint::Min(4),    // donut + legend
            Constraint::Length(1), // "from leads total"
            Constraint::Length(1), // metric toggle
        ])
        .split(inner);

        // Period selector
        let period = Line::from(vec![
            Span::styled(
                format!("{} ", self.icons.calendar()),
                styles::text_muted(self.palette),
            ),
            Span::styled(
                self.range.label().to_string(),
                styles::text_secondary(self.palette),
            ),
            Span::styled("  [s]", styles::keybinding(self.palette)),
        ]);
        buf.set_line(rows[0].x, rows[0].y, &period, rows[0].width);

        // Donut on the left, legend on the right
        let columns = Layout::horizontal([Constraint::Length(16), Constraint::Min(10)])
            .split(rows[1]);
        self.render_donut(columns[0], buf);

        for (i, source) in self.sources.iter().enumerate() {
            let y = columns[1].y + i as u16;
            if y >= columns[1].bottom() {
                break;
            }
            let line = self.legend_line(source);
            buf.set_line(columns[1].x, y, &line, columns[1].width);
        }

        // Share annotation
        let annotation = Line::from(Span::styled(
            "from leads total",
            styles::text_muted(self.palette),
        ));
        let annotation_width = annotation.width() as u16;
        let annotation_x = rows[2]
            .right()
            .saturating_sub(annotation_width)
            .max(rows[2].x);
        buf.set_line(annotation_x, rows[2].y, &annotation, rows[2].width);

        // Metric toggle
        let metric = self.metric_line();
        buf.set_line(rows[3].x, rows[3].y, &metric, rows[3].width);
    }
}

/// Format a dollar amount with thousands separators, e.g. 3000 -> "$3,000".
fn format_dollars(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::from("$");
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use leadboard_app::config::IconMode;
    use leadboard_core::data;

    fn widget(sources: &[Source]) -> SourcesWidget<'_> {
        SourcesWidget::new(
            sources,
            SourceTimeRange::default(),
            SourceMetric::default(),
            &DARK,
            IconSet::new(IconMode::Unicode),
        )
    }

    #[test]
    fn test_renders_legend_names_and_shares() {
        let sources = data::lead_sources();
        let mut term = TestTerminal::with_size(64, 14);
        term.render_widget(widget(&sources), term.area());

        for source in &sources {
            assert!(
                term.buffer_contains(source.name),
                "missing source {}",
                source.name
            );
        }
        assert!(term.buffer_contains("50%"));
        assert!(term.buffer_contains("$3,000"));
    }

    #[test]
    fn test_renders_period_selector() {
        let sources = data::lead_sources();
        let mut term = TestTerminal::with_size(64, 14);
        term.render_widget(widget(&sources), term.area());
        assert!(term.buffer_contains("Last 6 months"));
    }

    #[test]
    fn test_renders_metric_toggle() {
        let sources = data::lead_sources();
        let mut term = TestTerminal::with_size(64, 14);
        term.render_widget(widget(&sources), term.area());
        assert!(term.buffer_contains("Leads Converted"));
        assert!(term.buffer_contains("from leads total"));
    }

    #[test]
    fn test_donut_draws_braille_dots() {
        let sources = data::lead_sources();
        let mut term = TestTerminal::with_size(64, 14);
        term.render_widget(widget(&sources), term.area());

        let braille = term
            .content()
            .chars()
            .any(|c| ('\u{2801}'..='\u{28ff}').contains(&c));
        assert!(braille, "donut should render braille dots");
    }

    #[test]
    fn test_empty_sources_do_not_panic() {
        let mut term = TestTerminal::with_size(64, 14);
        term.render_widget(widget(&[]), term.area());
        assert!(term.buffer_contains("Sources"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let sources = data::lead_sources();
        let mut term = TestTerminal::with_size(8, 4);
        term.render_widget(widget(&sources), term.area());
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(600), "$600");
        assert_eq!(format_dollars(3000), "$3,000");
        assert_eq!(format_dollars(1250800), "$1,250,800");
    }
}
