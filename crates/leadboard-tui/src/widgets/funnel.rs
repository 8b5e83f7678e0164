//! Funnel progress widget.
//!
//! A proportional segment track (one colored run per stage, widths clamped
//! by `segment_widths` so they never overflow) above the per-stage list with
//! counts, values, and stage durations.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use leadboard_core::metrics::{segment_widths, FunnelStage};

use crate::theme::{styles, IconSet, Palette};

pub struct FunnelWidget<'a> {
    stages: &'a [FunnelStage],
    total: u32,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> FunnelWidget<'a> {
    pub fn new(
        stages: &'a [FunnelStage],
        total: u32,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            stages,
            total,
            palette,
            icons,
        }
    }

    fn render_track(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let widths = segment_widths(self.stages, self.total, area.width);
        let mut x = area.x;
        for (stage, width) in self.stages.iter().zip(widths) {
            let style = Style::default().fg(self.palette.accent_color(stage.color));
            for _ in 0..width {
                if x >= area.right() {
                    return;
                }
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.set_char('█').set_style(style);
                }
                x += 1;
            }
        }
        // Remainder of the track stays as the muted rail.
        let rail_style = Style::default().fg(self.palette.border_dim);
        while x < area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char('░').set_style(rail_style);
            }
            x += 1;
        }
    }

    fn stage_line(&self, stage: &FunnelStage) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![
            Span::styled(
                self.icons.dot().to_string(),
                Style::default().fg(p.accent_color(stage.color)),
            ),
            Span::raw(" "),
            Span::styled(format!("{:<16}", stage.name), styles::text_secondary(p)),
            Span::styled(format!("{:>4}", stage.count), styles::text_primary(p)),
            Span::styled(format!("  ${:<5}", stage.value), styles::text_secondary(p)),
        ];

        if stage.avg_time_on_stage {
            // Average-time badge; tooltip text has no hover here, the badge
            // styling is the signal.
            spans.push(Span::styled(
                format!(" {} avg", stage.duration),
                Style::default()
                    .fg(p.contrast_fg)
                    .bg(p.text_secondary)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {}", stage.duration),
                styles::text_muted(p),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for FunnelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_card(self.palette, "Funnel count");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        // Subtitle
        let subtitle = Line::from(vec![
            Span::styled(format!("{}", self.total), styles::text_bright(self.palette)),
            Span::styled(" active leads", styles::text_secondary(self.palette)),
        ]);
        buf.set_line(inner.x, inner.y, &subtitle, inner.width);

        // Track
        if inner.height >= 2 {
            let track = Rect {
                x: inner.x,
                y: inner.y + 1,
                width: inner.width,
                height: 1,
            };
            self.render_track(track, buf);
        }

        // Stage list
        let list_top = inner.y + 3;
        for (i, stage) in self.stages.iter().enumerate() {
            let y = list_top + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let line = self.stage_line(stage);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
