//! Dashboard section tabs (Leads / Sales).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use leadboard_app::state::DashboardTab;

use crate::theme::{styles, Palette};

pub struct DashboardTabs<'a> {
    active: DashboardTab,
    palette: &'a Palette,
}

impl<'a> DashboardTabs<'a> {
    pub fn new(active: DashboardTab, palette: &'a Palette) -> Self {
        Self { active, palette }
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        DashboardTab::ALL
            .iter()
            .map(|tab| Line::from(Span::raw(format!(" {} ", tab.label()))))
            .collect()
    }
}

impl Widget for DashboardTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let tabs = Tabs::new(self.tab_titles())
            .select(self.active.index())
            .style(styles::text_secondary(self.palette))
            .highlight_style(styles::selected_highlight(self.palette))
            .divider("│");

        // Left padding to align with card content
        let padded = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        tabs.render(padded, buf);
    }
}
