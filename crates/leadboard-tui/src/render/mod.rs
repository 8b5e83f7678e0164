//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use leadboard_app::state::{AppState, DashboardTab};
use leadboard_core::data;
use leadboard_core::nav::View;

use crate::theme::{palette, IconSet, Palette};
use crate::widgets::{
    DashboardTabs, FunnelWidget, HeaderBar, ProfileWidget, ReasonsWidget, SalesOverview, Sidebar,
    SourcesWidget, TrendWidget,
};
use crate::{layout, widgets::overlay};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, draws the frame, mutates nothing. The palette is
/// looked up from the theme flag here and passed down to every widget.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let p = palette::for_mode(state.theme);
    let icons = IconSet::new(state.settings.ui.icons);

    // Fill the terminal with the theme background.
    let bg_block = Block::default().style(Style::default().bg(p.base_bg));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    // Rail column (wide terminals only)
    if let Some(rail) = areas.rail {
        frame.render_widget(Sidebar::new(&state.nav, state.view, p, icons), rail);
    }

    // Header band
    let header = HeaderBar::new(state.view, state.theme, p, icons)
        .narrow(areas.is_narrow())
        .show_key_hints(state.settings.ui.show_key_hints);
    frame.render_widget(header, areas.header);

    // Content region
    match state.view {
        View::Dashboard => render_dashboard(frame, state, p, icons, areas.content),
        View::Profile => {
            let profile = data::sample_profile();
            frame.render_widget(ProfileWidget::new(&profile, p), areas.content);
        }
    }

    // Overlay rail above dimmed content (narrow terminals)
    if state.overlay_open && areas.is_narrow() {
        let buf = frame.buffer_mut();
        overlay::dim_background(buf, area, p);
        let rail_rect = layout::overlay_rail_rect(area);
        overlay::clear_area(buf, rail_rect);
        Widget::render(Sidebar::new(&state.nav, state.view, p, icons), rail_rect, buf);
    }
}

fn render_dashboard(
    frame: &mut Frame,
    state: &AppState,
    p: &Palette,
    icons: IconSet,
    content: Rect,
) {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).split(content);

    frame.render_widget(DashboardTabs::new(state.dashboard.active_tab, p), rows[0]);

    match state.dashboard.active_tab {
        DashboardTab::Leads => render_leads_tab(frame, state, p, icons, rows[1]),
        DashboardTab::Sales => {
            let stats = data::sales_stats();
            frame.render_widget(SalesOverview::new(&stats, p, icons), rows[1]);
        }
    }
}

fn render_leads_tab(
    frame: &mut Frame,
    state: &AppState,
    p: &Palette,
    icons: IconSet,
    content: Rect,
) {
    let rows = Layout::vertical([
        Constraint::Length(12), // funnel + sources
        Constraint::Min(8),     // trend graph
        Constraint::Length(8),  // reasons + other data
    ])
    .split(content);

    let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let stages = data::funnel_stages();
    frame.render_widget(
        FunnelWidget::new(&stages, data::TOTAL_ACTIVE_LEADS, p, icons),
        top[0],
    );

    let sources = data::lead_sources();
    frame.render_widget(
        SourcesWidget::new(
            &sources,
            state.dashboard.source_range,
            state.dashboard.source_metric,
            p,
            icons,
        ),
        top[1],
    );

    let points = data::trend_points();
    frame.render_widget(
        TrendWidget::new(
            &points,
            state.dashboard.trend_range,
            data::TOTAL_CLOSED,
            data::TOTAL_LOST,
            p,
            icons,
        ),
        rows[1],
    );

    let reasons = data::loss_reasons();
    let stats = data::other_stats();
    frame.render_widget(ReasonsWidget::new(&reasons, &stats, p, icons), rows[2]);
}
