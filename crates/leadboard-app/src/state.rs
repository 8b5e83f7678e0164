//! Application state (Model in TEA pattern)

use leadboard_core::metrics::{SourceMetric, SourceTimeRange, TrendRange};
use leadboard_core::nav::{visible_rows, NavEntry, NavRow, NavSection, NavTarget, View};
use leadboard_core::theme::ThemeMode;
use leadboard_core::data;

use crate::config::Settings;

/// Dashboard tab selection. Initial tab is always Leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Leads,
    Sales,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 2] = [DashboardTab::Leads, DashboardTab::Sales];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Leads => "Leads",
            DashboardTab::Sales => "Sales",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DashboardTab::Leads => 0,
            DashboardTab::Sales => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            DashboardTab::Leads => DashboardTab::Sales,
            DashboardTab::Sales => DashboardTab::Leads,
        }
    }

    pub fn prev(self) -> Self {
        // Two tabs: previous and next coincide.
        self.next()
    }
}

/// Per-dashboard UI state.
///
/// Owned here rather than by the widgets, so switching tabs and back
/// restores the Leads widgets exactly as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub source_range: SourceTimeRange,
    pub source_metric: SourceMetric,
    pub trend_range: TrendRange,
}

/// Navigation rail state.
///
/// `open_group` is the single "which id is open" field shared across all
/// entries: opening one group necessarily closes any other.
#[derive(Debug, Clone)]
pub struct NavState {
    pub main: Vec<NavEntry>,
    pub footer: Vec<NavEntry>,
    /// Index into [`NavState::rows`].
    pub selected: usize,
    pub open_group: Option<String>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            main: data::main_navigation(),
            footer: data::footer_navigation(),
            selected: 0,
            open_group: None,
        }
    }

    /// Currently visible rail rows, in display order.
    pub fn rows(&self) -> Vec<NavRow> {
        visible_rows(&self.main, &self.footer, self.open_group.as_deref())
    }

    fn entries(&self, section: NavSection) -> &[NavEntry] {
        match section {
            NavSection::Main => &self.main,
            NavSection::Footer => &self.footer,
        }
    }

    /// Label of the row (for rendering and tests).
    pub fn row_label(&self, row: NavRow) -> &'static str {
        let entry = &self.entries(row.section)[row.entry];
        match (entry, row.child) {
            (NavEntry::Group { children, .. }, Some(child)) => children[child].label,
            (entry, _) => entry.label(),
        }
    }

    /// Icon slot of the row.
    pub fn row_icon(&self, row: NavRow) -> leadboard_core::nav::NavIcon {
        let entry = &self.entries(row.section)[row.entry];
        match (entry, row.child) {
            (NavEntry::Group { children, .. }, Some(child)) => children[child].icon,
            (NavEntry::Leaf(leaf), _) => leaf.icon,
            (NavEntry::Group { icon, .. }, None) => *icon,
        }
    }

    /// Whether the row is a group header.
    pub fn row_is_group(&self, row: NavRow) -> bool {
        row.child.is_none()
            && matches!(
                self.entries(row.section)[row.entry],
                NavEntry::Group { .. }
            )
    }

    /// Whether the row is the open group header.
    pub fn row_is_open_group(&self, row: NavRow) -> bool {
        self.row_is_group(row)
            && self.open_group.as_deref()
                == Some(self.entries(row.section)[row.entry].id())
    }

    /// Target of the row, if it is a leaf (top-level or group child).
    pub fn row_target(&self, row: NavRow) -> Option<NavTarget> {
        let entry = &self.entries(row.section)[row.entry];
        match (entry, row.child) {
            (NavEntry::Group { children, .. }, Some(child)) => Some(children[child].target),
            (NavEntry::Leaf(leaf), None) => Some(leaf.target),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        let count = self.rows().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.rows().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Toggle a group open/closed. Opening a group collapses any other.
    pub fn toggle_group(&mut self, id: &str) {
        if self.open_group.as_deref() == Some(id) {
            self.open_group = None;
        } else {
            self.open_group = Some(id.to_string());
        }
    }

    /// Activate the selected row.
    ///
    /// Groups toggle their expansion; leaves yield their view (if assigned)
    /// and leave `open_group` untouched. Returns the view to navigate to.
    pub fn activate(&mut self) -> Option<View> {
        let rows = self.rows();
        let row = *rows.get(self.selected)?;
        let entry = &self.entries(row.section)[row.entry];

        if row.child.is_none() {
            if let NavEntry::Group { id, .. } = entry {
                let id = *id;
                let was_selected_label = self.row_label(row);
                self.toggle_group(id);
                // Collapsing can shrink the row list; keep the selection on
                // the same group row.
                self.selected = self
                    .rows()
                    .iter()
                    .position(|r| self.row_label(*r) == was_selected_label && r.child.is_none())
                    .unwrap_or(0);
                return None;
            }
        }

        match self.row_target(row)? {
            NavTarget::View(view) => Some(view),
            NavTarget::Unassigned => None,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level application state (the TEA model).
///
/// Everything here is ephemeral and reset on startup; only the theme flag is
/// persisted across sessions (by the runner, on toggle).
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: View,
    pub dashboard: DashboardState,
    pub nav: NavState,
    /// Narrow-terminal rail overlay. Always false on startup.
    pub overlay_open: bool,
    pub theme: ThemeMode,
    pub settings: Settings,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings, theme: ThemeMode) -> Self {
        Self {
            view: View::Dashboard,
            dashboard: DashboardState::default(),
            nav: NavState::new(),
            overlay_open: false,
            theme,
            settings,
            should_quit: false,
        }
    }

    /// Flip the theme and return the new mode (for persistence).
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_defaults() {
        let state = AppState::default();
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.dashboard.active_tab, DashboardTab::Leads);
        assert!(!state.overlay_open);
        assert!(!state.should_quit);
        assert_eq!(state.nav.open_group, None);
        assert_eq!(state.nav.selected, 0);
    }

    #[test]
    fn test_toggle_theme_flips_and_returns_new() {
        let mut state = AppState::new(Settings::default(), ThemeMode::Light);
        assert_eq!(state.toggle_theme(), ThemeMode::Dark);
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(state.toggle_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_only_one_group_open_at_a_time() {
        let mut nav = NavState::new();
        nav.toggle_group("sales");
        assert_eq!(nav.open_group.as_deref(), Some("sales"));
        // Opening another id collapses the first: a single field cannot
        // hold two open groups.
        nav.toggle_group("other");
        assert_eq!(nav.open_group.as_deref(), Some("other"));
    }

    #[test]
    fn test_toggle_group_twice_closes() {
        let mut nav = NavState::new();
        nav.toggle_group("sales");
        nav.toggle_group("sales");
        assert_eq!(nav.open_group, None);
    }

    #[test]
    fn test_selection_wraps() {
        let mut nav = NavState::new();
        let count = nav.rows().len();
        nav.select_prev();
        assert_eq!(nav.selected, count - 1);
        nav.select_next();
        assert_eq!(nav.selected, 0);
    }

    #[test]
    fn test_activate_group_toggles_without_navigating() {
        let mut nav = NavState::new();
        let sales_idx = nav
            .rows()
            .iter()
            .position(|r| nav.row_label(*r) == "Sales")
            .unwrap();
        nav.selected = sales_idx;

        assert_eq!(nav.activate(), None);
        assert_eq!(nav.open_group.as_deref(), Some("sales"));
        // Selection stays on the group row.
        let row = nav.rows()[nav.selected];
        assert_eq!(nav.row_label(row), "Sales");

        assert_eq!(nav.activate(), None);
        assert_eq!(nav.open_group, None);
    }

    #[test]
    fn test_activate_leaf_keeps_group_open() {
        let mut nav = NavState::new();
        nav.toggle_group("sales");
        let dash_idx = nav
            .rows()
            .iter()
            .position(|r| nav.row_label(*r) == "Dashboard")
            .unwrap();
        nav.selected = dash_idx;

        assert_eq!(nav.activate(), Some(View::Dashboard));
        assert_eq!(nav.open_group.as_deref(), Some("sales"));
    }

    #[test]
    fn test_activate_unassigned_leaf_is_noop() {
        let mut nav = NavState::new();
        let leads_idx = nav
            .rows()
            .iter()
            .position(|r| nav.row_label(*r) == "Leads")
            .unwrap();
        nav.selected = leads_idx;
        assert_eq!(nav.activate(), None);
    }

    #[test]
    fn test_activate_group_child() {
        let mut nav = NavState::new();
        nav.toggle_group("sales");
        let child_idx = nav
            .rows()
            .iter()
            .position(|r| r.child.is_some())
            .unwrap();
        nav.selected = child_idx;
        // Children are unassigned in the sample tree.
        assert_eq!(nav.activate(), None);
        assert_eq!(nav.open_group.as_deref(), Some("sales"));
    }

    #[test]
    fn test_dashboard_tab_cycle() {
        assert_eq!(DashboardTab::Leads.next(), DashboardTab::Sales);
        assert_eq!(DashboardTab::Sales.next(), DashboardTab::Leads);
        assert_eq!(DashboardTab::Leads.prev(), DashboardTab::Sales);
    }
}
