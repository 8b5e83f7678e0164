//! Custom widget components

pub(crate) mod braille;
mod funnel;
mod header;
pub mod overlay;
mod profile;
mod reasons;
mod sales;
mod sidebar;
mod sources;
mod tabs;
mod trend;

pub use funnel::FunnelWidget;
pub use header::HeaderBar;
pub use profile::ProfileWidget;
pub use reasons::ReasonsWidget;
pub use sales::SalesOverview;
pub use sidebar::Sidebar;
pub use sources::SourcesWidget;
pub use tabs::DashboardTabs;
pub use trend::TrendWidget;
