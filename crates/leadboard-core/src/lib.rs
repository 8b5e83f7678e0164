//! # leadboard-core - Core Domain Types
//!
//! Foundation crate for leadboard. Provides the pipeline domain types, the
//! static sample dataset, theme resolution, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Navigation (`nav`)
//! - [`NavEntry`] - A sidebar entry: a [`NavEntry::Leaf`] link or a
//!   [`NavEntry::Group`] with one level of children
//! - [`NavTarget`] - Where a leaf leads ([`View`] or explicitly unassigned)
//! - [`visible_rows()`] - Flatten the tree into the rows the rail displays
//!
//! ### Pipeline metrics (`metrics`)
//! - [`FunnelStage`], [`Source`], [`TrendPoint`], [`LossReason`], [`OtherStat`]
//! - [`segment_widths()`] - Proportional track segments, clamped to the track
//! - Selector enums: [`SourceTimeRange`], [`SourceMetric`], [`TrendRange`]
//!
//! ### Theme (`theme`)
//! - [`ThemeMode`] - The two-valued light/dark flag
//! - [`resolve_theme()`] - Startup resolution: persisted > ambient > light
//!
//! ### Error Handling (`error`)
//! - [`Error`] / [`Result`] / [`ResultExt`]
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use leadboard_core::prelude::*;
//! ```

pub mod data;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod nav;
pub mod profile;
pub mod theme;

/// Prelude for common imports used throughout all leadboard crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use metrics::{
    segment_widths, AccentColor, FunnelStage, LossReason, OtherStat, SalesStat, Source,
    SourceMetric, SourceTimeRange, TrendPoint, TrendRange,
};
pub use nav::{visible_rows, NavEntry, NavIcon, NavLeaf, NavRow, NavSection, NavTarget, View};
pub use profile::UserProfile;
pub use theme::{ambient_from_colorfgbg, detect_ambient_theme, resolve_theme, ThemeMode};
