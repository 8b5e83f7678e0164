//! Pipeline metric types and the derived-ratio helpers the widgets render.
//!
//! Percentage-of-total values are always derived from counts, never stored.
//! Every ratio guards its denominator: a zero total degrades to an empty
//! render instead of propagating a division fault.

/// Abstract color tag carried by the dataset.
///
/// The TUI resolves tags to concrete colors through the active palette, so
/// the same dataset renders correctly in both themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    Orange,
    Gold,
    Sky,
    Teal,
    Purple,
    Red,
    Green,
    Indigo,
}

/// A discrete pipeline step a lead passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunnelStage {
    pub id: &'static str,
    pub name: &'static str,
    /// Leads currently in this stage.
    pub count: u32,
    /// Monetary value of the stage, in dollars.
    pub value: u32,
    /// Display label, e.g. "2 days".
    pub duration: &'static str,
    pub color: AccentColor,
    /// Marks the duration as an average-time-on-stage figure.
    pub avg_time_on_stage: bool,
}

impl FunnelStage {
    /// Fraction of the total this stage holds; 0.0 when the total is zero.
    pub fn fraction_of(&self, total: u32) -> f64 {
        if total == 0 {
            0.0
        } else {
            f64::from(self.count) / f64::from(total)
        }
    }
}

/// Compute per-stage segment widths for a proportional track.
///
/// Each width is `round(count / total * track_width)`, with the running sum
/// clamped to `track_width` so segments never overflow the track even when
/// counts sum above the total. A zero total yields all-zero widths.
pub fn segment_widths(stages: &[FunnelStage], total: u32, track_width: u16) -> Vec<u16> {
    let mut used: u16 = 0;
    stages
        .iter()
        .map(|stage| {
            let ideal = (stage.fraction_of(total) * f64::from(track_width)).round() as u16;
            let width = ideal.min(track_width.saturating_sub(used));
            used += width;
            width
        })
        .collect()
}

/// An acquisition channel contributing a share of leads/value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: &'static str,
    /// Monetary value, in dollars.
    pub value: u32,
    /// Author-supplied share; not validated to sum to 100 across sources.
    pub percentage: u32,
    pub color: AccentColor,
}

/// Angular donut segments for a source list, in degrees from the top,
/// clockwise. The running sum is clamped to the full circle, so percentages
/// summing above 100 never overlap.
pub fn donut_segments(sources: &[Source]) -> Vec<(f64, f64)> {
    let mut start = 0.0_f64;
    sources
        .iter()
        .map(|source| {
            let sweep = (f64::from(source.percentage) / 100.0 * 360.0).max(0.0);
            let end = (start + sweep).min(360.0);
            let segment = (start, end);
            start = end;
            segment
        })
        .collect()
}

/// Time-range filter for the sources widget.
///
/// Stored per widget; the sample dataset is static, so changing the range
/// does not refilter the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceTimeRange {
    Today,
    Last7Days,
    Last30Days,
    #[default]
    Last6Months,
    Last12Months,
}

impl SourceTimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            SourceTimeRange::Today => "Today",
            SourceTimeRange::Last7Days => "Last 7 days",
            SourceTimeRange::Last30Days => "Last 30 days",
            SourceTimeRange::Last6Months => "Last 6 months",
            SourceTimeRange::Last12Months => "Last 12 months",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SourceTimeRange::Today => SourceTimeRange::Last7Days,
            SourceTimeRange::Last7Days => SourceTimeRange::Last30Days,
            SourceTimeRange::Last30Days => SourceTimeRange::Last6Months,
            SourceTimeRange::Last6Months => SourceTimeRange::Last12Months,
            SourceTimeRange::Last12Months => SourceTimeRange::Today,
        }
    }
}

/// Display-metric toggle for the sources widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMetric {
    LeadsCame,
    #[default]
    LeadsConverted,
    TotalDealsSize,
}

impl SourceMetric {
    pub const ALL: [SourceMetric; 3] = [
        SourceMetric::LeadsCame,
        SourceMetric::LeadsConverted,
        SourceMetric::TotalDealsSize,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SourceMetric::LeadsCame => "Leads came",
            SourceMetric::LeadsConverted => "Leads Converted",
            SourceMetric::TotalDealsSize => "Total deals size",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SourceMetric::LeadsCame => SourceMetric::LeadsConverted,
            SourceMetric::LeadsConverted => SourceMetric::TotalDealsSize,
            SourceMetric::TotalDealsSize => SourceMetric::LeadsCame,
        }
    }
}

/// Time-range filter for the trend graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendRange {
    Last30Days,
    Last3Months,
    #[default]
    Last6Months,
    Last12Months,
}

impl TrendRange {
    pub fn label(&self) -> &'static str {
        match self {
            TrendRange::Last30Days => "Last 30 days",
            TrendRange::Last3Months => "Last 3 months",
            TrendRange::Last6Months => "Last 6 months",
            TrendRange::Last12Months => "Last 12 months",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TrendRange::Last30Days => TrendRange::Last3Months,
            TrendRange::Last3Months => TrendRange::Last6Months,
            TrendRange::Last6Months => TrendRange::Last12Months,
            TrendRange::Last12Months => TrendRange::Last30Days,
        }
    }
}

/// One month of the leads-tracking series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub closed_won: u32,
    pub closed_lost: u32,
    pub forecast: u32,
}

/// A reason leads were lost, with its share of all lost leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossReason {
    pub percentage: u32,
    pub reason: &'static str,
}

/// A standalone headline statistic with an optional explanatory tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherStat {
    pub value: u32,
    pub label: &'static str,
    pub tooltip: Option<&'static str>,
}

/// Placeholder card for the sales overview tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trending_up: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(id: &'static str, count: u32) -> FunnelStage {
        FunnelStage {
            id,
            name: id,
            count,
            value: 0,
            duration: "2 days",
            color: AccentColor::Sky,
            avg_time_on_stage: false,
        }
    }

    #[test]
    fn test_fraction_of_total() {
        let s = stage("half", 300);
        assert!((s.fraction_of(600) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fraction_of_zero_total_is_zero() {
        let s = stage("any", 300);
        assert_eq!(s.fraction_of(0), 0.0);
    }

    #[test]
    fn test_segment_widths_proportional() {
        let stages = vec![stage("a", 300), stage("b", 150), stage("c", 150)];
        let widths = segment_widths(&stages, 600, 40);
        assert_eq!(widths, vec![20, 10, 10]);
    }

    #[test]
    fn test_segment_widths_never_overflow_track() {
        // Counts sum to 150% of the total; the track must still hold.
        let stages = vec![stage("a", 500), stage("b", 250), stage("c", 150)];
        let widths = segment_widths(&stages, 600, 40);
        let total: u16 = widths.iter().sum();
        assert!(total <= 40, "segments overflow the track: {total}");
        // Earlier stages keep their proportional share.
        assert_eq!(widths[0], 33);
    }

    #[test]
    fn test_segment_widths_zero_total() {
        let stages = vec![stage("a", 300), stage("b", 150)];
        assert_eq!(segment_widths(&stages, 0, 40), vec![0, 0]);
    }

    #[test]
    fn test_segment_widths_empty_track() {
        let stages = vec![stage("a", 300)];
        assert_eq!(segment_widths(&stages, 600, 0), vec![0]);
    }

    #[test]
    fn test_donut_segments_cover_shares() {
        let sources = vec![
            Source {
                name: "a",
                value: 0,
                percentage: 50,
                color: AccentColor::Red,
            },
            Source {
                name: "b",
                value: 0,
                percentage: 25,
                color: AccentColor::Gold,
            },
        ];
        let segments = donut_segments(&sources);
        assert_eq!(segments[0], (0.0, 180.0));
        assert_eq!(segments[1], (180.0, 270.0));
    }

    #[test]
    fn test_donut_segments_clamp_to_full_circle() {
        let sources = vec![
            Source {
                name: "a",
                value: 0,
                percentage: 80,
                color: AccentColor::Red,
            },
            Source {
                name: "b",
                value: 0,
                percentage: 80,
                color: AccentColor::Gold,
            },
        ];
        let segments = donut_segments(&sources);
        assert_eq!(segments[1].1, 360.0);
        assert!(segments[1].0 <= segments[1].1);
    }

    #[test]
    fn test_selector_cycles_return_to_start() {
        let mut range = SourceTimeRange::default();
        for _ in 0..5 {
            range = range.next();
        }
        assert_eq!(range, SourceTimeRange::default());

        let mut metric = SourceMetric::default();
        for _ in 0..3 {
            metric = metric.next();
        }
        assert_eq!(metric, SourceMetric::default());

        let mut trend = TrendRange::default();
        for _ in 0..4 {
            trend = trend.next();
        }
        assert_eq!(trend, TrendRange::default());
    }

    #[test]
    fn test_selector_defaults_match_initial_ui() {
        assert_eq!(SourceTimeRange::default(), SourceTimeRange::Last6Months);
        assert_eq!(SourceMetric::default(), SourceMetric::LeadsConverted);
        assert_eq!(TrendRange::default(), TrendRange::Last6Months);
    }
}
