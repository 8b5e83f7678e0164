//! The static sample dataset behind every widget.
//!
//! There is no server and no fetching anywhere in leadboard; these values are
//! the complete data universe of the application.

use crate::metrics::{
    AccentColor, FunnelStage, LossReason, OtherStat, SalesStat, Source, TrendPoint,
};
use crate::nav::{NavEntry, NavIcon, NavLeaf, NavTarget, View};
use crate::profile::UserProfile;

/// Leads currently anywhere in the pipeline; the funnel track denominator.
pub const TOTAL_ACTIVE_LEADS: u32 = 600;

/// Headline figures for the leads-tracking graph.
pub const TOTAL_CLOSED: u32 = 680;
pub const TOTAL_LOST: u32 = 70;

/// Pipeline stages in progression order.
pub fn funnel_stages() -> Vec<FunnelStage> {
    vec![
        FunnelStage {
            id: "discovery",
            name: "Discovery",
            count: 300,
            value: 200,
            duration: "2 days",
            color: AccentColor::Orange,
            avg_time_on_stage: false,
        },
        FunnelStage {
            id: "qualified",
            name: "Qualified",
            count: 150,
            value: 100,
            duration: "2 days",
            color: AccentColor::Gold,
            avg_time_on_stage: true,
        },
        FunnelStage {
            id: "in_conversation",
            name: "In conversation",
            count: 80,
            value: 100,
            duration: "5 days",
            color: AccentColor::Sky,
            avg_time_on_stage: false,
        },
        FunnelStage {
            id: "negotiations",
            name: "Negotiations",
            count: 40,
            value: 50,
            duration: "8 days",
            color: AccentColor::Teal,
            avg_time_on_stage: false,
        },
        FunnelStage {
            id: "closed_won",
            name: "Closed won",
            count: 30,
            value: 50,
            duration: "10 days",
            color: AccentColor::Purple,
            avg_time_on_stage: false,
        },
    ]
}

/// Acquisition channels, largest share first.
pub fn lead_sources() -> Vec<Source> {
    vec![
        Source {
            name: "Clutch",
            value: 3000,
            percentage: 50,
            color: AccentColor::Red,
        },
        Source {
            name: "Behance",
            value: 1500,
            percentage: 25,
            color: AccentColor::Gold,
        },
        Source {
            name: "Instagram",
            value: 900,
            percentage: 15,
            color: AccentColor::Teal,
        },
        Source {
            name: "Dribbble",
            value: 600,
            percentage: 10,
            color: AccentColor::Green,
        },
    ]
}

/// Closed-won / closed-lost / forecast by month.
pub fn trend_points() -> Vec<TrendPoint> {
    vec![
        TrendPoint {
            month: "March",
            closed_won: 68,
            closed_lost: 72,
            forecast: 75,
        },
        TrendPoint {
            month: "April",
            closed_won: 52,
            closed_lost: 38,
            forecast: 60,
        },
        TrendPoint {
            month: "May",
            closed_won: 78,
            closed_lost: 32,
            forecast: 85,
        },
        TrendPoint {
            month: "June",
            closed_won: 65,
            closed_lost: 8,
            forecast: 70,
        },
        TrendPoint {
            month: "July",
            closed_won: 82,
            closed_lost: 42,
            forecast: 90,
        },
        TrendPoint {
            month: "August",
            closed_won: 95,
            closed_lost: 30,
            forecast: 100,
        },
    ]
}

/// Reasons leads were lost, with author-supplied shares.
pub fn loss_reasons() -> Vec<LossReason> {
    vec![
        LossReason {
            percentage: 40,
            reason: "The proposal is unclear",
        },
        LossReason {
            percentage: 20,
            reason: "However venture pursuit",
        },
        LossReason {
            percentage: 10,
            reason: "Other miscellaneous factors",
        },
        LossReason {
            percentage: 30,
            reason: "Timeline or budget mismatch",
        },
    ]
}

/// The "Other data" stat trio.
pub fn other_stats() -> Vec<OtherStat> {
    vec![
        OtherStat {
            value: 900,
            label: "total leads count",
            tooltip: None,
        },
        OtherStat {
            value: 12,
            label: "days in average to convert lead",
            tooltip: None,
        },
        OtherStat {
            value: 30,
            label: "inactive leads",
            tooltip: Some("Leads with no activity in the last 30 days."),
        },
    ]
}

/// Placeholder cards for the sales overview tab.
pub fn sales_stats() -> Vec<SalesStat> {
    vec![
        SalesStat {
            title: "Total Revenue",
            value: "$1,250,800",
            change: "+12.5%",
            trending_up: true,
        },
        SalesStat {
            title: "New Customers",
            value: "320",
            change: "+8.2%",
            trending_up: true,
        },
        SalesStat {
            title: "Avg. Deal Size",
            value: "$3,908",
            change: "-1.1%",
            trending_up: false,
        },
    ]
}

/// The sample account shown on the profile page.
pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Shad CN",
        email: "shad.cn@example.com",
        bio: "Frontend Developer passionate about building accessible and user-friendly applications.",
        company: "Acme Inc.",
        role: "Software Engineer",
    }
}

/// Main navigation tree. Only "Dashboard" currently resolves to a view; the
/// rest of the CRM surface is intentionally unassigned.
pub fn main_navigation() -> Vec<NavEntry> {
    vec![
        NavEntry::Leaf(NavLeaf {
            id: "dashboard",
            label: "Dashboard",
            icon: NavIcon::Dashboard,
            target: NavTarget::View(View::Dashboard),
        }),
        NavEntry::Leaf(NavLeaf {
            id: "leads",
            label: "Leads",
            icon: NavIcon::Leads,
            target: NavTarget::Unassigned,
        }),
        NavEntry::Leaf(NavLeaf {
            id: "customers",
            label: "Customers",
            icon: NavIcon::Customers,
            target: NavTarget::Unassigned,
        }),
        NavEntry::Group {
            id: "sales",
            label: "Sales",
            icon: NavIcon::Sales,
            children: vec![
                NavLeaf {
                    id: "proposals",
                    label: "Proposals",
                    icon: NavIcon::Proposals,
                    target: NavTarget::Unassigned,
                },
                NavLeaf {
                    id: "invoices",
                    label: "Invoices",
                    icon: NavIcon::Invoices,
                    target: NavTarget::Unassigned,
                },
            ],
        },
        NavEntry::Leaf(NavLeaf {
            id: "items",
            label: "Items",
            icon: NavIcon::Items,
            target: NavTarget::Unassigned,
        }),
        NavEntry::Leaf(NavLeaf {
            id: "mail",
            label: "Mail",
            icon: NavIcon::Mail,
            target: NavTarget::Unassigned,
        }),
        NavEntry::Leaf(NavLeaf {
            id: "shoebox",
            label: "Shoebox",
            icon: NavIcon::Shoebox,
            target: NavTarget::Unassigned,
        }),
        NavEntry::Leaf(NavLeaf {
            id: "calendar",
            label: "Calendar",
            icon: NavIcon::Calendar,
            target: NavTarget::Unassigned,
        }),
    ]
}

/// Footer navigation (below the separator).
pub fn footer_navigation() -> Vec<NavEntry> {
    vec![
        NavEntry::Leaf(NavLeaf {
            id: "help",
            label: "Help",
            icon: NavIcon::Help,
            target: NavTarget::Unassigned,
        }),
        NavEntry::Leaf(NavLeaf {
            id: "profile",
            label: "Profile",
            icon: NavIcon::Customers,
            target: NavTarget::View(View::Profile),
        }),
        NavEntry::Leaf(NavLeaf {
            id: "settings",
            label: "Settings",
            icon: NavIcon::Settings,
            target: NavTarget::Unassigned,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funnel_counts_sum_to_active_leads() {
        let total: u32 = funnel_stages().iter().map(|s| s.count).sum();
        assert_eq!(total, TOTAL_ACTIVE_LEADS);
    }

    #[test]
    fn test_funnel_is_ordered_by_progression() {
        let stages = funnel_stages();
        assert_eq!(stages.first().unwrap().id, "discovery");
        assert_eq!(stages.last().unwrap().id, "closed_won");
        // Counts shrink along the pipeline.
        for pair in stages.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_exactly_one_stage_flags_average_duration() {
        let flagged = funnel_stages()
            .iter()
            .filter(|s| s.avg_time_on_stage)
            .count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn test_source_percentages() {
        let sources = lead_sources();
        assert_eq!(sources.len(), 4);
        let total: u32 = sources.iter().map(|s| s.percentage).sum();
        // Author-supplied; this dataset happens to sum to 100.
        assert_eq!(total, 100);
    }

    #[test]
    fn test_trend_spans_six_months() {
        let points = trend_points();
        assert_eq!(points.len(), 6);
        assert_eq!(points.first().unwrap().month, "March");
        assert_eq!(points.last().unwrap().month, "August");
    }

    #[test]
    fn test_groups_have_children_and_no_target() {
        for entry in main_navigation().iter().chain(footer_navigation().iter()) {
            if let NavEntry::Group { children, .. } = entry {
                assert!(!children.is_empty());
            }
        }
    }

    #[test]
    fn test_navigation_ids_are_unique() {
        let main = main_navigation();
        let footer = footer_navigation();
        let mut ids: Vec<&str> = Vec::new();
        for entry in main.iter().chain(footer.iter()) {
            ids.push(entry.id());
            if let NavEntry::Group { children, .. } = entry {
                for child in children {
                    ids.push(child.id);
                }
            }
        }
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn test_every_view_is_reachable() {
        let main = main_navigation();
        let footer = footer_navigation();
        let targets: Vec<NavTarget> = main
            .iter()
            .chain(footer.iter())
            .filter_map(|e| match e {
                NavEntry::Leaf(leaf) => Some(leaf.target),
                NavEntry::Group { .. } => None,
            })
            .collect();
        assert!(targets.contains(&NavTarget::View(View::Dashboard)));
        assert!(targets.contains(&NavTarget::View(View::Profile)));
    }

    #[test]
    fn test_tooltip_is_optional() {
        let stats = other_stats();
        assert!(stats.iter().any(|s| s.tooltip.is_none()));
        assert!(stats.iter().any(|s| s.tooltip.is_some()));
    }
}
