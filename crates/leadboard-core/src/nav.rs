//! Sidebar navigation model.
//!
//! Entries are a tagged tree: a [`NavEntry::Leaf`] is a link, a
//! [`NavEntry::Group`] holds exactly one level of leaf children and has no
//! link target of its own. At most one group is open at a time; the single
//! "which id is open" value lives in the app state, and [`visible_rows`]
//! flattens the tree against it.

/// Top-level pages that share the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Profile,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Profile => "Profile",
        }
    }
}

/// Abstract icon slot for a nav entry, resolved to a glyph by the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Leads,
    Customers,
    Sales,
    Proposals,
    Invoices,
    Items,
    Mail,
    Shoebox,
    Calendar,
    Help,
    Settings,
}

/// Where a leaf entry leads.
///
/// `Unassigned` is the explicit sentinel for entries whose destination does
/// not exist yet; activating one is a no-op and the rail renders it muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    View(View),
    Unassigned,
}

/// A link entry (either top-level or a group child).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLeaf {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    pub target: NavTarget,
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    Leaf(NavLeaf),
    Group {
        id: &'static str,
        label: &'static str,
        icon: NavIcon,
        children: Vec<NavLeaf>,
    },
}

impl NavEntry {
    pub fn id(&self) -> &'static str {
        match self {
            NavEntry::Leaf(leaf) => leaf.id,
            NavEntry::Group { id, .. } => id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Leaf(leaf) => leaf.label,
            NavEntry::Group { label, .. } => label,
        }
    }
}

/// Which list a rail row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Main,
    Footer,
}

/// One visible row of the rail: an entry index plus an optional child index
/// (set when the row is a child of the open group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRow {
    pub section: NavSection,
    pub entry: usize,
    pub child: Option<usize>,
}

/// Flatten the nav tree into visible rows.
///
/// Group children appear only while their group id matches `open_group`.
pub fn visible_rows(
    main: &[NavEntry],
    footer: &[NavEntry],
    open_group: Option<&str>,
) -> Vec<NavRow> {
    let mut rows = Vec::new();
    flatten_section(main, NavSection::Main, open_group, &mut rows);
    flatten_section(footer, NavSection::Footer, open_group, &mut rows);
    rows
}

fn flatten_section(
    entries: &[NavEntry],
    section: NavSection,
    open_group: Option<&str>,
    rows: &mut Vec<NavRow>,
) {
    for (entry_idx, entry) in entries.iter().enumerate() {
        rows.push(NavRow {
            section,
            entry: entry_idx,
            child: None,
        });
        if let NavEntry::Group { id, children, .. } = entry {
            if open_group == Some(*id) {
                for child_idx in 0..children.len() {
                    rows.push(NavRow {
                        section,
                        entry: entry_idx,
                        child: Some(child_idx),
                    });
                }
            }
        }
    }
}
