//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use leadboard_app::config::IconMode;
use leadboard_core::nav::NavIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Icon for a navigation entry slot.
    pub fn nav(&self, icon: NavIcon) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => match icon {
                NavIcon::Dashboard => "\u{f00a}", // nf-fa-th_large
                NavIcon::Leads => "\u{f0c0}",     // nf-fa-users
                NavIcon::Customers => "\u{f007}", // nf-fa-user
                NavIcon::Sales => "\u{f15c}",     // nf-fa-file_text
                NavIcon::Proposals => "\u{f0f6}", // nf-fa-file_text_o
                NavIcon::Invoices => "\u{f155}",  // nf-fa-dollar
                NavIcon::Items => "\u{f07a}",     // nf-fa-shopping_cart
                NavIcon::Mail => "\u{f0e0}",      // nf-fa-envelope
                NavIcon::Shoebox => "\u{f187}",   // nf-fa-archive
                NavIcon::Calendar => "\u{f073}",  // nf-fa-calendar
                NavIcon::Help => "\u{f059}",      // nf-fa-question_circle
                NavIcon::Settings => "\u{f013}",  // nf-fa-cog
            },
            IconMode::Unicode => match icon {
                NavIcon::Dashboard => "\u{25a6}", // ▦
                NavIcon::Leads => "\u{25c9}",     // ◉
                NavIcon::Customers => "\u{25cb}", // ○
                NavIcon::Sales => "\u{25a4}",     // ▤
                NavIcon::Proposals => "\u{25a5}", // ▥
                NavIcon::Invoices => "$",
                NavIcon::Items => "\u{25a8}",   // ▨
                NavIcon::Mail => "\u{2709}",    // ✉
                NavIcon::Shoebox => "\u{25a2}", // ▢
                NavIcon::Calendar => "\u{25eb}", // ◫
                NavIcon::Help => "?",
                NavIcon::Settings => "\u{2699}", // ⚙
            },
        }
    }

    pub fn menu(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c9}", // nf-fa-bars
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f185}", // nf-fa-sun_o
            IconMode::Unicode => "\u{2600}",   // ☀
        }
    }

    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f186}", // nf-fa-moon_o
            IconMode::Unicode => "\u{263d}",   // ☽
        }
    }

    pub fn calendar(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f073}", // nf-fa-calendar
            IconMode::Unicode => "\u{25eb}",   // ◫
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f078}", // nf-fa-chevron_down
            IconMode::Unicode => "\u{2304}",   // ⌄
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    pub fn trend_up(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f062}", // nf-fa-arrow_up
            IconMode::Unicode => "\u{2191}",   // ↑
        }
    }

    pub fn trend_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f063}", // nf-fa-arrow_down
            IconMode::Unicode => "\u{2193}",   // ↓
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_NAV: [NavIcon; 12] = [
        NavIcon::Dashboard,
        NavIcon::Leads,
        NavIcon::Customers,
        NavIcon::Sales,
        NavIcon::Proposals,
        NavIcon::Invoices,
        NavIcon::Items,
        NavIcon::Mail,
        NavIcon::Shoebox,
        NavIcon::Calendar,
        NavIcon::Help,
        NavIcon::Settings,
    ];

    #[test]
    fn test_all_nav_icons_are_non_empty() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let icons = IconSet::new(mode);
            for slot in ALL_NAV {
                assert!(!icons.nav(slot).is_empty());
            }
        }
    }

    #[test]
    fn test_unicode_and_nerd_font_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.nav(NavIcon::Dashboard), nerd.nav(NavIcon::Dashboard));
        assert_ne!(unicode.menu(), nerd.menu());
        assert_ne!(unicode.sun(), nerd.sun());
    }

    #[test]
    fn test_theme_indicator_icons_differ() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_ne!(icons.sun(), icons.moon());
    }

    #[test]
    fn test_chevrons() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.chevron_right(), "\u{203a}");
        assert_eq!(icons.chevron_down(), "\u{2304}");
    }

    #[test]
    fn test_icon_set_is_copy() {
        let icons = IconSet::new(IconMode::Unicode);
        let copy = icons;
        assert_eq!(icons.dot(), copy.dot());
    }
}
