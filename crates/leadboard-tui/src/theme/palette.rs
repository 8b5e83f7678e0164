//! The light and dark color palettes.
//!
//! Every widget receives a `&Palette` from the render pass; nothing reads a
//! global. The active palette is looked up from the theme flag each frame,
//! so a toggle takes effect on the next draw.

use leadboard_core::metrics::AccentColor;
use leadboard_core::theme::ThemeMode;
use ratatui::style::Color;

/// A complete set of color tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub base_bg: Color,
    pub card_bg: Color,
    pub rail_bg: Color,
    pub backdrop_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_bright: Color,
    /// Foreground used on top of accent-colored fills
    pub contrast_fg: Color,

    // --- Status ---
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // --- Dataset accent tags ---
    pub orange: Color,
    pub gold: Color,
    pub sky: Color,
    pub teal: Color,
    pub purple: Color,
    pub indigo: Color,
}

pub const DARK: Palette = Palette {
    base_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    rail_bg: Color::Rgb(14, 17, 23),
    backdrop_bg: Color::Rgb(5, 6, 8),

    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),

    accent: Color::Rgb(88, 166, 255),

    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    text_bright: Color::Rgb(240, 246, 252),
    contrast_fg: Color::Rgb(10, 12, 16),

    success: Color::Rgb(16, 185, 129),
    warning: Color::Rgb(234, 179, 8),
    danger: Color::Rgb(244, 63, 94),
    info: Color::Rgb(56, 189, 248),

    orange: Color::Rgb(251, 146, 60),
    gold: Color::Rgb(250, 204, 21),
    sky: Color::Rgb(56, 189, 248),
    teal: Color::Rgb(45, 212, 191),
    purple: Color::Rgb(192, 132, 252),
    indigo: Color::Rgb(129, 140, 248),
};

pub const LIGHT: Palette = Palette {
    base_bg: Color::Rgb(246, 248, 250),
    card_bg: Color::Rgb(255, 255, 255),
    rail_bg: Color::Rgb(239, 242, 245),
    backdrop_bg: Color::Rgb(208, 215, 222),

    border_dim: Color::Rgb(208, 215, 222),
    border_active: Color::Rgb(9, 105, 218),

    accent: Color::Rgb(9, 105, 218),

    text_primary: Color::Rgb(31, 35, 40),
    text_secondary: Color::Rgb(89, 99, 110),
    text_muted: Color::Rgb(140, 149, 159),
    text_bright: Color::Rgb(0, 0, 0),
    contrast_fg: Color::Rgb(255, 255, 255),

    success: Color::Rgb(26, 127, 55),
    warning: Color::Rgb(154, 103, 0),
    danger: Color::Rgb(209, 36, 47),
    info: Color::Rgb(9, 105, 218),

    orange: Color::Rgb(234, 88, 12),
    gold: Color::Rgb(202, 138, 4),
    sky: Color::Rgb(2, 132, 199),
    teal: Color::Rgb(13, 148, 136),
    purple: Color::Rgb(147, 51, 234),
    indigo: Color::Rgb(79, 70, 229),
};

/// Palette for a theme mode.
pub fn for_mode(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

impl Palette {
    /// Resolve a dataset color tag to a concrete color.
    pub fn accent_color(&self, tag: AccentColor) -> Color {
        match tag {
            AccentColor::Orange => self.orange,
            AccentColor::Gold => self.gold,
            AccentColor::Sky => self.sky,
            AccentColor::Teal => self.teal,
            AccentColor::Purple => self.purple,
            AccentColor::Red => self.danger,
            AccentColor::Green => self.success,
            AccentColor::Indigo => self.indigo,
        }
    }
}
