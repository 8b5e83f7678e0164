//! Centralized theme system.
//!
//! This module provides:
//! - `palette` — The light and dark color palettes and mode lookup
//! - `styles` — Semantic style builder functions over a palette
//! - `icons` — Glyph constants with plain-Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
pub use palette::{for_mode, Palette};
