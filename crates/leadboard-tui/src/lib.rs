//! leadboard-tui - Terminal UI for leadboard
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! the responsive shell layout, the light/dark palettes, the dashboard
//! widgets, and the synchronous run loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, RunOptions};
