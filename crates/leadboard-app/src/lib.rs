//! leadboard-app - Application state and update logic for leadboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the model ([`AppState`]), the [`Message`] set, and the pure
//! [`update`] function, plus configuration loading and the persisted theme
//! preference.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, DashboardState, DashboardTab, NavState};
