//! Core game module - states, configuration, shared state and math helpers.
//!
//! This module provides the foundation that all other game systems build upon.

pub mod angles;
mod config;
mod error;
mod events;
mod plugin;
mod states;
mod store;
mod tween;

pub use config::*;
pub use error::ConfigError;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
pub use store::GameStore;
pub use tween::*;
