//! Treasure Trail - a small third-person scene in Bevy.
//!
//! A physics-driven character walks, runs and turns under keyboard or
//! gamepad control while a smoothed camera follows from behind. Scrolling
//! zooms the camera and the interact key opens the chest.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, configuration, shared game state, angle math
//! - **Input**: Key bindings, per-frame movement sampling, interact/zoom bridge
//! - **Player**: Character controller, follow camera
//! - **World**: Ground, lighting, the chest
//! - **UI**: Welcome modal
//!
//! Each frame the input systems sample keys and joystick into a
//! [`input::MovementSample`], then the player systems turn it into body
//! velocity and rig/model yaw, and finally ease the camera toward its
//! anchors.

pub mod core;
pub mod input;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct TreasureTrailPlugin;

impl Plugin for TreasureTrailPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input sampling and the interaction bridge
            .add_plugins(input::ControlsPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
