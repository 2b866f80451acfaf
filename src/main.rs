//! Treasure Trail - Entry Point
//!
//! Controls:
//! - WASD / arrow keys: Move and turn
//! - Shift: Run
//! - E: Open the chest
//! - Mouse wheel: Zoom the camera
//! - Escape: Close the welcome dialog
//! - Gamepad: left stick moves, LT runs, A/Cross interacts

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Treasure Trail".to_string(),
                resolution: (1280.0, 720.0).into(),
                // Keep wheel scrolling on the canvas from scrolling the page (web)
                prevent_default_event_handling: true,
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(treasure_trail::TreasureTrailPlugin)

        .run();
}
