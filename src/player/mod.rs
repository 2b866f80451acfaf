//! Player module - third-person character controller and follow camera.

mod camera;
mod components;
mod movement;
mod plugin;

pub use camera::{
    anchor_offset, apply_zoom_to_anchor, follow_camera, spawn_follow_camera, FollowCamera,
};
pub use components::*;
pub use movement::{drive_character, spawn_player, MotionStep};
pub use plugin::PlayerPlugin;
