//! World module - ground, lighting and interactable props.

mod chest;
mod plugin;

pub use chest::{lid_rotation, open_chest_lid, spawn_chest, Chest, ChestLid};
pub use plugin::{setup_scene, SceneGeometry, WorldPlugin};
