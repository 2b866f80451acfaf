//! Input module - bindings, per-frame sampling and the interaction bridge.

mod bindings;
mod bridge;
mod plugin;
mod sampler;

pub use bindings::KeyBindings;
pub use bridge::{
    forward_interact, forward_wheel_zoom, zoom_direction, EdgeLatch, InteractLatch,
};
pub use plugin::{ControlsPlugin, InputSet};
pub use sampler::{
    sample_input, sample_movement, KeyboardSnapshot, MovementIntent, MovementSample,
};
