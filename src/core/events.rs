//! Global events used for cross-system communication.

use bevy::prelude::*;

/// Sent once when the chest goes from closed to open.
#[derive(Event, Debug, Clone, Copy)]
pub struct ChestOpenedEvent {
    /// Where the player stood when the chest was opened
    pub player_position: Vec3,
}

/// Direction of a camera zoom request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Sent whenever the camera zoom offset actually changes.
#[derive(Event, Debug, Clone, Copy)]
pub struct ZoomChangedEvent {
    pub direction: ZoomDirection,
    pub offset: f32,
}
