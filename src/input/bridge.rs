//! Interaction and zoom bridge: discrete input events forwarded to the
//! shared game state.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use super::bindings::KeyBindings;
use super::sampler::KeyboardSnapshot;
use crate::core::{ChestOpenedEvent, GameStore, ZoomChangedEvent, ZoomDirection};

/// Turns a held button into a single trigger per press.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeLatch {
    was_pressed: bool,
}

impl EdgeLatch {
    /// Returns `true` only on the frame `pressed` goes from false to true.
    pub fn rising(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        fired
    }

    pub fn reset(&mut self) {
        self.was_pressed = false;
    }
}

/// Latch for the interact action.
#[derive(Resource, Debug, Default)]
pub struct InteractLatch(pub EdgeLatch);

/// Map a wheel delta to a zoom direction. Bevy reports scrolling up
/// (away from the user) as positive `y`.
pub fn zoom_direction(wheel_y: f32) -> Option<ZoomDirection> {
    if wheel_y > 0.0 {
        Some(ZoomDirection::In)
    } else if wheel_y < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

/// Open the chest once per interact press.
///
/// A key tapped and released between two frames never shows up as held,
/// so `just_pressed` is checked alongside the polled edge.
pub fn forward_interact(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    snapshot: Res<KeyboardSnapshot>,
    mut latch: ResMut<InteractLatch>,
    mut store: ResMut<GameStore>,
    mut chest_events: EventWriter<ChestOpenedEvent>,
) {
    let rising = latch.0.rising(snapshot.interact);
    let tapped = keys.any_just_pressed(bindings.interact.iter().copied());
    if !(rising || tapped) {
        return;
    }

    if store.open_chest() {
        info!("Chest opened at {:?}", store.player_position);
        chest_events.send(ChestOpenedEvent {
            player_position: store.player_position,
        });
    }
}

/// Step the camera zoom for every wheel event.
pub fn forward_wheel_zoom(
    mut wheel_events: EventReader<MouseWheel>,
    mut store: ResMut<GameStore>,
    mut zoom_events: EventWriter<ZoomChangedEvent>,
) {
    for event in wheel_events.read() {
        let Some(direction) = zoom_direction(event.y) else {
            continue;
        };

        let changed = match direction {
            ZoomDirection::In => store.zoom_in(),
            ZoomDirection::Out => store.zoom_out(),
        };

        if changed {
            debug!("Camera zoom offset -> {}", store.camera_zoom_offset);
            zoom_events.send(ZoomChangedEvent {
                direction,
                offset: store.camera_zoom_offset,
            });
        }
    }
}

/// Forget any held interact press when gameplay stops.
pub fn reset_interact_latch(mut latch: ResMut<InteractLatch>) {
    latch.0.reset();
}
