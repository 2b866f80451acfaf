//! Input plugin - polling, movement sampling and the interaction bridge.

use bevy::prelude::*;

use super::bindings::KeyBindings;
use super::bridge::{self, InteractLatch};
use super::sampler::{self, KeyboardSnapshot, MovementSample};
use crate::core::GameState;

/// System set for input sampling; gameplay systems run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSet;

/// Input plugin - turns raw input into movement samples and store actions.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<KeyBindings>()
            .init_resource::<KeyboardSnapshot>()
            .init_resource::<MovementSample>()
            .init_resource::<InteractLatch>()
            .add_systems(
                Update,
                (
                    sampler::sample_input,
                    (bridge::forward_interact, bridge::forward_wheel_zoom),
                )
                    .chain()
                    .in_set(InputSet)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnExit(GameState::InGame), bridge::reset_interact_latch);
    }
}
