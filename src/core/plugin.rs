//! Core plugin that sets up game state, shared resources and events.

use bevy::prelude::*;

use super::config::*;
use super::events::*;
use super::states::*;
use super::store::GameStore;
use super::tween::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame)
/// - Configuration resources, with defaults until the file is read
/// - The shared [`GameStore`]
/// - Global events (ChestOpenedEvent, ZoomChangedEvent)
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()

            // Defaults so every system has its resources from the first frame
            .init_resource::<SpeedProfile>()
            .init_resource::<MotionSettings>()
            .init_resource::<InputSettings>()
            .init_resource::<CameraSettings>()
            .init_resource::<ZoomSettings>()
            .init_resource::<PlayerSettings>()
            .init_resource::<GameStore>()

            .add_event::<ChestOpenedEvent>()
            .add_event::<ZoomChangedEvent>()

            // Read the config file, then start playing
            .add_systems(
                OnEnter(GameState::Loading),
                (load_game_config, transition_to_game).chain(),
            )

            .add_systems(Update, update_smooth_transforms);
    }
}

/// Leave Loading as soon as configuration has been read.
fn transition_to_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
