//! Player plugin - spawning, movement and the follow camera.

use bevy::prelude::*;

use super::camera::{self, spawn_follow_camera, FollowCamera};
use super::components::Player;
use super::movement::{self, spawn_player};
use crate::core::{CameraSettings, GameState, GameStore, PlayerSettings};
use crate::input::InputSet;

/// Player plugin - handles player spawning, movement, and camera.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), setup_player)
            .add_systems(OnExit(GameState::InGame), cleanup_player)
            .add_systems(
                Update,
                (
                    movement::drive_character,
                    camera::apply_zoom_to_anchor,
                    camera::follow_camera,
                )
                    .chain()
                    .after(InputSet)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

/// Spawn the player body and the camera that follows it.
fn setup_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    player_settings: Res<PlayerSettings>,
    camera_settings: Res<CameraSettings>,
    store: Res<GameStore>,
) {
    let player = spawn_player(
        &mut commands,
        &mut meshes,
        &mut materials,
        &player_settings,
        &camera_settings,
        store.camera_zoom_offset,
    );
    spawn_follow_camera(
        &mut commands,
        &player_settings,
        &camera_settings,
        store.camera_zoom_offset,
    );
    info!("Spawned player {:?} at {:?}", player, player_settings.spawn_position);
}

/// Despawn the player and camera when leaving InGame.
fn cleanup_player(
    mut commands: Commands,
    player_query: Query<Entity, With<Player>>,
    camera_query: Query<Entity, With<FollowCamera>>,
) {
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in camera_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
