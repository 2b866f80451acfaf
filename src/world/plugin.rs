//! World plugin - ground, lighting and the chest.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::chest::{open_chest_lid, spawn_chest};
use crate::core::{GameState, GameStore};

/// Where the chest stands, in front of the player's spawn point.
const CHEST_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// Half extent of the square ground slab.
const GROUND_HALF_SIZE: f32 = 20.0;

/// Marker for entities owned by the scene.
#[derive(Component)]
pub struct SceneGeometry;

/// World plugin - handles scene setup and props.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: Color::srgb(0.9, 0.92, 1.0),
            brightness: 300.0,
        })
        .add_systems(OnEnter(GameState::InGame), setup_scene)
        .add_systems(OnExit(GameState::InGame), cleanup_scene)
        .add_systems(Update, open_chest_lid.run_if(in_state(GameState::InGame)));
    }
}

/// Build the ground, light and chest.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    store: Res<GameStore>,
) {
    commands.spawn((
        SceneGeometry,
        Mesh3d(meshes.add(Cuboid::new(GROUND_HALF_SIZE * 2.0, 0.2, GROUND_HALF_SIZE * 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.55, 0.3),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.1, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(GROUND_HALF_SIZE, 0.1, GROUND_HALF_SIZE),
    ));

    commands.spawn((
        SceneGeometry,
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, -4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let chest = spawn_chest(
        &mut commands,
        &mut meshes,
        &mut materials,
        CHEST_POSITION,
        store.chest_open,
    );
    commands.entity(chest).insert(SceneGeometry);

    info!("Scene ready, chest at {:?}", CHEST_POSITION);
}

/// Clean up scene entities when leaving InGame state.
fn cleanup_scene(mut commands: Commands, query: Query<Entity, With<SceneGeometry>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
