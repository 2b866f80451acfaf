//! The chest prop and its opening animation.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::{ChestOpenedEvent, SmoothTransform};

/// Lid angle when fully open, in radians around the hinge.
const OPEN_LID_ANGLE: f32 = 1.9;

/// Marker for the chest body.
#[derive(Component)]
pub struct Chest;

/// Hinge entity the lid rotates around.
#[derive(Component)]
pub struct ChestLid;

/// Rotation of the lid hinge for the given chest state.
pub fn lid_rotation(open: bool) -> Quat {
    if open {
        Quat::from_rotation_x(OPEN_LID_ANGLE)
    } else {
        Quat::IDENTITY
    }
}

/// Spawn a chest at `position`, facing -Z. `open` sets the initial lid state.
pub fn spawn_chest(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    open: bool,
) -> Entity {
    let wood = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.28, 0.12),
        perceptual_roughness: 0.9,
        ..default()
    });
    let trim = materials.add(Color::srgb(0.75, 0.62, 0.2));

    commands
        .spawn((
            Chest,
            Transform::from_translation(position + Vec3::Y * 0.15),
            Visibility::default(),
            RigidBody::Fixed,
            Collider::cuboid(0.3, 0.15, 0.2),
            Mesh3d(meshes.add(Cuboid::new(0.6, 0.3, 0.4))),
            MeshMaterial3d(wood.clone()),
        ))
        .with_children(|chest| {
            // Hinge sits on the back top edge
            chest
                .spawn((
                    ChestLid,
                    Transform::from_xyz(0.0, 0.15, 0.2).with_rotation(lid_rotation(open)),
                    Visibility::default(),
                    SmoothTransform {
                        target_rotation: Some(lid_rotation(open)),
                        ..SmoothTransform::new(4.0)
                    },
                ))
                .with_children(|lid| {
                    lid.spawn((
                        Mesh3d(meshes.add(Cuboid::new(0.62, 0.08, 0.42))),
                        MeshMaterial3d(wood),
                        Transform::from_xyz(0.0, 0.04, -0.2),
                    ));
                    lid.spawn((
                        Mesh3d(meshes.add(Cuboid::new(0.08, 0.1, 0.04))),
                        MeshMaterial3d(trim),
                        Transform::from_xyz(0.0, 0.0, -0.42),
                    ));
                });
        })
        .id()
}

/// Swing the lid open when the chest is opened.
pub fn open_chest_lid(
    mut events: EventReader<ChestOpenedEvent>,
    mut lids: Query<&mut SmoothTransform, With<ChestLid>>,
) {
    if events.read().last().is_none() {
        return;
    }
    for mut smooth in lids.iter_mut() {
        smooth.target_rotation = Some(lid_rotation(true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_lid_is_flat() {
        assert_eq!(lid_rotation(false), Quat::IDENTITY);
    }

    #[test]
    fn open_lid_tilts_back() {
        // The front edge of the lid ends up above the hinge
        let front = lid_rotation(true) * Vec3::new(0.0, 0.0, -0.4);
        assert!(front.y > 0.3);
    }
}
