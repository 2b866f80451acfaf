//! Third-person follow camera.
//!
//! The camera is not parented to the player. Each frame it eases toward the
//! world position of the rig's `CameraAnchor` and looks at a smoothed copy
//! of the `CameraTarget` position.
//!
//! Anchor world positions are composed from the body, rig and anchor local
//! transforms (anchors are children of the rig, the rig a child of the
//! body), so the camera sees this frame's rig yaw and zoom rather than last
//! frame's propagated `GlobalTransform`.

use bevy::prelude::*;

use super::components::{CameraAnchor, CameraTarget, CharacterRig, Player};
use crate::core::{CameraSettings, PlayerSettings, ZoomChangedEvent};

/// Smoothing state of the follow camera.
#[derive(Component, Debug, Clone, Default)]
pub struct FollowCamera {
    /// Point the camera currently looks at
    pub look_at: Vec3,
}

impl FollowCamera {
    /// Ease the camera toward its anchors by one frame.
    ///
    /// Returns the new camera position. A missing anchor leaves the matching
    /// piece of state where it was.
    pub fn advance(
        &mut self,
        camera_position: Vec3,
        anchor: Option<Vec3>,
        target: Option<Vec3>,
        smoothing: f32,
    ) -> Vec3 {
        if let Some(target) = target {
            self.look_at = self.look_at.lerp(target, smoothing);
        }
        match anchor {
            Some(anchor) => camera_position.lerp(anchor, smoothing),
            None => camera_position,
        }
    }
}

/// Rig-space offset of the camera anchor for a zoom offset.
///
/// Zooming out raises the camera by `zoom_lift` per unit and pulls it back
/// one unit per unit.
pub fn anchor_offset(base: Vec3, zoom: f32, zoom_lift: f32) -> Vec3 {
    Vec3::new(base.x, base.y + zoom * zoom_lift, base.z - zoom)
}

/// Move the camera anchor when the zoom offset changes.
pub fn apply_zoom_to_anchor(
    mut zoom_events: EventReader<ZoomChangedEvent>,
    settings: Res<CameraSettings>,
    mut anchors: Query<&mut Transform, With<CameraAnchor>>,
) {
    let Some(latest) = zoom_events.read().last() else {
        return;
    };

    debug!("Zoom {:?} -> offset {}", latest.direction, latest.offset);
    let offset = anchor_offset(settings.anchor(), latest.offset, settings.zoom_lift);
    for mut transform in anchors.iter_mut() {
        transform.translation = offset;
    }
}

/// Ease the camera toward the anchors and aim it at the look target.
pub fn follow_camera(
    settings: Res<CameraSettings>,
    bodies: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    rigs: Query<&Transform, (With<CharacterRig>, Without<FollowCamera>)>,
    anchors: Query<&Transform, (With<CameraAnchor>, Without<FollowCamera>)>,
    targets: Query<&Transform, (With<CameraTarget>, Without<FollowCamera>)>,
    mut cameras: Query<(&mut Transform, &mut FollowCamera)>,
) {
    let rig_to_world = match (bodies.get_single(), rigs.get_single()) {
        (Ok(body), Ok(rig)) => Some(body.mul_transform(*rig)),
        _ => None,
    };
    let world_point =
        |local: &Transform| rig_to_world.map(|rig| rig.transform_point(local.translation));

    let anchor = anchors.get_single().ok().and_then(|local| world_point(local));
    let target = targets.get_single().ok().and_then(|local| world_point(local));

    for (mut transform, mut follow) in cameras.iter_mut() {
        transform.translation =
            follow.advance(transform.translation, anchor, target, settings.smoothing);
        if target.is_some() {
            transform.look_at(follow.look_at, Vec3::Y);
        }
    }
}

/// Spawn the follow camera already sitting on the player's anchors.
pub fn spawn_follow_camera(
    commands: &mut Commands,
    player: &PlayerSettings,
    camera: &CameraSettings,
    zoom_offset: f32,
) -> Entity {
    let spawn = Vec3::from(player.spawn_position);
    let position = spawn + anchor_offset(camera.anchor(), zoom_offset, camera.zoom_lift);
    let look_at = spawn + camera.look_target();

    commands
        .spawn((
            Camera3d::default(),
            FollowCamera { look_at },
            Transform::from_translation(position).looking_at(look_at, Vec3::Y),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offset_follows_zoom() {
        let base = Vec3::new(0.0, 4.0, -4.0);
        assert_eq!(anchor_offset(base, 0.0, 0.5), base);
        assert_eq!(anchor_offset(base, 2.0, 0.5), Vec3::new(0.0, 5.0, -6.0));
        assert_eq!(anchor_offset(base, -2.0, 0.5), Vec3::new(0.0, 3.0, -2.0));
    }

    #[test]
    fn advance_eases_both_points() {
        let mut follow = FollowCamera::default();
        let position = follow.advance(
            Vec3::ZERO,
            Some(Vec3::new(0.0, 10.0, 0.0)),
            Some(Vec3::new(0.0, 0.0, 10.0)),
            0.1,
        );
        assert!((position - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
        assert!((follow.look_at - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn advance_converges() {
        let mut follow = FollowCamera::default();
        let anchor = Vec3::new(3.0, 4.0, -5.0);
        let mut position = Vec3::ZERO;
        for _ in 0..200 {
            position = follow.advance(position, Some(anchor), Some(Vec3::ONE), 0.1);
        }
        assert!((position - anchor).length() < 1e-3);
        assert!((follow.look_at - Vec3::ONE).length() < 1e-3);
    }

    #[test]
    fn missing_anchors_leave_state_alone() {
        let mut follow = FollowCamera {
            look_at: Vec3::new(1.0, 2.0, 3.0),
        };
        let position = follow.advance(Vec3::new(5.0, 5.0, 5.0), None, None, 0.1);
        assert_eq!(position, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(follow.look_at, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn missing_target_still_moves_camera() {
        let mut follow = FollowCamera::default();
        let position = follow.advance(Vec3::ZERO, Some(Vec3::X * 10.0), None, 0.5);
        assert_eq!(position, Vec3::X * 5.0);
        assert_eq!(follow.look_at, Vec3::ZERO);
    }
}
