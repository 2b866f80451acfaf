//! Third-person movement: input samples turned into body velocity, rig yaw
//! and model facing.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::camera::anchor_offset;
use super::components::*;
use crate::core::angles::{lerp, lerp_angle, normalize_angle};
use crate::core::{CameraSettings, GameStore, MotionSettings, PlayerSettings, SpeedProfile};
use crate::input::MovementSample;

/// Result of one controller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStep {
    pub velocity: Vec3,
    pub animation: AnimationLabel,
}

impl CharacterController {
    /// Advance orientation by one frame and derive the new body velocity.
    ///
    /// Only the horizontal components of `velocity` are ever replaced, and
    /// only while there is movement intent. Idle frames hand the velocity
    /// back untouched.
    pub fn step(
        &mut self,
        sample: &MovementSample,
        profile: &SpeedProfile,
        motion: &MotionSettings,
        velocity: Vec3,
    ) -> MotionStep {
        let intent = sample.intent;
        let mut velocity = velocity;

        if intent.is_turning() {
            self.rotation_target += profile.rotation_speed * intent.x;
        }

        let animation = if intent.is_moving() {
            self.character_rotation_target = normalize_angle(intent.x.atan2(intent.z));
            let heading = self.rotation_target + self.character_rotation_target;
            velocity.x = heading.sin() * sample.speed;
            velocity.z = heading.cos() * sample.speed;
            AnimationLabel::for_speed(sample.speed, profile.walk_speed, motion.run_margin)
        } else {
            AnimationLabel::Idle
        };

        self.model_yaw = lerp_angle(self.model_yaw, self.character_rotation_target, motion.smoothing);
        self.rig_yaw = lerp(self.rig_yaw, self.rotation_target, motion.smoothing);

        MotionStep { velocity, animation }
    }
}

/// Drive the player body from this frame's movement sample.
///
/// Does nothing until the body exists. Rig and model yaw are applied when
/// those children are present.
pub fn drive_character(
    sample: Res<MovementSample>,
    profile: Res<SpeedProfile>,
    motion: Res<MotionSettings>,
    mut store: ResMut<GameStore>,
    mut player_query: Query<
        (&Transform, &mut Velocity, &mut CharacterController, &mut AnimationLabel),
        With<Player>,
    >,
    mut rig_query: Query<&mut Transform, (With<CharacterRig>, Without<Player>)>,
    mut model_query: Query<
        &mut Transform,
        (With<CharacterModel>, Without<Player>, Without<CharacterRig>),
    >,
) {
    let Ok((transform, mut velocity, mut controller, mut animation)) =
        player_query.get_single_mut()
    else {
        return;
    };

    store.set_player_position(transform.translation);

    let step = controller.step(&sample, &profile, &motion, velocity.linvel);

    if velocity.linvel != step.velocity {
        velocity.linvel = step.velocity;
    }

    let previous = *animation;
    if animation.set_if_neq(step.animation) {
        debug!("Animation {} -> {}", previous.as_str(), step.animation.as_str());
    }

    if let Ok(mut rig) = rig_query.get_single_mut() {
        rig.rotation = Quat::from_rotation_y(controller.rig_yaw);
    }
    if let Ok(mut model) = model_query.get_single_mut() {
        model.rotation = Quat::from_rotation_y(controller.model_yaw);
    }
}

/// Spawn the player body with its rig, camera anchors and model.
pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &PlayerSettings,
    camera: &CameraSettings,
    zoom_offset: f32,
) -> Entity {
    let body_mesh = meshes.add(Capsule3d::new(
        settings.capsule_radius,
        settings.capsule_half_height * 2.0,
    ));
    let nose_mesh = meshes.add(Cuboid::new(0.06, 0.06, 0.1));
    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.55, 0.3),
        perceptual_roughness: 0.8,
        ..default()
    });
    let nose_material = materials.add(Color::srgb(0.2, 0.2, 0.25));

    let player = commands
        .spawn((
            Player,
            CharacterController::default(),
            AnimationLabel::default(),
            Transform::from_translation(Vec3::from(settings.spawn_position)),
            Visibility::default(),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::capsule_y(settings.capsule_half_height, settings.capsule_radius),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            // Never sleeps, so velocity writes always take effect
            Sleeping::disabled(),
        ))
        .id();

    commands.entity(player).with_children(|parent| {
        parent
            .spawn((CharacterRig, Transform::default(), Visibility::default()))
            .with_children(|rig| {
                rig.spawn((CameraTarget, Transform::from_translation(camera.look_target())));
                rig.spawn((
                    CameraAnchor,
                    Transform::from_translation(anchor_offset(
                        camera.anchor(),
                        zoom_offset,
                        camera.zoom_lift,
                    )),
                ));
                rig.spawn((CharacterModel, Transform::default(), Visibility::default()))
                    .with_children(|model| {
                        model.spawn((
                            Mesh3d(body_mesh),
                            MeshMaterial3d(body_material),
                            Transform::default(),
                        ));
                        // Shows which way the character faces
                        model.spawn((
                            Mesh3d(nose_mesh),
                            MeshMaterial3d(nose_material),
                            Transform::from_xyz(0.0, 0.08, settings.capsule_radius),
                        ));
                    });
            });
    });

    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MovementIntent;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn sample(x: f32, z: f32, speed: f32) -> MovementSample {
        MovementSample {
            intent: MovementIntent { x, z },
            speed,
        }
    }

    #[test]
    fn idle_leaves_velocity_alone() {
        let mut controller = CharacterController::default();
        let velocity = Vec3::new(0.4, -2.0, -0.3);
        let step = controller.step(
            &sample(0.0, 0.0, 0.8),
            &SpeedProfile::default(),
            &MotionSettings::default(),
            velocity,
        );
        assert_eq!(step.velocity, velocity);
        assert_eq!(step.animation, AnimationLabel::Idle);
        assert_eq!(controller.rotation_target, 0.0);
    }

    #[test]
    fn forward_sets_horizontal_velocity_only() {
        let mut controller = CharacterController::default();
        let step = controller.step(
            &sample(0.0, 1.0, 0.8),
            &SpeedProfile::default(),
            &MotionSettings::default(),
            Vec3::new(5.0, -1.5, 5.0),
        );
        assert!(step.velocity.x.abs() < 1e-6);
        assert_eq!(step.velocity.y, -1.5);
        assert!((step.velocity.z - 0.8).abs() < 1e-6);
        assert_eq!(step.animation, AnimationLabel::Walk);
    }

    #[test]
    fn turning_accumulates_across_frames() {
        let profile = SpeedProfile::default();
        let mut controller = CharacterController::default();
        for _ in 0..10 {
            controller.step(&sample(1.0, 0.0, 0.8), &profile, &MotionSettings::default(), Vec3::ZERO);
        }
        assert!((controller.rotation_target - 10.0 * profile.rotation_speed).abs() < 1e-6);
        assert!((controller.character_rotation_target - FRAC_PI_2).abs() < 1e-6);

        // Releasing the key keeps the accumulated yaw
        controller.step(&sample(0.0, 0.0, 0.8), &profile, &MotionSettings::default(), Vec3::ZERO);
        assert!((controller.rotation_target - 10.0 * profile.rotation_speed).abs() < 1e-6);
    }

    #[test]
    fn heading_combines_rig_and_facing() {
        let mut controller = CharacterController {
            rotation_target: FRAC_PI_2,
            ..default()
        };
        let step = controller.step(
            &sample(0.0, 1.0, 2.0),
            &SpeedProfile::default(),
            &MotionSettings::default(),
            Vec3::ZERO,
        );
        assert!((step.velocity.x - 2.0).abs() < 1e-5);
        assert!(step.velocity.z.abs() < 1e-5);
    }

    #[test]
    fn run_label_needs_speed_above_margin() {
        let profile = SpeedProfile::default();
        let motion = MotionSettings::default();
        let mut controller = CharacterController::default();

        let mut label = AnimationLabel::Idle;
        for _ in 0..5 {
            label = controller
                .step(&sample(0.0, 1.0, profile.run_speed), &profile, &motion, Vec3::ZERO)
                .animation;
        }
        assert_eq!(label, AnimationLabel::Run);

        // Half-pushed stick while running stays a walk
        let step = controller.step(&sample(0.0, 1.0, profile.run_speed * 0.5), &profile, &motion, Vec3::ZERO);
        assert_eq!(step.animation, AnimationLabel::Walk);
    }

    #[test]
    fn label_is_reevaluated_every_frame() {
        let profile = SpeedProfile::default();
        let motion = MotionSettings::default();
        let mut controller = CharacterController::default();
        controller.step(&sample(0.0, 1.0, profile.run_speed), &profile, &motion, Vec3::ZERO);
        let step = controller.step(&sample(0.0, 0.0, profile.run_speed), &profile, &motion, Vec3::ZERO);
        assert_eq!(step.animation, AnimationLabel::Idle);
    }

    #[test]
    fn model_yaw_eases_along_short_arc() {
        let mut controller = CharacterController {
            model_yaw: 3.0,
            ..default()
        };
        // Backward with a tiny left lean faces just past -π
        let step_sample = sample(-0.01, -1.0, 0.8);
        controller.step(&step_sample, &SpeedProfile::default(), &MotionSettings::default(), Vec3::ZERO);
        assert!(controller.character_rotation_target < -3.0);
        // Moved toward π (through the seam), not back toward 0
        assert!(controller.model_yaw > 3.0 || controller.model_yaw < -3.0);
    }

    #[test]
    fn facing_straight_back_is_positive_pi() {
        let mut controller = CharacterController::default();
        controller.step(&sample(-0.0, -1.0, 0.8), &SpeedProfile::default(), &MotionSettings::default(), Vec3::ZERO);
        assert_eq!(controller.character_rotation_target, PI);
    }

    #[test]
    fn rig_yaw_uses_plain_lerp() {
        let mut controller = CharacterController {
            rotation_target: 4.0,
            ..default()
        };
        controller.step(&sample(0.0, 0.0, 0.8), &SpeedProfile::default(), &MotionSettings::default(), Vec3::ZERO);
        assert!((controller.rig_yaw - 0.4).abs() < 1e-6);
    }
}
