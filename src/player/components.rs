//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player's physics body.
#[derive(Component)]
pub struct Player;

/// Container under the body that carries the camera anchors and the model.
/// Its yaw follows the accumulated turn input.
#[derive(Component)]
pub struct CharacterRig;

/// The visible character, yawed to face the direction of travel.
#[derive(Component)]
pub struct CharacterModel;

/// Anchor the camera looks at.
#[derive(Component)]
pub struct CameraTarget;

/// Anchor the camera sits on.
#[derive(Component)]
pub struct CameraAnchor;

/// Which locomotion clip the character should be playing.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationLabel {
    #[default]
    Idle,
    Walk,
    Run,
}

impl AnimationLabel {
    /// Label for a moving character. Speeds more than `run_margin` above
    /// walk speed count as running.
    pub fn for_speed(speed: f32, walk_speed: f32, run_margin: f32) -> Self {
        if speed > walk_speed + run_margin {
            Self::Run
        } else {
            Self::Walk
        }
    }

    /// Clip name used by the character model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Run => "run",
        }
    }
}

/// Orientation state of the character controller.
///
/// `rotation_target` is the rig yaw accumulated from turn input. It is not
/// wrapped, so the rig's plain lerp never swings the long way round.
/// `character_rotation_target` is the facing of the model relative to the
/// rig, always in (-π, π].
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct CharacterController {
    pub rotation_target: f32,
    pub character_rotation_target: f32,
    /// Smoothed yaw currently applied to the rig
    pub rig_yaw: f32,
    /// Smoothed yaw currently applied to the model
    pub model_yaw: f32,
}
