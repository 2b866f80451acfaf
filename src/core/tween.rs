//! Time-based transform easing for scene props.
//!
//! The character and camera use fixed per-frame smoothing; props like the
//! chest lid ease with a rate so they look the same at any frame rate.

use bevy::prelude::*;

/// Component for smooth transform interpolation toward a target.
#[derive(Component, Debug, Clone)]
pub struct SmoothTransform {
    /// Target translation (None = don't animate)
    pub target_translation: Option<Vec3>,
    /// Target rotation (None = don't animate)
    pub target_rotation: Option<Quat>,
    /// Approach rate per second (higher = faster)
    pub rate: f32,
}

impl Default for SmoothTransform {
    fn default() -> Self {
        Self {
            target_translation: None,
            target_rotation: None,
            rate: 6.0,
        }
    }
}

impl SmoothTransform {
    pub fn new(rate: f32) -> Self {
        Self { rate, ..default() }
    }

    /// Fraction of the remaining distance covered in `dt` seconds.
    pub fn fraction(&self, dt: f32) -> f32 {
        (self.rate * dt).clamp(0.0, 1.0)
    }

    /// Advance `transform` toward the targets by `dt` seconds.
    pub fn apply(&self, transform: &mut Transform, dt: f32) {
        let t = self.fraction(dt);
        if let Some(target) = self.target_translation {
            transform.translation = transform.translation.lerp(target, t);
        }
        if let Some(target) = self.target_rotation {
            transform.rotation = transform.rotation.slerp(target, t);
        }
    }
}

/// System that eases transforms toward their targets.
pub fn update_smooth_transforms(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &SmoothTransform)>,
) {
    let dt = time.delta_secs();
    for (mut transform, smooth) in query.iter_mut() {
        smooth.apply(&mut transform, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        let smooth = SmoothTransform::new(10.0);
        assert_eq!(smooth.fraction(0.05), 0.5);
        assert_eq!(smooth.fraction(1.0), 1.0);
        assert_eq!(smooth.fraction(-1.0), 0.0);
    }

    #[test]
    fn untargeted_axes_are_left_alone() {
        let smooth = SmoothTransform {
            target_translation: Some(Vec3::X * 4.0),
            ..SmoothTransform::new(5.0)
        };
        let rotation = Quat::from_rotation_y(0.3);
        let mut transform = Transform::from_rotation(rotation);
        smooth.apply(&mut transform, 0.1);
        assert!((transform.translation.x - 2.0).abs() < 1e-5);
        assert_eq!(transform.rotation, rotation);
    }
}
