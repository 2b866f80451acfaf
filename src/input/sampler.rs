//! Per-frame input sampling: keyboard intents and joystick merged into one
//! movement vector plus a speed.

use bevy::prelude::*;

use super::bindings::KeyBindings;
use crate::core::{GameStore, InputSettings, SpeedProfile};

/// Named control states polled this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub interact: bool,
}

impl KeyboardSnapshot {
    /// Read the bound keys, and the gamepad buttons if a pad is connected.
    pub fn poll(
        keys: &ButtonInput<KeyCode>,
        bindings: &KeyBindings,
        gamepad: Option<&Gamepad>,
    ) -> Self {
        let pad = |button: GamepadButton| gamepad.is_some_and(|g| g.pressed(button));

        Self {
            forward: any_held(keys, &bindings.forward),
            backward: any_held(keys, &bindings.backward),
            left: any_held(keys, &bindings.left),
            right: any_held(keys, &bindings.right),
            run: any_held(keys, &bindings.run) || pad(bindings.gamepad_run),
            interact: any_held(keys, &bindings.interact) || pad(bindings.gamepad_interact),
        }
    }
}

fn any_held(keys: &ButtonInput<KeyCode>, codes: &[KeyCode]) -> bool {
    keys.any_pressed(codes.iter().copied())
}

/// Desired direction in the rig's ground plane. `x` is left, `z` is forward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementIntent {
    pub x: f32,
    pub z: f32,
}

impl MovementIntent {
    pub fn is_turning(&self) -> bool {
        self.x != 0.0
    }

    pub fn is_moving(&self) -> bool {
        self.x != 0.0 || self.z != 0.0
    }
}

/// Output of the sampler for one frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementSample {
    pub intent: MovementIntent,
    pub speed: f32,
}

/// Merge keys and joystick into a movement sample.
///
/// A joystick past the dead zone replaces the keys entirely and scales the
/// speed by its magnitude. Opposing keys resolve to whichever is checked
/// last (backward over forward, right over left).
pub fn sample_movement(
    keys: &KeyboardSnapshot,
    joystick: Vec2,
    profile: &SpeedProfile,
    dead_zone: f32,
) -> MovementSample {
    let magnitude = joystick.length();
    let stick_active = magnitude > dead_zone;

    let mut intent = MovementIntent::default();
    if stick_active {
        intent.z = -joystick.y;
        intent.x = -joystick.x;
    } else {
        if keys.forward {
            intent.z = 1.0;
        }
        if keys.backward {
            intent.z = -1.0;
        }
        if keys.left {
            intent.x = 1.0;
        }
        if keys.right {
            intent.x = -1.0;
        }
    }

    let mut speed = if keys.run {
        profile.run_speed
    } else {
        profile.walk_speed
    };
    if stick_active {
        speed *= magnitude;
    }

    MovementSample { intent, speed }
}

/// Poll keyboard and gamepad, then compute this frame's movement sample.
///
/// A connected gamepad's left stick is written into the store in screen
/// convention (y down). Without a gamepad the store's joystick is left to
/// whatever else drives it.
pub fn sample_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    settings: Res<InputSettings>,
    profile: Res<SpeedProfile>,
    gamepads: Query<&Gamepad>,
    mut store: ResMut<GameStore>,
    mut snapshot: ResMut<KeyboardSnapshot>,
    mut sample: ResMut<MovementSample>,
) {
    let gamepad = gamepads.iter().next();
    if let Some(gamepad) = gamepad {
        let stick = gamepad.left_stick();
        store.set_joystick(Vec2::new(stick.x, -stick.y));
    }

    *snapshot = KeyboardSnapshot::poll(&keys, &bindings, gamepad);
    *sample = sample_movement(&snapshot, store.joystick, &profile, settings.dead_zone);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SpeedProfile {
        SpeedProfile::default()
    }

    #[test]
    fn forward_key_walks_forward() {
        let keys = KeyboardSnapshot {
            forward: true,
            ..default()
        };
        let sample = sample_movement(&keys, Vec2::ZERO, &profile(), 0.1);
        assert_eq!(sample.intent, MovementIntent { x: 0.0, z: 1.0 });
        assert_eq!(sample.speed, profile().walk_speed);
    }

    #[test]
    fn run_key_selects_run_speed() {
        let keys = KeyboardSnapshot {
            forward: true,
            run: true,
            ..default()
        };
        let sample = sample_movement(&keys, Vec2::ZERO, &profile(), 0.1);
        assert_eq!(sample.speed, profile().run_speed);
    }

    #[test]
    fn opposing_keys_last_one_wins() {
        let keys = KeyboardSnapshot {
            forward: true,
            backward: true,
            left: true,
            right: true,
            ..default()
        };
        let sample = sample_movement(&keys, Vec2::ZERO, &profile(), 0.1);
        assert_eq!(sample.intent, MovementIntent { x: -1.0, z: -1.0 });
    }

    #[test]
    fn no_input_means_no_intent() {
        let sample = sample_movement(&KeyboardSnapshot::default(), Vec2::ZERO, &profile(), 0.1);
        assert!(!sample.intent.is_moving());
        assert_eq!(sample.speed, profile().walk_speed);
    }

    #[test]
    fn joystick_overrides_keys_and_scales_speed() {
        let keys = KeyboardSnapshot {
            forward: true,
            left: true,
            ..default()
        };
        let sample = sample_movement(&keys, Vec2::new(0.6, 0.6), &profile(), 0.1);
        assert_eq!(sample.intent, MovementIntent { x: -0.6, z: -0.6 });
        let expected = profile().walk_speed * 0.848_528_1;
        assert!((sample.speed - expected).abs() < 1e-5);
    }

    #[test]
    fn joystick_scales_run_speed_too() {
        let keys = KeyboardSnapshot {
            run: true,
            ..default()
        };
        let sample = sample_movement(&keys, Vec2::new(0.0, -0.5), &profile(), 0.1);
        assert_eq!(sample.intent, MovementIntent { x: 0.0, z: 0.5 });
        assert!((sample.speed - profile().run_speed * 0.5).abs() < 1e-6);
    }

    #[test]
    fn joystick_inside_dead_zone_is_ignored() {
        let keys = KeyboardSnapshot {
            right: true,
            ..default()
        };
        let sample = sample_movement(&keys, Vec2::new(0.05, 0.05), &profile(), 0.1);
        assert_eq!(sample.intent, MovementIntent { x: -1.0, z: 0.0 });
        assert_eq!(sample.speed, profile().walk_speed);
    }

    #[test]
    fn poll_reads_any_bound_key() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::ShiftRight);
        keys.press(KeyCode::KeyE);
        let snapshot = KeyboardSnapshot::poll(&keys, &KeyBindings::default(), None);
        assert_eq!(
            snapshot,
            KeyboardSnapshot {
                forward: true,
                run: true,
                interact: true,
                ..default()
            }
        );
    }
}
