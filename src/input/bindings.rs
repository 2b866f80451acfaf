//! Key and gamepad bindings for the named control actions.

use bevy::prelude::*;

/// Physical inputs mapped to each control action.
///
/// Any bound key held counts as the action being held.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub forward: Vec<KeyCode>,
    pub backward: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub run: Vec<KeyCode>,
    pub interact: Vec<KeyCode>,
    pub gamepad_run: GamepadButton,
    pub gamepad_interact: GamepadButton,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            backward: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            run: vec![KeyCode::ShiftLeft, KeyCode::ShiftRight],
            interact: vec![KeyCode::KeyE],
            gamepad_run: GamepadButton::LeftTrigger2,
            gamepad_interact: GamepadButton::South,
        }
    }
}
