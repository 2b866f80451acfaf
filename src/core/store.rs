//! Shared game state read and written by the controller and input bridge.
//!
//! Systems get it as a plain resource; nothing else holds references into it.

use bevy::prelude::*;

use super::config::ZoomSettings;

/// State shared between the character controller, camera and input bridge.
#[derive(Resource, Debug, Clone)]
pub struct GameStore {
    /// Last published world position of the player body
    pub player_position: Vec3,
    /// Whether the chest has been opened
    pub chest_open: bool,
    /// Extra camera distance; negative pulls the camera closer
    pub camera_zoom_offset: f32,
    /// Joystick vector in screen convention (x right, y down), roughly [-1, 1]
    pub joystick: Vec2,
    zoom: ZoomSettings,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

impl GameStore {
    pub fn new(zoom: ZoomSettings) -> Self {
        Self {
            player_position: Vec3::ZERO,
            chest_open: false,
            camera_zoom_offset: clamp_zoom(0.0, &zoom),
            joystick: Vec2::ZERO,
            zoom,
        }
    }

    pub fn set_player_position(&mut self, position: Vec3) {
        self.player_position = position;
    }

    pub fn set_joystick(&mut self, joystick: Vec2) {
        self.joystick = joystick;
    }

    /// Open the chest. Returns `true` only on the call that opened it.
    pub fn open_chest(&mut self) -> bool {
        let was_open = self.chest_open;
        self.chest_open = true;
        !was_open
    }

    /// Move the camera closer. Returns `true` if the offset changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.camera_zoom_offset - self.zoom.step)
    }

    /// Move the camera further away. Returns `true` if the offset changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.camera_zoom_offset + self.zoom.step)
    }

    fn set_zoom(&mut self, offset: f32) -> bool {
        let clamped = clamp_zoom(offset, &self.zoom);
        let changed = clamped != self.camera_zoom_offset;
        self.camera_zoom_offset = clamped;
        changed
    }
}

/// Clamp without panicking on inverted or NaN bounds; `max` wins.
fn clamp_zoom(offset: f32, zoom: &ZoomSettings) -> f32 {
    offset.max(zoom.min).min(zoom.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chest_opens_once() {
        let mut store = GameStore::default();
        assert!(!store.chest_open);
        assert!(store.open_chest());
        assert!(store.chest_open);
        assert!(!store.open_chest());
        assert!(store.chest_open);
    }

    #[test]
    fn zoom_steps_and_clamps() {
        let mut store = GameStore::new(ZoomSettings {
            step: 1.0,
            min: -1.0,
            max: 2.0,
        });
        assert_eq!(store.camera_zoom_offset, 0.0);

        assert!(store.zoom_in());
        assert_eq!(store.camera_zoom_offset, -1.0);
        assert!(!store.zoom_in());
        assert_eq!(store.camera_zoom_offset, -1.0);

        assert!(store.zoom_out());
        assert!(store.zoom_out());
        assert!(store.zoom_out());
        assert_eq!(store.camera_zoom_offset, 2.0);
        assert!(!store.zoom_out());
    }

    #[test]
    fn bad_bounds_do_not_panic() {
        let mut store = GameStore::new(ZoomSettings {
            step: 1.0,
            min: 3.0,
            max: -1.0,
        });
        assert_eq!(store.camera_zoom_offset, -1.0);
        store.zoom_out();
        store.zoom_in();
        assert_eq!(store.camera_zoom_offset, -1.0);

        let store = GameStore::new(ZoomSettings {
            step: 1.0,
            min: f32::NAN,
            max: f32::NAN,
        });
        assert_eq!(store.camera_zoom_offset, 0.0);
    }

    #[test]
    fn partial_step_is_clamped_to_bound() {
        let mut store = GameStore::new(ZoomSettings {
            step: 0.75,
            min: -1.0,
            max: 1.0,
        });
        store.zoom_out();
        store.zoom_out();
        assert_eq!(store.camera_zoom_offset, 1.0);
    }
}
