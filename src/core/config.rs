//! Game configuration loaded from an external RON file.
//!
//! Allows tweaking movement, camera and zoom parameters without
//! recompilation. Every field has a default, so a partial file is valid.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Location of the configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Walk/run speeds and the per-frame turn rate.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeedProfile {
    /// Horizontal speed while walking
    pub walk_speed: f32,
    /// Horizontal speed while the run key is held
    pub run_speed: f32,
    /// Yaw added to the rig per frame of turn input, in radians
    pub rotation_speed: f32,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            walk_speed: 0.8,
            run_speed: 1.6,
            rotation_speed: 0.5_f32.to_radians(),
        }
    }
}

/// Smoothing applied by the motion integrator.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Per-frame fraction used to ease mesh and rig yaw toward their targets
    pub smoothing: f32,
    /// How far above walk speed the character must go to count as running
    pub run_margin: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            run_margin: 0.1,
        }
    }
}

/// Continuous input tuning.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Joystick magnitude below which the stick is ignored
    pub dead_zone: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self { dead_zone: 0.1 }
    }
}

/// Follow camera anchors and smoothing.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Per-frame fraction used to ease the camera toward its anchors
    pub smoothing: f32,
    /// Look-at anchor, in rig space
    pub look_target_offset: (f32, f32, f32),
    /// Camera position anchor at zero zoom, in rig space
    pub anchor_offset: (f32, f32, f32),
    /// Height gained per unit of zoom offset
    pub zoom_lift: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            look_target_offset: (0.0, 0.0, 1.5),
            anchor_offset: (0.0, 4.0, -4.0),
            zoom_lift: 0.5,
        }
    }
}

impl CameraSettings {
    pub fn look_target(&self) -> Vec3 {
        Vec3::from(self.look_target_offset)
    }

    pub fn anchor(&self) -> Vec3 {
        Vec3::from(self.anchor_offset)
    }
}

/// Step and bounds of the camera zoom offset.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            step: 1.0,
            min: -2.0,
            max: 6.0,
        }
    }
}

impl ZoomSettings {
    /// Check the bounds are finite and ordered and the step is usable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.step.is_finite() && self.min.is_finite() && self.max.is_finite()) {
            return Err(format!("zoom values must be finite, got {:?}", self));
        }
        if self.min > self.max {
            return Err(format!("zoom min {} is above max {}", self.min, self.max));
        }
        if self.step < 0.0 {
            return Err(format!("zoom step {} is negative", self.step));
        }
        Ok(())
    }
}

/// Player body placement and collider size.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub spawn_position: (f32, f32, f32),
    pub capsule_half_height: f32,
    pub capsule_radius: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            spawn_position: (0.0, 3.0, 0.0),
            capsule_half_height: 0.08,
            capsule_radius: 0.15,
        }
    }
}

/// Top-level layout of `game_config.ron`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub speed: SpeedProfile,
    pub motion: MotionSettings,
    pub input: InputSettings,
    pub camera: CameraSettings,
    pub zoom: ZoomSettings,
    pub player: PlayerSettings,
}

impl GameConfig {
    /// Parse a config from RON text. `origin` is only used in errors.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        config.zoom.validate().map_err(|details| ConfigError::Invalid {
            path: origin.to_string(),
            details,
        })?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_ron_str(&contents, &display)
    }

    /// Load the config from [`CONFIG_PATH`], falling back to defaults.
    pub fn load() -> Self {
        match Self::from_path(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(e @ (ConfigError::Parse { .. } | ConfigError::Invalid { .. })) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// System to load the config at startup and publish it as resources.
pub fn load_game_config(mut commands: Commands) {
    let config = GameConfig::load();
    commands.insert_resource(super::GameStore::new(config.zoom));
    commands.insert_resource(config.speed);
    commands.insert_resource(config.motion);
    commands.insert_resource(config.input);
    commands.insert_resource(config.camera);
    commands.insert_resource(config.zoom);
    commands.insert_resource(config.player);
}
