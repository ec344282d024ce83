//! # Demo Configuration
//!
//! Every tunable the demo reads at startup: window setup, the initial scene
//! layout, control speeds and logging. All sections implement `Default` with
//! the values the demo ships with, so a config file only needs the keys it
//! wants to override.
//!
//! ```toml
//! [scene]
//! box_position = [0.15, 0.0, 0.0]
//! initial_selection = "point"
//!
//! [controls]
//! movement_speed = 0.05
//! ```

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec3;
use crate::scene::Selection;

/// # Engine Configuration
///
/// Logging and frame-loop diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the demo ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
    /// Seconds between frame statistics log lines (0 disables them)
    pub stats_interval_secs: f32,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            stats_interval_secs: 5.0,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.stats_interval_secs.is_finite() || self.stats_interval_secs < 0.0 {
            return Err(format!("stats_interval_secs must be >= 0, got {}", self.stats_interval_secs));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Base window title
    pub title: String,
}

impl WindowConfig {
    /// Width over height
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("Window size must be non-zero, got {}x{}", self.width, self.height));
        }
        if self.title.is_empty() {
            return Err("Window title cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Point - OBB Collision Detection".to_string(),
        }
    }
}

/// # Scene Configuration
///
/// Initial placement of the box and the point. The box dimensions are the
/// full width, height and depth of the wireframe mesh in its own local space;
/// the collider is derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Box width, height and depth before scaling
    pub box_dimensions: Vec3,
    /// Initial box translation
    pub box_position: Vec3,
    /// Initial box scale
    pub box_scale: Vec3,
    /// Initial point translation
    pub point_position: Vec3,
    /// Entity that receives move/rotate commands at startup
    pub initial_selection: Selection,
}

impl SceneConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.box_dimensions.iter().any(|d| !(d.is_finite() && *d > 0.0)) {
            return Err(format!("Box dimensions must be positive, got {:?}", self.box_dimensions));
        }
        if self.box_scale.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(format!("Box scale must be positive, got {:?}", self.box_scale));
        }
        if self.box_position.iter().chain(self.point_position.iter()).any(|v| !v.is_finite()) {
            return Err("Initial positions must be finite".to_string());
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            box_dimensions: Vec3::new(2.0, 2.0, 2.0),
            box_position: Vec3::new(0.15, 0.0, 0.0),
            box_scale: Vec3::new(0.1, 0.1, 0.1),
            point_position: Vec3::new(-0.15, 0.0, 0.0),
            initial_selection: Selection::Obb,
        }
    }
}

/// # Controls Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// World units moved per key press or repeat
    pub movement_speed: f32,
    /// Radians rotated per pixel of mouse drag
    pub rotation_speed: f32,
    /// Re-orthonormalize rotations after every drag step
    pub renormalize_rotation: bool,
}

impl ControlsConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.movement_speed.is_finite() && self.movement_speed > 0.0) {
            return Err(format!("movement_speed must be positive, got {}", self.movement_speed));
        }
        if !(self.rotation_speed.is_finite() && self.rotation_speed > 0.0) {
            return Err(format!("rotation_speed must be positive, got {}", self.rotation_speed));
        }
        Ok(())
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            movement_speed: 0.02,
            rotation_speed: 0.01,
            renormalize_rotation: true,
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that the demo loads at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Logging and loop diagnostics
    pub engine: EngineConfig,
    /// Window setup
    pub window: WindowConfig,
    /// Initial scene layout
    pub scene: SceneConfig,
    /// Control speeds
    pub controls: ControlsConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine
            .validate()
            .and_then(|()| self.window.validate())
            .and_then(|()| self.scene.validate())
            .and_then(|()| self.controls.validate())
            .map_err(ConfigError::Invalid)
    }
}

impl Config for ApplicationConfig {}
