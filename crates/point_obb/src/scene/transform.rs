//! Scene transform
//!
//! Translation, rotation and scale kept as separate parts and composed as
//! `T * R * S` when a local-space vertex is mapped to world space.
//!
//! Interactive edits are applied in world space: new translations and
//! rotations are composed on the LEFT of the current ones, so a drag always
//! turns the object about the fixed world axes rather than its own.

use crate::foundation::math::{Mat3, Mat3Ext, Mat4, Vec3};

/// Spatial transform of a scene entity
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTransform {
    /// World space position
    pub translation: Vec3,

    /// Orthonormal rotation matrix (columns are the local axes)
    pub rotation: Mat3,

    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Mat3::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl SceneTransform {
    /// Create identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from translation only
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Builder pattern: Set rotation
    pub fn with_rotation(mut self, rotation: Mat3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// World position of the entity's origin
    pub fn world_position(&self) -> Vec3 {
        self.translation
    }

    /// Convert to transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.translation)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Move by `delta` in world space
    pub fn translate_world(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Rotate about the world Y axis by `yaw` and the world X axis by `pitch`
    ///
    /// Computes `R' = Ry(yaw) * Rx(pitch) * R`. A zero angle contributes the
    /// identity.
    pub fn rotate_world(&mut self, yaw: f32, pitch: f32) {
        let yaw_matrix = if yaw == 0.0 { Mat3::identity() } else { Mat3::rotation_y(yaw) };
        let pitch_matrix = if pitch == 0.0 { Mat3::identity() } else { Mat3::rotation_x(pitch) };
        self.rotation = yaw_matrix * pitch_matrix * self.rotation;
    }

    /// Snap the rotation back onto an orthonormal basis
    pub fn renormalize(&mut self) {
        self.rotation = self.rotation.orthonormalized();
    }

    /// Drift of the rotation away from orthonormal (zero when exact)
    pub fn orthonormality_error(&self) -> f32 {
        self.rotation.orthonormality_error()
    }
}
