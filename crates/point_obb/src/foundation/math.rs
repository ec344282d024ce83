//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the handful of rotation helpers the
//! scene model needs.

pub use nalgebra::{Matrix3, Matrix4, Rotation3, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type (used for rotations)
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for Mat3 with rotation constructors about the world axes
pub trait Mat3Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat3;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat3;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat3;

    /// Re-orthonormalize the columns (Gram-Schmidt, X column kept as the anchor)
    fn orthonormalized(&self) -> Mat3;

    /// Frobenius norm of `Mᵀ·M - I`; zero for an exact rotation
    fn orthonormality_error(&self) -> f32;
}

impl Mat3Ext for Mat3 {
    fn rotation_x(angle: f32) -> Mat3 {
        Rotation3::from_axis_angle(&Vector3::x_axis(), angle).into_inner()
    }

    fn rotation_y(angle: f32) -> Mat3 {
        Rotation3::from_axis_angle(&Vector3::y_axis(), angle).into_inner()
    }

    fn rotation_z(angle: f32) -> Mat3 {
        Rotation3::from_axis_angle(&Vector3::z_axis(), angle).into_inner()
    }

    fn orthonormalized(&self) -> Mat3 {
        let x = self.column(0).normalize();
        let y_raw: Vec3 = self.column(1).into_owned();
        let y = (y_raw - x * x.dot(&y_raw)).normalize();
        let z = x.cross(&y);
        Mat3::from_columns(&[x, y, z])
    }

    fn orthonormality_error(&self) -> f32 {
        (self.transpose() * self - Mat3::identity()).norm()
    }
}
