//! Fixed perspective camera looking down -Z at the origin

use crate::foundation::math::{utils, Mat4, Point3, Vec3};

/// Perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position
    pub position: Point3,
    /// Point the camera looks at
    pub target: Point3,
    /// Up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Viewport width over height
    pub aspect: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Camera {
    /// Camera two units in front of the origin with a 45 degree field of view
    pub fn demo(aspect: f32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 2.0),
            target: Point3::origin(),
            up: Vec3::y(),
            fov_y: utils::deg_to_rad(45.0),
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    /// World to view matrix (right-handed)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// View to clip matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov_y, self.near, self.far)
    }

    /// Combined projection * view
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_lands_in_screen_center() {
        let camera = Camera::demo(1.0);
        let ndc = camera.view_projection().transform_point(&Point3::origin());
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-6);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_positive_x_is_screen_right() {
        let camera = Camera::demo(1.0);
        let ndc = camera.view_projection().transform_point(&Point3::new(0.15, 0.1, 0.0));
        assert!(ndc.x > 0.0);
        assert!(ndc.y > 0.0);
    }

    #[test]
    fn test_wider_aspect_squeezes_x() {
        let square = Camera::demo(1.0);
        let wide = Camera::demo(2.0);

        let p = Point3::new(0.2, 0.0, 0.0);
        let x_square = square.view_projection().transform_point(&p).x;
        let x_wide = wide.view_projection().transform_point(&p).x;
        assert_relative_eq!(x_wide, x_square * 0.5, epsilon = 1e-6);
    }
}
