//! Rendering seam
//!
//! The crate does not own a graphics pipeline. [`SceneRenderer`] turns the
//! simulation state into draw calls on a [`RenderSurface`], which is supplied
//! by the platform layer: a GPU backend, a window title, or a test recorder.

pub mod camera;
pub mod mesh;

pub use camera::Camera;
pub use mesh::{ColoredVertex, Mesh, Primitive};

use crate::foundation::math::Mat4;
use crate::scene::SimulationState;

/// Highlight applied to every vertex color of a frame
///
/// Gates the red channel: the box goes blue to pink and the point green to
/// yellow when they collide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hue {
    /// Multiplier for the red channel
    pub red_gain: f32,
}

impl Hue {
    /// Hue used while the point is outside the box
    pub const SEPARATED: Self = Self { red_gain: 0.0 };

    /// Hue used while the point is inside the box
    pub const COLLIDING: Self = Self { red_gain: 1.0 };

    /// Pick the hue for a collision flag
    pub const fn for_collision(colliding: bool) -> Self {
        if colliding {
            Self::COLLIDING
        } else {
            Self::SEPARATED
        }
    }

    /// Whether this is the collision highlight
    pub fn is_highlighted(&self) -> bool {
        self.red_gain > 0.0
    }

    /// Apply the hue to an RGBA color
    pub fn apply(&self, color: [f32; 4]) -> [f32; 4] {
        [color[0] * self.red_gain, color[1], color[2], color[3]]
    }
}

/// Draw target provided by the platform layer
pub trait RenderSurface {
    /// Called once before the frame's draw calls
    fn begin_frame(&mut self) {}

    /// Draw `mesh` with the model-view-projection matrix `mvp`
    fn draw(&mut self, mesh: &Mesh, mvp: &Mat4, hue: Hue);

    /// Called once after the frame's draw calls
    fn end_frame(&mut self) {}
}

/// Draws the box wireframe and the point
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    camera: Camera,
    box_mesh: Mesh,
    point_mesh: Mesh,
}

impl SceneRenderer {
    /// Create a renderer for a viewport with the given aspect ratio
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::demo(aspect),
            box_mesh: Mesh::box_wireframe(),
            point_mesh: Mesh::point(),
        }
    }

    /// Render one frame of `state`
    pub fn render(&self, state: &SimulationState, surface: &mut dyn RenderSurface) {
        let view_projection = self.camera.view_projection();
        let hue = Hue::for_collision(state.is_colliding());

        surface.begin_frame();
        surface.draw(&self.box_mesh, &(view_projection * state.obb.to_matrix()), hue);
        surface.draw(&self.point_mesh, &(view_projection * state.point.to_matrix()), hue);
        surface.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[derive(Default)]
    struct RecordingSurface {
        frames: usize,
        draws: Vec<(Primitive, usize, Mat4, Hue)>,
    }

    impl RenderSurface for RecordingSurface {
        fn begin_frame(&mut self) {
            self.frames += 1;
        }

        fn draw(&mut self, mesh: &Mesh, mvp: &Mat4, hue: Hue) {
            self.draws.push((mesh.primitive, mesh.vertices.len(), *mvp, hue));
        }
    }

    #[test]
    fn test_hue_gates_red_channel() {
        assert_eq!(Hue::SEPARATED.apply(mesh::BOX_COLOR), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(Hue::COLLIDING.apply(mesh::BOX_COLOR), [1.0, 0.0, 1.0, 1.0]);
        assert_eq!(Hue::SEPARATED.apply(mesh::POINT_COLOR), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(Hue::COLLIDING.apply(mesh::POINT_COLOR), [1.0, 1.0, 0.0, 1.0]);
        assert!(Hue::for_collision(true).is_highlighted());
        assert!(!Hue::for_collision(false).is_highlighted());
    }

    #[test]
    fn test_render_draws_box_then_point() {
        let renderer = SceneRenderer::new(1.0);
        let state = SimulationState::default();
        let mut surface = RecordingSurface::default();

        renderer.render(&state, &mut surface);

        assert_eq!(surface.frames, 1);
        assert_eq!(surface.draws.len(), 2);
        assert_eq!(surface.draws[0].0, Primitive::Lines);
        assert_eq!(surface.draws[0].1, 24);
        assert_eq!(surface.draws[1].0, Primitive::Points);
        assert_eq!(surface.draws[0].3, Hue::SEPARATED);

        let vp = Camera::demo(1.0).view_projection();
        assert_eq!(surface.draws[0].2, vp * state.obb.to_matrix());
        assert_eq!(surface.draws[1].2, vp * state.point.to_matrix());
    }

    #[test]
    fn test_render_highlights_collision() {
        let renderer = SceneRenderer::new(1.0);
        let mut state = SimulationState::default();
        state.point.translation = Vec3::new(0.15, 0.0, 0.0);
        state.update();

        let mut surface = RecordingSurface::default();
        renderer.render(&state, &mut surface);
        assert!(surface.draws.iter().all(|draw| draw.3 == Hue::COLLIDING));
    }
}
