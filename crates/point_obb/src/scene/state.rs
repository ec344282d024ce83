//! Simulation state
//!
//! Everything the frame loop mutates lives here and is passed by reference
//! into the update and render steps. The collision flag is derived: every
//! [`SimulationState::update`] recomputes it from the current transforms.

use log::{debug, info};

use super::{Selection, SceneTransform};
use crate::core::config::{ControlsConfig, SceneConfig};
use crate::foundation::math::Vec3;
use crate::input::Command;
use crate::physics::collision::{ObbCollider, WorldSpaceObb};

/// The box, the point and the bookkeeping around them
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Transform of the oriented bounding box
    pub obb: SceneTransform,
    /// Transform of the point (only its translation matters for collision)
    pub point: SceneTransform,
    /// Base extents of the box, fixed for the session
    pub collider: ObbCollider,
    controls: ControlsConfig,
    selection: Selection,
    colliding: bool,
    tick_count: u64,
}

impl SimulationState {
    /// Build the initial scene
    ///
    /// The collision flag is computed immediately so it is valid before the
    /// first tick.
    pub fn new(scene: &SceneConfig, controls: &ControlsConfig) -> Self {
        let mut state = Self {
            obb: SceneTransform::from_translation(scene.box_position).with_scale(scene.box_scale),
            point: SceneTransform::from_translation(scene.point_position),
            collider: ObbCollider::new(scene.box_dimensions.x, scene.box_dimensions.y, scene.box_dimensions.z),
            controls: controls.clone(),
            selection: scene.initial_selection,
            colliding: false,
            tick_count: 0,
        };
        state.colliding = state.test_collision();
        state
    }

    /// Currently selected entity
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Swap the selected entity
    pub fn toggle_selection(&mut self) -> Selection {
        let selected = self.selection.toggle();
        info!("Selected {selected}");
        selected
    }

    fn selected_transform_mut(&mut self) -> &mut SceneTransform {
        match self.selection {
            Selection::Obb => &mut self.obb,
            Selection::Point => &mut self.point,
        }
    }

    /// Move the selected entity one step along a world-space direction
    pub fn move_selected(&mut self, direction: Vec3) {
        let step = direction * self.controls.movement_speed;
        self.selected_transform_mut().translate_world(step);
    }

    /// Rotate the selected entity from a mouse drag of `(dx, dy)` pixels
    ///
    /// Horizontal travel yaws about world Y, vertical travel pitches about
    /// world X.
    pub fn rotate_selected(&mut self, dx: f32, dy: f32) {
        let speed = self.controls.rotation_speed;
        let renormalize = self.controls.renormalize_rotation;
        let transform = self.selected_transform_mut();
        transform.rotate_world(dx * speed, dy * speed);
        if renormalize {
            transform.renormalize();
        }
    }

    /// Apply an input command; returns `false` for [`Command::Quit`]
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => self.move_selected(direction),
            Command::ToggleSelection => {
                self.toggle_selection();
            }
            Command::Quit => return false,
        }
        true
    }

    /// World-space geometry of the box under its current transform
    pub fn world_obb(&self) -> WorldSpaceObb {
        WorldSpaceObb::from_transform(&self.collider, self.obb.translation, &self.obb.rotation, self.obb.scale)
    }

    /// World position of the point
    pub fn point_position(&self) -> Vec3 {
        self.point.world_position()
    }

    /// Run the collision test against the current transforms
    pub fn test_collision(&self) -> bool {
        self.world_obb().contains_point(&self.point_position())
    }

    /// One update tick: recompute the collision flag
    pub fn update(&mut self) -> bool {
        self.tick_count += 1;
        let colliding = self.test_collision();
        if colliding != self.colliding {
            if colliding {
                info!("Point entered box at {:?}", self.point_position());
            } else {
                info!("Point left box at {:?}", self.point_position());
            }
        } else if self.tick_count % 600 == 0 {
            debug!("Tick {}: colliding={}", self.tick_count, colliding);
        }
        self.colliding = colliding;
        colliding
    }

    /// Collision flag from the most recent update
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Number of update ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(&SceneConfig::default(), &ControlsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_demo_scene_is_separated() {
        let state = SimulationState::default();
        assert_eq!(state.selection(), Selection::Obb);
        assert_eq!(state.collider.half_extents, Vec3::new(1.0, 1.0, 1.0));
        assert!(!state.is_colliding());
        assert_eq!(state.tick_count(), 0);
    }

    #[test]
    fn test_moves_only_affect_selected_entity() {
        let mut state = SimulationState::default();
        let point_before = state.point.translation;

        state.apply(Command::Move(Vec3::x()));
        assert_relative_eq!(state.obb.translation, Vec3::new(0.17, 0.0, 0.0), epsilon = 1e-6);
        assert_eq!(state.point.translation, point_before);

        state.apply(Command::ToggleSelection);
        state.apply(Command::Move(-Vec3::z()));
        assert_relative_eq!(state.point.translation, Vec3::new(-0.15, 0.0, -0.02), epsilon = 1e-6);
        assert_relative_eq!(state.obb.translation, Vec3::new(0.17, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_quit_command_reports_stop() {
        let mut state = SimulationState::default();
        assert!(state.apply(Command::ToggleSelection));
        assert!(!state.apply(Command::Quit));
    }

    #[test]
    fn test_rotation_targets_selection() {
        let mut state = SimulationState::default();
        state.rotate_selected(10.0, 0.0);
        assert!(state.obb.rotation != crate::foundation::math::Mat3::identity());
        assert_eq!(state.point.rotation, crate::foundation::math::Mat3::identity());
        assert!(state.obb.orthonormality_error() < 1e-5);
    }

    #[test]
    fn test_walking_point_into_box_flips_flag() {
        let mut state = SimulationState::default();
        state.toggle_selection();

        // Box spans x in [0.05, 0.25] at scale 0.1; the point starts at -0.15
        // and reaches the face after ten steps, give or take rounding.
        let mut entered_after = None;
        for step in 1..=20 {
            state.apply(Command::Move(Vec3::x()));
            if state.update() {
                entered_after = Some(step);
                break;
            }
        }
        assert!(matches!(entered_after, Some(10 | 11)), "entered after {entered_after:?}");
        assert!(state.is_colliding());
    }

    #[test]
    fn test_rotating_box_can_uncover_point() {
        let scene = SceneConfig {
            box_dimensions: Vec3::new(4.0, 0.5, 0.5),
            box_position: Vec3::zeros(),
            box_scale: Vec3::new(1.0, 1.0, 1.0),
            point_position: Vec3::new(1.5, 0.0, 0.0),
            initial_selection: Selection::Obb,
        };
        let mut state = SimulationState::new(&scene, &ControlsConfig::default());
        assert!(state.update());

        // 157 px at 0.01 rad/px is roughly a quarter turn about world Y.
        state.rotate_selected(157.0, 0.0);
        assert!(!state.update());
    }
}
