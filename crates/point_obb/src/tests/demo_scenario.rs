//! End-to-end runs of the demo scene
//!
//! Small box, point walked in and out with the keyboard, flag and highlight
//! checked after every tick.

use crate::core::config::{ApplicationConfig, SceneConfig};
use crate::foundation::math::{Mat3, Vec3};
use crate::input::{InputEvent, KeyAction, KeyCode};
use crate::physics::{test_collision, ObbCollider};
use crate::render::{Hue, RenderSurface};
use crate::scene::Selection;
use crate::Engine;

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: KeyCode) -> InputEvent {
        InputEvent::Key { key, action: KeyAction::Press }
    }

    #[derive(Default)]
    struct HueLog(Vec<Hue>);

    impl RenderSurface for HueLog {
        fn draw(&mut self, _mesh: &crate::render::Mesh, _mvp: &crate::foundation::math::Mat4, hue: Hue) {
            self.0.push(hue);
        }
    }

    #[test]
    fn test_small_box_scenario() {
        let collider = ObbCollider::from_half_extents(Vec3::new(0.05, 0.05, 0.05));
        let identity = Mat3::identity();
        let unit = Vec3::new(1.0, 1.0, 1.0);

        assert!(test_collision(&collider, Vec3::zeros(), &identity, unit, Vec3::zeros()));
        assert!(!test_collision(&collider, Vec3::zeros(), &identity, unit, Vec3::new(0.2, 0.0, 0.0)));

        let box_position = Vec3::new(0.15, 0.0, 0.0);
        let start = Vec3::new(-0.15, 0.0, 0.0);
        assert!(!test_collision(&collider, box_position, &identity, unit, start));
        assert!(test_collision(&collider, box_position, &identity, unit, start + Vec3::new(0.3, 0.0, 0.0)));
    }

    #[test]
    fn test_keyboard_walk_in_and_out() {
        let mut engine = Engine::new(&ApplicationConfig::default()).unwrap();
        assert!(!engine.tick());

        // Moving the box first leaves the point untouched.
        engine.handle_event(press(KeyCode::W));
        engine.handle_event(press(KeyCode::S));
        assert!((engine.state.obb.translation - Vec3::new(0.15, 0.0, 0.0)).norm() < 1e-6);

        engine.handle_event(press(KeyCode::Space));
        assert_eq!(engine.state.selection(), Selection::Point);

        // Fifteen steps right puts the point on the box center.
        for _ in 0..15 {
            engine.handle_event(press(KeyCode::D));
        }
        assert!(engine.tick());

        // Out through the top face: box spans y in [-0.1, 0.1].
        for _ in 0..6 {
            engine.handle_event(press(KeyCode::W));
        }
        assert!(!engine.tick());

        // Back down and out the far side along -Z.
        for _ in 0..6 {
            engine.handle_event(press(KeyCode::S));
        }
        assert!(engine.tick());
        for _ in 0..6 {
            engine.handle_event(press(KeyCode::LeftShift));
        }
        assert!(!engine.tick());
    }

    #[test]
    fn test_highlight_tracks_every_tick() {
        let mut engine = Engine::new(&ApplicationConfig::default()).unwrap();
        let mut surface = HueLog::default();

        engine.render(&mut surface);
        engine.handle_event(press(KeyCode::Space));
        for _ in 0..15 {
            engine.handle_event(press(KeyCode::D));
        }
        engine.tick();
        engine.render(&mut surface);
        for _ in 0..15 {
            engine.handle_event(press(KeyCode::A));
        }
        engine.tick();
        engine.render(&mut surface);

        assert_eq!(
            surface.0,
            vec![
                Hue::SEPARATED,
                Hue::SEPARATED,
                Hue::COLLIDING,
                Hue::COLLIDING,
                Hue::SEPARATED,
                Hue::SEPARATED,
            ]
        );
    }

    #[test]
    fn test_released_keys_do_nothing() {
        let mut engine = Engine::new(&ApplicationConfig::default()).unwrap();
        let before = engine.state.obb.translation;
        engine.handle_event(InputEvent::Key { key: KeyCode::D, action: KeyAction::Release });
        engine.handle_event(InputEvent::Key { key: KeyCode::Space, action: KeyAction::Release });
        assert_eq!(engine.state.obb.translation, before);
        assert_eq!(engine.state.selection(), Selection::Obb);

        // Auto-repeat keeps moving and keeps toggling.
        engine.handle_event(InputEvent::Key { key: KeyCode::D, action: KeyAction::Repeat });
        engine.handle_event(InputEvent::Key { key: KeyCode::Space, action: KeyAction::Repeat });
        assert!(engine.state.obb.translation.x > before.x);
        assert_eq!(engine.state.selection(), Selection::Point);
    }

    #[test]
    fn test_scene_from_toml_starts_colliding() {
        let config: ApplicationConfig = toml::from_str(
            r#"
            [scene]
            box_position = [0.0, 0.0, 0.0]
            point_position = [0.0, 0.07, 0.0]
            initial_selection = "point"
            "#,
        )
        .unwrap();
        assert_eq!(config.scene.box_scale, SceneConfig::default().box_scale);

        let mut engine = Engine::new(&config).unwrap();
        assert_eq!(engine.state.selection(), Selection::Point);
        assert!(engine.state.is_colliding());

        // Box spans y in [-0.1, 0.1]; the second step up crosses the top face.
        engine.handle_event(press(KeyCode::W));
        assert!(engine.tick());
        engine.handle_event(press(KeyCode::W));
        assert!(!engine.tick());
    }
}
