//! # Point OBB
//!
//! Interactive point versus oriented-bounding-box collision demo.
//!
//! ## Features
//!
//! - **Collision Test**: Point containment by projection onto the box's local axes
//! - **Scene Transforms**: World-space moves and world-axis drag rotation
//! - **Input Mapping**: Platform-neutral key, mouse and cursor events
//! - **Render Seam**: Camera, meshes and collision highlight for any draw target
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use point_obb::prelude::*;
//!
//! struct Headless;
//!
//! impl EventSource for Headless {
//!     fn poll_events(&mut self, _events: &mut Vec<InputEvent>) {}
//!     fn should_close(&self) -> bool { true }
//! }
//!
//! impl RenderSurface for Headless {
//!     fn draw(&mut self, _mesh: &Mesh, _mvp: &Mat4, _hue: Hue) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     let mut engine = Engine::new(&config)?;
//!     engine.run(&mut Headless);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;

pub mod config;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;

mod engine;

#[cfg(test)]
mod tests;

pub use engine::{Engine, EngineError, EventSource, Platform};

/// Common imports for demo users
pub mod prelude {
    pub use crate::{
        Engine, EngineError, EventSource, Platform,
        core::config::{ApplicationConfig, Config, ConfigError},
        foundation::{
            math::{Mat3, Mat4, Vec3},
            time::Timer,
        },
        input::{Command, InputEvent, InputManager, KeyAction, KeyCode, MouseButton},
        physics::{test_collision, ObbCollider, WorldSpaceObb},
        render::{Camera, Hue, Mesh, RenderSurface, SceneRenderer},
        scene::{SceneTransform, Selection, SimulationState},
    };
}
