//! Physics module for collision detection

pub mod collision;

pub use collision::{test_collision, Axis, ObbCollider, WorldSpaceObb};
