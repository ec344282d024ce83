//! Narrow-phase collision tests
//!
//! Shapes are stored in model space and transformed to world space only
//! while a test runs.
//!
//! - [`obb`] - point versus oriented bounding box

pub mod obb;

pub use obb::{first_separating_axis, test_collision, Axis, ObbCollider, WorldSpaceObb};
