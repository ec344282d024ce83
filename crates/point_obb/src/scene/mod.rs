//! Scene model
//!
//! The two movable entities, the selection that decides which one input
//! edits, and the per-tick simulation state that ties them together.

pub mod selection;
pub mod state;
pub mod transform;

pub use selection::Selection;
pub use state::SimulationState;
pub use transform::SceneTransform;
