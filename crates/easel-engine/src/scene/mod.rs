//! Scene (shape stack) types.
//!
//! Responsibilities:
//! - store drawable shapes behind stable ids
//! - deterministic ordering (insertion order = render order, back-to-front)
//! - keep shape-specific code isolated per file under `scene::shapes`

mod id;
mod stack;

pub mod shapes;

pub use id::ShapeId;
pub use shapes::{Shape, ShapeKind};
pub use stack::SceneStack;
