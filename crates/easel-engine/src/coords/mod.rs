//! Coordinate types shared across the sandbox.
//!
//! Canonical space:
//! - Canvas pixels
//! - Origin top-left
//! - +X right, +Y down

mod vec2;

pub use vec2::Vec2;
