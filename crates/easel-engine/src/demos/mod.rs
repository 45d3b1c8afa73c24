//! Built-in interaction demos.
//!
//! Each demo is an [`Interaction`](crate::core::Interaction) installed on
//! the application context, usually through the
//! [`experiments`](crate::core::Sandbox::experiments) registry.

mod click_lerp;
mod pointer_trail;

pub use click_lerp::ClickLerp;
pub use pointer_trail::{PointerTrail, TRAIL_CAP};
