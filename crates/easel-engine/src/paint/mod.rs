//! Paint model for the sandbox.
//!
//! Scope:
//! - straight-alpha RGBA colors with 8-bit channels
//! - `#RRGGBB` / `#RRGGBBAA` hex literals (parse + display)
//! - random opaque colors for the click-interpolation demo

mod color;

pub use color::{Color, ColorParseError};
