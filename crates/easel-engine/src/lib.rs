//! Easel engine crate.
//!
//! A small 2D canvas animation sandbox: a scene stack of drawable shapes, a
//! frame-gated render loop, and a couple of built-in pointer interactions.
//! Hosts plug in behind the `canvas`, `input`, and scheduler-timestamp
//! boundaries.

pub mod canvas;
pub mod coords;
pub mod core;
pub mod demos;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;
pub mod time;
