//! Frame timing.
//!
//! One [`FrameGate`] per render loop; feed it host-scheduler timestamps and
//! it decides whether the frame is rendered or skipped.

mod frame_gate;

pub use frame_gate::{FrameGate, Tick, minimum_frametime_ms};
