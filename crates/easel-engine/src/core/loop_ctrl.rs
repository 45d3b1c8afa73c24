use crate::canvas::Canvas2d;
use crate::time::{FrameGate, Tick};

use super::ctx::Sandbox;

/// Outcome of one scheduler tick, reported back to the host.
///
/// The host must re-arm the next tick on every path; a skipped tick is a
/// throttling decision, not a stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickOutcome {
    Skipped,
    Rendered { delta: f64 },
}

/// Frame-gated update driver.
///
/// Owns the gate state for one loop. The host scheduler calls [`on_tick`]
/// with monotonic millisecond timestamps; accepted ticks refresh the
/// surface.
///
/// [`on_tick`]: LoopController::on_tick
#[derive(Debug)]
pub struct LoopController {
    gate: FrameGate,
}

impl LoopController {
    pub fn new(framerate: f32) -> Self {
        Self {
            gate: FrameGate::new(framerate),
        }
    }

    /// Gate state for inspection (frame counter, last accepted timestamp).
    #[inline]
    pub fn gate(&self) -> &FrameGate {
        &self.gate
    }

    pub fn on_tick<C: Canvas2d>(
        &mut self,
        frametime_ms: f64,
        sandbox: &mut Sandbox<C>,
    ) -> TickOutcome {
        match self.gate.tick(frametime_ms) {
            Tick::Skipped => TickOutcome::Skipped,
            Tick::Accepted { delta } => {
                sandbox.surface_mut().refresh();
                log::trace!("frame {} rendered, delta {delta:.3}", self.gate.frames());
                TickOutcome::Rendered { delta }
            }
        }
    }
}
