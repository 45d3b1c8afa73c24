/// Outcome of feeding one scheduler timestamp through a gate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Tick {
    /// Elapsed time was under the minimum interval; nothing should render.
    Skipped,
    /// The frame was accepted. `delta` is the damped elapsed time.
    Accepted { delta: f64 },
}

/// Damping factor applied to the elapsed time of an accepted frame.
const DELTA_DAMPING: f64 = 0.1;

const TICK_60HZ_MS: f64 = 1000.0 / 60.0;

/// Minimum accepted inter-frame interval in milliseconds for a target rate.
///
/// Leaves half a 60 Hz tick of slack below the ideal interval so scheduler
/// jitter does not systematically drop frames. At the default 120 fps target
/// the slack swallows the whole interval and every tick is accepted.
#[inline]
pub fn minimum_frametime_ms(framerate: f32) -> f64 {
    TICK_60HZ_MS * (60.0 / framerate as f64) - TICK_60HZ_MS * 0.5
}

/// Minimum-elapsed-time gate throttling a render loop to a target rate.
///
/// The gate records the timestamp of the last accepted frame and a frame
/// counter. It has no terminal state; the host re-arms the next tick on
/// every path, accepted or skipped.
#[derive(Debug, Clone)]
pub struct FrameGate {
    minimum_frametime: f64,
    previous_frametime: f64,
    frames: u64,
}

impl FrameGate {
    /// Creates a gate for the given target frame rate.
    pub fn new(framerate: f32) -> Self {
        Self {
            minimum_frametime: minimum_frametime_ms(framerate),
            previous_frametime: 0.0,
            frames: 0,
        }
    }

    /// Minimum accepted inter-frame interval in milliseconds.
    #[inline]
    pub fn minimum_frametime(&self) -> f64 {
        self.minimum_frametime
    }

    /// Timestamp of the last accepted frame.
    #[inline]
    pub fn previous_frametime(&self) -> f64 {
        self.previous_frametime
    }

    /// Number of accepted frames so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Feeds one monotonic millisecond timestamp through the gate.
    ///
    /// A skipped tick leaves all gate state untouched.
    pub fn tick(&mut self, frametime_ms: f64) -> Tick {
        let elapsed = frametime_ms - self.previous_frametime;
        if elapsed < self.minimum_frametime {
            return Tick::Skipped;
        }

        self.previous_frametime = frametime_ms;
        self.frames += 1;

        Tick::Accepted { delta: elapsed * DELTA_DAMPING }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_formula_leaves_half_a_tick_of_slack() {
        // 60 fps: ideal interval 16.67 ms, minus 8.33 ms slack.
        let min = minimum_frametime_ms(60.0);
        assert!((min - 1000.0 / 120.0).abs() < 1e-9);

        // The 120 fps default degenerates to zero: accept everything.
        assert!(minimum_frametime_ms(120.0).abs() < 1e-9);
    }

    #[test]
    fn close_ticks_are_skipped_without_state_change() {
        let mut gate = FrameGate::new(60.0);

        assert!(matches!(gate.tick(100.0), Tick::Accepted { .. }));
        assert_eq!(gate.previous_frametime(), 100.0);
        assert_eq!(gate.frames(), 1);

        // 5 ms later: under the ~8.3 ms minimum, so a no-op.
        assert_eq!(gate.tick(105.0), Tick::Skipped);
        assert_eq!(gate.previous_frametime(), 100.0);
        assert_eq!(gate.frames(), 1);

        // The gate stays usable after a skip.
        assert!(matches!(gate.tick(110.0), Tick::Accepted { .. }));
        assert_eq!(gate.frames(), 2);
    }

    #[test]
    fn accepted_delta_is_damped_elapsed_time() {
        let mut gate = FrameGate::new(60.0);
        let Tick::Accepted { delta } = gate.tick(100.0) else {
            panic!("first tick should be accepted");
        };
        assert!((delta - 10.0).abs() < 1e-9);
    }
}
