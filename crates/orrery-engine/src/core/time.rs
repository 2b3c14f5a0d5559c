/// Per-frame timing handed to the game each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick (0 on the first tick).
    pub delta: f64,
    /// Monotonic host time of this tick, in seconds.
    pub now: f64,
    /// Number of ticks run so far, including this one.
    pub frame: u64,
}

/// Variable-delta frame clock.
///
/// Fed with the host's monotonic timestamp (the `requestAnimationFrame`
/// timestamp or `performance.now()`), it reports the time elapsed since the
/// previous tick. The first tick has no prior timestamp and reports 0, and a
/// timestamp that goes backwards or is not finite also reports 0.
pub struct FrameClock {
    last: Option<f64>,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None, frame: 0 }
    }

    /// Advance to `now_seconds` and return the frame timing.
    pub fn tick(&mut self, now_seconds: f64) -> FrameTime {
        self.frame += 1;
        if !now_seconds.is_finite() {
            let now = self.last.unwrap_or(0.0);
            return FrameTime { delta: 0.0, now, frame: self.frame };
        }
        let delta = match self.last {
            Some(last) if now_seconds > last => now_seconds - last,
            _ => 0.0,
        };
        // Never step the stored time backwards so later deltas stay monotonic.
        let now = self.last.map_or(now_seconds, |last| last.max(now_seconds));
        self.last = Some(now);
        FrameTime { delta, now, frame: self.frame }
    }

    /// Timestamp of the most recent tick, if any.
    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
