use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// FrameClock
// ---------------------------------------------------------------------------

/// Converts wall-clock samples into per-frame `dt` seconds for the host's
/// periodic (~60 Hz) callback.
///
/// The first sample yields `0.0`; each later sample yields the elapsed time
/// since the previous one, capped at `max_dt` so a stalled frame (debugger
/// pause, window drag) cannot teleport actuators across one giant step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_dt: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Default cap on a single frame delta.
    pub const DEFAULT_MAX_DT: Duration = Duration::from_millis(250);

    /// Create an unstarted clock with the default cap.
    pub const fn new() -> Self {
        Self {
            last: None,
            max_dt: Self::DEFAULT_MAX_DT,
        }
    }

    /// Set the cap on a single frame delta.
    #[must_use]
    pub const fn with_max_dt(mut self, max_dt: Duration) -> Self {
        self.max_dt = max_dt;
        self
    }

    /// The cap on a single frame delta.
    pub const fn max_dt(&self) -> Duration {
        self.max_dt
    }

    /// Sample the wall clock and return the frame delta in seconds.
    pub fn tick(&mut self) -> f32 {
        self.dt_at(Instant::now())
    }

    /// Frame delta for an externally supplied sample time.
    ///
    /// Out-of-order samples yield `0.0` rather than negative deltas.
    pub fn dt_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            None => Duration::ZERO,
            Some(last) => now.saturating_duration_since(last).min(self.max_dt),
        };
        self.last = Some(now);
        dt.as_secs_f32()
    }

    /// Forget the previous sample; the next sample yields `0.0` again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
