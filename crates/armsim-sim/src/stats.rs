//! Cumulative run statistics.

use armsim_chain::simulation::RenderData;

// ---------------------------------------------------------------------------
// SimStats
// ---------------------------------------------------------------------------

/// Tracks cumulative statistics across frames.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Total frames stepped.
    pub frames: u64,
    /// Total simulated seconds.
    pub sim_time: f64,
    /// Largest tip speed observed (units/s).
    pub peak_tip_speed: f32,
    /// Tip speed of the most recent frame (units/s).
    pub last_tip_speed: f32,
}

impl SimStats {
    /// Create empty stats.
    pub const fn new() -> Self {
        Self {
            frames: 0,
            sim_time: 0.0,
            peak_tip_speed: 0.0,
            last_tip_speed: 0.0,
        }
    }

    /// Record one stepped frame.
    pub fn record(&mut self, dt: f32, data: &RenderData) {
        self.frames += 1;
        self.sim_time += f64::from(dt);
        self.last_tip_speed = data.tip_vel.norm();
        if self.last_tip_speed > self.peak_tip_speed {
            self.peak_tip_speed = self.last_tip_speed;
        }
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
