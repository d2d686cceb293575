//! Per-frame driver tying the chain, the queue, and stats together.
//!
//! One [`step`](FrameRunner::step) performs the full frame cycle the host
//! loop expects: advance actuators, run the forward pass, refill the render
//! queue, record stats. The host then drains [`batches`](FrameRunner::batches)
//! to issue its draws.

use armsim_chain::simulation::{RenderData, Simulation};
use armsim_render::{InstanceData, MeshId, RenderQueue};

use crate::scene::submit_render_data;
use crate::stats::SimStats;

// ---------------------------------------------------------------------------
// FrameRunner
// ---------------------------------------------------------------------------

/// Owns a [`Simulation`] plus its per-frame render queue and stats.
///
/// Mutate the chain between frames through
/// [`simulation_mut`](Self::simulation_mut); never during a step.
#[derive(Debug, Clone, Default)]
pub struct FrameRunner {
    simulation: Simulation,
    queue: RenderQueue,
    stats: SimStats,
}

impl FrameRunner {
    /// Wrap an already-built simulation.
    pub const fn new(simulation: Simulation) -> Self {
        Self {
            simulation,
            queue: RenderQueue::new(),
            stats: SimStats::new(),
        }
    }

    /// The simulated chain.
    pub const fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Mutable access for between-frame chain mutation.
    pub const fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    /// Cumulative run statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Run one frame: tick, forward pass, queue refill, stats.
    ///
    /// Returns the frame's [`RenderData`] for consumers that read the tip
    /// state directly (telemetry, velocity overlays).
    pub fn step(&mut self, dt: f32) -> RenderData {
        self.simulation.tick(dt);
        let data = self.simulation.render_data();
        // Previous frame's commands were drained by now; start clean.
        self.queue.clear();
        submit_render_data(&data, &mut self.queue);
        self.stats.record(dt, &data);
        data
    }

    /// Current frame's draw commands, grouped by mesh.
    pub fn batches(&mut self) -> Vec<(MeshId, Vec<InstanceData>)> {
        self.queue.meshes_batched()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
