//! Framework-agnostic kinematic-chain simulation core.
//!
//! Pure Rust library with no engine dependencies. Models a serial chain of
//! actuator components (piston, hinge, swivel, rigid link) advanced at
//! bounded rates each tick, with a single forward pass producing render
//! poses, tip position, and tip velocity by rigid-body superposition.
//!
//! # Quick Start
//!
//! ```
//! use armsim_chain::prelude::*;
//!
//! let mut sim = Simulation::new();
//! sim.add_hinge();
//! sim.add_link(2.0);
//! sim.set_hinge_target_angle(0, 1.0).unwrap();
//!
//! sim.tick(0.016);
//! let data = sim.render_data();
//! assert_eq!(data.instances.len(), 2);
//! ```

pub mod component;
pub mod error;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::component::{Component, ComponentKind, Hinge, Link, Piston, PoseUpdate, Swivel};
    pub use crate::error::ChainError;
    pub use crate::simulation::{RenderData, RenderInstance, Simulation};
}
