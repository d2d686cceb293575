//! Composition layer for armsim.
//!
//! Builds a configured [`Simulation`](armsim_chain::simulation::Simulation)
//! from a chain description, drives the per-frame
//! tick → forward pass → render-queue cycle, and tracks run statistics.
//!
//! # Usage
//!
//! ```
//! use armsim_sim::{ChainBuilder, FrameRunner};
//!
//! let sim = ChainBuilder::new().with_hinge().with_link(2.0).build();
//! let mut runner = FrameRunner::new(sim);
//! let data = runner.step(1.0 / 60.0);
//! let batches = runner.batches();
//! assert!(!batches.is_empty());
//! assert_eq!(data.instances.len(), 2);
//! ```

pub mod builder;
pub mod runner;
pub mod scene;
pub mod stats;

pub use builder::ChainBuilder;
pub use runner::FrameRunner;
pub use stats::SimStats;
