//! Chain builder for constructing a configured [`Simulation`].
//!
//! [`ChainBuilder`] provides a fluent API and a [`SimConfig`] loader for
//! composing a chain base-to-tip, applying any initial commands carried by
//! the component specs.
//!
//! # Example
//!
//! ```
//! use armsim_sim::ChainBuilder;
//!
//! let sim = ChainBuilder::new()
//!     .with_hinge()
//!     .with_link(2.0)
//!     .build();
//! assert_eq!(sim.len(), 2);
//! ```

use tracing::debug;

use armsim_chain::component::{Component, Hinge, Link, Piston, Swivel};
use armsim_chain::simulation::Simulation;
use armsim_core::config::{ComponentSpec, SimConfig};

// ---------------------------------------------------------------------------
// ChainBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a [`Simulation`] chain.
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    specs: Vec<ComponentSpec>,
}

impl ChainBuilder {
    /// Create an empty builder.
    pub const fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Seed the builder from a configuration's chain description.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            specs: config.chain.clone(),
        }
    }

    /// Append a piston with the given extension limit.
    #[must_use]
    pub fn with_piston(mut self, max_length: f32) -> Self {
        self.specs.push(ComponentSpec::Piston {
            max_length,
            target_length: None,
        });
        self
    }

    /// Append a hinge at rest.
    #[must_use]
    pub fn with_hinge(mut self) -> Self {
        self.specs.push(ComponentSpec::Hinge { target_angle: None });
        self
    }

    /// Append a stationary swivel.
    #[must_use]
    pub fn with_swivel(mut self) -> Self {
        self.specs.push(ComponentSpec::Swivel {
            rotational_speed: None,
        });
        self
    }

    /// Append a rigid link of the given length.
    #[must_use]
    pub fn with_link(mut self, length: f32) -> Self {
        self.specs.push(ComponentSpec::Link { length });
        self
    }

    /// Append an arbitrary component spec (including initial commands).
    #[must_use]
    pub fn with_spec(mut self, spec: ComponentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Build the simulation, applying initial commands from the specs.
    #[must_use]
    pub fn build(self) -> Simulation {
        let components = self.specs.into_iter().map(build_component).collect();
        let sim = Simulation::from_components(components);
        debug!("built chain with {} component(s)", sim.len());
        sim
    }
}

fn build_component(spec: ComponentSpec) -> Component {
    match spec {
        ComponentSpec::Piston {
            max_length,
            target_length,
        } => {
            let piston = Piston::new(max_length);
            Component::Piston(match target_length {
                Some(target) => piston.with_target_length(target),
                None => piston,
            })
        }
        ComponentSpec::Hinge { target_angle } => {
            let hinge = Hinge::new();
            Component::Hinge(match target_angle {
                Some(target) => hinge.with_target_angle(target),
                None => hinge,
            })
        }
        ComponentSpec::Swivel { rotational_speed } => {
            let swivel = Swivel::new();
            Component::Swivel(match rotational_speed {
                Some(speed) => swivel.with_rotational_speed(speed),
                None => swivel,
            })
        }
        ComponentSpec::Link { length } => Component::Link(Link::new(length)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
