//! Serial-chain simulation: tick, forward kinematics, and tip velocity.
//!
//! [`Simulation`] owns an ordered chain of [`Component`]s from a fixed base
//! (identity frame) to a free tip. Order is attachment order and is
//! semantically load-bearing: reordering changes both the geometry and the
//! tip velocity.
//!
//! [`render_data`](Simulation::render_data) performs one forward pass that
//! produces the per-component render poses and, interleaved with it, the
//! instantaneous tip linear velocity by rigid-body superposition: a prismatic
//! joint in motion contributes its extension rate along its world-space axis
//! directly, while each revolute joint in motion contributes `ω × (tip −
//! pivot)` once the tip position is known. This is the geometric-Jacobian
//! column sum for a serial chain, computed without retaining a Jacobian
//! matrix.

use nalgebra::{Isometry3, Matrix4, Translation3, Vector3};

use crate::component::{Component, ComponentKind, Hinge, Link, Piston, PoseUpdate, Swivel};
use crate::error::ChainError;

// ---------------------------------------------------------------------------
// RenderData
// ---------------------------------------------------------------------------

/// One drawable pose produced by the forward pass.
#[derive(Clone, Debug)]
pub struct RenderInstance {
    /// Component kind, resolved to a mesh and color by the renderer.
    pub kind: ComponentKind,
    /// World-space model matrix.
    pub model: Matrix4<f32>,
}

/// Per-frame output of the forward pass.
#[derive(Clone, Debug)]
pub struct RenderData {
    /// Ordered drawable poses, one per chain component.
    pub instances: Vec<RenderInstance>,
    /// World position of the chain's free end.
    pub tip_pos: Vector3<f32>,
    /// World linear velocity of the chain's free end.
    pub tip_vel: Vector3<f32>,
}

/// A revolute joint in motion, recorded during the forward pass.
///
/// Its contribution cannot be applied until the pass completes because the
/// tip position is not final until then.
struct AngularRate {
    /// World position of the rotation point.
    pivot: Vector3<f32>,
    /// World-space rotation axis (unit).
    axis: Vector3<f32>,
    /// Signed angular rate (rad/s).
    rate: f32,
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// An ordered serial chain of actuator components.
///
/// Strictly single-threaded: one `tick(dt)` followed by one `render_data()`
/// per frame, with mutators invoked between frames. The chain is exclusively
/// owned; no locking exists and none is needed under that discipline.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    components: Vec<Component>,
}

impl Simulation {
    /// Create an empty chain.
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Create a chain from pre-built components, base to tip.
    pub fn from_components(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Number of components in the chain.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in chain order, base to tip.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Kind tags in chain order, for positional labeling by a UI layer.
    pub fn component_kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(Component::kind).collect()
    }

    // -- Constructors (append to the tip with safe defaults) --

    /// Append a pre-built component at the tip.
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Append a fully retracted piston with the given extension limit.
    pub fn add_piston(&mut self, max_length: f32) {
        self.components.push(Component::Piston(Piston::new(max_length)));
    }

    /// Append a hinge at rest at angle zero.
    pub fn add_hinge(&mut self) {
        self.components.push(Component::Hinge(Hinge::new()));
    }

    /// Append a stationary swivel.
    pub fn add_swivel(&mut self) {
        self.components.push(Component::Swivel(Swivel::new()));
    }

    /// Append a rigid link of the given length.
    pub fn add_link(&mut self, length: f32) {
        self.components.push(Component::Link(Link::new(length)));
    }

    // -- Mutators (positional index, fail-fast) --

    /// Command the piston at `index` to the given extension.
    ///
    /// # Errors
    ///
    /// [`ChainError::IndexOutOfRange`] or [`ChainError::KindMismatch`] if the
    /// slot does not hold a piston.
    pub fn set_piston_target_length(&mut self, index: usize, target: f32) -> Result<(), ChainError> {
        match self.component_mut(index)? {
            Component::Piston(p) => {
                p.target_length = target;
                Ok(())
            }
            other => Err(ChainError::KindMismatch {
                index,
                expected: ComponentKind::Piston,
                found: other.kind(),
            }),
        }
    }

    /// Command the hinge at `index` to the given angle (rad).
    ///
    /// # Errors
    ///
    /// [`ChainError::IndexOutOfRange`] or [`ChainError::KindMismatch`] if the
    /// slot does not hold a hinge.
    pub fn set_hinge_target_angle(&mut self, index: usize, target: f32) -> Result<(), ChainError> {
        match self.component_mut(index)? {
            Component::Hinge(h) => {
                h.target_angle = target;
                Ok(())
            }
            other => Err(ChainError::KindMismatch {
                index,
                expected: ComponentKind::Hinge,
                found: other.kind(),
            }),
        }
    }

    /// Set the spin rate (rad/s) of the swivel at `index`.
    ///
    /// # Errors
    ///
    /// [`ChainError::IndexOutOfRange`] or [`ChainError::KindMismatch`] if the
    /// slot does not hold a swivel.
    pub fn set_swivel_rotation_speed(&mut self, index: usize, speed: f32) -> Result<(), ChainError> {
        match self.component_mut(index)? {
            Component::Swivel(s) => {
                s.rotational_speed = speed;
                Ok(())
            }
            other => Err(ChainError::KindMismatch {
                index,
                expected: ComponentKind::Swivel,
                found: other.kind(),
            }),
        }
    }

    /// Remove the component at `index`, shifting subsequent indices down by
    /// one. Index is a position, not a stable identity: externally held
    /// indices past `index` are invalidated.
    ///
    /// # Errors
    ///
    /// [`ChainError::IndexOutOfRange`] if `index` is past the end.
    pub fn remove_component(&mut self, index: usize) -> Result<(), ChainError> {
        let len = self.components.len();
        if index >= len {
            return Err(ChainError::IndexOutOfRange { index, len });
        }
        self.components.remove(index);
        Ok(())
    }

    fn component_mut(&mut self, index: usize) -> Result<&mut Component, ChainError> {
        let len = self.components.len();
        self.components
            .get_mut(index)
            .ok_or(ChainError::IndexOutOfRange { index, len })
    }

    // -- Per-frame operations --

    /// Advance every component by `dt` seconds, in chain order.
    ///
    /// Each component's local integrator is independent; coupling happens
    /// only through the forward pass in [`render_data`](Self::render_data).
    pub fn tick(&mut self, dt: f32) {
        for component in &mut self.components {
            component.tick(dt);
        }
    }

    /// One forward pass from the identity frame: drawable poses, tip
    /// position, and tip velocity.
    pub fn render_data(&self) -> RenderData {
        let mut instances = Vec::with_capacity(self.components.len());
        let mut angular: Vec<AngularRate> = Vec::new();
        let mut tip_vel = Vector3::zeros();
        let mut frame = Isometry3::identity();

        for component in &self.components {
            // Motion bookkeeping uses the frame *entering* the component:
            // a joint's own motion never moves its pivot or rotation axis.
            match component {
                Component::Piston(p) => {
                    if p.current_length != p.target_length {
                        // Extension displaces everything downstream
                        // identically, so the contribution is independent of
                        // the remaining chain and can be applied now.
                        let rate = (p.target_length - p.current_length).signum() * Piston::SPEED;
                        tip_vel += frame.rotation * (Vector3::y() * rate);
                    }
                }
                Component::Hinge(h) => {
                    if h.current_angle != h.target_angle {
                        let rate =
                            (h.target_angle - h.current_angle).signum() * Hinge::ROTATION_SPEED;
                        angular.push(AngularRate {
                            pivot: frame.translation.vector,
                            axis: frame.rotation * Vector3::z(),
                            rate,
                        });
                    }
                }
                Component::Swivel(s) => {
                    if s.rotational_speed != 0.0 {
                        let spin_point = frame * Translation3::new(0.0, Swivel::FRAME_OFFSET, 0.0);
                        angular.push(AngularRate {
                            pivot: spin_point.translation.vector,
                            axis: frame.rotation * Vector3::y(),
                            rate: s.rotational_speed,
                        });
                    }
                }
                Component::Link(_) => {}
            }

            let PoseUpdate { model, next_frame } = component.model_matrix(&frame);
            instances.push(RenderInstance {
                kind: component.kind(),
                model,
            });
            frame = next_frame;
        }

        let tip_pos = frame.translation.vector;

        // Rigid-link rule: a revolute joint spinning at ω about an axis
        // through `pivot` induces `ω × (tip − pivot)` at every downstream
        // point.
        for a in &angular {
            tip_vel += (a.axis * a.rate).cross(&(tip_pos - a.pivot));
        }

        RenderData {
            instances,
            tip_pos,
            tip_vel,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
