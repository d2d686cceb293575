//! Actuator components for the kinematic chain.
//!
//! Four component kinds are provided:
//! - [`Piston`]: prismatic actuator extending along its local +Y axis.
//! - [`Hinge`]: revolute actuator rotating about its local Z axis.
//! - [`Swivel`]: velocity-controlled revolute actuator about local Y.
//! - [`Link`]: rigid segment with no actuation.
//!
//! [`Component`] is a dispatch enum wrapping all four.
//!
//! Every component consumes the accumulated upstream frame and produces a
//! visual model matrix plus the frame handed to the next component in the
//! chain (see [`PoseUpdate`]).

use nalgebra::{Isometry3, Matrix4, Translation3, UnitQuaternion, Vector3};

// ---------------------------------------------------------------------------
// PoseUpdate
// ---------------------------------------------------------------------------

/// Output of a component's forward-kinematics step.
#[derive(Clone, Debug)]
pub struct PoseUpdate {
    /// World-space model matrix (translation, rotation, scale) for drawing
    /// this component.
    pub model: Matrix4<f32>,
    /// Rigid frame at which the next component attaches.
    pub next_frame: Isometry3<f32>,
}

/// Pose rule shared by [`Piston`] and [`Link`]: a box stretched to `length`
/// along the frame's +Y axis.
fn extruded_pose(frame: &Isometry3<f32>, length: f32, thickness: f32) -> PoseUpdate {
    // Translate by half the length since the scale stretches the unit box in
    // both directions.
    let centered = frame * Translation3::new(0.0, length / 2.0, 0.0);
    let model = centered.to_homogeneous()
        * Matrix4::new_nonuniform_scaling(&Vector3::new(thickness, length, thickness));
    // Next component attaches at the top of the stretched segment.
    let next_frame = frame * Translation3::new(0.0, length, 0.0);
    PoseUpdate { model, next_frame }
}

// ---------------------------------------------------------------------------
// Piston
// ---------------------------------------------------------------------------

/// Prismatic actuator extending along its local +Y axis.
///
/// `tick` moves `current_length` toward `target_length` at bounded rate,
/// then clamps into `[MIN_LENGTH, max_length]`. The clamp is defensive:
/// it holds even when a caller commands a target outside the limits.
#[derive(Clone, Debug, PartialEq)]
pub struct Piston {
    /// Current extension (units). Always in `[MIN_LENGTH, max_length]`.
    pub current_length: f32,
    /// Commanded extension (units).
    pub target_length: f32,
    /// Upper extension limit (units).
    pub max_length: f32,
}

impl Piston {
    /// Extension rate (units/s).
    pub const SPEED: f32 = 1.0;
    /// Hard lower bound on extension; a retracted piston keeps drawable
    /// extent and the visual scale never degenerates.
    pub const MIN_LENGTH: f32 = 0.1;
    /// Visual x/z scale of the piston body.
    pub const THICKNESS: f32 = 0.3;

    /// Create a fully retracted piston. `max_length` is raised to at least
    /// [`MIN_LENGTH`](Self::MIN_LENGTH) so the length interval is never empty.
    pub fn new(max_length: f32) -> Self {
        Self {
            current_length: Self::MIN_LENGTH,
            target_length: Self::MIN_LENGTH,
            max_length: max_length.max(Self::MIN_LENGTH),
        }
    }

    /// Builder: set the commanded extension.
    #[must_use]
    pub const fn with_target_length(mut self, target: f32) -> Self {
        self.target_length = target;
        self
    }

    /// Advance extension by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let delta = self.target_length - self.current_length;
        if delta != 0.0 {
            let max_step = Self::SPEED * dt;
            self.current_length += delta.clamp(-max_step, max_step);
        }
        self.current_length = self.current_length.clamp(Self::MIN_LENGTH, self.max_length);
    }

    /// Forward-kinematics step. Extension translates everything downstream;
    /// there is no rotation effect.
    pub fn model_matrix(&self, frame: &Isometry3<f32>) -> PoseUpdate {
        extruded_pose(frame, self.current_length, Self::THICKNESS)
    }
}

// ---------------------------------------------------------------------------
// Hinge
// ---------------------------------------------------------------------------

/// Revolute actuator rotating about its local Z axis.
///
/// The angle domain is unbounded; `tick` approaches `target_angle` at
/// [`ROTATION_SPEED`](Self::ROTATION_SPEED) without overshooting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hinge {
    /// Current rotation (rad).
    pub current_angle: f32,
    /// Commanded rotation (rad).
    pub target_angle: f32,
}

impl Hinge {
    /// Approach rate (rad/s).
    pub const ROTATION_SPEED: f32 = std::f32::consts::FRAC_PI_2;

    /// Create a hinge at rest at angle zero.
    pub const fn new() -> Self {
        Self {
            current_angle: 0.0,
            target_angle: 0.0,
        }
    }

    /// Builder: set the commanded angle (rad).
    #[must_use]
    pub const fn with_target_angle(mut self, target: f32) -> Self {
        self.target_angle = target;
        self
    }

    /// Advance the angle by `dt` seconds, never past the target.
    pub fn tick(&mut self, dt: f32) {
        let delta = self.target_angle - self.current_angle;
        if delta == 0.0 {
            return;
        }
        let max_step = Self::ROTATION_SPEED * dt;
        self.current_angle += delta.clamp(-max_step, max_step);
    }

    /// Forward-kinematics step. The rotation affects everything downstream;
    /// a hinge has no extent of its own, so the rotated frame is both the
    /// visual pose and the propagated frame.
    pub fn model_matrix(&self, frame: &Isometry3<f32>) -> PoseUpdate {
        let rotated =
            frame * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.current_angle);
        PoseUpdate {
            model: rotated.to_homogeneous(),
            next_frame: rotated,
        }
    }
}

// ---------------------------------------------------------------------------
// Swivel
// ---------------------------------------------------------------------------

/// Velocity-controlled revolute actuator spinning about its local Y axis.
///
/// Unlike [`Hinge`] there is no target: the caller sets `rotational_speed`
/// directly and the swivel spins continuously. `tick` keeps the angle in
/// `[0, 2π)` for either spin direction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Swivel {
    /// Current rotation (rad), kept in `[0, 2π)`.
    pub angle: f32,
    /// Spin rate (rad/s), signed.
    pub rotational_speed: f32,
}

impl Swivel {
    /// Visual scale of the swivel cap.
    pub const CAP_SCALE: [f32; 3] = [0.35, 0.3, 0.35];
    /// +Y offset from the attachment point to the spin point.
    pub const FRAME_OFFSET: f32 = 0.15;

    /// Create a stationary swivel at angle zero.
    pub const fn new() -> Self {
        Self {
            angle: 0.0,
            rotational_speed: 0.0,
        }
    }

    /// Builder: set the spin rate (rad/s).
    #[must_use]
    pub const fn with_rotational_speed(mut self, speed: f32) -> Self {
        self.rotational_speed = speed;
        self
    }

    /// Advance the spin by `dt` seconds, wrapping into `[0, 2π)`.
    pub fn tick(&mut self, dt: f32) {
        self.angle = (self.angle + self.rotational_speed * dt).rem_euclid(std::f32::consts::TAU);
    }

    /// Forward-kinematics step. The cap is drawn at the attachment point;
    /// the propagated frame moves to the spin point and rotates about local Y.
    pub fn model_matrix(&self, frame: &Isometry3<f32>) -> PoseUpdate {
        let [sx, sy, sz] = Self::CAP_SCALE;
        let model =
            frame.to_homogeneous() * Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz));
        let next_frame = frame
            * Translation3::new(0.0, Self::FRAME_OFFSET, 0.0)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.angle);
        PoseUpdate { model, next_frame }
    }
}

// ---------------------------------------------------------------------------
// Link
// ---------------------------------------------------------------------------

/// Rigid segment with no actuation. Length is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    length: f32,
}

impl Link {
    /// Visual x/z scale of the link body.
    pub const THICKNESS: f32 = 0.3;

    /// Create a rigid link of the given length (units).
    pub const fn new(length: f32) -> Self {
        Self { length }
    }

    /// Fixed length (units).
    pub const fn length(&self) -> f32 {
        self.length
    }

    /// No actuation: nothing to advance.
    pub const fn tick(&mut self, _dt: f32) {}

    /// Forward-kinematics step, identical to [`Piston`]'s pose rule with the
    /// constant length.
    pub fn model_matrix(&self, frame: &Isometry3<f32>) -> PoseUpdate {
        extruded_pose(frame, self.length, Self::THICKNESS)
    }
}

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// Fieldless tag identifying a component variant.
///
/// Used to label render output positionally and in error diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Piston,
    Hinge,
    Swivel,
    Link,
}

impl ComponentKind {
    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Piston => "piston",
            Self::Hinge => "hinge",
            Self::Swivel => "swivel",
            Self::Link => "link",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Component enum (static dispatch)
// ---------------------------------------------------------------------------

/// Dispatch enum over the closed set of component kinds.
///
/// The kind set is fixed, so exhaustive matching is preferred over trait
/// objects: no vtable, and adding a variant is a compile error everywhere it
/// matters.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    /// Prismatic actuator.
    Piston(Piston),
    /// Rate-limited revolute actuator.
    Hinge(Hinge),
    /// Velocity-controlled revolute actuator.
    Swivel(Swivel),
    /// Rigid segment.
    Link(Link),
}

impl Component {
    /// Advance this component's local state by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        match self {
            Self::Piston(p) => p.tick(dt),
            Self::Hinge(h) => h.tick(dt),
            Self::Swivel(s) => s.tick(dt),
            Self::Link(l) => l.tick(dt),
        }
    }

    /// Forward-kinematics step: visual pose plus the frame handed to the
    /// next component.
    pub fn model_matrix(&self, frame: &Isometry3<f32>) -> PoseUpdate {
        match self {
            Self::Piston(p) => p.model_matrix(frame),
            Self::Hinge(h) => h.model_matrix(frame),
            Self::Swivel(s) => s.model_matrix(frame),
            Self::Link(l) => l.model_matrix(frame),
        }
    }

    /// Tag for this variant.
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Piston(_) => ComponentKind::Piston,
            Self::Hinge(_) => ComponentKind::Hinge,
            Self::Swivel(_) => ComponentKind::Swivel,
            Self::Link(_) => ComponentKind::Link,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
