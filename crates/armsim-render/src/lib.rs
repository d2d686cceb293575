//! Render-batch aggregation for instanced drawing.
//!
//! [`RenderQueue`] collects `(mesh, instance)` draw commands over a frame and
//! returns them grouped by mesh, so a renderer can issue one instanced draw
//! call per mesh instead of one call per object.

pub mod queue;

pub use queue::{InstanceData, MeshId, RenderCommand, RenderQueue};
