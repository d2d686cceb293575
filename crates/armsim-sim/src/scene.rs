//! Mapping from chain output to render commands.
//!
//! Resolves each component kind to a mesh and color and feeds the per-frame
//! poses into a [`RenderQueue`]. This is the whole seam between the
//! simulation and a renderer; no GPU state lives here.

use armsim_chain::component::ComponentKind;
use armsim_chain::simulation::RenderData;
use armsim_render::{InstanceData, MeshId, RenderCommand, RenderQueue};

/// Mesh used to draw a component kind.
pub const fn mesh_for(kind: ComponentKind) -> MeshId {
    match kind {
        ComponentKind::Piston => MeshId::Cube,
        ComponentKind::Link => MeshId::Cube,
        ComponentKind::Hinge => MeshId::Sphere,
        ComponentKind::Swivel => MeshId::Cylinder,
    }
}

/// Color used to draw a component kind (gruvbox palette).
pub const fn color_for(kind: ComponentKind) -> [f32; 3] {
    match kind {
        ComponentKind::Piston => [142.0 / 255.0, 192.0 / 255.0, 124.0 / 255.0], // green
        ComponentKind::Link => [168.0 / 255.0, 153.0 / 255.0, 132.0 / 255.0],   // gray
        ComponentKind::Hinge => [215.0 / 255.0, 153.0 / 255.0, 33.0 / 255.0],   // yellow
        ComponentKind::Swivel => [204.0 / 255.0, 36.0 / 255.0, 29.0 / 255.0],   // red
    }
}

/// Submit one frame's poses into the queue.
pub fn submit_render_data(data: &RenderData, queue: &mut RenderQueue) {
    for instance in &data.instances {
        queue.submit(RenderCommand {
            mesh_id: mesh_for(instance.kind),
            instance: InstanceData {
                model: instance.model,
                color: color_for(instance.kind),
            },
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
