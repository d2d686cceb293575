//! Per-frame render command queue with mesh batching.
//!
//! Draw instances are submitted unordered throughout a frame, then drained
//! grouped by mesh so each group can be issued as one instanced draw call.

use nalgebra::Matrix4;

// ---------------------------------------------------------------------------
// MeshId
// ---------------------------------------------------------------------------

/// Identifier of a registered mesh.
///
/// `Ord` drives the batching sort; the order itself carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshId {
    Cube,
    Sphere,
    Cylinder,
    Arrow,
}

// ---------------------------------------------------------------------------
// InstanceData / RenderCommand
// ---------------------------------------------------------------------------

/// Per-instance payload for an instanced draw.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceData {
    /// World-space model matrix.
    pub model: Matrix4<f32>,
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// A single draw request: a mesh plus one instance of it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCommand {
    pub mesh_id: MeshId,
    pub instance: InstanceData,
}

// ---------------------------------------------------------------------------
// RenderQueue
// ---------------------------------------------------------------------------

/// Accumulates draw commands for one frame and hands them out pre-grouped.
///
/// The contract of [`meshes_batched`](Self::meshes_batched) is membership and
/// completeness: every submitted instance lands in exactly one batch of its
/// mesh, none lost or duplicated. Callers must not rely on batch order or on
/// instance order within a batch.
#[derive(Debug, Clone, Default)]
pub struct RenderQueue {
    commands: Vec<RenderCommand>,
}

impl RenderQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a draw command. No deduplication, O(1) amortized.
    pub fn submit(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the queue holds no pending commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Group all pending commands by mesh.
    ///
    /// Stable-sorts the pending commands by [`MeshId`] and returns one
    /// `(mesh, instances)` entry per distinct mesh. Pending commands stay
    /// queued; call [`clear`](Self::clear) after the consumer has drained
    /// the batches.
    pub fn meshes_batched(&mut self) -> Vec<(MeshId, Vec<InstanceData>)> {
        self.commands.sort_by_key(|cmd| cmd.mesh_id);
        self.commands
            .chunk_by(|a, b| a.mesh_id == b.mesh_id)
            .map(|chunk| {
                (
                    chunk[0].mesh_id,
                    chunk.iter().map(|cmd| cmd.instance.clone()).collect(),
                )
            })
            .collect()
    }

    /// Discard all pending commands. Called once per frame after the
    /// consumer has drained the batches.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(mesh_id: MeshId, tag: f32) -> RenderCommand {
        RenderCommand {
            mesh_id,
            instance: InstanceData {
                model: Matrix4::identity() * tag,
                color: [tag, 0.0, 0.0],
            },
        }
    }

    #[test]
    fn empty_queue_yields_no_batches() {
        let mut queue = RenderQueue::new();
        assert!(queue.is_empty());
        assert!(queue.meshes_batched().is_empty());
    }

    #[test]
    fn batches_are_complete_and_homogeneous() {
        let mut queue = RenderQueue::new();
        // Interleaved submission across three meshes.
        queue.submit(cmd(MeshId::Cube, 1.0));
        queue.submit(cmd(MeshId::Sphere, 2.0));
        queue.submit(cmd(MeshId::Cube, 3.0));
        queue.submit(cmd(MeshId::Cylinder, 4.0));
        queue.submit(cmd(MeshId::Sphere, 5.0));

        let batches = queue.meshes_batched();
        assert_eq!(batches.len(), 3);

        let total: usize = batches.iter().map(|(_, instances)| instances.len()).sum();
        assert_eq!(total, 5);

        for (mesh_id, instances) in &batches {
            match mesh_id {
                MeshId::Cube => {
                    let tags: Vec<f32> = instances.iter().map(|i| i.color[0]).collect();
                    assert_eq!(tags, vec![1.0, 3.0]);
                }
                MeshId::Sphere => assert_eq!(instances.len(), 2),
                MeshId::Cylinder => assert_eq!(instances.len(), 1),
                MeshId::Arrow => panic!("no arrow was submitted"),
            }
        }
    }

    #[test]
    fn single_mesh_single_batch() {
        let mut queue = RenderQueue::new();
        for i in 0..4 {
            queue.submit(cmd(MeshId::Arrow, i as f32));
        }
        let batches = queue.meshes_batched();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].0, MeshId::Arrow);
        assert_eq!(batches[0].1.len(), 4);
    }

    #[test]
    fn batching_is_repeatable_until_cleared() {
        let mut queue = RenderQueue::new();
        queue.submit(cmd(MeshId::Cube, 1.0));
        queue.submit(cmd(MeshId::Sphere, 2.0));

        assert_eq!(queue.meshes_batched().len(), 2);
        assert_eq!(queue.meshes_batched().len(), 2);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn clear_discards_pending_commands() {
        let mut queue = RenderQueue::new();
        queue.submit(cmd(MeshId::Cube, 1.0));
        queue.submit(cmd(MeshId::Cube, 2.0));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.meshes_batched().is_empty());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn queue_types_are_send_sync() {
        assert_send_sync::<MeshId>();
        assert_send_sync::<InstanceData>();
        assert_send_sync::<RenderCommand>();
        assert_send_sync::<RenderQueue>();
    }
}
