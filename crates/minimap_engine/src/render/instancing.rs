//! Instanced icon buffer
//!
//! Packs the frame's icon placements into fixed-capacity per-instance
//! records and hands them to the backend in one replace-all update.

use super::{BackendResult, IconMeshAsset, IconRenderBackend, MeshHandle};
use crate::minimap::IconPlacement;

/// Default instance capacity for the minimap icon mesh
pub const DEFAULT_MAX_ICONS: usize = 2048;

/// Per-instance record uploaded to the backend
///
/// Must match the icon shader layout exactly: `(x, y, rotation, style)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct IconInstanceData {
    /// Absolute screen X in pixels
    pub x: f32,
    /// Absolute screen Y in pixels
    pub y: f32,
    /// Icon rotation in radians
    pub rotation: f32,
    /// Atlas / style index
    pub style_index: f32,
}

impl IconInstanceData {
    /// Pack one placement
    pub fn from_placement(placement: &IconPlacement) -> Self {
        Self {
            x: placement.screen_position.x,
            y: placement.screen_position.y,
            rotation: placement.rotation,
            style_index: placement.style_index as f32,
        }
    }

    /// Raw bytes of a slice of instances, ready for a vertex buffer upload
    pub fn as_bytes(instances: &[IconInstanceData]) -> &[u8] {
        bytemuck::cast_slice(instances)
    }
}

/// Statistics for the last instance update
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IconBufferStats {
    /// Instances pushed to the backend
    pub instances_uploaded: usize,
    /// Placements dropped because the buffer was full
    pub instances_dropped: usize,
}

/// CPU-side mirror of the icon instance buffer
#[derive(Debug)]
pub struct InstancedIconBuffer {
    mesh: MeshHandle,
    capacity: usize,
    instances: Vec<IconInstanceData>,
    stats: IconBufferStats,
}

impl InstancedIconBuffer {
    /// Create an unbound buffer
    pub fn new(capacity: usize) -> Self {
        Self {
            mesh: MeshHandle::NONE,
            capacity,
            instances: Vec::with_capacity(capacity),
            stats: IconBufferStats::default(),
        }
    }

    /// Register `asset` with the backend and enable instancing on it
    ///
    /// On failure the buffer stays unbound and every later update is a no-op.
    pub fn bind(&mut self, backend: &mut dyn IconRenderBackend, asset: &IconMeshAsset) -> BackendResult<()> {
        self.mesh = MeshHandle::NONE;
        let id = backend.add_mesh(asset)?;
        backend.enable_instancing(id, self.capacity)?;
        self.mesh = MeshHandle::from(id);
        log::info!(
            "Icon mesh '{}' bound as {:?} with {} instance slots",
            asset.name, id, self.capacity
        );
        Ok(())
    }

    /// Forget the bound mesh
    pub fn release(&mut self) {
        self.mesh = MeshHandle::NONE;
        self.instances.clear();
        self.stats = IconBufferStats::default();
    }

    /// Currently bound mesh
    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    /// Maximum instances per update
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Instances from the last update
    pub fn instances(&self) -> &[IconInstanceData] {
        &self.instances
    }

    /// Statistics for the last update
    pub fn stats(&self) -> IconBufferStats {
        self.stats
    }

    /// Replace all instances with `placements`, in order, and upload them
    ///
    /// Placements beyond capacity are dropped. Does nothing while no mesh is
    /// bound. An empty slice uploads zero instances.
    pub fn update(&mut self, backend: &mut dyn IconRenderBackend, placements: &[IconPlacement]) -> BackendResult<()> {
        let Some(id) = self.mesh.id() else {
            log::trace!("Icon buffer unbound, skipping {} placements", placements.len());
            return Ok(());
        };

        let kept = placements.len().min(self.capacity);
        self.instances.clear();
        self.instances
            .extend(placements[..kept].iter().map(IconInstanceData::from_placement));

        self.stats = IconBufferStats {
            instances_uploaded: kept,
            instances_dropped: placements.len() - kept,
        };
        if self.stats.instances_dropped > 0 {
            log::trace!(
                "Icon buffer full: dropped {} of {} placements",
                self.stats.instances_dropped,
                placements.len()
            );
        }

        backend.update_instances(id, &self.instances)
    }
}
