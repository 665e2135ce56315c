//! Backend abstraction trait for instanced icon drawing
//!
//! Keeps the minimap independent of the graphics API that finally draws the
//! icons.

use super::{IconInstanceData, RenderError};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Opaque id of a mesh registered with a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

/// Widget-side mesh slot: either a backend mesh id or unset
///
/// Unset is stored as `-1`, matching what instance-buffer consumers expect
/// from an unbound slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(i64);

impl MeshHandle {
    /// No mesh bound
    pub const NONE: MeshHandle = MeshHandle(-1);

    /// Whether a mesh is bound
    pub fn is_set(self) -> bool {
        self.0 >= 0
    }

    /// Backend mesh id, if bound
    pub fn id(self) -> Option<MeshId> {
        u32::try_from(self.0).ok().map(MeshId)
    }

    /// Raw value; `-1` when unset
    pub fn raw(self) -> i64 {
        self.0
    }
}

impl Default for MeshHandle {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<MeshId> for MeshHandle {
    fn from(id: MeshId) -> Self {
        MeshHandle(i64::from(id.0))
    }
}

/// Vector art used for every minimap icon instance
#[derive(Debug, Clone, PartialEq)]
pub struct IconMeshAsset {
    /// Asset name, for diagnostics
    pub name: String,

    /// Icon edge length in pixels before per-instance transforms
    pub size_px: f32,
}

impl IconMeshAsset {
    /// Create an icon asset
    pub fn new(name: impl Into<String>, size_px: f32) -> Self {
        Self {
            name: name.into(),
            size_px,
        }
    }
}

/// Instanced icon rendering interface
pub trait IconRenderBackend {
    /// Register a mesh and return its id
    fn add_mesh(&mut self, asset: &IconMeshAsset) -> BackendResult<MeshId>;

    /// Allocate per-instance storage for up to `capacity` instances
    fn enable_instancing(&mut self, mesh: MeshId, capacity: usize) -> BackendResult<()>;

    /// Replace the mesh's instances for this frame
    fn update_instances(&mut self, mesh: MeshId, instances: &[IconInstanceData]) -> BackendResult<()>;
}
