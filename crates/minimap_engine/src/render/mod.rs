//! Rendering seam for minimap icons
//!
//! The actual GPU backend is an external collaborator reached through
//! [`IconRenderBackend`]. This module owns only the data preparation:
//! packing placements into per-instance records and pushing them through
//! the backend once per frame.

pub mod api;
pub mod headless;
pub mod instancing;

pub use api::{BackendResult, IconMeshAsset, IconRenderBackend, MeshHandle, MeshId};
pub use headless::HeadlessIconBackend;
pub use instancing::{IconInstanceData, InstancedIconBuffer, DEFAULT_MAX_ICONS};

/// Errors reported by icon render backends
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The backend could not create the mesh resource
    #[error("Mesh creation failed: {0}")]
    MeshCreation(String),

    /// The handle does not name a mesh the backend knows about
    #[error("Unknown mesh id {0}")]
    UnknownMesh(u32),

    /// Instancing was not enabled for the mesh before uploading instances
    #[error("Instancing not enabled for mesh id {0}")]
    InstancingDisabled(u32),

    /// More instances than the enabled capacity were uploaded
    #[error("Too many instances: {count} > max {capacity}")]
    CapacityExceeded {
        /// Instances in the upload
        count: usize,
        /// Capacity passed to `enable_instancing`
        capacity: usize,
    },
}
