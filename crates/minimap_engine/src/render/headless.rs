//! Headless icon backend
//!
//! Keeps uploaded instances in memory instead of drawing them. Used by tools
//! and tests that need the full widget pipeline without a GPU.

use super::{BackendResult, IconInstanceData, IconMeshAsset, IconRenderBackend, MeshHandle, MeshId, RenderError};

#[derive(Debug)]
struct HeadlessMesh {
    asset: IconMeshAsset,
    capacity: Option<usize>,
    instances: Vec<IconInstanceData>,
}

/// In-memory [`IconRenderBackend`]
#[derive(Debug, Default)]
pub struct HeadlessIconBackend {
    meshes: Vec<HeadlessMesh>,
    upload_count: u64,
    bytes_uploaded: u64,
    fail_mesh_creation: bool,
}

impl HeadlessIconBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `add_mesh` call fail
    pub fn with_failing_mesh_creation(mut self) -> Self {
        self.fail_mesh_creation = true;
        self
    }

    /// Instances last uploaded for `mesh`
    pub fn instances(&self, mesh: MeshHandle) -> Option<&[IconInstanceData]> {
        let id = mesh.id()?;
        self.meshes
            .get(id.0 as usize)
            .map(|m| m.instances.as_slice())
    }

    /// Asset registered under `mesh`
    pub fn asset(&self, mesh: MeshHandle) -> Option<&IconMeshAsset> {
        let id = mesh.id()?;
        self.meshes.get(id.0 as usize).map(|m| &m.asset)
    }

    /// Number of `update_instances` calls accepted so far
    pub fn upload_count(&self) -> u64 {
        self.upload_count
    }

    /// Total instance bytes accepted so far
    pub fn bytes_uploaded(&self) -> u64 {
        self.bytes_uploaded
    }

    fn mesh_mut(&mut self, mesh: MeshId) -> BackendResult<&mut HeadlessMesh> {
        self.meshes
            .get_mut(mesh.0 as usize)
            .ok_or(RenderError::UnknownMesh(mesh.0))
    }
}

impl IconRenderBackend for HeadlessIconBackend {
    fn add_mesh(&mut self, asset: &IconMeshAsset) -> BackendResult<MeshId> {
        if self.fail_mesh_creation {
            return Err(RenderError::MeshCreation(format!(
                "headless backend refused '{}'",
                asset.name
            )));
        }
        let id = u32::try_from(self.meshes.len())
            .map_err(|_| RenderError::MeshCreation("mesh table full".to_string()))?;
        self.meshes.push(HeadlessMesh {
            asset: asset.clone(),
            capacity: None,
            instances: Vec::new(),
        });
        Ok(MeshId(id))
    }

    fn enable_instancing(&mut self, mesh: MeshId, capacity: usize) -> BackendResult<()> {
        let entry = self.mesh_mut(mesh)?;
        entry.capacity = Some(capacity);
        entry.instances.reserve(capacity);
        Ok(())
    }

    fn update_instances(&mut self, mesh: MeshId, instances: &[IconInstanceData]) -> BackendResult<()> {
        let entry = self.mesh_mut(mesh)?;
        let capacity = entry.capacity.ok_or(RenderError::InstancingDisabled(mesh.0))?;
        if instances.len() > capacity {
            return Err(RenderError::CapacityExceeded {
                count: instances.len(),
                capacity,
            });
        }
        entry.instances.clear();
        entry.instances.extend_from_slice(instances);

        self.upload_count += 1;
        self.bytes_uploaded += IconInstanceData::as_bytes(instances).len() as u64;
        Ok(())
    }
}
