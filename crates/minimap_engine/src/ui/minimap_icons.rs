//! Minimap icons widget
//!
//! Draws every tracked entry as one instance of a single icon mesh. The
//! widget owns the instance buffer and rebuilds it from scratch each paint.

use super::WidgetGeometry;
use crate::config::MinimapWidgetConfig;
use crate::ecs::{Entity, World};
use crate::minimap::{
    project_into, IconPlacement, MinimapManager, ObserverState, ProjectionConfig, ProjectionViewport,
};
use crate::render::{IconMeshAsset, IconRenderBackend, InstancedIconBuffer, MeshHandle};

/// Widget that renders minimap icons through instancing
#[derive(Debug)]
pub struct MinimapIconsWidget {
    config: MinimapWidgetConfig,
    icon_mesh_asset: Option<IconMeshAsset>,
    buffer: Option<InstancedIconBuffer>,
    placements: Vec<IconPlacement>,
}

impl MinimapIconsWidget {
    /// Create a widget with no icon mesh
    pub fn new(config: MinimapWidgetConfig) -> Self {
        Self {
            config,
            icon_mesh_asset: None,
            buffer: None,
            placements: Vec::new(),
        }
    }

    /// Use `asset` as the icon mesh (takes effect on the next synchronize)
    pub fn with_icon_mesh(mut self, asset: IconMeshAsset) -> Self {
        self.icon_mesh_asset = Some(asset);
        self
    }

    /// (Re)create the instance buffer and bind the icon mesh
    ///
    /// Failures leave the mesh unset; painting then does nothing.
    pub fn synchronize_properties(&mut self, backend: &mut dyn IconRenderBackend) {
        let mut buffer = InstancedIconBuffer::new(self.config.max_icons);
        match &self.icon_mesh_asset {
            Some(asset) => {
                if let Err(e) = buffer.bind(backend, asset) {
                    log::warn!("Minimap icon mesh '{}' unavailable: {}", asset.name, e);
                }
            }
            None => log::debug!("Minimap icons widget has no icon mesh"),
        }
        self.buffer = Some(buffer);
    }

    /// Drop the instance buffer
    pub fn release_resources(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.release();
        }
        self.buffer = None;
        self.placements.clear();
    }

    /// Icon mesh the widget draws with, or [`MeshHandle::NONE`]
    pub fn mesh_handle(&self) -> MeshHandle {
        self.buffer.as_ref().map_or(MeshHandle::NONE, InstancedIconBuffer::mesh)
    }

    /// Instance buffer, once synchronized
    pub fn buffer(&self) -> Option<&InstancedIconBuffer> {
        self.buffer.as_ref()
    }

    /// Placements computed by the last paint
    pub fn placements(&self) -> &[IconPlacement] {
        &self.placements
    }

    /// Project the manager's entries around `pawn` and upload them
    ///
    /// Without a manager the instance list is cleared. Returns the number of
    /// instances uploaded.
    pub fn paint(
        &mut self,
        world: &World,
        manager: Option<&MinimapManager>,
        pawn: Option<Entity>,
        geometry: &WidgetGeometry,
        backend: &mut dyn IconRenderBackend,
    ) -> usize {
        let Some(buffer) = self.buffer.as_mut().filter(|b| b.mesh().is_set()) else {
            return 0;
        };

        match manager {
            Some(manager) => {
                let entries = manager.entries(world);
                let observer = ObserverState::from_pawn(world, pawn, self.config.observer_yaw_offset_degrees);
                let projection = ProjectionConfig::from(&self.config);
                let viewport = ProjectionViewport::from_geometry(geometry);
                project_into(&observer, &entries, &projection, &viewport, &mut self.placements);
            }
            None => self.placements.clear(),
        }

        match buffer.update(backend, &self.placements) {
            Ok(()) => buffer.stats().instances_uploaded,
            Err(e) => {
                log::warn!("Minimap icon upload failed: {}", e);
                0
            }
        }
    }
}
