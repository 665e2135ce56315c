//! # Minimap Engine
//!
//! Entity tracking and icon rendering for a top-down minimap.
//!
//! ## Features
//!
//! - **Entry Registry**: Weak handles to every entity that shows on the map
//! - **Enemy Index**: The health-carrying subset, with add/remove notifications
//! - **Projection**: World positions to widget pixels, rotated with the player
//! - **Instanced Icons**: One mesh, one instance per visible entry
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use minimap_engine::prelude::*;
//!
//! let mut world = World::new();
//! let mut manager = MinimapManager::new();
//! let mut backend = HeadlessIconBackend::new();
//!
//! let crate_entity = world.create_entity();
//! world.add_component(crate_entity, TransformComponent::from_position(Vec3::new(300.0, 0.0, 0.0)));
//! world.add_component(crate_entity, MinimapComponent::new(0));
//! MinimapHooks::begin_play(&mut world, crate_entity, Some(&mut manager));
//!
//! let mut widget = MinimapIconsWidget::new(MinimapWidgetConfig::default())
//!     .with_icon_mesh(IconMeshAsset::new("minimap_dot", 12.0));
//! widget.synchronize_properties(&mut backend);
//!
//! let geometry = WidgetGeometry::new(Vec2::zeros(), Vec2::new(256.0, 256.0), 1.0);
//! manager.tick(&world, 0.016);
//! widget.paint(&world, Some(&manager), None, &geometry, &mut backend);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate
)]

pub mod foundation;
pub mod ecs;
pub mod events;
pub mod config;
pub mod render;
pub mod ui;
pub mod minimap;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, MinimapSettings, MinimapWidgetConfig},
        ecs::{
            components::{HealthComponent, MinimapComponent, TransformComponent},
            Component, Entity, World,
        },
        events::{ListenerId, Multicast},
        foundation::math::{Quat, Vec2, Vec3},
        minimap::{IconPlacement, MinimapHooks, MinimapManager, TrackedEntry},
        render::{HeadlessIconBackend, IconMeshAsset, IconRenderBackend, MeshHandle},
        ui::{MinimapIconsWidget, WidgetGeometry},
    };
}
