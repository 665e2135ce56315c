//! Entry registry
//!
//! Ordered set of entities shown on the minimap. Registration order is the
//! draw order.

use crate::ecs::components::TransformComponent;
use crate::ecs::{Entity, World};
use crate::foundation::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Registration {
    entity: Entity,
    icon_style_index: u32,
}

/// One live minimap participant, resolved for the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEntry {
    /// Tracked entity
    pub entity: Entity,
    /// Icon style chosen at registration
    pub icon_style_index: u32,
    /// Entity position, read from its transform when the snapshot was taken
    pub world_position: Vec3,
    /// Entity heading in degrees, read alongside the position
    pub yaw_degrees: f32,
}

/// Registered minimap entities
#[derive(Debug, Default)]
pub struct EntryRegistry {
    registered: Vec<Registration>,
}

impl EntryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entity` unless it is dead or already registered
    ///
    /// Returns `true` if the entity was added.
    pub fn register(&mut self, world: &World, entity: Entity, icon_style_index: u32) -> bool {
        if !world.is_alive(entity) || self.contains(entity) {
            return false;
        }
        self.registered.push(Registration {
            entity,
            icon_style_index,
        });
        log::debug!("Registered {:?} with icon style {}", entity, icon_style_index);
        true
    }

    /// Remove `entity`; returns `true` if it was registered
    pub fn unregister(&mut self, entity: Entity) -> bool {
        let Some(index) = self.position(entity) else {
            return false;
        };
        self.registered.remove(index);
        log::debug!("Unregistered {:?}", entity);
        true
    }

    /// Whether `entity` is registered (alive or not)
    pub fn contains(&self, entity: Entity) -> bool {
        self.position(entity).is_some()
    }

    /// Number of registrations, including ones not yet culled
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Registered entities in registration order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.registered.iter().map(|r| r.entity)
    }

    /// Current entries for live entities, in registration order
    ///
    /// Position and heading are read from the entity's transform; entities
    /// that died or have no transform are skipped.
    pub fn snapshot(&self, world: &World) -> Vec<TrackedEntry> {
        self.registered
            .iter()
            .filter_map(|registration| {
                if !world.is_alive(registration.entity) {
                    return None;
                }
                let transform = world.get_component::<TransformComponent>(registration.entity)?;
                Some(TrackedEntry {
                    entity: registration.entity,
                    icon_style_index: registration.icon_style_index,
                    world_position: transform.position,
                    yaw_degrees: transform.yaw_degrees(),
                })
            })
            .collect()
    }

    /// Drop registrations whose entity no longer exists
    ///
    /// Returns the removed entities in registration order.
    pub fn cull(&mut self, world: &World) -> Vec<Entity> {
        let mut removed = Vec::new();
        self.registered.retain(|registration| {
            let alive = world.is_alive(registration.entity);
            if !alive {
                removed.push(registration.entity);
            }
            alive
        });
        if !removed.is_empty() {
            log::debug!("Culled {} dead minimap entries", removed.len());
        }
        removed
    }

    fn position(&self, entity: Entity) -> Option<usize> {
        self.registered.iter().position(|r| r.entity == entity)
    }
}
