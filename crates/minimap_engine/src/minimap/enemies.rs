//! Enemy index
//!
//! Health-capable subset of the entry registry. Membership changes are
//! reported by [`MinimapManager`](super::MinimapManager); this type only
//! keeps the set.

use crate::ecs::components::HealthComponent;
use crate::ecs::{Entity, World};

/// Registered entities that carry a [`HealthComponent`]
#[derive(Debug, Default)]
pub struct EnemyIndex {
    enemies: Vec<Entity>,
}

impl EnemyIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `entity` if it is alive, has health and is not indexed yet
    ///
    /// Returns `true` if it was added.
    pub fn try_add(&mut self, world: &World, entity: Entity) -> bool {
        if self.contains(entity) || !Self::has_health(world, entity) {
            return false;
        }
        self.enemies.push(entity);
        true
    }

    /// Remove `entity`; returns `true` if it was indexed
    pub fn remove(&mut self, entity: Entity) -> bool {
        let before = self.enemies.len();
        self.enemies.retain(|e| *e != entity);
        self.enemies.len() != before
    }

    /// Drop entries whose entity died or lost its health component
    ///
    /// Returns how many were dropped. Intentionally reports no entity: the
    /// caller does not broadcast removals from this path.
    pub fn cull(&mut self, world: &World) -> usize {
        let before = self.enemies.len();
        self.enemies.retain(|e| Self::has_health(world, *e));
        before - self.enemies.len()
    }

    /// Live health-capable entities, in the order they were indexed
    pub fn snapshot(&self, world: &World) -> Vec<Entity> {
        self.enemies
            .iter()
            .copied()
            .filter(|e| Self::has_health(world, *e))
            .collect()
    }

    /// Whether `entity` is indexed
    pub fn contains(&self, entity: Entity) -> bool {
        self.enemies.contains(&entity)
    }

    /// Indexed entities, including ones not yet culled
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.enemies.iter().copied()
    }

    /// Number of indexed entities
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    fn has_health(world: &World, entity: Entity) -> bool {
        world.is_alive(entity) && world.has_component::<HealthComponent>(entity)
    }
}
