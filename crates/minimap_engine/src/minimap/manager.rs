//! Minimap manager
//!
//! Owns the entry registry and enemy index, keeps them consistent, and
//! announces changes through multicast listener lists. Components and
//! widgets receive the manager explicitly; there is no global lookup.

use super::{EnemyIndex, EntryRegistry, TrackedEntry};
use crate::config::MinimapSettings;
use crate::ecs::{Entity, World};
use crate::events::Multicast;

/// What one cull pass removed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CullReport {
    /// Registry entries whose entity died
    pub entries_removed: usize,
    /// Enemy records dropped through the registry pass (announced)
    pub enemies_removed: usize,
    /// Enemy records dropped silently afterwards
    pub enemies_dropped: usize,
}

/// Central minimap registry
#[derive(Debug, Default)]
pub struct MinimapManager {
    registry: EntryRegistry,
    enemies: EnemyIndex,
    icon_styles: Vec<String>,

    /// Fired when an entry is added or removed
    pub on_list_changed: Multicast<()>,

    /// Fired when a registered entity with health joins the enemy index
    pub on_enemy_added: Multicast<Entity>,

    /// Fired when an enemy leaves the index through unregistration or the
    /// registry cull. The entity may already be destroyed when this fires.
    pub on_enemy_removed: Multicast<Entity>,
}

impl MinimapManager {
    /// Create a manager with an empty icon catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager using the settings' icon catalog
    pub fn from_settings(settings: &MinimapSettings) -> Self {
        Self {
            icon_styles: settings.icon_styles.clone(),
            ..Self::default()
        }
    }

    /// Start tracking `entity` with the given icon style
    ///
    /// Dead entities are ignored. Registering twice keeps the first icon
    /// style, but still picks up a health component added since.
    pub fn register_minimap(&mut self, world: &World, entity: Entity, icon_style_index: u32) {
        if !world.is_alive(entity) {
            return;
        }
        if self.registry.register(world, entity, icon_style_index) {
            self.on_list_changed.broadcast(&());
        }
        self.try_add_enemy(world, entity);
    }

    /// Stop tracking `entity`
    pub fn unregister_minimap(&mut self, entity: Entity) {
        self.try_remove_enemy(entity);
        if self.registry.unregister(entity) {
            self.on_list_changed.broadcast(&());
        }
    }

    /// Live entries, in registration order
    pub fn entries(&self, world: &World) -> Vec<TrackedEntry> {
        self.registry.snapshot(world)
    }

    /// Live enemies (registered entities with health)
    pub fn enemy_health_components(&self, world: &World) -> Vec<Entity> {
        self.enemies.snapshot(world)
    }

    /// Per-frame update
    pub fn tick(&mut self, world: &World, _delta_time: f32) -> CullReport {
        self.cull_invalid(world)
    }

    /// Remove entries and enemy records whose entity is gone
    ///
    /// Each dead registry entry is handled on its own: its enemy record (if
    /// any) is removed and announced, then the list change is announced.
    /// Afterwards enemy records whose health component vanished are dropped
    /// without notification.
    pub fn cull_invalid(&mut self, world: &World) -> CullReport {
        let mut report = CullReport::default();

        for entity in self.registry.cull(world) {
            report.entries_removed += 1;
            if self.try_remove_enemy(entity) {
                report.enemies_removed += 1;
            }
            self.on_list_changed.broadcast(&());
        }

        report.enemies_dropped = self.enemies.cull(world);
        if report.enemies_dropped > 0 {
            log::debug!("Dropped {} stale enemy records", report.enemies_dropped);
        }
        report
    }

    /// Registry, read-only
    pub fn registry(&self) -> &EntryRegistry {
        &self.registry
    }

    /// Enemy index, read-only
    pub fn enemies(&self) -> &EnemyIndex {
        &self.enemies
    }

    /// Icon texture path for a style index
    pub fn icon_style(&self, index: u32) -> Option<&str> {
        self.icon_styles.get(index as usize).map(String::as_str)
    }

    /// Whole icon catalog
    pub fn icon_styles(&self) -> &[String] {
        &self.icon_styles
    }

    fn try_add_enemy(&mut self, world: &World, entity: Entity) {
        if self.enemies.try_add(world, entity) {
            log::debug!("Enemy added: {:?}", entity);
            self.on_enemy_added.broadcast(&entity);
        }
    }

    fn try_remove_enemy(&mut self, entity: Entity) -> bool {
        if !self.enemies.remove(entity) {
            return false;
        }
        log::debug!("Enemy removed: {:?}", entity);
        self.on_enemy_removed.broadcast(&entity);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{HealthComponent, TransformComponent};
    use crate::foundation::math::Vec3;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        list_changed: usize,
        added: Vec<Entity>,
        removed: Vec<Entity>,
    }

    fn watch(manager: &mut MinimapManager) -> Rc<RefCell<Counters>> {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let c = Rc::clone(&counters);
        manager.on_list_changed.subscribe(move |_: &()| c.borrow_mut().list_changed += 1);
        let c = Rc::clone(&counters);
        manager.on_enemy_added.subscribe(move |e: &Entity| c.borrow_mut().added.push(*e));
        let c = Rc::clone(&counters);
        manager.on_enemy_removed.subscribe(move |e: &Entity| c.borrow_mut().removed.push(*e));
        counters
    }

    fn spawn(world: &mut World, with_health: bool) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, TransformComponent::from_position(Vec3::new(1.0, 2.0, 0.0)));
        if with_health {
            world.add_component(entity, HealthComponent::default());
        }
        entity
    }

    #[test]
    fn test_register_then_unregister_enemy() {
        let mut world = World::new();
        let entity = spawn(&mut world, true);
        let mut manager = MinimapManager::new();
        let counters = watch(&mut manager);

        manager.register_minimap(&world, entity, 0);
        manager.unregister_minimap(entity);

        assert!(manager.entries(&world).is_empty());
        assert!(manager.enemy_health_components(&world).is_empty());
        let counters = counters.borrow();
        assert_eq!(counters.added, vec![entity]);
        assert_eq!(counters.removed, vec![entity]);
        assert_eq!(counters.list_changed, 2);
    }

    #[test]
    fn test_register_then_unregister_plain() {
        let mut world = World::new();
        let entity = spawn(&mut world, false);
        let mut manager = MinimapManager::new();
        let counters = watch(&mut manager);

        manager.register_minimap(&world, entity, 0);
        assert_eq!(manager.entries(&world).len(), 1);
        manager.unregister_minimap(entity);

        assert!(manager.registry().is_empty());
        let counters = counters.borrow();
        assert!(counters.added.is_empty());
        assert!(counters.removed.is_empty());
    }

    #[test]
    fn test_duplicate_register_fires_once() {
        let mut world = World::new();
        let entity = spawn(&mut world, true);
        let mut manager = MinimapManager::new();
        let counters = watch(&mut manager);

        manager.register_minimap(&world, entity, 0);
        manager.register_minimap(&world, entity, 1);

        let counters = counters.borrow();
        assert_eq!(counters.list_changed, 1);
        assert_eq!(counters.added.len(), 1);
    }

    #[test]
    fn test_late_health_is_picked_up_on_reregister() {
        let mut world = World::new();
        let entity = spawn(&mut world, false);
        let mut manager = MinimapManager::new();
        manager.register_minimap(&world, entity, 0);
        assert!(manager.enemies().is_empty());

        world.add_component(entity, HealthComponent::default());
        manager.register_minimap(&world, entity, 0);
        assert_eq!(manager.enemy_health_components(&world), vec![entity]);
    }

    #[test]
    fn test_dead_entity_register_is_noop() {
        let mut world = World::new();
        let entity = spawn(&mut world, true);
        world.destroy_entity(entity);
        let mut manager = MinimapManager::new();
        let counters = watch(&mut manager);

        manager.register_minimap(&world, entity, 0);
        manager.unregister_minimap(entity);

        assert!(manager.registry().is_empty());
        assert_eq!(counters.borrow().list_changed, 0);
    }

    #[test]
    fn test_cull_announces_registry_removals_individually() {
        let mut world = World::new();
        let enemy = spawn(&mut world, true);
        let plain = spawn(&mut world, false);
        let survivor = spawn(&mut world, true);
        let mut manager = MinimapManager::new();
        for e in [enemy, plain, survivor] {
            manager.register_minimap(&world, e, 0);
        }
        let counters = watch(&mut manager);

        world.destroy_entity(enemy);
        world.destroy_entity(plain);
        let report = manager.tick(&world, 0.016);

        assert_eq!(
            report,
            CullReport { entries_removed: 2, enemies_removed: 1, enemies_dropped: 0 }
        );
        let counters = counters.borrow();
        assert_eq!(counters.list_changed, 2);
        assert_eq!(counters.removed, vec![enemy]);
        assert_eq!(manager.enemy_health_components(&world), vec![survivor]);
    }

    #[test]
    fn test_lost_health_is_dropped_silently() {
        let mut world = World::new();
        let entity = spawn(&mut world, true);
        let mut manager = MinimapManager::new();
        manager.register_minimap(&world, entity, 0);
        let counters = watch(&mut manager);

        world.remove_component::<HealthComponent>(entity);
        let report = manager.tick(&world, 0.016);

        assert_eq!(report.enemies_dropped, 1);
        assert!(manager.enemies().is_empty());
        assert_eq!(manager.entries(&world).len(), 1);
        assert!(counters.borrow().removed.is_empty());
    }

    #[test]
    fn test_icon_catalog_lookup() {
        let settings = MinimapSettings {
            icon_styles: vec!["icons/enemy.png".to_string()],
            ..MinimapSettings::default()
        };
        let manager = MinimapManager::from_settings(&settings);
        assert_eq!(manager.icon_style(0), Some("icons/enemy.png"));
        assert_eq!(manager.icon_style(1), None);
    }
}
