//! Lifecycle hooks for minimap-related components
//!
//! Logic separated from the data components: the engine calls these when an
//! entity starts or stops playing, passing the manager it should talk to.

use super::MinimapManager;
use crate::ecs::components::{HealthComponent, MinimapComponent};
use crate::ecs::{Entity, World};
use rand::Rng;

/// Begin/end play handlers for [`MinimapComponent`] and [`HealthComponent`]
pub struct MinimapHooks;

impl MinimapHooks {
    /// Register the entity's minimap component with `manager`
    ///
    /// Without a manager, or without a minimap component, nothing happens and
    /// the entity simply never shows up. Returns whether it was bound.
    pub fn begin_play(world: &mut World, entity: Entity, manager: Option<&mut MinimapManager>) -> bool {
        let Some(manager) = manager else {
            log::debug!("No minimap manager; {:?} will not be tracked", entity);
            return false;
        };
        let Some(icon_style_index) = world
            .get_component::<MinimapComponent>(entity)
            .map(|c| c.icon_style_index)
        else {
            return false;
        };

        manager.register_minimap(world, entity, icon_style_index);
        if let Some(component) = world.get_component_mut::<MinimapComponent>(entity) {
            component.bound = true;
        }
        true
    }

    /// Unregister the entity if `begin_play` bound it
    pub fn end_play(world: &mut World, entity: Entity, manager: Option<&mut MinimapManager>) {
        let bound = world
            .get_component::<MinimapComponent>(entity)
            .is_some_and(MinimapComponent::is_bound);
        if !bound {
            return;
        }
        if let Some(manager) = manager {
            manager.unregister_minimap(entity);
        }
        if let Some(component) = world.get_component_mut::<MinimapComponent>(entity) {
            component.bound = false;
        }
    }

    /// Roll the entity's spawn health and report whether it can appear in
    /// the manager's enemy index
    ///
    /// Enemies are discovered when their minimap component registers, so an
    /// entity with health but no minimap component is never tracked.
    pub fn health_begin_play<R: Rng>(
        world: &mut World,
        entity: Entity,
        rng: &mut R,
        manager: Option<&MinimapManager>,
    ) -> bool {
        let Some(health) = world.get_component_mut::<HealthComponent>(entity) else {
            return false;
        };
        health.begin_play(rng);

        if manager.is_none() {
            return false;
        }
        let trackable = world.has_component::<MinimapComponent>(entity);
        if !trackable {
            log::debug!("{:?} has health but no minimap component; not an enemy", entity);
        }
        trackable
    }
}
