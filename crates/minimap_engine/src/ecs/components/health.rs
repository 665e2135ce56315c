//! Health component
//!
//! Marks an entity as an enemy for the minimap and carries its hit points.

use crate::ecs::Component;
use crate::events::Multicast;
use rand::Rng;

/// Fraction of `max_health` that randomized health never drops below
const MIN_SPAWN_HEALTH_FRACTION: f32 = 0.2;

/// Health capability
#[derive(Debug)]
pub struct HealthComponent {
    /// Upper bound for `health`
    pub max_health: f32,

    health: f32,

    /// Fired with the new value whenever health is set
    pub on_health_changed: Multicast<f32>,
}

impl Component for HealthComponent {}

impl Default for HealthComponent {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl HealthComponent {
    /// Create a component at full health
    pub fn new(max_health: f32) -> Self {
        Self {
            max_health,
            health: max_health,
            on_health_changed: Multicast::new(),
        }
    }

    /// Current health
    pub fn health(&self) -> f32 {
        self.health
    }

    /// Health as a fraction of the maximum; 0 when the maximum is not positive
    pub fn health_percent(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    /// Set health, clamped to `[0, max_health]`, and notify listeners
    pub fn set_health(&mut self, health: f32) {
        self.health = health.clamp(0.0, self.max_health.max(0.0));
        self.on_health_changed.broadcast(&self.health);
    }

    /// Spawn-time initialization: roll a health value in
    /// `[0.2 * max_health, max_health]` and broadcast it
    ///
    /// A non-finite or non-positive maximum skips the roll and keeps the
    /// health at the clamped maximum (0 when not positive).
    pub fn begin_play<R: Rng>(&mut self, rng: &mut R) {
        let rolled = if !self.max_health.is_finite() {
            log::warn!("Max health {} is not finite, skipping spawn roll", self.max_health);
            self.max_health.max(0.0)
        } else if self.max_health > 0.0 {
            rng.gen_range(self.max_health * MIN_SPAWN_HEALTH_FRACTION..=self.max_health)
        } else {
            0.0
        };
        log::debug!("Rolled spawn health {:.1}/{:.1}", rolled, self.max_health);
        self.set_health(rolled);
    }
}
