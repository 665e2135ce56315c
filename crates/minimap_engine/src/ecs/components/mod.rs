//! ECS Components module
//!
//! Entities gain capabilities by composition: a transform places them in the
//! world, a health component makes them enemies, a minimap component makes
//! them trackable.

pub mod transform;
pub mod health;
pub mod minimap;

pub use transform::TransformComponent;
pub use health::HealthComponent;
pub use minimap::MinimapComponent;
