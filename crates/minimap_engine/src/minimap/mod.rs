//! Minimap subsystem
//!
//! ```text
//! register/unregister → EntryRegistry ──► EnemyIndex (health-capable subset)
//!                            │
//!          per frame: cull → snapshot → project → InstancedIconBuffer
//! ```
//!
//! Everything runs on the game thread in that order; nothing here blocks or
//! locks. The registry and the enemy index hold non-owning [`Entity`]
//! handles and check liveness against the [`World`] before every read.
//!
//! [`Entity`]: crate::ecs::Entity
//! [`World`]: crate::ecs::World

pub mod registry;
pub mod enemies;
pub mod projection;
pub mod manager;
pub mod component;

#[cfg(test)]
mod tests;

pub use registry::{EntryRegistry, TrackedEntry};
pub use enemies::EnemyIndex;
pub use projection::{project, project_into, AxisFlip, IconPlacement, ObserverState, ProjectionConfig, ProjectionViewport};
pub use manager::MinimapManager;
pub use component::MinimapHooks;
