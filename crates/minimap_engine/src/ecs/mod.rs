//! Entity-Component-System implementation
//!
//! A minimal single-threaded ECS: generational entity handles, typed
//! component stores, and composition of capabilities through components.

pub mod world;
pub mod entity;
pub mod component;
pub mod components;

pub use world::World;
pub use entity::Entity;
pub use component::Component;
