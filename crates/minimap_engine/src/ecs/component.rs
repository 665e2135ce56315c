//! Component trait and implementations

/// Marker trait for components
///
/// Components are plain data attached to an [`Entity`](super::Entity). The
/// world is single-threaded, so components are not required to be
/// `Send + Sync`.
pub trait Component: 'static {}
