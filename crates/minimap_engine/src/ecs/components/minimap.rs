//! Minimap component
//!
//! Pure data; registration with a [`MinimapManager`](crate::minimap::MinimapManager)
//! happens through the lifecycle hooks in [`crate::minimap::component`].

use crate::ecs::Component;

/// Makes an entity trackable on the minimap
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinimapComponent {
    /// Picked by designers; selects the icon in the style catalog
    pub icon_style_index: u32,

    /// Set while the component is registered with a manager
    pub(crate) bound: bool,
}

impl Component for MinimapComponent {}

impl MinimapComponent {
    /// Create an unregistered component with the given icon style
    pub fn new(icon_style_index: u32) -> Self {
        Self {
            icon_style_index,
            bound: false,
        }
    }

    /// Whether `begin_play` registered this component with a manager
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}
