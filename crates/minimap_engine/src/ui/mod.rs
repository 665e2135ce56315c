//! UI System Module
//!
//! - geometry: widget bounds in local and absolute (DPI-scaled) space
//! - minimap_icons: the widget that draws minimap icons as instances

pub mod geometry;
pub mod minimap_icons;

pub use geometry::WidgetGeometry;
pub use minimap_icons::MinimapIconsWidget;
