//! Widget geometry
//!
//! Layout hands widgets a local size plus a local→absolute transform.
//! Anything drawn in absolute space must be measured there too; using the
//! local size under display scaling makes icons drift as the scale changes.

use crate::foundation::math::Vec2;

/// Allotted geometry of a widget for one paint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetGeometry {
    /// Absolute position of the local origin (top-left), in pixels
    pub absolute_position: Vec2,
    /// Size in local (unscaled) units
    pub local_size: Vec2,
    /// Local → absolute scale (DPI scale)
    pub scale: f32,
}

impl WidgetGeometry {
    /// Geometry at `absolute_position` with the given local size and scale
    pub fn new(absolute_position: Vec2, local_size: Vec2, scale: f32) -> Self {
        Self {
            absolute_position,
            local_size,
            scale,
        }
    }

    /// Transform a local point to absolute pixels
    pub fn local_to_absolute(&self, local: Vec2) -> Vec2 {
        self.absolute_position + local * self.scale
    }

    /// Size in absolute pixels
    pub fn absolute_size(&self) -> Vec2 {
        self.local_to_absolute(self.local_size) - self.local_to_absolute(Vec2::zeros())
    }

    /// Center in absolute pixels
    pub fn absolute_center(&self) -> Vec2 {
        self.local_to_absolute(Vec2::zeros()) + self.absolute_size() * 0.5
    }
}
