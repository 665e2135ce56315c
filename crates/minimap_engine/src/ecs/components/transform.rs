//! Transform component for the ECS system
//!
//! Pure data component (no logic). Coordinates are Z-up: X/Y form the ground
//! plane and yaw is a rotation about +Z.

use crate::ecs::Component;
use crate::foundation::math::{utils, Quat, Vec3};

/// ECS Transform component
///
/// Spatial transformation in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    /// World space position (Z-up)
    pub position: Vec3,

    /// World space rotation quaternion
    pub rotation: Quat,

    /// World space scale factors
    pub scale: Vec3,
}

impl Component for TransformComponent {}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl TransformComponent {
    /// Create identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create from position and a yaw angle in degrees
    pub fn from_position_yaw(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            rotation: utils::quat_from_yaw_degrees(yaw_degrees),
            ..Default::default()
        }
    }

    /// Builder pattern: Set rotation from a yaw angle in degrees
    pub fn with_yaw(mut self, yaw_degrees: f32) -> Self {
        self.rotation = utils::quat_from_yaw_degrees(yaw_degrees);
        self
    }

    /// Heading about the up axis, in degrees
    pub fn yaw_degrees(&self) -> f32 {
        utils::yaw_degrees(&self.rotation)
    }
}
