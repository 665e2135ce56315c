//! Math utilities and types
//!
//! World space is Z-up: X/Y span the ground plane the minimap looks down on,
//! Z is altitude. Yaw is a rotation about +Z, measured in degrees.

pub use nalgebra::{
    Vector2, Vector3,
    Rotation2,
    Quaternion,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Rotation about the world up axis (+Z) by `degrees`
    pub fn quat_from_yaw_degrees(degrees: f32) -> Quat {
        Quat::from_axis_angle(&Vec3::z_axis(), deg_to_rad(degrees))
    }

    /// Yaw component (rotation about +Z) of a rotation, in degrees
    pub fn yaw_degrees(rotation: &Quat) -> f32 {
        let (_roll, _pitch, yaw) = rotation.euler_angles();
        rad_to_deg(yaw)
    }

    /// Planar part of a world vector
    pub fn xy(v: &Vec3) -> Vec2 {
        Vec2::new(v.x, v.y)
    }
}
