//! # ironsight_math - Gameplay Math
//!
//! Small math primitives shared by the gameplay crates. World space is
//! Z-up with X forward and Y right, matching the host engine.

pub mod vector;
pub mod rotator;
pub mod ray;
pub mod interp;

pub use vector::*;
pub use rotator::*;
pub use ray::*;
pub use interp::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
    /// Squared distance below which interpolation snaps to the target
    pub const SMALL_NUMBER: f32 = 1e-8;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min { min }
    else if value > max { max }
    else { value }
}

pub mod prelude {
    pub use crate::vector::{Vec2, Vec3};
    pub use crate::rotator::Rotator;
    pub use crate::ray::Ray;
    pub use crate::interp::{finterp_to, vinterp_to, map_range_clamped, Curve, CurveKey};
    pub use crate::{radians, degrees, lerp, clamp};
}
