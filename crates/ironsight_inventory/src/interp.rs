//! Curve-driven pickup flight
//!
//! While an item is `EquipInterping` it flies from where it was picked up to
//! an interpolation slot in front of the camera. Horizontal position eases in
//! with `finterp_to`, height follows a Z curve sampled on elapsed time, and the
//! yaw keeps the offset it had relative to the camera when the flight started.

use crate::pickup::ItemTransform;
use ironsight_math::{finterp_to, Curve, Rotator, Vec3};
use serde::{Deserialize, Serialize};

/// Pickup flight settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpConfig {
    /// Flight duration in seconds
    pub z_curve_time: f32,
    /// Horizontal interp speed
    pub interp_speed: f32,
    /// Height curve, 0 at the start location and 1 at the slot
    pub z_curve: Curve,
    /// Optional scale curve sampled on the same clock
    pub scale_curve: Option<Curve>,
    /// Seconds a thrown item falls before it can be picked up again
    pub settle_time: f32,
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self {
            z_curve_time: 0.7,
            interp_speed: 30.0,
            z_curve: Curve::new(&[(0.0, 0.0), (0.35, 1.3), (0.7, 1.0)]),
            scale_curve: Some(Curve::new(&[(0.0, 1.0), (0.35, 1.25), (0.7, 1.0)])),
            settle_time: 0.7,
        }
    }
}

impl InterpConfig {
    /// Builder: set flight duration
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.z_curve_time = seconds;
        self
    }

    /// Builder: set the height curve
    pub fn with_z_curve(mut self, curve: Curve) -> Self {
        self.z_curve = curve;
        self
    }

    /// Builder: set or clear the scale curve
    pub fn with_scale_curve(mut self, curve: Option<Curve>) -> Self {
        self.scale_curve = curve;
        self
    }

    /// Builder: set the settle time after a throw
    pub fn with_settle_time(mut self, seconds: f32) -> Self {
        self.settle_time = seconds;
        self
    }
}

/// Where the owning character wants the item this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpTarget {
    /// World location of the assigned slot
    pub location: Vec3,
    /// Current camera yaw in degrees
    pub camera_yaw: f32,
}

impl InterpTarget {
    pub fn new(location: Vec3, camera_yaw: f32) -> Self {
        Self {
            location,
            camera_yaw,
        }
    }
}

/// State captured when a flight starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemInterp {
    /// Location the item was in when selected
    pub start_location: Vec3,
    /// Item yaw minus camera yaw at the start
    pub yaw_offset: f32,
    /// Slot index reserved for this flight
    pub slot: usize,
}

impl ItemInterp {
    /// Capture the start of a flight
    pub fn begin(transform: &ItemTransform, target: &InterpTarget, slot: usize) -> Self {
        Self {
            start_location: transform.location,
            yaw_offset: Rotator::normalize_axis(transform.rotation.yaw - target.camera_yaw),
            slot,
        }
    }

    /// Advance the flight one tick. `elapsed` is time since the flight
    /// started, including this tick.
    pub fn step(
        &self,
        transform: &mut ItemTransform,
        target: &InterpTarget,
        elapsed: f32,
        delta_time: f32,
        config: &InterpConfig,
    ) {
        let curve_value = config.z_curve.evaluate(elapsed);
        let delta_z = target.location.z - self.start_location.z;

        transform.location = Vec3::new(
            finterp_to(
                transform.location.x,
                target.location.x,
                delta_time,
                config.interp_speed,
            ),
            finterp_to(
                transform.location.y,
                target.location.y,
                delta_time,
                config.interp_speed,
            ),
            self.start_location.z + curve_value * delta_z,
        );

        transform.rotation = Rotator::from_yaw(target.camera_yaw + self.yaw_offset);

        if let Some(scale_curve) = &config.scale_curve {
            transform.scale = scale_curve.evaluate(elapsed);
        }
    }
}
