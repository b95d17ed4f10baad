//! Euler rotation in degrees (pitch, yaw, roll)

use crate::vector::Vec3;

/// Rotation expressed as pitch/yaw/roll in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation with only a yaw component
    #[inline]
    pub const fn from_yaw(yaw: f32) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    /// Keep only the yaw, so the object stays upright
    #[inline]
    pub fn yaw_only(self) -> Self {
        Self::from_yaw(self.yaw)
    }

    /// Unit forward (X) axis of this rotation
    pub fn forward(self) -> Vec3 {
        let (sp, cp) = crate::radians(self.pitch).sin_cos();
        let (sy, cy) = crate::radians(self.yaw).sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// Unit right (Y) axis of this rotation, ignoring roll
    pub fn right(self) -> Vec3 {
        let (sy, cy) = crate::radians(self.yaw).sin_cos();
        Vec3::new(-sy, cy, 0.0)
    }

    /// Unit up (Z) axis of this rotation, ignoring roll
    pub fn up(self) -> Vec3 {
        self.forward().cross(self.right())
    }

    /// Wrap an angle into (-180, 180]
    pub fn normalize_axis(angle: f32) -> f32 {
        let mut a = angle % 360.0;
        if a > 180.0 {
            a -= 360.0;
        } else if a <= -180.0 {
            a += 360.0;
        }
        a
    }
}
