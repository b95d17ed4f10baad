//! Frame-rate aware easing and keyframed float curves

use crate::consts::SMALL_NUMBER;
use crate::vector::{Vec2, Vec3};

/// Ease `current` toward `target`, covering `delta_time * speed` of the
/// remaining distance each call. A non-positive speed snaps to the target.
pub fn finterp_to(current: f32, target: f32, delta_time: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }
    let dist = target - current;
    if dist * dist < SMALL_NUMBER {
        return target;
    }
    current + dist * crate::clamp(delta_time * speed, 0.0, 1.0)
}

/// Vector form of [`finterp_to`]
pub fn vinterp_to(current: Vec3, target: Vec3, delta_time: f32, speed: f32) -> Vec3 {
    if speed <= 0.0 {
        return target;
    }
    let dist = target - current;
    if dist.length_squared() < SMALL_NUMBER {
        return target;
    }
    current + dist * crate::clamp(delta_time * speed, 0.0, 1.0)
}

/// Map `value` from `input` range onto `output` range, clamped to the output
pub fn map_range_clamped(input: Vec2, output: Vec2, value: f32) -> f32 {
    let span = input.y - input.x;
    if span.abs() < f32::EPSILON {
        return if value < input.x { output.x } else { output.y };
    }
    let t = crate::clamp((value - input.x) / span, 0.0, 1.0);
    crate::lerp(output.x, output.y, t)
}

/// A single curve key
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

/// Piecewise-linear float curve. Keys are kept sorted by time and the
/// curve holds its end values outside the keyed range.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    keys: Vec<CurveKey>,
}

impl Curve {
    /// Create a curve from `(time, value)` pairs
    pub fn new(points: &[(f32, f32)]) -> Self {
        let mut keys: Vec<CurveKey> = points
            .iter()
            .map(|&(time, value)| CurveKey { time, value })
            .collect();
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Constant curve
    pub fn constant(value: f32) -> Self {
        Self::new(&[(0.0, value)])
    }

    /// Add a key, keeping time order
    pub fn with_key(mut self, time: f32, value: f32) -> Self {
        let idx = self.keys.partition_point(|k| k.time <= time);
        self.keys.insert(idx, CurveKey { time, value });
        self
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Time of the last key (0 for an empty curve)
    pub fn duration(&self) -> f32 {
        self.keys.last().map(|k| k.time).unwrap_or(0.0)
    }

    /// Sample the curve at `time`
    pub fn evaluate(&self, time: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return 0.0,
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        let upper = self.keys.partition_point(|k| k.time <= time);
        let a = self.keys[upper - 1];
        let b = self.keys[upper];
        let span = b.time - a.time;
        if span <= 0.0 {
            return b.value;
        }
        crate::lerp(a.value, b.value, (time - a.time) / span)
    }
}
