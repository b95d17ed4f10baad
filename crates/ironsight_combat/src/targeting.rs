//! Crosshair and muzzle trace resolution
//!
//! A shot is resolved in two passes. The crosshair trace finds what the
//! player is looking at. Each muzzle then traces toward that point, a little
//! past it, so geometry between the barrel and the target still blocks.

use crate::config::TargetingConfig;
use crate::query::{SceneQuery, TraceHit, Viewport};
use ironsight_math::Vec3;

/// Result of the crosshair trace
#[derive(Debug, Clone, PartialEq)]
pub struct AimTrace {
    pub start: Vec3,
    pub end: Vec3,
    pub hit: Option<TraceHit>,
}

impl AimTrace {
    /// Impact point, or the trace end on a miss
    pub fn aim_point(&self) -> Vec3 {
        self.hit.as_ref().map(|hit| hit.location).unwrap_or(self.end)
    }
}

/// Where one muzzle's beam ends
#[derive(Debug, Clone, PartialEq)]
pub struct BeamEnd {
    pub muzzle: Vec3,
    /// Beam end point
    pub end: Vec3,
    /// Blocking hit of the muzzle trace
    pub hit: Option<TraceHit>,
}

/// Beam ends for both hands
#[derive(Debug, Clone, PartialEq)]
pub struct DualBeam {
    pub aim: AimTrace,
    pub left: BeamEnd,
    pub right: BeamEnd,
}

impl DualBeam {
    /// Whether either muzzle trace hit something
    pub fn any_hit(&self) -> bool {
        self.left.hit.is_some() || self.right.hit.is_some()
    }
}

/// Crosshair/barrel trace service
#[derive(Debug, Clone, Default)]
pub struct TargetingService {
    config: TargetingConfig,
}

impl TargetingService {
    pub fn new(config: TargetingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TargetingConfig {
        &self.config
    }

    /// Trace from the crosshair into the world.
    /// Returns `None` when the viewport is missing or cannot deproject.
    pub fn trace_under_aim(&self, viewport: &dyn Viewport, scene: &dyn SceneQuery) -> Option<AimTrace> {
        let size = viewport.viewport_size()?;
        let crosshair = size * 0.5 + self.config.crosshair_offset;
        let ray = viewport.deproject(crosshair)?;

        let start = ray.origin;
        let end = ray.at(self.config.trace_length);
        let hit = scene.line_trace(start, end);
        Some(AimTrace { start, end, hit })
    }

    /// Trace from a muzzle toward an aim point
    pub fn trace_from_muzzle(&self, scene: &dyn SceneQuery, muzzle: Vec3, aim_point: Vec3) -> BeamEnd {
        let end = muzzle + (aim_point - muzzle) * self.config.trace_multiplier;
        match scene.line_trace(muzzle, end) {
            Some(hit) => BeamEnd {
                muzzle,
                end: hit.location,
                hit: Some(hit),
            },
            None => BeamEnd {
                muzzle,
                end: aim_point,
                hit: None,
            },
        }
    }

    /// Resolve the beam ends for both muzzles with a single crosshair trace
    pub fn resolve_dual_beam_ends(
        &self,
        viewport: &dyn Viewport,
        scene: &dyn SceneQuery,
        left_muzzle: Vec3,
        right_muzzle: Vec3,
    ) -> Option<DualBeam> {
        let aim = self.trace_under_aim(viewport, scene)?;
        let aim_point = aim.aim_point();
        let left = self.trace_from_muzzle(scene, left_muzzle, aim_point);
        let right = self.trace_from_muzzle(scene, right_muzzle, aim_point);
        Some(DualBeam { aim, left, right })
    }
}
