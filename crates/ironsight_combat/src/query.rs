//! Scene collaborators
//!
//! Traces, overlaps and screen deprojection belong to the host engine. The
//! gameplay code only sees these traits.

use ironsight_core::ActorId;
use ironsight_math::{Ray, Vec2, Vec3};

/// First blocking hit of a line trace
#[derive(Debug, Clone, PartialEq)]
pub struct TraceHit {
    /// World location of the impact
    pub location: Vec3,
    /// Actor that was hit, if any
    pub actor: Option<ActorId>,
    /// Skeletal bone that was hit, if any
    pub bone: Option<String>,
}

impl TraceHit {
    /// Hit on static geometry
    pub fn world(location: Vec3) -> Self {
        Self {
            location,
            actor: None,
            bone: None,
        }
    }

    /// Hit on an actor
    pub fn actor(location: Vec3, actor: ActorId) -> Self {
        Self {
            location,
            actor: Some(actor),
            bone: None,
        }
    }

    /// Builder: set the bone
    pub fn with_bone(mut self, bone: impl Into<String>) -> Self {
        self.bone = Some(bone.into());
        self
    }
}

/// Geometric queries against the world
pub trait SceneQuery {
    /// Trace on the visibility channel from `start` to `end`
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceHit>;

    /// Actors overlapping a sphere
    fn sphere_overlap(&self, center: Vec3, radius: f32) -> Vec<ActorId>;
}

/// Player viewport
pub trait Viewport {
    /// Size in pixels, `None` when there is no viewport
    fn viewport_size(&self) -> Option<Vec2>;

    /// World ray through a screen position, `None` if it cannot be deprojected
    fn deproject(&self, screen: Vec2) -> Option<Ray>;
}
