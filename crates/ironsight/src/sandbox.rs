//! Minimal scene for headless runs
//!
//! Actors are spheres and the camera is a pinhole. This is enough to drive
//! the arena without an engine: traces hit the nearest sphere and the upper
//! part of a character's sphere counts as its head.

use ironsight_combat::{SceneQuery, TraceHit, Viewport};
use ironsight_core::ActorId;
use ironsight_math::{radians, Ray, Rotator, Vec2, Vec3};

/// Bone reported for hits above a character's head line
pub const HEAD_BONE: &str = "head";

/// Bone reported for other character hits
pub const BODY_BONE: &str = "spine_01";

/// A sphere in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneActor {
    pub id: ActorId,
    pub center: Vec3,
    pub radius: f32,
    /// Height above the center where the head starts. Only characters have
    /// bones.
    pub head_height: Option<f32>,
}

/// Scene made of spheres
#[derive(Debug, Clone, Default)]
pub struct SphereScene {
    actors: Vec<SceneActor>,
}

impl SphereScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prop (item, barrel)
    pub fn add_prop(&mut self, id: ActorId, center: Vec3, radius: f32) {
        self.remove(id);
        self.actors.push(SceneActor {
            id,
            center,
            radius,
            head_height: None,
        });
    }

    /// Add a character with a head
    pub fn add_character(&mut self, id: ActorId, center: Vec3, radius: f32, head_height: f32) {
        self.remove(id);
        self.actors.push(SceneActor {
            id,
            center,
            radius,
            head_height: Some(head_height),
        });
    }

    pub fn remove(&mut self, id: ActorId) -> bool {
        let before = self.actors.len();
        self.actors.retain(|actor| actor.id != id);
        self.actors.len() != before
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Distance along `dir` from `start` to the first surface of `actor`
    fn entry_distance(actor: &SceneActor, start: Vec3, dir: Vec3, max: f32) -> Option<f32> {
        let oc = start - actor.center;
        let b = oc.dot(dir);
        let c = oc.dot(oc) - actor.radius * actor.radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let t = if -b - root >= 0.0 { -b - root } else { -b + root };
        (0.0..=max).contains(&t).then_some(t)
    }
}

impl SceneQuery for SphereScene {
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceHit> {
        let length = start.distance(end);
        if length <= f32::EPSILON {
            return None;
        }
        let dir = (end - start).normalize();

        let (actor, t) = self
            .actors
            .iter()
            .filter_map(|actor| Self::entry_distance(actor, start, dir, length).map(|t| (actor, t)))
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        let location = start + dir * t;
        let hit = TraceHit::actor(location, actor.id);
        Some(match actor.head_height {
            Some(head) if location.z >= actor.center.z + head => hit.with_bone(HEAD_BONE),
            Some(_) => hit.with_bone(BODY_BONE),
            None => hit,
        })
    }

    fn sphere_overlap(&self, center: Vec3, radius: f32) -> Vec<ActorId> {
        self.actors
            .iter()
            .filter(|actor| actor.center.distance(center) <= radius + actor.radius)
            .map(|actor| actor.id)
            .collect()
    }
}

/// Pinhole camera
#[derive(Debug, Clone, PartialEq)]
pub struct PinholeViewport {
    pub size: Vec2,
    /// Horizontal field of view in degrees
    pub fov: f32,
    pub location: Vec3,
    pub rotation: Rotator,
}

impl PinholeViewport {
    pub fn new(size: Vec2, fov: f32) -> Self {
        Self {
            size,
            fov,
            location: Vec3::ZERO,
            rotation: Rotator::ZERO,
        }
    }

    pub fn set_camera(&mut self, location: Vec3, rotation: Rotator) {
        self.location = location;
        self.rotation = rotation;
    }
}

impl Viewport for PinholeViewport {
    fn viewport_size(&self) -> Option<Vec2> {
        (self.size.x > 0.0 && self.size.y > 0.0).then_some(self.size)
    }

    fn deproject(&self, screen: Vec2) -> Option<Ray> {
        let half_width = self.size.x * 0.5;
        if half_width <= 0.0 {
            return None;
        }
        let scale = radians(self.fov * 0.5).tan() / half_width;
        let dx = (screen.x - half_width) * scale;
        let dy = (self.size.y * 0.5 - screen.y) * scale;

        let direction = self.rotation.forward() + self.rotation.right() * dx + self.rotation.up() * dy;
        Some(Ray::new(self.location, direction))
    }
}
