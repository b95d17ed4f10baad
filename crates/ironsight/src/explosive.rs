//! Explosive barrels

use ironsight_combat::{DamageInfo, DamageType, SceneQuery};
use ironsight_core::ActorId;
use ironsight_math::Vec3;
use serde::{Deserialize, Serialize};

/// Blast tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosiveConfig {
    pub damage: f32,
    /// Radius of the blast sphere
    pub radius: f32,
}

impl Default for ExplosiveConfig {
    fn default() -> Self {
        Self {
            damage: 100.0,
            radius: 300.0,
        }
    }
}

/// A barrel that blows up when shot
#[derive(Debug, Clone)]
pub struct Explosive {
    id: ActorId,
    location: Vec3,
    config: ExplosiveConfig,
    exploded: bool,
}

impl Explosive {
    pub fn new(id: ActorId, location: Vec3, config: ExplosiveConfig) -> Self {
        Self {
            id,
            location,
            config,
            exploded: false,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn location(&self) -> Vec3 {
        self.location
    }

    pub fn is_exploded(&self) -> bool {
        self.exploded
    }

    /// A bullet hit the barrel. Detonates once and returns the blast damage
    /// for every actor inside the blast sphere other than the barrel itself.
    pub fn bullet_hit(&mut self, scene: &dyn SceneQuery, instigator: Option<ActorId>) -> Vec<(ActorId, DamageInfo)> {
        if self.exploded {
            return Vec::new();
        }
        self.exploded = true;

        let mut damage = DamageInfo::new(self.config.damage, DamageType::Explosion).with_hit_location(self.location);
        damage.instigator = instigator;

        let hits: Vec<_> = scene
            .sphere_overlap(self.location, self.config.radius)
            .into_iter()
            .filter(|actor| *actor != self.id)
            .map(|actor| (actor, damage.clone()))
            .collect();
        log::debug!("Explosive {} hit {} actors", self.id, hits.len());
        hits
    }
}
