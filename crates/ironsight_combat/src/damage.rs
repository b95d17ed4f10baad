//! Damage types and information

use ironsight_core::ActorId;
use ironsight_math::Vec3;
use serde::{Deserialize, Serialize};

/// What dealt the damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    /// Weapon hit
    Bullet,
    /// Enemy melee swing
    Melee,
    /// Explosive blast
    Explosion,
}

impl Default for DamageType {
    fn default() -> Self {
        Self::Bullet
    }
}

/// Information about a damage instance
#[derive(Debug, Clone, PartialEq)]
pub struct DamageInfo {
    /// Damage amount
    pub amount: f32,
    /// Type of damage
    pub damage_type: DamageType,
    /// Actor responsible (if any)
    pub instigator: Option<ActorId>,
    /// World position of the hit
    pub hit_location: Option<Vec3>,
    /// Whether the hit landed on the head bone
    pub headshot: bool,
}

impl DamageInfo {
    /// Create new damage info
    pub fn new(amount: f32, damage_type: DamageType) -> Self {
        Self {
            amount,
            damage_type,
            instigator: None,
            hit_location: None,
            headshot: false,
        }
    }

    /// Set the instigator
    pub fn with_instigator(mut self, instigator: ActorId) -> Self {
        self.instigator = Some(instigator);
        self
    }

    /// Set the hit location
    pub fn with_hit_location(mut self, location: Vec3) -> Self {
        self.hit_location = Some(location);
        self
    }

    /// Mark as headshot
    pub fn with_headshot(mut self, headshot: bool) -> Self {
        self.headshot = headshot;
        self
    }
}

impl Default for DamageInfo {
    fn default() -> Self {
        Self::new(0.0, DamageType::Bullet)
    }
}
