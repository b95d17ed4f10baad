//! Enemy configuration

use ironsight_math::Vec3;
use serde::{Deserialize, Serialize};

/// Enemy tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub max_health: f32,
    /// Bone name that counts as a headshot
    pub head_bone: String,
    /// Seconds the health bar stays up after a hit
    pub health_bar_display_time: f32,
    /// Random hit-react cooldown and stun length range
    pub hit_react_time_min: f32,
    pub hit_react_time_max: f32,
    /// Chance in [0, 1] that a hit stuns
    pub stun_chance: f32,
    /// Melee damage dealt to the player
    pub base_damage: f32,
    /// Cooldown between attacks
    pub attack_wait_time: f32,
    /// How long the weapon collision stays active per swing
    pub attack_swing_time: f32,
    /// Distance from the enemy at which its swing lands
    pub weapon_reach: f32,
    /// Radius of the sphere that picks up a target
    pub aggro_radius: f32,
    /// Radius inside which the enemy attacks
    pub combat_range: f32,
    /// Seconds between death and removal
    pub death_time: f32,
    /// Seconds a floating hit number stays up
    pub hit_number_lifetime: f32,
    /// Patrol points relative to the spawn location
    pub patrol_point: Vec3,
    pub patrol_point2: Vec3,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            head_bone: "head".to_string(),
            health_bar_display_time: 4.0,
            hit_react_time_min: 0.5,
            hit_react_time_max: 3.0,
            stun_chance: 0.5,
            base_damage: 20.0,
            attack_wait_time: 1.0,
            attack_swing_time: 0.4,
            weapon_reach: 100.0,
            aggro_radius: 600.0,
            combat_range: 150.0,
            death_time: 4.0,
            hit_number_lifetime: 1.5,
            patrol_point: Vec3::new(500.0, 0.0, 0.0),
            patrol_point2: Vec3::new(-500.0, 0.0, 0.0),
        }
    }
}

impl EnemyConfig {
    /// Builder: set max health
    pub fn with_max_health(mut self, health: f32) -> Self {
        self.max_health = health;
        self
    }

    /// Builder: set stun chance
    pub fn with_stun_chance(mut self, chance: f32) -> Self {
        self.stun_chance = chance;
        self
    }
}
