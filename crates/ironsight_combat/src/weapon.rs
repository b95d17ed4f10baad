//! Weapon resource model

use crate::config::WeaponConfig;
use ironsight_core::RandomSource;
use ironsight_inventory::AmmoType;
use ironsight_math::{Rotator, Vec3};
use serde::{Deserialize, Serialize};

/// Weapon family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    Pistol,
    AssaultRifle,
}

impl Default for WeaponType {
    fn default() -> Self {
        Self::Pistol
    }
}

/// Magazine and damage data owned by a single weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponResource {
    weapon_type: WeaponType,
    ammo_type: AmmoType,
    ammo: u32,
    capacity: u32,
    damage: f32,
    headshot_damage: f32,
    reload_section: String,
    dual_wield: bool,
}

impl WeaponResource {
    /// Build from a weapon definition
    pub fn from_config(config: &WeaponConfig) -> Self {
        Self {
            weapon_type: config.weapon_type,
            ammo_type: config.ammo_type,
            ammo: config.loaded_ammo.min(config.magazine_capacity),
            capacity: config.magazine_capacity,
            damage: config.damage,
            headshot_damage: config.headshot_damage,
            reload_section: config.reload_section.clone(),
            dual_wield: config.dual_wield,
        }
    }

    /// Builder: set rounds in the magazine (clamped to capacity)
    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = ammo.min(self.capacity);
        self
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    pub fn ammo_type(&self) -> AmmoType {
        self.ammo_type
    }

    /// Rounds in the magazine
    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    /// Magazine capacity
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }

    pub fn headshot_damage(&self) -> f32 {
        self.headshot_damage
    }

    /// Damage for a hit, picking the headshot value when appropriate
    pub fn damage_for(&self, headshot: bool) -> f32 {
        if headshot {
            self.headshot_damage
        } else {
            self.damage
        }
    }

    /// Reload montage section
    pub fn reload_section(&self) -> &str {
        &self.reload_section
    }

    /// Fires from both hands
    pub fn is_dual_wield(&self) -> bool {
        self.dual_wield
    }

    pub fn has_ammo(&self) -> bool {
        self.ammo > 0
    }

    pub fn is_full(&self) -> bool {
        self.ammo >= self.capacity
    }

    /// Rounds needed to fill the magazine
    pub fn empty_space(&self) -> u32 {
        self.capacity - self.ammo
    }

    /// Spend one round. Stays at zero when empty.
    pub fn decrease_ammo(&mut self) {
        self.ammo = self.ammo.saturating_sub(1);
    }

    /// Load `amount` rounds.
    ///
    /// # Panics
    ///
    /// Panics if the magazine would exceed its capacity. Callers size the
    /// transfer from [`WeaponResource::empty_space`].
    pub fn reload_ammo(&mut self, amount: u32) {
        assert!(
            self.ammo.checked_add(amount).map_or(false, |n| n <= self.capacity),
            "Attempted to reload with more than magazine capacity ({} + {} > {})",
            self.ammo,
            amount,
            self.capacity
        );
        self.ammo += amount;
    }

    /// Display string, "ammo/capacity"
    pub fn ammo_display(&self) -> String {
        format!("{}/{}", self.ammo, self.capacity)
    }
}

impl Default for WeaponResource {
    fn default() -> Self {
        Self::from_config(&WeaponConfig::default())
    }
}

/// Throw impulse applied when a weapon is dropped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowConfig {
    /// Impulse magnitude
    pub impulse: f32,
    /// Tilt of the right vector around the forward axis, in degrees
    pub tilt: f32,
    /// Random extra yaw range, in degrees
    pub min_yaw: f32,
    pub max_yaw: f32,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            impulse: 2000.0,
            tilt: -10.0,
            min_yaw: 20.0,
            max_yaw: 35.0,
        }
    }
}

/// Compute the upright rotation and impulse for a thrown weapon.
///
/// Pitch and roll are dropped, the mesh right vector is tilted around its
/// forward vector, then spun by a random yaw.
pub fn throw_impulse<R: RandomSource + ?Sized>(
    rotation: Rotator,
    config: &ThrowConfig,
    rng: &mut R,
) -> (Rotator, Vec3) {
    let upright = rotation.yaw_only();
    let direction = upright.right().rotate_angle_axis(config.tilt, upright.forward());
    let yaw = rng.range_f32(config.min_yaw, config.max_yaw);
    let direction = direction.rotate_angle_axis(yaw, Vec3::Z);
    (upright, direction * config.impulse)
}
