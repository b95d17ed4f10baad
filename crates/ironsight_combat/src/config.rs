//! Combat configuration

use crate::weapon::WeaponType;
use ironsight_inventory::{AmmoType, ItemRarity};
use ironsight_math::Vec2;
use serde::{Deserialize, Serialize};

/// Combat loop tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Seconds between automatic shots
    pub auto_fire_rate: f32,
    /// Global time dilation while dead-eye is active
    pub dead_eye_time_dilation: f32,
    /// Reload length when no animation collaborator reports completion.
    /// `None` waits for an explicit `finish_reload`.
    pub reload_duration: Option<f32>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            auto_fire_rate: 0.2,
            dead_eye_time_dilation: 0.1,
            reload_duration: Some(1.0),
        }
    }
}

impl CombatConfig {
    /// Builder: set the automatic fire interval
    pub fn with_auto_fire_rate(mut self, seconds: f32) -> Self {
        self.auto_fire_rate = seconds;
        self
    }

    /// Builder: set the reload duration
    pub fn with_reload_duration(mut self, seconds: Option<f32>) -> Self {
        self.reload_duration = seconds;
        self
    }
}

/// Crosshair trace tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    /// Length of the crosshair trace
    pub trace_length: f32,
    /// Muzzle trace overshoot past the aim point
    pub trace_multiplier: f32,
    /// Crosshair offset from the viewport centre, in pixels
    pub crosshair_offset: Vec2,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            trace_length: 50_000.0,
            trace_multiplier: 1.25,
            crosshair_offset: Vec2::new(0.0, -50.0),
        }
    }
}

/// Weapon definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub name: String,
    pub weapon_type: WeaponType,
    pub rarity: ItemRarity,
    pub ammo_type: AmmoType,
    pub magazine_capacity: u32,
    /// Rounds loaded at spawn (clamped to capacity)
    pub loaded_ammo: u32,
    pub damage: f32,
    pub headshot_damage: f32,
    /// Montage section played on reload
    pub reload_section: String,
    /// Fires from both hands
    pub dual_wield: bool,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self::pistol()
    }
}

impl WeaponConfig {
    /// Twin 9mm pistols
    pub fn pistol() -> Self {
        Self {
            name: "Pistol".to_string(),
            weapon_type: WeaponType::Pistol,
            rarity: ItemRarity::Common,
            ammo_type: AmmoType::Pistol,
            magazine_capacity: 15,
            loaded_ammo: 15,
            damage: 20.0,
            headshot_damage: 50.0,
            reload_section: "ReloadPistol".to_string(),
            dual_wield: true,
        }
    }

    /// Assault rifle
    pub fn assault_rifle() -> Self {
        Self {
            name: "Assault Rifle".to_string(),
            weapon_type: WeaponType::AssaultRifle,
            rarity: ItemRarity::Uncommon,
            ammo_type: AmmoType::Rifle,
            magazine_capacity: 30,
            loaded_ammo: 30,
            damage: 30.0,
            headshot_damage: 75.0,
            reload_section: "ReloadAR".to_string(),
            dual_wield: false,
        }
    }

    /// Builder: set rounds loaded at spawn
    pub fn with_loaded_ammo(mut self, rounds: u32) -> Self {
        self.loaded_ammo = rounds;
        self
    }

    /// Builder: set rarity
    pub fn with_rarity(mut self, rarity: ItemRarity) -> Self {
        self.rarity = rarity;
        self
    }
}
