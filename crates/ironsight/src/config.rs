//! Gameplay configuration
//!
//! Every tunable of the game lives in [`GameplayConfig`]. It is loaded from a
//! TOML or JSON file, picked by extension, and any field the file leaves out
//! keeps its default.

use crate::error::{ConfigError, Result};
use crate::explosive::ExplosiveConfig;
use ironsight_ai::EnemyConfig;
use ironsight_combat::{CombatConfig, TargetingConfig, ThrowConfig, WeaponConfig};
use ironsight_inventory::{AmmoType, InterpConfig, InterpSlotLayout};
use ironsight_math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Files tried by [`GameplayConfig::load`], in order
pub const DEFAULT_CONFIG_PATHS: [&str; 3] = ["ironsight.toml", "config/ironsight.toml", "ironsight.json"];

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "IRONSIGHT_CONFIG";

/// Environment variable overriding the random seed
pub const SEED_ENV: &str = "IRONSIGHT_SEED";

/// Starting stock of one ammo type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoConfig {
    pub ammo_type: AmmoType,
    pub count: u32,
}

impl AmmoConfig {
    pub fn new(ammo_type: AmmoType, count: u32) -> Self {
        Self { ammo_type, count }
    }
}

/// Camera and crosshair feel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimConfig {
    pub default_fov: f32,
    pub zoomed_fov: f32,
    pub zoom_interp_speed: f32,
    /// Controller look rates in degrees per second
    pub hip_turn_rate: f32,
    pub hip_look_up_rate: f32,
    pub aiming_turn_rate: f32,
    pub aiming_look_up_rate: f32,
    /// Mouse sensitivity scale factors
    pub mouse_hip_turn_rate: f32,
    pub mouse_hip_look_up_rate: f32,
    pub mouse_aiming_turn_rate: f32,
    pub mouse_aiming_look_up_rate: f32,
    /// How long each shot widens the crosshair
    pub shoot_time_duration: f32,
    /// Ground speed at which movement spread is maxed out
    pub max_walk_speed: f32,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            default_fov: 90.0,
            zoomed_fov: 30.0,
            zoom_interp_speed: 30.0,
            hip_turn_rate: 90.0,
            hip_look_up_rate: 90.0,
            aiming_turn_rate: 20.0,
            aiming_look_up_rate: 20.0,
            mouse_hip_turn_rate: 1.0,
            mouse_hip_look_up_rate: 1.0,
            mouse_aiming_turn_rate: 0.2,
            mouse_aiming_look_up_rate: 0.2,
            shoot_time_duration: 0.05,
            max_walk_speed: 600.0,
        }
    }
}

/// Player character tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_health: f32,
    /// Ammo types the player can carry, with their starting counts
    pub starting_ammo: Vec<AmmoConfig>,
    /// Weapon in hand at spawn
    pub default_weapon: Option<WeaponConfig>,
    pub aim: AimConfig,
    /// Camera-relative pickup targets. Slot 0 is the weapon slot; its offset
    /// is the camera interp distance (x) and elevation (z).
    pub interp_slots: Vec<InterpSlotLayout>,
    /// Muzzle positions relative to the character, in its yaw frame
    pub left_muzzle_offset: Vec3,
    pub right_muzzle_offset: Vec3,
    /// Radius of the item overlap sphere that enables hover tracing
    pub item_pickup_radius: f32,
    /// Radius within which a melee swing lands on the player
    pub capsule_radius: f32,
    /// Length of the death animation. `None` waits for an explicit
    /// `finish_death`.
    pub death_duration: Option<f32>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            starting_ammo: vec![
                AmmoConfig::new(AmmoType::Pistol, 85),
                AmmoConfig::new(AmmoType::Rifle, 120),
            ],
            default_weapon: Some(WeaponConfig::pistol()),
            aim: AimConfig::default(),
            interp_slots: InterpSlotLayout::default_layout(),
            left_muzzle_offset: Vec3::new(60.0, -25.0, 40.0),
            right_muzzle_offset: Vec3::new(60.0, 25.0, 40.0),
            item_pickup_radius: 150.0,
            capsule_radius: 60.0,
            death_duration: Some(1.0),
        }
    }
}

/// Everything the gameplay layer can be tuned with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub player: PlayerConfig,
    pub combat: CombatConfig,
    pub targeting: TargetingConfig,
    pub interp: InterpConfig,
    pub throw: ThrowConfig,
    pub enemy: EnemyConfig,
    pub explosive: ExplosiveConfig,
    /// Seed for the arena's random source
    pub seed: u64,
    /// File this config was loaded from
    #[serde(skip)]
    pub config_path: Option<String>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            combat: CombatConfig::default(),
            targeting: TargetingConfig::default(),
            interp: InterpConfig::default(),
            throw: ThrowConfig::default(),
            enemy: EnemyConfig::default(),
            explosive: ExplosiveConfig::default(),
            seed: 0x1215,
            config_path: None,
        }
    }
}

impl GameplayConfig {
    /// Load from `IRONSIGHT_CONFIG` or the first default path that exists,
    /// then apply environment overrides. Falls back to defaults.
    pub fn load() -> Self {
        let mut config = Self::default();

        let env_path = std::env::var(CONFIG_PATH_ENV).ok();
        let candidates = env_path.iter().map(String::as_str).chain(DEFAULT_CONFIG_PATHS);
        for path in candidates {
            if !Path::new(path).exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(loaded) => {
                    config = loaded;
                    config.config_path = Some(path.to_string());
                    log::info!("Loaded gameplay config from {}", path);
                    break;
                }
                Err(e) => log::warn!("Skipping {}: {}", path, e),
            }
        }
        if config.config_path.is_none() {
            log::info!("No gameplay config found, using defaults");
        }

        if let Ok(seed) = std::env::var(SEED_ENV) {
            match seed.parse() {
                Ok(seed) => {
                    config.seed = seed;
                    log::info!("Seed from env: {}", seed);
                }
                Err(_) => log::warn!("Ignoring non-numeric {}={}", SEED_ENV, seed),
            }
        }

        config
    }

    /// Load a config file; the format follows the extension
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ConfigError::UnsupportedExtension(other.unwrap_or_default().to_string())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Log the settings that matter most when reading a session log
    pub fn print_summary(&self) {
        log::info!("Gameplay Configuration:");
        match &self.player.default_weapon {
            Some(weapon) => log::info!("  Default weapon: {} ({} rounds)", weapon.name, weapon.loaded_ammo),
            None => log::info!("  Default weapon: none"),
        }
        for ammo in &self.player.starting_ammo {
            log::info!("  Starting ammo: {:?} x{}", ammo.ammo_type, ammo.count);
        }
        log::info!(
            "  Auto-fire: {}s, dead-eye dilation: {}",
            self.combat.auto_fire_rate,
            self.combat.dead_eye_time_dilation
        );
        log::info!("  Enemy health: {}, stun chance: {}", self.enemy.max_health, self.enemy.stun_chance);
        log::info!("  Seed: {}", self.seed);
        if let Some(path) = &self.config_path {
            log::info!("  Config: {}", path);
        }
    }
}
