//! Ironsight Combat - Weapons, Damage and the Player Combat Loop
//!
//! This crate provides the player-side combat model for Ironsight.
//!
//! # Features
//!
//! - Combat state machine gating fire, reload, aim and dead-eye
//! - Weapon magazine model with a single ammo-transfer algorithm
//! - World items as a pickup capability plus a weapon/ammo payload
//! - Crosshair and dual-muzzle beam resolution over a scene query trait
//! - Health that dies exactly once
//!
//! # Example
//!
//! ```ignore
//! use ironsight_combat::prelude::*;
//!
//! let mut combat = CombatController::new(CombatConfig::default());
//! let mut pistol = WeaponResource::from_config(&WeaponConfig::default());
//! let mut ledger = AmmoLedger::new().with_type(AmmoType::Pistol, 85);
//!
//! if combat.fire(Some(&mut pistol)) {
//!     // trace and apply damage
//! }
//! combat.update(0.016, Some(&mut pistol), &mut ledger);
//! for event in combat.drain_events() {
//!     // play sounds, montages
//! }
//! ```

pub mod config;
pub mod controller;
pub mod damage;
pub mod health;
pub mod item;
pub mod query;
pub mod targeting;
pub mod weapon;

pub mod prelude {
    pub use crate::config::{CombatConfig, TargetingConfig, WeaponConfig};
    pub use crate::controller::{CombatController, CombatEvent, CombatState};
    pub use crate::damage::{DamageInfo, DamageType};
    pub use crate::health::Health;
    pub use crate::item::{ItemKind, WorldItem};
    pub use crate::query::{SceneQuery, TraceHit, Viewport};
    pub use crate::targeting::{AimTrace, BeamEnd, DualBeam, TargetingService};
    pub use crate::weapon::{throw_impulse, ThrowConfig, WeaponResource, WeaponType};
    pub use ironsight_inventory::{AmmoLedger, AmmoPickup, AmmoType};
}

pub use prelude::*;
