//! Ironsight Inventory - Ammo, Items and Pickup Flight
//!
//! This crate holds the carried-resource and pickup side of the gameplay layer.
//!
//! # Features
//!
//! - Per-type ammo ledger that never goes negative
//! - Item rarity with rating stars
//! - Item lifecycle state machine that owns the collision/visibility flags
//! - Curve-driven flight of picked-up items toward the player
//! - Load-balanced interpolation slots
//!
//! # Example
//!
//! ```ignore
//! use ironsight_inventory::prelude::*;
//!
//! let mut ledger = AmmoLedger::new()
//!     .with_type(AmmoType::Pistol, 85)
//!     .with_type(AmmoType::Rifle, 120);
//!
//! ledger.add(AmmoType::Pistol, 15)?;
//! assert_eq!(ledger.count(AmmoType::Pistol), 100);
//! ```

pub mod ammo;
pub mod error;
pub mod interp;
pub mod item;
pub mod lifecycle;
pub mod pickup;
pub mod slots;

pub mod prelude {
    pub use crate::ammo::{AmmoLedger, AmmoPickup, AmmoType};
    pub use crate::error::{InventoryError, Result};
    pub use crate::interp::{InterpConfig, InterpTarget, ItemInterp};
    pub use crate::item::ItemRarity;
    pub use crate::lifecycle::{CollisionMode, ItemLifecycle, ItemState, PresentationFlags};
    pub use crate::pickup::{ItemEvent, ItemTransform, Pickupable};
    pub use crate::slots::{InterpSlot, InterpSlotLayout, InterpolationSlots, WEAPON_SLOT};
}

pub use prelude::*;
