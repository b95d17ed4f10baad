//! Ammo types, the carried-ammo ledger and ammo pickups

use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ammunition type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoType {
    /// 9mm pistol rounds
    Pistol,
    /// Assault rifle rounds
    Rifle,
}

impl Default for AmmoType {
    fn default() -> Self {
        Self::Pistol
    }
}

/// Rounds carried by a character, per ammo type.
///
/// Only types registered at spawn are tracked. Counts are unsigned, so
/// they can never go negative, and reads of an unregistered type return 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoLedger {
    counts: HashMap<AmmoType, u32>,
}

impl AmmoLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type with a starting count
    pub fn with_type(mut self, ammo_type: AmmoType, count: u32) -> Self {
        self.register(ammo_type, count);
        self
    }

    /// Register (or reset) a type with a starting count
    pub fn register(&mut self, ammo_type: AmmoType, count: u32) {
        self.counts.insert(ammo_type, count);
    }

    /// Whether the ledger tracks this type
    pub fn tracks(&self, ammo_type: AmmoType) -> bool {
        self.counts.contains_key(&ammo_type)
    }

    /// Rounds carried of a type (0 if untracked)
    pub fn count(&self, ammo_type: AmmoType) -> u32 {
        self.counts.get(&ammo_type).copied().unwrap_or(0)
    }

    /// Whether at least one round of the type is carried
    pub fn carries(&self, ammo_type: AmmoType) -> bool {
        self.count(ammo_type) > 0
    }

    /// Add picked-up rounds. Untracked types are rejected.
    /// Returns the new count.
    pub fn add(&mut self, ammo_type: AmmoType, amount: u32) -> Result<u32> {
        let count = self
            .counts
            .get_mut(&ammo_type)
            .ok_or(InventoryError::UnknownAmmoType(ammo_type))?;
        *count = count.saturating_add(amount);
        Ok(*count)
    }

    /// Take up to `amount` rounds out of the ledger and return how many
    /// were actually taken. Never overdraws.
    pub fn withdraw(&mut self, ammo_type: AmmoType, amount: u32) -> u32 {
        match self.counts.get_mut(&ammo_type) {
            Some(count) => {
                let taken = amount.min(*count);
                *count -= taken;
                taken
            }
            None => 0,
        }
    }

    /// Iterate tracked types and counts
    pub fn iter(&self) -> impl Iterator<Item = (AmmoType, u32)> + '_ {
        self.counts.iter().map(|(t, c)| (*t, *c))
    }
}

/// Ammo pickup payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoPickup {
    /// Type of rounds in the box
    pub ammo_type: AmmoType,
    /// Number of rounds
    pub count: u32,
}

impl AmmoPickup {
    pub fn new(ammo_type: AmmoType, count: u32) -> Self {
        Self { ammo_type, count }
    }
}
