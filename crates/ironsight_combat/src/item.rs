//! World items: a pickup capability plus what the item actually is

use crate::config::WeaponConfig;
use crate::weapon::{throw_impulse, ThrowConfig, WeaponResource};
use ironsight_core::{ActorId, RandomSource};
use ironsight_inventory::{AmmoPickup, ItemRarity, ItemTransform, Pickupable, Result};
use ironsight_math::Vec3;

/// Payload of a world item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Weapon(WeaponResource),
    Ammo(AmmoPickup),
}

/// An item that exists in the world
#[derive(Debug, Clone)]
pub struct WorldItem {
    pub id: ActorId,
    pub pickup: Pickupable,
    pub kind: ItemKind,
}

impl WorldItem {
    /// Weapon lying in the world
    pub fn weapon(id: ActorId, config: &WeaponConfig, transform: ItemTransform) -> Self {
        Self {
            id,
            pickup: Pickupable::new(config.name.clone(), config.rarity, transform),
            kind: ItemKind::Weapon(WeaponResource::from_config(config)),
        }
    }

    /// Weapon that starts out in `owner`'s hands
    pub fn equipped_weapon(id: ActorId, config: &WeaponConfig, owner: ActorId) -> Self {
        Self {
            id,
            pickup: Pickupable::equipped(config.name.clone(), config.rarity, owner),
            kind: ItemKind::Weapon(WeaponResource::from_config(config)),
        }
    }

    /// Ammo box lying in the world
    pub fn ammo(id: ActorId, ammo: AmmoPickup, transform: ItemTransform) -> Self {
        let name = format!("{:?} Ammo", ammo.ammo_type);
        Self {
            id,
            pickup: Pickupable::new(name, ItemRarity::Common, transform),
            kind: ItemKind::Ammo(ammo),
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(_))
    }

    pub fn as_weapon(&self) -> Option<&WeaponResource> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            ItemKind::Ammo(_) => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut WeaponResource> {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            ItemKind::Ammo(_) => None,
        }
    }

    pub fn as_ammo(&self) -> Option<&AmmoPickup> {
        match &self.kind {
            ItemKind::Ammo(ammo) => Some(ammo),
            ItemKind::Weapon(_) => None,
        }
    }

    /// Drop a held item and throw it. The item keeps its yaw, loses pitch
    /// and roll, and enters Falling. Returns the impulse for the host's
    /// physics to apply.
    pub fn throw<R: RandomSource + ?Sized>(&mut self, config: &ThrowConfig, rng: &mut R) -> Result<Vec3> {
        self.pickup.drop_item()?;
        let mut transform = *self.pickup.transform();
        let (rotation, impulse) = throw_impulse(transform.rotation, config, rng);
        transform.rotation = rotation;
        self.pickup.set_transform(transform);
        log::debug!("Threw {} with impulse {:?}", self.pickup.name(), impulse);
        Ok(impulse)
    }
}
