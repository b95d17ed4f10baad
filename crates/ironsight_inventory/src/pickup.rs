//! Pickupable items
//!
//! [`Pickupable`] is the part every world item shares: name, rarity, transform,
//! lifecycle and owner. It drives its own pickup flight and throw settle
//! timer, and reports what happened through [`ItemEvent`]s returned from
//! [`Pickupable::update`].

use crate::error::{InventoryError, Result};
use crate::interp::{InterpConfig, InterpTarget, ItemInterp};
use crate::item::ItemRarity;
use crate::lifecycle::{ItemLifecycle, ItemState, PresentationFlags};
use ironsight_core::{ActorId, TimerSet};
use ironsight_math::{Rotator, Vec3};

/// World transform of an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    pub location: Vec3,
    pub rotation: Rotator,
    /// Uniform scale
    pub scale: f32,
}

impl ItemTransform {
    /// Unrotated, unscaled transform at a location
    pub fn at(location: Vec3) -> Self {
        Self {
            location,
            rotation: Rotator::ZERO,
            scale: 1.0,
        }
    }
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Item events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    /// Flight reached its slot; the owner should take the item
    InterpFinished { owner: ActorId, slot: usize },
    /// Flight ended without an owner to receive it; item is back in Pickup
    InterpCancelled { slot: usize },
    /// Thrown item came to rest and can be picked up again
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemTimer {
    Interp,
    Settle,
}

/// Shared state of a world item
#[derive(Debug, Clone)]
pub struct Pickupable {
    name: String,
    rarity: ItemRarity,
    transform: ItemTransform,
    lifecycle: ItemLifecycle,
    owner: Option<ActorId>,
    hovered: bool,
    interp: Option<ItemInterp>,
    timers: TimerSet<ItemTimer>,
    config: InterpConfig,
}

impl Pickupable {
    /// Create an item lying in the world
    pub fn new(name: impl Into<String>, rarity: ItemRarity, transform: ItemTransform) -> Self {
        Self {
            name: name.into(),
            rarity,
            transform,
            lifecycle: ItemLifecycle::new(ItemState::Pickup),
            owner: None,
            hovered: false,
            interp: None,
            timers: TimerSet::new(),
            config: InterpConfig::default(),
        }
    }

    /// Create an item that starts out held by `owner`
    pub fn equipped(name: impl Into<String>, rarity: ItemRarity, owner: ActorId) -> Self {
        let mut item = Self::new(name, rarity, ItemTransform::default());
        item.lifecycle = ItemLifecycle::new(ItemState::Equipped);
        item.owner = Some(owner);
        item
    }

    /// Builder: set flight settings
    pub fn with_config(mut self, config: InterpConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rarity(&self) -> ItemRarity {
        self.rarity
    }

    pub fn state(&self) -> ItemState {
        self.lifecycle.state()
    }

    /// Presentation flags for the current state
    pub fn flags(&self) -> &PresentationFlags {
        self.lifecycle.flags()
    }

    /// Owning character, set only while flying to it or held by it
    pub fn owner(&self) -> Option<ActorId> {
        self.owner
    }

    pub fn transform(&self) -> &ItemTransform {
        &self.transform
    }

    /// Write back a transform computed by the host (physics, attachment)
    pub fn set_transform(&mut self, transform: ItemTransform) {
        self.transform = transform;
    }

    /// Active flight, if any
    pub fn interp(&self) -> Option<&ItemInterp> {
        self.interp.as_ref()
    }

    /// Mark whether the player's crosshair is on this item
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Whether the pickup prompt should be drawn
    pub fn prompt_visible(&self) -> bool {
        self.hovered && self.flags().prompt_allowed
    }

    /// Whether a hover trace can land on this item
    pub fn is_traceable(&self) -> bool {
        self.flags().trace_blocks_visibility
    }

    /// Begin flying toward `owner`'s slot
    pub fn start_interp(&mut self, owner: ActorId, slot: usize, target: &InterpTarget) -> Result<()> {
        self.lifecycle.set_state(ItemState::EquipInterping)?;
        self.owner = Some(owner);
        self.hovered = false;
        self.interp = Some(ItemInterp::begin(&self.transform, target, slot));
        self.timers.schedule(ItemTimer::Interp, self.config.z_curve_time);
        log::debug!("{} interping to slot {} of {}", self.name, slot, owner);
        Ok(())
    }

    /// Abort a flight, or refuse a finished one, and return to Pickup.
    /// Returns false if the item was not EquipInterping.
    pub fn cancel_interp(&mut self) -> bool {
        if self.state() != ItemState::EquipInterping {
            return false;
        }
        self.interp = None;
        self.timers.cancel(ItemTimer::Interp);
        self.transform.scale = 1.0;
        self.owner = None;
        if let Err(e) = self.lifecycle.set_state(ItemState::Pickup) {
            log::warn!("{}: cancel failed: {}", self.name, e);
            return false;
        }
        true
    }

    /// Take a finished flight into the owner's hands
    pub fn equip(&mut self) -> Result<()> {
        self.expect_owned()?;
        self.lifecycle.set_state(ItemState::Equipped)
    }

    /// Take a finished flight into the owner's inventory
    pub fn consume(&mut self) -> Result<()> {
        self.expect_owned()?;
        self.lifecycle.set_state(ItemState::PickedUp)?;
        self.owner = None;
        Ok(())
    }

    /// Release a held item into the world. It falls until the settle timer
    /// fires and then returns to Pickup.
    pub fn drop_item(&mut self) -> Result<()> {
        self.lifecycle.set_state(ItemState::Falling)?;
        self.owner = None;
        self.timers.schedule(ItemTimer::Settle, self.config.settle_time);
        Ok(())
    }

    fn expect_owned(&self) -> Result<()> {
        if self.interp.is_some() || self.owner.is_none() {
            return Err(InventoryError::WrongState {
                expected: ItemState::EquipInterping,
                actual: self.state(),
            });
        }
        Ok(())
    }

    /// Advance flight and timers.
    ///
    /// `target` is the owner's current slot location and camera yaw, or
    /// `None` if the owner can no longer be found. Without a target the item
    /// holds still, and if the flight ends that way it is cancelled.
    pub fn update(&mut self, delta_time: f32, target: Option<&InterpTarget>) -> Vec<ItemEvent> {
        if let (Some(interp), Some(target)) = (&self.interp, target) {
            let elapsed = (self.timers.elapsed(ItemTimer::Interp).unwrap_or(0.0) + delta_time)
                .min(self.config.z_curve_time);
            interp.step(&mut self.transform, target, elapsed, delta_time, &self.config);
        }

        let mut events = Vec::new();
        for timer in self.timers.update(delta_time) {
            match timer {
                ItemTimer::Interp => events.extend(self.finish_interp(target.is_some())),
                ItemTimer::Settle => {
                    if let Err(e) = self.lifecycle.set_state(ItemState::Pickup) {
                        log::warn!("{}: settle from unexpected state: {}", self.name, e);
                        continue;
                    }
                    events.push(ItemEvent::Settled);
                }
            }
        }
        events
    }

    fn finish_interp(&mut self, owner_present: bool) -> Option<ItemEvent> {
        let owner = self.owner.filter(|_| owner_present);
        match owner {
            Some(owner) => {
                let interp = self.interp.take()?;
                self.transform.scale = 1.0;
                Some(ItemEvent::InterpFinished {
                    owner,
                    slot: interp.slot,
                })
            }
            None => {
                log::debug!("{}: owner gone at end of flight", self.name);
                let slot = self.interp.map(|interp| interp.slot)?;
                self.cancel_interp();
                Some(ItemEvent::InterpCancelled { slot })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn owner() -> ActorId {
        ActorId::new(1, 0)
    }

    fn fly(item: &mut Pickupable, target: Option<&InterpTarget>, seconds: f32) -> Vec<ItemEvent> {
        let mut events = Vec::new();
        let steps = (seconds / DT).ceil() as usize;
        for _ in 0..steps {
            events.extend(item.update(DT, target));
        }
        events
    }

    #[test]
    fn test_flight_lands_in_slot() {
        let mut item = Pickupable::new("Pistol", ItemRarity::Rare, ItemTransform::at(Vec3::ZERO));
        let target = InterpTarget::new(Vec3::new(200.0, 50.0, 120.0), 0.0);
        item.start_interp(owner(), 3, &target).unwrap();
        assert_eq!(item.state(), ItemState::EquipInterping);
        assert!(!item.is_traceable());

        let events = fly(&mut item, Some(&target), 0.8);
        assert_eq!(
            events,
            vec![ItemEvent::InterpFinished {
                owner: owner(),
                slot: 3
            }]
        );
        assert_relative_eq!(item.transform().location.z, 120.0, epsilon = 1e-3);
        assert_relative_eq!(item.transform().location.x, 200.0, epsilon = 1.0);
        assert_relative_eq!(item.transform().scale, 1.0);

        item.equip().unwrap();
        assert_eq!(item.state(), ItemState::Equipped);
        assert_eq!(item.owner(), Some(owner()));
    }

    #[test]
    fn test_owner_gone_cancels_flight() {
        let mut item = Pickupable::new("Ammo", ItemRarity::Common, ItemTransform::default());
        let target = InterpTarget::new(Vec3::new(0.0, 0.0, 100.0), 0.0);
        item.start_interp(owner(), 1, &target).unwrap();

        fly(&mut item, Some(&target), 0.2);
        let held = item.transform().location;
        let events = fly(&mut item, None, 0.6);

        assert_eq!(events, vec![ItemEvent::InterpCancelled { slot: 1 }]);
        assert_eq!(item.state(), ItemState::Pickup);
        assert_eq!(item.owner(), None);
        assert_eq!(item.transform().location, held);
    }

    #[test]
    fn test_equip_requires_finished_flight() {
        let mut item = Pickupable::new("Rifle", ItemRarity::Common, ItemTransform::default());
        let target = InterpTarget::new(Vec3::ZERO, 0.0);
        item.start_interp(owner(), 0, &target).unwrap();
        assert!(item.equip().is_err());
    }

    #[test]
    fn test_drop_then_settle() {
        let mut item = Pickupable::equipped("Pistol", ItemRarity::Damaged, owner());
        item.drop_item().unwrap();
        assert_eq!(item.state(), ItemState::Falling);
        assert!(item.flags().simulate_physics);
        assert_eq!(item.owner(), None);

        let events = fly(&mut item, None, 0.75);
        assert_eq!(events, vec![ItemEvent::Settled]);
        assert_eq!(item.state(), ItemState::Pickup);
    }

    #[test]
    fn test_prompt_needs_pickup_state() {
        let mut item = Pickupable::new("Pistol", ItemRarity::Common, ItemTransform::default());
        item.set_hovered(true);
        assert!(item.prompt_visible());

        let mut held = Pickupable::equipped("Pistol", ItemRarity::Common, owner());
        held.set_hovered(true);
        assert!(!held.prompt_visible());
    }

    #[test]
    fn test_refuse_finished_flight() {
        let mut item = Pickupable::new("Ammo", ItemRarity::Common, ItemTransform::default());
        let target = InterpTarget::new(Vec3::ZERO, 0.0);
        item.start_interp(owner(), 2, &target).unwrap();
        fly(&mut item, Some(&target), 0.8);
        assert!(item.interp().is_none());

        assert!(item.cancel_interp());
        assert_eq!(item.state(), ItemState::Pickup);
        assert!(!item.cancel_interp());
    }

    #[test]
    fn test_consume_clears_owner() {
        let mut item = Pickupable::new("Ammo", ItemRarity::Common, ItemTransform::default());
        let target = InterpTarget::new(Vec3::ZERO, 0.0);
        item.start_interp(owner(), 2, &target).unwrap();
        fly(&mut item, Some(&target), 0.8);
        item.consume().unwrap();
        assert_eq!(item.state(), ItemState::PickedUp);
        assert!(!item.flags().mesh_visible);
        assert_eq!(item.owner(), None);
    }

    #[test]
    fn test_equipped_item_cannot_start_flight() {
        let mut item = Pickupable::equipped("Pistol", ItemRarity::Damaged, owner());
        let before = *item.flags();
        let target = InterpTarget::new(Vec3::ZERO, 0.0);

        assert!(item.start_interp(ActorId::new(2, 0), 1, &target).is_err());
        assert_eq!(item.state(), ItemState::Equipped);
        assert_eq!(*item.flags(), before);
        assert_eq!(item.owner(), Some(owner()));
        assert!(item.interp().is_none());
    }
}
