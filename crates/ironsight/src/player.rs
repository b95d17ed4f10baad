//! Player character
//!
//! The character ties input to the combat controller, the ammo ledger, the
//! held weapon and the interpolation slots. It owns only the weapon in its
//! hands. Every other item lives in [`WorldItems`] and is referred to by id,
//! so an item picked from the world is handed over in
//! [`PlayerCharacter::get_pickup_item`] when its flight ends.

use crate::aim::AimFeel;
use crate::config::{GameplayConfig, PlayerConfig};
use crate::vitals::{PlayerVitals, VitalsEvent};
use crate::world::WorldItems;
use ironsight_combat::{
    BeamEnd, CombatController, CombatEvent, DamageInfo, SceneQuery, TargetingService, ThrowConfig, Viewport,
    WeaponResource, WorldItem,
};
use ironsight_core::{ActorId, RandomSource};
use ironsight_inventory::{AmmoLedger, AmmoPickup, AmmoType, InterpTarget, InterpolationSlots};
use ironsight_math::{Rotator, Vec3};

/// Things the host should present or react to
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Combat(CombatEvent),
    Vitals(VitalsEvent),
    /// A weapon is now in the player's hands
    WeaponEquipped { item: ActorId },
    /// The held weapon was thrown back into the world
    WeaponThrown { item: ActorId, impulse: Vec3 },
    /// Ammo merged into the ledger
    AmmoPickedUp { ammo_type: AmmoType, count: u32 },
    /// An item could not be taken and was left in the world
    PickupRejected { item: ActorId },
    /// Crosshair moved onto another item, or off all items
    HoverChanged { item: Option<ActorId> },
}

/// How a finished pickup flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Weapon is now held
    Equipped,
    /// Item was used up and no longer exists
    Consumed,
    /// Item went back into the world
    Rejected,
}

/// Traced result of one shot
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    /// One beam per muzzle. The last beam belongs to the damage-dealing hand.
    pub beams: Vec<BeamEnd>,
    pub damage: f32,
    pub headshot_damage: f32,
}

impl Shot {
    /// Beam whose hit applies damage
    pub fn damage_beam(&self) -> Option<&BeamEnd> {
        self.beams.last()
    }

    pub fn damage_for(&self, headshot: bool) -> f32 {
        if headshot {
            self.headshot_damage
        } else {
            self.damage
        }
    }
}

/// The player-controlled character
#[derive(Debug, Clone)]
pub struct PlayerCharacter {
    id: ActorId,
    config: PlayerConfig,
    location: Vec3,
    velocity: Vec3,
    in_air: bool,
    camera_location: Vec3,
    camera_rotation: Rotator,
    ledger: AmmoLedger,
    equipped: Option<WorldItem>,
    combat: CombatController,
    aim: AimFeel,
    vitals: PlayerVitals,
    slots: InterpolationSlots,
    overlapped_item_count: u32,
    trace_hit_item: Option<ActorId>,
    trace_hit_item_last_frame: Option<ActorId>,
    events: Vec<PlayerEvent>,
}

impl PlayerCharacter {
    /// Spawn with the configured ledger and an empty hand
    pub fn new(id: ActorId, config: &GameplayConfig, location: Vec3) -> Self {
        let player = config.player.clone();

        let mut ledger = AmmoLedger::new();
        for ammo in &player.starting_ammo {
            ledger.register(ammo.ammo_type, ammo.count);
        }

        Self {
            id,
            location,
            velocity: Vec3::ZERO,
            in_air: false,
            camera_location: location,
            camera_rotation: Rotator::ZERO,
            ledger,
            equipped: None,
            combat: CombatController::new(config.combat.clone()),
            aim: AimFeel::new(player.aim.clone()),
            vitals: PlayerVitals::new(player.max_health, player.death_duration),
            slots: InterpolationSlots::from_layout(&player.interp_slots),
            overlapped_item_count: 0,
            trace_hit_item: None,
            trace_hit_item_last_frame: None,
            events: Vec::new(),
            config: player,
        }
    }

    /// Put the configured default weapon straight into the player's hands.
    /// Returns false if none is configured.
    pub fn equip_default_weapon(&mut self, weapon_id: ActorId) -> bool {
        let Some(weapon) = &self.config.default_weapon else {
            return false;
        };
        let item = WorldItem::equipped_weapon(weapon_id, weapon, self.id);
        log::debug!("Spawned holding {}", item.pickup.name());
        self.events.push(PlayerEvent::WeaponEquipped { item: weapon_id });
        self.equipped = Some(item);
        true
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn location(&self) -> Vec3 {
        self.location
    }

    /// Write back movement computed by the host
    pub fn set_movement(&mut self, location: Vec3, velocity: Vec3, in_air: bool) {
        self.location = location;
        self.velocity = velocity;
        self.in_air = in_air;
    }

    /// Write back the camera pose
    pub fn set_view(&mut self, camera_location: Vec3, camera_rotation: Rotator) {
        self.camera_location = camera_location;
        self.camera_rotation = camera_rotation;
    }

    pub fn camera_rotation(&self) -> Rotator {
        self.camera_rotation
    }

    pub fn ledger(&self) -> &AmmoLedger {
        &self.ledger
    }

    pub fn equipped(&self) -> Option<&WorldItem> {
        self.equipped.as_ref()
    }

    pub fn equipped_weapon(&self) -> Option<&WeaponResource> {
        self.equipped.as_ref().and_then(WorldItem::as_weapon)
    }

    pub fn combat(&self) -> &CombatController {
        &self.combat
    }

    pub fn aim(&self) -> &AimFeel {
        &self.aim
    }

    pub fn vitals(&self) -> &PlayerVitals {
        &self.vitals
    }

    pub fn slots(&self) -> &InterpolationSlots {
        &self.slots
    }

    /// Global time dilation the player's dead-eye asks for
    pub fn time_dilation(&self) -> f32 {
        self.combat.time_dilation()
    }

    pub fn input_enabled(&self) -> bool {
        self.vitals.input_enabled()
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.pump_events();
        std::mem::take(&mut self.events)
    }

    fn pump_events(&mut self) {
        for event in self.combat.drain_events() {
            if matches!(event, CombatEvent::WeaponFired { .. }) {
                self.aim.start_bullet_fire();
            }
            self.events.push(PlayerEvent::Combat(event));
        }
        self.events
            .extend(self.vitals.drain_events().into_iter().map(PlayerEvent::Vitals));
    }

    // Combat input

    pub fn fire_pressed(&mut self) -> bool {
        if !self.input_enabled() {
            return false;
        }
        let fired = self
            .combat
            .fire_pressed(self.equipped.as_mut().and_then(WorldItem::as_weapon_mut));
        self.pump_events();
        fired
    }

    pub fn fire_released(&mut self) {
        self.combat.fire_released();
    }

    pub fn reload_pressed(&mut self) -> bool {
        if !self.input_enabled() {
            return false;
        }
        let started = self
            .combat
            .reload(self.equipped.as_ref().and_then(WorldItem::as_weapon), &self.ledger);
        self.pump_events();
        started
    }

    /// Reload animation reached its refill point
    pub fn finish_reload(&mut self) -> u32 {
        let transferred = self.combat.finish_reload(
            self.equipped.as_mut().and_then(WorldItem::as_weapon_mut),
            &mut self.ledger,
        );
        self.pump_events();
        transferred
    }

    pub fn aiming_pressed(&mut self) {
        if self.input_enabled() {
            self.combat.aiming_pressed();
            self.pump_events();
        }
    }

    pub fn aiming_released(&mut self) {
        self.combat.aiming_released();
        self.pump_events();
    }

    pub fn toggle_dead_eye(&mut self) -> bool {
        if !self.input_enabled() {
            return false;
        }
        let toggled = self.combat.toggle_dead_eye();
        self.pump_events();
        toggled
    }

    // Aiming geometry

    fn local_to_world(&self, offset: Vec3) -> Vec3 {
        let frame = Rotator::from_yaw(self.camera_rotation.yaw);
        self.location + frame.forward() * offset.x + frame.right() * offset.y + frame.up() * offset.z
    }

    /// Left and right muzzle locations
    pub fn muzzle_locations(&self) -> (Vec3, Vec3) {
        (
            self.local_to_world(self.config.left_muzzle_offset),
            self.local_to_world(self.config.right_muzzle_offset),
        )
    }

    /// Trace a shot from the muzzles of the held weapon.
    ///
    /// A dual-wielded weapon traces both hands from one crosshair trace;
    /// otherwise only the right hand fires. Returns `None` without a weapon
    /// or a viewport.
    pub fn resolve_shot(
        &self,
        targeting: &TargetingService,
        viewport: &dyn Viewport,
        scene: &dyn SceneQuery,
    ) -> Option<Shot> {
        let weapon = self.equipped_weapon()?;
        let (left, right) = self.muzzle_locations();

        let beams = if weapon.is_dual_wield() {
            let dual = targeting.resolve_dual_beam_ends(viewport, scene, left, right)?;
            vec![dual.left, dual.right]
        } else {
            let aim = targeting.trace_under_aim(viewport, scene)?;
            vec![targeting.trace_from_muzzle(scene, right, aim.aim_point())]
        };

        Some(Shot {
            beams,
            damage: weapon.damage(),
            headshot_damage: weapon.headshot_damage(),
        })
    }

    // Item hover and pickup

    /// Item overlap sphere entered (`true`) or left (`false`)
    pub fn on_item_overlap(&mut self, entered: bool) {
        self.overlapped_item_count = if entered {
            self.overlapped_item_count + 1
        } else {
            self.overlapped_item_count.saturating_sub(1)
        };
    }

    pub fn overlapped_item_count(&self) -> u32 {
        self.overlapped_item_count
    }

    /// Hover tracing runs while at least one item is close
    pub fn should_trace_for_items(&self) -> bool {
        self.overlapped_item_count > 0
    }

    /// Item under the crosshair
    pub fn trace_hit_item(&self) -> Option<ActorId> {
        self.trace_hit_item
    }

    /// Trace under the crosshair for a pickup-able item and move the pickup
    /// prompt to it
    pub fn trace_for_items(
        &mut self,
        items: &mut WorldItems,
        targeting: &TargetingService,
        viewport: &dyn Viewport,
        scene: &dyn SceneQuery,
    ) {
        self.trace_hit_item = if self.should_trace_for_items() {
            targeting
                .trace_under_aim(viewport, scene)
                .and_then(|aim| aim.hit)
                .and_then(|hit| hit.actor)
                .filter(|id| items.get(*id).map(|item| item.pickup.is_traceable()).unwrap_or(false))
        } else {
            None
        };

        if self.trace_hit_item != self.trace_hit_item_last_frame {
            if let Some(last) = self.trace_hit_item_last_frame.and_then(|id| items.get_mut(id)) {
                last.pickup.set_hovered(false);
            }
            if let Some(current) = self.trace_hit_item.and_then(|id| items.get_mut(id)) {
                current.pickup.set_hovered(true);
            }
            self.events.push(PlayerEvent::HoverChanged {
                item: self.trace_hit_item,
            });
        }
        self.trace_hit_item_last_frame = self.trace_hit_item;
    }

    /// World target of an interpolation slot for the current camera pose
    pub fn interp_target(&self, slot: usize) -> Option<InterpTarget> {
        self.slots
            .world_location(slot, self.camera_location, self.camera_rotation)
            .map(|location| InterpTarget::new(location, self.camera_rotation.yaw))
    }

    /// Select button: start pulling the hovered item toward a slot
    pub fn select_pressed(&mut self, items: &mut WorldItems) -> bool {
        if !self.input_enabled() {
            return false;
        }
        let Some(id) = self.trace_hit_item else {
            return false;
        };
        let Some(item) = items.get_mut(id) else {
            self.trace_hit_item = None;
            return false;
        };

        if let Some(ammo) = item.as_ammo() {
            if !self.ledger.tracks(ammo.ammo_type) {
                log::debug!("Refusing {}: {:?} ammo is not carried", item.pickup.name(), ammo.ammo_type);
                self.events.push(PlayerEvent::PickupRejected { item: id });
                return false;
            }
        }

        let slot = self.slots.slot_for(item.is_weapon());
        let Some(target) = self.interp_target(slot) else {
            return false;
        };
        if let Err(e) = item.pickup.start_interp(self.id, slot, &target) {
            log::debug!("Select ignored: {}", e);
            return false;
        }
        self.slots.adjust_occupancy(slot, 1);
        true
    }

    /// A flight toward this player's slot ended
    pub fn release_slot(&mut self, slot: usize) {
        self.slots.adjust_occupancy(slot, -1);
    }

    /// Take an item whose flight finished. Weapons replace the held weapon,
    /// which is thrown into `items`. Ammo goes into the ledger and the item is
    /// consumed. A refused item is returned to `items` in Pickup.
    pub fn get_pickup_item<R: RandomSource + ?Sized>(
        &mut self,
        item: WorldItem,
        items: &mut WorldItems,
        throw: &ThrowConfig,
        rng: &mut R,
    ) -> PickupOutcome {
        let outcome = match item.as_ammo().copied() {
            Some(ammo) => self.pickup_ammo(item, ammo, items),
            None => self.swap_weapon(item, items, throw, rng),
        };
        self.pump_events();
        outcome
    }

    fn reject(&mut self, mut item: WorldItem, items: &mut WorldItems) -> PickupOutcome {
        item.pickup.cancel_interp();
        self.events.push(PlayerEvent::PickupRejected { item: item.id });
        items.insert(item);
        PickupOutcome::Rejected
    }

    fn swap_weapon<R: RandomSource + ?Sized>(
        &mut self,
        mut item: WorldItem,
        items: &mut WorldItems,
        throw: &ThrowConfig,
        rng: &mut R,
    ) -> PickupOutcome {
        if let Err(e) = item.pickup.equip() {
            log::warn!("Cannot equip {}: {}", item.pickup.name(), e);
            return self.reject(item, items);
        }

        self.drop_weapon(items, throw, rng);
        log::info!("Equipped {}", item.pickup.name());
        self.events.push(PlayerEvent::WeaponEquipped { item: item.id });
        self.equipped = Some(item);
        for hovered in [self.trace_hit_item.take(), self.trace_hit_item_last_frame.take()] {
            if let Some(other) = hovered.and_then(|id| items.get_mut(id)) {
                other.pickup.set_hovered(false);
            }
        }
        PickupOutcome::Equipped
    }

    fn pickup_ammo(&mut self, mut item: WorldItem, ammo: AmmoPickup, items: &mut WorldItems) -> PickupOutcome {
        if let Err(e) = self.ledger.add(ammo.ammo_type, ammo.count) {
            log::warn!("Cannot take {}: {}", item.pickup.name(), e);
            return self.reject(item, items);
        }
        if let Err(e) = item.pickup.consume() {
            log::warn!("{} consumed from unexpected state: {}", item.pickup.name(), e);
        }
        log::debug!("Picked up {} {:?} rounds", ammo.count, ammo.ammo_type);
        self.events.push(PlayerEvent::AmmoPickedUp {
            ammo_type: ammo.ammo_type,
            count: ammo.count,
        });

        let empty_of_this_type = self
            .equipped_weapon()
            .map(|weapon| weapon.ammo_type() == ammo.ammo_type && !weapon.has_ammo())
            .unwrap_or(false);
        if empty_of_this_type {
            self.combat
                .reload(self.equipped.as_ref().and_then(WorldItem::as_weapon), &self.ledger);
        }
        PickupOutcome::Consumed
    }

    /// Throw the held weapon back into `items`. Returns its id.
    pub fn drop_weapon<R: RandomSource + ?Sized>(
        &mut self,
        items: &mut WorldItems,
        throw: &ThrowConfig,
        rng: &mut R,
    ) -> Option<ActorId> {
        let mut weapon = self.equipped.take()?;

        let mut transform = *weapon.pickup.transform();
        transform.location = self.muzzle_locations().1;
        transform.rotation = Rotator::from_yaw(self.camera_rotation.yaw);
        weapon.pickup.set_transform(transform);

        match weapon.throw(throw, rng) {
            Ok(impulse) => {
                let id = weapon.id;
                self.events.push(PlayerEvent::WeaponThrown { item: id, impulse });
                items.insert(weapon);
                Some(id)
            }
            Err(e) => {
                log::warn!("Cannot drop {}: {}", weapon.pickup.name(), e);
                self.equipped = Some(weapon);
                None
            }
        }
    }

    // Health

    /// Apply incoming damage. Returns the damage taken.
    pub fn apply_damage(&mut self, damage: &DamageInfo) -> f32 {
        let dealt = self.vitals.take_damage(damage.amount, damage.instigator);
        if self.vitals.is_dead() {
            self.combat.fire_released();
        }
        self.pump_events();
        dealt
    }

    /// Death animation finished
    pub fn finish_death(&mut self) {
        self.vitals.finish_death();
        self.pump_events();
    }

    /// Advance combat timers, aim feel and the death sequence
    pub fn update(&mut self, delta_time: f32) {
        self.combat.update(
            delta_time,
            self.equipped.as_mut().and_then(WorldItem::as_weapon_mut),
            &mut self.ledger,
        );
        self.pump_events();
        self.aim
            .update(delta_time, self.combat.is_aiming(), self.velocity, self.in_air);
        self.vitals.update(delta_time);
        self.pump_events();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmmoConfig;
    use ironsight_combat::{CombatState, TraceHit, WeaponConfig};
    use ironsight_core::SequenceSource;
    use ironsight_inventory::{ItemState, ItemTransform};
    use ironsight_math::{Ray, Vec2};

    struct Forward;

    impl Viewport for Forward {
        fn viewport_size(&self) -> Option<Vec2> {
            Some(Vec2::new(1920.0, 1080.0))
        }

        fn deproject(&self, _screen: Vec2) -> Option<Ray> {
            Some(Ray::new(Vec3::ZERO, Vec3::X))
        }
    }

    /// Every trace hits one actor 500 units ahead
    struct Target(Option<ActorId>);

    impl SceneQuery for Target {
        fn line_trace(&self, _start: Vec3, _end: Vec3) -> Option<TraceHit> {
            self.0.map(|actor| TraceHit::actor(Vec3::new(500.0, 0.0, 0.0), actor))
        }

        fn sphere_overlap(&self, _center: Vec3, _radius: f32) -> Vec<ActorId> {
            Vec::new()
        }
    }

    fn player_with(config: &GameplayConfig) -> PlayerCharacter {
        let mut player = PlayerCharacter::new(ActorId::new(0, 0), config, Vec3::ZERO);
        player.equip_default_weapon(ActorId::new(1, 0));
        player.drain_events();
        player
    }

    fn player() -> PlayerCharacter {
        player_with(&GameplayConfig::default())
    }

    #[test]
    fn test_spawns_with_default_weapon_and_ledger() {
        let player = player();
        let weapon = player.equipped_weapon().unwrap();
        assert_eq!(weapon.ammo(), 15);
        assert_eq!(player.equipped().unwrap().pickup.state(), ItemState::Equipped);
        assert_eq!(player.ledger().count(AmmoType::Pistol), 85);
        assert_eq!(player.ledger().count(AmmoType::Rifle), 120);
    }

    #[test]
    fn test_fire_opens_shoot_window() {
        let mut player = player();
        assert!(player.fire_pressed());
        assert!(player.aim().is_firing_bullet());
        assert_eq!(player.equipped_weapon().unwrap().ammo(), 14);
        assert!(player
            .drain_events()
            .contains(&PlayerEvent::Combat(CombatEvent::WeaponFired { ammo_left: 14 })));
    }

    #[test]
    fn test_dual_wield_traces_both_hands() {
        let player = player();
        let enemy = ActorId::new(5, 0);
        let shot = player
            .resolve_shot(&TargetingService::default(), &Forward, &Target(Some(enemy)))
            .unwrap();
        assert_eq!(shot.beams.len(), 2);
        assert_eq!(shot.damage_beam().and_then(|b| b.hit.as_ref()).and_then(|h| h.actor), Some(enemy));
        assert_eq!(shot.damage_for(true), 50.0);
    }

    #[test]
    fn test_single_weapon_traces_right_hand() {
        let mut config = GameplayConfig::default();
        config.player.default_weapon = Some(WeaponConfig::assault_rifle());
        let player = player_with(&config);

        let shot = player
            .resolve_shot(&TargetingService::default(), &Forward, &Target(None))
            .unwrap();
        assert_eq!(shot.beams.len(), 1);
        assert_eq!(shot.beams[0].muzzle, player.muzzle_locations().1);
        assert_eq!(shot.damage, 30.0);
    }

    #[test]
    fn test_overlap_count_never_negative() {
        let mut player = player();
        player.on_item_overlap(false);
        assert_eq!(player.overlapped_item_count(), 0);
        player.on_item_overlap(true);
        player.on_item_overlap(true);
        player.on_item_overlap(false);
        assert!(player.should_trace_for_items());
    }

    #[test]
    fn test_hover_moves_prompt() {
        let mut player = player();
        let mut items = WorldItems::new();
        let box_id = ActorId::new(7, 0);
        items.insert(WorldItem::ammo(
            box_id,
            AmmoPickup::new(AmmoType::Pistol, 20),
            ItemTransform::at(Vec3::new(500.0, 0.0, 0.0)),
        ));
        let targeting = TargetingService::default();

        // No overlap, no trace
        player.trace_for_items(&mut items, &targeting, &Forward, &Target(Some(box_id)));
        assert_eq!(player.trace_hit_item(), None);

        player.on_item_overlap(true);
        player.trace_for_items(&mut items, &targeting, &Forward, &Target(Some(box_id)));
        assert_eq!(player.trace_hit_item(), Some(box_id));
        assert!(items.get(box_id).unwrap().pickup.prompt_visible());

        player.trace_for_items(&mut items, &targeting, &Forward, &Target(None));
        assert!(!items.get(box_id).unwrap().pickup.prompt_visible());
    }

    #[test]
    fn test_ammo_pickup_reloads_empty_weapon() {
        let mut config = GameplayConfig::default();
        config.player.starting_ammo = vec![AmmoConfig::new(AmmoType::Pistol, 0)];
        config.player.default_weapon = Some(WeaponConfig::pistol().with_loaded_ammo(0));
        let mut player = player_with(&config);
        let mut items = WorldItems::new();

        let mut ammo = WorldItem::ammo(
            ActorId::new(8, 0),
            AmmoPickup::new(AmmoType::Pistol, 10),
            ItemTransform::default(),
        );
        let target = player.interp_target(1).unwrap();
        ammo.pickup.start_interp(player.id(), 1, &target).unwrap();
        ammo.pickup.update(0.8, Some(&target));

        let outcome = player.get_pickup_item(ammo, &mut items, &ThrowConfig::default(), &mut SequenceSource::constant(0.5));
        assert_eq!(outcome, PickupOutcome::Consumed);
        assert_eq!(player.ledger().count(AmmoType::Pistol), 10);
        assert_eq!(player.combat().state(), CombatState::Reloading);

        assert_eq!(player.finish_reload(), 10);
        assert_eq!(player.equipped_weapon().unwrap().ammo(), 10);
    }

    #[test]
    fn test_swap_throws_old_weapon() {
        let mut player = player();
        let mut items = WorldItems::new();
        let rifle_id = ActorId::new(9, 0);

        let mut rifle = WorldItem::weapon(rifle_id, &WeaponConfig::assault_rifle(), ItemTransform::default());
        let target = player.interp_target(0).unwrap();
        rifle.pickup.start_interp(player.id(), 0, &target).unwrap();
        rifle.pickup.update(0.8, Some(&target));

        let outcome = player.get_pickup_item(rifle, &mut items, &ThrowConfig::default(), &mut SequenceSource::constant(0.5));
        assert_eq!(outcome, PickupOutcome::Equipped);
        assert_eq!(player.equipped().unwrap().id, rifle_id);

        let pistol = items.get(ActorId::new(1, 0)).unwrap();
        assert_eq!(pistol.pickup.state(), ItemState::Falling);
        assert_eq!(pistol.pickup.owner(), None);
        assert!(player
            .drain_events()
            .iter()
            .any(|e| matches!(e, PlayerEvent::WeaponThrown { .. })));
    }

    #[test]
    fn test_dead_player_input_is_dropped() {
        let mut player = player();
        player.apply_damage(&DamageInfo::new(500.0, ironsight_combat::DamageType::Melee));
        assert!(player.vitals().is_dead());

        player.update(1.0);
        assert!(!player.input_enabled());
        assert!(!player.fire_pressed());
        assert!(!player.toggle_dead_eye());
    }

    #[test]
    fn test_held_trigger_stops_on_death() {
        let mut config = GameplayConfig::default();
        config.player.default_weapon = Some(WeaponConfig::assault_rifle());
        let mut player = player_with(&config);

        assert!(player.fire_pressed());
        let loaded = player.equipped_weapon().unwrap().ammo();
        player.apply_damage(&DamageInfo::new(500.0, ironsight_combat::DamageType::Melee));

        for _ in 0..120 {
            player.update(1.0 / 60.0);
        }
        assert!(!player.input_enabled());
        assert_eq!(player.equipped_weapon().unwrap().ammo(), loaded);
        assert_eq!(player.combat().state(), CombatState::Unoccupied);
    }

    #[test]
    fn test_swap_clears_hover_prompt() {
        let mut player = player();
        let mut items = WorldItems::new();
        let box_id = ActorId::new(7, 0);
        items.insert(WorldItem::ammo(
            box_id,
            AmmoPickup::new(AmmoType::Pistol, 20),
            ItemTransform::at(Vec3::new(500.0, 0.0, 0.0)),
        ));
        let targeting = TargetingService::default();

        player.on_item_overlap(true);
        player.trace_for_items(&mut items, &targeting, &Forward, &Target(Some(box_id)));
        assert!(items.get(box_id).unwrap().pickup.prompt_visible());

        let mut rifle = WorldItem::weapon(ActorId::new(9, 0), &WeaponConfig::assault_rifle(), ItemTransform::default());
        let target = player.interp_target(0).unwrap();
        rifle.pickup.start_interp(player.id(), 0, &target).unwrap();
        rifle.pickup.update(0.8, Some(&target));
        let outcome = player.get_pickup_item(rifle, &mut items, &ThrowConfig::default(), &mut SequenceSource::constant(0.5));

        assert_eq!(outcome, PickupOutcome::Equipped);
        assert_eq!(player.trace_hit_item(), None);
        assert!(!items.get(box_id).unwrap().pickup.prompt_visible());

        player.trace_for_items(&mut items, &targeting, &Forward, &Target(None));
        assert!(!items.get(box_id).unwrap().pickup.prompt_visible());
    }
}
