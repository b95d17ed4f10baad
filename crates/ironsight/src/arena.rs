//! Arena host
//!
//! The arena owns every actor of a session and the scene collaborators, and
//! drives them from a single [`Arena::tick`]. It stands in for the engine's
//! game mode:
//!
//! - shots reported by the player are traced and turned into enemy damage or
//!   barrel detonations
//! - finished pickup flights are handed to the player
//! - aggro and combat-range spheres are distance checks
//! - enemies attack whenever their blackboard allows it, in place of a
//!   behaviour tree
//!
//! Everything the host should present comes back as [`ArenaEvent`]s.

use crate::config::GameplayConfig;
use crate::explosive::Explosive;
use crate::player::{PickupOutcome, PlayerCharacter, PlayerEvent};
use crate::vitals::VitalsEvent;
use crate::world::WorldItems;
use ironsight_ai::{BlackboardKey, Enemy, EnemyEvent};
use ironsight_combat::{AmmoPickup, CombatEvent, SceneQuery, TargetingService, Viewport, WeaponConfig, WorldItem};
use ironsight_core::{ActorId, ActorIdGenerator, ChaChaSource, RandomSource};
use ironsight_inventory::{ItemEvent, ItemTransform};
use ironsight_math::Vec3;
use std::collections::{BTreeMap, BTreeSet};

/// Something the host should present
#[derive(Debug, Clone, PartialEq)]
pub enum ArenaEvent {
    Player(PlayerEvent),
    Enemy { id: ActorId, event: EnemyEvent },
    Item { id: ActorId, event: ItemEvent },
    /// Barrel blew up: explosion particles and sound
    Explosion { id: ActorId, location: Vec3 },
    /// Actor no longer exists
    Despawned(ActorId),
}

/// A play session
pub struct Arena<S, V> {
    config: GameplayConfig,
    ids: ActorIdGenerator,
    player: PlayerCharacter,
    enemies: BTreeMap<ActorId, Enemy>,
    items: WorldItems,
    explosives: BTreeMap<ActorId, Explosive>,
    overlapping_items: BTreeSet<ActorId>,
    targeting: TargetingService,
    scene: S,
    viewport: V,
    rng: Box<dyn RandomSource>,
    events: Vec<ArenaEvent>,
}

impl<S: SceneQuery, V: Viewport> Arena<S, V> {
    /// Spawn the player at the origin, holding the default weapon
    pub fn new(config: GameplayConfig, scene: S, viewport: V) -> Self {
        let mut ids = ActorIdGenerator::new();
        let mut player = PlayerCharacter::new(ids.next(), &config, Vec3::ZERO);
        if config.player.default_weapon.is_some() {
            player.equip_default_weapon(ids.next());
        }

        Self {
            targeting: TargetingService::new(config.targeting.clone()),
            rng: Box::new(ChaChaSource::from_seed(config.seed)),
            config,
            ids,
            player,
            enemies: BTreeMap::new(),
            items: WorldItems::new(),
            explosives: BTreeMap::new(),
            overlapping_items: BTreeSet::new(),
            scene,
            viewport,
            events: Vec::new(),
        }
    }

    /// Builder: replace the random source
    pub fn with_rng(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn config(&self) -> &GameplayConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerCharacter {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerCharacter {
        &mut self.player
    }

    pub fn enemy(&self, id: ActorId) -> Option<&Enemy> {
        self.enemies.get(&id)
    }

    pub fn enemy_mut(&mut self, id: ActorId) -> Option<&mut Enemy> {
        self.enemies.get_mut(&id)
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn items(&self) -> &WorldItems {
        &self.items
    }

    pub fn explosive(&self, id: ActorId) -> Option<&Explosive> {
        self.explosives.get(&id)
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn spawn_enemy(&mut self, location: Vec3) -> ActorId {
        let id = self.ids.next();
        self.enemies
            .insert(id, Enemy::new(id, self.config.enemy.clone(), location));
        log::debug!("Spawned enemy {} at {:?}", id, location);
        id
    }

    pub fn spawn_weapon(&mut self, weapon: &WeaponConfig, location: Vec3) -> ActorId {
        let id = self.ids.next();
        let mut item = WorldItem::weapon(id, weapon, ItemTransform::at(location));
        item.pickup = item.pickup.with_config(self.config.interp.clone());
        self.items.insert(item)
    }

    pub fn spawn_ammo(&mut self, ammo: AmmoPickup, location: Vec3) -> ActorId {
        let id = self.ids.next();
        let mut item = WorldItem::ammo(id, ammo, ItemTransform::at(location));
        item.pickup = item.pickup.with_config(self.config.interp.clone());
        self.items.insert(item)
    }

    pub fn spawn_explosive(&mut self, location: Vec3) -> ActorId {
        let id = self.ids.next();
        self.explosives
            .insert(id, Explosive::new(id, location, self.config.explosive.clone()));
        id
    }

    /// Select button: pull the hovered item toward the player
    pub fn select_pressed(&mut self) -> bool {
        self.player.select_pressed(&mut self.items)
    }

    /// Advance the session by `delta_time` real seconds. Dead-eye slows
    /// everything down by its time dilation.
    pub fn tick(&mut self, delta_time: f32) -> Vec<ArenaEvent> {
        let delta_time = delta_time * self.player.time_dilation();

        self.update_item_overlaps();
        self.player
            .trace_for_items(&mut self.items, &self.targeting, &self.viewport, &self.scene);
        self.player.update(delta_time);
        self.process_player_events();
        self.update_items(delta_time);
        self.update_enemies(delta_time);
        self.process_player_events();

        std::mem::take(&mut self.events)
    }

    fn update_item_overlaps(&mut self) {
        let center = self.player.location();
        let radius = self.config.player.item_pickup_radius;
        let overlapping: BTreeSet<ActorId> = self
            .items
            .iter()
            .filter(|item| item.pickup.flags().area_overlap)
            .filter(|item| item.pickup.transform().location.distance(center) <= radius)
            .map(|item| item.id)
            .collect();

        for _ in overlapping.difference(&self.overlapping_items) {
            self.player.on_item_overlap(true);
        }
        for _ in self.overlapping_items.difference(&overlapping) {
            self.player.on_item_overlap(false);
        }
        self.overlapping_items = overlapping;
    }

    fn process_player_events(&mut self) {
        for event in self.player.drain_events() {
            match &event {
                PlayerEvent::Combat(CombatEvent::WeaponFired { .. }) => self.resolve_shot(),
                PlayerEvent::Vitals(VitalsEvent::Died {
                    instigator: Some(instigator),
                }) => {
                    if let Some(enemy) = self.enemies.get_mut(instigator) {
                        enemy.notify_player_dead();
                    }
                }
                _ => {}
            }
            self.events.push(ArenaEvent::Player(event));
        }
    }

    fn resolve_shot(&mut self) {
        let Some(shot) = self
            .player
            .resolve_shot(&self.targeting, &self.viewport, &self.scene)
        else {
            log::debug!("Shot not traced: no weapon or viewport");
            return;
        };
        let instigator = Some(self.player.id());
        let damage_beam = shot.beams.len().saturating_sub(1);

        for (index, beam) in shot.beams.iter().enumerate() {
            let Some(hit) = &beam.hit else {
                continue;
            };
            let Some(actor) = hit.actor else {
                continue;
            };

            if self.explosives.contains_key(&actor) {
                self.detonate(actor, instigator);
                continue;
            }
            let Some(enemy) = self.enemies.get_mut(&actor) else {
                continue;
            };
            enemy.bullet_hit(hit.location);
            if index != damage_beam || enemy.is_dead() {
                continue;
            }

            let headshot = enemy.is_headshot(hit.bone.as_deref());
            let amount = shot.damage_for(headshot);
            enemy.apply_damage(amount, instigator, &mut *self.rng);
            enemy.show_hit_number(amount, hit.location, headshot);
        }
    }

    fn detonate(&mut self, id: ActorId, instigator: Option<ActorId>) {
        let Some(mut explosive) = self.explosives.remove(&id) else {
            return;
        };
        let hits = explosive.bullet_hit(&self.scene, instigator);
        self.events.push(ArenaEvent::Explosion {
            id,
            location: explosive.location(),
        });

        for (actor, damage) in hits {
            if actor == self.player.id() {
                self.player.apply_damage(&damage);
            } else if let Some(enemy) = self.enemies.get_mut(&actor) {
                enemy.apply_damage(damage.amount, damage.instigator, &mut *self.rng);
            }
        }

        self.ids.release(id);
        self.events.push(ArenaEvent::Despawned(id));
    }

    fn update_items(&mut self, delta_time: f32) {
        let player_id = self.player.id();

        for id in self.items.ids() {
            let Some(item) = self.items.get_mut(id) else {
                continue;
            };
            let target = match (item.pickup.owner(), item.pickup.interp()) {
                (Some(owner), Some(interp)) if owner == player_id => self.player.interp_target(interp.slot),
                _ => None,
            };

            for event in item.pickup.update(delta_time, target.as_ref()) {
                match event {
                    ItemEvent::InterpFinished { slot, .. } => {
                        self.player.release_slot(slot);
                        if let Some(item) = self.items.remove(id) {
                            let outcome =
                                self.player
                                    .get_pickup_item(item, &mut self.items, &self.config.throw, &mut *self.rng);
                            if outcome == PickupOutcome::Consumed {
                                self.ids.release(id);
                                self.events.push(ArenaEvent::Despawned(id));
                            }
                        }
                    }
                    ItemEvent::InterpCancelled { slot } => self.player.release_slot(slot),
                    ItemEvent::Settled => {}
                }
                self.events.push(ArenaEvent::Item { id, event });
            }
        }
    }

    fn update_enemies(&mut self, delta_time: f32) {
        let player_id = self.player.id();
        let player_location = self.player.location();
        let player_alive = !self.player.vitals().is_dead();
        let capsule_radius = self.config.player.capsule_radius;
        let mut destroyed = Vec::new();

        for (id, enemy) in self.enemies.iter_mut() {
            if !enemy.is_dead() {
                let distance = enemy.location().distance(player_location);
                let aggro = distance <= enemy.config().aggro_radius;
                let in_range = distance <= enemy.config().combat_range;

                if aggro && enemy.blackboard().get_actor(BlackboardKey::Target).is_none() {
                    enemy.set_target(Some(player_id));
                }
                if in_range != enemy.blackboard().get_bool(BlackboardKey::InAttackRange) {
                    enemy.set_in_attack_range(in_range);
                }

                let to_player = player_location - enemy.location();
                enemy.set_facing(to_player.y.atan2(to_player.x).to_degrees());

                if in_range && player_alive && !enemy.blackboard().get_bool(BlackboardKey::PlayerDead) {
                    enemy.attack(&mut *self.rng);
                }
                if enemy.swing_active() && enemy.weapon_location().distance(player_location) <= capsule_radius {
                    if let Some(damage) = enemy.weapon_overlap(player_id) {
                        self.player.apply_damage(&damage);
                    }
                }
            }

            enemy.update(delta_time);
            for event in enemy.drain_events() {
                if event == EnemyEvent::Destroyed {
                    destroyed.push(*id);
                }
                self.events.push(ArenaEvent::Enemy { id: *id, event });
            }
        }

        for id in destroyed {
            self.enemies.remove(&id);
            self.ids.release(id);
            self.events.push(ArenaEvent::Despawned(id));
        }
    }
}
