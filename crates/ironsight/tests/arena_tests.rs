//! End-to-end arena scenarios with scripted scene collaborators

use ironsight::prelude::*;
use ironsight_ai::{BlackboardKey, EnemyConfig, EnemyEvent, EnemyState};
use ironsight_combat::{
    AmmoPickup, AmmoType, CombatEvent, CombatState, SceneQuery, TraceHit, Viewport, WeaponConfig,
};
use ironsight_core::{ActorId, SequenceSource};
use ironsight_inventory::{ItemEvent, ItemState};
use ironsight_math::{Ray, Vec2, Vec3};

/// Every line trace returns `hit`; every overlap returns `overlaps`
#[derive(Default)]
struct StubScene {
    hit: Option<TraceHit>,
    overlaps: Vec<ActorId>,
}

impl SceneQuery for StubScene {
    fn line_trace(&self, _start: Vec3, _end: Vec3) -> Option<TraceHit> {
        self.hit.clone()
    }

    fn sphere_overlap(&self, _center: Vec3, _radius: f32) -> Vec<ActorId> {
        self.overlaps.clone()
    }
}

struct FixedViewport;

impl Viewport for FixedViewport {
    fn viewport_size(&self) -> Option<Vec2> {
        Some(Vec2::new(1920.0, 1080.0))
    }

    fn deproject(&self, _screen: Vec2) -> Option<Ray> {
        Some(Ray::new(Vec3::ZERO, Vec3::X))
    }
}

type TestArena = Arena<StubScene, FixedViewport>;

/// Enemies spawn here, well outside their aggro radius
const FAR: Vec3 = Vec3::new(2000.0, 0.0, 0.0);

fn arena(config: GameplayConfig) -> TestArena {
    // 0.99 never stuns and picks the last attack section
    Arena::new(config, StubScene::default(), FixedViewport).with_rng(Box::new(SequenceSource::constant(0.99)))
}

fn aim_at(arena: &mut TestArena, actor: ActorId, bone: Option<&str>) {
    let mut hit = TraceHit::actor(Vec3::new(500.0, 0.0, 0.0), actor);
    if let Some(bone) = bone {
        hit = hit.with_bone(bone);
    }
    arena.scene_mut().hit = Some(hit);
}

fn run(arena: &mut TestArena, seconds: f32) -> Vec<ArenaEvent> {
    let mut events = Vec::new();
    let frames = (seconds / 0.05).ceil() as usize;
    for _ in 0..frames {
        events.extend(arena.tick(0.05));
    }
    events
}

fn single_shot(arena: &mut TestArena) -> Vec<ArenaEvent> {
    assert!(arena.player_mut().fire_pressed());
    arena.player_mut().fire_released();
    arena.tick(0.0)
}

#[test]
fn test_body_shot_damages_enemy() {
    let mut arena = arena(GameplayConfig::default());
    let enemy = arena.spawn_enemy(FAR);
    aim_at(&mut arena, enemy, Some("spine_01"));

    let events = single_shot(&mut arena);

    // Both pistols trace, only the right hand deals damage
    let enemy_ref = arena.enemy(enemy).unwrap();
    assert_eq!(enemy_ref.health().current(), 80.0);
    assert_eq!(enemy_ref.hit_numbers().len(), 1);
    assert!(!enemy_ref.hit_numbers()[0].headshot);
    assert!(enemy_ref.health_bar_visible());

    let impacts = events
        .iter()
        .filter(|e| matches!(e, ArenaEvent::Enemy { event: EnemyEvent::Impact { .. }, .. }))
        .count();
    assert_eq!(impacts, 2);
    assert_eq!(arena.player().equipped_weapon().unwrap().ammo(), 14);
}

#[test]
fn test_headshot_uses_headshot_damage() {
    let mut arena = arena(GameplayConfig::default());
    let enemy = arena.spawn_enemy(FAR);
    aim_at(&mut arena, enemy, Some("head"));

    single_shot(&mut arena);

    let enemy_ref = arena.enemy(enemy).unwrap();
    assert_eq!(enemy_ref.health().current(), 50.0);
    assert!(enemy_ref.hit_numbers()[0].headshot);
}

#[test]
fn test_enemy_dies_once_and_despawns() {
    let mut config = GameplayConfig::default();
    config.enemy = EnemyConfig::default().with_max_health(50.0);
    let mut arena = arena(config);
    let enemy = arena.spawn_enemy(FAR);
    aim_at(&mut arena, enemy, Some("head"));

    let mut events = single_shot(&mut arena);
    assert_eq!(arena.enemy(enemy).unwrap().state(), EnemyState::Dead);
    assert!(arena.enemy(enemy).unwrap().blackboard().get_bool(BlackboardKey::Dead));

    // Shooting the corpse does nothing
    events.extend(run(&mut arena, 0.3));
    events.extend(single_shot(&mut arena));
    assert_eq!(arena.enemy(enemy).unwrap().health().current(), 0.0);

    events.extend(run(&mut arena, 4.0));
    let deaths = events
        .iter()
        .filter(|e| matches!(e, ArenaEvent::Enemy { event: EnemyEvent::Died, .. }))
        .count();
    assert_eq!(deaths, 1);
    assert!(arena.enemy(enemy).is_none());
    assert!(events.contains(&ArenaEvent::Despawned(enemy)));
}

#[test]
fn test_empty_magazine_reloads_from_ledger() {
    let mut config = GameplayConfig::default();
    config.player.default_weapon = Some(WeaponConfig::pistol().with_loaded_ammo(1));
    let mut arena = arena(config);

    single_shot(&mut arena);
    assert_eq!(arena.player().equipped_weapon().unwrap().ammo(), 0);

    run(&mut arena, 0.25);
    assert_eq!(arena.player().combat().state(), CombatState::Reloading);

    let events = run(&mut arena, 1.2);
    assert!(events.contains(&ArenaEvent::Player(PlayerEvent::Combat(CombatEvent::ReloadFinished {
        transferred: 15
    }))));
    assert_eq!(arena.player().equipped_weapon().unwrap().ammo(), 15);
    assert_eq!(arena.player().ledger().count(AmmoType::Pistol), 70);
    assert_eq!(arena.player().combat().state(), CombatState::Unoccupied);
}

#[test]
fn test_ammo_box_flies_in_and_is_consumed() {
    let mut arena = arena(GameplayConfig::default());
    let ammo = arena.spawn_ammo(AmmoPickup::new(AmmoType::Pistol, 30), Vec3::new(100.0, 0.0, 0.0));
    aim_at(&mut arena, ammo, None);

    arena.tick(0.0);
    assert_eq!(arena.player().overlapped_item_count(), 1);
    assert_eq!(arena.player().trace_hit_item(), Some(ammo));
    assert!(arena.items().get(ammo).unwrap().pickup.prompt_visible());

    assert!(arena.select_pressed());
    assert_eq!(arena.items().get(ammo).unwrap().pickup.state(), ItemState::EquipInterping);
    assert_eq!(arena.player().slots().occupancy(1), 1);
    // A flying item cannot be selected again
    assert!(!arena.select_pressed());

    arena.scene_mut().hit = None;
    let events = run(&mut arena, 0.8);

    assert!(arena.items().get(ammo).is_none());
    assert_eq!(arena.player().ledger().count(AmmoType::Pistol), 115);
    assert_eq!(arena.player().slots().occupancy(1), 0);
    assert_eq!(arena.player().overlapped_item_count(), 0);
    assert!(events.contains(&ArenaEvent::Despawned(ammo)));
    assert!(events.iter().any(|e| matches!(
        e,
        ArenaEvent::Item {
            event: ItemEvent::InterpFinished { slot: 1, .. },
            ..
        }
    )));
}

#[test]
fn test_weapon_pickup_swaps_and_throws_old_weapon() {
    let mut arena = arena(GameplayConfig::default());
    let old_weapon = arena.player().equipped().unwrap().id;
    let rifle = arena.spawn_weapon(&WeaponConfig::assault_rifle(), Vec3::new(100.0, 0.0, 0.0));
    aim_at(&mut arena, rifle, None);

    arena.tick(0.0);
    assert!(arena.select_pressed());
    assert_eq!(arena.player().slots().occupancy(0), 1);
    arena.scene_mut().hit = None;

    let events = run(&mut arena, 0.8);
    assert_eq!(arena.player().equipped().unwrap().id, rifle);
    assert_eq!(arena.player().equipped().unwrap().pickup.state(), ItemState::Equipped);
    assert_eq!(arena.player().slots().occupancy(0), 0);
    assert!(events
        .iter()
        .any(|e| matches!(e, ArenaEvent::Player(PlayerEvent::WeaponThrown { item, .. }) if *item == old_weapon)));

    let thrown = arena.items().get(old_weapon).unwrap();
    assert_eq!(thrown.pickup.owner(), None);
    assert!(matches!(
        thrown.pickup.state(),
        ItemState::Falling | ItemState::Pickup
    ));

    run(&mut arena, 0.8);
    assert_eq!(arena.items().get(old_weapon).unwrap().pickup.state(), ItemState::Pickup);
}

#[test]
fn test_untracked_ammo_is_refused() {
    let mut config = GameplayConfig::default();
    config.player.starting_ammo = vec![AmmoConfig::new(AmmoType::Pistol, 10)];
    let mut arena = arena(config);
    let ammo = arena.spawn_ammo(AmmoPickup::new(AmmoType::Rifle, 30), Vec3::new(100.0, 0.0, 0.0));
    aim_at(&mut arena, ammo, None);

    arena.tick(0.0);
    assert!(!arena.select_pressed());
    assert_eq!(arena.items().get(ammo).unwrap().pickup.state(), ItemState::Pickup);
    assert_eq!(arena.player().ledger().count(AmmoType::Rifle), 0);
    assert_eq!(arena.player().slots().occupancy(1), 0);
}

#[test]
fn test_enemy_melee_kills_player() {
    let mut config = GameplayConfig::default();
    config.player.max_health = 20.0;
    let mut arena = arena(config);
    let enemy = arena.spawn_enemy(Vec3::new(100.0, 0.0, 0.0));

    let events = arena.tick(0.05);
    let enemy_ref = arena.enemy(enemy).unwrap();
    assert_eq!(enemy_ref.blackboard().get_actor(BlackboardKey::Target), Some(arena.player().id()));
    assert!(enemy_ref.blackboard().get_bool(BlackboardKey::InAttackRange));
    assert!(enemy_ref.blackboard().get_bool(BlackboardKey::PlayerDead));
    assert!(arena.player().vitals().is_dead());
    assert!(events.contains(&ArenaEvent::Player(PlayerEvent::Vitals(VitalsEvent::Died {
        instigator: Some(enemy)
    }))));

    // Death montage ends and input is cut
    run(&mut arena, 1.2);
    assert!(!arena.player().input_enabled());
    assert!(!arena.player_mut().fire_pressed());
}

#[test]
fn test_barrel_blast_hits_overlapping_characters() {
    let mut config = GameplayConfig::default();
    config.explosive.damage = 40.0;
    let mut arena = arena(config);
    let enemy = arena.spawn_enemy(FAR);
    let barrel = arena.spawn_explosive(Vec3::new(500.0, 0.0, 0.0));
    let player = arena.player().id();
    arena.scene_mut().overlaps = vec![enemy, player, barrel];
    aim_at(&mut arena, barrel, None);

    let events = single_shot(&mut arena);
    assert!(events
        .iter()
        .any(|e| matches!(e, ArenaEvent::Explosion { id, .. } if *id == barrel)));
    assert!(events.contains(&ArenaEvent::Despawned(barrel)));
    assert!(arena.explosive(barrel).is_none());
    assert_eq!(arena.enemy(enemy).unwrap().health().current(), 60.0);
    assert_eq!(arena.player().vitals().health().current(), 60.0);

    // The barrel is gone; shooting where it was does nothing
    run(&mut arena, 0.3);
    let events = single_shot(&mut arena);
    assert!(!events.iter().any(|e| matches!(e, ArenaEvent::Explosion { .. })));
}

#[test]
fn test_dead_eye_slows_the_world() {
    let mut arena = arena(GameplayConfig::default());
    let ammo = arena.spawn_ammo(AmmoPickup::new(AmmoType::Pistol, 5), Vec3::new(100.0, 0.0, 0.0));
    aim_at(&mut arena, ammo, None);
    arena.tick(0.0);
    assert!(arena.select_pressed());
    arena.scene_mut().hit = None;

    assert!(arena.player_mut().toggle_dead_eye());
    assert_eq!(arena.player().time_dilation(), 0.1);

    // 0.8 real seconds is only 0.08 game seconds
    run(&mut arena, 0.8);
    assert!(arena.items().get(ammo).is_some());

    assert!(arena.player_mut().toggle_dead_eye());
    assert_eq!(arena.player().combat().state(), CombatState::Unoccupied);
    run(&mut arena, 0.8);
    assert!(arena.items().get(ammo).is_none());
}
