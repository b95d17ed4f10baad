//! Headless Ironsight session
//!
//! Spawns a small arena in the sphere sandbox and plays a scripted fight:
//! pick up an ammo box, shoot an enemy until it dies, then shoot a barrel.

use ironsight::prelude::*;
use ironsight_combat::{AmmoPickup, AmmoType};
use ironsight_inventory::ItemEvent;
use ironsight_math::{Rotator, Vec2, Vec3};

const FRAME: f32 = 1.0 / 60.0;
const EYE_HEIGHT: f32 = 60.0;

type SandboxArena = Arena<SphereScene, PinholeViewport>;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = GameplayConfig::load();
    config.print_summary();

    let fov = config.player.aim.default_fov;
    let mut arena = Arena::new(config, SphereScene::new(), PinholeViewport::new(Vec2::new(1920.0, 1080.0), fov));

    let ammo = arena.spawn_ammo(AmmoPickup::new(AmmoType::Pistol, 30), Vec3::new(120.0, 0.0, EYE_HEIGHT));
    arena.scene_mut().add_prop(ammo, Vec3::new(120.0, 0.0, EYE_HEIGHT), 20.0);

    let enemy_location = Vec3::new(900.0, 0.0, 0.0);
    let enemy = arena.spawn_enemy(enemy_location);
    arena.scene_mut().add_character(enemy, enemy_location, 90.0, 60.0);

    let barrel_location = Vec3::new(700.0, 500.0, 0.0);
    let barrel = arena.spawn_explosive(barrel_location);
    arena.scene_mut().add_prop(barrel, barrel_location, 40.0);

    // Grab the ammo box in front of the camera
    look_at(&mut arena, Vec3::new(120.0, 0.0, EYE_HEIGHT));
    run(&mut arena, 0.1);
    if arena.select_pressed() {
        log::info!("Pulling in ammo box {}", ammo);
    }
    run(&mut arena, 1.0);

    // Empty the magazine into the enemy
    look_at(&mut arena, enemy_location);
    arena.player_mut().fire_pressed();
    let mut elapsed = 0.0;
    while arena.enemy(enemy).map(|e| !e.is_dead()).unwrap_or(false) && elapsed < 10.0 {
        run(&mut arena, 0.5);
        elapsed += 0.5;
    }
    arena.player_mut().fire_released();

    // Let the reload finish, then shoot the barrel
    run(&mut arena, 1.5);
    look_at(&mut arena, barrel_location);
    arena.player_mut().fire_pressed();
    arena.player_mut().fire_released();
    run(&mut arena, 5.0);

    let player = arena.player();
    log::info!(
        "Session over: health {}, magazine {}, pistol rounds carried {}, enemies left {}",
        player.vitals().health().current(),
        player.equipped_weapon().map(|w| w.ammo_display()).unwrap_or_default(),
        player.ledger().count(AmmoType::Pistol),
        arena.enemy_count()
    );
}

/// Point the camera and the sandbox viewport at a world location
fn look_at(arena: &mut SandboxArena, target: Vec3) {
    let eye = arena.player().location() + Vec3::new(0.0, 0.0, EYE_HEIGHT);
    let to_target = target - eye;
    let rotation = Rotator::new(
        to_target.z.atan2(to_target.length_2d()).to_degrees(),
        to_target.y.atan2(to_target.x).to_degrees(),
        0.0,
    );
    arena.player_mut().set_view(eye, rotation);
    arena.viewport_mut().set_camera(eye, rotation);
}

/// Tick for `seconds`, logging what happened and keeping the sandbox scene
/// in step with the arena
fn run(arena: &mut SandboxArena, seconds: f32) {
    let frames = (seconds / FRAME).round() as usize;
    for _ in 0..frames {
        for event in arena.tick(FRAME) {
            match &event {
                ArenaEvent::Item {
                    id,
                    event: ItemEvent::InterpFinished { .. },
                } => {
                    arena.scene_mut().remove(*id);
                }
                ArenaEvent::Despawned(id) => {
                    arena.scene_mut().remove(*id);
                }
                _ => {}
            }
            log_event(&event);
        }
    }
}

fn log_event(event: &ArenaEvent) {
    match event {
        ArenaEvent::Player(PlayerEvent::AmmoPickedUp { ammo_type, count }) => {
            log::info!("Picked up {} {:?} rounds", count, ammo_type)
        }
        ArenaEvent::Enemy { id, event } => log::info!("Enemy {}: {:?}", id, event),
        ArenaEvent::Explosion { id, location } => log::info!("Barrel {} exploded at {:?}", id, location),
        ArenaEvent::Despawned(id) => log::info!("Despawned {}", id),
        other => log::debug!("{:?}", other),
    }
}
