//! Enemy damage model
//!
//! An enemy is Alive, Stunned or Dead. Hits lower its health, show its health
//! bar and may stun it. Reaching zero health kills it exactly once, after
//! which every damage call is ignored and the enemy is removed once its
//! death timer runs out. Everything the behaviour tree needs is mirrored on
//! the enemy's [`Blackboard`].

use crate::blackboard::{Blackboard, BlackboardKey};
use crate::config::EnemyConfig;
use ironsight_combat::{DamageInfo, DamageType, Health};
use ironsight_core::{ActorId, RandomSource, State, StateMachine, TimerSet};
use ironsight_math::{Rotator, Vec3};
use serde::{Deserialize, Serialize};

/// Attack montage sections, picked at random
pub const ATTACK_SECTIONS: [&str; 4] = ["AttackLFast", "AttackRFast", "AttackL", "AttackR"];

/// Hit react montage section
pub const HIT_REACT_SECTION: &str = "HitReactFront";

/// Enemy combat state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyState {
    Alive,
    Stunned,
    Dead,
}

impl State for EnemyState {}

/// Effects the host should present
#[derive(Debug, Clone, PartialEq)]
pub enum EnemyEvent {
    /// Bullet impact sound and particles
    Impact { location: Vec3 },
    HealthBarShown,
    HealthBarHidden,
    /// Play the hit react montage
    HitReact { section: &'static str },
    /// Stun started or ended
    StunChanged { stunned: bool },
    /// Floating damage number appeared
    HitNumber(HitNumber),
    /// Floating damage number expired
    HitNumberExpired { id: u32 },
    /// Play the attack montage
    AttackStarted { section: &'static str },
    /// Death montage and effects
    Died,
    /// Death timer ran out; remove the enemy
    Destroyed,
}

/// Floating damage number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitNumber {
    pub id: u32,
    pub amount: f32,
    pub location: Vec3,
    pub headshot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnemyTimer {
    HealthBar,
    HitReact,
    Stun,
    AttackWait,
    Swing,
    HitNumber(u32),
    Destroy,
}

/// A hostile actor's health, stun and attack state
#[derive(Debug, Clone)]
pub struct Enemy {
    id: ActorId,
    config: EnemyConfig,
    location: Vec3,
    facing: f32,
    health: Health,
    machine: StateMachine<EnemyState>,
    blackboard: Blackboard,
    timers: TimerSet<EnemyTimer>,
    can_hit_react: bool,
    can_attack: bool,
    swing_active: bool,
    swing_landed: bool,
    health_bar_visible: bool,
    hit_numbers: Vec<HitNumber>,
    next_hit_number: u32,
    events: Vec<EnemyEvent>,
}

impl Enemy {
    /// Spawn an enemy. Patrol points are published to the blackboard in
    /// world space.
    pub fn new(id: ActorId, config: EnemyConfig, location: Vec3) -> Self {
        let machine = StateMachine::new(EnemyState::Alive)
            .with_edge(EnemyState::Alive, EnemyState::Stunned)
            .with_edge(EnemyState::Stunned, EnemyState::Alive)
            .with_edge(EnemyState::Alive, EnemyState::Dead)
            .with_edge(EnemyState::Stunned, EnemyState::Dead);

        let mut blackboard = Blackboard::new();
        blackboard.set_vector(BlackboardKey::PatrolPoint, location + config.patrol_point);
        blackboard.set_vector(BlackboardKey::PatrolPoint2, location + config.patrol_point2);
        blackboard.set_bool(BlackboardKey::CanAttack, true);

        Self {
            id,
            health: Health::new(config.max_health),
            config,
            location,
            facing: 0.0,
            machine,
            blackboard,
            timers: TimerSet::new(),
            can_hit_react: true,
            can_attack: true,
            swing_active: false,
            swing_landed: false,
            health_bar_visible: false,
            hit_numbers: Vec::new(),
            next_hit_number: 0,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn location(&self) -> Vec3 {
        self.location
    }

    /// Write back the location computed by the host's movement
    pub fn set_location(&mut self, location: Vec3) {
        self.location = location;
    }

    /// Facing yaw in degrees
    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn set_facing(&mut self, yaw: f32) {
        self.facing = yaw;
    }

    pub fn state(&self) -> EnemyState {
        self.machine.current()
    }

    pub fn is_dead(&self) -> bool {
        self.state() == EnemyState::Dead
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn health_bar_visible(&self) -> bool {
        self.health_bar_visible
    }

    /// Hit numbers currently on screen
    pub fn hit_numbers(&self) -> &[HitNumber] {
        &self.hit_numbers
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<EnemyEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether a hit on `bone` counts as a headshot
    pub fn is_headshot(&self, bone: Option<&str>) -> bool {
        bone == Some(self.config.head_bone.as_str())
    }

    /// A bullet landed on this enemy: impact effects only
    pub fn bullet_hit(&mut self, location: Vec3) {
        self.events.push(EnemyEvent::Impact { location });
    }

    /// Apply damage. Returns the damage actually taken.
    ///
    /// The instigator becomes the chase target. A lethal hit moves to Dead
    /// once; after that every call is a no-op. A non-lethal hit shows the
    /// health bar and may stun.
    pub fn apply_damage<R: RandomSource + ?Sized>(
        &mut self,
        amount: f32,
        instigator: Option<ActorId>,
        rng: &mut R,
    ) -> f32 {
        if self.is_dead() {
            return 0.0;
        }
        if let Some(instigator) = instigator {
            self.blackboard.set_actor(BlackboardKey::Target, instigator);
        }

        let (dealt, died) = self.health.apply_damage(amount);
        if died {
            self.die();
            return dealt;
        }

        self.show_health_bar();
        if rng.unit() <= self.config.stun_chance {
            let duration = rng.range_f32(self.config.hit_react_time_min, self.config.hit_react_time_max);
            self.stun(duration);
        }
        dealt
    }

    fn show_health_bar(&mut self) {
        self.timers
            .schedule(EnemyTimer::HealthBar, self.config.health_bar_display_time);
        if !self.health_bar_visible {
            self.health_bar_visible = true;
            self.events.push(EnemyEvent::HealthBarShown);
        }
    }

    fn hide_health_bar(&mut self) {
        self.timers.cancel(EnemyTimer::HealthBar);
        if self.health_bar_visible {
            self.health_bar_visible = false;
            self.events.push(EnemyEvent::HealthBarHidden);
        }
    }

    fn stun(&mut self, duration: f32) {
        if self.state() == EnemyState::Alive {
            if self.machine.transition(EnemyState::Stunned).is_err() {
                return;
            }
            self.blackboard.set_bool(BlackboardKey::Stunned, true);
            self.events.push(EnemyEvent::StunChanged { stunned: true });
        }
        self.timers.schedule(EnemyTimer::Stun, duration);

        if self.can_hit_react {
            self.can_hit_react = false;
            self.timers.schedule(EnemyTimer::HitReact, duration);
            self.events.push(EnemyEvent::HitReact {
                section: HIT_REACT_SECTION,
            });
        }
    }

    fn die(&mut self) {
        if self.machine.transition(EnemyState::Dead).is_err() {
            return;
        }
        log::info!("Enemy {} died", self.id);

        self.hide_health_bar();
        for timer in [
            EnemyTimer::HitReact,
            EnemyTimer::Stun,
            EnemyTimer::AttackWait,
            EnemyTimer::Swing,
        ] {
            self.timers.cancel(timer);
        }
        self.swing_active = false;
        self.can_attack = false;

        self.blackboard.set_bool(BlackboardKey::Dead, true);
        self.blackboard.set_bool(BlackboardKey::Stunned, false);
        self.blackboard.set_bool(BlackboardKey::CanAttack, false);
        self.events.push(EnemyEvent::Died);
        self.timers.schedule(EnemyTimer::Destroy, self.config.death_time);
    }

    /// Spawn a floating damage number. Returns its id.
    pub fn show_hit_number(&mut self, amount: f32, location: Vec3, headshot: bool) -> u32 {
        let id = self.next_hit_number;
        self.next_hit_number = self.next_hit_number.wrapping_add(1);

        let number = HitNumber {
            id,
            amount,
            location,
            headshot,
        };
        self.hit_numbers.push(number);
        self.timers
            .schedule(EnemyTimer::HitNumber(id), self.config.hit_number_lifetime);
        self.events.push(EnemyEvent::HitNumber(number));
        id
    }

    /// Aggro sphere picked up (or lost) a target
    pub fn set_target(&mut self, target: Option<ActorId>) {
        if self.is_dead() {
            return;
        }
        match target {
            Some(actor) => self.blackboard.set_actor(BlackboardKey::Target, actor),
            None => {
                self.blackboard.clear(BlackboardKey::Target);
            }
        }
    }

    /// Combat range sphere overlap changed
    pub fn set_in_attack_range(&mut self, in_range: bool) {
        self.blackboard.set_bool(BlackboardKey::InAttackRange, in_range);
    }

    /// The player this enemy was fighting has died
    pub fn notify_player_dead(&mut self) {
        self.blackboard.set_bool(BlackboardKey::PlayerDead, true);
    }

    /// Whether an attack would be accepted now
    pub fn can_attack(&self) -> bool {
        self.can_attack && self.state() == EnemyState::Alive
    }

    /// Start an attack with a random section. Opens the weapon swing window
    /// and starts the attack cooldown. Returns the section played.
    pub fn attack<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<&'static str> {
        if !self.can_attack() {
            return None;
        }
        let section = ATTACK_SECTIONS[rng.index(ATTACK_SECTIONS.len())];

        self.can_attack = false;
        self.blackboard.set_bool(BlackboardKey::CanAttack, false);
        self.timers
            .schedule(EnemyTimer::AttackWait, self.config.attack_wait_time);

        self.swing_active = true;
        self.swing_landed = false;
        self.timers.schedule(EnemyTimer::Swing, self.config.attack_swing_time);

        self.events.push(EnemyEvent::AttackStarted { section });
        Some(section)
    }

    /// Whether the weapon collision is live
    pub fn swing_active(&self) -> bool {
        self.swing_active
    }

    /// Point where the weapon collision sits during a swing
    pub fn weapon_location(&self) -> Vec3 {
        self.location + Rotator::from_yaw(self.facing).forward() * self.config.weapon_reach
    }

    /// Weapon collision overlapped `target`. Lands at most once per swing.
    pub fn weapon_overlap(&mut self, target: ActorId) -> Option<DamageInfo> {
        if !self.swing_active || self.swing_landed || self.is_dead() {
            return None;
        }
        self.swing_landed = true;
        log::debug!("Enemy {} hit {}", self.id, target);
        Some(
            DamageInfo::new(self.config.base_damage, DamageType::Melee)
                .with_instigator(self.id)
                .with_hit_location(self.weapon_location()),
        )
    }

    /// Advance timers
    pub fn update(&mut self, delta_time: f32) {
        for timer in self.timers.update(delta_time) {
            match timer {
                EnemyTimer::HealthBar => self.hide_health_bar(),
                EnemyTimer::HitReact => self.can_hit_react = true,
                EnemyTimer::Stun => {
                    if self.machine.transition(EnemyState::Alive).is_ok() {
                        self.blackboard.set_bool(BlackboardKey::Stunned, false);
                        self.events.push(EnemyEvent::StunChanged { stunned: false });
                    }
                }
                EnemyTimer::AttackWait => {
                    if !self.is_dead() {
                        self.can_attack = true;
                        self.blackboard.set_bool(BlackboardKey::CanAttack, true);
                    }
                }
                EnemyTimer::Swing => self.swing_active = false,
                EnemyTimer::HitNumber(id) => {
                    self.hit_numbers.retain(|n| n.id != id);
                    self.events.push(EnemyEvent::HitNumberExpired { id });
                }
                EnemyTimer::Destroy => self.events.push(EnemyEvent::Destroyed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironsight_core::SequenceSource;

    fn enemy(max_health: f32) -> Enemy {
        Enemy::new(
            ActorId::new(10, 0),
            EnemyConfig::default().with_max_health(max_health),
            Vec3::ZERO,
        )
    }

    fn player() -> ActorId {
        ActorId::new(1, 0)
    }

    /// Rolls that never stun
    fn no_stun() -> SequenceSource {
        SequenceSource::constant(0.99)
    }

    #[test]
    fn test_lethal_hit_dies_once() {
        let mut enemy = enemy(10.0);
        let mut rng = no_stun();

        assert_eq!(enemy.apply_damage(15.0, Some(player()), &mut rng), 10.0);
        assert_eq!(enemy.health().current(), 0.0);
        assert_eq!(enemy.state(), EnemyState::Dead);
        assert!(enemy.blackboard().get_bool(BlackboardKey::Dead));

        assert_eq!(enemy.apply_damage(5.0, Some(player()), &mut rng), 0.0);
        let deaths = enemy
            .drain_events()
            .into_iter()
            .filter(|e| *e == EnemyEvent::Died)
            .count();
        assert_eq!(deaths, 1);
    }

    #[test]
    fn test_destroyed_after_death_time() {
        let mut enemy = enemy(10.0);
        enemy.apply_damage(10.0, None, &mut no_stun());
        enemy.drain_events();

        enemy.update(3.9);
        assert!(enemy.drain_events().is_empty());
        enemy.update(0.2);
        assert_eq!(enemy.drain_events(), vec![EnemyEvent::Destroyed]);
    }

    #[test]
    fn test_hit_shows_health_bar_and_sets_target() {
        let mut enemy = enemy(100.0);
        enemy.apply_damage(20.0, Some(player()), &mut no_stun());

        assert!(enemy.health_bar_visible());
        assert_eq!(enemy.blackboard().get_actor(BlackboardKey::Target), Some(player()));
        assert_eq!(enemy.state(), EnemyState::Alive);

        enemy.update(2.0);
        // A second hit restarts the display timer
        enemy.apply_damage(20.0, None, &mut no_stun());
        enemy.update(3.0);
        assert!(enemy.health_bar_visible());
        enemy.update(1.1);
        assert!(!enemy.health_bar_visible());
    }

    #[test]
    fn test_stun_and_recover() {
        let mut enemy = enemy(100.0);
        // Roll 0.1 stuns; the range draw of 0.0 gives the minimum duration
        let mut rng = SequenceSource::new(vec![0.1, 0.0]);
        enemy.apply_damage(10.0, None, &mut rng);

        assert_eq!(enemy.state(), EnemyState::Stunned);
        assert!(enemy.blackboard().get_bool(BlackboardKey::Stunned));
        assert!(!enemy.can_attack());
        assert!(enemy
            .drain_events()
            .contains(&EnemyEvent::HitReact { section: HIT_REACT_SECTION }));

        enemy.update(0.6);
        assert_eq!(enemy.state(), EnemyState::Alive);
        assert!(!enemy.blackboard().get_bool(BlackboardKey::Stunned));
    }

    #[test]
    fn test_headshot_bone() {
        let enemy = enemy(100.0);
        assert!(enemy.is_headshot(Some("head")));
        assert!(!enemy.is_headshot(Some("spine_01")));
        assert!(!enemy.is_headshot(None));
    }

    #[test]
    fn test_hit_numbers_expire() {
        let mut enemy = enemy(100.0);
        let first = enemy.show_hit_number(20.0, Vec3::ZERO, false);
        enemy.update(1.0);
        let second = enemy.show_hit_number(50.0, Vec3::ZERO, true);
        assert_ne!(first, second);
        assert_eq!(enemy.hit_numbers().len(), 2);

        enemy.update(0.6);
        assert_eq!(enemy.hit_numbers().len(), 1);
        assert_eq!(enemy.hit_numbers()[0].id, second);
    }

    #[test]
    fn test_attack_cooldown_and_single_swing_hit() {
        let mut enemy = enemy(100.0);
        let mut rng = SequenceSource::constant(0.6);

        assert_eq!(enemy.attack(&mut rng), Some("AttackL"));
        assert!(!enemy.blackboard().get_bool(BlackboardKey::CanAttack));
        assert_eq!(enemy.attack(&mut rng), None);

        let hit = enemy.weapon_overlap(player()).unwrap();
        assert_eq!(hit.amount, 20.0);
        assert_eq!(hit.instigator, Some(enemy.id()));
        assert!(enemy.weapon_overlap(player()).is_none());

        enemy.update(1.0);
        assert!(!enemy.swing_active());
        assert!(enemy.can_attack());
    }

    #[test]
    fn test_patrol_points_in_world_space() {
        let enemy = Enemy::new(ActorId::new(2, 0), EnemyConfig::default(), Vec3::new(100.0, 0.0, 0.0));
        assert_eq!(
            enemy.blackboard().get_vector(BlackboardKey::PatrolPoint),
            Some(Vec3::new(600.0, 0.0, 0.0))
        );
    }
}
