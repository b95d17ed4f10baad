//! Ironsight AI - Enemy Damage Model and Blackboard
//!
//! Decision making (behaviour trees, navigation) is the host's job. This
//! crate keeps the enemy's combat state and publishes it on a blackboard the
//! host's behaviour tree reads.
//!
//! # Features
//!
//! - Alive/Stunned/Dead state machine with random stun rolls
//! - Health bar and floating hit number timers
//! - Attack gating with a cooldown and random attack sections
//! - Typed blackboard keys
//!
//! # Example
//!
//! ```ignore
//! use ironsight_ai::prelude::*;
//!
//! let mut enemy = Enemy::new(id, EnemyConfig::default(), spawn_location);
//! enemy.apply_damage(25.0, Some(player), &mut rng);
//! for event in enemy.drain_events() {
//!     // show health bar, play hit react
//! }
//! ```

pub mod blackboard;
pub mod config;
pub mod enemy;

pub mod prelude {
    pub use crate::blackboard::{Blackboard, BlackboardKey, BlackboardValue};
    pub use crate::config::EnemyConfig;
    pub use crate::enemy::{Enemy, EnemyEvent, EnemyState, HitNumber};
}

pub use prelude::*;
