//! Ironsight - Third-Person Shooter Gameplay Core
//!
//! Host layer that puts the combat, inventory and AI crates together into a
//! playable session.
//!
//! # Features
//!
//! - Player character: combat input, item hover and pickup, weapon swap
//! - Player health with a timed death sequence
//! - Zoom, look rates and crosshair spread
//! - Explosive barrels
//! - Arena host that ticks every actor and routes shots and pickups
//! - TOML/JSON gameplay configuration
//!
//! # Example
//!
//! ```ignore
//! use ironsight::prelude::*;
//!
//! let config = GameplayConfig::load();
//! let mut arena = Arena::new(config, SphereScene::new(), PinholeViewport::new(size, 90.0));
//! let enemy = arena.spawn_enemy(Vec3::new(800.0, 0.0, 0.0));
//!
//! arena.player_mut().fire_pressed();
//! for event in arena.tick(1.0 / 60.0) {
//!     // play effects, update widgets
//! }
//! ```

pub mod aim;
pub mod arena;
pub mod config;
pub mod error;
pub mod explosive;
pub mod player;
pub mod sandbox;
pub mod vitals;
pub mod world;

pub mod prelude {
    pub use crate::aim::{AimFeel, LookRates};
    pub use crate::arena::{Arena, ArenaEvent};
    pub use crate::config::{AimConfig, AmmoConfig, GameplayConfig, PlayerConfig};
    pub use crate::error::{ConfigError, Result};
    pub use crate::explosive::{Explosive, ExplosiveConfig};
    pub use crate::player::{PickupOutcome, PlayerCharacter, PlayerEvent, Shot};
    pub use crate::sandbox::{PinholeViewport, SceneActor, SphereScene};
    pub use crate::vitals::{PlayerVitals, VitalsEvent};
    pub use crate::world::WorldItems;
}

pub use prelude::*;
