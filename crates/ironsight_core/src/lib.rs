//! # ironsight_core - Gameplay Core Primitives
//!
//! Foundational pieces shared by every gameplay crate:
//! - **ActorId**: non-owning references between actors
//! - **TimerSet**: purpose-keyed deferred callbacks, driven by the host tick
//! - **RandomSource**: injectable, seedable randomness
//! - **StateMachine**: finite state machine with an explicit edge table
//!
//! Nothing here blocks or spawns threads. The host advances time by calling
//! `update(delta_time)` on the owning component once per frame.

pub mod error;
pub mod id;
pub mod random;
pub mod state_machine;
pub mod timer;

pub use error::*;
pub use id::*;
pub use random::*;
pub use state_machine::*;
pub use timer::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{CoreError, Result};
    pub use crate::id::{ActorId, ActorIdGenerator};
    pub use crate::random::{ChaChaSource, RandomSource, SequenceSource};
    pub use crate::state_machine::{State, StateMachine};
    pub use crate::timer::TimerSet;
}
