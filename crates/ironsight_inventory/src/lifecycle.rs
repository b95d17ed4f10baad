//! Item lifecycle
//!
//! An item is always in exactly one [`ItemState`]. Every state maps to a fixed
//! [`PresentationFlags`] bundle, and [`ItemLifecycle::set_state`] is the only
//! place those flags change. Other code can read them but never write them.

use crate::error::{InventoryError, Result};
use ironsight_core::{State, StateMachine};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a world item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemState {
    /// Idle in the world, can be hovered and picked up
    Pickup,
    /// Thrown and simulating physics until it settles
    Falling,
    /// Flying toward the player after being selected
    EquipInterping,
    /// Held by a character
    Equipped,
    /// Consumed into a character's inventory
    PickedUp,
}

impl State for ItemState {}

impl Default for ItemState {
    fn default() -> Self {
        Self::Pickup
    }
}

/// Collision mode of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionMode {
    /// No collision at all
    None,
    /// Only reported to queries (traces, overlaps)
    QueryOnly,
    /// Queries and physics response
    QueryAndPhysics,
}

/// Physical and visual presentation of an item in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationFlags {
    /// Mesh is rendered
    pub mesh_visible: bool,
    /// Mesh collision mode
    pub mesh_collision: CollisionMode,
    /// Mesh blocks static world geometry (so it can land)
    pub mesh_blocks_world: bool,
    /// Mesh is simulated by physics
    pub simulate_physics: bool,
    /// Gravity applies to the mesh
    pub gravity: bool,
    /// Pickup sphere reports character overlaps
    pub area_overlap: bool,
    /// Trace box blocks the visibility channel (hover trace target)
    pub trace_blocks_visibility: bool,
    /// Pickup prompt may be shown while hovered
    pub prompt_allowed: bool,
}

impl PresentationFlags {
    /// Flag bundle for a lifecycle state
    pub const fn for_state(state: ItemState) -> Self {
        match state {
            ItemState::Pickup => Self {
                mesh_visible: true,
                mesh_collision: CollisionMode::None,
                mesh_blocks_world: false,
                simulate_physics: false,
                gravity: false,
                area_overlap: true,
                trace_blocks_visibility: true,
                prompt_allowed: true,
            },
            ItemState::Falling => Self {
                mesh_visible: true,
                mesh_collision: CollisionMode::QueryAndPhysics,
                mesh_blocks_world: true,
                simulate_physics: true,
                gravity: true,
                area_overlap: false,
                trace_blocks_visibility: false,
                prompt_allowed: false,
            },
            ItemState::EquipInterping | ItemState::Equipped => Self {
                mesh_visible: true,
                mesh_collision: CollisionMode::None,
                mesh_blocks_world: false,
                simulate_physics: false,
                gravity: false,
                area_overlap: false,
                trace_blocks_visibility: false,
                prompt_allowed: false,
            },
            ItemState::PickedUp => Self {
                mesh_visible: false,
                mesh_collision: CollisionMode::None,
                mesh_blocks_world: false,
                simulate_physics: false,
                gravity: false,
                area_overlap: false,
                trace_blocks_visibility: false,
                prompt_allowed: false,
            },
        }
    }
}

/// Item lifecycle state machine together with the flags it owns
#[derive(Debug, Clone)]
pub struct ItemLifecycle {
    machine: StateMachine<ItemState>,
    flags: PresentationFlags,
}

impl ItemLifecycle {
    /// Create a lifecycle starting in `initial`
    pub fn new(initial: ItemState) -> Self {
        let machine = StateMachine::new(initial)
            .with_edge(ItemState::Pickup, ItemState::EquipInterping)
            .with_edge(ItemState::EquipInterping, ItemState::Equipped)
            .with_edge(ItemState::EquipInterping, ItemState::PickedUp)
            // Flight cancelled: owner gone or the pickup was rejected
            .with_edge(ItemState::EquipInterping, ItemState::Pickup)
            .with_edge(ItemState::Equipped, ItemState::Falling)
            .with_edge(ItemState::Falling, ItemState::Pickup);

        Self {
            machine,
            flags: PresentationFlags::for_state(initial),
        }
    }

    /// Current state
    pub fn state(&self) -> ItemState {
        self.machine.current()
    }

    /// Current presentation flags
    pub fn flags(&self) -> &PresentationFlags {
        &self.flags
    }

    /// Whether `to` is reachable from the current state
    pub fn can_enter(&self, to: ItemState) -> bool {
        self.machine.can_transition(to)
    }

    /// Move to a new state and apply its flag bundle
    pub fn set_state(&mut self, to: ItemState) -> Result<()> {
        let from = self.machine.current();
        self.machine
            .transition(to)
            .map_err(|_| InventoryError::InvalidTransition { from, to })?;
        self.flags = PresentationFlags::for_state(to);
        log::trace!("Item lifecycle {:?} -> {:?}", from, to);
        Ok(())
    }
}

impl Default for ItemLifecycle {
    fn default() -> Self {
        Self::new(ItemState::Pickup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut life = ItemLifecycle::default();
        assert!(life.flags().area_overlap);

        life.set_state(ItemState::EquipInterping).unwrap();
        life.set_state(ItemState::Equipped).unwrap();
        assert_eq!(life.flags().mesh_collision, CollisionMode::None);
        assert!(!life.flags().prompt_allowed);

        life.set_state(ItemState::Falling).unwrap();
        assert!(life.flags().simulate_physics);
        assert!(life.flags().gravity);

        life.set_state(ItemState::Pickup).unwrap();
        assert_eq!(*life.flags(), PresentationFlags::for_state(ItemState::Pickup));
    }

    #[test]
    fn test_invalid_transition_keeps_state() {
        let mut life = ItemLifecycle::default();
        let err = life.set_state(ItemState::Equipped).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InvalidTransition {
                from: ItemState::Pickup,
                to: ItemState::Equipped,
            }
        );
        assert_eq!(life.state(), ItemState::Pickup);
        assert!(life.flags().trace_blocks_visibility);
    }

    #[test]
    fn test_flags_always_match_state() {
        let mut life = ItemLifecycle::default();
        let path = [
            ItemState::EquipInterping,
            ItemState::Pickup,
            ItemState::EquipInterping,
            ItemState::PickedUp,
        ];
        for state in path {
            life.set_state(state).unwrap();
            assert_eq!(*life.flags(), PresentationFlags::for_state(state));
        }
        assert!(!life.flags().mesh_visible);
    }

    #[test]
    fn test_spawn_equipped() {
        let life = ItemLifecycle::new(ItemState::Equipped);
        assert!(!life.flags().area_overlap);
        assert!(life.can_enter(ItemState::Falling));
        assert!(!life.can_enter(ItemState::Pickup));
    }

    #[test]
    fn test_equipped_rejects_equip_interping() {
        let mut life = ItemLifecycle::new(ItemState::Equipped);
        let err = life.set_state(ItemState::EquipInterping).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InvalidTransition {
                from: ItemState::Equipped,
                to: ItemState::EquipInterping,
            }
        );
        assert_eq!(life.state(), ItemState::Equipped);
        assert_eq!(*life.flags(), PresentationFlags::for_state(ItemState::Equipped));
    }

    #[test]
    fn test_edge_table_is_exact() {
        use ItemState::*;
        let all = [Pickup, Falling, EquipInterping, Equipped, PickedUp];
        let allowed = [
            (Pickup, EquipInterping),
            (EquipInterping, Equipped),
            (EquipInterping, PickedUp),
            (EquipInterping, Pickup),
            (Equipped, Falling),
            (Falling, Pickup),
        ];

        for from in all {
            for to in all {
                let mut life = ItemLifecycle::new(from);
                let expected = allowed.contains(&(from, to));
                assert_eq!(life.can_enter(to), expected, "{:?} -> {:?}", from, to);
                assert_eq!(life.set_state(to).is_ok(), expected, "{:?} -> {:?}", from, to);

                let landed = if expected { to } else { from };
                assert_eq!(life.state(), landed);
                assert_eq!(*life.flags(), PresentationFlags::for_state(landed));
            }
        }
    }
}
