//! Error types for the inventory system

use crate::ammo::AmmoType;
use crate::lifecycle::ItemState;
use thiserror::Error;

/// Inventory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The ledger was never initialised with this ammo type
    #[error("Ammo type not tracked by ledger: {0:?}")]
    UnknownAmmoType(AmmoType),

    /// Lifecycle edge does not exist
    #[error("Invalid item transition: {from:?} -> {to:?}")]
    InvalidTransition { from: ItemState, to: ItemState },

    /// Operation requires a different lifecycle state
    #[error("Item is {actual:?}, expected {expected:?}")]
    WrongState { expected: ItemState, actual: ItemState },
}

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
