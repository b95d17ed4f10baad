//! Error types for the core library

use thiserror::Error;

/// Core errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The state machine has no edge between the two states
    #[error("Transition not allowed: {from} -> {to}")]
    TransitionNotAllowed { from: String, to: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
