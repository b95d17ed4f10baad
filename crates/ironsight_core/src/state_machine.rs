//! Finite State Machine with an explicit edge table
//!
//! Transitions are only taken along edges registered up front. Anything else
//! is rejected and leaves the machine untouched.

use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A state in the state machine
pub trait State: Copy + Eq + Hash + Debug {}

/// Finite State Machine
#[derive(Debug, Clone)]
pub struct StateMachine<S>
where
    S: State,
{
    /// Current state
    current: S,
    /// Previous state
    previous: Option<S>,
    /// Allowed targets from each state
    edges: HashMap<S, Vec<S>>,
}

impl<S> StateMachine<S>
where
    S: State,
{
    /// Create a new state machine with no edges
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            previous: None,
            edges: HashMap::new(),
        }
    }

    /// Add an allowed edge (builder form)
    pub fn with_edge(mut self, from: S, to: S) -> Self {
        self.allow(from, to);
        self
    }

    /// Add an allowed edge
    pub fn allow(&mut self, from: S, to: S) {
        let targets = self.edges.entry(from).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    /// Get current state
    pub fn current(&self) -> S {
        self.current
    }

    /// Get previous state
    pub fn previous(&self) -> Option<S> {
        self.previous
    }

    /// Check if in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current == state
    }

    /// Check whether an edge exists from the current state to `to`
    pub fn can_transition(&self, to: S) -> bool {
        self.edges
            .get(&self.current)
            .map(|targets| targets.contains(&to))
            .unwrap_or(false)
    }

    /// Move along an allowed edge. Returns the state that was left.
    pub fn transition(&mut self, to: S) -> Result<S> {
        if !self.can_transition(to) {
            return Err(CoreError::TransitionNotAllowed {
                from: format!("{:?}", self.current),
                to: format!("{:?}", to),
            });
        }
        let from = self.current;
        self.previous = Some(from);
        self.current = to;
        Ok(from)
    }
}
