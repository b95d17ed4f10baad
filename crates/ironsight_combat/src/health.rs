//! Health pool

use serde::{Deserialize, Serialize};

/// Health in `[0, max]` that dies exactly once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// Current health
    current: f32,
    /// Maximum health
    max: f32,
    /// Whether the owner is dead
    #[serde(default)]
    dead: bool,
}

impl Health {
    /// Create a full health pool
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: max,
            max,
            dead: false,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Apply damage.
    /// Returns the damage actually dealt and whether this hit killed.
    /// Once dead, further damage is ignored.
    pub fn apply_damage(&mut self, amount: f32) -> (f32, bool) {
        if self.dead {
            return (0.0, false);
        }

        let amount = amount.max(0.0);
        let before = self.current;
        self.current = (self.current - amount).max(0.0);

        let died = self.current <= 0.0;
        if died {
            self.dead = true;
        }
        (before - self.current, died)
    }

    /// Heal, clamped to max. Returns the amount healed.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.dead {
            return 0.0;
        }
        let before = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.max);
        self.current - before
    }

    /// Get health as a percentage (0.0 - 1.0)
    pub fn percent(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}
