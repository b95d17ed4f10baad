//! Blackboard shared with the host's behaviour tree

use ironsight_core::ActorId;
use ironsight_math::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Known blackboard keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlackboardKey {
    /// Actor being chased
    Target,
    Stunned,
    InAttackRange,
    CanAttack,
    Dead,
    /// First patrol point, world space
    PatrolPoint,
    /// Second patrol point, world space
    PatrolPoint2,
    /// The player this enemy hit has died
    PlayerDead,
}

impl BlackboardKey {
    /// Key name as the behaviour tree asset spells it
    pub fn name(&self) -> &'static str {
        match self {
            Self::Target => "Target",
            Self::Stunned => "Stunned",
            Self::InAttackRange => "InAttackRange",
            Self::CanAttack => "CanAttack",
            Self::Dead => "Dead",
            Self::PatrolPoint => "PatrolPoint",
            Self::PatrolPoint2 => "PatrolPoint2",
            Self::PlayerDead => "PlayerDead",
        }
    }
}

/// Blackboard value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BlackboardValue {
    Bool(bool),
    Actor(ActorId),
    Vector(Vec3),
}

/// Key/value store read by the behaviour tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blackboard {
    values: HashMap<BlackboardKey, BlackboardValue>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: BlackboardKey) -> Option<BlackboardValue> {
        self.values.get(&key).copied()
    }

    pub fn set(&mut self, key: BlackboardKey, value: BlackboardValue) {
        self.values.insert(key, value);
    }

    /// Remove a key. Returns the old value.
    pub fn clear(&mut self, key: BlackboardKey) -> Option<BlackboardValue> {
        self.values.remove(&key)
    }

    pub fn set_bool(&mut self, key: BlackboardKey, value: bool) {
        self.set(key, BlackboardValue::Bool(value));
    }

    /// Boolean value; missing or non-bool keys read as false
    pub fn get_bool(&self, key: BlackboardKey) -> bool {
        matches!(self.get(key), Some(BlackboardValue::Bool(true)))
    }

    pub fn set_actor(&mut self, key: BlackboardKey, actor: ActorId) {
        self.set(key, BlackboardValue::Actor(actor));
    }

    pub fn get_actor(&self, key: BlackboardKey) -> Option<ActorId> {
        match self.get(key) {
            Some(BlackboardValue::Actor(actor)) => Some(actor),
            _ => None,
        }
    }

    pub fn set_vector(&mut self, key: BlackboardKey, vector: Vec3) {
        self.set(key, BlackboardValue::Vector(vector));
    }

    pub fn get_vector(&self, key: BlackboardKey) -> Option<Vec3> {
        match self.get(key) {
            Some(BlackboardValue::Vector(v)) => Some(v),
            _ => None,
        }
    }
}
