//! Actor identifiers
//!
//! Actors never hold each other directly. A back-reference (item → owning
//! character, enemy → controller) is an `ActorId` that is looked up each time
//! it is used, and the lookup may fail once the target is gone.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A unique actor identifier with a generation counter for safe reuse
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId {
    /// Lower 32 bits: index, Upper 32 bits: generation
    bits: u64,
}

impl ActorId {
    /// Create a new ID from index and generation
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self {
            bits: (generation as u64) << 32 | index as u64,
        }
    }

    /// Get the index portion
    #[inline]
    pub const fn index(&self) -> u32 {
        self.bits as u32
    }

    /// Get the generation portion
    #[inline]
    pub const fn generation(&self) -> u32 {
        (self.bits >> 32) as u32
    }

    /// Get the raw bits
    #[inline]
    pub const fn to_bits(&self) -> u64 {
        self.bits
    }

    /// Create from raw bits
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({}v{})", self.index(), self.generation())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index(), self.generation())
    }
}

/// Hands out actor ids, recycling freed indices with a bumped generation
#[derive(Debug, Default)]
pub struct ActorIdGenerator {
    generations: Vec<u32>,
    free: Vec<u32>,
}

impl ActorIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id
    pub fn next(&mut self) -> ActorId {
        if let Some(index) = self.free.pop() {
            let generation = self.generations[index as usize];
            ActorId::new(index, generation)
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            ActorId::new(index, 0)
        }
    }

    /// Release an id. Stale ids (wrong generation) are ignored.
    pub fn release(&mut self, id: ActorId) {
        let index = id.index() as usize;
        match self.generations.get_mut(index) {
            Some(generation) if *generation == id.generation() => {
                *generation = generation.wrapping_add(1);
                self.free.push(id.index());
            }
            _ => {}
        }
    }

    /// Check whether an id still refers to a live actor
    pub fn is_alive(&self, id: ActorId) -> bool {
        self.generations
            .get(id.index() as usize)
            .map(|g| *g == id.generation() && !self.free.contains(&id.index()))
            .unwrap_or(false)
    }
}
