//! Items lying in (or flying through) the world

use ironsight_combat::WorldItem;
use ironsight_core::ActorId;
use std::collections::BTreeMap;

/// World items keyed by actor id. Iteration is in id order.
#[derive(Debug, Clone, Default)]
pub struct WorldItems {
    items: BTreeMap<ActorId, WorldItem>,
}

impl WorldItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, replacing any item with the same id. Returns its id.
    pub fn insert(&mut self, item: WorldItem) -> ActorId {
        let id = item.id;
        self.items.insert(id, item);
        id
    }

    pub fn get(&self, id: ActorId) -> Option<&WorldItem> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut WorldItem> {
        self.items.get_mut(&id)
    }

    pub fn remove(&mut self, id: ActorId) -> Option<WorldItem> {
        self.items.remove(&id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the ids, for loops that add or remove items
    pub fn ids(&self) -> Vec<ActorId> {
        self.items.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldItem> {
        self.items.values()
    }
}
