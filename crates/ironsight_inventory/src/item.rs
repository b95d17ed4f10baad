//! Item rarity

use serde::{Deserialize, Serialize};

/// Maximum number of rating stars shown on the pickup widget
pub const MAX_STARS: usize = 5;

/// Item rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemRarity {
    /// Damaged items
    Damaged,
    /// Common items
    Common,
    /// Uncommon items
    Uncommon,
    /// Rare items
    Rare,
    /// Legendary items
    Legendary,
}

impl Default for ItemRarity {
    fn default() -> Self {
        Self::Common
    }
}

impl ItemRarity {
    /// Number of lit rating stars (1-5)
    pub fn active_stars(&self) -> usize {
        match self {
            Self::Damaged => 1,
            Self::Common => 2,
            Self::Uncommon => 3,
            Self::Rare => 4,
            Self::Legendary => 5,
        }
    }

    /// Lit/unlit flag for each star slot, in display order
    pub fn stars(&self) -> [bool; MAX_STARS] {
        let lit = self.active_stars();
        core::array::from_fn(|i| i < lit)
    }

    /// Get color associated with rarity (RGB)
    pub fn color(&self) -> [f32; 3] {
        match self {
            Self::Damaged => [0.5, 0.5, 0.5],
            Self::Common => [1.0, 1.0, 1.0],
            Self::Uncommon => [0.0, 1.0, 0.0],
            Self::Rare => [0.0, 0.5, 1.0],
            Self::Legendary => [1.0, 0.5, 0.0],
        }
    }
}
