//! Interpolation slots
//!
//! A character has a small table of attach points in front of its camera.
//! Weapons always fly to slot 0. Everything else goes to whichever other slot
//! currently has the fewest items heading for it, so simultaneous pickups
//! spread out instead of stacking.

use ironsight_math::{Rotator, Vec3};
use serde::{Deserialize, Serialize};

/// Slot reserved for weapons
pub const WEAPON_SLOT: usize = 0;

/// Configured position of a slot relative to the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpSlotLayout {
    pub name: String,
    /// Offset along camera forward (x), right (y) and up (z)
    pub offset: Vec3,
}

impl InterpSlotLayout {
    pub fn new(name: impl Into<String>, offset: Vec3) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }

    /// Weapon slot plus six spread slots
    pub fn default_layout() -> Vec<Self> {
        vec![
            Self::new("Weapon", Vec3::new(250.0, 0.0, 65.0)),
            Self::new("Interp1", Vec3::new(200.0, -80.0, -40.0)),
            Self::new("Interp2", Vec3::new(200.0, 80.0, -40.0)),
            Self::new("Interp3", Vec3::new(200.0, -120.0, 0.0)),
            Self::new("Interp4", Vec3::new(200.0, 120.0, 0.0)),
            Self::new("Interp5", Vec3::new(200.0, -80.0, 40.0)),
            Self::new("Interp6", Vec3::new(200.0, 80.0, 40.0)),
        ]
    }
}

/// A slot and the number of items currently assigned to it
#[derive(Debug, Clone, PartialEq)]
pub struct InterpSlot {
    pub layout: InterpSlotLayout,
    occupancy: u32,
}

impl InterpSlot {
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }
}

/// Ordered table of interpolation slots
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationSlots {
    slots: Vec<InterpSlot>,
}

impl InterpolationSlots {
    /// Build from a layout, all slots empty
    pub fn from_layout(layout: &[InterpSlotLayout]) -> Self {
        Self {
            slots: layout
                .iter()
                .cloned()
                .map(|layout| InterpSlot {
                    layout,
                    occupancy: 0,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InterpSlot> {
        self.slots.get(index)
    }

    /// Occupancy of a slot (0 if out of range)
    pub fn occupancy(&self, index: usize) -> u32 {
        self.slots.get(index).map(InterpSlot::occupancy).unwrap_or(0)
    }

    /// Index of the least occupied non-weapon slot, lowest index on ties.
    /// Falls back to the weapon slot when there are no others.
    pub fn select_lowest_occupancy_slot(&self) -> usize {
        self.slots
            .iter()
            .enumerate()
            .skip(WEAPON_SLOT + 1)
            .min_by_key(|(index, slot)| (slot.occupancy, *index))
            .map(|(index, _)| index)
            .unwrap_or(WEAPON_SLOT)
    }

    /// Slot an item should fly to
    pub fn slot_for(&self, is_weapon: bool) -> usize {
        if is_weapon {
            WEAPON_SLOT
        } else {
            self.select_lowest_occupancy_slot()
        }
    }

    /// Change a slot's occupancy by -1, 0 or +1.
    ///
    /// Out-of-range indices and other deltas are ignored. Decrements stop at
    /// zero. Returns whether anything changed.
    pub fn adjust_occupancy(&mut self, index: usize, delta: i32) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            log::trace!("Ignoring occupancy change for missing slot {}", index);
            return false;
        };
        match delta {
            1 => {
                slot.occupancy += 1;
                true
            }
            -1 if slot.occupancy > 0 => {
                slot.occupancy -= 1;
                true
            }
            _ => false,
        }
    }

    /// World location of a slot for a camera pose
    pub fn world_location(&self, index: usize, camera_location: Vec3, camera_rotation: Rotator) -> Option<Vec3> {
        let offset = self.slots.get(index)?.layout.offset;
        Some(
            camera_location
                + camera_rotation.forward() * offset.x
                + camera_rotation.right() * offset.y
                + camera_rotation.up() * offset.z,
        )
    }
}

impl Default for InterpolationSlots {
    fn default() -> Self {
        Self::from_layout(&InterpSlotLayout::default_layout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn slots_with(occupancy: &[u32]) -> InterpolationSlots {
        let layout: Vec<_> = (0..occupancy.len())
            .map(|i| InterpSlotLayout::new(format!("S{}", i), Vec3::ZERO))
            .collect();
        let mut slots = InterpolationSlots::from_layout(&layout);
        for (i, count) in occupancy.iter().enumerate() {
            for _ in 0..*count {
                slots.adjust_occupancy(i, 1);
            }
        }
        slots
    }

    #[test]
    fn test_picks_first_minimum() {
        let slots = slots_with(&[3, 1, 1, 2]);
        assert_eq!(slots.select_lowest_occupancy_slot(), 1);
    }

    #[test]
    fn test_picks_first_minimum_after_weapon_slot() {
        // Item slots 1..=4 hold [3, 1, 1, 2]
        let slots = slots_with(&[0, 3, 1, 1, 2]);
        assert_eq!(slots.select_lowest_occupancy_slot(), 2);
    }

    #[test]
    fn test_weapon_slot_is_never_selected() {
        let slots = slots_with(&[0, 4, 2, 5]);
        assert_eq!(slots.select_lowest_occupancy_slot(), 2);
        assert_eq!(slots.slot_for(true), WEAPON_SLOT);
        assert_eq!(slots.slot_for(false), 2);
    }

    #[test]
    fn test_adjust_ignores_bad_input() {
        let mut slots = slots_with(&[0, 0]);
        assert!(!slots.adjust_occupancy(5, 1));
        assert!(!slots.adjust_occupancy(1, 2));
        assert!(!slots.adjust_occupancy(1, -1));
        assert!(!slots.adjust_occupancy(1, 0));
        assert_eq!(slots.occupancy(1), 0);
    }

    #[test]
    fn test_world_location_uses_camera_axes() {
        let slots = InterpolationSlots::from_layout(&[InterpSlotLayout::new(
            "Weapon",
            Vec3::new(100.0, 0.0, 10.0),
        )]);
        let loc = slots
            .world_location(0, Vec3::new(0.0, 0.0, 50.0), Rotator::from_yaw(90.0))
            .unwrap();
        assert_relative_eq!(loc.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(loc.y, 100.0, epsilon = 1e-3);
        assert_relative_eq!(loc.z, 60.0, epsilon = 1e-3);
    }

    proptest! {
        #[test]
        fn prop_balanced_assignment(picks in 1usize..40) {
            let mut slots = InterpolationSlots::default();
            for _ in 0..picks {
                let index = slots.select_lowest_occupancy_slot();
                slots.adjust_occupancy(index, 1);
            }
            let counts: Vec<u32> = (1..slots.len()).map(|i| slots.occupancy(i)).collect();
            let max = *counts.iter().max().unwrap();
            let min = *counts.iter().min().unwrap();
            prop_assert!(max - min <= 1);
            prop_assert_eq!(slots.occupancy(WEAPON_SLOT), 0);
        }
    }
}
