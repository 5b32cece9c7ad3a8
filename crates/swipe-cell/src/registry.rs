//! Fixed eight-entry slot table.

use smallvec::SmallVec;

use crate::slot::{Side, Slot, SlotPosition};
use crate::triggers::TriggerThresholds;

/// Slots of one row, keyed by [`SlotPosition`].
pub struct SlotRegistry<R> {
    slots: [Option<Slot<R>>; 8],
}

impl<R> Default for SlotRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> SlotRegistry<R> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Store the slot at (`side`, `rank`), replacing any previous one.
    ///
    /// # Panics
    ///
    /// When `rank` is not in 1..=4.
    pub fn register(&mut self, side: Side, rank: u8, slot: Slot<R>) {
        let Some(position) = SlotPosition::new(side, rank) else {
            panic!("slot rank must be in 1..=4, got {rank}");
        };
        self.register_at(position, slot);
    }

    pub fn register_at(&mut self, position: SlotPosition, slot: Slot<R>) {
        if self.slots[position.index()].is_some() {
            log::debug!("replacing slot {position}");
        }
        self.slots[position.index()] = Some(slot);
    }

    pub fn get(&self, position: SlotPosition) -> Option<&Slot<R>> {
        self.slots[position.index()].as_ref()
    }

    pub fn remove(&mut self, position: SlotPosition) -> Option<Slot<R>> {
        self.slots[position.index()].take()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when any rank on `side` is registered.
    pub fn has_slot(&self, side: Side) -> bool {
        !self.positions(side).is_empty()
    }

    /// Registered positions on `side`, lowest rank first.
    pub fn positions(&self, side: Side) -> SmallVec<[SlotPosition; 4]> {
        SlotPosition::ALL
            .iter()
            .copied()
            .filter(|position| position.side() == side && self.get(*position).is_some())
            .collect()
    }

    /// Key of the slot that a drag at `percentage` activates.
    ///
    /// Ranks are scanned in ascending order and the last match wins: rank 1
    /// is a candidate as soon as the drag points at its side, and each
    /// higher registered rank takes over once its threshold is reached.
    /// The right side is scanned after the left, so at exactly 0 a
    /// registered `Right1` wins over `Left1`.
    pub fn active_position(
        &self,
        percentage: f32,
        thresholds: &TriggerThresholds,
    ) -> Option<SlotPosition> {
        let gates = thresholds.activation_gates();
        let mut active = None;

        for (rank, gate) in (1..=SlotPosition::RANKS).zip(gates) {
            if percentage >= gate {
                active = self.registered(Side::Left, rank).or(active);
            }
        }
        for (rank, gate) in (1..=SlotPosition::RANKS).zip(gates) {
            if percentage <= -gate {
                active = self.registered(Side::Right, rank).or(active);
            }
        }

        active
    }

    pub fn active_slot(&self, percentage: f32, thresholds: &TriggerThresholds) -> Option<&Slot<R>> {
        self.active_position(percentage, thresholds)
            .and_then(|position| self.get(position))
    }

    fn registered(&self, side: Side, rank: u8) -> Option<SlotPosition> {
        SlotPosition::new(side, rank).filter(|position| self.get(*position).is_some())
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
