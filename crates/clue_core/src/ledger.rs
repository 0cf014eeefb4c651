//! Per-party knowledge ledger, the "game card".
//!
//! Marks mean "known excluded from the solution": the party either holds the
//! card or has been shown it. Marks accumulate monotonically; there is no
//! unmark operation, by construction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Card, Registry, RoomName, SuspectName, WeaponName};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    marked: HashSet<Card>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, card: Card) {
        self.marked.insert(card);
    }

    pub fn is_marked(&self, card: &Card) -> bool {
        self.marked.contains(card)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Suspects not yet excluded, in catalog order.
    pub fn unmarked_suspects(&self, registry: &Registry) -> Vec<SuspectName> {
        registry
            .suspects
            .iter()
            .filter(|s| !self.marked.contains(&Card::Suspect((*s).clone())))
            .cloned()
            .collect()
    }

    /// Weapons not yet excluded, in catalog order.
    pub fn unmarked_weapons(&self, registry: &Registry) -> Vec<WeaponName> {
        registry
            .weapons
            .iter()
            .filter(|w| !self.marked.contains(&Card::Weapon((*w).clone())))
            .cloned()
            .collect()
    }

    /// Rooms not yet excluded, in catalog order.
    pub fn unmarked_rooms(&self, registry: &Registry) -> Vec<RoomName> {
        registry
            .rooms
            .iter()
            .filter(|r| !self.marked.contains(&Card::Room((*r).clone())))
            .cloned()
            .collect()
    }
}
