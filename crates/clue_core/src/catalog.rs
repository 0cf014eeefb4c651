//! Fixed entity catalogs: suspects, weapons, rooms.
//!
//! Built once at startup and passed by reference wherever needed; nothing in
//! the engine holds catalog data in ambient/global state.

use serde::{Deserialize, Serialize};

use crate::{Card, RoomName, SuspectName, WeaponName};

const SUSPECTS: &[&str] = &["Green", "Mustard", "Peacock", "Plum", "Scarlet", "White"];

const WEAPONS: &[&str] = &["Candlestick", "Knife", "Lead Pipe", "Pistol", "Rope", "Wrench"];

const ROOMS: &[&str] = &[
    "Courtyard",
    "Garage",
    "Game Room",
    "Bedroom",
    "Bathroom",
    "Office",
    "Kitchen",
    "Dining Room",
    "Living Room",
];

/// The three immutable catalogs. Catalog order is the canonical iteration
/// order everywhere in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub suspects: Vec<SuspectName>,
    pub weapons: Vec<WeaponName>,
    pub rooms: Vec<RoomName>,
}

impl Registry {
    /// The standard catalogs: six suspects, six weapons, nine rooms.
    pub fn standard() -> Self {
        Registry {
            suspects: SUSPECTS
                .iter()
                .map(|s| SuspectName((*s).to_string()))
                .collect(),
            weapons: WEAPONS.iter().map(|w| WeaponName((*w).to_string())).collect(),
            rooms: ROOMS.iter().map(|r| RoomName((*r).to_string())).collect(),
        }
    }

    /// All cards in catalog order: suspects, then weapons, then rooms.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.suspects.len() + self.weapons.len() + self.rooms.len());
        cards.extend(self.suspects.iter().cloned().map(Card::Suspect));
        cards.extend(self.weapons.iter().cloned().map(Card::Weapon));
        cards.extend(self.rooms.iter().cloned().map(Card::Room));
        cards
    }

    /// Exact-name lookup. Returns `None` for names outside the catalog, the
    /// signal front ends use to re-prompt.
    pub fn suspect(&self, name: &str) -> Option<SuspectName> {
        self.suspects.iter().find(|s| s.0 == name).cloned()
    }

    pub fn weapon(&self, name: &str) -> Option<WeaponName> {
        self.weapons.iter().find(|w| w.0 == name).cloned()
    }

    pub fn room(&self, name: &str) -> Option<RoomName> {
        self.rooms.iter().find(|r| r.0 == name).cloned()
    }
}
