//! Type definitions for `clue_core`.
//!
//! All public types, structs, enums, and name newtypes used by the engine.

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

// ---------------------------------------------------------------------------
// Name newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(SuspectName);
string_id!(WeaponName);
string_id!(RoomName);
string_id!(EventId);

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// One card of the deck: a suspect, a weapon, or a room. Identity is the
/// name; names are unique across the standard catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Suspect(SuspectName),
    Weapon(WeaponName),
    Room(RoomName),
}

impl Card {
    pub fn name(&self) -> &str {
        match self {
            Card::Suspect(s) => &s.0,
            Card::Weapon(w) => &w.0,
            Card::Room(r) => &r.0,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Parties
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyId {
    Player,
    Computer,
}

impl PartyId {
    pub fn other(self) -> PartyId {
        match self {
            PartyId::Player => PartyId::Computer,
            PartyId::Computer => PartyId::Player,
        }
    }
}

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartyId::Player => f.write_str("player"),
            PartyId::Computer => f.write_str("computer"),
        }
    }
}

// ---------------------------------------------------------------------------
// Triples
// ---------------------------------------------------------------------------

/// The hidden murder triple. Ground truth, never exposed to either party
/// except through the accusation protocol and the end-of-game reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub suspect: SuspectName,
    pub weapon: WeaponName,
    pub room: RoomName,
}

impl Solution {
    pub fn contains(&self, card: &Card) -> bool {
        match card {
            Card::Suspect(s) => *s == self.suspect,
            Card::Weapon(w) => *w == self.weapon,
            Card::Room(r) => *r == self.room,
        }
    }
}

/// An announced guess. The room is pinned to the guesser's location at
/// construction; the rules do not let it be chosen freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    suspect: SuspectName,
    weapon: WeaponName,
    room: RoomName,
}

impl Guess {
    /// `location` is the room the guesser currently occupies.
    pub fn announced(suspect: SuspectName, weapon: WeaponName, location: RoomName) -> Self {
        Self {
            suspect,
            weapon,
            room: location,
        }
    }

    pub fn suspect(&self) -> &SuspectName {
        &self.suspect
    }

    pub fn weapon(&self) -> &WeaponName {
        &self.weapon
    }

    pub fn room(&self) -> &RoomName {
        &self.room
    }

    /// The triple as cards, in suspect/weapon/room order.
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Suspect(self.suspect.clone()),
            Card::Weapon(self.weapon.clone()),
            Card::Room(self.room.clone()),
        ]
    }
}

/// An accusation triple. Unlike a guess, every component is freely chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accusation {
    pub suspect: SuspectName,
    pub weapon: WeaponName,
    pub room: RoomName,
}

impl From<&Guess> for Accusation {
    fn from(guess: &Guess) -> Self {
        Accusation {
            suspect: guess.suspect().clone(),
            weapon: guess.weapon().clone(),
            room: guess.room().clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// State types
// ---------------------------------------------------------------------------

/// The cards dealt privately to one party. Fixed after the deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyState {
    pub location: RoomName,
    pub hand: Hand,
    pub ledger: Ledger,
}

/// Scripted-party bookkeeping read by the decision policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpponentFlags {
    /// Most recent guess the scripted party announced.
    pub last_guess: Option<Guess>,
    /// Set when the human disclosed nothing against `last_guess`.
    pub last_guess_unrefuted: bool,
    /// The scripted party accuses at most once.
    pub has_accused: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaState {
    pub round: u64,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counters {
    pub next_event_id: u64,
}

/// Recorded when an accusation resolves. The game is over once this exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOutcome {
    pub accuser: PartyId,
    pub accusation: Accusation,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub meta: MetaState,
    pub player: PartyState,
    pub computer: PartyState,
    /// Ground truth — never exposed to either party during play.
    pub solution: Solution,
    pub opponent: OpponentFlags,
    pub outcome: Option<GameOutcome>,
    pub counters: Counters,
}

impl GameState {
    pub fn party(&self, id: PartyId) -> &PartyState {
        match id {
            PartyId::Player => &self.player,
            PartyId::Computer => &self.computer,
        }
    }

    pub fn party_mut(&mut self, id: PartyId) -> &mut PartyState {
        match id {
            PartyId::Player => &mut self.player,
            PartyId::Computer => &mut self.computer,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

/// Why an accusation was made. Carried on the event so the front end can
/// narrate the scripted party's reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccusationGrounds {
    /// The human chose to accuse.
    PlayerChoice,
    /// Scripted: the last guess went fully unrefuted.
    UnrefutedGuess,
    /// Scripted: one unmarked candidate left in every category.
    Elimination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub id: EventId,
    pub round: u64,
    pub event: Event,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    DiceRolled {
        party: PartyId,
        roll: u8,
    },
    PartyMoved {
        party: PartyId,
        from: RoomName,
        to: RoomName,
    },
    PartyStayed {
        party: PartyId,
        room: RoomName,
    },
    GuessMade {
        party: PartyId,
        guess: Guess,
    },
    /// The responder revealed one held card to the guesser.
    CardDisclosed {
        responder: PartyId,
        card: Card,
    },
    /// The responder holds none of the guessed triple.
    NoCardsMatched {
        responder: PartyId,
    },
    AccusationMade {
        party: PartyId,
        accusation: Accusation,
        grounds: AccusationGrounds,
    },
    GameEnded {
        winner: PartyId,
        solution: Solution,
    },
}
