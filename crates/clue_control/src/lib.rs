//! Scripted opponent decision policy.
//!
//! Reads `clue_core` state, never mutates it; every random pick goes through
//! the injected rng. The turn order the rules fix is encoded here:
//! accusation eligibility is evaluated before movement, and the first
//! applicable branch wins.

use clue_core::{
    Accusation, AccusationGrounds, Board, BoardError, Card, GameState, Guess, Registry, RoomName,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An accusation the policy has decided to make, with the grounds the front
/// end narrates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAccusation {
    pub accusation: Accusation,
    pub grounds: AccusationGrounds,
}

/// The computer opponent. Stateless; everything it knows lives on the
/// scripted party's ledger and flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedOpponent;

impl ScriptedOpponent {
    /// Accusation eligibility, checked at the top of every scripted turn.
    ///
    /// The unrefuted-guess shortcut outranks elimination: a guess the human
    /// could not disprove is replayed verbatim as the accusation. Otherwise
    /// the ledger must be down to exactly one unmarked candidate in every
    /// category. `None` means play a normal turn.
    pub fn accusation_check(
        &self,
        state: &GameState,
        registry: &Registry,
    ) -> Option<PlannedAccusation> {
        if state.opponent.has_accused {
            return None;
        }
        if state.opponent.last_guess_unrefuted {
            if let Some(guess) = &state.opponent.last_guess {
                return Some(PlannedAccusation {
                    accusation: Accusation::from(guess),
                    grounds: AccusationGrounds::UnrefutedGuess,
                });
            }
        }

        let ledger = &state.computer.ledger;
        let suspects = ledger.unmarked_suspects(registry);
        let weapons = ledger.unmarked_weapons(registry);
        let rooms = ledger.unmarked_rooms(registry);
        if let ([suspect], [weapon], [room]) =
            (suspects.as_slice(), weapons.as_slice(), rooms.as_slice())
        {
            return Some(PlannedAccusation {
                accusation: Accusation {
                    suspect: suspect.clone(),
                    weapon: weapon.clone(),
                    room: room.clone(),
                },
                grounds: AccusationGrounds::Elimination,
            });
        }
        None
    }

    /// Destination for this turn: a uniform pick among reachable rooms the
    /// ledger has not marked off, excluding the current room. Stays put when
    /// every candidate is already crossed off; there is nowhere useful to
    /// go.
    pub fn plan_move(
        &self,
        state: &GameState,
        board: &Board,
        roll: u8,
        rng: &mut impl Rng,
    ) -> Result<RoomName, BoardError> {
        let current = &state.computer.location;
        let ledger = &state.computer.ledger;
        let candidates: Vec<RoomName> = board
            .reachable_rooms(current, roll)?
            .into_iter()
            .filter(|room| room != current && !ledger.is_marked(&Card::Room(room.clone())))
            .collect();
        Ok(candidates
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| current.clone()))
    }

    /// Guess for the room now occupied: a uniform unmarked suspect paired
    /// with a uniform unmarked weapon. Returns `None` only if a category has
    /// no unmarked entry, which the ledger invariant rules out during normal
    /// play.
    pub fn plan_guess(
        &self,
        state: &GameState,
        registry: &Registry,
        rng: &mut impl Rng,
    ) -> Option<Guess> {
        let ledger = &state.computer.ledger;
        let suspects = ledger.unmarked_suspects(registry);
        let weapons = ledger.unmarked_weapons(registry);
        let suspect = suspects.choose(rng).cloned()?;
        let weapon = weapons.choose(rng).cloned()?;
        Some(Guess::announced(
            suspect,
            weapon,
            state.computer.location.clone(),
        ))
    }
}

#[cfg(test)]
mod tests;
