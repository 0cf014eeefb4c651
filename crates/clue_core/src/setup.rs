//! Deal & solution generation: builds a fresh `GameState` from the catalogs.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::{
    Card, Counters, GameState, Hand, Ledger, MetaState, OpponentFlags, PartyState, Registry,
    RoomName, Solution,
};

/// Fixed-data failures detected while constructing a game. Fatal; never a
/// runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("catalog `{0}` is empty")]
    EmptyCatalog(&'static str),
    #[error("duplicate card name across catalogs: {0}")]
    DuplicateName(String),
    #[error("dealable pool holds {0} cards; splitting hands evenly needs an even count")]
    UnevenPool(usize),
    #[error("board distance data references unknown room: {0}")]
    UnknownBoardRoom(String),
}

/// Picks the hidden solution, deals the remaining cards into two equal
/// disjoint hands, and marks each party's own cards on its ledger.
///
/// `seed` is recorded on the state for reproducibility reporting only; the
/// draws come from `rng`.
pub fn new_game(registry: &Registry, seed: u64, rng: &mut impl Rng) -> Result<GameState, SetupError> {
    validate_catalogs(registry)?;

    let solution = Solution {
        suspect: registry
            .suspects
            .choose(rng)
            .cloned()
            .ok_or(SetupError::EmptyCatalog("suspects"))?,
        weapon: registry
            .weapons
            .choose(rng)
            .cloned()
            .ok_or(SetupError::EmptyCatalog("weapons"))?,
        room: registry
            .rooms
            .choose(rng)
            .cloned()
            .ok_or(SetupError::EmptyCatalog("rooms"))?,
    };

    // Startable pool: everything except the three solution cards.
    let mut pool: Vec<Card> = registry
        .all_cards()
        .into_iter()
        .filter(|card| !solution.contains(card))
        .collect();
    if pool.len() % 2 != 0 {
        return Err(SetupError::UnevenPool(pool.len()));
    }

    pool.shuffle(rng);
    let computer_cards = pool.split_off(pool.len() / 2);
    let player_cards = pool;

    // Both parties open in the first catalog room (the Courtyard on the
    // standard board).
    let start = registry
        .rooms
        .first()
        .cloned()
        .ok_or(SetupError::EmptyCatalog("rooms"))?;

    Ok(GameState {
        meta: MetaState { round: 0, seed },
        player: dealt_party(player_cards, start.clone()),
        computer: dealt_party(computer_cards, start),
        solution,
        opponent: OpponentFlags::default(),
        outcome: None,
        counters: Counters { next_event_id: 0 },
    })
}

/// Builds a party state with every dealt card pre-marked on its own ledger.
pub(crate) fn dealt_party(cards: Vec<Card>, location: RoomName) -> PartyState {
    let mut ledger = Ledger::new();
    for card in &cards {
        ledger.mark(card.clone());
    }
    PartyState {
        location,
        hand: Hand::new(cards),
        ledger,
    }
}

fn validate_catalogs(registry: &Registry) -> Result<(), SetupError> {
    if registry.suspects.is_empty() {
        return Err(SetupError::EmptyCatalog("suspects"));
    }
    if registry.weapons.is_empty() {
        return Err(SetupError::EmptyCatalog("weapons"));
    }
    if registry.rooms.is_empty() {
        return Err(SetupError::EmptyCatalog("rooms"));
    }
    let all = registry.all_cards();
    let mut seen: HashSet<&str> = HashSet::new();
    for card in &all {
        if !seen.insert(card.name()) {
            return Err(SetupError::DuplicateName(card.name().to_string()));
        }
    }
    Ok(())
}
