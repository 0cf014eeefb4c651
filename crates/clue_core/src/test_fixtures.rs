//! Shared test fixtures for `clue_core` and downstream crates.
//!
//! `fixed_state()` pins the solution to (Scarlet, Rope, Kitchen) and deals
//! the pool in catalog order, so tests know exactly who holds what without
//! touching an rng. `make_rng()` is the deterministic rng every test uses.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::setup::dealt_party;
use crate::{
    Card, Counters, GameState, MetaState, OpponentFlags, Registry, RoomName, Solution,
    SuspectName, WeaponName,
};

pub fn suspect(name: &str) -> SuspectName {
    SuspectName(name.to_string())
}

pub fn weapon(name: &str) -> WeaponName {
    WeaponName(name.to_string())
}

pub fn room(name: &str) -> RoomName {
    RoomName(name.to_string())
}

/// Deterministic RNG seeded with 42.
pub fn make_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// State with solution (Scarlet, Rope, Kitchen) and a catalog-order deal:
/// the player takes the first nine dealable cards, the computer the rest.
/// Both parties start in the Courtyard.
pub fn fixed_state() -> GameState {
    fixed_state_with_solution(Solution {
        suspect: suspect("Scarlet"),
        weapon: weapon("Rope"),
        room: room("Kitchen"),
    })
}

/// Like `fixed_state`, for an arbitrary pinned solution.
pub fn fixed_state_with_solution(solution: Solution) -> GameState {
    let registry = Registry::standard();
    let pool: Vec<Card> = registry
        .all_cards()
        .into_iter()
        .filter(|card| !solution.contains(card))
        .collect();
    assert_eq!(pool.len() % 2, 0, "standard catalogs deal evenly");
    let half = pool.len() / 2;
    let player_cards = pool[..half].to_vec();
    let computer_cards = pool[half..].to_vec();

    let start = registry.rooms[0].clone();
    GameState {
        meta: MetaState { round: 0, seed: 42 },
        player: dealt_party(player_cards, start.clone()),
        computer: dealt_party(computer_cards, start),
        solution,
        opponent: OpponentFlags::default(),
        outcome: None,
        counters: Counters { next_event_id: 0 },
    }
}
