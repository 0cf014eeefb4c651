use super::*;
use crate::test_fixtures::{fixed_state, make_rng, room, suspect, weapon};


// --- Shared test helpers ------------------------------------------------

fn standard_registry() -> Registry {
    Registry::standard()
}

fn standard_board(registry: &Registry) -> Board {
    Board::standard(registry).expect("standard board data is valid")
}

fn guess_of(s: &str, w: &str, location: &str) -> Guess {
    Guess::announced(suspect(s), weapon(w), room(location))
}

fn accusation_of(s: &str, w: &str, r: &str) -> Accusation {
    Accusation {
        suspect: suspect(s),
        weapon: weapon(w),
        room: room(r),
    }
}
