//! `clue_core` — deterministic Clue turn/deduction engine.
//!
//! No IO, no logging. All randomness via the passed-in Rng.

mod accuse;
mod board;
mod catalog;
mod engine;
mod ledger;
mod protocol;
mod setup;
mod types;

pub use accuse::{check_accusation, resolve_accusation, AccuseError};
pub use board::{Board, BoardError};
pub use catalog::Registry;
pub use engine::{advance_round, move_party, roll_dice, MoveError};
pub use ledger::Ledger;
pub use protocol::{matching_cards, resolve_guess, GuessOutcome, ProtocolError};
pub use setup::{new_game, SetupError};
pub use types::*;

pub(crate) fn emit(counters: &mut Counters, round: u64, event: Event) -> EventEnvelope {
    let id = EventId(format!("evt_{:06}", counters.next_event_id));
    counters.next_event_id += 1;
    EventEnvelope { id, round, event }
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

#[cfg(test)]
mod tests;
