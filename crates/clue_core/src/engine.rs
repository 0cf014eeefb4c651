//! Turn operations shared by both parties: dice, movement, round advance.

use rand::Rng;
use thiserror::Error;

use crate::{Board, BoardError, Event, EventEnvelope, GameState, PartyId, RoomName};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("{destination} is {distance} spaces from {from}; the roll was {roll}")]
    OutOfRange {
        from: RoomName,
        destination: RoomName,
        distance: u32,
        roll: u8,
    },
    #[error("the game is already over")]
    GameOver,
}

/// Rolls for a turn: a single uniform draw from 2..=12 (not the sum of two
/// independent dice).
pub fn roll_dice(
    state: &mut GameState,
    party: PartyId,
    rng: &mut impl Rng,
) -> (u8, Vec<EventEnvelope>) {
    let roll = rng.gen_range(2..=12);
    let round = state.meta.round;
    let envelope = crate::emit(&mut state.counters, round, Event::DiceRolled { party, roll });
    (roll, vec![envelope])
}

/// Moves a party to `destination` if the roll allows it. Choosing the
/// current room is a legal "stay". Out-of-range destinations are rejected
/// without touching state; the front end re-prompts the human, and the
/// scripted policy never generates one.
pub fn move_party(
    state: &mut GameState,
    board: &Board,
    party: PartyId,
    destination: &RoomName,
    roll: u8,
) -> Result<Vec<EventEnvelope>, MoveError> {
    if state.is_over() {
        return Err(MoveError::GameOver);
    }
    let from = state.party(party).location.clone();
    let distance = board.distance(&from, destination)?;
    if distance > u32::from(roll) {
        return Err(MoveError::OutOfRange {
            from,
            destination: destination.clone(),
            distance,
            roll,
        });
    }

    let round = state.meta.round;
    let event = if *destination == from {
        Event::PartyStayed { party, room: from }
    } else {
        state.party_mut(party).location = destination.clone();
        Event::PartyMoved {
            party,
            from,
            to: destination.clone(),
        }
    };
    Ok(vec![crate::emit(&mut state.counters, round, event)])
}

/// Bumps the round counter. Called once per player/computer turn pair.
pub fn advance_round(state: &mut GameState) {
    state.meta.round += 1;
}
