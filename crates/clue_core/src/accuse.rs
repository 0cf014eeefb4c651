//! Accusation resolution. One shot, irrevocable, always verified against
//! the hidden solution.

use thiserror::Error;

use crate::{
    Accusation, AccusationGrounds, Event, EventEnvelope, GameOutcome, GameState, PartyId, Solution,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccuseError {
    #[error("the game is already over")]
    GameOver,
}

/// True iff all three components match the hidden solution. No partial
/// credit.
pub fn check_accusation(accusation: &Accusation, solution: &Solution) -> bool {
    accusation.suspect == solution.suspect
        && accusation.weapon == solution.weapon
        && accusation.room == solution.room
}

/// Ends the game on an accusation, right or wrong. A wrong accusation hands
/// the win to the other party. Emits the accusation and the end-of-game
/// reveal of the solution.
pub fn resolve_accusation(
    state: &mut GameState,
    party: PartyId,
    accusation: Accusation,
    grounds: AccusationGrounds,
) -> Result<Vec<EventEnvelope>, AccuseError> {
    if state.is_over() {
        return Err(AccuseError::GameOver);
    }
    let correct = check_accusation(&accusation, &state.solution);
    let winner = if correct { party } else { party.other() };
    let round = state.meta.round;

    let mut events = vec![crate::emit(
        &mut state.counters,
        round,
        Event::AccusationMade {
            party,
            accusation: accusation.clone(),
            grounds,
        },
    )];

    if party == PartyId::Computer {
        state.opponent.has_accused = true;
    }
    state.outcome = Some(GameOutcome {
        accuser: party,
        accusation,
        correct,
    });

    events.push(crate::emit(
        &mut state.counters,
        round,
        Event::GameEnded {
            winner,
            solution: state.solution.clone(),
        },
    ));
    Ok(events)
}
