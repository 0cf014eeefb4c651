//! The guess/disprove exchange between a guesser and the other party.
//!
//! Disclosure is positive-only: an empty match set is narrated but never
//! auto-recorded as a negative mark on any ledger.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::{Card, Event, EventEnvelope, GameState, Guess, Hand, PartyId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("chosen card {0} is not among the responder's matching cards")]
    ChoiceNotAmongMatches(Card),
    #[error("the game is already over")]
    GameOver,
}

/// What a resolved guess produced. `matches` is the responder's full match
/// set (the responder and the front end see it; the guesser learns only
/// `disclosed`).
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub matches: Vec<Card>,
    pub disclosed: Option<Card>,
    pub events: Vec<EventEnvelope>,
}

/// Cards of the guessed triple the responder actually holds, in
/// suspect/weapon/room order. Pure; no state is touched.
pub fn matching_cards(guess: &Guess, hand: &Hand) -> Vec<Card> {
    guess
        .cards()
        .into_iter()
        .filter(|card| hand.contains(card))
        .collect()
}

/// Resolves an announced guess against the other party's hand.
///
/// `chosen` carries the human responder's explicit pick when they hold two
/// or more matching cards; pass `None` for a scripted responder and the pick
/// is uniform among the matches. The disclosed card is marked on the
/// guesser's ledger only; the responder already knew it held that card.
///
/// When the scripted party is the guesser, `last_guess` is recorded and
/// `last_guess_unrefuted` set or cleared by whether anything was disclosed.
/// A fully unrefuted guess is the signal the decision policy later reads as
/// grounds for an immediate accusation.
pub fn resolve_guess(
    state: &mut GameState,
    guesser: PartyId,
    guess: &Guess,
    chosen: Option<Card>,
    rng: &mut impl Rng,
) -> Result<GuessOutcome, ProtocolError> {
    if state.is_over() {
        return Err(ProtocolError::GameOver);
    }
    let responder = guesser.other();
    let matches = matching_cards(guess, &state.party(responder).hand);

    let disclosed = if matches.is_empty() {
        if let Some(card) = chosen {
            return Err(ProtocolError::ChoiceNotAmongMatches(card));
        }
        None
    } else if let Some(card) = chosen {
        if !matches.contains(&card) {
            return Err(ProtocolError::ChoiceNotAmongMatches(card));
        }
        Some(card)
    } else {
        matches.choose(rng).cloned()
    };

    let round = state.meta.round;
    let mut events = vec![crate::emit(
        &mut state.counters,
        round,
        Event::GuessMade {
            party: guesser,
            guess: guess.clone(),
        },
    )];

    match &disclosed {
        Some(card) => {
            state.party_mut(guesser).ledger.mark(card.clone());
            events.push(crate::emit(
                &mut state.counters,
                round,
                Event::CardDisclosed {
                    responder,
                    card: card.clone(),
                },
            ));
        }
        None => {
            events.push(crate::emit(
                &mut state.counters,
                round,
                Event::NoCardsMatched { responder },
            ));
        }
    }

    if guesser == PartyId::Computer {
        state.opponent.last_guess = Some(guess.clone());
        state.opponent.last_guess_unrefuted = disclosed.is_none();
    }

    Ok(GuessOutcome {
        matches,
        disclosed,
        events,
    })
}
