//! Whole-game drives of the core operations: seeded playouts where both
//! parties roll, move, and guess at random, checking the ledger invariant
//! the whole way before settling the game with an accusation.

use clue_core::test_fixtures::{fixed_state, make_rng, room, suspect, weapon};
use clue_core::{
    advance_round, move_party, new_game, resolve_accusation, resolve_guess, roll_dice,
    Accusation, AccusationGrounds, Board, Card, GameState, Guess, PartyId, Registry,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn solution_cards(state: &GameState) -> [Card; 3] {
    [
        Card::Suspect(state.solution.suspect.clone()),
        Card::Weapon(state.solution.weapon.clone()),
        Card::Room(state.solution.room.clone()),
    ]
}

fn assert_solution_unmarked(state: &GameState) {
    for card in solution_cards(state) {
        assert!(
            !state.player.ledger.is_marked(&card),
            "player ledger leaked solution card {card}"
        );
        assert!(
            !state.computer.ledger.is_marked(&card),
            "computer ledger leaked solution card {card}"
        );
    }
}

#[test]
fn random_playouts_never_leak_the_solution() {
    let registry = Registry::standard();
    let board = Board::standard(&registry).expect("standard board");

    for seed in 0..10u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = new_game(&registry, seed, &mut rng).expect("standard deal");
        let mut last_player_marks = state.player.ledger.marked_count();
        let mut last_computer_marks = state.computer.ledger.marked_count();

        for _ in 0..40 {
            for party in [PartyId::Player, PartyId::Computer] {
                let (roll, _) = roll_dice(&mut state, party, &mut rng);
                let from = state.party(party).location.clone();
                let reachable = board.reachable_rooms(&from, roll).expect("known room");
                let destination = reachable
                    .choose(&mut rng)
                    .cloned()
                    .expect("reachable set contains the current room");
                move_party(&mut state, &board, party, &destination, roll)
                    .expect("destination drawn from the reachable set");

                let s = registry
                    .suspects
                    .choose(&mut rng)
                    .cloned()
                    .expect("catalog is non-empty");
                let w = registry
                    .weapons
                    .choose(&mut rng)
                    .cloned()
                    .expect("catalog is non-empty");
                let guess = Guess::announced(s, w, state.party(party).location.clone());
                resolve_guess(&mut state, party, &guess, None, &mut rng)
                    .expect("exchange resolves");

                assert_solution_unmarked(&state);
                assert!(
                    state.player.ledger.marked_count() >= last_player_marks,
                    "ledgers only gain marks"
                );
                assert!(
                    state.computer.ledger.marked_count() >= last_computer_marks,
                    "ledgers only gain marks"
                );
                last_player_marks = state.player.ledger.marked_count();
                last_computer_marks = state.computer.ledger.marked_count();
            }
            advance_round(&mut state);
        }

        let accusation = Accusation {
            suspect: state.solution.suspect.clone(),
            weapon: state.solution.weapon.clone(),
            room: state.solution.room.clone(),
        };
        resolve_accusation(
            &mut state,
            PartyId::Player,
            accusation,
            AccusationGrounds::PlayerChoice,
        )
        .expect("first accusation resolves");
        assert!(state.outcome.as_ref().expect("game over").correct);
    }
}

#[test]
fn unrefuted_guess_of_the_solution_wins_on_the_forced_accusation() {
    let mut state = fixed_state();
    let mut rng = make_rng();

    // Computer reaches the Kitchen (free from the Garage) and guesses the
    // exact solution; the player can disclose nothing.
    state.computer.location = room("Kitchen");
    let guess = Guess::announced(suspect("Scarlet"), weapon("Rope"), room("Kitchen"));
    let outcome =
        resolve_guess(&mut state, PartyId::Computer, &guess, None, &mut rng).expect("resolves");
    assert!(outcome.disclosed.is_none());
    assert!(state.opponent.last_guess_unrefuted);

    let accusation = Accusation::from(state.opponent.last_guess.as_ref().expect("recorded"));
    resolve_accusation(
        &mut state,
        PartyId::Computer,
        accusation,
        AccusationGrounds::UnrefutedGuess,
    )
    .expect("first accusation resolves");
    let outcome = state.outcome.as_ref().expect("game over");
    assert!(outcome.correct);
    assert_eq!(outcome.accuser, PartyId::Computer);
}

#[test]
fn forced_accusation_is_still_verified_against_the_solution() {
    // The zero-disclosure shortcut conflates "opponent holds none of the
    // three" with "guess equals the solution". When they differ, the forced
    // accusation goes through anyway and resolution catches the mismatch.
    let mut state = fixed_state();
    let mut rng = make_rng();

    // Courtyard is the computer's own card, so the player holds none of the
    // triple even though the room component is wrong.
    let guess = Guess::announced(suspect("Scarlet"), weapon("Rope"), room("Courtyard"));
    resolve_guess(&mut state, PartyId::Computer, &guess, None, &mut rng).expect("resolves");
    assert!(state.opponent.last_guess_unrefuted);

    let accusation = Accusation::from(state.opponent.last_guess.as_ref().expect("recorded"));
    resolve_accusation(
        &mut state,
        PartyId::Computer,
        accusation,
        AccusationGrounds::UnrefutedGuess,
    )
    .expect("first accusation resolves");
    let outcome = state.outcome.as_ref().expect("game over");
    assert!(!outcome.correct, "wrong room, wrong accusation");
}
