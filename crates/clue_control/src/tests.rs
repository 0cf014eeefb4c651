use super::*;
use clue_core::test_fixtures::{
    fixed_state, fixed_state_with_solution, make_rng, room, suspect, weapon,
};
use clue_core::{
    advance_round, move_party, new_game, resolve_accusation, resolve_guess, roll_dice, Card,
    PartyId, Solution,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn standard() -> (Registry, Board) {
    let registry = Registry::standard();
    let board = Board::standard(&registry).expect("standard board data is valid");
    (registry, board)
}

#[test]
fn no_accusation_while_more_than_one_candidate_remains() {
    let (registry, _) = standard();
    let state = fixed_state();
    assert_eq!(ScriptedOpponent.accusation_check(&state, &registry), None);
}

#[test]
fn elimination_accusation_fires_with_one_candidate_left_per_category() {
    let (registry, _) = standard();
    let mut state = fixed_state_with_solution(Solution {
        suspect: suspect("Plum"),
        weapon: weapon("Knife"),
        room: room("Garage"),
    });
    // Every non-solution card has been seen: dealt or disclosed.
    for card in registry.all_cards() {
        if !state.solution.contains(&card) {
            state.computer.ledger.mark(card);
        }
    }

    let planned = ScriptedOpponent
        .accusation_check(&state, &registry)
        .expect("one candidate left in every category");
    assert_eq!(planned.grounds, AccusationGrounds::Elimination);
    assert_eq!(
        planned.accusation,
        Accusation {
            suspect: suspect("Plum"),
            weapon: weapon("Knife"),
            room: room("Garage"),
        }
    );

    resolve_accusation(
        &mut state,
        PartyId::Computer,
        planned.accusation,
        planned.grounds,
    )
    .expect("first accusation resolves");
    assert!(
        state.outcome.as_ref().expect("game over").correct,
        "elimination is sound while the ledger invariant holds"
    );
}

#[test]
fn elimination_needs_every_category_narrowed() {
    let (registry, _) = standard();
    // Swap the fixed deal so the computer holds the suspect/weapon-heavy
    // hand: suspects are down to Scarlet, but weapons and rooms stay open.
    let mut state = fixed_state();
    std::mem::swap(&mut state.player, &mut state.computer);
    assert_eq!(ScriptedOpponent.accusation_check(&state, &registry), None);

    state.computer.ledger.mark(Card::Weapon(weapon("Wrench")));
    assert_eq!(
        ScriptedOpponent.accusation_check(&state, &registry),
        None,
        "rooms are still wide open"
    );

    for r in &registry.rooms {
        if *r != state.solution.room {
            state.computer.ledger.mark(Card::Room(r.clone()));
        }
    }
    let planned = ScriptedOpponent
        .accusation_check(&state, &registry)
        .expect("every category narrowed to one");
    assert_eq!(planned.grounds, AccusationGrounds::Elimination);
    assert_eq!(
        planned.accusation,
        Accusation {
            suspect: suspect("Scarlet"),
            weapon: weapon("Rope"),
            room: room("Kitchen"),
        }
    );
}

#[test]
fn unrefuted_guess_outranks_elimination() {
    let (registry, _) = standard();
    let mut state = fixed_state();
    // Make the elimination branch eligible too, then set the flag: the
    // forced accusation must replay the unrefuted guess, not the ledger.
    for card in registry.all_cards() {
        if !state.solution.contains(&card) {
            state.computer.ledger.mark(card);
        }
    }
    let guess = Guess::announced(suspect("Peacock"), weapon("Pistol"), room("Office"));
    state.opponent.last_guess = Some(guess.clone());
    state.opponent.last_guess_unrefuted = true;

    let planned = ScriptedOpponent
        .accusation_check(&state, &registry)
        .expect("flag forces an accusation");
    assert_eq!(planned.grounds, AccusationGrounds::UnrefutedGuess);
    assert_eq!(planned.accusation, Accusation::from(&guess));
}

#[test]
fn plan_move_stays_when_every_candidate_is_marked_off() {
    let (_, board) = standard();
    let mut rng = make_rng();
    // Fixed deal: the computer holds all eight non-solution rooms, so from
    // the Courtyard on a 5 both candidates (Garage, Living Room) are marked.
    let state = fixed_state();
    let destination = ScriptedOpponent
        .plan_move(&state, &board, 5, &mut rng)
        .expect("known room");
    assert_eq!(destination, room("Courtyard"));
}

#[test]
fn plan_move_picks_the_unmarked_reachable_room() {
    let (_, board) = standard();
    let mut rng = make_rng();
    // Solution room Garage: the computer's deal holds every other room, so
    // the Garage is its only unmarked room and sits 5 spaces away.
    let state = fixed_state_with_solution(Solution {
        suspect: suspect("Scarlet"),
        weapon: weapon("Rope"),
        room: room("Garage"),
    });
    let destination = ScriptedOpponent
        .plan_move(&state, &board, 5, &mut rng)
        .expect("known room");
    assert_eq!(destination, room("Garage"));
}

#[test]
fn plan_move_never_exceeds_the_roll() {
    let (_, board) = standard();
    let mut rng = make_rng();
    let state = fixed_state_with_solution(Solution {
        suspect: suspect("Scarlet"),
        weapon: weapon("Rope"),
        room: room("Bedroom"),
    });
    // Bedroom is the only unmarked room but 10 spaces from the Courtyard:
    // on a 4 the policy must stay put.
    let destination = ScriptedOpponent
        .plan_move(&state, &board, 4, &mut rng)
        .expect("known room");
    assert_eq!(destination, room("Courtyard"));
}

#[test]
fn plan_guess_draws_unmarked_candidates_for_the_occupied_room() {
    let (registry, _) = standard();
    let mut rng = make_rng();
    let mut state = fixed_state();
    state.computer.location = room("Kitchen");

    for _ in 0..50 {
        let guess = ScriptedOpponent
            .plan_guess(&state, &registry, &mut rng)
            .expect("unmarked candidates remain");
        assert_eq!(guess.room(), &room("Kitchen"));
        assert!(!state
            .computer
            .ledger
            .is_marked(&Card::Suspect(guess.suspect().clone())));
        assert!(!state
            .computer
            .ledger
            .is_marked(&Card::Weapon(guess.weapon().clone())));
    }
}

#[test]
fn policy_driven_games_end_with_a_scripted_accusation() {
    use rand::seq::SliceRandom;

    let (registry, board) = standard();
    let opponent = ScriptedOpponent;
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut state = new_game(&registry, 7, &mut rng).expect("standard deal");

    for _ in 0..500 {
        // Human side: random legal play.
        let (roll, _) = roll_dice(&mut state, PartyId::Player, &mut rng);
        let from = state.player.location.clone();
        let reachable = board.reachable_rooms(&from, roll).expect("known room");
        let destination = reachable.choose(&mut rng).cloned().expect("non-empty");
        move_party(&mut state, &board, PartyId::Player, &destination, roll)
            .expect("destination drawn from the reachable set");
        let s = registry.suspects.choose(&mut rng).cloned().expect("non-empty");
        let w = registry.weapons.choose(&mut rng).cloned().expect("non-empty");
        let guess = Guess::announced(s, w, state.player.location.clone());
        resolve_guess(&mut state, PartyId::Player, &guess, None, &mut rng).expect("resolves");

        // Scripted side, in the fixed order: accusation check first.
        if let Some(planned) = opponent.accusation_check(&state, &registry) {
            let grounds = planned.grounds;
            resolve_accusation(&mut state, PartyId::Computer, planned.accusation, grounds)
                .expect("first accusation resolves");
            if grounds == AccusationGrounds::Elimination {
                assert!(
                    state.outcome.as_ref().expect("game over").correct,
                    "elimination accusations are sound"
                );
            }
            break;
        }
        let (roll, _) = roll_dice(&mut state, PartyId::Computer, &mut rng);
        let destination = opponent
            .plan_move(&state, &board, roll, &mut rng)
            .expect("known room");
        move_party(&mut state, &board, PartyId::Computer, &destination, roll)
            .expect("the policy only plans legal moves");
        let guess = opponent
            .plan_guess(&state, &registry, &mut rng)
            .expect("unmarked candidates remain");
        resolve_guess(&mut state, PartyId::Computer, &guess, None, &mut rng).expect("resolves");
        advance_round(&mut state);
    }

    let outcome = state
        .outcome
        .as_ref()
        .expect("the scripted party accused within the round cap");
    assert_eq!(outcome.accuser, PartyId::Computer);
}
