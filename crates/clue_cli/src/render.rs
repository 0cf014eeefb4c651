//! Console rendering: the game card, board distances, and round narration
//! driven by the engine's events.

use clue_core::{Board, Card, Event, EventEnvelope, GameState, Ledger, PartyId, Registry, RoomName, Solution};

fn mark(marked: bool) -> &'static str {
    if marked {
        "X"
    } else {
        ""
    }
}

/// The grouped suspects/weapons/rooms table with `X` marks.
pub fn game_card(registry: &Registry, ledger: &Ledger) {
    println!("GAME CARD:");
    println!("-----------------");
    println!("People:");
    println!("-----------------");
    for s in &registry.suspects {
        println!(
            "{:<12} | {}",
            s.0,
            mark(ledger.is_marked(&Card::Suspect(s.clone())))
        );
    }
    println!("-----------------");
    println!("Weapons:");
    println!("-----------------");
    for w in &registry.weapons {
        println!(
            "{:<12} | {}",
            w.0,
            mark(ledger.is_marked(&Card::Weapon(w.clone())))
        );
    }
    println!("-----------------");
    println!("Rooms:");
    println!("-----------------");
    for r in &registry.rooms {
        println!(
            "{:<12} | {}",
            r.0,
            mark(ledger.is_marked(&Card::Room(r.clone())))
        );
    }
    println!("-----------------");
}

pub fn player_cards(state: &GameState) {
    let names: Vec<&str> = state.player.hand.cards().iter().map(Card::name).collect();
    println!("Player Cards: {}", names.join(", "));
}

pub fn distances_from(board: &Board, room: &RoomName) {
    println!("Room distances from {room}:");
    for other in board.rooms() {
        if other == room {
            continue;
        }
        if let Ok(dist) = board.distance(room, other) {
            println!("- {other}: {dist}");
        }
    }
}

/// Prints the player-facing line for each event. Guess announcements are
/// handled at the prompt site, so they (and the end-of-game reveal) only go
/// to the trace log here.
pub fn narrate(events: &[EventEnvelope]) {
    for envelope in events {
        if let Ok(json) = serde_json::to_string(envelope) {
            tracing::trace!(target: "clue_cli::events", %json);
        }
        match &envelope.event {
            Event::DiceRolled {
                party: PartyId::Player,
                roll,
            } => println!("You rolled a: {roll}"),
            Event::DiceRolled {
                party: PartyId::Computer,
                roll,
            } => println!("The computer rolled a: {roll}"),
            Event::PartyMoved {
                party: PartyId::Player,
                to,
                ..
            } => println!("You have moved to the {to}"),
            Event::PartyMoved {
                party: PartyId::Computer,
                to,
                ..
            } => println!("The computer has moved to the {to}"),
            Event::PartyStayed {
                party: PartyId::Player,
                room,
            } => println!("You are staying in the {room}"),
            Event::PartyStayed {
                party: PartyId::Computer,
                room,
            } => println!("The computer is staying in the {room}"),
            Event::CardDisclosed {
                responder: PartyId::Computer,
                card,
            } => println!("The computer is showing you: {card}"),
            Event::CardDisclosed {
                responder: PartyId::Player,
                card,
            } => println!("You have shown the computer: {card}"),
            Event::NoCardsMatched {
                responder: PartyId::Computer,
            } => println!("The computer does not have any of those cards."),
            Event::NoCardsMatched {
                responder: PartyId::Player,
            } => println!("You do not have any of those cards. You show the computer nothing."),
            Event::AccusationMade {
                party: PartyId::Player,
                accusation,
                ..
            } => println!(
                "You are accusing: {} in the {} with the {}",
                accusation.suspect, accusation.room, accusation.weapon
            ),
            Event::AccusationMade {
                party: PartyId::Computer,
                accusation,
                ..
            } => println!(
                "The computer is accusing: {} in the {} with the {}",
                accusation.suspect, accusation.room, accusation.weapon
            ),
            Event::GuessMade { .. } | Event::GameEnded { .. } => {}
        }
    }
}

fn murder_details(solution: &Solution) {
    println!("Murder Details:");
    println!("Person: {}", solution.suspect);
    println!("Weapon: {}", solution.weapon);
    println!("Room: {}", solution.room);
}

/// End-of-game reveal and banner.
pub fn outcome(state: &GameState) {
    let Some(outcome) = &state.outcome else {
        return;
    };
    println!();
    murder_details(&state.solution);
    println!();
    match (outcome.accuser, outcome.correct) {
        (PartyId::Player, true) => {
            println!("Congratulations! You correctly solved the murder! You win!");
        }
        (PartyId::Player, false) => {
            println!("Your accusation was incorrect. You did not solve the murder.");
            println!("You lose.");
        }
        (PartyId::Computer, true) => {
            println!("The computer guessed correctly!");
            println!("The computer has won.");
        }
        (PartyId::Computer, false) => {
            println!("The computer's accusation was incorrect.");
            println!("The computer has lost, so you have won!");
        }
    }
    println!("GAME OVER");
}
