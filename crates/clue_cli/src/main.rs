use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clue_control::ScriptedOpponent;
use clue_core::{
    advance_round, matching_cards, move_party, new_game, resolve_accusation, resolve_guess,
    roll_dice, Accusation, AccusationGrounds, Board, Card, GameState, Guess, MoveError, PartyId,
    Registry, RoomName,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod console;
mod render;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "clue_cli", about = "Console Clue against a scripted opponent")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer.
    Play {
        /// Seed the deal and every in-game roll for a reproducible game.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnChoice {
    Continue,
    Accuse,
}

// ---------------------------------------------------------------------------
// Game loop
// ---------------------------------------------------------------------------

fn play(seed: Option<u64>) -> Result<()> {
    let resolved_seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(resolved_seed);
    let registry = Registry::standard();
    let board = Board::standard(&registry).context("building the standard board")?;
    let mut state =
        new_game(&registry, resolved_seed, &mut rng).context("dealing a new game")?;
    let opponent = ScriptedOpponent;
    tracing::debug!(
        seed = resolved_seed,
        hand_size = state.player.hand.len(),
        "game dealt"
    );

    welcome()?;

    while !state.is_over() {
        match begin_player_turn(&registry, &state)? {
            TurnChoice::Accuse => {
                player_accusation(&mut state, &registry)?;
            }
            TurnChoice::Continue => {
                player_turn(&mut state, &registry, &board, &mut rng)?;
                computer_turn(&mut state, &registry, &board, &opponent, &mut rng)?;
                advance_round(&mut state);
            }
        }
    }

    render::outcome(&state);
    Ok(())
}

fn welcome() -> Result<()> {
    println!("Welcome to Clue!");
    println!("The goal of the game is to solve a murder. You need to figure out the person, weapon, and room.");
    println!("This game is case-sensitive, so when you type in words, please always capitalize the first letter!");
    println!("Also, always double check your spelling.");
    println!();
    console::pause("Press ENTER to begin the game.")
}

fn begin_player_turn(registry: &Registry, state: &GameState) -> Result<TurnChoice> {
    println!();
    println!("It is your turn!");
    println!();
    println!("Here are your cards:");
    render::player_cards(state);
    println!();
    render::game_card(registry, &state.player.ledger);
    println!();
    println!("Would you like to:");
    println!(" 1. Roll the dice and continue the game OR");
    println!(" 2. Make an accusation");
    console::prompt_until(
        "Type \"1\" to continue or \"2\" to make your accusation: ",
        |answer| match answer {
            "1" => Some(TurnChoice::Continue),
            "2" => Some(TurnChoice::Accuse),
            _ => None,
        },
        "Please type 1 or 2.",
    )
}

// ---------------------------------------------------------------------------
// Player turn
// ---------------------------------------------------------------------------

fn player_turn(
    state: &mut GameState,
    registry: &Registry,
    board: &Board,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    println!();
    println!("You are in the {}", state.player.location);
    console::pause("Press ENTER to roll the dice")?;
    let (roll, roll_events) = roll_dice(state, PartyId::Player, rng);
    render::narrate(&roll_events);
    render::distances_from(board, &state.player.location);

    player_move(state, registry, board, roll)?;
    player_guess(state, registry, rng)
}

fn player_move(
    state: &mut GameState,
    registry: &Registry,
    board: &Board,
    roll: u8,
) -> Result<()> {
    let answer = console::prompt(&format!(
        "Would you like to move to a new room or stay in the {}? Enter \"Move\" or \"Stay\": ",
        state.player.location
    ))?;

    if answer.eq_ignore_ascii_case("move") {
        loop {
            let name = console::prompt(&format!(
                "Which room would you like to move to (remember, you rolled a {roll}): "
            ))?;
            let Some(destination) = registry.room(&name) else {
                println!("The {name} is not a room on the board.");
                list_legal_moves(board, &state.player.location, roll)?;
                println!("Please choose one of these options and try again.");
                continue;
            };
            match move_party(state, board, PartyId::Player, &destination, roll) {
                Ok(events) => {
                    render::narrate(&events);
                    return Ok(());
                }
                Err(MoveError::OutOfRange { from, distance, .. }) => {
                    println!(
                        "The {destination} is {distance} spaces away from the {from}; \
                         you only rolled a {roll}. You cannot move there."
                    );
                    println!("Here are the moves you are allowed to make:");
                    list_legal_moves(board, &state.player.location, roll)?;
                    println!("Please choose one of these options and try again.");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    if !answer.eq_ignore_ascii_case("stay") {
        println!("That is not one of the options. You will stay in your current room.");
    }
    let here = state.player.location.clone();
    let events = move_party(state, board, PartyId::Player, &here, roll)
        .context("staying in place is always legal")?;
    render::narrate(&events);
    Ok(())
}

fn list_legal_moves(board: &Board, from: &RoomName, roll: u8) -> Result<()> {
    println!("1. You can stay in the {from}");
    let mut option = 2;
    for room in board
        .reachable_rooms(from, roll)
        .context("listing reachable rooms")?
    {
        if room != *from {
            println!("{option}. You can move to the {room}");
            option += 1;
        }
    }
    Ok(())
}

fn player_guess(state: &mut GameState, registry: &Registry, rng: &mut ChaCha8Rng) -> Result<()> {
    println!();
    println!("Now, type in your guess. Don't forget to consult your game card above!:");
    println!("Room : {}", state.player.location);
    let suspect = console::prompt_until(
        "Person: ",
        |name| registry.suspect(name),
        "That is not one of the suspects. Check your game card and try again.",
    )?;
    let weapon = console::prompt_until(
        "Weapon: ",
        |name| registry.weapon(name),
        "That is not one of the weapons. Check your game card and try again.",
    )?;
    let guess = Guess::announced(suspect, weapon, state.player.location.clone());

    let outcome = resolve_guess(state, PartyId::Player, &guess, None, rng)
        .context("resolving the player's guess")?;
    render::narrate(&outcome.events);
    if outcome.disclosed.is_some() {
        console::pause("Press ENTER to cross off the card on your Game Card.")?;
        render::game_card(registry, &state.player.ledger);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Player accusation
// ---------------------------------------------------------------------------

fn player_accusation(state: &mut GameState, registry: &Registry) -> Result<()> {
    println!();
    println!("You have chosen to make an accusation.");
    println!("Remember, once you accuse, the game is over.");
    let answer = console::prompt("Are you ready to make your accusation? (Yes/No): ")?;
    if !answer.eq_ignore_ascii_case("yes") {
        println!();
        println!("You have chosen not to make an accusation. Continue on with the game.");
        return Ok(());
    }

    println!();
    println!("Please type in your accusation.");
    let suspect = console::prompt_until(
        "Person: ",
        |name| registry.suspect(name),
        "That is not one of the suspects. Try again.",
    )?;
    let weapon = console::prompt_until(
        "Weapon: ",
        |name| registry.weapon(name),
        "That is not one of the weapons. Try again.",
    )?;
    let room = console::prompt_until(
        "Room: ",
        |name| registry.room(name),
        "That is not one of the rooms. Try again.",
    )?;
    console::pause("\nPress ENTER to reveal the details of the murder...")?;

    let accusation = Accusation {
        suspect,
        weapon,
        room,
    };
    let events = resolve_accusation(
        state,
        PartyId::Player,
        accusation,
        AccusationGrounds::PlayerChoice,
    )
    .context("resolving the player's accusation")?;
    render::narrate(&events);
    Ok(())
}

// ---------------------------------------------------------------------------
// Computer turn
// ---------------------------------------------------------------------------

fn computer_turn(
    state: &mut GameState,
    registry: &Registry,
    board: &Board,
    opponent: &ScriptedOpponent,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    println!();
    println!("It is the computer's turn.");
    console::pause("Press ENTER as you continue through the computer's turn.")?;
    println!("The computer is in the {}", state.computer.location);

    // Accusation eligibility comes before movement.
    if let Some(planned) = opponent.accusation_check(state, registry) {
        tracing::debug!(grounds = ?planned.grounds, "scripted accusation");
        console::pause("The computer has decided to make an accusation. Press ENTER to hear it.")?;
        let events = resolve_accusation(
            state,
            PartyId::Computer,
            planned.accusation,
            planned.grounds,
        )
        .context("resolving the computer's accusation")?;
        render::narrate(&events);
        console::pause("Press ENTER to see if the computer is correct.")?;
        return Ok(());
    }

    let (roll, roll_events) = roll_dice(state, PartyId::Computer, rng);
    render::narrate(&roll_events);
    render::distances_from(board, &state.computer.location);

    let destination = opponent
        .plan_move(state, board, roll, rng)
        .context("planning the computer's move")?;
    tracing::debug!(%destination, roll, "opponent move planned");
    let move_events = move_party(state, board, PartyId::Computer, &destination, roll)
        .context("the policy only plans legal moves")?;
    render::narrate(&move_events);

    let guess = opponent
        .plan_guess(state, registry, rng)
        .context("the scripted ledger always keeps a candidate open")?;
    println!(
        "The computer is guessing: \"{}\" in the \"{}\" with the \"{}\"",
        guess.suspect(),
        guess.room(),
        guess.weapon()
    );

    computer_guess_response(state, &guess, rng)
}

/// The human's side of disproving the computer's guess: show the matches,
/// and pick which card to reveal when there is a real choice.
fn computer_guess_response(
    state: &mut GameState,
    guess: &Guess,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    render::player_cards(state);
    let matches = matching_cards(guess, &state.player.hand);

    let chosen: Option<Card> = match matches.as_slice() {
        [] => None,
        [only] => {
            println!("You have: {only}");
            None
        }
        several => {
            let names: Vec<&str> = several.iter().map(Card::name).collect();
            println!("You have: {}", names.join(", "));
            let picked = console::prompt_until(
                "Which card would you like to show to the computer? Please ENTER card name: ",
                |name| several.iter().find(|card| card.name() == name).cloned(),
                "That is not one of your matching cards. Try again.",
            )?;
            Some(picked)
        }
    };

    let outcome = resolve_guess(state, PartyId::Computer, guess, chosen, rng)
        .context("resolving the computer's guess")?;
    render::narrate(&outcome.events);
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => play(seed),
    }
}
