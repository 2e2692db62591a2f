//! Provably-fair RPS console game.
//!
//! Takes an odd number (>= 3) of distinct move names as arguments; their
//! order defines the cyclic dominance. Prints the computer's move commitment
//! (an HMAC) before the menu, then reveals the key after the player's move so
//! the result can be audited.

mod table;

use rps_game_core::{GameSession, MoveSet, OsEntropy, PlayerInput};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_menu(out: &mut impl Write, moves: &MoveSet) -> io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, name) in moves.names().enumerate() {
        writeln!(out, "{} - {}", i + 1, name)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")?;
    writeln!(out, "Enter your move: ")
}

/// Drive one session over the given reader and writer until it resolves,
/// the player exits, or input ends.
fn run_round(
    session: &mut GameSession,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    writeln!(out, "HMAC: {}", session.commitment())?;
    print_menu(&mut out, session.moves())?;

    for line in input.lines() {
        let line = line?;
        match session.parse_input(&line) {
            Ok(PlayerInput::Help) => {
                writeln!(out)?;
                writeln!(out, "Results are from the user's perspective:")?;
                table::render_help(&mut out, session.moves(), session.outcome_table())?;
                print_menu(&mut out, session.moves())?;
            }
            Ok(PlayerInput::Exit) => {
                if let Err(e) = session.exit() {
                    writeln!(out, "{e}")?;
                }
                info!(session = %session.id(), "player exited without playing");
                break;
            }
            Ok(PlayerInput::Move(ordinal)) => {
                match session.play(ordinal) {
                    Ok(result) => {
                        let moves = session.moves();
                        writeln!(out, "Your move: {}", moves.name(result.human).unwrap_or("?"))?;
                        writeln!(
                            out,
                            "Computer move: {}",
                            moves.name(result.computer).unwrap_or("?")
                        )?;
                        writeln!(out, "{}", result.outcome)?;
                        writeln!(out, "HMAC key: {}", result.reveal.key)?;
                        info!(session = %session.id(), outcome = %result.outcome, "round resolved");
                    }
                    Err(e) => writeln!(out, "{e}")?,
                }
                break;
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                print_menu(&mut out, session.moves())?;
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let names: Vec<String> = std::env::args().skip(1).collect();
    let moves = match MoveSet::new(names) {
        Ok(moves) => moves,
        Err(e) => {
            println!("Error: {e}");
            println!("Usage: rps-game-cli <move> <move> <move> [...]  (odd count, all distinct)");
            std::process::exit(1);
        }
    };

    let mut session = match GameSession::new(moves, &mut OsEntropy) {
        Ok(session) => session,
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    };
    info!(session = %session.id(), moves = session.moves().len(), "session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_round(&mut session, stdin.lock(), stdout.lock()) {
        eprintln!("I/O error: {e}");
        std::process::exit(1);
    }
}
