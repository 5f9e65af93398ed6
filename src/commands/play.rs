//! Interactive play mode
//!
//! Line-based: each line is a word to submit or a `:command`. Puzzles are
//! generated on a background thread while a spinner runs.

use crate::game::{GameResult, GameSession, GameState, MemoryStore, Store};
use crate::generator::GenerateError;
use crate::output::display::{
    write_answers, write_found_words, write_game_summary, write_hint, write_outcome, write_status,
};
use colored::Colorize;
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Error type for play mode
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

const HELP: &[&str] = &[
    "Type a word and press Enter to submit it.",
    ":shuffle (:s)  reorder the outer letters",
    ":words   (:w)  list the words you have found",
    ":hint    (:h)  remaining words by length",
    ":new     (:n)  start a new puzzle",
    ":reveal        show every answer",
    ":quit    (:q)  leave",
];

/// Run the interactive loop until `:quit` or end of input
///
/// Generates a first puzzle if the session has none. Every finished or
/// abandoned puzzle is recorded; the records are returned.
///
/// # Errors
///
/// Returns an error on terminal I/O failure or if the first puzzle cannot
/// be generated. A failed `:new` is reported and play continues.
pub fn run_play<R, W>(
    session: &mut GameSession,
    input: R,
    out: &mut W,
) -> Result<Vec<GameResult>, PlayError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "═".repeat(60).bright_yellow())?;
    writeln!(out, "{}", "   🐝  S P E L L I N G   B E E  🐝".bright_yellow().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_yellow())?;
    write_help(out)?;

    if session.state().is_none() {
        session.new_puzzle();
        await_puzzle(session)?;
    }

    let mut store = MemoryStore::new();
    show_status(session, out)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            ":q" | ":quit" => break,
            ":?" | ":help" => write_help(out)?,
            ":s" | ":shuffle" => {
                session.shuffle_surrounding();
                show_status(session, out)?;
            }
            ":w" | ":words" => {
                if let Some(state) = session.state() {
                    write_found_words(out, state)?;
                }
            }
            ":h" | ":hint" => {
                if let Some(state) = session.state() {
                    write_hint(out, state)?;
                }
            }
            ":reveal" => {
                if let Some(state) = session.state() {
                    write_answers(out, state)?;
                }
            }
            ":n" | ":new" => {
                let previous = session.result();
                session.new_puzzle();
                match await_puzzle(session) {
                    Ok(()) => {
                        if let Some(result) = previous {
                            let Ok(()) = store.save(result);
                        }
                        writeln!(out, "\n   {}", "New puzzle!".bright_cyan().bold())?;
                        show_status(session, out)?;
                    }
                    Err(err) => writeln!(out, "   {}", err.to_string().red())?,
                }
            }
            command if command.starts_with(':') => {
                writeln!(out, "   Unknown command {command}; :help lists commands")?;
            }
            word => submit(session, word, out)?,
        }
        prompt(out)?;
    }

    if let Some(result) = session.result() {
        let Ok(()) = store.save(result);
    }
    write_game_summary(out, store.results())?;
    writeln!(out, "\n👋 Thanks for playing!\n")?;

    Ok(store.results().to_vec())
}

fn submit<W: Write>(session: &mut GameSession, word: &str, out: &mut W) -> Result<(), PlayError> {
    session.clear_input();
    if !word.chars().all(|c| session.type_letter(c)) {
        session.clear_input();
        writeln!(out, "   {}", "Letters only".red())?;
        return Ok(());
    }

    let Some(outcome) = session.submit_current() else {
        return Ok(());
    };
    write_outcome(out, &outcome)?;

    if !outcome.is_accepted() {
        return Ok(());
    }
    if session.state().is_some_and(GameState::is_complete) {
        writeln!(
            out,
            "\n   🏆 {}",
            "You found every word!".bright_green().bold()
        )?;
    }
    show_status(session, out)?;
    Ok(())
}

/// Wait for the requested puzzle with a spinner on stderr
fn await_puzzle(session: &mut GameSession) -> Result<(), GenerateError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating puzzle...");

    while session.is_generating() {
        match session.poll() {
            Ok(true) => break,
            Ok(false) => {
                spinner.tick();
                thread::sleep(Duration::from_millis(50));
            }
            Err(err) => {
                spinner.finish_and_clear();
                return Err(err);
            }
        }
    }

    spinner.finish_and_clear();
    Ok(())
}

fn show_status<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    match session.state() {
        Some(state) => write_status(out, state, session.surrounding_order()),
        None => Ok(()),
    }
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    for line in HELP {
        writeln!(out, "   {line}")?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\n> ")?;
    out.flush()
}
