//! The interactive game loop
//!
//! Owns the session, renders the menu, runs rounds, and talks to
//! persistence at startup, on reset, and on quit. All I/O goes through the
//! injected reader/writer; `main` hands in locked stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::console;
use crate::game::{Difficulty, Feedback, Session};
use crate::menu::{MenuChoice, PlayAgain};
use crate::persistence::{self, LoadedScore};

/// Run the game to completion.
///
/// Returns `Err` only for terminal write failures; game and persistence
/// errors are reported on `out` and never abort the loop.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    score_path: &Path,
    seed: u64,
) -> io::Result<()> {
    console::clear_screen(out)?;
    console::banner(out)?;
    writeln!(out)?;

    let loaded = persistence::load_score(score_path);
    match loaded {
        LoadedScore::Missing => {
            writeln!(out, "Warning: no saved score found, starting at 0")?;
        }
        LoadedScore::Corrupt => {
            writeln!(out, "Warning: could not read the saved score, starting at 0")?;
        }
        LoadedScore::Loaded(_) => {}
    }
    let mut session = Session::new(seed, loaded.score());

    loop {
        show_menu(out)?;
        let Some(choice) = read_menu_choice(input, out)? else {
            quit(out, &session, score_path)?;
            break;
        };

        match choice {
            MenuChoice::Play(difficulty) => {
                console::clear_screen(out)?;
                if play_round(input, out, &mut session, difficulty)? == PlayAgain::Quit {
                    quit(out, &session, score_path)?;
                    break;
                }
            }
            MenuChoice::ResetScore => {
                session.reset_score();
                save_with_warning(out, score_path, &session)?;
                writeln!(out, "The score board has been reset!")?;
            }
            MenuChoice::Quit => {
                quit(out, &session, score_path)?;
                break;
            }
        }
    }

    Ok(())
}

fn show_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose your preferred level")?;
    writeln!(out, "--------------------------------------")?;
    for (option, difficulty) in Difficulty::ALL.iter().enumerate() {
        let cfg = difficulty.config();
        writeln!(
            out,
            "{} - {} level (numbers from {} to {})",
            option + 1,
            difficulty.as_str(),
            cfg.low,
            cfg.high
        )?;
    }
    writeln!(out, "--------------------------------------")?;
    writeln!(out, "5 - Reset the score board")?;
    writeln!(out, "0 - Quit program")?;
    writeln!(out, "--------------------------------------")?;
    writeln!(out)
}

/// Prompt until a valid menu option arrives. `None` means end of input.
fn read_menu_choice<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<MenuChoice>> {
    loop {
        let Some(line) = console::prompt_line(input, out, "Enter menu option number: ")? else {
            return Ok(None);
        };
        match MenuChoice::parse(&line) {
            Some(choice) => return Ok(Some(choice)),
            None => writeln!(out, "ERROR: Invalid choice!")?,
        }
    }
}

/// Prompt until the guess parses as an integer. `None` means end of input.
///
/// A malformed line re-prompts without costing an attempt.
fn read_guess<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<i32>> {
    loop {
        let Some(line) = console::prompt_line(input, out, "Guess the number: ")? else {
            return Ok(None);
        };
        match line.trim().parse::<i32>() {
            Ok(guess) => return Ok(Some(guess)),
            Err(_) => writeln!(out, "ERROR: That is not a number!")?,
        }
    }
}

/// Run one round at the given difficulty and ask whether to keep playing.
fn play_round<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut Session,
    difficulty: Difficulty,
) -> io::Result<PlayAgain> {
    let mut round = session.start_round(difficulty);
    let cfg = round.config();

    console::banner(out)?;
    writeln!(
        out,
        "{} level: guessing a number from {} to {}",
        difficulty.as_str(),
        cfg.low,
        cfg.high
    )?;
    writeln!(out)?;

    while !round.is_over() {
        writeln!(
            out,
            "{:<17} {:<25} {:<25}",
            format!("Your score: {}", session.score()),
            format!("Attempts remaining: {}", round.attempts_left()),
            format!("Round number: {}", session.round())
        )?;

        let Some(value) = read_guess(input, out)? else {
            return Ok(PlayAgain::Quit);
        };
        writeln!(out)?;

        match round.guess(value) {
            Feedback::TooHigh => {
                writeln!(out, "The correct number is lower than your guess")?;
            }
            Feedback::TooLow => {
                writeln!(out, "The correct number is higher than your guess")?;
            }
            Feedback::Correct => {
                session.record_win();
                writeln!(out, "You guessed the number correctly!")?;
                writeln!(out, "Your current score is: {}", session.score())?;
            }
        }
    }

    if !round.is_won() {
        writeln!(out, "You are all out of guesses!")?;
    }

    writeln!(out)?;
    writeln!(out, "Play another round? (type no to quit)")?;
    match console::prompt_line(input, out, "> ")? {
        Some(response) => Ok(PlayAgain::from_response(&response)),
        None => Ok(PlayAgain::Quit),
    }
}

fn save_with_warning<W: Write>(out: &mut W, path: &Path, session: &Session) -> io::Result<()> {
    if !persistence::save_score(path, session.score()) {
        writeln!(out, "Warning: could not save your score to {}", path.display())?;
    }
    Ok(())
}

fn quit<W: Write>(out: &mut W, session: &Session, score_path: &Path) -> io::Result<()> {
    writeln!(out, "Quitting program...")?;
    save_with_warning(out, score_path, session)?;
    writeln!(out)?;
    writeln!(out, "THANKS FOR PLAYING THE NUMBER GUESSING GAME")
}
