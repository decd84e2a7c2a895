//! Hi-Lo - a terminal number guessing game
//!
//! Core modules:
//! - `game`: Difficulty table, round state machine, session state
//! - `menu`: Menu and play-again input parsing
//! - `persistence`: Score file load/save
//! - `console`: Prompts, banner, screen clearing
//! - `app`: The interactive game loop

pub mod app;
pub mod console;
pub mod game;
pub mod menu;
pub mod persistence;

pub use game::{Difficulty, Feedback, Round, RoundConfig, Session};
pub use menu::{MenuChoice, PlayAgain};

/// Game configuration constants
pub mod consts {
    /// Score file location, relative to the working directory
    pub const SCORE_FILE: &str = "data/user_score.txt";
}
