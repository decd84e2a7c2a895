//! Menu and play-again input parsing

use crate::game::Difficulty;

/// A validated main-menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Play a round at the given difficulty (options 1-4)
    Play(Difficulty),
    /// Reset the score board to zero (option 5)
    ResetScore,
    /// Save and quit (option 0)
    Quit,
}

impl MenuChoice {
    /// Parse a raw input line into a menu choice.
    ///
    /// Strict integer parse, then range check; every accepted number maps to
    /// an action, so there is no "valid but unmapped" branch to defend.
    pub fn parse(input: &str) -> Option<Self> {
        let choice: u32 = input.trim().parse().ok()?;
        match choice {
            0 => Some(MenuChoice::Quit),
            1 => Some(MenuChoice::Play(Difficulty::Easy)),
            2 => Some(MenuChoice::Play(Difficulty::Medium)),
            3 => Some(MenuChoice::Play(Difficulty::Hard)),
            4 => Some(MenuChoice::Play(Difficulty::ExtraHard)),
            5 => Some(MenuChoice::ResetScore),
            _ => None,
        }
    }
}

/// The player's answer to the end-of-round "play again?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAgain {
    /// Back to the menu
    Continue,
    /// Save and quit
    Quit,
}

impl PlayAgain {
    /// Normalize a free-form response: trimmed, lowercased "no"/"n" quits,
    /// anything else continues. This prompt never re-asks.
    pub fn from_response(response: &str) -> Self {
        match response.trim().to_lowercase().as_str() {
            "no" | "n" => PlayAgain::Quit,
            _ => PlayAgain::Continue,
        }
    }
}
