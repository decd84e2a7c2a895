//! Round state machine
//!
//! A round owns one secret target and a shrinking guess budget. The caller
//! feeds guesses in and renders the resulting feedback; nothing here touches
//! the terminal.

use std::cmp::Ordering;

use rand::Rng;

use super::difficulty::RoundConfig;

/// Result of comparing one guess against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Guess was above the target
    TooHigh,
    /// Guess was below the target
    TooLow,
    /// Guess matched the target
    Correct,
}

/// One play of a difficulty level
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    target: i32,
    attempts_left: u32,
    won: bool,
}

impl Round {
    /// Start a round, drawing the target uniformly from `[low, high]` inclusive
    pub fn new(config: RoundConfig, rng: &mut impl Rng) -> Self {
        let target = rng.random_range(config.low..=config.high);
        Self::with_target(config, target)
    }

    /// Start a round with a known target
    pub fn with_target(config: RoundConfig, target: i32) -> Self {
        debug_assert!((config.low..=config.high).contains(&target));
        Self {
            config,
            target,
            attempts_left: config.max_attempts,
            won: false,
        }
    }

    /// Submit one guess. Wrong guesses consume an attempt.
    ///
    /// Must not be called once the round is over.
    pub fn guess(&mut self, value: i32) -> Feedback {
        debug_assert!(!self.is_over());
        match value.cmp(&self.target) {
            Ordering::Greater => {
                self.attempts_left -= 1;
                Feedback::TooHigh
            }
            Ordering::Less => {
                self.attempts_left -= 1;
                Feedback::TooLow
            }
            Ordering::Equal => {
                self.won = true;
                Feedback::Correct
            }
        }
    }

    /// True once the target was guessed or the budget ran out
    pub fn is_over(&self) -> bool {
        self.won || self.attempts_left == 0
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    #[cfg(test)]
    pub fn target(&self) -> i32 {
        self.target
    }
}
