//! Session state carried across rounds
//!
//! An explicit state struct owned by the game loop; the score travels through
//! persistence, the round counter and RNG live only for the process.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use super::round::Round;

/// Cross-round game state
#[derive(Debug)]
pub struct Session {
    /// Cumulative count of rounds won, persisted across runs
    score: u64,
    /// Rounds started this session (1-based once play begins)
    round: u32,
    /// Session RNG, seeded once for reproducibility
    rng: Pcg32,
}

impl Session {
    /// Create a session with a loaded score and an RNG seed
    pub fn new(seed: u64, score: u64) -> Self {
        Self {
            score,
            round: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Begin a round at the given difficulty, bumping the round counter
    pub fn start_round(&mut self, difficulty: Difficulty) -> Round {
        self.round += 1;
        Round::new(difficulty.config(), &mut self.rng)
    }

    /// Record a won round
    pub fn record_win(&mut self) {
        self.score += 1;
    }

    /// Reset the score board
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_only_moves_up_or_resets() {
        let mut session = Session::new(42, 3);
        assert_eq!(session.score(), 3);

        session.record_win();
        assert_eq!(session.score(), 4);

        session.reset_score();
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_round_counter_increments_per_round() {
        let mut session = Session::new(42, 0);
        assert_eq!(session.round(), 0);

        session.start_round(Difficulty::Easy);
        assert_eq!(session.round(), 1);
        session.start_round(Difficulty::Hard);
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn test_same_seed_draws_same_targets() {
        let mut a = Session::new(99999, 0);
        let mut b = Session::new(99999, 0);
        for d in Difficulty::ALL {
            let ra = a.start_round(d);
            let rb = b.start_round(d);
            assert_eq!(ra.target(), rb.target());
        }
    }
}
