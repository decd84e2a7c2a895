//! Difficulty presets and their round parameters

/// Parameters for one round: inclusive target bounds and the guess budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Lowest possible target (inclusive)
    pub low: i32,
    /// Highest possible target (inclusive)
    pub high: i32,
    /// Maximum number of guesses
    pub max_attempts: u32,
}

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    ExtraHard,
}

impl Difficulty {
    /// All presets, in menu order
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::ExtraHard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Intermediate",
            Difficulty::Hard => "Hard",
            Difficulty::ExtraHard => "Extra-Hard",
        }
    }

    /// Round parameters for this preset
    pub fn config(&self) -> RoundConfig {
        match self {
            Difficulty::Easy => RoundConfig {
                low: 1,
                high: 10,
                max_attempts: 3,
            },
            Difficulty::Medium => RoundConfig {
                low: 1,
                high: 100,
                max_attempts: 8,
            },
            Difficulty::Hard => RoundConfig {
                low: 1,
                high: 1000,
                max_attempts: 15,
            },
            Difficulty::ExtraHard => RoundConfig {
                low: -1000,
                high: 1000,
                max_attempts: 20,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_table() {
        assert_eq!(
            Difficulty::Easy.config(),
            RoundConfig {
                low: 1,
                high: 10,
                max_attempts: 3
            }
        );
        assert_eq!(
            Difficulty::Medium.config(),
            RoundConfig {
                low: 1,
                high: 100,
                max_attempts: 8
            }
        );
        assert_eq!(
            Difficulty::Hard.config(),
            RoundConfig {
                low: 1,
                high: 1000,
                max_attempts: 15
            }
        );
        assert_eq!(
            Difficulty::ExtraHard.config(),
            RoundConfig {
                low: -1000,
                high: 1000,
                max_attempts: 20
            }
        );
    }

    #[test]
    fn test_bounds_well_formed() {
        for d in Difficulty::ALL {
            let cfg = d.config();
            assert!(cfg.low < cfg.high, "{} has inverted bounds", d.as_str());
            assert!(cfg.max_attempts > 0);
        }
    }
}
