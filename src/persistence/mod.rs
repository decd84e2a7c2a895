//! Score file load/save
//!
//! The persisted record is one non-negative integer on the first line of a
//! plain text file. Both operations are infallible at the signature: failures
//! degrade to defaults and the caller decides how loudly to warn the player.

use std::fs;
use std::path::Path;

/// Outcome of reading the score file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadedScore {
    /// File present, first line parsed
    Loaded(u64),
    /// No file at the path (first run)
    Missing,
    /// File present but unreadable or not an integer
    Corrupt,
}

impl LoadedScore {
    /// The score to play with: loaded value, or 0 when there was none
    pub fn score(&self) -> u64 {
        match self {
            LoadedScore::Loaded(score) => *score,
            LoadedScore::Missing | LoadedScore::Corrupt => 0,
        }
    }
}

/// Read the score from `path`.
///
/// Never fails: a missing or corrupt file yields a variant the caller can
/// warn about, with the score defaulting to 0.
pub fn load_score(path: &Path) -> LoadedScore {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No score file at {}, starting fresh", path.display());
            return LoadedScore::Missing;
        }
        Err(err) => {
            log::warn!("Could not read score file {}: {err}", path.display());
            return LoadedScore::Corrupt;
        }
    };

    match contents.lines().next().unwrap_or("").trim().parse::<u64>() {
        Ok(score) => {
            log::info!("Loaded score {score} from {}", path.display());
            LoadedScore::Loaded(score)
        }
        Err(err) => {
            log::warn!("Score file {} is corrupt: {err}", path.display());
            LoadedScore::Corrupt
        }
    }
}

/// Write `score` to `path`, creating the parent directory if needed.
///
/// Returns false on any I/O failure; the game keeps running either way.
pub fn save_score(path: &Path, score: u64) -> bool {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(err) = fs::create_dir_all(parent)
    {
        log::warn!("Could not create {}: {err}", parent.display());
        return false;
    }

    match fs::write(path, format!("{score}\n")) {
        Ok(()) => {
            log::info!("Saved score {score} to {}", path.display());
            true
        }
        Err(err) => {
            log::warn!("Could not save score to {}: {err}", path.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use proptest::prelude::*;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hilo_test_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let path = temp_path("missing/nope.txt");
        let loaded = load_score(&path);
        assert_eq!(loaded, LoadedScore::Missing);
        assert_eq!(loaded.score(), 0);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let path = temp_path("corrupt.txt");
        fs::write(&path, "twelve\n").unwrap();
        let loaded = load_score(&path);
        assert_eq!(loaded, LoadedScore::Corrupt);
        assert_eq!(loaded.score(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_negative_score_is_corrupt() {
        let path = temp_path("negative.txt");
        fs::write(&path, "-3\n").unwrap();
        assert_eq!(load_score(&path), LoadedScore::Corrupt);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_only_first_line_matters() {
        let path = temp_path("multiline.txt");
        fs::write(&path, "12\ngarbage on line two\n").unwrap();
        assert_eq!(load_score(&path), LoadedScore::Loaded(12));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = temp_path("nested_dir");
        let path = dir.join("score.txt");
        assert!(save_score(&path, 5));
        assert_eq!(load_score(&path), LoadedScore::Loaded(5));
        let _ = fs::remove_dir_all(&dir);
    }

    proptest! {
        #[test]
        fn save_then_load_round_trips(score in any::<u64>()) {
            let path = temp_path("roundtrip.txt");
            prop_assert!(save_score(&path, score));
            prop_assert_eq!(load_score(&path), LoadedScore::Loaded(score));
        }
    }
}
