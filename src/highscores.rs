//! Best-score persistence
//!
//! The simulation only receives a starting high score and reports the updated
//! one; this module is the collaborator that keeps it between launches.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default file name, relative to the working directory
pub const HIGHSCORE_FILE: &str = "snake_highscore.json";

/// The stored best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Record a finished session; returns true if it set a new best
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }

    /// Load the stored score; missing or corrupt data counts as zero
    ///
    /// A bare integer (the legacy format) is accepted as well as JSON.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                log::info!("No high score found, starting fresh");
                return Self::default();
            }
        };

        if let Ok(score) = serde_json::from_str::<HighScore>(&text) {
            log::info!("Loaded high score {}", score.best);
            return score;
        }
        if let Ok(best) = text.trim().parse::<u64>() {
            log::info!("Loaded legacy high score {}", best);
            return Self::new(best);
        }

        log::warn!("Corrupt high score file {}, resetting to 0", path.display());
        Self::default()
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        log::info!("High score saved ({})", self.best);
        Ok(())
    }
}
