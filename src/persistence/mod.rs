//! Best-score persistence collaborators
//!
//! Features:
//! - `ScoreStore` trait the engine talks to
//! - In-memory store for tests and hosts without storage
//! - Small JSON file store for native hosts
//!
//! Storage problems are never fatal: a missing or unreadable record reads as
//! 0 and a failed write is logged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the best score lives between runs
pub trait ScoreStore {
    /// Stored best score, or 0 when there is none
    fn load_best_score(&self) -> i64;
    /// Persist a new best score
    fn save_best_score(&mut self, score: i64);
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub best: Option<i64>,
    /// Number of saves performed
    pub saves: u32,
}

impl MemoryStore {
    pub fn new(best: i64) -> Self {
        Self {
            best: Some(best),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best_score(&self) -> i64 {
        self.best.unwrap_or(0)
    }

    fn save_best_score(&mut self, score: i64) {
        self.best = Some(score);
        self.saves += 1;
    }
}

/// On-disk record
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BestRecord {
    best: i64,
}

/// Stores the best score as `{ "best": n }` in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load_best_score(&self) -> i64 {
        let Ok(json) = std::fs::read_to_string(&self.path) else {
            log::info!("No best score found, starting fresh");
            return 0;
        };
        match serde_json::from_str::<BestRecord>(&json) {
            Ok(record) => record.best,
            Err(e) => {
                log::warn!("Ignoring corrupt best score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_best_score(&mut self, score: i64) {
        let json = match serde_json::to_string(&BestRecord { best: score }) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode best score: {}", e);
                return;
            }
        };
        match std::fs::write(&self.path, json) {
            Ok(()) => log::info!("Best score saved ({})", score),
            Err(e) => log::warn!("Failed to save best score to {}: {}", self.path.display(), e),
        }
    }
}
