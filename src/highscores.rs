//! Best score record
//!
//! Only the single best score is tracked; storage is delegated to a
//! [`ScoreStore`](crate::persistence::ScoreStore).

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;

/// Best score ever achieved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub value: i64,
}

impl BestScore {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// Check if a score would beat the record
    pub fn qualifies(&self, score: i64) -> bool {
        score > self.value
    }

    /// Record a finished session's score. Returns true if it set a new record.
    pub fn submit(&mut self, score: i64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.value = score;
        true
    }

    /// Load the record from a store (missing record reads as 0)
    pub fn load(store: &impl ScoreStore) -> Self {
        let value = store.load_best_score();
        log::info!("Loaded best score: {}", value);
        Self::new(value)
    }
}
