//! In-memory session leaderboard
//!
//! Tracks the top iceberg runs for this process. Nothing is persisted;
//! the table lives and dies with the engine that owns it.

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single recorded run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Stars collected
    pub score: u32,
    /// Difficulty level reached when the run ended
    pub level: u32,
    /// Session clock reading (ms) at the end of the run
    pub at_ms: u64,
}

/// Best runs of the session, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score makes the table; zero-star runs never do
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it misses)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished run (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_run(&mut self, score: u32, level: u32, at_ms: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            level,
            at_ms,
        };

        // Find insertion point (sorted descending by score; ties rank below
        // the earlier run)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_star_runs_never_qualify() {
        let mut scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.add_run(0, 1, 100), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_runs_sort_descending_with_ties_below() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_run(5, 2, 100), Some(1));
        assert_eq!(scores.add_run(9, 2, 200), Some(1));
        assert_eq!(scores.add_run(5, 2, 300), Some(3));

        let ranked: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ranked, vec![9, 5, 5]);
        // The earlier 5-star run kept its place above the newer one
        assert_eq!(scores.entries[1].at_ms, 100);
        assert_eq!(scores.top_score(), Some(9));
    }

    #[test]
    fn test_table_caps_and_drops_the_weakest() {
        let mut scores = HighScores::new();
        for score in 1..=10 {
            scores.add_run(score, 1, 0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);

        // A 1-star run no longer fits
        assert!(!scores.qualifies(1));
        assert_eq!(scores.potential_rank(1), None);

        // An 11-star run takes first and pushes the weakest out
        assert_eq!(scores.potential_rank(11), Some(1));
        assert_eq!(scores.add_run(11, 3, 999), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(2));
    }
}
