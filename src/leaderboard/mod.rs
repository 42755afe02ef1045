//! In-memory leaderboard, seeded from a static JSON document.
//!
//! The leaderboard is session-scoped: it outlives individual runs (a
//! restart keeps it) but is never written back anywhere. Entries are
//! kept sorted descending by score; among equal scores, earlier entries
//! stay first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seed compiled into the crate, used when the caller supplies none.
const BUILTIN_SEED: &str = r#"[
    { "name": "Alex", "score": 12 },
    { "name": "Sam", "score": 9 },
    { "name": "Riva", "score": 5 }
]"#;

/// Errors from loading a leaderboard seed.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// The seed document was not a valid JSON array of entries.
    #[error("invalid leaderboard seed: {0}")]
    InvalidSeed(#[from] serde_json::Error),
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Ordered score table, highest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// An empty leaderboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The leaderboard seeded with the compiled-in JSON document.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_SEED).expect("built-in leaderboard seed is valid JSON")
    }

    /// Load a seed from a JSON array of `{ "name": ..., "score": ... }`
    /// records. The result is re-sorted so the ordering invariant holds
    /// regardless of seed order.
    pub fn from_json(seed: &str) -> Result<Self, LeaderboardError> {
        let mut entries: Vec<LeaderboardEntry> = serde_json::from_str(seed)?;
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(Self { entries })
    }

    /// Record a finished run.
    ///
    /// The caller is expected to have trimmed and validated `name`.
    pub fn record(&mut self, name: &str, score: u32) {
        self.entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
        });
        // Stable sort keeps insertion order among equal scores.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Entries, highest score first.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_sorted() {
        let board = Leaderboard::builtin();

        assert_eq!(board.len(), 3);
        assert!(board
            .entries()
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn test_from_json_sorts_unordered_seed() {
        let board = Leaderboard::from_json(
            r#"[
                { "name": "low", "score": 1 },
                { "name": "high", "score": 10 },
                { "name": "mid", "score": 5 }
            ]"#,
        )
        .unwrap();

        let names: Vec<_> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Leaderboard::from_json("not json").is_err());
        assert!(Leaderboard::from_json(r#"{ "name": "x" }"#).is_err());
    }

    #[test]
    fn test_record_keeps_descending_order() {
        let mut board = Leaderboard::new();
        board.record("a", 3);
        board.record("b", 7);
        board.record("c", 5);

        let scores: Vec<_> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![7, 5, 3]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.record("first", 5);
        board.record("second", 5);
        board.record("third", 5);

        let names: Vec<_> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_board() {
        let board = Leaderboard::new();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
    }
}
