//! Ranked score tables

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub score: u64,
}

/// Top-N table ranked by score, highest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    title: String,
    size: usize,
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub const DEFAULT_SIZE: usize = 10;

    pub fn new(title: impl Into<String>) -> Self {
        Self::with_size(title, Self::DEFAULT_SIZE)
    }

    pub fn with_size(title: impl Into<String>, size: usize) -> Self {
        Self {
            title: title.into(),
            size,
            entries: Vec::with_capacity(size),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Insert a score at its rank. Ties go after existing entries. Anything
    /// pushed past the last rank drops off.
    ///
    /// Returns the 1-based rank, or `None` if the score didn't make the table.
    pub fn record(&mut self, player: impl Into<String>, score: u64) -> Option<usize> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.score < score)
            .unwrap_or(self.entries.len());

        if position >= self.size {
            return None;
        }

        self.entries.insert(
            position,
            LeaderboardEntry {
                player: player.into(),
                score,
            },
        );
        self.entries.truncate(self.size);
        Some(position + 1)
    }

    /// Keep one entry per player holding their best score
    ///
    /// A higher score replaces the player's entry and re-ranks it; a lower or
    /// equal one leaves the table untouched. Returns the player's rank.
    pub fn record_best(&mut self, player: impl Into<String>, score: u64) -> Option<usize> {
        let player = player.into();
        if let Some(existing) = self.entries.iter().position(|entry| entry.player == player) {
            if self.entries[existing].score >= score {
                return Some(existing + 1);
            }
            self.entries.remove(existing);
        }
        self.record(player, score)
    }

    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(format!("=== Leaderboard: {} ===", self.title));
        lines.extend(self.entries.iter().enumerate().map(|(i, entry)| {
            format!("Rank {}: {} ({} pts)", i + 1, entry.player, entry.score)
        }));
        lines
    }
}
