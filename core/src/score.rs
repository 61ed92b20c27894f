//! Running score and persisted best score.

use log::{debug, info, warn};

use crate::store::HighScoreStore;

/// Tracks the score of the current game and the best score across runs.
#[derive(Debug)]
pub struct ScoreTracker<S> {
    score: u32,
    high_score: u32,
    store: S,
}

impl<S: HighScoreStore> ScoreTracker<S> {
    /// Load the best score from `store`. A missing or unreadable store counts as 0.
    pub fn new(mut store: S) -> Self {
        let high_score = store.load().unwrap_or_else(|err| {
            debug!("no usable high score, starting from 0: {err}");
            0
        });
        ScoreTracker {
            score: 0,
            high_score,
            store,
        }
    }

    /// Add `delta` to the score and persist a new best.
    ///
    /// Returns true when the best score was raised. A failed persist is logged
    /// and otherwise ignored; the in-memory best still moves.
    pub fn record(&mut self, delta: u32) -> bool {
        self.score += delta;
        if self.score <= self.high_score {
            return false;
        }

        self.high_score = self.score;
        info!("new high score: {}", self.high_score);
        if let Err(err) = self.store.save(self.high_score) {
            warn!("failed to persist high score {}: {err}", self.high_score);
        }
        true
    }
}

impl<S> ScoreTracker<S> {
    /// Start a new game. The best score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
