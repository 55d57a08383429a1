//! Per-game decision history used to smooth mistake clustering.
//!
//! The history is an explicit value owned by the caller, one per game.
//! Passing it as `&mut` keeps concurrent use of a single game impossible by
//! construction; separate games hold separate histories.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ArbiterError;
use crate::types::MoveCategory;

/// How many recent decisions damp a repeated outcome.
pub const SMOOTHING_WINDOW: usize = 2;

/// Record of the categories played so far in one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionHistory {
    categories: Vec<MoveCategory>,
}

impl DecisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the category the arbitrator just played.
    pub fn record(&mut self, category: MoveCategory) {
        self.categories.push(category);
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn last(&self) -> Option<MoveCategory> {
        self.categories.last().copied()
    }

    /// Total number of decisions played in this category.
    pub fn count_of(&self, category: MoveCategory) -> usize {
        self.categories.iter().filter(|&&c| c == category).count()
    }

    /// Damping multiplier for an outcome's draw probability.
    ///
    /// Each occurrence of `category` within the last [`SMOOTHING_WINDOW`]
    /// decisions scales its probability by `1 - smoothing`. This is a
    /// no-repeat heuristic, not a hard rule: with smoothing below 1 a
    /// category can still repeat back to back.
    pub fn damping(&self, category: MoveCategory, smoothing: f64) -> f64 {
        let recent = self
            .categories
            .iter()
            .rev()
            .take(SMOOTHING_WINDOW)
            .filter(|&&c| c == category)
            .count();
        (1.0 - smoothing.clamp(0.0, 1.0)).powi(recent as i32)
    }

    /// Save the history to a JSON file, for resuming an interrupted game.
    pub fn save(&self, path: &Path) -> Result<(), ArbiterError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ArbiterError::Persistence(format!("failed to serialize: {}", e)))?;
        std::fs::write(path, json).map_err(|e| {
            ArbiterError::Persistence(format!("failed to write {}: {}", path.display(), e))
        })
    }

    /// Load a history saved with [`DecisionHistory::save`].
    pub fn load(path: &Path) -> Result<Self, ArbiterError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ArbiterError::Persistence(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            ArbiterError::Persistence(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
