//! A scripted evaluator for tests and offline replay.
//!
//! Candidate sets are registered per position up front; `evaluate` just looks
//! them up. No engine process, no randomness, fully deterministic.

use std::collections::HashMap;

use crate::error::ArbiterError;
use crate::types::{CandidateMove, Position};
use crate::{Evaluator, SearchBudget};

/// Evaluator that replays pre-registered candidate sets.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvaluator {
    positions: HashMap<Position, Vec<CandidateMove>>,
}

impl ScriptedEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the candidates to serve for `position`. Candidates must be
    /// ordered best-first; an empty list marks the position as terminal.
    pub fn script(&mut self, position: Position, candidates: Vec<CandidateMove>) {
        self.positions.insert(position, candidates);
    }

    /// Number of scripted positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Evaluator for ScriptedEvaluator {
    fn evaluate(
        &mut self,
        position: &Position,
        budget: SearchBudget,
    ) -> Result<Vec<CandidateMove>, ArbiterError> {
        match self.positions.get(position) {
            Some(candidates) if candidates.is_empty() => Err(ArbiterError::NoLegalMoves),
            Some(candidates) => {
                let mut out = candidates.clone();
                out.truncate(budget.candidates.max(1));
                Ok(out)
            }
            None => Err(ArbiterError::EngineUnavailable(format!(
                "no scripted candidates for position {}",
                position.fen
            ))),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
#[path = "scripted_tests.rs"]
mod scripted_tests;
