pub mod arbiter;
pub mod book;
pub mod config;
pub mod error;
pub mod history;
pub mod personality;
pub mod rationale;
pub mod scripted;
pub mod skill;
pub mod types;

// Re-export the public surface at the crate root
pub use arbiter::Arbiter;
pub use book::{BookMove, OpeningBook, PREFERRED_WEIGHT};
pub use config::{ArbiterConfig, LossBand};
pub use error::ArbiterError;
pub use history::{DecisionHistory, SMOOTHING_WINDOW};
pub use personality::{PersonalityProfile, StyleAdjustments, PERSONALITY_NAMES};
pub use scripted::ScriptedEvaluator;
pub use skill::{SkillAnchor, SkillProfile, MAX_RATING, MIN_RATING};
pub use types::{
    centipawn_loss, CandidateMove, Eval, MoveCategory, MoveDecision, MoveTags, Position,
    MATE_SCORE, STARTPOS_FEN,
};

// =============================================================================
// Evaluator trait — implemented by every engine backend (UCI, scripted, etc.)
// =============================================================================

/// Limits on one evaluation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Maximum search depth in plies (None = backend default).
    pub depth: Option<u8>,
    /// Wall-clock limit for the search.
    pub move_time: Option<std::time::Duration>,
    /// Number of candidate lines requested. Backends may return fewer when
    /// the position has fewer legal moves, but never more.
    pub candidates: usize,
}

/// Candidate lines requested when the caller does not say otherwise.
pub const DEFAULT_CANDIDATES: usize = 5;

impl SearchBudget {
    /// Search to a fixed depth.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            move_time: None,
            candidates: DEFAULT_CANDIDATES,
        }
    }

    /// Search for a fixed amount of time.
    pub fn time(move_time: std::time::Duration) -> Self {
        Self {
            depth: None,
            move_time: Some(move_time),
            candidates: DEFAULT_CANDIDATES,
        }
    }

    /// Search to a fixed depth with a time cutoff.
    pub fn depth_and_time(depth: u8, move_time: std::time::Duration) -> Self {
        Self {
            depth: Some(depth),
            move_time: Some(move_time),
            candidates: DEFAULT_CANDIDATES,
        }
    }

    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }

    /// Cap the depth, typically with a skill profile's `search_depth_cap`.
    pub fn capped_depth(mut self, cap: u8) -> Self {
        self.depth = Some(self.depth.map_or(cap, |d| d.min(cap)));
        self
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::depth(12)
    }
}

/// Trait that all evaluation backends implement.
///
/// This keeps the arbitration core free of engine specifics: a backend may
/// shell out to a UCI engine, replay scripted evaluations in tests, or wrap
/// any other source of scored moves.
pub trait Evaluator: Send {
    /// Evaluate `position` and return candidate moves ordered best-first by
    /// the backend's true evaluation.
    ///
    /// Returns [`ArbiterError::NoLegalMoves`] for terminal positions and
    /// [`ArbiterError::EngineUnavailable`] when the backend cannot answer.
    fn evaluate(
        &mut self,
        position: &Position,
        budget: SearchBudget,
    ) -> Result<Vec<CandidateMove>, ArbiterError>;

    /// Backend name for logs and diagnostics.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
