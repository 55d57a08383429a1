//! Core data model: positions, evaluations, candidates, and decisions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Centipawn equivalent of a forced mate. Mate-in-N folds to
/// `MATE_SCORE - N` so shorter mates compare as better.
pub const MATE_SCORE: i32 = 100_000;

/// FEN of the standard starting position.
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A position handed to an evaluator: a base FEN plus the UCI moves played
/// after it. Opaque to the arbitration core; it is only stored, hashed, and
/// forwarded to the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub fen: String,
    pub moves: Vec<String>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_fen(STARTPOS_FEN)
    }

    pub fn from_fen(fen: &str) -> Self {
        Self {
            fen: fen.to_string(),
            moves: Vec::new(),
        }
    }

    /// Append a move (UCI format) to the history.
    pub fn push(&mut self, uci: &str) {
        self.moves.push(uci.to_string());
    }
}

/// An engine evaluation from the side to move's perspective.
///
/// Orders by centipawn equivalent: any winning mate beats any centipawn
/// score, any losing mate is worse, and shorter mates are more decisive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eval {
    /// Score in centipawns.
    Cp(i32),
    /// Forced mate in N moves; positive means the mover delivers it.
    Mate(i32),
}

impl Eval {
    /// Fold into a single comparable centipawn scale.
    pub fn to_cp(self) -> i32 {
        match self {
            Eval::Cp(cp) => cp,
            Eval::Mate(n) if n > 0 => MATE_SCORE - n,
            Eval::Mate(n) => -MATE_SCORE - n,
        }
    }

    /// True when the move runs into a forced mate against the mover.
    pub fn is_losing_mate(self) -> bool {
        matches!(self, Eval::Mate(n) if n <= 0)
    }
}

impl PartialOrd for Eval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Eval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_cp().cmp(&other.to_cp())
    }
}

impl fmt::Display for Eval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eval::Cp(cp) => write!(f, "{:+.2}", *cp as f64 / 100.0),
            Eval::Mate(n) => write!(f, "#{}", n),
        }
    }
}

/// Properties of a candidate move that personalities care about.
///
/// A move with none of the flags set is considered quiet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveTags {
    pub capture: bool,
    pub check: bool,
    pub sacrifice: bool,
    pub promotion: bool,
}

impl MoveTags {
    pub fn quiet(&self) -> bool {
        !(self.capture || self.check || self.sacrifice || self.promotion)
    }

    /// Tactically interesting moves are eligible for brilliancies.
    pub fn tactical(&self) -> bool {
        self.sacrifice || self.check
    }
}

/// One legal move paired with the engine's assessment of it.
///
/// Produced fresh each turn by an [`Evaluator`](crate::Evaluator), owned by a
/// single arbitration call, and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMove {
    /// Move in UCI format, e.g. "e2e4" or "e7e8q".
    pub uci: String,
    /// Evaluation from the mover's perspective.
    pub eval: Eval,
    pub tags: MoveTags,
}

impl CandidateMove {
    pub fn new(uci: impl Into<String>, eval: Eval) -> Self {
        Self {
            uci: uci.into(),
            eval,
            tags: MoveTags::default(),
        }
    }

    pub fn with_tags(uci: impl Into<String>, eval: Eval, tags: MoveTags) -> Self {
        Self {
            uci: uci.into(),
            eval,
            tags,
        }
    }
}

/// How much worse `chosen` is than `best` on the true (unadjusted) scale.
/// Never negative; the best move itself loses zero.
pub fn centipawn_loss(best: &CandidateMove, chosen: &CandidateMove) -> i32 {
    (best.eval.to_cp() - chosen.eval.to_cp()).max(0)
}

/// The quality bucket a decision was played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    /// Best available move after style adjustment.
    Normal,
    /// Deliberate small mistake.
    Inaccuracy,
    /// Deliberate large mistake.
    Blunder,
    /// A near-best tactical move played for flair.
    Brilliancy,
    /// Played from the opening repertoire, bypassing arbitration.
    Book,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoveCategory::Normal => "normal",
            MoveCategory::Inaccuracy => "inaccuracy",
            MoveCategory::Blunder => "blunder",
            MoveCategory::Brilliancy => "brilliancy",
            MoveCategory::Book => "book",
        };
        f.write_str(s)
    }
}

/// The arbitrator's answer for one turn. Returned to the caller; the core
/// keeps nothing beyond the category recorded in the decision history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDecision {
    pub uci: String,
    pub category: MoveCategory,
    /// True centipawn loss against the engine's best candidate.
    pub centipawn_loss: i32,
    /// One-line human-readable reasoning.
    pub rationale: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
