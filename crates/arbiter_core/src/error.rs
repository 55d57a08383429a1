//! Error taxonomy for the arbitration layer.
//!
//! Quality degradation is never an error: when no candidate fits a loss
//! band the arbitrator silently falls back to a normal selection. Only
//! infrastructure failures and contract violations surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArbiterError {
    /// The external engine could not be reached or timed out. The turn is
    /// aborted; the caller may retry with a reduced budget or resign.
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The position is terminal (checkmate or stalemate). Authoritative
    /// game-end signal, not something to retry.
    #[error("no legal moves: the position is terminal")]
    NoLegalMoves,

    /// Configuration named a personality that does not exist. The caller is
    /// responsible for supplying a valid default (typically "solid").
    #[error("unknown personality '{0}'")]
    UnknownPersonality(String),

    /// The evaluator handed the arbitrator zero candidates. Contract
    /// violation, fatal to the turn.
    #[error("empty candidate set passed to the arbitrator")]
    EmptyCandidateSet,

    /// A configuration file or value failed validation at load time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The caller's position (FEN or move history) could not be replayed.
    /// Input error, not an engine failure; retrying will not help.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Saving or loading caller-owned state (the decision history) failed.
    #[error("persistence failed: {0}")]
    Persistence(String),
}
