//! Evaluator adapter that drives a UCI engine subprocess in MultiPV mode.
//!
//! Spawns the engine binary, performs the `uci`/`isready` handshake, and per
//! request sends the position plus a `go` command, collecting the final
//! depth's MultiPV lines as the candidate list. Move tags come from
//! replaying the engine's moves with cozy-chess; the engine itself never
//! learns anything about skill or personality.

pub mod process;
pub mod protocol;
pub mod tags;

use std::time::Duration;

use arbiter_core::{ArbiterError, CandidateMove, Evaluator, Position, SearchBudget};

use crate::process::EngineProcess;
use crate::protocol::{parse_bestmove, parse_info_line, CandidateCollector};

/// Engine launch options.
#[derive(Debug, Clone)]
pub struct UciConfig {
    /// Engine binary name or path.
    pub binary: String,
    pub hash_mb: u32,
    pub threads: u32,
    /// Extra wall-clock allowance on top of a timed search before the
    /// engine counts as unresponsive.
    pub grace: Duration,
    /// Overall limit for depth-only searches, which carry no time of their
    /// own.
    pub depth_search_limit: Duration,
}

impl Default for UciConfig {
    fn default() -> Self {
        Self {
            binary: "stockfish".to_string(),
            hash_mb: 256,
            threads: 1,
            grace: Duration::from_secs(2),
            depth_search_limit: Duration::from_secs(120),
        }
    }
}

const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(5);

/// An [`Evaluator`] backed by a live UCI engine process.
pub struct UciEvaluator {
    process: EngineProcess,
    config: UciConfig,
    name: String,
    /// Set when the protocol stream can no longer be trusted (recovery from
    /// a timeout failed, or a write failed). The next request replaces the
    /// process instead of reading stale output.
    poisoned: bool,
}

impl UciEvaluator {
    /// Spawn the engine and complete the UCI handshake.
    pub fn launch(config: UciConfig) -> Result<Self, ArbiterError> {
        let process = Self::connect(&config)?;
        let name = format!("uci:{}", config.binary);
        Ok(Self {
            process,
            config,
            name,
            poisoned: false,
        })
    }

    fn connect(config: &UciConfig) -> Result<EngineProcess, ArbiterError> {
        let mut process = EngineProcess::spawn(&config.binary)?;
        process.send("uci")?;
        process.wait_for("uciok", HANDSHAKE_TIMEOUT)?;
        process.send(&format!("setoption name Hash value {}", config.hash_mb))?;
        process.send(&format!("setoption name Threads value {}", config.threads))?;
        process.send("isready")?;
        process.wait_for("readyok", HANDSHAKE_TIMEOUT)?;
        Ok(process)
    }

    fn send(&mut self, command: &str) -> Result<(), ArbiterError> {
        self.process.send(command).map_err(|e| {
            self.poisoned = true;
            e
        })
    }

    /// The engine may still be searching for a timed-out request; stop it
    /// and discard everything through its `bestmove` so the next request
    /// starts on a clean stream. If the engine stays silent the process is
    /// marked poisoned and replaced on the next request.
    fn recover_from_timeout(&mut self) {
        if self.process.send("stop").is_err() {
            self.poisoned = true;
            return;
        }
        loop {
            match self.process.recv(self.config.grace) {
                Ok(line) => {
                    if parse_bestmove(&line).is_some() {
                        return;
                    }
                }
                Err(_) => {
                    self.poisoned = true;
                    return;
                }
            }
        }
    }

    fn go_command(budget: SearchBudget) -> String {
        match (budget.depth, budget.move_time) {
            (Some(d), Some(t)) => format!("go depth {} movetime {}", d, t.as_millis()),
            (Some(d), None) => format!("go depth {}", d),
            (None, Some(t)) => format!("go movetime {}", t.as_millis()),
            (None, None) => "go depth 12".to_string(),
        }
    }

    fn read_timeout(&self, budget: SearchBudget) -> Duration {
        match budget.move_time {
            Some(t) => t + self.config.grace,
            None => self.config.depth_search_limit,
        }
    }
}

impl Evaluator for UciEvaluator {
    fn evaluate(
        &mut self,
        position: &Position,
        budget: SearchBudget,
    ) -> Result<Vec<CandidateMove>, ArbiterError> {
        // Replaying the history also validates it before the engine sees it.
        let board = tags::board_for(position)?;

        if self.poisoned {
            self.process = Self::connect(&self.config)?;
            self.poisoned = false;
        }

        let multipv = budget.candidates.max(1);
        self.send(&format!("setoption name MultiPV value {}", multipv))?;
        let mut cmd = format!("position fen {}", position.fen);
        if !position.moves.is_empty() {
            cmd.push_str(" moves ");
            cmd.push_str(&position.moves.join(" "));
        }
        self.send(&cmd)?;
        self.send(&Self::go_command(budget))?;

        let timeout = self.read_timeout(budget);
        let mut collector = CandidateCollector::new();
        let best = loop {
            let line = match self.process.recv(timeout) {
                Ok(line) => line,
                Err(err) => {
                    self.recover_from_timeout();
                    return Err(err);
                }
            };
            if let Some(info) = parse_info_line(&line) {
                collector.push(info);
            } else if let Some(best) = parse_bestmove(&line) {
                break best;
            }
        };

        let Some(best) = best else {
            return Err(ArbiterError::NoLegalMoves);
        };

        let mut candidates: Vec<CandidateMove> = collector
            .into_lines()
            .into_iter()
            .map(|info| {
                let tags = tags::tags_for(&board, &info.first_move);
                CandidateMove::with_tags(info.first_move, info.eval, tags)
            })
            .collect();

        // Shallow searches can finish before any MultiPV line is printed;
        // the bestmove itself is still a usable single candidate.
        if candidates.is_empty() {
            let tags = tags::tags_for(&board, &best);
            candidates.push(CandidateMove::with_tags(
                best,
                arbiter_core::Eval::Cp(0),
                tags,
            ));
        }
        Ok(candidates)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        // Best effort; a dead process will surface on the next evaluate.
        let _ = self.process.send("ucinewgame");
        if self.process.send("isready").is_ok() {
            let _ = self.process.wait_for("readyok", HANDSHAKE_TIMEOUT);
        }
    }
}
