//! Parsing of UCI search output.
//!
//! Pure string handling, no I/O: `info` lines carry depth, MultiPV slot,
//! score, and the principal variation; `bestmove` ends the search. Fields we
//! do not use (nodes, nps, time, hashfull) are skipped by name.

use arbiter_core::Eval;

/// The parts of one `info` line the evaluator cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    pub depth: u8,
    /// 1-based MultiPV slot; engines omit it in single-PV mode.
    pub multipv: usize,
    pub eval: Eval,
    /// First move of the principal variation.
    pub first_move: String,
}

/// Parse an `info ... score ... pv ...` line. Lines without a score or a
/// principal variation (currmove chatter, string infos) return `None`.
pub fn parse_info_line(line: &str) -> Option<InfoLine> {
    let line = line.trim();
    if !line.starts_with("info") {
        return None;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let mut depth = None;
    let mut multipv = 1;
    let mut eval = None;
    let mut first_move = None;

    let mut i = 1;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                depth = tokens.get(i + 1)?.parse::<u8>().ok();
                i += 2;
            }
            "multipv" => {
                multipv = tokens.get(i + 1)?.parse::<usize>().ok()?;
                i += 2;
            }
            "score" => match (tokens.get(i + 1), tokens.get(i + 2)) {
                (Some(&"cp"), Some(value)) => {
                    eval = value.parse::<i32>().ok().map(Eval::Cp);
                    i += 3;
                }
                (Some(&"mate"), Some(value)) => {
                    eval = value.parse::<i32>().ok().map(Eval::Mate);
                    i += 3;
                }
                _ => return None,
            },
            "pv" => {
                first_move = tokens.get(i + 1).map(|m| m.to_string());
                break;
            }
            "string" => return None,
            _ => i += 1,
        }
    }

    Some(InfoLine {
        depth: depth?,
        multipv,
        eval: eval?,
        first_move: first_move?,
    })
}

/// Parse a `bestmove` line. `Some(None)` means the engine reported
/// `bestmove (none)`, i.e. a terminal position.
pub fn parse_bestmove(line: &str) -> Option<Option<String>> {
    let mut tokens = line.trim().split_whitespace();
    if tokens.next() != Some("bestmove") {
        return None;
    }
    match tokens.next() {
        Some("(none)") | None => Some(None),
        Some(mv) => Some(Some(mv.to_string())),
    }
}

/// Accumulates `info` lines during one search, keeping only the deepest
/// completed analysis for each MultiPV slot.
#[derive(Debug, Default)]
pub struct CandidateCollector {
    slots: Vec<InfoLine>,
}

impl CandidateCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, info: InfoLine) {
        match self.slots.iter_mut().find(|s| s.multipv == info.multipv) {
            Some(slot) => {
                if info.depth >= slot.depth {
                    *slot = info;
                }
            }
            None => self.slots.push(info),
        }
    }

    /// Final lines ordered by MultiPV slot (slot 1 is the engine's best).
    pub fn into_lines(mut self) -> Vec<InfoLine> {
        self.slots.sort_by_key(|s| s.multipv);
        self.slots
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
