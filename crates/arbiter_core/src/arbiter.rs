//! The move arbitrator: one decision per turn.
//!
//! Combines evaluator output, a skill profile, and a personality profile
//! into a single chosen move. Loss bands are measured against the true
//! (unadjusted) engine evaluation; ranking within a band uses the
//! style-adjusted score, so skill simulation stays independent of
//! personality while personality still picks among comparable moves.
//!
//! Deterministic given a fixed rng and fixed inputs. Not safe to call
//! concurrently for the same game: the `&mut DecisionHistory` borrow
//! enforces one decision at a time per game.

use rand::Rng;
use std::cmp::Ordering;

use crate::config::ArbiterConfig;
use crate::error::ArbiterError;
use crate::history::DecisionHistory;
use crate::personality::PersonalityProfile;
use crate::rationale;
use crate::skill::SkillProfile;
use crate::types::{centipawn_loss, CandidateMove, MoveCategory, MoveDecision};

/// Outcome drawn before resolving a concrete move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Blunder,
    Inaccuracy,
    Brilliancy,
    Normal,
}

/// Move arbitrator configured with loss bands and smoothing.
///
/// Stateless across turns; all per-game state lives in the caller's
/// [`DecisionHistory`]. One instance can serve many simultaneous games.
#[derive(Debug, Clone, Default)]
pub struct Arbiter {
    config: ArbiterConfig,
}

impl Arbiter {
    pub fn new(config: ArbiterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    /// Decide which candidate to play this turn.
    ///
    /// `candidates` must be non-empty and ordered best-first by the true
    /// engine evaluation; the first entry is the reference point for
    /// centipawn loss. Violations surface as
    /// [`ArbiterError::EmptyCandidateSet`].
    pub fn decide<R: Rng>(
        &self,
        candidates: &[CandidateMove],
        skill: &SkillProfile,
        personality: &PersonalityProfile,
        history: &mut DecisionHistory,
        rng: &mut R,
    ) -> Result<MoveDecision, ArbiterError> {
        if candidates.is_empty() {
            return Err(ArbiterError::EmptyCandidateSet);
        }
        let best = &candidates[0];

        // Style-adjusted scores. The jitter is uniform with half-width
        // sqrt(3) * stddev, which has exactly the profile's stddev.
        let noise_halfwidth = skill.eval_noise_stddev * 3f64.sqrt();
        let adjusted: Vec<f64> = candidates
            .iter()
            .map(|c| {
                let mut score =
                    c.eval.to_cp() as f64 + personality.adjustment_for(&c.tags) as f64;
                if noise_halfwidth > 0.0 {
                    score += rng.gen_range(-noise_halfwidth..=noise_halfwidth);
                }
                score
            })
            .collect();

        // Indices ranked by adjusted score, ties by original engine rank.
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| {
            adjusted[b]
                .partial_cmp(&adjusted[a])
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });

        let outcome = self.draw_outcome(skill, history, rng);
        let (index, category) = self.resolve_outcome(outcome, candidates, &order, skill);
        let chosen = &candidates[index];
        let loss = centipawn_loss(best, chosen);

        history.record(category);
        let rationale = rationale::rationale(category, chosen, loss, personality, rng);
        Ok(MoveDecision {
            uci: chosen.uci.clone(),
            category,
            centipawn_loss: loss,
            rationale,
        })
    }

    /// Draw a categorical outcome from the skill probabilities, damped by
    /// the recent decision history so mistakes do not visibly cluster.
    fn draw_outcome<R: Rng>(
        &self,
        skill: &SkillProfile,
        history: &DecisionHistory,
        rng: &mut R,
    ) -> Outcome {
        let smoothing = self.config.smoothing;
        let mut p_blunder =
            skill.blunder_probability * history.damping(MoveCategory::Blunder, smoothing);
        let mut p_inaccuracy =
            skill.inaccuracy_probability * history.damping(MoveCategory::Inaccuracy, smoothing);
        let mut p_brilliancy =
            skill.brilliancy_probability * history.damping(MoveCategory::Brilliancy, smoothing);

        // Defensive clamp for malformed profiles; well-formed anchors never
        // sum above 1.
        let sum = p_blunder + p_inaccuracy + p_brilliancy;
        if sum > 1.0 {
            p_blunder /= sum;
            p_inaccuracy /= sum;
            p_brilliancy /= sum;
        }

        let draw: f64 = rng.gen();
        if draw < p_blunder {
            Outcome::Blunder
        } else if draw < p_blunder + p_inaccuracy {
            Outcome::Inaccuracy
        } else if draw < p_blunder + p_inaccuracy + p_brilliancy {
            Outcome::Brilliancy
        } else {
            Outcome::Normal
        }
    }

    /// Turn an outcome into a concrete candidate index. Band misses always
    /// degrade to the normal pick; a move is never fabricated.
    fn resolve_outcome(
        &self,
        outcome: Outcome,
        candidates: &[CandidateMove],
        order: &[usize],
        skill: &SkillProfile,
    ) -> (usize, MoveCategory) {
        let best = &candidates[0];
        let true_loss = |idx: usize| centipawn_loss(best, &candidates[idx]);

        match outcome {
            Outcome::Normal => (self.pick_normal(candidates, order), MoveCategory::Normal),
            Outcome::Inaccuracy => {
                // Best adjusted candidate inside the small-loss band. A loss
                // of zero is the best move and never counts as a mistake,
                // whatever the configured band says.
                let hit = order.iter().copied().find(|&idx| {
                    let loss = true_loss(idx);
                    loss > 0 && self.config.inaccuracy_band.contains(loss)
                });
                match hit {
                    Some(idx) => (idx, MoveCategory::Inaccuracy),
                    None => (self.pick_normal(candidates, order), MoveCategory::Normal),
                }
            }
            Outcome::Blunder => {
                let hit = order.iter().copied().find(|&idx| {
                    let loss = true_loss(idx);
                    loss > 0
                        && self.config.blunder_band.contains(loss)
                        && (skill.allow_mate_losing_blunders
                            || !candidates[idx].eval.is_losing_mate())
                });
                match hit {
                    Some(idx) => (idx, MoveCategory::Blunder),
                    None => (self.pick_normal(candidates, order), MoveCategory::Normal),
                }
            }
            Outcome::Brilliancy => {
                // A non-top candidate, nearly as strong as the best move,
                // tagged tactically interesting, and not what we would have
                // played anyway.
                let top_pick = order[0];
                let hit = (1..candidates.len()).find(|&idx| {
                    idx != top_pick
                        && true_loss(idx) <= self.config.brilliancy_window
                        && candidates[idx].tags.tactical()
                });
                match hit {
                    Some(idx) => (idx, MoveCategory::Brilliancy),
                    None => (self.pick_normal(candidates, order), MoveCategory::Normal),
                }
            }
        }
    }

    /// Top adjusted-ranked candidate, unless style alone would give up more
    /// than the ceiling; then the true best is played instead.
    fn pick_normal(&self, candidates: &[CandidateMove], order: &[usize]) -> usize {
        let top = order[0];
        let loss = centipawn_loss(&candidates[0], &candidates[top]);
        if loss > self.config.style_ceiling {
            0
        } else {
            top
        }
    }
}

#[cfg(test)]
#[path = "arbiter_tests.rs"]
mod arbiter_tests;
