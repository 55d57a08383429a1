//! Skill profiles: map a target rating to mistake probabilities and depth.
//!
//! Resolution interpolates linearly between fixed anchor ratings. Ratings
//! outside the supported range clamp to the nearest bound so the bot always
//! ends up with a playable configuration.

use serde::{Deserialize, Serialize};

use crate::error::ArbiterError;

/// Lowest supported target rating.
pub const MIN_RATING: i32 = 800;
/// Highest supported target rating.
pub const MAX_RATING: i32 = 2500;

/// Below this rating the bot may blunder into forced mates.
pub const MATE_BLUNDER_RATING: i32 = 1000;

/// One interpolation anchor of the skill curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillAnchor {
    pub rating: i32,
    pub blunder_probability: f64,
    pub inaccuracy_probability: f64,
    pub brilliancy_probability: f64,
    pub search_depth_cap: u8,
    pub eval_noise_stddev: f64,
}

/// Compiled-in skill curve. The bottom anchor blunders often and searches
/// shallow; the top anchor stays slightly fallible (0.01, never zero).
pub const DEFAULT_ANCHORS: [SkillAnchor; 3] = [
    SkillAnchor {
        rating: 800,
        blunder_probability: 0.12,
        inaccuracy_probability: 0.25,
        brilliancy_probability: 0.02,
        search_depth_cap: 6,
        eval_noise_stddev: 50.0,
    },
    SkillAnchor {
        rating: 1500,
        blunder_probability: 0.04,
        inaccuracy_probability: 0.12,
        brilliancy_probability: 0.03,
        search_depth_cap: 12,
        eval_noise_stddev: 20.0,
    },
    SkillAnchor {
        rating: 2500,
        blunder_probability: 0.01,
        inaccuracy_probability: 0.03,
        brilliancy_probability: 0.05,
        search_depth_cap: 18,
        eval_noise_stddev: 0.0,
    },
];

/// Parameters simulating a target playing strength.
///
/// Immutable once resolved; share one instance read-only across turns and
/// across simultaneous games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    /// The rating this profile simulates, clamped to [800, 2500].
    pub target_rating: i32,
    pub blunder_probability: f64,
    pub inaccuracy_probability: f64,
    pub brilliancy_probability: f64,
    /// Upper bound on engine search depth for this strength.
    pub search_depth_cap: u8,
    /// Standard deviation (centipawns) of the jitter applied to adjusted
    /// scores before ranking. Zero disables the jitter.
    pub eval_noise_stddev: f64,
    /// Whether blunders may walk into forced mates (lowest tier only).
    pub allow_mate_losing_blunders: bool,
}

impl SkillProfile {
    /// Resolve a profile from the compiled-in anchor curve.
    ///
    /// Pure: the same rating always yields the same profile.
    pub fn resolve(target_rating: i32) -> Self {
        Self::resolve_with_anchors(target_rating, &DEFAULT_ANCHORS)
    }

    /// Resolve against a caller-supplied anchor table (sorted by rating).
    pub fn resolve_with_anchors(target_rating: i32, anchors: &[SkillAnchor]) -> Self {
        debug_assert!(!anchors.is_empty());
        let rating = target_rating.clamp(MIN_RATING, MAX_RATING);

        let anchor = interpolate(rating, anchors);
        SkillProfile {
            target_rating: rating,
            blunder_probability: anchor.blunder_probability,
            inaccuracy_probability: anchor.inaccuracy_probability,
            brilliancy_probability: anchor.brilliancy_probability,
            search_depth_cap: anchor.search_depth_cap,
            eval_noise_stddev: anchor.eval_noise_stddev,
            allow_mate_losing_blunders: rating < MATE_BLUNDER_RATING,
        }
    }

    /// Sum of the non-normal outcome probabilities.
    pub fn outcome_sum(&self) -> f64 {
        self.blunder_probability + self.inaccuracy_probability + self.brilliancy_probability
    }
}

/// Validate an anchor table supplied through configuration.
pub fn validate_anchors(anchors: &[SkillAnchor]) -> Result<(), ArbiterError> {
    if anchors.is_empty() {
        return Err(ArbiterError::InvalidConfig(
            "skill anchor table must not be empty".into(),
        ));
    }
    for pair in anchors.windows(2) {
        if pair[0].rating >= pair[1].rating {
            return Err(ArbiterError::InvalidConfig(format!(
                "skill anchors must be sorted by rating, got {} before {}",
                pair[0].rating, pair[1].rating
            )));
        }
    }
    for anchor in anchors {
        let probs = [
            anchor.blunder_probability,
            anchor.inaccuracy_probability,
            anchor.brilliancy_probability,
        ];
        if probs.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(ArbiterError::InvalidConfig(format!(
                "anchor at rating {} has a probability outside [0, 1]",
                anchor.rating
            )));
        }
        if anchor.eval_noise_stddev < 0.0 {
            return Err(ArbiterError::InvalidConfig(format!(
                "anchor at rating {} has negative eval noise",
                anchor.rating
            )));
        }
    }
    Ok(())
}

fn interpolate(rating: i32, anchors: &[SkillAnchor]) -> SkillAnchor {
    let first = anchors[0];
    if rating <= first.rating {
        return first;
    }
    for pair in anchors.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if rating <= hi.rating {
            let t = (rating - lo.rating) as f64 / (hi.rating - lo.rating) as f64;
            return SkillAnchor {
                rating,
                blunder_probability: lerp(lo.blunder_probability, hi.blunder_probability, t),
                inaccuracy_probability: lerp(
                    lo.inaccuracy_probability,
                    hi.inaccuracy_probability,
                    t,
                ),
                brilliancy_probability: lerp(
                    lo.brilliancy_probability,
                    hi.brilliancy_probability,
                    t,
                ),
                search_depth_cap: lerp(lo.search_depth_cap as f64, hi.search_depth_cap as f64, t)
                    .round() as u8,
                eval_noise_stddev: lerp(lo.eval_noise_stddev, hi.eval_noise_stddev, t),
            };
        }
    }
    anchors[anchors.len() - 1]
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "skill_tests.rs"]
mod skill_tests;
