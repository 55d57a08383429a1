//! Personality profiles: stylistic scoring adjustments and opening taste.
//!
//! Adjustments are additive centipawn bonuses applied to raw evaluations
//! before ranking. They can reorder near-equal moves but are bounded by the
//! arbitrator's style ceiling, so style never turns into blundering.

use serde::{Deserialize, Serialize};

use crate::error::ArbiterError;
use crate::types::MoveTags;

/// The built-in style names, in resolution order.
pub const PERSONALITY_NAMES: [&str; 5] =
    ["aggressive", "defensive", "creative", "solid", "positional"];

/// Per-tag centipawn bonuses. Negative values penalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleAdjustments {
    pub capture: i32,
    pub check: i32,
    pub sacrifice: i32,
    pub promotion: i32,
    /// Applied to moves carrying no tag at all.
    pub quiet: i32,
}

impl StyleAdjustments {
    pub const NEUTRAL: StyleAdjustments = StyleAdjustments {
        capture: 0,
        check: 0,
        sacrifice: 0,
        promotion: 0,
        quiet: 0,
    };
}

/// A named bundle of stylistic preferences.
///
/// Immutable; share one instance read-only across games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub name: String,
    pub description: String,
    pub adjustments: StyleAdjustments,
    /// Openings this style gravitates towards in the repertoire.
    pub preferred_openings: Vec<String>,
}

impl PersonalityProfile {
    /// Look up a built-in personality by name (case-insensitive).
    ///
    /// Fails with [`ArbiterError::UnknownPersonality`]; callers wanting a
    /// fallback should default to [`PersonalityProfile::solid`].
    pub fn resolve(name: &str) -> Result<Self, ArbiterError> {
        match name.to_ascii_lowercase().as_str() {
            "aggressive" => Ok(Self::build(
                "aggressive",
                "prefers attacking moves and sacrifices",
                StyleAdjustments {
                    capture: 20,
                    check: 25,
                    sacrifice: 30,
                    promotion: 10,
                    quiet: -15,
                },
                &[
                    "King's Gambit",
                    "Vienna Gambit",
                    "Sicilian Dragon",
                    "Evans Gambit",
                    "Scotch Gambit",
                    "Benko Gambit",
                ],
            )),
            "defensive" => Ok(Self::build(
                "defensive",
                "prefers solid positions and safety",
                StyleAdjustments {
                    capture: -10,
                    check: -10,
                    sacrifice: -25,
                    promotion: 0,
                    quiet: 15,
                },
                &[
                    "Caro-Kann",
                    "French Defense",
                    "Berlin Defense",
                    "Queen's Gambit Declined",
                    "Slav Defense",
                    "Petroff Defense",
                ],
            )),
            "creative" => Ok(Self::build(
                "creative",
                "plays unusual and surprising moves",
                StyleAdjustments {
                    capture: 5,
                    check: 10,
                    sacrifice: 20,
                    promotion: 15,
                    quiet: -10,
                },
                &[
                    "Sicilian Najdorf",
                    "King's Indian",
                    "Modern Defense",
                    "Nimzo-Indian",
                    "Budapest Gambit",
                ],
            )),
            "solid" => Ok(Self::solid()),
            "positional" => Ok(Self::build(
                "positional",
                "plays for long-term positional advantages",
                StyleAdjustments {
                    capture: -5,
                    check: -5,
                    sacrifice: -10,
                    promotion: 5,
                    quiet: 10,
                },
                &[
                    "Catalan Opening",
                    "English Opening",
                    "Reti Opening",
                    "Queen's Indian Defense",
                    "Closed Sicilian",
                ],
            )),
            other => Err(ArbiterError::UnknownPersonality(other.to_string())),
        }
    }

    /// The neutral default style: no adjustments at all.
    pub fn solid() -> Self {
        Self::build(
            "solid",
            "plays principled, theoretically sound moves",
            StyleAdjustments::NEUTRAL,
            &[
                "Queen's Gambit",
                "Ruy Lopez",
                "Italian Game",
                "London System",
                "Semi-Slav",
                "Caro-Kann",
            ],
        )
    }

    /// Net centipawn adjustment for a move with the given tags.
    pub fn adjustment_for(&self, tags: &MoveTags) -> i32 {
        if tags.quiet() {
            return self.adjustments.quiet;
        }
        let mut total = 0;
        if tags.capture {
            total += self.adjustments.capture;
        }
        if tags.check {
            total += self.adjustments.check;
        }
        if tags.sacrifice {
            total += self.adjustments.sacrifice;
        }
        if tags.promotion {
            total += self.adjustments.promotion;
        }
        total
    }

    /// Whether this personality lists the opening among its favourites.
    pub fn prefers_opening(&self, opening: &str) -> bool {
        self.preferred_openings.iter().any(|o| o == opening)
    }

    fn build(
        name: &str,
        description: &str,
        adjustments: StyleAdjustments,
        openings: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            adjustments,
            preferred_openings: openings.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
#[path = "personality_tests.rs"]
mod personality_tests;
