//! Human-readable rationale for decisions and evaluations.
//!
//! Pure string generation: templates per category, flavoured by personality
//! where it matters. Template choice draws from the injected rng so output
//! varies between turns but stays reproducible under a fixed seed.

use rand::Rng;

use crate::personality::PersonalityProfile;
use crate::types::{CandidateMove, Eval, MoveCategory};

/// One-line reasoning for a decision.
pub fn rationale<R: Rng>(
    category: MoveCategory,
    chosen: &CandidateMove,
    centipawn_loss: i32,
    personality: &PersonalityProfile,
    rng: &mut R,
) -> String {
    let templates: &[&str] = match category {
        MoveCategory::Normal => normal_templates(personality),
        MoveCategory::Inaccuracy => &[
            "played an inaccuracy: a slightly loose move to keep things human",
            "chose a second-tier move, giving up a little ground",
            "drifted slightly; the engine liked something else better",
        ],
        MoveCategory::Blunder => &[
            "blundered deliberately: this move gives away real material or position",
            "played a clear mistake, as a player of this strength sometimes does",
            "missed the best idea entirely and lashed out with a weaker move",
        ],
        MoveCategory::Brilliancy => &[
            "spotted a flashy resource: a tactical shot nearly as good as the best move",
            "went for the spectacular option instead of the safe one",
            "found an inspired tactical idea in the position",
        ],
        MoveCategory::Book => &[
            "followed the opening repertoire",
            "played a known book continuation",
        ],
    };
    let template = templates[rng.gen_range(0..templates.len())];
    if centipawn_loss > 0 {
        format!("{} ({}, -{} cp)", template, chosen.uci, centipawn_loss)
    } else {
        format!("{} ({})", template, chosen.uci)
    }
}

fn normal_templates(personality: &PersonalityProfile) -> &'static [&'static str] {
    match personality.name.as_str() {
        "aggressive" => &[
            "kept up the pressure with the strongest attacking choice",
            "picked the most forcing of the good moves",
        ],
        "defensive" => &[
            "chose the safest of the strong moves",
            "consolidated with the most solid option",
        ],
        "creative" => &[
            "picked the most unusual of the near-best moves",
            "chose the move with the most interesting follow-ups",
        ],
        "positional" => &[
            "improved the position with the best long-term choice",
            "chose the move with the healthiest structure",
        ],
        _ => &[
            "played the best available move",
            "followed the engine's top choice",
        ],
    }
}

/// Describe an evaluation from the mover's perspective.
pub fn describe_eval(eval: Eval) -> String {
    match eval {
        Eval::Mate(n) if n > 0 => format!("forced mate in {}", n),
        Eval::Mate(n) => format!("facing forced mate in {}", -n),
        Eval::Cp(cp) => {
            let abs = cp.abs();
            let side = if cp >= 0 { "advantage" } else { "disadvantage" };
            match abs {
                0..=49 => "the position is approximately equal".to_string(),
                50..=149 => format!("a slight {}", side),
                150..=349 => format!("a clear {}", side),
                350..=649 if cp >= 0 => "a winning advantage".to_string(),
                350..=649 => "a losing position".to_string(),
                _ if cp > 0 => "a completely winning position".to_string(),
                _ => "a lost position".to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "rationale_tests.rs"]
mod rationale_tests;
