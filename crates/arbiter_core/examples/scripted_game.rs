//! Replay one scripted position at several strengths and print what the
//! arbitrator does with it.

use arbiter_core::{
    Arbiter, ArbiterConfig, CandidateMove, DecisionHistory, Eval, Evaluator, MoveTags,
    PersonalityProfile, Position, ScriptedEvaluator, SearchBudget, SkillProfile,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let pos =
        Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let mut evaluator = ScriptedEvaluator::new();
    evaluator.script(
        pos.clone(),
        vec![
            CandidateMove::new("f1b5", Eval::Cp(35)),
            CandidateMove::new("f1c4", Eval::Cp(30)),
            CandidateMove::with_tags(
                "f3e5",
                Eval::Cp(-15),
                MoveTags {
                    capture: true,
                    ..MoveTags::default()
                },
            ),
            CandidateMove::new("a2a4", Eval::Cp(-170)),
        ],
    );

    let arbiter = Arbiter::new(ArbiterConfig::default());
    let personality = PersonalityProfile::resolve("aggressive").expect("built-in style");
    let mut rng = StdRng::seed_from_u64(42);

    for rating in [800, 1500, 2500] {
        let skill = SkillProfile::resolve(rating);
        let mut history = DecisionHistory::new();
        println!("=== rating {} (depth cap {}) ===", rating, skill.search_depth_cap);
        for turn in 1..=10 {
            let candidates = evaluator
                .evaluate(&pos, SearchBudget::default().capped_depth(skill.search_depth_cap))
                .expect("scripted position");
            let decision = arbiter
                .decide(&candidates, &skill, &personality, &mut history, &mut rng)
                .expect("non-empty candidates");
            println!(
                "  turn {:2}: {:6} [{}] {}",
                turn, decision.uci, decision.category, decision.rationale
            );
        }
        println!();
    }
}
