//! Ask a real UCI engine for candidates and let the arbitrator pick.
//!
//! Needs a `stockfish` binary on PATH; prints a friendly message and exits
//! otherwise.

use arbiter_core::{
    Arbiter, ArbiterConfig, DecisionHistory, Evaluator, PersonalityProfile, Position,
    SearchBudget, SkillProfile,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uci_evaluator::{UciConfig, UciEvaluator};

fn main() {
    let mut evaluator = match UciEvaluator::launch(UciConfig::default()) {
        Ok(e) => e,
        Err(err) => {
            eprintln!("could not start engine: {}", err);
            eprintln!("install stockfish (or put it on PATH) and re-run");
            return;
        }
    };
    println!("engine ready: {}", evaluator.name());

    let skill = SkillProfile::resolve(1400);
    let personality = PersonalityProfile::resolve("creative").expect("built-in style");
    let arbiter = Arbiter::new(ArbiterConfig::default());
    let mut history = DecisionHistory::new();
    let mut rng = StdRng::seed_from_u64(7);

    // The Italian game, out of book on move four.
    let mut pos = Position::startpos();
    for mv in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"] {
        pos.push(mv);
    }

    let budget = SearchBudget::default().capped_depth(skill.search_depth_cap);
    match evaluator.evaluate(&pos, budget) {
        Ok(candidates) => {
            println!("candidates:");
            for c in &candidates {
                println!("  {:6} {}", c.uci, c.eval);
            }
            match arbiter.decide(&candidates, &skill, &personality, &mut history, &mut rng) {
                Ok(decision) => println!(
                    "played {} [{}]: {}",
                    decision.uci, decision.category, decision.rationale
                ),
                Err(err) => eprintln!("arbitration failed: {}", err),
            }
        }
        Err(err) => eprintln!("evaluation failed: {}", err),
    }
}
