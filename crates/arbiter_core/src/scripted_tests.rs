use super::*;
use crate::types::Eval;

#[test]
fn test_scripted_lookup_and_truncation() {
    let mut eval = ScriptedEvaluator::new();
    let pos = Position::startpos();
    eval.script(
        pos.clone(),
        vec![
            CandidateMove::new("e2e4", Eval::Cp(30)),
            CandidateMove::new("d2d4", Eval::Cp(25)),
            CandidateMove::new("g1f3", Eval::Cp(20)),
        ],
    );

    let all = eval.evaluate(&pos, SearchBudget::depth(10)).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].uci, "e2e4");

    let two = eval
        .evaluate(&pos, SearchBudget::depth(10).with_candidates(2))
        .unwrap();
    assert_eq!(two.len(), 2);
}

#[test]
fn test_empty_script_is_terminal() {
    let mut eval = ScriptedEvaluator::new();
    let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    eval.script(pos.clone(), Vec::new());
    let err = eval.evaluate(&pos, SearchBudget::default()).unwrap_err();
    assert!(matches!(err, ArbiterError::NoLegalMoves));
}

#[test]
fn test_unknown_position_is_unavailable() {
    let mut eval = ScriptedEvaluator::new();
    let err = eval
        .evaluate(&Position::startpos(), SearchBudget::default())
        .unwrap_err();
    assert!(matches!(err, ArbiterError::EngineUnavailable(_)));
}
