use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_rationale_mentions_move_and_loss() {
    let chosen = CandidateMove::new("g1f3", Eval::Cp(-10));
    let solid = PersonalityProfile::solid();
    let mut rng = StdRng::seed_from_u64(5);
    let text = rationale(MoveCategory::Inaccuracy, &chosen, 42, &solid, &mut rng);
    assert!(text.contains("g1f3"));
    assert!(text.contains("-42 cp"));
}

#[test]
fn test_rationale_omits_zero_loss() {
    let chosen = CandidateMove::new("e2e4", Eval::Cp(30));
    let solid = PersonalityProfile::solid();
    let mut rng = StdRng::seed_from_u64(5);
    let text = rationale(MoveCategory::Normal, &chosen, 0, &solid, &mut rng);
    assert!(text.contains("e2e4"));
    assert!(!text.contains("cp"));
}

#[test]
fn test_rationale_is_deterministic_under_fixed_seed() {
    let chosen = CandidateMove::new("d2d4", Eval::Cp(20));
    let creative = PersonalityProfile::resolve("creative").unwrap();
    let a = rationale(
        MoveCategory::Normal,
        &chosen,
        0,
        &creative,
        &mut StdRng::seed_from_u64(11),
    );
    let b = rationale(
        MoveCategory::Normal,
        &chosen,
        0,
        &creative,
        &mut StdRng::seed_from_u64(11),
    );
    assert_eq!(a, b);
}

#[test]
fn test_describe_eval_bands() {
    assert_eq!(describe_eval(Eval::Cp(0)), "the position is approximately equal");
    assert_eq!(describe_eval(Eval::Cp(100)), "a slight advantage");
    assert_eq!(describe_eval(Eval::Cp(-200)), "a clear disadvantage");
    assert_eq!(describe_eval(Eval::Cp(400)), "a winning advantage");
    assert_eq!(describe_eval(Eval::Cp(-400)), "a losing position");
    assert_eq!(describe_eval(Eval::Cp(900)), "a completely winning position");
    assert_eq!(describe_eval(Eval::Cp(-900)), "a lost position");
    assert_eq!(describe_eval(Eval::Mate(3)), "forced mate in 3");
    assert_eq!(describe_eval(Eval::Mate(-2)), "facing forced mate in 2");
}
