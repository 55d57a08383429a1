use super::*;

#[test]
fn test_all_builtin_names_resolve() {
    for name in PERSONALITY_NAMES {
        let profile = PersonalityProfile::resolve(name).unwrap();
        assert_eq!(profile.name, name);
        assert!(!profile.preferred_openings.is_empty());
    }
}

#[test]
fn test_resolution_is_case_insensitive() {
    let a = PersonalityProfile::resolve("Aggressive").unwrap();
    let b = PersonalityProfile::resolve("AGGRESSIVE").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unknown_name_is_an_error() {
    let err = PersonalityProfile::resolve("berserk").unwrap_err();
    assert!(matches!(err, ArbiterError::UnknownPersonality(name) if name == "berserk"));
}

#[test]
fn test_solid_is_neutral() {
    let solid = PersonalityProfile::solid();
    assert_eq!(solid.adjustments, StyleAdjustments::NEUTRAL);
    assert_eq!(solid.adjustment_for(&MoveTags::default()), 0);
    let tactical = MoveTags {
        capture: true,
        check: true,
        sacrifice: true,
        promotion: true,
    };
    assert_eq!(solid.adjustment_for(&tactical), 0);
}

#[test]
fn test_aggressive_rewards_tactics() {
    let aggressive = PersonalityProfile::resolve("aggressive").unwrap();
    let capture_check = MoveTags {
        capture: true,
        check: true,
        ..MoveTags::default()
    };
    // Tag bonuses sum.
    assert_eq!(aggressive.adjustment_for(&capture_check), 45);
    // Quiet moves are penalized.
    assert_eq!(aggressive.adjustment_for(&MoveTags::default()), -15);
}

#[test]
fn test_defensive_penalizes_sacrifices() {
    let defensive = PersonalityProfile::resolve("defensive").unwrap();
    let sac = MoveTags {
        sacrifice: true,
        ..MoveTags::default()
    };
    assert!(defensive.adjustment_for(&sac) < 0);
    assert!(defensive.adjustment_for(&MoveTags::default()) > 0);
}

#[test]
fn test_quiet_bonus_only_for_fully_quiet_moves() {
    let defensive = PersonalityProfile::resolve("defensive").unwrap();
    let capture = MoveTags {
        capture: true,
        ..MoveTags::default()
    };
    // A capture does not also collect the quiet bonus.
    assert_eq!(defensive.adjustment_for(&capture), -10);
}

#[test]
fn test_opening_preferences() {
    let aggressive = PersonalityProfile::resolve("aggressive").unwrap();
    assert!(aggressive.prefers_opening("King's Gambit"));
    assert!(!aggressive.prefers_opening("Caro-Kann"));
}
