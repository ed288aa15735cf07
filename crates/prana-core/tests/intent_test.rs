//! Integration test: free text → known remedy state.
//!
//! Verifies that:
//! 1. Normalization folds case, accents and abbreviations.
//! 2. A single known candidate gets `0.3 + score·0.1` confidence.
//! 3. Every classified state exists in the remedy matrix.
//! 4. Overrides reach the axis bonuses.

use prana_core::{
    classify_text, find_state, normalize, parse_intent, IntentOverrides, QuestionType, Theme,
};

#[test]
fn normalization_folds_text() {
    assert_eq!(normalize("  Estou   ANSIOSA!  "), "estou ansiosa!");
    assert_eq!(normalize("não sei"), "nao sei");
    assert_eq!(normalize("vc ta bem? kkk"), "voce ta bem?");
}

#[test]
fn single_candidate_confidence() {
    let m = classify_text("estou com muita raiva", &IntentOverrides::default()).unwrap();
    assert_eq!(m.state_key, "anger");
    assert_eq!(m.score, 1);
    assert!((m.confidence - 0.4).abs() < 1e-9);
}

#[test]
fn english_keywords_are_understood() {
    let m = classify_text("I feel so lonely lately", &IntentOverrides::default()).unwrap();
    assert_eq!(m.state_key, "loneliness");
}

#[test]
fn unmatched_text_has_no_state() {
    assert!(classify_text("o ceu esta azul hoje", &IntentOverrides::default()).is_none());
    assert!(classify_text("   ", &IntentOverrides::default()).is_none());
}

#[test]
fn unknown_states_never_surface() {
    // "panico" maps only to a state with no remedy entry
    assert!(classify_text("panico", &IntentOverrides::default()).is_none());

    for text in [
        "estou exausta e sobrecarregada",
        "tenho medo de perder meu emprego",
        "sinto saudade e luto",
        "fui rejeitada de novo",
        "estou confusa e perdida",
    ] {
        let m = classify_text(text, &IntentOverrides::default())
            .unwrap_or_else(|| panic!("no state for {text:?}"));
        assert!(find_state(&m.state_key).is_some(), "{text:?} -> {}", m.state_key);
        assert!((0.0..=1.0).contains(&m.confidence));
    }
}

#[test]
fn fear_of_loss_compound_wins() {
    let m = classify_text("tenho medo de perder meu emprego", &IntentOverrides::default()).unwrap();
    assert_eq!(m.state_key, "fear_of_loss");
}

#[test]
fn overrides_are_applied_after_parsing() {
    let parsed = parse_intent("como parar de pensar demais no trabalho")
        .unwrap()
        .with_overrides(&IntentOverrides {
            theme: Some(Theme::Health),
            question_type: Some(QuestionType::Why),
        });
    assert_eq!(parsed.theme, Theme::Health);
    assert_eq!(parsed.question_type, Some(QuestionType::Why));
}
