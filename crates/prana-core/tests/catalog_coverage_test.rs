//! Integration test: built-in catalogs and sacred text selection.
//!
//! Verifies that:
//! 1. The offline validation pass reports no problems.
//! 2. Every klesha is targeted by at least one sacred entry, and every corpus is populated.
//! 3. Every matrix text reference resolves to text.
//! 4. Selection prefers klesha matches, honors avoid ids and never comes back empty.

use prana_core::catalog::corpus_entries;
use prana_core::sacred_text::{resolve, score, select, KLESHA_SCORE};
use prana_core::{remedy_matrix, sacred_catalog, validate_catalog, Corpus, Klesha, Quality};
use std::collections::HashSet;

#[test]
fn builtin_catalog_validates() {
    let report = validate_catalog();
    assert!(report.is_ok(), "problems: {:?}", report.problems);
    assert_eq!(report.remedy_states, remedy_matrix().len());
    assert_eq!(report.sacred_entries, sacred_catalog().len());
}

#[test]
fn every_klesha_is_covered() {
    for klesha in Klesha::ALL {
        let count = sacred_catalog()
            .iter()
            .filter(|e| e.kleshas.contains(klesha))
            .count();
        assert!(count > 0, "no sacred entry for {klesha}");
    }
}

#[test]
fn every_corpus_is_populated() {
    for corpus in Corpus::ALL {
        assert!(!corpus_entries(*corpus).is_empty(), "{corpus} is empty");
    }
}

#[test]
fn remedy_states_are_unique_snake_case() {
    let mut seen = HashSet::new();
    for entry in remedy_matrix() {
        assert!(seen.insert(entry.state), "duplicate {}", entry.state);
        assert!(entry
            .state
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_'));
        assert!(!entry.qualities.is_empty(), "{} has no qualities", entry.state);
    }
}

#[test]
fn matrix_references_resolve() {
    for entry in remedy_matrix() {
        let resolved = resolve(&entry.text_ref)
            .unwrap_or_else(|| panic!("{} -> {}", entry.state, entry.text_ref.qualified()));
        assert!(!resolved.text.trim().is_empty());
    }
}

#[test]
fn inline_verse_wins_over_catalog_text() {
    let anxiety = remedy_matrix().iter().find(|e| e.state == "anxiety").unwrap();
    let verse = anxiety.text_ref.verse.expect("anxiety carries an inline verse");
    assert_eq!(resolve(&anxiety.text_ref).unwrap().text, verse);
}

#[test]
fn selection_prefers_klesha_matches() {
    for klesha in Klesha::ALL {
        for seed in 0..8 {
            let picked = select(&[*klesha], &[Quality::Heavy], &[] as &[&str], seed).unwrap();
            assert!(
                score(picked, &[*klesha], &[Quality::Heavy]) >= KLESHA_SCORE,
                "{klesha} seed {seed} picked {}",
                picked.qualified_id()
            );
        }
    }
}

#[test]
fn selection_is_stable_per_seed() {
    let a = select(&[Klesha::Raga], &[Quality::Mobile], &[] as &[&str], 42).unwrap();
    let b = select(&[Klesha::Raga], &[Quality::Mobile], &[] as &[&str], 42).unwrap();
    assert_eq!(a.qualified_id(), b.qualified_id());
}

#[test]
fn bare_and_qualified_avoid_ids_both_work() {
    let first = select(&[Klesha::Avidya], &[], &[] as &[&str], 0).unwrap();
    let bare = select(&[Klesha::Avidya], &[], &[first.id], 0).unwrap();
    let qualified = select(&[Klesha::Avidya], &[], &[first.qualified_id()], 0).unwrap();
    assert_ne!(bare.qualified_id(), first.qualified_id());
    assert_ne!(qualified.qualified_id(), first.qualified_id());
}

#[test]
fn avoiding_everything_still_selects() {
    let all: Vec<String> = sacred_catalog().iter().map(|e| e.qualified_id()).collect();
    let picked = select(&[Klesha::Dvesha], &[Quality::Hot], &all, 3).unwrap();
    assert!(!picked.text.is_empty());
}

#[test]
fn no_signal_picks_from_whole_catalog() {
    let catalog = sacred_catalog();
    let picked = select(&[], &[], &[] as &[&str], 5).unwrap();
    assert_eq!(picked.qualified_id(), catalog[5].qualified_id());
}
