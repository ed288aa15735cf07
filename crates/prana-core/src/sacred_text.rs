//! Sacred Text Selector.
//!
//! Score: +2 when the entry targets any requested klesha, +1 when it shares any
//! requested quality. Avoided ids (bare or `corpus.id`) leave the pool unless that
//! would empty it. Max scorers are kept when the max is positive; the pick is
//! `seed % count`.

use crate::catalog::{self, CatalogError, SacredEntry, TextRef};
use crate::shared::{Klesha, Quality};
use serde::Serialize;

pub const KLESHA_SCORE: u32 = 2;
pub const QUALITY_SCORE: u32 = 1;

pub fn score(entry: &SacredEntry, kleshas: &[Klesha], qualities: &[Quality]) -> u32 {
    let mut score = 0;
    if entry.kleshas.iter().any(|k| kleshas.contains(k)) {
        score += KLESHA_SCORE;
    }
    if entry.qualities.iter().any(|q| qualities.contains(q)) {
        score += QUALITY_SCORE;
    }
    score
}

/// Select over the built-in cross-corpus catalog.
pub fn select<S: AsRef<str>>(
    kleshas: &[Klesha],
    qualities: &[Quality],
    avoid_ids: &[S],
    seed: u64,
) -> Result<&'static SacredEntry, CatalogError> {
    select_from(catalog::sacred_catalog(), kleshas, qualities, avoid_ids, seed)
}

/// Select over an arbitrary catalog.
pub fn select_from<'a, S: AsRef<str>>(
    catalog: &[&'a SacredEntry],
    kleshas: &[Klesha],
    qualities: &[Quality],
    avoid_ids: &[S],
    seed: u64,
) -> Result<&'a SacredEntry, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::Empty("sacred corpus"));
    }

    let kept: Vec<&'a SacredEntry> = catalog
        .iter()
        .copied()
        .filter(|e| !avoid_ids.iter().any(|id| e.matches_id(id.as_ref())))
        .collect();
    let pool = if kept.is_empty() {
        tracing::debug!(target: "prana::compose", avoided = avoid_ids.len(), "sacred avoid set covers the catalog; ignoring it");
        catalog.to_vec()
    } else {
        kept
    };

    let scored: Vec<(u32, &'a SacredEntry)> = pool
        .into_iter()
        .map(|e| (score(e, kleshas, qualities), e))
        .collect();
    let max = scored.iter().map(|(s, _)| *s).max().unwrap_or(0);
    let candidates: Vec<&'a SacredEntry> = scored
        .into_iter()
        .filter(|(s, _)| max == 0 || *s == max)
        .map(|(_, e)| e)
        .collect();

    Ok(candidates[(seed % candidates.len() as u64) as usize])
}

/// Text behind a matrix reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedText {
    pub reference: TextRef,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<&'static SacredEntry>,
}

/// Look a matrix reference up in the catalog. An inline verse wins; a reference
/// without an inline verse or catalog entry resolves to `None`.
pub fn resolve(reference: &TextRef) -> Option<ResolvedText> {
    let entry = catalog::find_sacred(reference.corpus, reference.id);
    let text = reference.verse.or(entry.map(|e| e.text))?;
    Some(ResolvedText {
        reference: *reference,
        text,
        entry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_sacred, Corpus};

    const NONE: &[&str] = &[];

    #[test]
    fn scores_are_additive() {
        let e = find_sacred(Corpus::Dhammapada, "222").unwrap();
        assert_eq!(score(e, &[Klesha::Dvesha], &[Quality::Hot]), 3);
        assert_eq!(score(e, &[Klesha::Dvesha], &[]), 2);
        assert_eq!(score(e, &[], &[Quality::Mobile]), 1);
        assert_eq!(score(e, &[Klesha::Avidya], &[Quality::Dry]), 0);
    }

    #[test]
    fn picks_only_top_scorers() {
        for seed in 0..20 {
            let e = select(&[Klesha::Abhinivesha], &[Quality::Cold], NONE, seed).unwrap();
            assert_eq!(score(e, &[Klesha::Abhinivesha], &[Quality::Cold]), 3);
        }
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let a = select(&[Klesha::Raga], &[Quality::Mobile], &["gita.2.47"], 42).unwrap();
        let b = select(&[Klesha::Raga], &[Quality::Mobile], &["gita.2.47"], 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn avoid_ids_match_bare_and_qualified() {
        let top = |avoid: &[&str], seed| {
            select(&[Klesha::Asmita], &[Quality::Dense], avoid, seed).unwrap()
        };
        // dhammapada 81 is the only asmita + dense entry
        assert_eq!(top(NONE, 0).qualified_id(), "dhammapada.81");
        assert_ne!(top(&["81"], 0).qualified_id(), "dhammapada.81");
        assert_ne!(top(&["dhammapada.81"], 0).qualified_id(), "dhammapada.81");
    }

    #[test]
    fn exhaustive_avoid_set_is_ignored() {
        let catalog = catalog::sacred_catalog();
        let everything: Vec<String> = catalog.iter().map(|e| e.qualified_id()).collect();
        let e = select(&[Klesha::Dvesha], &[], &everything, 5).unwrap();
        assert_eq!(e, select(&[Klesha::Dvesha], &[], NONE, 5).unwrap());
    }

    #[test]
    fn zero_scores_keep_whole_pool() {
        let catalog = catalog::sacred_catalog();
        let e = select(&[], &[], NONE, 7).unwrap();
        assert_eq!(e, catalog[7]);
    }

    #[test]
    fn empty_catalog_errors() {
        let err = select_from(&[], &[Klesha::Raga], &[], NONE, 0).unwrap_err();
        assert_eq!(err, CatalogError::Empty("sacred corpus"));
    }

    #[test]
    fn inline_verse_wins() {
        let anxiety = catalog::find_state("anxiety").unwrap();
        let resolved = resolve(&anxiety.text_ref).unwrap();
        assert_eq!(Some(resolved.text), anxiety.text_ref.verse);
        assert!(resolved.entry.is_some());

        let anger = catalog::find_state("anger").unwrap();
        let resolved = resolve(&anger.text_ref).unwrap();
        assert_eq!(resolved.text, find_sacred(Corpus::Dhammapada, "222").unwrap().text);
    }
}
