//! Static reference catalogs: the remedy matrix and the three sacred corpora.
//!
//! Everything here is `'static` data compiled into the binary. The combined
//! cross-corpus view is built once on first use. [`validate_catalog`] runs the
//! offline integrity checks (`prana validate`).

use crate::intent::Theme;
use crate::shared::{tag_enum, Guna, Klesha, Quality};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

/// `sacred!(Corpus, "id", [kleshas], [qualities], [themes], "text")`
macro_rules! sacred {
    ($corpus:ident, $id:literal, [$($k:ident),*], [$($q:ident),*], [$($t:ident),*], $text:literal) => {
        $crate::catalog::SacredEntry {
            corpus: $crate::catalog::Corpus::$corpus,
            id: $id,
            text: $text,
            kleshas: &[$($crate::shared::Klesha::$k),*],
            qualities: &[$($crate::shared::Quality::$q),*],
            themes: &[$($crate::intent::Theme::$t),*],
        }
    };
}

mod dhammapada;
mod gita;
pub mod remedy_matrix;
mod yoga_sutra;

pub use remedy_matrix::REMEDY_MATRIX;

tag_enum! {
    /// Sub-catalog of the sacred text reference.
    Corpus {
        /// Numbered verses, `chapter.verse`.
        Gita => "gita",
        /// Short sayings, numbered 1..423.
        Dhammapada => "dhammapada",
        /// Philosophical aphorisms, `pada.sutra`.
        YogaSutra => "yoga_sutra",
    }
}

/// Catalog integrity errors. Only an empty catalog can surface at runtime.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog '{0}' is empty")]
    Empty(&'static str),

    #[error("duplicate id '{id}' in corpus {corpus}")]
    DuplicateId { corpus: Corpus, id: &'static str },

    #[error("entry {corpus}.{id} has empty text")]
    EmptyText { corpus: Corpus, id: &'static str },

    #[error("no sacred entry targets klesha '{0}'")]
    UncoveredKlesha(Klesha),

    #[error("duplicate remedy state '{0}'")]
    DuplicateState(&'static str),

    #[error("remedy state '{state}' references unknown text {reference}")]
    UnknownReference { state: &'static str, reference: String },

    #[error("remedy state '{state}' has an empty {field}")]
    IncompleteRemedy { state: &'static str, field: &'static str },
}

/// Pointer from a remedy entry into the sacred corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextRef {
    pub corpus: Corpus,
    pub id: &'static str,
    /// Inline verse carried by the matrix; wins over the catalog text when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse: Option<&'static str>,
}

impl TextRef {
    /// `corpus.id`
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.corpus.as_str(), self.id)
    }
}

/// One remedy matrix row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedyEntry {
    pub state: &'static str,
    pub klesha: Klesha,
    pub guna: Guna,
    pub qualities: &'static [Quality],
    pub text_ref: TextRef,
    /// Sentences separated by ". ".
    pub practice: &'static str,
    /// Items separated by "; ".
    pub food: &'static str,
    pub question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u8>,
}

/// One sacred text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SacredEntry {
    pub corpus: Corpus,
    pub id: &'static str,
    pub text: &'static str,
    pub kleshas: &'static [Klesha],
    pub qualities: &'static [Quality],
    #[serde(skip_serializing_if = "no_themes")]
    pub themes: &'static [Theme],
}

fn no_themes(themes: &&'static [Theme]) -> bool {
    themes.is_empty()
}

impl SacredEntry {
    /// `corpus.id`
    pub fn qualified_id(&self) -> String {
        format!("{}.{}", self.corpus.as_str(), self.id)
    }

    /// True when `id` names this entry, bare or qualified.
    pub fn matches_id(&self, id: &str) -> bool {
        let id = id.trim();
        if id == self.id {
            return true;
        }
        id.split_once('.')
            .map(|(corpus, rest)| corpus == self.corpus.as_str() && rest == self.id)
            .unwrap_or(false)
    }
}

static SACRED_CATALOG: Lazy<Vec<&'static SacredEntry>> = Lazy::new(|| {
    gita::VERSES
        .iter()
        .chain(dhammapada::SAYINGS.iter())
        .chain(yoga_sutra::APHORISMS.iter())
        .collect()
});

/// Every sacred entry across corpora, in corpus order.
pub fn sacred_catalog() -> &'static [&'static SacredEntry] {
    SACRED_CATALOG.as_slice()
}

/// Entries of one corpus.
pub fn corpus_entries(corpus: Corpus) -> &'static [SacredEntry] {
    match corpus {
        Corpus::Gita => gita::VERSES,
        Corpus::Dhammapada => dhammapada::SAYINGS,
        Corpus::YogaSutra => yoga_sutra::APHORISMS,
    }
}

pub fn find_sacred(corpus: Corpus, id: &str) -> Option<&'static SacredEntry> {
    corpus_entries(corpus).iter().find(|e| e.id == id)
}

pub fn remedy_matrix() -> &'static [RemedyEntry] {
    REMEDY_MATRIX
}

/// Remedy entry by exact state key.
pub fn find_state(key: &str) -> Option<&'static RemedyEntry> {
    REMEDY_MATRIX.iter().find(|e| e.state == key)
}

/// Outcome of the offline checks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    pub remedy_states: usize,
    pub sacred_entries: usize,
    pub per_corpus: Vec<(Corpus, usize)>,
    #[serde(serialize_with = "serialize_problems")]
    pub problems: Vec<CatalogError>,
}

impl CatalogReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

fn serialize_problems<S: serde::Serializer>(
    problems: &[CatalogError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(problems.iter().map(|p| p.to_string()))
}

/// Offline integrity checks over the built-in catalogs.
pub fn validate_catalog() -> CatalogReport {
    validate(REMEDY_MATRIX, sacred_catalog())
}

/// Integrity checks over arbitrary catalogs: empty catalogs, per-corpus id uniqueness,
/// non-empty text, klesha coverage, unique remedy states with complete fields and
/// resolvable text references.
pub fn validate(matrix: &[RemedyEntry], sacred: &[&SacredEntry]) -> CatalogReport {
    let mut problems = Vec::new();

    if matrix.is_empty() {
        problems.push(CatalogError::Empty("remedy matrix"));
    }
    if sacred.is_empty() {
        problems.push(CatalogError::Empty("sacred corpus"));
    }

    let mut seen: HashSet<(Corpus, &str)> = HashSet::new();
    for entry in sacred {
        if !seen.insert((entry.corpus, entry.id)) {
            problems.push(CatalogError::DuplicateId {
                corpus: entry.corpus,
                id: entry.id,
            });
        }
        if entry.text.trim().is_empty() {
            problems.push(CatalogError::EmptyText {
                corpus: entry.corpus,
                id: entry.id,
            });
        }
    }

    if !sacred.is_empty() {
        for klesha in Klesha::ALL {
            if !sacred.iter().any(|e| e.kleshas.contains(klesha)) {
                problems.push(CatalogError::UncoveredKlesha(*klesha));
            }
        }
    }

    let mut states: HashSet<&str> = HashSet::new();
    for entry in matrix {
        if !states.insert(entry.state) {
            problems.push(CatalogError::DuplicateState(entry.state));
        }
        for (field, value) in [
            ("practice", entry.practice),
            ("food", entry.food),
            ("question", entry.question),
        ] {
            if value.trim().is_empty() {
                problems.push(CatalogError::IncompleteRemedy {
                    state: entry.state,
                    field,
                });
            }
        }
        let reference = entry.text_ref;
        let resolves = sacred
            .iter()
            .any(|e| e.corpus == reference.corpus && e.id == reference.id);
        if !resolves {
            problems.push(CatalogError::UnknownReference {
                state: entry.state,
                reference: reference.qualified(),
            });
        }
    }

    let per_corpus = Corpus::ALL
        .iter()
        .map(|c| (*c, sacred.iter().filter(|e| e.corpus == *c).count()))
        .collect();

    CatalogReport {
        remedy_states: matrix.len(),
        sacred_entries: sacred.len(),
        per_corpus,
        problems,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalogs_validate() {
        let report = validate_catalog();
        assert!(report.is_ok(), "{:?}", report.problems);
        assert!(report.sacred_entries >= 150);
        assert!((28..=36).contains(&report.remedy_states));
    }

    #[test]
    fn every_guna_has_remedy_states() {
        for guna in Guna::ALL {
            assert!(REMEDY_MATRIX.iter().any(|e| e.guna == *guna), "{guna}");
        }
    }

    #[test]
    fn ids_match_bare_and_qualified() {
        let e = find_sacred(Corpus::Gita, "2.47").unwrap();
        assert!(e.matches_id("2.47"));
        assert!(e.matches_id("gita.2.47"));
        assert!(!e.matches_id("yoga_sutra.2.47"));
        assert!(!e.matches_id("2.4"));
        assert_eq!(e.qualified_id(), "gita.2.47");
    }

    #[test]
    fn validation_reports_problems() {
        static BROKEN: [SacredEntry; 2] = [
            sacred!(Gita, "1.1", [Raga], [], [], "text"),
            sacred!(Gita, "1.1", [Raga], [], [], "  "),
        ];
        let sacred: Vec<&SacredEntry> = BROKEN.iter().collect();
        let report = validate(&[], &sacred);
        assert!(report.problems.contains(&CatalogError::Empty("remedy matrix")));
        assert!(report
            .problems
            .contains(&CatalogError::DuplicateId { corpus: Corpus::Gita, id: "1.1" }));
        assert!(report
            .problems
            .contains(&CatalogError::EmptyText { corpus: Corpus::Gita, id: "1.1" }));
        assert!(report
            .problems
            .contains(&CatalogError::UncoveredKlesha(Klesha::Avidya)));
    }

    #[test]
    fn matrix_lookup() {
        assert_eq!(find_state("anxiety").map(|e| e.klesha), Some(Klesha::Abhinivesha));
        assert!(find_state("estado_inexistente").is_none());
    }
}
