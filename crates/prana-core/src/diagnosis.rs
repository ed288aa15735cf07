//! Diagnosis Engine: pick one remedy-matrix state, from a seed alone or from a
//! symbolic map.
//!
//! Selection never comes back empty while the matrix has rows: a guna filter or
//! an avoid set that would empty the pool is dropped instead. The pick is plain
//! `seed % pool.len()`. Guna weights are a fixed 0.6 / 0.2 / 0.2 heuristic around
//! the dominant guna, not a measurement.

use crate::catalog::{self, CatalogError, RemedyEntry};
use crate::config::EngineConfig;
use crate::ephemeris::EphemerisError;
use crate::shared::{BirthProfile, Dosha, Element, Guna, Klesha, Mode, Quality};
use crate::symbolic_map::{SymbolicMap, SymbolicMapBuilder};
use serde::Serialize;

pub const DOMINANT_WEIGHT: f64 = 0.6;
pub const MINOR_WEIGHT: f64 = 0.2;

#[derive(Debug, thiserror::Error)]
pub enum DiagnosisError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GunaWeights {
    pub sattva: f64,
    pub rajas: f64,
    pub tamas: f64,
}

impl GunaWeights {
    pub fn dominant(guna: Guna) -> Self {
        let weight = |g: Guna| if g == guna { DOMINANT_WEIGHT } else { MINOR_WEIGHT };
        Self {
            sattva: weight(Guna::Sattva),
            rajas: weight(Guna::Rajas),
            tamas: weight(Guna::Tamas),
        }
    }

    /// Heaviest guna; declaration order breaks ties.
    pub fn leading(&self) -> Guna {
        let mut best = (Guna::Sattva, self.sattva);
        for (g, w) in [(Guna::Rajas, self.rajas), (Guna::Tamas, self.tamas)] {
            if w > best.1 {
                best = (g, w);
            }
        }
        best.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsciousDiagnosis {
    pub mode: Mode,
    pub klesha: Option<Klesha>,
    pub gunas: GunaWeights,
    pub qualities_excess: Vec<Quality>,
    pub qualities_deficient: Vec<Quality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosha: Option<Dosha>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_key: Option<String>,
}

impl ConsciousDiagnosis {
    fn from_entry(mode: Mode, entry: &RemedyEntry, dominant: Guna) -> Self {
        Self {
            mode,
            klesha: Some(entry.klesha),
            gunas: GunaWeights::dominant(dominant),
            qualities_excess: entry.qualities.to_vec(),
            qualities_deficient: entry.qualities.iter().map(Quality::opposite).collect(),
            dosha: None,
            element: None,
            state_key: Some(entry.state.to_string()),
        }
    }
}

/// Selection inputs shared by both entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosisRequest {
    pub seed: u64,
    pub avoid_state_keys: Vec<String>,
    /// Wins over the guna filter and the avoid set when it names a known state.
    pub preferred_state_key: Option<String>,
}

impl DiagnosisRequest {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

/// Personal-mode result: the diagnosis and the map it came from.
#[derive(Debug, Clone)]
pub struct PersonalDiagnosis {
    pub diagnosis: ConsciousDiagnosis,
    pub map: SymbolicMap,
}

pub struct DiagnosisEngine {
    builder: SymbolicMapBuilder,
    matrix: &'static [RemedyEntry],
}

impl DiagnosisEngine {
    pub fn new(builder: SymbolicMapBuilder) -> Self {
        Self::with_matrix(builder, catalog::remedy_matrix())
    }

    pub fn with_matrix(builder: SymbolicMapBuilder, matrix: &'static [RemedyEntry]) -> Self {
        Self { builder, matrix }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(SymbolicMapBuilder::from_config(config))
    }

    pub fn builder(&self) -> &SymbolicMapBuilder {
        &self.builder
    }

    /// Seed-only diagnosis.
    pub fn diagnosis_universal(&self, request: &DiagnosisRequest) -> Result<ConsciousDiagnosis, CatalogError> {
        let entry = self.select(None, request)?;
        tracing::debug!(target: "prana::diagnosis", state = entry.state, seed = request.seed, "universal diagnosis");
        Ok(ConsciousDiagnosis::from_entry(Mode::Universal, entry, entry.guna))
    }

    /// Map-driven diagnosis: the archetype picks the dominant guna, the lunar sign
    /// the dosha/element pair.
    pub fn diagnosis_personal(
        &self,
        profile: &BirthProfile,
        request: &DiagnosisRequest,
    ) -> Result<PersonalDiagnosis, DiagnosisError> {
        let map = self.builder.build(profile)?;
        let diagnosis = self.diagnose_map(&map, request)?;
        Ok(PersonalDiagnosis { diagnosis, map })
    }

    /// Personal-mode diagnosis over an already built map.
    pub fn diagnose_map(
        &self,
        map: &SymbolicMap,
        request: &DiagnosisRequest,
    ) -> Result<ConsciousDiagnosis, CatalogError> {
        let dominant = map.primary_archetype.map(|a| a.guna());
        let entry = self.select(dominant, request)?;

        let mut diagnosis =
            ConsciousDiagnosis::from_entry(Mode::Personal, entry, dominant.unwrap_or(entry.guna));
        if let Some(sign) = map.lunar_sign() {
            diagnosis.dosha = Some(sign.dosha());
            diagnosis.element = Some(sign.element());
        }

        tracing::debug!(
            target: "prana::diagnosis",
            state = entry.state,
            seed = request.seed,
            dominant_guna = dominant.map(|g| g.as_str()),
            dosha = diagnosis.dosha.map(|d| d.as_str()),
            "personal diagnosis"
        );
        Ok(diagnosis)
    }

    /// Matrix entry for a diagnosis: exact state key, else klesha filter (dropped
    /// when empty) with `seed % len`.
    pub fn get_remedy_for_diagnosis(
        &self,
        diagnosis: &ConsciousDiagnosis,
        seed: u64,
    ) -> Result<&'static RemedyEntry, CatalogError> {
        if self.matrix.is_empty() {
            return Err(CatalogError::Empty("remedy matrix"));
        }
        if let Some(key) = diagnosis.state_key.as_deref() {
            if let Some(entry) = self.matrix.iter().find(|e| e.state == key) {
                return Ok(entry);
            }
        }

        let full: Vec<&'static RemedyEntry> = self.matrix.iter().collect();
        let pool = match diagnosis.klesha {
            Some(klesha) => widen(
                full.iter().copied().filter(|e| e.klesha == klesha).collect(),
                &full,
            ),
            None => full,
        };
        Ok(pick(&pool, seed))
    }

    fn select(
        &self,
        dominant: Option<Guna>,
        request: &DiagnosisRequest,
    ) -> Result<&'static RemedyEntry, CatalogError> {
        if self.matrix.is_empty() {
            return Err(CatalogError::Empty("remedy matrix"));
        }

        if let Some(key) = request.preferred_state_key.as_deref() {
            match self.matrix.iter().find(|e| e.state == key) {
                Some(entry) => return Ok(entry),
                None => {
                    tracing::debug!(target: "prana::diagnosis", preferred = key, "preferred state unknown; ignoring")
                }
            }
        }

        let full: Vec<&'static RemedyEntry> = self.matrix.iter().collect();

        let pool = match dominant {
            Some(guna) => widen(full.iter().copied().filter(|e| e.guna == guna).collect(), &full),
            None => full,
        };

        let pool = if request.avoid_state_keys.is_empty() {
            pool
        } else {
            let kept = pool
                .iter()
                .copied()
                .filter(|e| !request.avoid_state_keys.iter().any(|k| k == e.state))
                .collect();
            widen(kept, &pool)
        };

        Ok(pick(&pool, request.seed))
    }
}

/// A filtered pool, or the pre-filter pool when filtering emptied it.
fn widen(filtered: Vec<&'static RemedyEntry>, unfiltered: &[&'static RemedyEntry]) -> Vec<&'static RemedyEntry> {
    if filtered.is_empty() {
        unfiltered.to_vec()
    } else {
        filtered
    }
}

/// `seed % len`. The pool is never empty here.
fn pick(pool: &[&'static RemedyEntry], seed: u64) -> &'static RemedyEntry {
    pool[(seed % pool.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZodiacMode;
    use crate::ephemeris::{EphemerisResolver, MeanMotionProvider};

    fn engine() -> DiagnosisEngine {
        DiagnosisEngine::new(SymbolicMapBuilder::new(EphemerisResolver::new(
            vec![Box::new(MeanMotionProvider)],
            ZodiacMode::Tropical,
        )))
    }

    fn all_states() -> Vec<String> {
        catalog::remedy_matrix().iter().map(|e| e.state.to_string()).collect()
    }

    #[test]
    fn universal_is_seed_modulo_catalog() {
        let engine = engine();
        let matrix = catalog::remedy_matrix();
        for seed in [0u64, 1, 7, 100, 12_345] {
            let d = engine.diagnosis_universal(&DiagnosisRequest::with_seed(seed)).unwrap();
            let expected = &matrix[(seed % matrix.len() as u64) as usize];
            assert_eq!(d.state_key.as_deref(), Some(expected.state));
            assert_eq!(d.klesha, Some(expected.klesha));
            assert_eq!(d.gunas.leading(), expected.guna);
        }
    }

    #[test]
    fn avoid_set_skips_states() {
        let engine = engine();
        let first = engine.diagnosis_universal(&DiagnosisRequest::with_seed(0)).unwrap();
        let request = DiagnosisRequest {
            seed: 0,
            avoid_state_keys: vec![first.state_key.clone().unwrap()],
            ..Default::default()
        };
        let second = engine.diagnosis_universal(&request).unwrap();
        assert_ne!(first.state_key, second.state_key);
    }

    #[test]
    fn exhaustive_avoid_set_widens_back() {
        let engine = engine();
        let request = DiagnosisRequest {
            seed: 3,
            avoid_state_keys: all_states(),
            ..Default::default()
        };
        let d = engine.diagnosis_universal(&request).unwrap();
        let plain = engine.diagnosis_universal(&DiagnosisRequest::with_seed(3)).unwrap();
        assert_eq!(d, plain);
    }

    #[test]
    fn preferred_key_wins_over_avoid_set() {
        let request = DiagnosisRequest {
            seed: 11,
            avoid_state_keys: vec!["anxiety".into()],
            preferred_state_key: Some("anxiety".into()),
        };
        let d = engine().diagnosis_universal(&request).unwrap();
        assert_eq!(d.state_key.as_deref(), Some("anxiety"));
    }

    #[test]
    fn deficient_qualities_are_opposites() {
        let request = DiagnosisRequest {
            preferred_state_key: Some("anger".into()),
            ..Default::default()
        };
        let d = engine().diagnosis_universal(&request).unwrap();
        assert_eq!(d.qualities_excess, vec![Quality::Hot, Quality::Sharp, Quality::Mobile]);
        assert_eq!(d.qualities_deficient, vec![Quality::Cold, Quality::Slow, Quality::Stable]);
        assert_eq!(d.gunas, GunaWeights { sattva: 0.2, rajas: 0.6, tamas: 0.2 });
    }

    #[test]
    fn personal_mode_filters_by_archetype_guna() {
        // "Ana" rules 7 -> mystic -> sattva
        let profile = BirthProfile {
            full_name: Some("Ana".into()),
            ..Default::default()
        };
        let engine = engine();
        for seed in 0..6 {
            let request = DiagnosisRequest::with_seed(seed);
            let d = engine.diagnosis_personal(&profile, &request).unwrap().diagnosis;
            let key = d.state_key.clone().unwrap();
            assert_eq!(catalog::find_state(&key).unwrap().guna, Guna::Sattva);
            assert_eq!(d.mode, Mode::Personal);
            assert_eq!(d.gunas.leading(), Guna::Sattva);
            assert!(d.dosha.is_none());
        }
    }

    #[test]
    fn personal_avoiding_everything_widens_to_archetype_pool() {
        let profile = BirthProfile {
            full_name: Some("Ana".into()),
            ..Default::default()
        };
        let engine = engine();
        for seed in 0..6 {
            let avoided = DiagnosisRequest {
                seed,
                avoid_state_keys: all_states(),
                ..Default::default()
            };
            let d = engine.diagnosis_personal(&profile, &avoided).unwrap().diagnosis;
            let key = d.state_key.clone().unwrap();
            assert_eq!(catalog::find_state(&key).unwrap().guna, Guna::Sattva);

            let open = engine
                .diagnosis_personal(&profile, &DiagnosisRequest::with_seed(seed))
                .unwrap()
                .diagnosis;
            assert_eq!(d.state_key, open.state_key);
        }
    }

    #[test]
    fn personal_preferred_key_bypasses_guna_filter() {
        let profile = BirthProfile {
            full_name: Some("Ana".into()),
            ..Default::default()
        };
        let request = DiagnosisRequest {
            seed: 2,
            preferred_state_key: Some("anger".into()),
            ..Default::default()
        };
        let d = engine().diagnosis_personal(&profile, &request).unwrap().diagnosis;
        assert_eq!(d.state_key.as_deref(), Some("anger"));
        // weights still follow the map
        assert_eq!(d.gunas.leading(), Guna::Sattva);
    }

    #[test]
    fn personal_dated_profile_carries_lunar_dosha() {
        let profile = BirthProfile {
            birth_date: Some("1990-05-17".into()),
            ..Default::default()
        };
        let personal = engine()
            .diagnosis_personal(&profile, &DiagnosisRequest::with_seed(1))
            .unwrap();
        let sign = personal.map.lunar_sign().unwrap();
        assert_eq!(personal.diagnosis.dosha, Some(sign.dosha()));
        assert_eq!(personal.diagnosis.element, Some(sign.element()));
    }

    #[test]
    fn remedy_lookup_by_key_then_klesha() {
        let engine = engine();
        let d = engine
            .diagnosis_universal(&DiagnosisRequest {
                preferred_state_key: Some("guilt".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(engine.get_remedy_for_diagnosis(&d, 9).unwrap().state, "guilt");

        let mut orphan = d.clone();
        orphan.state_key = Some("nostalgia".into());
        let entry = engine.get_remedy_for_diagnosis(&orphan, 4).unwrap();
        assert_eq!(entry.klesha, Klesha::Asmita);
        assert_eq!(
            engine.get_remedy_for_diagnosis(&orphan, 4).unwrap().state,
            entry.state
        );

        orphan.klesha = None;
        orphan.state_key = None;
        assert!(engine.get_remedy_for_diagnosis(&orphan, 4).is_ok());
    }

    #[test]
    fn empty_matrix_is_the_only_error() {
        let engine = DiagnosisEngine::with_matrix(
            SymbolicMapBuilder::new(EphemerisResolver::new(
                vec![Box::new(MeanMotionProvider)],
                ZodiacMode::Tropical,
            )),
            &[],
        );
        let err = engine.diagnosis_universal(&DiagnosisRequest::default()).unwrap_err();
        assert_eq!(err, CatalogError::Empty("remedy matrix"));
    }
}
