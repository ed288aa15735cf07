//! Integration test: Diagnosis Engine over the built-in matrix.
//!
//! Verifies that:
//! 1. Universal selection is `matrix[seed % len]` with 0.6 / 0.2 / 0.2 guna weights.
//! 2. Excess and deficient qualities are opposite pairs.
//! 3. Personal mode with a birth date fills dosha and element from the lunar sign.
//! 4. Remedy lookup honors the exact state key and falls back to the klesha pool.

use prana_core::ephemeris::{EphemerisProvider, MeanMotionProvider};
use prana_core::{
    remedy_matrix, BirthProfile, ConsciousDiagnosis, DiagnosisEngine, DiagnosisRequest,
    EngineConfig, EphemerisResolver, Guna, GunaWeights, Klesha, Mode, Quality, SymbolicMapBuilder,
    ZodiacMode,
};

fn engine() -> DiagnosisEngine {
    let providers: Vec<Box<dyn EphemerisProvider>> = vec![Box::new(MeanMotionProvider)];
    let resolver = EphemerisResolver::new(providers, ZodiacMode::Tropical);
    DiagnosisEngine::new(SymbolicMapBuilder::new(resolver))
}

#[test]
fn universal_selection_walks_the_matrix() {
    let engine = engine();
    let matrix = remedy_matrix();
    for seed in [0u64, 1, 32, 33, 100, u64::MAX] {
        let d = engine.diagnosis_universal(&DiagnosisRequest::with_seed(seed)).unwrap();
        let expected = &matrix[(seed % matrix.len() as u64) as usize];
        assert_eq!(d.mode, Mode::Universal);
        assert_eq!(d.state_key.as_deref(), Some(expected.state), "seed {seed}");
        assert_eq!(d.klesha, Some(expected.klesha));
        assert_eq!(d.gunas, GunaWeights::dominant(expected.guna));
        assert!(d.dosha.is_none());
        assert!(d.element.is_none());
    }
}

#[test]
fn guna_weights_sum_to_one() {
    for guna in Guna::ALL {
        let w = GunaWeights::dominant(*guna);
        assert!((w.sattva + w.rajas + w.tamas - 1.0).abs() < 1e-9);
        assert_eq!(w.leading(), *guna);
    }
}

#[test]
fn deficient_qualities_mirror_excess() {
    let engine = engine();
    for seed in 0..remedy_matrix().len() as u64 {
        let d = engine.diagnosis_universal(&DiagnosisRequest::with_seed(seed)).unwrap();
        assert_eq!(d.qualities_excess.len(), d.qualities_deficient.len());
        for (excess, deficient) in d.qualities_excess.iter().zip(&d.qualities_deficient) {
            assert_eq!(excess.opposite(), *deficient);
        }
    }
}

#[test]
fn personal_mode_carries_dosha_and_element() {
    let engine = engine();
    let profile = BirthProfile {
        birth_date: Some("1985-11-03".to_string()),
        ..BirthProfile::default()
    };
    let personal = engine
        .diagnosis_personal(&profile, &DiagnosisRequest::with_seed(4))
        .unwrap();
    let sign = personal.map.lunar_sign().expect("birth date yields a lunar sign");
    assert_eq!(personal.diagnosis.mode, Mode::Personal);
    assert_eq!(personal.diagnosis.dosha, Some(sign.dosha()));
    assert_eq!(personal.diagnosis.element, Some(sign.element()));

    // the archetype guna filters the pool
    let archetype = personal.map.primary_archetype.expect("sun sign gives an archetype");
    let entry = remedy_matrix()
        .iter()
        .find(|e| Some(e.state) == personal.diagnosis.state_key.as_deref())
        .unwrap();
    assert_eq!(entry.guna, archetype.guna());
    assert_eq!(personal.diagnosis.gunas.leading(), archetype.guna());
}

#[test]
fn personal_mode_is_deterministic() {
    let engine = engine();
    let profile = BirthProfile {
        full_name: Some("Maria".to_string()),
        birth_date: Some("1970-02-28".to_string()),
        birth_time: Some("23:15".to_string()),
        birth_place: Some("São Paulo".to_string()),
    };
    let req = DiagnosisRequest::with_seed(77);
    let a = engine.diagnosis_personal(&profile, &req).unwrap();
    let b = engine.diagnosis_personal(&profile, &req).unwrap();
    assert_eq!(a.diagnosis, b.diagnosis);
    assert_eq!(a.map, b.map);
}

#[test]
fn default_config_engine_builds() {
    let engine = DiagnosisEngine::from_config(&EngineConfig::default());
    let d = engine.diagnosis_universal(&DiagnosisRequest::with_seed(2)).unwrap();
    assert_eq!(d.state_key.as_deref(), Some(remedy_matrix()[2].state));
}

#[test]
fn remedy_lookup_prefers_exact_state() {
    let engine = engine();
    let d = engine.diagnosis_universal(&DiagnosisRequest::with_seed(8)).unwrap();
    let remedy = engine.get_remedy_for_diagnosis(&d, 999).unwrap();
    assert_eq!(Some(remedy.state), d.state_key.as_deref());
}

#[test]
fn remedy_lookup_falls_back_to_klesha_pool() {
    let engine = engine();
    let diagnosis = ConsciousDiagnosis {
        mode: Mode::Universal,
        klesha: Some(Klesha::Asmita),
        gunas: GunaWeights::dominant(Guna::Tamas),
        qualities_excess: vec![Quality::Heavy],
        qualities_deficient: vec![Quality::Light],
        dosha: None,
        element: None,
        state_key: Some("unknown".to_string()),
    };
    let pool: Vec<_> = remedy_matrix()
        .iter()
        .filter(|e| e.klesha == Klesha::Asmita)
        .collect();
    assert!(!pool.is_empty());
    for seed in 0..pool.len() as u64 * 2 {
        let remedy = engine.get_remedy_for_diagnosis(&diagnosis, seed).unwrap();
        assert_eq!(remedy.state, pool[(seed % pool.len() as u64) as usize].state);
    }
}

#[test]
fn remedy_lookup_without_klesha_uses_whole_matrix() {
    let engine = engine();
    let diagnosis = ConsciousDiagnosis {
        mode: Mode::Universal,
        klesha: None,
        gunas: GunaWeights::dominant(Guna::Sattva),
        qualities_excess: Vec::new(),
        qualities_deficient: Vec::new(),
        dosha: None,
        element: None,
        state_key: None,
    };
    let remedy = engine.get_remedy_for_diagnosis(&diagnosis, 34).unwrap();
    let matrix = remedy_matrix();
    assert_eq!(remedy.state, matrix[34 % matrix.len()].state);
}
