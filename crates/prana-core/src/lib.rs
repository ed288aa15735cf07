//! prana-core: offline, deterministic diagnosis → remedy engine.
//!
//! Pipeline: ephemeris resolver → symbolic map → diagnosis → {sacred text, ayurveda
//! actions} → composer. The intent parser runs beside it and feeds the composer a
//! preferred state. Every selection is `seed % pool` over static catalogs; the only
//! shared mutable state is the one-time ephemeris table cache.

mod composer;
mod config;
mod insight;
mod shared;
pub mod ayurveda;
pub mod catalog;
pub mod diagnosis;
pub mod ephemeris;
pub mod intent;
pub mod numerology;
pub mod sacred_text;
pub mod symbolic_map;
pub mod zodiac;

// Shared tags and input
pub use shared::{BirthProfile, Dosha, Element, Guna, Klesha, Mode, Quality};

// Configuration
pub use config::{EngineConfig, Hemisphere, ZodiacMode, MAX_SUGGESTIONS, MIN_SUGGESTIONS};

// Ephemeris (warm-up belongs to the composition root)
pub use ephemeris::{
    is_warm, warm_up, AstronomicalCore, EphemerisError, EphemerisResolver, Planet, ProviderTag,
};

// Catalogs
pub use catalog::{
    find_state, remedy_matrix, sacred_catalog, validate_catalog, CatalogError, CatalogReport,
    Corpus, RemedyEntry, SacredEntry, TextRef,
};

// Pipeline stages
pub use ayurveda::{
    get_actions_extended, get_actions_for_qualities, get_actions_for_qualities_with_dosha,
    get_hour_period_from_date, get_season_for_hemisphere, get_season_from_date, ActionContext,
    Actions, BasicActions, ExtendedActions, HourPeriod, Season,
};
pub use diagnosis::{
    ConsciousDiagnosis, DiagnosisEngine, DiagnosisError, DiagnosisRequest, GunaWeights,
    PersonalDiagnosis,
};
pub use intent::{
    classify_text, normalize, parse_intent, pick_best_state, IntentOverrides, ParsedIntent,
    QuestionType, StateMatch, Subject, Theme, VerbClass,
};
pub use symbolic_map::{SymbolicMap, SymbolicMapBuilder};

// Composition root
pub use composer::{
    split_practice, ComposeError, ComposeOptions, Composer, DiagnosisSummary, Food, PackageMeta,
    Practice, Question, RemedyPackage, SacredSummary,
};
pub use insight::build_insight;
