//! Composer: one call from (profile, options) to a remedy package.
//!
//! Mode follows profile presence. A preferred state key, or else a free-text
//! classification, steers the diagnosis. The sacred text is scored against the
//! diagnosis, actions are picked for its excess qualities at the current season
//! and hour, and personal packages may carry a narrative insight.

use crate::ayurveda::{self, ActionContext};
use crate::catalog::{CatalogError, Corpus};
use crate::config::EngineConfig;
use crate::diagnosis::{DiagnosisEngine, DiagnosisError, DiagnosisRequest};
use crate::insight;
use crate::intent::{self, IntentOverrides, QuestionType, StateMatch, Theme};
use crate::sacred_text;
use crate::shared::{BirthProfile, Guna, Klesha, Mode, Quality};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    Diagnosis(#[from] DiagnosisError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Per-call options. Avoid lists are soft hints; nothing is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    pub seed: u64,
    pub avoid_sacred_ids: Vec<String>,
    pub avoid_state_keys: Vec<String>,
    pub preferred_state_key: Option<String>,
    pub theme: Option<Theme>,
    pub question_type: Option<QuestionType>,
    /// Replaces the matrix question when non-blank.
    pub question_text: Option<String>,
    /// Classified when no preferred key is given.
    pub free_text: Option<String>,
    /// Instant for season and hour; the local wall clock when absent.
    pub now: Option<NaiveDateTime>,
    pub enrich: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            avoid_sacred_ids: Vec::new(),
            avoid_state_keys: Vec::new(),
            preferred_state_key: None,
            theme: None,
            question_type: None,
            question_text: None,
            free_text: None,
            now: None,
            enrich: true,
        }
    }
}

impl ComposeOptions {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

/// `samkhya_guna` is the diagnosis' leading guna weight. In personal mode that is
/// the archetype's guna, which can differ from the chosen state's own guna when
/// a preferred state outside the archetype pool was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisSummary {
    pub klesha: Option<Klesha>,
    pub samkhya_guna: Guna,
    pub qualities: Vec<Quality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SacredSummary {
    pub id: String,
    pub corpus: Corpus,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Practice {
    pub title: String,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Food {
    #[serde(rename = "do")]
    pub recommended: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_sacred_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_state_keys: Option<Vec<String>>,
    /// Matrix text reference for the state, `corpus.id`.
    pub matrix_reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedyPackage {
    pub mode: Mode,
    pub theme: Theme,
    pub state_key: String,
    pub diagnosis: DiagnosisSummary,
    pub sacred: SacredSummary,
    pub practice: Practice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<Food>,
    pub question: Question,
    pub meta: PackageMeta,
    pub sacred_text: String,
    /// Qualified `corpus.id`.
    pub sacred_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
}

pub struct Composer {
    config: EngineConfig,
    engine: DiagnosisEngine,
}

impl Composer {
    pub fn new(config: EngineConfig) -> Self {
        let engine = DiagnosisEngine::from_config(&config);
        Self::with_engine(config, engine)
    }

    pub fn with_engine(config: EngineConfig, engine: DiagnosisEngine) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn engine(&self) -> &DiagnosisEngine {
        &self.engine
    }

    pub fn compose(
        &self,
        profile: Option<&BirthProfile>,
        options: &ComposeOptions,
    ) -> Result<RemedyPackage, ComposeError> {
        let profile = profile.filter(|p| !p.is_blank());
        let overrides = IntentOverrides {
            theme: options.theme,
            question_type: options.question_type,
        };

        let parsed = match options.free_text.as_deref() {
            Some(text) if options.preferred_state_key.is_none() => {
                intent::parse_intent(text).map(|i| i.with_overrides(&overrides))
            }
            _ => None,
        };
        let classified: Option<StateMatch> = parsed.as_ref().and_then(intent::pick_best_state);
        let theme = options
            .theme
            .or(parsed.as_ref().map(|i| i.theme))
            .unwrap_or_default();

        let request = DiagnosisRequest {
            seed: options.seed,
            avoid_state_keys: options.avoid_state_keys.clone(),
            preferred_state_key: options
                .preferred_state_key
                .clone()
                .or_else(|| classified.as_ref().map(|m| m.state_key.clone())),
        };

        let (diagnosis, map) = match profile {
            Some(profile) => {
                let personal = self.engine.diagnosis_personal(profile, &request)?;
                (personal.diagnosis, Some(personal.map))
            }
            None => (self.engine.diagnosis_universal(&request)?, None),
        };
        let remedy = self.engine.get_remedy_for_diagnosis(&diagnosis, options.seed)?;

        let kleshas: Vec<Klesha> = diagnosis.klesha.into_iter().collect();
        let sacred = sacred_text::select(
            &kleshas,
            &diagnosis.qualities_excess,
            &options.avoid_sacred_ids,
            options.seed,
        )?;

        let now = options
            .now
            .unwrap_or_else(|| chrono::Local::now().naive_local());
        let actions = ayurveda::get_actions_extended(
            &diagnosis.qualities_excess,
            &ActionContext {
                dosha: diagnosis.dosha,
                season: Some(ayurveda::get_season_for_hemisphere(&now, self.config.hemisphere)),
                hour: Some(ayurveda::get_hour_period_from_date(&now)),
                max_suggestions: self.config.suggestion_cap(),
                seasonal_priority: self.config.seasonal_priority,
            },
        );

        let mut steps = split_practice(remedy.practice);
        for extra in &actions.actions.practices {
            push_unique(&mut steps, sentence_case(extra));
        }

        let mut recommended: Vec<String> = split_list(remedy.food);
        for extra in &actions.actions.foods {
            push_unique(&mut recommended, extra.to_string());
        }
        let food = (!recommended.is_empty()).then(|| Food {
            recommended,
            avoid: (!actions.avoid.is_empty())
                .then(|| actions.avoid.iter().map(|s| s.to_string()).collect()),
        });

        let question = options
            .question_text
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(remedy.question)
            .to_string();

        let insight = match map.as_ref() {
            Some(map) if self.config.enrichment && options.enrich => insight::build_insight(map),
            _ => None,
        };

        let confidence = classified
            .filter(|m| m.state_key == remedy.state)
            .map(|m| m.confidence);

        let package = RemedyPackage {
            mode: diagnosis.mode,
            theme,
            state_key: remedy.state.to_string(),
            diagnosis: DiagnosisSummary {
                klesha: diagnosis.klesha,
                samkhya_guna: diagnosis.gunas.leading(),
                qualities: diagnosis.qualities_excess.clone(),
                confidence,
            },
            sacred: SacredSummary {
                id: sacred.id.to_string(),
                corpus: sacred.corpus,
                text: sacred.text.to_string(),
            },
            practice: Practice {
                title: practice_title(remedy.state),
                steps,
                duration: remedy.minutes.map(|m| format!("{m} min")),
            },
            food,
            question: Question { text: question },
            meta: PackageMeta {
                used_sacred_ids: non_empty(&options.avoid_sacred_ids),
                used_state_keys: non_empty(&options.avoid_state_keys),
                matrix_reference: remedy.text_ref.qualified(),
            },
            sacred_text: sacred.text.to_string(),
            sacred_id: sacred.qualified_id(),
            sleep: actions.sleep.map(str::to_string),
            routine: actions.routine.map(str::to_string),
            insight,
        };

        tracing::info!(
            target: "prana::compose",
            mode = package.mode.as_str(),
            state = package.state_key.as_str(),
            sacred = package.sacred_id.as_str(),
            classified = confidence.is_some(),
            "package composed"
        );
        Ok(package)
    }
}

/// Best-effort split of a practice paragraph on `". "` and `";"`.
pub fn split_practice(practice: &str) -> Vec<String> {
    practice
        .split(". ")
        .flat_map(|s| s.split(';'))
        .map(|s| s.trim().trim_end_matches('.').trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_list(list: &str) -> Vec<String> {
    list.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_unique(into: &mut Vec<String>, item: String) {
    if !into.iter().any(|s| s.eq_ignore_ascii_case(&item)) {
        into.push(item);
    }
}

fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn practice_title(state: &str) -> String {
    format!("Practice for {}", state.replace('_', " "))
}

fn non_empty(list: &[String]) -> Option<Vec<String>> {
    (!list.is_empty()).then(|| list.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn practice_split_is_lossy_but_stable() {
        assert_eq!(
            split_practice("Sit down. Breathe in; breathe out. Rest."),
            vec!["Sit down", "Breathe in", "breathe out", "Rest"]
        );
        assert!(split_practice("  ").is_empty());
    }

    #[test]
    fn food_list_splits_on_semicolons() {
        assert_eq!(split_list("rice; dal ;; ghee"), vec!["rice", "dal", "ghee"]);
    }

    #[test]
    fn titles_and_case() {
        assert_eq!(practice_title("fear_of_loss"), "Practice for fear of loss");
        assert_eq!(sentence_case("take a walk"), "Take a walk");
    }

    #[test]
    fn composer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Composer>();
    }
}
