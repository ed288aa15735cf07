//! State Scorer: pick one known remedy state out of a parsed intent.
//!
//! Unknown candidate keys are filtered first. A lone survivor gets
//! `min(1, 0.3 + score·0.1)`; several survivors get fixed axis bonuses and
//! `min(1, 0.2 + best/(max_raw + 2)·0.8)`, where `max_raw` is the highest
//! pre-bonus score among survivors.

use super::{ParsedIntent, Subject, Theme, VerbClass};
use crate::catalog;
use serde::Serialize;

const FEAR_STATES: &[&str] = &[
    "fear_of_loss",
    "anxiety",
    "insecurity",
    "rejection_fear",
    "self_doubt",
    "hopelessness",
];

const LOVE_STATES: &[&str] = &[
    "jealousy",
    "attachment",
    "loneliness",
    "rejection_fear",
    "resentment",
    "grief",
    "fear_of_loss",
];

/// Fear verb and love theme together.
const FEAR_LOVE_STATES: &[&str] = &["fear_of_loss", "rejection_fear", "jealousy"];

const CAREER_STATES: &[&str] = &[
    "burnout",
    "procrastination",
    "perfectionism",
    "self_doubt",
    "frustration",
    "indecision",
    "impatience",
    "envy",
    "control",
];

const HEALTH_STATES: &[&str] = &["fatigue", "burnout", "restlessness", "anxiety", "craving"];

const OTHER_STATES: &[&str] = &[
    "resentment",
    "anger",
    "jealousy",
    "envy",
    "control",
    "frustration",
    "guilt",
];

/// Best state for a text, with confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateMatch {
    pub state_key: String,
    /// Post-bonus score of the winner.
    pub score: u32,
    pub confidence: f64,
}

/// Pick against the remedy matrix.
pub fn pick_best_state(intent: &ParsedIntent) -> Option<StateMatch> {
    pick_best_state_with(intent, |key| catalog::find_state(key).is_some())
}

/// Pick against an arbitrary "is this a known state" predicate.
pub fn pick_best_state_with(
    intent: &ParsedIntent,
    is_known: impl Fn(&str) -> bool,
) -> Option<StateMatch> {
    let survivors: Vec<_> = intent
        .candidates
        .iter()
        .filter(|c| is_known(&c.state_key))
        .collect();

    match survivors.as_slice() {
        [] => None,
        [only] => Some(StateMatch {
            state_key: only.state_key.clone(),
            score: only.score,
            confidence: (0.3 + only.score as f64 * 0.1).min(1.0),
        }),
        _ => {
            let max_raw = survivors.iter().map(|c| c.score).max().unwrap_or(0);
            let mut best: Option<(u32, &str)> = None;
            for c in &survivors {
                let total = c.score + axis_bonus(intent, &c.state_key);
                // strict > keeps the earlier candidate on ties
                if best.map_or(true, |(score, _)| total > score) {
                    best = Some((total, c.state_key.as_str()));
                }
            }
            let (score, key) = best?;
            let confidence = (0.2 + (score as f64 / (max_raw as f64 + 2.0)) * 0.8).min(1.0);
            tracing::debug!(target: "prana::intent", state = key, score, confidence, "best state picked");
            Some(StateMatch {
                state_key: key.to_string(),
                score,
                confidence,
            })
        }
    }
}

fn axis_bonus(intent: &ParsedIntent, state: &str) -> u32 {
    let in_set = |set: &[&str]| set.contains(&state);
    let fear_verb = intent.verb_class == Some(VerbClass::Fear);
    let love_theme = intent.theme == Theme::Love;

    let mut bonus = 0;
    if fear_verb && in_set(FEAR_STATES) {
        bonus += 2;
    }
    if love_theme && in_set(LOVE_STATES) {
        bonus += 1;
    }
    if fear_verb && love_theme && in_set(FEAR_LOVE_STATES) {
        bonus += 2;
    }
    if intent.theme == Theme::Career && in_set(CAREER_STATES) {
        bonus += 1;
    }
    if intent.theme == Theme::Health && in_set(HEALTH_STATES) {
        bonus += 1;
    }
    if intent.subject == Subject::Other && in_set(OTHER_STATES) {
        bonus += 1;
    }
    bonus
}
