//! Intent Parser & State Scorer.
//!
//! Free text → subject / verb class / theme / question type / emotion labels and a
//! ranked list of candidate states. Purely dictionary based; absence of a match is
//! `None`, never an error.

mod lexicon;
mod normalize;
mod scorer;

pub use normalize::{expand_abbreviations, normalize, strip_diacritics};
pub use scorer::{pick_best_state, pick_best_state_with, StateMatch};

use crate::shared::tag_enum;
use normalize::{has_phrase, has_stem, scan_form};
use serde::Serialize;

tag_enum! {
    /// Who the text is about.
    Subject {
        #[serde(rename = "self")]
        SelfRef => "self",
        Other => "other",
        Relational => "relational",
    }
}

tag_enum! {
    /// Coarse verb class of the request.
    VerbClass {
        Feel => "feel",
        Seek => "seek",
        Fear => "fear",
        Conflict => "conflict",
        Reflect => "reflect",
    }
}

tag_enum! {
    /// Life area the text is about.
    Theme {
        General => "general",
        Love => "love",
        Career => "career",
        Year => "year",
        Health => "health",
        Spirituality => "spirituality",
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::General
    }
}

tag_enum! {
    QuestionType {
        What => "what",
        How => "how",
        Why => "why",
        When => "when",
        Where => "where",
        Who => "who",
    }
}

/// One emotion-dictionary entry: a keyword set implying one state, or several.
#[derive(Debug, Clone, Copy)]
pub enum EmotionRule {
    Flat {
        label: &'static str,
        keywords: &'static [&'static str],
        state: &'static str,
    },
    Multi {
        label: &'static str,
        keywords: &'static [&'static str],
        state_keys: &'static [&'static str],
    },
}

impl EmotionRule {
    pub fn label(&self) -> &'static str {
        match self {
            EmotionRule::Flat { label, .. } | EmotionRule::Multi { label, .. } => *label,
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            EmotionRule::Flat { keywords, .. } | EmotionRule::Multi { keywords, .. } => *keywords,
        }
    }

    pub fn states(&self) -> &[&'static str] {
        match self {
            EmotionRule::Flat { state, .. } => std::slice::from_ref(state),
            EmotionRule::Multi { state_keys, .. } => state_keys,
        }
    }
}

/// A candidate state with its keyword score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateCandidate {
    pub state_key: String,
    pub score: u32,
    pub matched_keywords: Vec<String>,
}

/// Result of parsing one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIntent {
    pub normalized: String,
    pub subject: Subject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb_class: Option<VerbClass>,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    pub emotions: Vec<String>,
    /// Ranked by score, ties in discovery order.
    pub candidates: Vec<StateCandidate>,
}

/// Caller overrides applied after parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentOverrides {
    pub theme: Option<Theme>,
    pub question_type: Option<QuestionType>,
}

impl ParsedIntent {
    pub fn with_overrides(mut self, overrides: &IntentOverrides) -> Self {
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(q) = overrides.question_type {
            self.question_type = Some(q);
        }
        self
    }
}

/// Parse free text. Blank input yields `None`.
pub fn parse_intent(text: &str) -> Option<ParsedIntent> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }
    let scan = scan_form(&normalized);
    let (emotions, candidates) = score_emotions(&scan);

    let intent = ParsedIntent {
        subject: detect_subject(&scan),
        verb_class: detect_verb_class(&scan),
        theme: detect_theme(&scan),
        question_type: detect_question_type(&scan),
        emotions,
        candidates,
        normalized,
    };
    tracing::debug!(
        target: "prana::intent",
        subject = intent.subject.as_str(),
        theme = intent.theme.as_str(),
        candidates = intent.candidates.len(),
        "intent parsed"
    );
    Some(intent)
}

/// Parse, apply overrides, pick the best known state.
pub fn classify_text(text: &str, overrides: &IntentOverrides) -> Option<StateMatch> {
    let intent = parse_intent(text)?.with_overrides(overrides);
    pick_best_state(&intent)
}

fn detect_subject(scan: &str) -> Subject {
    lexicon::SUBJECT_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| has_phrase(scan, m)))
        .map(|(subject, _)| *subject)
        .unwrap_or(Subject::SelfRef)
}

fn detect_verb_class(scan: &str) -> Option<VerbClass> {
    lexicon::VERB_PHRASES
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| has_phrase(scan, p)))
        .map(|(class, _)| *class)
}

fn detect_theme(scan: &str) -> Theme {
    let mut best: Option<(usize, Theme)> = None;
    for (theme, keywords) in lexicon::THEME_KEYWORDS {
        for kw in keywords.iter().filter(|kw| has_phrase(scan, kw)) {
            if best.map_or(true, |(len, _)| kw.len() > len) {
                best = Some((kw.len(), *theme));
            }
        }
    }
    best.map(|(_, theme)| theme).unwrap_or_default()
}

fn detect_question_type(scan: &str) -> Option<QuestionType> {
    lexicon::QUESTION_PHRASES
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| has_phrase(scan, p)))
        .map(|(q, _)| *q)
}

/// Emotion labels and merged, ranked candidates.
fn score_emotions(scan: &str) -> (Vec<String>, Vec<StateCandidate>) {
    let mut labels: Vec<String> = Vec::new();
    let mut candidates: Vec<StateCandidate> = Vec::new();

    for rule in lexicon::EMOTION_RULES {
        let matched: Vec<&str> = rule
            .keywords()
            .iter()
            .copied()
            .filter(|kw| has_stem(scan, kw))
            .collect();
        if matched.is_empty() {
            continue;
        }
        if !labels.iter().any(|l| l == rule.label()) {
            labels.push(rule.label().to_string());
        }
        let score = matched.len() as u32;
        for state in rule.states() {
            let candidate = candidate_mut(&mut candidates, state);
            // Same state from several entries: keep the max score, union the keywords.
            candidate.score = candidate.score.max(score);
            for kw in &matched {
                if !candidate.matched_keywords.iter().any(|k| k == kw) {
                    candidate.matched_keywords.push(kw.to_string());
                }
            }
        }
    }

    for (phrase, state) in lexicon::COMPOUND_BONUSES {
        if has_stem(scan, phrase) {
            let candidate = candidate_mut(&mut candidates, state);
            candidate.score += 1;
            if !candidate.matched_keywords.iter().any(|k| k == phrase) {
                candidate.matched_keywords.push(phrase.to_string());
            }
        }
    }

    // stable: ties keep discovery order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    (labels, candidates)
}

fn candidate_mut<'a>(candidates: &'a mut Vec<StateCandidate>, state: &str) -> &'a mut StateCandidate {
    let idx = match candidates.iter().position(|c| c.state_key == state) {
        Some(idx) => idx,
        None => {
            candidates.push(StateCandidate {
                state_key: state.to_string(),
                score: 0,
                matched_keywords: Vec::new(),
            });
            candidates.len() - 1
        }
    };
    &mut candidates[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_absent() {
        assert!(parse_intent("").is_none());
        assert!(parse_intent("   kkk  ").is_none());
    }

    #[test]
    fn relational_subject_beats_self() {
        let i = parse_intent("eu acho que meu namorado esta distante").unwrap();
        assert_eq!(i.subject, Subject::Relational);
        let i = parse_intent("minha mae nao me escuta").unwrap();
        assert_eq!(i.subject, Subject::Other);
        let i = parse_intent("dormi mal").unwrap();
        assert_eq!(i.subject, Subject::SelfRef);
    }

    #[test]
    fn verb_class_scan_order() {
        let i = parse_intent("estou com medo de falhar").unwrap();
        assert_eq!(i.verb_class, Some(VerbClass::Fear));
        let i = parse_intent("briguei com meu chefe").unwrap();
        assert_eq!(i.verb_class, Some(VerbClass::Conflict));
        let i = parse_intent("quero paz").unwrap();
        assert_eq!(i.verb_class, Some(VerbClass::Seek));
        assert_eq!(parse_intent("paz").unwrap().verb_class, None);
    }

    #[test]
    fn longest_theme_keyword_wins() {
        // "relacionamento" (love) is longer than "trabalho" (career)
        let i = parse_intent("o trabalho esta afetando meu relacionamento").unwrap();
        assert_eq!(i.theme, Theme::Love);
        let i = parse_intent("nada de especial").unwrap();
        assert_eq!(i.theme, Theme::General);
    }

    #[test]
    fn question_type_detection() {
        let i = parse_intent("Por que eu sinto isso?").unwrap();
        assert_eq!(i.question_type, Some(QuestionType::Why));
        let i = parse_intent("pq tudo da errado").unwrap();
        assert_eq!(i.question_type, Some(QuestionType::Why));
        let i = parse_intent("como lidar com isso").unwrap();
        assert_eq!(i.question_type, Some(QuestionType::How));
    }

    #[test]
    fn compound_phrase_adds_bonus() {
        let i = parse_intent("tenho medo de perder meu emprego").unwrap();
        let top = &i.candidates[0];
        assert_eq!(top.state_key, "fear_of_loss");
        // max(1 from "medo", 1 from "medo de perder") + 1 compound
        assert_eq!(top.score, 2);
        assert!(top.matched_keywords.iter().any(|k| k == "medo"));
        assert!(top.matched_keywords.iter().any(|k| k == "medo de perder"));
    }

    #[test]
    fn merged_state_takes_max_not_sum() {
        // "exaust" + "sobrecarreg" (burnout rule, 2) and "cansad" (fatigue rule, 1)
        let i = parse_intent("estou exausta, sobrecarregada e cansada").unwrap();
        let fatigue = i.candidates.iter().find(|c| c.state_key == "fatigue").unwrap();
        assert_eq!(fatigue.score, 2);
        assert_eq!(fatigue.matched_keywords.len(), 3);
        assert_eq!(i.emotions, vec!["burnout".to_string(), "fatigue".to_string()]);
    }

    #[test]
    fn overrides_replace_theme_and_question() {
        let i = parse_intent("estou ansioso")
            .unwrap()
            .with_overrides(&IntentOverrides {
                theme: Some(Theme::Career),
                question_type: Some(QuestionType::What),
            });
        assert_eq!(i.theme, Theme::Career);
        assert_eq!(i.question_type, Some(QuestionType::What));
    }

    #[test]
    fn subject_serializes_as_self() {
        assert_eq!(serde_json::to_string(&Subject::SelfRef).unwrap(), "\"self\"");
    }
}
