//! Ayurveda Action Selector.
//!
//! Turns excess-quality tags into practice and food phrases. The dosha-aware
//! variants move the dosha's priority qualities to the front, strongest first
//! (stable sort), then collect distinct phrases up to the suggestion cap.
//! Practices join with `". "`, foods with `"; "`.

mod calendar;
pub mod tables;

pub use calendar::{get_hour_period_from_date, get_season_for_hemisphere, get_season_from_date};

use crate::config::{MAX_SUGGESTIONS, MIN_SUGGESTIONS};
use crate::shared::{tag_enum, Dosha, Quality};
use serde::Serialize;
use tables::PLACEHOLDER;

tag_enum! {
    Season {
        Winter => "winter",
        Spring => "spring",
        Summer => "summer",
        Autumn => "autumn",
    }
}

tag_enum! {
    /// Clock buckets: morning 05–10, midday 11–14, afternoon 15–17, evening 18–21, night 22–04.
    HourPeriod {
        Morning => "morning",
        Midday => "midday",
        Afternoon => "afternoon",
        Evening => "evening",
        Night => "night",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BasicActions {
    pub practice: String,
    pub food: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Actions {
    /// Practices joined with `". "`.
    pub practice: String,
    /// Foods joined with `"; "`.
    pub food: String,
    #[serde(skip)]
    pub practices: Vec<&'static str>,
    #[serde(skip)]
    pub foods: Vec<&'static str>,
}

/// Inputs for [`get_actions_extended`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub dosha: Option<Dosha>,
    pub season: Option<Season>,
    pub hour: Option<HourPeriod>,
    pub max_suggestions: u8,
    /// Let the season override table reorder priorities.
    pub seasonal_priority: bool,
}

impl Default for ActionContext {
    fn default() -> Self {
        Self {
            dosha: None,
            season: None,
            hour: None,
            max_suggestions: 2,
            seasonal_priority: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedActions {
    #[serde(flatten)]
    pub actions: Actions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub avoid: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine: Option<&'static str>,
}

fn defined(phrase: &'static str) -> Option<&'static str> {
    (phrase != PLACEHOLDER && !phrase.trim().is_empty()).then_some(phrase)
}

/// First defined practice and first defined food, scanning in input order.
pub fn get_actions_for_qualities(qualities: &[Quality]) -> BasicActions {
    let first = |lookup: fn(Quality) -> &'static str| {
        qualities
            .iter()
            .find_map(|q| defined(lookup(*q)))
            .unwrap_or_default()
            .to_string()
    };
    BasicActions {
        practice: first(tables::practice_for),
        food: first(tables::food_for),
    }
}

/// Dosha-prioritized, capped practice and food suggestions.
pub fn get_actions_for_qualities_with_dosha(
    qualities: &[Quality],
    dosha: Option<Dosha>,
    max_suggestions: u8,
) -> Actions {
    let priority = dosha.map(tables::dosha_priority).unwrap_or_default();
    collect_actions(&prioritize(qualities, priority), clamp_cap(max_suggestions))
}

/// Dosha, season and hour aware suggestions with avoid list, sleep and routine.
pub fn get_actions_extended(qualities: &[Quality], ctx: &ActionContext) -> ExtendedActions {
    let cap = clamp_cap(ctx.max_suggestions);

    let mut priority: Vec<Quality> = Vec::new();
    if ctx.seasonal_priority {
        if let Some(seasonal) = ctx.season.and_then(tables::season_override) {
            priority.extend_from_slice(tables::dosha_priority(seasonal));
        }
    }
    if let Some(dosha) = ctx.dosha {
        for q in tables::dosha_priority(dosha) {
            if !priority.contains(q) {
                priority.push(*q);
            }
        }
    }

    let ordered = prioritize(qualities, &priority);
    let actions = collect_actions(&ordered, cap);
    let avoid = distinct(ordered.iter().map(|q| tables::avoid_for(*q)), cap);

    let sleep = ctx
        .dosha
        .map(tables::sleep_for_dosha)
        .or_else(|| ctx.season.map(tables::sleep_for_season));
    let routine = ctx.hour.map(tables::routine_for);

    tracing::trace!(
        target: "prana::compose",
        dosha = ctx.dosha.map(|d| d.as_str()),
        season = ctx.season.map(|s| s.as_str()),
        cap,
        "actions selected"
    );

    ExtendedActions {
        actions,
        avoid,
        sleep,
        routine,
    }
}

/// Suggestion cap clamped to `MIN_SUGGESTIONS..=MAX_SUGGESTIONS`.
pub fn clamp_cap(max_suggestions: u8) -> usize {
    max_suggestions.clamp(MIN_SUGGESTIONS, MAX_SUGGESTIONS) as usize
}

/// Qualities ranked by their position in `priority`; the rest follow. Stable.
fn prioritize(qualities: &[Quality], priority: &[Quality]) -> Vec<Quality> {
    let mut ordered = qualities.to_vec();
    ordered.sort_by_key(|q| priority.iter().position(|p| p == q).unwrap_or(usize::MAX));
    ordered
}

fn collect_actions(ordered: &[Quality], cap: usize) -> Actions {
    let mut practices: Vec<&'static str> = Vec::with_capacity(cap);
    let mut foods: Vec<&'static str> = Vec::with_capacity(cap);
    for q in ordered {
        if practices.len() >= cap && foods.len() >= cap {
            break;
        }
        if practices.len() < cap {
            push_distinct(&mut practices, tables::practice_for(*q));
        }
        if foods.len() < cap {
            push_distinct(&mut foods, tables::food_for(*q));
        }
    }
    Actions {
        practice: practices.join(". "),
        food: foods.join("; "),
        practices,
        foods,
    }
}

fn push_distinct(into: &mut Vec<&'static str>, phrase: &'static str) {
    if let Some(p) = defined(phrase) {
        if !into.contains(&p) {
            into.push(p);
        }
    }
}

fn distinct(phrases: impl Iterator<Item = &'static str>, cap: usize) -> Vec<&'static str> {
    let mut out = Vec::with_capacity(cap);
    for phrase in phrases {
        if out.len() >= cap {
            break;
        }
        push_distinct(&mut out, phrase);
    }
    out
}
