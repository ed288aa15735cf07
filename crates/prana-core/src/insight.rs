//! Narrative insight for personal packages, from a fixed rule pass over the map.

use crate::symbolic_map::SymbolicMap;

/// One sentence per available map feature; `None` when the map carries nothing.
pub fn build_insight(map: &SymbolicMap) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(sign) = map.lunar_sign() {
        parts.push(format!("Moon in {}: {}.", title_case(sign.as_str()), sign.lunar_hint()));
    }
    if let Some(station) = map.core.lunar_station_name() {
        parts.push(format!(
            "The lunar station {} colors the emotional rhythm of this moment.",
            title_case(station)
        ));
    }
    if let Some(n) = map.numerology.as_ref() {
        let master = if n.is_master { "master " } else { "" };
        parts.push(format!(
            "Ruling {master}number {} brings {}.",
            n.ruling_number,
            join_traits(n.traits)
        ));
    }
    if let Some(c) = map.constitution.as_ref() {
        match c.secondary {
            Some(secondary) => parts.push(format!(
                "The sky leans {} with {} in support; favor what balances it.",
                c.primary, secondary
            )),
            None => parts.push(format!(
                "The sky leans {}; favor what balances it.",
                c.primary
            )),
        }
    }

    (!parts.is_empty()).then(|| parts.join(" "))
}

fn title_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_traits(traits: &[&str]) -> String {
    match traits {
        [] => "its own rhythm".to_string(),
        [one] => one.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
