//! Fixed per-quality, per-dosha and per-period dictionaries.
//!
//! `PLACEHOLDER` marks "nothing defined" and is never surfaced.

use super::{HourPeriod, Season};
use crate::shared::{Dosha, Quality};

pub const PLACEHOLDER: &str = "—";

/// Antidote practice for an excess of the quality.
pub fn practice_for(quality: Quality) -> &'static str {
    match quality {
        Quality::Heavy => "take a brisk twenty-minute walk",
        Quality::Light => "lie on the floor and feel the weight of the body for five minutes",
        Quality::Slow => "do five rounds of energizing sun salutations",
        Quality::Sharp => "practice cooling breath through a curled tongue",
        Quality::Cold => "sit in the sun or by a warm source for ten minutes",
        Quality::Hot => "rinse the face and wrists with cool water",
        Quality::Oily => "dry-brush the skin before bathing",
        Quality::Dry => "massage the body with warm sesame oil",
        Quality::Smooth => "try a short invigorating stretch sequence",
        Quality::Rough => "take a slow warm bath",
        Quality::Dense => "do a short vigorous breathing practice",
        Quality::Liquid => PLACEHOLDER,
        Quality::Soft => PLACEHOLDER,
        Quality::Hard => "soften the jaw and shoulders with slow neck rolls",
        Quality::Stable => "change one routine today and notice the novelty",
        Quality::Mobile => "keep fixed times for meals and sleep",
        Quality::Subtle => PLACEHOLDER,
        Quality::Gross => "spend ten minutes in silent sitting",
        Quality::Clear => PLACEHOLDER,
        Quality::Cloudy => "open the windows and breathe fresh air for five minutes",
    }
}

/// Antidote food for an excess of the quality.
pub fn food_for(quality: Quality) -> &'static str {
    match quality {
        Quality::Heavy => "light warm soups",
        Quality::Light => "warm whole grains with ghee",
        Quality::Slow => "ginger and black pepper tea",
        Quality::Sharp => "sweet juicy fruits",
        Quality::Cold => "warm spiced meals",
        Quality::Hot => "cucumber and coconut water",
        Quality::Oily => "steamed vegetables with little oil",
        Quality::Dry => "soaked almonds and warm milk",
        Quality::Smooth => PLACEHOLDER,
        Quality::Rough => "stewed fruit with ghee",
        Quality::Dense => PLACEHOLDER,
        Quality::Liquid => "roasted seeds and dry crackers",
        Quality::Soft => "crunchy raw vegetables",
        Quality::Hard => "soft cooked porridge",
        Quality::Stable => "pungent spices such as ginger and clove",
        Quality::Mobile => "warm cooked root vegetables",
        Quality::Subtle => "grounding stews with lentils",
        Quality::Gross => "light broths and herbal teas",
        Quality::Clear => PLACEHOLDER,
        Quality::Cloudy => "fresh herbs such as basil and mint",
    }
}

/// What to cut back on while the quality is in excess.
pub fn avoid_for(quality: Quality) -> &'static str {
    match quality {
        Quality::Heavy => "fried and heavy desserts",
        Quality::Light => "skipping meals",
        Quality::Slow => "large late dinners",
        Quality::Sharp => "chili and very sour food",
        Quality::Cold => "iced drinks",
        Quality::Hot => "alcohol and hot spices",
        Quality::Oily => "deep-fried food",
        Quality::Dry => "dry crackers and popcorn",
        Quality::Smooth => "dairy-rich desserts",
        Quality::Rough => "raw salads late in the day",
        Quality::Dense => "cheese and red meat",
        Quality::Liquid => "excess water with meals",
        Quality::Soft => "bread and pastries",
        Quality::Hard => PLACEHOLDER,
        Quality::Stable => "leftovers and stale food",
        Quality::Mobile => "caffeine",
        Quality::Subtle => PLACEHOLDER,
        Quality::Gross => "processed snacks",
        Quality::Clear => PLACEHOLDER,
        Quality::Cloudy => "sugar and refined flour",
    }
}

/// Qualities a dosha pushes to the front, strongest first.
pub fn dosha_priority(dosha: Dosha) -> &'static [Quality] {
    use Quality::*;
    match dosha {
        Dosha::Vata => &[Dry, Light, Cold, Rough, Subtle, Mobile, Clear],
        Dosha::Pitta => &[Hot, Sharp, Light, Oily, Liquid],
        Dosha::Kapha => &[Heavy, Slow, Cold, Oily, Smooth, Dense, Soft, Stable, Cloudy],
    }
}

/// Season whose dosha takes priority when seasonal priority is enabled.
pub fn season_override(season: Season) -> Option<Dosha> {
    match season {
        Season::Summer => Some(Dosha::Pitta),
        Season::Autumn => Some(Dosha::Vata),
        Season::Spring => Some(Dosha::Kapha),
        Season::Winter => None,
    }
}

pub fn sleep_for_dosha(dosha: Dosha) -> &'static str {
    match dosha {
        Dosha::Vata => "be in bed by 22:00 and rub warm oil on the soles of the feet",
        Dosha::Pitta => "keep the bedroom cool and stop screens an hour before sleep",
        Dosha::Kapha => "wake before 06:00 and avoid naps during the day",
    }
}

pub fn sleep_for_season(season: Season) -> &'static str {
    match season {
        Season::Winter => "sleep a little longer and keep the feet warm",
        Season::Spring => "rise early with the light and keep dinner light",
        Season::Summer => "sleep in a ventilated room and rest briefly after lunch if needed",
        Season::Autumn => "keep a fixed bedtime and drink warm milk with nutmeg",
    }
}

pub fn routine_for(period: HourPeriod) -> &'static str {
    match period {
        HourPeriod::Morning => "move the body and set one intention before checking messages",
        HourPeriod::Midday => "make this the main meal and take a short walk after it",
        HourPeriod::Afternoon => "pause for water and five deep breaths between tasks",
        HourPeriod::Evening => "dim the lights and close open loops on paper",
        HourPeriod::Night => "put the phone away and let the mind settle into rest",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrases_are_single_clauses() {
        for q in Quality::ALL {
            for phrase in [practice_for(*q), food_for(*q), avoid_for(*q)] {
                assert!(!phrase.contains(". "), "{q}: {phrase}");
                assert!(!phrase.contains(';'), "{q}: {phrase}");
                assert!(!phrase.trim().is_empty());
            }
        }
    }

    #[test]
    fn only_clarity_lacks_a_remedy() {
        assert_eq!(practice_for(Quality::Clear), PLACEHOLDER);
        assert_eq!(food_for(Quality::Clear), PLACEHOLDER);
        for q in Quality::ALL.iter().filter(|q| **q != Quality::Clear) {
            assert!(
                practice_for(*q) != PLACEHOLDER || food_for(*q) != PLACEHOLDER,
                "{q}"
            );
        }
    }
}
