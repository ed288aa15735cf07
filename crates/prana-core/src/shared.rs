//! Shared tags and input types for the engine.
//!
//! Every classification axis (klesha, guna, dosha, element, the twenty ayurvedic
//! qualities) is a closed enum serialized as a lowercase string, so catalogs are
//! checked at compile time and JSON output stays stable for callers.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Declares a closed tag enum with `as_str`, `from_str` and `ALL`.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Case-insensitive parse; unknown input yields `None`.
            pub fn from_str(s: &str) -> Option<Self> {
                let s = s.trim();
                $(if s.eq_ignore_ascii_case($text) {
                    return Some($name::$variant);
                })+
                None
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use tag_enum;

tag_enum! {
    /// Root affliction (Yoga Sutra 2.3). Opaque matching axis.
    Klesha {
        /// Ignorance, misperception of what is lasting.
        Avidya => "avidya",
        /// Egoism, identification with the self-image.
        Asmita => "asmita",
        /// Attachment, craving for what pleased.
        Raga => "raga",
        /// Aversion, clinging to what hurt.
        Dvesha => "dvesha",
        /// Fear of loss and of death; clinging to continuity.
        Abhinivesha => "abhinivesha",
    }
}

tag_enum! {
    /// Samkhya mode of nature.
    Guna {
        Sattva => "sattva",
        Rajas => "rajas",
        Tamas => "tamas",
    }
}

tag_enum! {
    /// Constitutional tendency.
    Dosha {
        Vata => "vata",
        Pitta => "pitta",
        Kapha => "kapha",
    }
}

tag_enum! {
    /// Classical element of a zodiac sign.
    Element {
        Fire => "fire",
        Earth => "earth",
        Air => "air",
        Water => "water",
    }
}

tag_enum! {
    /// The twenty gurvadi gunas (ten opposing pairs) used as imbalance descriptors.
    Quality {
        Heavy => "heavy",
        Light => "light",
        Slow => "slow",
        Sharp => "sharp",
        Cold => "cold",
        Hot => "hot",
        Oily => "oily",
        Dry => "dry",
        Smooth => "smooth",
        Rough => "rough",
        Dense => "dense",
        Liquid => "liquid",
        Soft => "soft",
        Hard => "hard",
        Stable => "stable",
        Mobile => "mobile",
        Subtle => "subtle",
        Gross => "gross",
        Clear => "clear",
        Cloudy => "cloudy",
    }
}

impl Quality {
    /// The opposing pole of the pair (heavy ↔ light, cold ↔ hot, ...).
    pub fn opposite(&self) -> Quality {
        match self {
            Quality::Heavy => Quality::Light,
            Quality::Light => Quality::Heavy,
            Quality::Slow => Quality::Sharp,
            Quality::Sharp => Quality::Slow,
            Quality::Cold => Quality::Hot,
            Quality::Hot => Quality::Cold,
            Quality::Oily => Quality::Dry,
            Quality::Dry => Quality::Oily,
            Quality::Smooth => Quality::Rough,
            Quality::Rough => Quality::Smooth,
            Quality::Dense => Quality::Liquid,
            Quality::Liquid => Quality::Dense,
            Quality::Soft => Quality::Hard,
            Quality::Hard => Quality::Soft,
            Quality::Stable => Quality::Mobile,
            Quality::Mobile => Quality::Stable,
            Quality::Subtle => Quality::Gross,
            Quality::Gross => Quality::Subtle,
            Quality::Clear => Quality::Cloudy,
            Quality::Cloudy => Quality::Clear,
        }
    }
}

tag_enum! {
    /// Which path produced a package.
    Mode {
        /// Seed only; no birth profile.
        Universal => "universal",
        /// Birth profile present; diagnosis filtered by the symbolic map.
        Personal => "personal",
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Universal
    }
}

/// Birth profile supplied by the caller. Every field is optional; absence degrades
/// to universal mode or to a reduced-precision map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    /// ISO date, `YYYY-MM-DD`.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Local clock time, `HH:mm`.
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default)]
    pub birth_place: Option<String>,
}

impl BirthProfile {
    /// Parsed birth date. Malformed input is logged and treated as absent.
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = non_empty(self.birth_date.as_deref())?;
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(e) => {
                tracing::warn!(target: "prana::profile", birth_date = raw, error = %e, "unparseable birth date; ignoring");
                None
            }
        }
    }

    /// Parsed birth time (`HH:mm`, seconds tolerated). Malformed input is treated as absent.
    pub fn time(&self) -> Option<NaiveTime> {
        let raw = non_empty(self.birth_time.as_deref())?;
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map_err(|e| {
                tracing::warn!(target: "prana::profile", birth_time = raw, error = %e, "unparseable birth time; ignoring");
            })
            .ok()
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(self.full_name.as_deref())
    }

    pub fn place(&self) -> Option<&str> {
        non_empty(self.birth_place.as_deref())
    }

    /// True when no field carries usable content.
    pub fn is_blank(&self) -> bool {
        self.name().is_none()
            && non_empty(self.birth_date.as_deref()).is_none()
            && non_empty(self.birth_time.as_deref()).is_none()
            && self.place().is_none()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip_is_case_insensitive() {
        assert_eq!(Klesha::from_str("RAGA"), Some(Klesha::Raga));
        assert_eq!(Guna::from_str(" tamas "), Some(Guna::Tamas));
        assert_eq!(Quality::from_str("cloudy"), Some(Quality::Cloudy));
        assert_eq!(Dosha::from_str("ojas"), None);
    }

    #[test]
    fn qualities_form_ten_pairs() {
        assert_eq!(Quality::ALL.len(), 20);
        for q in Quality::ALL {
            assert_ne!(*q, q.opposite());
            assert_eq!(q.opposite().opposite(), *q);
        }
    }

    #[test]
    fn profile_parses_date_and_time() {
        let p = BirthProfile {
            full_name: Some("Ana".into()),
            birth_date: Some("1990-05-17".into()),
            birth_time: Some("07:45".into()),
            birth_place: None,
        };
        assert_eq!(p.date(), NaiveDate::from_ymd_opt(1990, 5, 17));
        assert_eq!(p.time(), NaiveTime::from_hms_opt(7, 45, 0));
        assert!(!p.is_blank());
    }

    #[test]
    fn malformed_fields_degrade_to_absent() {
        let p = BirthProfile {
            birth_date: Some("17/05/1990".into()),
            birth_time: Some("quarter past".into()),
            ..Default::default()
        };
        assert!(p.date().is_none());
        assert!(p.time().is_none());
    }

    #[test]
    fn profile_deserializes_camel_case() {
        let p: BirthProfile =
            serde_json::from_str(r#"{"fullName":"Ana","birthDate":"1990-05-17"}"#).unwrap();
        assert_eq!(p.name(), Some("Ana"));
        assert!(p.birth_time.is_none());
        assert!(BirthProfile::default().is_blank());
    }
}
