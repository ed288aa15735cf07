//! Zodiac signs and lunar stations.
//!
//! Longitude → sign and longitude → station are the only astronomical resolutions
//! the engine needs; everything downstream keys off these two indices.

use crate::shared::{Dosha, Element, Guna};
use serde::{Deserialize, Serialize};

/// Width of one lunar station in degrees (360 / 27).
pub const STATION_WIDTH_DEG: f64 = 360.0 / 27.0;

/// Normalize a longitude into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs due to rounding
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// `floor(longitude / 30) mod 12`.
pub fn sign_index(longitude: f64) -> u8 {
    ((normalize_degrees(longitude) / 30.0).floor() as u32 % 12) as u8
}

/// `floor(longitude / (360/27)) mod 27`.
pub fn station_index(longitude: f64) -> u8 {
    ((normalize_degrees(longitude) / STATION_WIDTH_DEG).floor() as u32 % 27) as u8
}

/// Zodiac signs in ecliptic order (Aries = 0 .. Pisces = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub fn from_index(index: u8) -> Self {
        SIGNS[(index % 12) as usize]
    }

    pub fn from_longitude(longitude: f64) -> Self {
        Self::from_index(sign_index(longitude))
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// Fixed sign → dosha lookup. Fire signs lean pitta, air signs vata, water signs
    /// kapha; earth splits between kapha (Taurus) and vata (Virgo, Capricorn).
    pub fn dosha(&self) -> Dosha {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Dosha::Pitta,
            Self::Gemini | Self::Libra | Self::Aquarius => Dosha::Vata,
            Self::Virgo | Self::Capricorn => Dosha::Vata,
            Self::Taurus | Self::Cancer | Self::Scorpio | Self::Pisces => Dosha::Kapha,
        }
    }

    /// Archetype carried by the sign when it is the map's primary placement.
    pub fn archetype(&self) -> Archetype {
        match self {
            Self::Aries => Archetype::Warrior,
            Self::Taurus => Archetype::Builder,
            Self::Gemini => Archetype::Messenger,
            Self::Cancer => Archetype::Nurturer,
            Self::Leo => Archetype::Sovereign,
            Self::Virgo => Archetype::Healer,
            Self::Libra => Archetype::Diplomat,
            Self::Scorpio => Archetype::Alchemist,
            Self::Sagittarius => Archetype::Seeker,
            Self::Capricorn => Archetype::Strategist,
            Self::Aquarius => Archetype::Visionary,
            Self::Pisces => Archetype::Mystic,
        }
    }

    /// How a lunar placement in this sign tends to process emotion.
    pub fn lunar_hint(&self) -> &'static str {
        match self {
            Self::Aries => "feelings arrive fast and want immediate action; pause before reacting",
            Self::Taurus => "emotional steadiness depends on routine and the body; sudden change unsettles",
            Self::Gemini => "emotions are processed by talking and thinking; the mind can outrun the heart",
            Self::Cancer => "safety and belonging come first; name the feeling before solving anything",
            Self::Leo => "the heart needs to be seen; recognition soothes, indifference wounds",
            Self::Virgo => "worry takes the form of analysis; order and usefulness calm the mind",
            Self::Libra => "balance in relationships sets the inner weather; conflict is felt physically",
            Self::Scorpio => "feelings run deep and private; trust is the gate to release",
            Self::Sagittarius => "meaning and freedom restore the mood; confinement breeds restlessness",
            Self::Capricorn => "emotions are held under duty; acknowledging fatigue is itself a practice",
            Self::Aquarius => "feelings are observed from a distance; connection needs deliberate warmth",
            Self::Pisces => "porous and empathic; boundaries and rest protect the inner tide",
        }
    }
}

/// Primary archetype of a symbolic map. Sign archetypes come from the Sun (or Moon);
/// number archetypes from the numerology ruling number when no sky data exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Warrior,
    Builder,
    Messenger,
    Nurturer,
    Sovereign,
    Healer,
    Diplomat,
    Alchemist,
    Seeker,
    Strategist,
    Visionary,
    Mystic,
    Pioneer,
    Teacher,
    Master,
}

impl Archetype {
    /// Fixed archetype → dominant guna lookup used by personal-mode diagnosis.
    pub fn guna(&self) -> Guna {
        match self {
            Archetype::Warrior
            | Archetype::Messenger
            | Archetype::Sovereign
            | Archetype::Strategist
            | Archetype::Pioneer => Guna::Rajas,
            Archetype::Builder | Archetype::Nurturer | Archetype::Alchemist => Guna::Tamas,
            Archetype::Healer
            | Archetype::Diplomat
            | Archetype::Seeker
            | Archetype::Visionary
            | Archetype::Mystic
            | Archetype::Teacher
            | Archetype::Master => Guna::Sattva,
        }
    }

    /// Archetype for a numerology ruling number (1–9, 11, 22).
    pub fn from_ruling_number(n: u8) -> Option<Self> {
        let a = match n {
            1 => Archetype::Pioneer,
            2 => Archetype::Diplomat,
            3 => Archetype::Messenger,
            4 => Archetype::Builder,
            5 => Archetype::Seeker,
            6 => Archetype::Nurturer,
            7 => Archetype::Mystic,
            8 => Archetype::Strategist,
            9 => Archetype::Healer,
            11 => Archetype::Teacher,
            22 => Archetype::Master,
            _ => return None,
        };
        Some(a)
    }
}

/// The 27 lunar stations (nakshatras), Ashwini = 0.
const STATIONS: [&str; 27] = [
    "ashwini",
    "bharani",
    "krittika",
    "rohini",
    "mrigashira",
    "ardra",
    "punarvasu",
    "pushya",
    "ashlesha",
    "magha",
    "purva_phalguni",
    "uttara_phalguni",
    "hasta",
    "chitra",
    "swati",
    "vishakha",
    "anuradha",
    "jyeshtha",
    "mula",
    "purva_ashadha",
    "uttara_ashadha",
    "shravana",
    "dhanishta",
    "shatabhisha",
    "purva_bhadrapada",
    "uttara_bhadrapada",
    "revati",
];

/// Lunar station name for an index (wraps modulo 27).
pub fn station_name(index: u8) -> &'static str {
    STATIONS[(index % 27) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_wraps_into_range() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-30.0) - 330.0).abs() < 1e-9);
        assert!((normalize_degrees(725.5) - 5.5).abs() < 1e-9);
    }

    #[test]
    fn sign_and_station_indices() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.9), 11);
        assert_eq!(sign_index(-1.0), 11);
        assert_eq!(station_index(0.0), 0);
        assert_eq!(station_index(13.34), 1);
        assert_eq!(station_index(359.99), 26);
        assert_eq!(station_name(7), "pushya");
    }

    #[test]
    fn sign_lookups_are_consistent() {
        assert_eq!(ZodiacSign::from_longitude(95.0), ZodiacSign::Cancer);
        assert_eq!(ZodiacSign::Cancer.dosha(), Dosha::Kapha);
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::from_index(13), ZodiacSign::Taurus);
        for (i, s) in SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn every_ruling_number_has_an_archetype() {
        for n in (1..=9).chain([11, 22]) {
            assert!(Archetype::from_ruling_number(n).is_some());
        }
        assert!(Archetype::from_ruling_number(10).is_none());
    }
}
