//! Ephemeris Resolver: birth profile → astronomical-symbol core.
//!
//! Providers are tried in a fixed order (high-fidelity first, mean-motion fallback
//! last). A provider may answer `Ok(None)` ("unavailable", e.g. its tables are not
//! warm yet) and the resolver falls through silently; `Err` is logged and also falls
//! through. Only "no provider in the list succeeded" is returned as an error.

pub mod gazetteer;
pub mod julian;
mod mean_motion;
mod precise;

pub use gazetteer::Place;
pub use mean_motion::MeanMotionProvider;
pub use precise::{is_warm, shared_cache, warm_up, KeplerTables, PreciseProvider, TableCache};

use crate::config::{EngineConfig, ZodiacMode};
use crate::shared::BirthProfile;
use crate::zodiac::{normalize_degrees, station_index, station_name, ZodiacSign};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors from ephemeris providers and the resolver.
#[derive(Debug, thiserror::Error)]
pub enum EphemerisError {
    #[error("ephemeris provider '{provider}' failed: {reason}")]
    ProviderFailed { provider: &'static str, reason: String },

    #[error("ephemeris tables failed validation: {0}")]
    InvalidTables(String),

    #[error("no ephemeris provider succeeded (tried: {})", attempted.join(", "))]
    NoProviderSucceeded { attempted: Vec<&'static str> },
}

/// Which provider produced a core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderTag {
    /// Keplerian orbital elements + truncated lunar series.
    Keplerian,
    /// Mean Sun/Moon motion from the birth date only.
    MeanMotion,
}

impl ProviderTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTag::Keplerian => "keplerian",
            ProviderTag::MeanMotion => "mean_motion",
        }
    }
}

/// Bodies tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Mean ascending lunar node.
    Node,
}

impl Planet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Planet::Sun => "sun",
            Planet::Moon => "moon",
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Node => "node",
        }
    }
}

/// Astronomical-symbol core. Longitudes are always normalized to `[0, 360)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronomicalCore {
    pub provider_used: ProviderTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitudes: Option<BTreeMap<Planet, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunar_sign: Option<ZodiacSign>,
    /// Lunar station index 0..27.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunar_station: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascendant: Option<f64>,
    /// Twelve equal-house cusps starting at the ascendant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub houses: Option<Vec<f64>>,
}

impl AstronomicalCore {
    /// Core carrying only the provider tag (no birth date available).
    pub fn degenerate(provider_used: ProviderTag) -> Self {
        Self {
            provider_used,
            longitudes: None,
            lunar_sign: None,
            lunar_station: None,
            ascendant: None,
            houses: None,
        }
    }

    /// Build a core from raw longitudes; derives lunar sign/station from the Moon.
    pub fn from_longitudes(
        provider_used: ProviderTag,
        longitudes: BTreeMap<Planet, f64>,
        ascendant: Option<f64>,
    ) -> Self {
        let mut core = Self::degenerate(provider_used);
        core.longitudes = Some(
            longitudes
                .into_iter()
                .map(|(p, lon)| (p, normalize_degrees(lon)))
                .collect(),
        );
        core.set_ascendant(ascendant);
        core.refresh_lunar();
        core
    }

    pub fn longitude(&self, planet: Planet) -> Option<f64> {
        self.longitudes.as_ref()?.get(&planet).copied()
    }

    pub fn sign_of(&self, planet: Planet) -> Option<ZodiacSign> {
        self.longitude(planet).map(ZodiacSign::from_longitude)
    }

    pub fn lunar_station_name(&self) -> Option<&'static str> {
        self.lunar_station.map(station_name)
    }

    pub fn has_longitudes(&self) -> bool {
        self.longitudes.as_ref().map(|m| !m.is_empty()).unwrap_or(false)
    }

    /// Rotate every longitude by `-offset` degrees (tropical → sidereal).
    pub fn shift(&mut self, offset: f64) {
        if let Some(map) = self.longitudes.as_mut() {
            for lon in map.values_mut() {
                *lon = normalize_degrees(*lon - offset);
            }
        }
        let asc = self.ascendant.map(|a| a - offset);
        self.set_ascendant(asc);
        self.refresh_lunar();
    }

    fn set_ascendant(&mut self, ascendant: Option<f64>) {
        self.ascendant = ascendant.map(normalize_degrees);
        self.houses = self
            .ascendant
            .map(|asc| (0..12).map(|i| normalize_degrees(asc + 30.0 * i as f64)).collect());
    }

    fn refresh_lunar(&mut self) {
        let moon = self.longitude(Planet::Moon);
        self.lunar_sign = moon.map(ZodiacSign::from_longitude);
        self.lunar_station = moon.map(station_index);
    }
}

/// Parsed view of a birth profile, computed once per resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisRequest {
    /// Julian Day (UT) of birth; `None` without a birth date.
    pub jd: Option<f64>,
    /// True when the clock time was supplied (otherwise local noon is assumed).
    pub time_known: bool,
    pub place: Option<Place>,
}

impl EphemerisRequest {
    pub fn from_profile(profile: &BirthProfile) -> Self {
        let place = profile.place().and_then(|raw| {
            let found = gazetteer::lookup(raw);
            if found.is_none() {
                tracing::debug!(target: "prana::ephemeris", place = raw, "birth place not in gazetteer; no ascendant");
            }
            found
        });
        let time = profile.time();
        let jd = profile.date().map(|date| {
            let clock = time.unwrap_or_else(local_noon);
            julian::local_to_jd(date, clock, place.map(|p| p.utc_offset).unwrap_or(0.0))
        });
        Self {
            jd,
            time_known: time.is_some(),
            place,
        }
    }
}

fn local_noon() -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::hours(12)
}

/// A source of astronomical cores.
pub trait EphemerisProvider: Send + Sync {
    fn tag(&self) -> ProviderTag;

    /// `Ok(None)` means "unavailable for this request"; the resolver moves on without logging an error.
    fn compute(&self, request: &EphemerisRequest) -> Result<Option<AstronomicalCore>, EphemerisError>;
}

/// Linear Lahiri-style ayanamsa (degrees) for a Julian Day.
pub fn ayanamsa(jd: f64) -> f64 {
    23.853 + 1.3969 * julian::centuries_since_j2000(jd)
}

/// Ordered provider chain.
pub struct EphemerisResolver {
    providers: Vec<Box<dyn EphemerisProvider>>,
    zodiac: ZodiacMode,
}

impl EphemerisResolver {
    pub fn new(providers: Vec<Box<dyn EphemerisProvider>>, zodiac: ZodiacMode) -> Self {
        Self { providers, zodiac }
    }

    /// Standard chain: Keplerian (shared cache) when enabled, then mean motion.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut providers: Vec<Box<dyn EphemerisProvider>> = Vec::new();
        if config.precise_ephemeris {
            providers.push(Box::new(PreciseProvider::shared()));
        }
        providers.push(Box::new(MeanMotionProvider));
        Self::new(providers, config.zodiac)
    }

    pub fn provider_tags(&self) -> Vec<ProviderTag> {
        self.providers.iter().map(|p| p.tag()).collect()
    }

    /// Resolve a profile against the provider chain.
    pub fn compute(&self, profile: &BirthProfile) -> Result<AstronomicalCore, EphemerisError> {
        let request = EphemerisRequest::from_profile(profile);
        let mut attempted = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let tag = provider.tag();
            attempted.push(tag.as_str());
            match provider.compute(&request) {
                Ok(Some(mut core)) => {
                    if self.zodiac == ZodiacMode::Sidereal {
                        if let Some(jd) = request.jd {
                            core.shift(ayanamsa(jd));
                        }
                    }
                    tracing::debug!(
                        target: "prana::ephemeris",
                        provider = tag.as_str(),
                        lunar_sign = core.lunar_sign.map(|s| s.as_str()).unwrap_or("-"),
                        "ephemeris resolved"
                    );
                    return Ok(core);
                }
                Ok(None) => {
                    tracing::debug!(target: "prana::ephemeris", provider = tag.as_str(), "provider unavailable; falling through");
                }
                Err(e) => {
                    tracing::warn!(target: "prana::ephemeris", provider = tag.as_str(), error = %e, "provider failed; falling through");
                }
            }
        }

        Err(EphemerisError::NoProviderSucceeded { attempted })
    }
}
