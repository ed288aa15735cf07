//! Engine configuration.
//!
//! Two ways in, mirroring each other:
//! - [`EngineConfig::from_env`] reads flat `PRANA_*` toggles (unset or invalid => default).
//! - [`EngineConfig::load`] layers defaults → TOML file (`PRANA_CONFIG`, default
//!   `config/prana.toml`) → `PRANA__*` environment overrides via the `config` crate.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | PRANA_PRECISE_EPHEMERIS | true | Register the Keplerian provider ahead of the mean-motion fallback. |
//! | PRANA_ZODIAC | tropical | `tropical` or `sidereal` (linear ayanamsa applied to every longitude). |
//! | PRANA_HEMISPHERE | north | `north` or `south`; shifts the season table by six months. |
//! | PRANA_SEASONAL_PRIORITY | false | Let the season override table reorder dosha priorities. |
//! | PRANA_MAX_SUGGESTIONS | 2 | Practice/food phrases per package (clamped 1–5). |
//! | PRANA_ENRICHMENT | true | Add the narrative insight in personal mode. |

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lower bound for suggestion caps.
pub const MIN_SUGGESTIONS: u8 = 1;
/// Upper bound for suggestion caps.
pub const MAX_SUGGESTIONS: u8 = 5;

/// Reference frame for ecliptic longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacMode {
    #[default]
    Tropical,
    Sidereal,
}

impl ZodiacMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacMode::Tropical => "tropical",
            ZodiacMode::Sidereal => "sidereal",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            s if s.eq_ignore_ascii_case("sidereal") => ZodiacMode::Sidereal,
            _ => ZodiacMode::Tropical,
        }
    }
}

/// Hemisphere used to turn a calendar month into a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

impl Hemisphere {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::North => "north",
            Hemisphere::South => "south",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            s if s.eq_ignore_ascii_case("south") || s.eq_ignore_ascii_case("southern") => {
                Hemisphere::South
            }
            _ => Hemisphere::North,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_suggestions() -> u8 {
    2
}

/// Engine configuration. All fields have defaults; see the module table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_true")]
    pub precise_ephemeris: bool,
    #[serde(default)]
    pub zodiac: ZodiacMode,
    #[serde(default)]
    pub hemisphere: Hemisphere,
    /// Season override table for dosha priority; opt-in.
    #[serde(default)]
    pub seasonal_priority: bool,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: u8,
    #[serde(default = "default_true")]
    pub enrichment: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precise_ephemeris: true,
            zodiac: ZodiacMode::Tropical,
            hemisphere: Hemisphere::North,
            seasonal_priority: false,
            max_suggestions: default_max_suggestions(),
            enrichment: true,
        }
    }
}

impl EngineConfig {
    /// Load toggles from flat `PRANA_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            precise_ephemeris: env_bool("PRANA_PRECISE_EPHEMERIS", true),
            zodiac: env_opt_string("PRANA_ZODIAC")
                .map(|s| ZodiacMode::from_str(&s))
                .unwrap_or_default(),
            hemisphere: env_opt_string("PRANA_HEMISPHERE")
                .map(|s| Hemisphere::from_str(&s))
                .unwrap_or_default(),
            seasonal_priority: env_bool("PRANA_SEASONAL_PRIORITY", false),
            max_suggestions: env_max_suggestions(),
            enrichment: env_bool("PRANA_ENRICHMENT", true),
        }
    }

    /// Load from file and environment. Precedence: `PRANA__*` env > file at `PRANA_CONFIG`
    /// (or `config/prana`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("PRANA_CONFIG").unwrap_or_else(|_| "config/prana.toml".to_string());
        Self::load_from_path(Path::new(&config_path))
    }

    /// Same as [`EngineConfig::load`] with an explicit file path. A missing file is not an error.
    pub fn load_from_path(path: &Path) -> Result<Self, config::ConfigError> {
        let defaults = EngineConfig::default();
        let builder = config::Config::builder()
            .set_default("precise_ephemeris", defaults.precise_ephemeris)?
            .set_default("zodiac", defaults.zodiac.as_str())?
            .set_default("hemisphere", defaults.hemisphere.as_str())?
            .set_default("seasonal_priority", defaults.seasonal_priority)?
            .set_default("max_suggestions", defaults.max_suggestions as i64)?
            .set_default("enrichment", defaults.enrichment)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            tracing::debug!(target: "prana::config", path = %path.display(), "config file not found; using defaults");
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("PRANA").separator("__"))
            .build()?;

        let cfg: EngineConfig = built.try_deserialize()?;
        Ok(cfg.clamped())
    }

    /// Suggestion cap clamped to `1..=5`.
    pub fn suggestion_cap(&self) -> u8 {
        self.max_suggestions.clamp(MIN_SUGGESTIONS, MAX_SUGGESTIONS)
    }

    /// Effective configuration as TOML (for `prana config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn clamped(mut self) -> Self {
        self.max_suggestions = self.suggestion_cap();
        self
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(v) => {
            let v = v.trim();
            if v.is_empty() {
                default
            } else {
                v.eq_ignore_ascii_case("true") || v == "1"
            }
        }
        Err(_) => default,
    }
}

fn env_max_suggestions() -> u8 {
    match std::env::var("PRANA_MAX_SUGGESTIONS") {
        Ok(v) => v
            .trim()
            .parse::<u8>()
            .unwrap_or(default_max_suggestions())
            .clamp(MIN_SUGGESTIONS, MAX_SUGGESTIONS),
        Err(_) => default_max_suggestions(),
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
