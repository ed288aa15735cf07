//! Symbolic Map Builder: ephemeris core + name numerology + constitution stub.

use crate::config::EngineConfig;
use crate::ephemeris::{AstronomicalCore, EphemerisError, EphemerisResolver, Planet};
use crate::numerology::{numerology_for_name, Numerology};
use crate::shared::{BirthProfile, Dosha};
use crate::zodiac::{Archetype, ZodiacSign};
use serde::Serialize;
use std::collections::BTreeMap;

/// Dosha tally over the planets' signs. The mean node does not vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstitutionStub {
    pub primary: Dosha,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Dosha>,
    pub votes: BTreeMap<Dosha, u8>,
}

impl ConstitutionStub {
    /// `None` when the core has no longitudes.
    pub fn from_core(core: &AstronomicalCore) -> Option<Self> {
        let longitudes = core.longitudes.as_ref()?;
        let mut votes: BTreeMap<Dosha, u8> = BTreeMap::new();
        for (planet, lon) in longitudes {
            if *planet == Planet::Node {
                continue;
            }
            *votes.entry(ZodiacSign::from_longitude(*lon).dosha()).or_default() += 1;
        }
        if votes.is_empty() {
            return None;
        }

        // Dosha declaration order breaks ties.
        let mut ranked: Vec<(Dosha, u8)> = votes.iter().map(|(d, n)| (*d, *n)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        Some(Self {
            primary: ranked[0].0,
            secondary: ranked.get(1).map(|(d, _)| *d),
            votes,
        })
    }
}

/// Per-request symbolic map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolicMap {
    pub core: AstronomicalCore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerology: Option<Numerology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitution: Option<ConstitutionStub>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_archetype: Option<Archetype>,
}

impl SymbolicMap {
    pub fn sun_sign(&self) -> Option<ZodiacSign> {
        self.core.sign_of(Planet::Sun)
    }

    pub fn lunar_sign(&self) -> Option<ZodiacSign> {
        self.core.lunar_sign
    }

    pub fn ruling_number(&self) -> Option<u8> {
        self.numerology.as_ref().map(|n| n.ruling_number)
    }
}

/// Sun sign, then lunar sign, then ruling number.
pub fn primary_archetype(core: &AstronomicalCore, numerology: Option<&Numerology>) -> Option<Archetype> {
    core.sign_of(Planet::Sun)
        .or(core.lunar_sign)
        .map(|sign| sign.archetype())
        .or_else(|| numerology.and_then(|n| Archetype::from_ruling_number(n.ruling_number)))
}

pub struct SymbolicMapBuilder {
    resolver: EphemerisResolver,
}

impl SymbolicMapBuilder {
    pub fn new(resolver: EphemerisResolver) -> Self {
        Self { resolver }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(EphemerisResolver::from_config(config))
    }

    pub fn resolver(&self) -> &EphemerisResolver {
        &self.resolver
    }

    pub fn build(&self, profile: &BirthProfile) -> Result<SymbolicMap, EphemerisError> {
        let core = self.resolver.compute(profile)?;
        let numerology = profile.name().and_then(numerology_for_name);
        let constitution = ConstitutionStub::from_core(&core);
        let primary_archetype = primary_archetype(&core, numerology.as_ref());

        tracing::debug!(
            target: "prana::profile",
            provider = core.provider_used.as_str(),
            ruling_number = numerology.as_ref().map(|n| n.ruling_number),
            archetype = ?primary_archetype,
            "symbolic map built"
        );

        Ok(SymbolicMap {
            core,
            numerology,
            constitution,
            primary_archetype,
        })
    }
}
