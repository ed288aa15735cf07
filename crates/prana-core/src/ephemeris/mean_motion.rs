//! Low-fidelity fallback: mean solar and lunar motion from the birth date alone.
//! Always available; good to about a degree for the Sun and a few degrees for the Moon.

use super::julian::centuries_since_j2000;
use super::{AstronomicalCore, EphemerisError, EphemerisProvider, EphemerisRequest, Planet, ProviderTag};
use std::collections::BTreeMap;

/// Mean-motion provider. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionProvider;

impl MeanMotionProvider {
    /// Sun, Moon and mean node longitudes (unnormalized) for a Julian Day.
    pub fn longitudes(jd: f64) -> BTreeMap<Planet, f64> {
        let t = centuries_since_j2000(jd);

        let l0 = 280.466_46 + 36_000.769_83 * t;
        let m = (357.529_11 + 35_999.050_29 * t).to_radians();
        let center = (1.914_602 - 0.004_817 * t) * m.sin()
            + 0.019_993 * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin();

        let moon_mean = 218.316_447_7 + 481_267.881_234_21 * t;
        let moon_anomaly = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();

        let mut out = BTreeMap::new();
        out.insert(Planet::Sun, l0 + center);
        out.insert(Planet::Moon, moon_mean + 6.289 * moon_anomaly.sin());
        out.insert(Planet::Node, 125.044_52 - 1_934.136_261 * t);
        out
    }
}

impl EphemerisProvider for MeanMotionProvider {
    fn tag(&self) -> ProviderTag {
        ProviderTag::MeanMotion
    }

    fn compute(&self, request: &EphemerisRequest) -> Result<Option<AstronomicalCore>, EphemerisError> {
        let Some(jd) = request.jd else {
            return Ok(Some(AstronomicalCore::degenerate(ProviderTag::MeanMotion)));
        };
        Ok(Some(AstronomicalCore::from_longitudes(
            ProviderTag::MeanMotion,
            Self::longitudes(jd),
            None,
        )))
    }
}
