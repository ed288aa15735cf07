//! High-fidelity provider: Keplerian mean orbital elements (valid 1800–2050),
//! a truncated lunar longitude series and the mean lunar node.
//!
//! The tables live in a [`TableCache`] that is built at most once. Until it is warm,
//! [`PreciseProvider::compute`] answers "unavailable" and the resolver uses the
//! fallback. Concurrent warm-ups may both build; only the first result is kept.

use super::julian::{centuries_since_j2000, J2000};
use super::{AstronomicalCore, EphemerisError, EphemerisProvider, EphemerisRequest, Planet, Place, ProviderTag};
use crate::zodiac::normalize_degrees;
use once_cell::sync::{Lazy, OnceCell};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Orbital elements at J2000 plus rates per Julian century.
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    incl: (f64, f64),
    mean_long: (f64, f64),
    long_peri: (f64, f64),
    long_node: (f64, f64),
}

impl Elements {
    fn at(&self, t: f64) -> [f64; 6] {
        [
            self.a.0 + self.a.1 * t,
            self.e.0 + self.e.1 * t,
            self.incl.0 + self.incl.1 * t,
            self.mean_long.0 + self.mean_long.1 * t,
            self.long_peri.0 + self.long_peri.1 * t,
            self.long_node.0 + self.long_node.1 * t,
        ]
    }
}

/// Approximate Keplerian elements (Standish, JPL), heliocentric ecliptic J2000.
const ELEMENTS: [(Planet, Elements); 5] = [
    (
        Planet::Mercury,
        Elements {
            a: (0.387_099_27, 0.000_000_37),
            e: (0.205_635_93, 0.000_019_06),
            incl: (7.004_979_02, -0.005_947_49),
            mean_long: (252.250_323_50, 149_472.674_111_75),
            long_peri: (77.457_796_28, 0.160_476_89),
            long_node: (48.330_765_93, -0.125_340_81),
        },
    ),
    (
        Planet::Venus,
        Elements {
            a: (0.723_335_66, 0.000_003_90),
            e: (0.006_776_72, -0.000_041_07),
            incl: (3.394_676_05, -0.000_788_90),
            mean_long: (181.979_099_50, 58_517.815_387_29),
            long_peri: (131.602_467_18, 0.002_683_29),
            long_node: (76.679_842_55, -0.277_694_18),
        },
    ),
    (
        Planet::Mars,
        Elements {
            a: (1.523_710_34, 0.000_018_47),
            e: (0.093_394_10, 0.000_078_82),
            incl: (1.849_691_42, -0.008_131_31),
            mean_long: (-4.553_432_05, 19_140.302_684_99),
            long_peri: (-23.943_629_59, 0.444_410_88),
            long_node: (49.559_538_91, -0.292_573_43),
        },
    ),
    (
        Planet::Jupiter,
        Elements {
            a: (5.202_887_00, -0.000_116_07),
            e: (0.048_386_24, -0.000_132_53),
            incl: (1.304_396_95, -0.001_837_14),
            mean_long: (34.396_440_51, 3_034.746_127_75),
            long_peri: (14.728_479_83, 0.212_526_68),
            long_node: (100.473_909_09, 0.204_691_06),
        },
    ),
    (
        Planet::Saturn,
        Elements {
            a: (9.536_675_94, -0.001_250_60),
            e: (0.053_861_79, -0.000_509_91),
            incl: (2.485_991_87, 0.001_936_09),
            mean_long: (49.954_244_23, 1_222.493_622_01),
            long_peri: (92.598_878_31, -0.418_972_16),
            long_node: (113.662_424_48, -0.288_677_94),
        },
    ),
];

/// Earth–Moon barycenter.
const EARTH: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    incl: (-0.000_015_31, -0.012_946_68),
    mean_long: (100.464_571_66, 35_999.372_449_81),
    long_peri: (102.937_681_93, 0.323_273_64),
    long_node: (0.0, 0.0),
};

/// Lunar fundamental arguments (degrees, degrees/century): L', D, M, M', F.
const MOON_ARGS: [(f64, f64); 5] = [
    (218.316_447_7, 481_267.881_234_21),
    (297.850_192_1, 445_267.111_403_4),
    (357.529_109_2, 35_999.050_290_9),
    (134.963_396_4, 477_198.867_505_5),
    (93.272_095_0, 483_202.017_523_3),
];

/// Main periodic terms of the lunar longitude: (coef°, D, M, M', F).
const MOON_TERMS: [(f64, i8, i8, i8, i8); 13] = [
    (6.289, 0, 0, 1, 0),
    (1.274, 2, 0, -1, 0),
    (0.658, 2, 0, 0, 0),
    (0.214, 0, 0, 2, 0),
    (-0.186, 0, 1, 0, 0),
    (-0.114, 0, 0, 0, 2),
    (0.059, 2, 0, -2, 0),
    (0.057, 2, -1, -1, 0),
    (0.053, 2, 0, 1, 0),
    (0.046, 2, -1, 0, 0),
    (0.041, 0, 1, -1, 0),
    (-0.035, 1, 0, 0, 0),
    (-0.030, 0, 1, 1, 0),
];

/// Mean node: Ω = 125.04452 − 1934.136261 T.
const NODE: (f64, f64) = (125.044_52, -1_934.136_261);

/// Validated, precomputed tables. Built once per process.
#[derive(Debug, Clone)]
pub struct KeplerTables {
    planets: Vec<(Planet, Elements)>,
    earth: Elements,
    moon_args: [(f64, f64); 5],
    moon_terms: Vec<(f64, [f64; 4])>,
}

impl KeplerTables {
    /// Build and validate the tables, then self-check against the J2000 solar longitude.
    pub fn build() -> Result<Self, EphemerisError> {
        for (planet, el) in ELEMENTS.iter() {
            let [a, e, ..] = el.at(0.0);
            if !(a > 0.0 && (0.0..1.0).contains(&e)) {
                return Err(EphemerisError::InvalidTables(format!(
                    "{} elements out of range (a={a}, e={e})",
                    planet.as_str()
                )));
            }
        }
        let tables = Self {
            planets: ELEMENTS.to_vec(),
            earth: EARTH,
            moon_args: MOON_ARGS,
            moon_terms: MOON_TERMS
                .iter()
                .map(|&(c, d, m, mp, f)| (c, [d as f64, m as f64, mp as f64, f as f64]))
                .collect(),
        };

        // Apparent solar longitude at J2000.0 is ~280.4°.
        let sun = tables.sun_longitude(0.0);
        if !sun.is_finite() || (sun - 280.4).abs() > 1.0 {
            return Err(EphemerisError::InvalidTables(format!(
                "solar self-check failed: {sun:.3}°"
            )));
        }
        Ok(tables)
    }

    fn earth_xy(&self, t: f64) -> (f64, f64) {
        heliocentric_xy(&self.earth, t)
    }

    fn sun_longitude(&self, t: f64) -> f64 {
        let (xe, ye) = self.earth_xy(t);
        normalize_degrees((-ye).atan2(-xe).to_degrees())
    }

    fn moon_longitude(&self, t: f64) -> f64 {
        let arg = |i: usize| (self.moon_args[i].0 + self.moon_args[i].1 * t).to_radians();
        let (l, d, m, mp, f) = (arg(0), arg(1), arg(2), arg(3), arg(4));
        let periodic: f64 = self
            .moon_terms
            .iter()
            .map(|(coef, k)| coef * (k[0] * d + k[1] * m + k[2] * mp + k[3] * f).sin())
            .sum();
        normalize_degrees(l.to_degrees() + periodic)
    }

    /// Geocentric ecliptic longitudes for every tracked body at Julian Day `jd`.
    pub fn longitudes(&self, jd: f64) -> BTreeMap<Planet, f64> {
        let t = centuries_since_j2000(jd);
        let (xe, ye) = self.earth_xy(t);
        let mut out = BTreeMap::new();
        out.insert(Planet::Sun, self.sun_longitude(t));
        out.insert(Planet::Moon, self.moon_longitude(t));
        for (planet, el) in &self.planets {
            let (x, y) = heliocentric_xy(el, t);
            out.insert(*planet, normalize_degrees((y - ye).atan2(x - xe).to_degrees()));
        }
        out.insert(Planet::Node, normalize_degrees(NODE.0 + NODE.1 * t));
        out
    }

    /// Ecliptic longitude of the ascendant for a place at Julian Day `jd`.
    pub fn ascendant(&self, jd: f64, place: &Place) -> f64 {
        let t = centuries_since_j2000(jd);
        let gmst = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000) + 0.000_387_933 * t * t;
        let lst = normalize_degrees(gmst + place.longitude).to_radians();
        let eps = (23.439_291_1 - 0.013_004_2 * t).to_radians();
        let phi = place.latitude.to_radians();
        let asc = lst
            .cos()
            .atan2(-(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
        normalize_degrees(asc.to_degrees())
    }
}

/// Heliocentric ecliptic x/y (AU) from mean elements at `t` centuries past J2000.
fn heliocentric_xy(el: &Elements, t: f64) -> (f64, f64) {
    let [a, e, incl, l, peri, node] = el.at(t);
    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    let incl = incl.to_radians();
    let m = normalize_degrees(l - peri).to_radians();

    // Kepler's equation, Newton iteration.
    let mut ecc_anom = m + e * m.sin();
    for _ in 0..8 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }

    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();
    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let ci = incl.cos();
    let x = (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp;
    let y = (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp;
    (x, y)
}

/// One-time guarded holder for [`KeplerTables`].
#[derive(Debug, Default)]
pub struct TableCache {
    cell: OnceCell<KeplerTables>,
}

impl TableCache {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn is_warm(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Option<&KeplerTables> {
        self.cell.get()
    }

    /// Build the tables if not yet present. Idempotent; a losing concurrent build is dropped.
    pub fn warm_up(&self) -> Result<(), EphemerisError> {
        if self.is_warm() {
            return Ok(());
        }
        let tables = KeplerTables::build()?;
        if self.cell.set(tables).is_ok() {
            tracing::info!(target: "prana::ephemeris", "Keplerian tables warm");
        }
        Ok(())
    }
}

static SHARED_CACHE: Lazy<Arc<TableCache>> = Lazy::new(|| Arc::new(TableCache::new()));

/// Process-wide cache used by [`PreciseProvider::shared`].
pub fn shared_cache() -> Arc<TableCache> {
    SHARED_CACHE.clone()
}

/// Warm the process-wide cache. Call once at the composition root.
pub fn warm_up() -> Result<(), EphemerisError> {
    SHARED_CACHE.warm_up()
}

pub fn is_warm() -> bool {
    SHARED_CACHE.is_warm()
}

/// Keplerian provider bound to a table cache.
#[derive(Debug, Clone)]
pub struct PreciseProvider {
    cache: Arc<TableCache>,
}

impl PreciseProvider {
    pub fn shared() -> Self {
        Self::with_cache(shared_cache())
    }

    pub fn with_cache(cache: Arc<TableCache>) -> Self {
        Self { cache }
    }
}

impl EphemerisProvider for PreciseProvider {
    fn tag(&self) -> ProviderTag {
        ProviderTag::Keplerian
    }

    fn compute(&self, request: &EphemerisRequest) -> Result<Option<AstronomicalCore>, EphemerisError> {
        let Some(tables) = self.cache.get() else {
            return Ok(None);
        };
        let Some(jd) = request.jd else {
            return Ok(None);
        };

        let longitudes = tables.longitudes(jd);
        if let Some((planet, lon)) = longitudes.iter().find(|(_, lon)| !lon.is_finite()) {
            return Err(EphemerisError::ProviderFailed {
                provider: ProviderTag::Keplerian.as_str(),
                reason: format!("non-finite longitude for {}: {lon}", planet.as_str()),
            });
        }
        // The rising sign needs both a clock time and a place.
        let ascendant = match (request.time_known, request.place.as_ref()) {
            (true, Some(place)) => Some(tables.ascendant(jd, place)),
            _ => None,
        };
        Ok(Some(AstronomicalCore::from_longitudes(
            ProviderTag::Keplerian,
            longitudes,
            ascendant,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::super::julian::calendar_to_jd;
    use super::*;
    use crate::zodiac::ZodiacSign;

    fn tables() -> KeplerTables {
        KeplerTables::build().unwrap()
    }

    fn angular_gap(a: f64, b: f64) -> f64 {
        let d = normalize_degrees(a - b);
        d.min(360.0 - d)
    }

    #[test]
    fn sun_near_known_positions() {
        let t = tables();
        // 1992 Oct 13.0 TD: apparent Sun ≈ 199.9° (Meeus example 25.a)
        let lons = t.longitudes(calendar_to_jd(1992, 10, 13.0));
        assert!(angular_gap(lons[&Planet::Sun], 199.9) < 0.5);
    }

    #[test]
    fn moon_near_meeus_example() {
        let t = tables();
        // 1992 April 12.0 TD: Moon λ ≈ 133.17° (Meeus example 47.a)
        let lons = t.longitudes(calendar_to_jd(1992, 4, 12.0));
        assert!(angular_gap(lons[&Planet::Moon], 133.17) < 1.0);
    }

    #[test]
    fn outer_planets_land_in_expected_signs() {
        let t = tables();
        // January 2000: Jupiter in Aries, Saturn in Taurus (tropical).
        let lons = t.longitudes(calendar_to_jd(2000, 1, 15.0));
        assert_eq!(ZodiacSign::from_longitude(lons[&Planet::Jupiter]), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(lons[&Planet::Saturn]), ZodiacSign::Taurus);
    }

    #[test]
    fn ascendant_requires_time_and_place() {
        let cache = Arc::new(TableCache::new());
        cache.warm_up().unwrap();
        let provider = PreciseProvider::with_cache(cache);
        let place = super::super::gazetteer::lookup("london").unwrap();

        let without_time = EphemerisRequest {
            jd: Some(J2000),
            time_known: false,
            place: Some(place),
        };
        let core = provider.compute(&without_time).unwrap().unwrap();
        assert!(core.ascendant.is_none());

        let with_time = EphemerisRequest {
            time_known: true,
            ..without_time
        };
        let core = provider.compute(&with_time).unwrap().unwrap();
        let asc = core.ascendant.unwrap();
        assert!((0.0..360.0).contains(&asc));
        assert_eq!(core.houses.unwrap().len(), 12);
    }

    #[test]
    fn cache_warm_up_is_idempotent() {
        let cache = TableCache::new();
        assert!(!cache.is_warm());
        cache.warm_up().unwrap();
        cache.warm_up().unwrap();
        assert!(cache.is_warm());
    }

    #[test]
    fn concurrent_warm_up_keeps_one_table() {
        let cache = Arc::new(TableCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let c = Arc::clone(&cache);
                std::thread::spawn(move || c.warm_up())
            })
            .collect();
        for h in handles {
            h.join().unwrap().unwrap();
        }
        assert!(cache.is_warm());
    }

    #[test]
    fn cold_cache_reports_unavailable() {
        let provider = PreciseProvider::with_cache(Arc::new(TableCache::new()));
        let req = EphemerisRequest {
            jd: Some(J2000),
            time_known: false,
            place: None,
        };
        assert!(provider.compute(&req).unwrap().is_none());
    }
}
