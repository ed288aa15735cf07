//! Built-in gazetteer: enough places to resolve an ascendant without a network lookup.
//!
//! Offsets are standard time (no daylight saving); precision beyond the rising sign
//! is not a goal.

use crate::intent::strip_diacritics;
use serde::Serialize;

/// A resolved birth place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Place {
    pub name: &'static str,
    /// Geographic latitude, degrees north positive.
    pub latitude: f64,
    /// Geographic longitude, degrees east positive.
    pub longitude: f64,
    /// Fixed standard-time offset from UTC in hours.
    pub utc_offset: f64,
}

const PLACES: &[Place] = &[
    Place { name: "sao paulo", latitude: -23.55, longitude: -46.63, utc_offset: -3.0 },
    Place { name: "rio de janeiro", latitude: -22.91, longitude: -43.17, utc_offset: -3.0 },
    Place { name: "belo horizonte", latitude: -19.92, longitude: -43.94, utc_offset: -3.0 },
    Place { name: "brasilia", latitude: -15.79, longitude: -47.88, utc_offset: -3.0 },
    Place { name: "salvador", latitude: -12.97, longitude: -38.50, utc_offset: -3.0 },
    Place { name: "recife", latitude: -8.05, longitude: -34.88, utc_offset: -3.0 },
    Place { name: "fortaleza", latitude: -3.73, longitude: -38.52, utc_offset: -3.0 },
    Place { name: "curitiba", latitude: -25.43, longitude: -49.27, utc_offset: -3.0 },
    Place { name: "porto alegre", latitude: -30.03, longitude: -51.23, utc_offset: -3.0 },
    Place { name: "manaus", latitude: -3.12, longitude: -60.02, utc_offset: -4.0 },
    Place { name: "lisboa", latitude: 38.72, longitude: -9.14, utc_offset: 0.0 },
    Place { name: "lisbon", latitude: 38.72, longitude: -9.14, utc_offset: 0.0 },
    Place { name: "porto", latitude: 41.15, longitude: -8.61, utc_offset: 0.0 },
    Place { name: "buenos aires", latitude: -34.60, longitude: -58.38, utc_offset: -3.0 },
    Place { name: "new york", latitude: 40.71, longitude: -74.01, utc_offset: -5.0 },
    Place { name: "london", latitude: 51.51, longitude: -0.13, utc_offset: 0.0 },
    Place { name: "madrid", latitude: 40.42, longitude: -3.70, utc_offset: 1.0 },
    Place { name: "paris", latitude: 48.86, longitude: 2.35, utc_offset: 1.0 },
    Place { name: "berlin", latitude: 52.52, longitude: 13.40, utc_offset: 1.0 },
    Place { name: "new delhi", latitude: 28.61, longitude: 77.21, utc_offset: 5.5 },
    Place { name: "mumbai", latitude: 19.08, longitude: 72.88, utc_offset: 5.5 },
    Place { name: "tokyo", latitude: 35.68, longitude: 139.69, utc_offset: 9.0 },
    Place { name: "sydney", latitude: -33.87, longitude: 151.21, utc_offset: 10.0 },
];

/// Look up a place by free-text name. Matches the city part before the first comma,
/// case- and accent-insensitively ("São Paulo, SP" → "sao paulo").
pub fn lookup(raw: &str) -> Option<Place> {
    let city = raw.split(',').next().unwrap_or(raw);
    let key = strip_diacritics(&city.trim().to_lowercase());
    let key = key.split_whitespace().collect::<Vec<_>>().join(" ");
    if key.is_empty() {
        return None;
    }
    PLACES.iter().find(|p| p.name == key).copied()
}
