use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point-in-time weather reading for one city.
///
/// A read-only projection of the upstream response. Replaced wholesale on
/// each successful query, never merged or patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub wind_speed_mps: f64,
    pub humidity_pct: u8,
    /// Upstream categorical condition label, e.g. "Clear" or "Rain".
    pub condition: String,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}
