//! Pure projection from [`QueryState`] to one of three visual modes.

use crate::condition::{ConditionIcon, description_for, icon_for};
use crate::controller::QueryState;
use crate::model::WeatherSnapshot;

/// Exactly one mode is produced per state: the error banner wins over a
/// stale result, and a populated result wins over the idle prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    /// Input-only: no error, no result yet.
    Idle,
    /// Error banner text.
    Error(String),
    /// Full current-conditions panel.
    Snapshot(SnapshotPanel),
}

/// Display-ready fields of the snapshot panel. All numeric formatting is
/// done here so the rendering layer only prints strings.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotPanel {
    pub city: String,
    pub country: String,
    /// "51.51, -0.13"
    pub coordinates: String,
    /// "15°C"
    pub temperature: String,
    pub feels_like: String,
    pub temp_min: String,
    pub temp_max: String,
    /// m/s converted to km/h, "18 km/h"
    pub wind: String,
    /// "72%"
    pub humidity: String,
    pub icon: ConditionIcon,
    pub description: String,
    /// "05:20 UTC"
    pub sunrise: String,
    pub sunset: String,
}

pub fn project(state: &QueryState) -> ViewMode {
    if let Some(message) = &state.error_message {
        return ViewMode::Error(message.clone());
    }
    if let Some(snapshot) = &state.result {
        return ViewMode::Snapshot(panel_for(snapshot));
    }
    ViewMode::Idle
}

fn panel_for(snap: &WeatherSnapshot) -> SnapshotPanel {
    SnapshotPanel {
        city: snap.city.clone(),
        country: snap.country.clone(),
        coordinates: format!("{:.2}, {:.2}", snap.lat, snap.lon),
        temperature: format_temp(snap.temp_c),
        feels_like: format_temp(snap.feels_like_c),
        temp_min: format_temp(snap.temp_min_c),
        temp_max: format_temp(snap.temp_max_c),
        wind: format_wind(snap.wind_speed_mps),
        humidity: format!("{}%", snap.humidity_pct),
        icon: icon_for(&snap.condition),
        description: description_for(&snap.condition),
        sunrise: snap.sunrise.format("%H:%M UTC").to_string(),
        sunset: snap.sunset.format("%H:%M UTC").to_string(),
    }
}

fn format_temp(celsius: f64) -> String {
    format!("{}°C", celsius.round() as i64)
}

fn format_wind(mps: f64) -> String {
    format!("{} km/h", (mps * 3.6).round() as i64)
}
