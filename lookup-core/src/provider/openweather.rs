use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::WeatherSnapshot;
use crate::provider::QueryError;

use super::WeatherProvider;

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current_weather(&self, city: &str) -> Result<WeatherSnapshot, QueryError> {
        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(QueryError::transport)?;

        let status = res.status();
        let body = res.text().await.map_err(QueryError::transport)?;

        if !status.is_success() {
            return Err(QueryError::Upstream {
                message: upstream_message(&body),
            });
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

/// Failure bodies look like `{"cod":"404","message":"city not found"}`.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

fn upstream_message(body: &str) -> String {
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| "City not found".to_string())
}

fn parse_current(body: &str) -> Result<WeatherSnapshot, QueryError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(QueryError::transport)?;

    let condition = parsed
        .weather
        .first()
        .map(|w| w.main.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(WeatherSnapshot {
        city: parsed.name,
        country: parsed.sys.country,
        lat: parsed.coord.lat,
        lon: parsed.coord.lon,
        temp_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        temp_min_c: parsed.main.temp_min,
        temp_max_c: parsed.main.temp_max,
        wind_speed_mps: parsed.wind.speed,
        humidity_pct: parsed.main.humidity,
        condition,
        sunrise: unix_to_utc(parsed.sys.sunrise),
        sunset: unix_to_utc(parsed.sys.sunset),
    })
}

fn unix_to_utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const LONDON_BODY: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "main": {"temp": 15.3, "feels_like": 14.8, "temp_min": 12.6, "temp_max": 17.1,
                 "pressure": 1012, "humidity": 72},
        "wind": {"speed": 5, "deg": 240},
        "dt": 1726400000,
        "sys": {"country": "GB", "sunrise": 1726377617, "sunset": 1726423274},
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn parses_full_current_response() {
        let snap = parse_current(LONDON_BODY).unwrap();

        assert_eq!(snap.city, "London");
        assert_eq!(snap.country, "GB");
        assert_eq!(snap.condition, "Clouds");
        assert_eq!(snap.temp_c, 15.3);
        assert_eq!(snap.feels_like_c, 14.8);
        assert_eq!(snap.temp_min_c, 12.6);
        assert_eq!(snap.temp_max_c, 17.1);
        assert_eq!(snap.wind_speed_mps, 5.0);
        assert_eq!(snap.humidity_pct, 72);
        assert!((snap.lat - 51.5085).abs() < 1e-9);
        assert!((snap.lon - -0.1257).abs() < 1e-9);
        // 1726377617 = 2024-09-15 05:20:17 UTC
        assert_eq!(snap.sunrise.hour(), 5);
        assert_eq!(snap.sunrise.minute(), 20);
    }

    #[test]
    fn missing_weather_entry_falls_back_to_unknown() {
        let body = LONDON_BODY.replacen(
            r#"[{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}]"#,
            "[]",
            1,
        );
        let snap = parse_current(&body).unwrap();
        assert_eq!(snap.condition, "Unknown");
    }

    #[test]
    fn malformed_success_body_is_a_transport_error() {
        let err = parse_current("not json at all").unwrap_err();
        assert!(matches!(err, QueryError::Transport { .. }));
        assert_eq!(err.to_string(), "Failed to fetch weather data");
    }

    #[test]
    fn upstream_message_prefers_payload_message() {
        let msg = upstream_message(r#"{"cod": "404", "message": "city not found"}"#);
        assert_eq!(msg, "city not found");
    }

    #[test]
    fn upstream_message_falls_back_when_absent() {
        assert_eq!(upstream_message(r#"{"cod": "404"}"#), "City not found");
        assert_eq!(upstream_message("<html>gateway error</html>"), "City not found");
    }
}
