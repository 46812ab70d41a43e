use crate::{Config, WeatherSnapshot, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// How a single query can fail. All variants recover into the error banner;
/// none are fatal.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Validation failure: empty input, rejected before any network activity.
    #[error("Please enter a city name")]
    EmptyCity,

    /// Well-formed upstream response indicating the query failed
    /// (unknown city, bad credential). Carries the upstream message.
    #[error("{message}")]
    Upstream { message: String },

    /// The HTTP exchange never completed, or the success body was
    /// malformed. No structured detail is available to the user, so the
    /// display message stays generic.
    #[error("Failed to fetch weather data")]
    Transport { detail: String },
}

impl QueryError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        QueryError::Transport {
            detail: err.to_string(),
        }
    }
}

/// Capability to fetch the current conditions for a city.
///
/// The query controller only talks to this trait, so tests can inject
/// deterministic success/failure without a real network dependency.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current_weather(&self, city: &str) -> Result<WeatherSnapshot, QueryError>;
}

/// Construct the OpenWeather provider from config.
///
/// A missing credential is a configuration error here, before any request
/// is dispatched. It never reaches the upstream API as an auth failure.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.validated_api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}
