//! Core library for the `lookup` weather CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The provider abstraction and its OpenWeather implementation
//! - The query controller (input validation, dispatch/resolve state machine)
//! - Condition mappers and the pure render projection
//!
//! It is used by `lookup-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod controller;
pub mod model;
pub mod provider;
pub mod render;

pub use condition::{ConditionIcon, description_for, icon_for};
pub use config::Config;
pub use controller::{QueryController, QueryState};
pub use model::WeatherSnapshot;
pub use provider::{QueryError, WeatherProvider, provider_from_config};
pub use render::{SnapshotPanel, ViewMode, project};
