//! Payload adapters for the Saltglow engine.
//!
//! Responsibilities:
//! - Decode hourly forecast payloads, both the native shape and the QWeather
//!   `hourly` response.
//! - Synthesise heuristic forecast hours and pad short forecasts.
//! - Decode on-site sensor snapshots.
//!
//! Boundaries:
//! - No network or storage I/O; callers hand over payload text.
//! - Do not encode scoring rules (those live in `saltglow-scorer`).

#![forbid(unsafe_code)]

mod error;
pub mod forecast;
pub mod qweather;
pub mod sensor;

pub use error::{ForecastParseError, SensorParseError};
pub use forecast::{
    FORECAST_TARGET_HOURS, heuristic_hour, pad_forecast, parse_forecast_json, synthetic_forecast,
};
pub use qweather::parse_qweather_hourly;
pub use sensor::parse_sensor_json;
