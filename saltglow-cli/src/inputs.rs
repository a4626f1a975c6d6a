//! Loading command inputs from disk.
//!
//! Required inputs fail the command when they cannot be read. Optional inputs
//! (frames, forecasts, sensor snapshots) degrade to "unavailable" with a
//! warning so the engine can fall back to its defaults.

use camino::Utf8Path;
use image::RgbImage;
use saltglow_core::{SensorReading, WeatherHourSample};
use saltglow_data::{parse_forecast_json, parse_qweather_hourly, parse_sensor_json};
use saltglow_scorer::decode_image;
use serde::de::DeserializeOwned;

use crate::CliError;
use crate::fs::{read_bytes, read_text};

/// Read and decode a required JSON file.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let text = read_text(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a frame, treating unreadable or undecodable files as absent.
pub(crate) fn load_image(path: Option<&Utf8Path>) -> Option<RgbImage> {
    let file = path?;
    read_bytes(file).map_or_else(
        |err| {
            log::warn!("ignoring unreadable frame {file}: {err}");
            None
        },
        |bytes| decode_image(&bytes),
    )
}

/// Decode a forecast in the native or QWeather shape.
///
/// Unreadable or malformed files yield an empty forecast.
pub(crate) fn load_forecast(path: Option<&Utf8Path>) -> Vec<WeatherHourSample> {
    let Some(file) = path else {
        return Vec::new();
    };
    read_text(file)
        .map_err(|err| err.to_string())
        .and_then(|text| {
            parse_forecast_json(&text)
                .or_else(|_| parse_qweather_hourly(&text))
                .map_err(|err| err.to_string())
        })
        .unwrap_or_else(|err| {
            log::warn!("ignoring forecast {file}: {err}");
            Vec::new()
        })
}

/// Decode a sensor snapshot, treating any failure as no reading.
pub(crate) fn load_sensor(path: Option<&Utf8Path>) -> Option<SensorReading> {
    let file = path?;
    read_text(file)
        .map_err(|err| err.to_string())
        .and_then(|text| parse_sensor_json(&text).map_err(|err| err.to_string()))
        .unwrap_or_else(|err| {
            log::warn!("ignoring sensor snapshot {file}: {err}");
            None
        })
}
