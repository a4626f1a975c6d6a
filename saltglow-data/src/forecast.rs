//! Native forecast payloads and heuristic forecast hours.
//!
//! The native payload is either a bare list of hourly samples or an object
//! holding them under `hours` (optionally next to a `source` label). When a
//! provider returns fewer hours than requested, the remainder is filled with
//! heuristic hours that follow a simple diurnal pattern.

use chrono::{DurationRound, TimeDelta, Timelike};
use saltglow_core::{Timestamp, WeatherHourSample};
use serde::Deserialize;

use crate::ForecastParseError;

/// Number of hours a padded forecast covers.
pub const FORECAST_TARGET_HOURS: usize = 48;

const BASE_TEMP: f64 = 22.0;
const BASE_HUMIDITY: f64 = 40.0;
const BASE_WIND: f64 = 3.0;
const BRIGHT_HOURS: std::ops::RangeInclusive<u32> = 10..=16;
const CLEAR_HOURS: std::ops::RangeInclusive<u32> = 12..=16;

#[derive(Deserialize)]
#[serde(untagged)]
enum ForecastPayload {
    Hours(Vec<WeatherHourSample>),
    Wrapped { hours: Vec<WeatherHourSample> },
}

/// Decode a native forecast payload.
///
/// # Errors
/// Returns [`ForecastParseError::Json`] when the text is neither a list of
/// samples nor an object with an `hours` list.
///
/// # Examples
/// ```
/// use saltglow_data::parse_forecast_json;
///
/// let payload = r#"{"source": "dummy", "hours": [
///     {"time": "2025-06-01T10:00:00+08:00", "uvIndex": 5, "cloud": 10}
/// ]}"#;
/// let hours = parse_forecast_json(payload).unwrap();
/// assert_eq!(hours.len(), 1);
/// assert_eq!(hours[0].humidity, 60.0);
/// ```
pub fn parse_forecast_json(payload: &str) -> Result<Vec<WeatherHourSample>, ForecastParseError> {
    let hours = match serde_json::from_str(payload)? {
        ForecastPayload::Hours(hours) | ForecastPayload::Wrapped { hours } => hours,
    };
    log::debug!("decoded {} forecast hours", hours.len());
    Ok(hours)
}

/// Heuristic weather for `time`, the `step`-th synthesised hour.
///
/// Temperature and humidity cycle with the step; UV and cloud follow the
/// clock, with more sun around midday.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "offsets are added to base values")]
pub fn heuristic_hour(time: Timestamp, step: u32) -> WeatherHourSample {
    let hour = time.hour();
    WeatherHourSample::neutral(time)
        .with_temp(BASE_TEMP + f64::from(step.rem_euclid(6)))
        .with_humidity(BASE_HUMIDITY + f64::from(step.rem_euclid(20)))
        .with_uv_index(if BRIGHT_HOURS.contains(&hour) { 6 } else { 1 })
        .with_wind_speed(BASE_WIND + f64::from(step.rem_euclid(4)))
        .with_cloud(if CLEAR_HOURS.contains(&hour) { 20.0 } else { 50.0 })
        .with_precip(0.0)
        .with_visibility(10.0)
}

/// Synthesise `count` consecutive heuristic hours starting at `start`.
///
/// `start` is truncated to the hour.
#[must_use]
pub fn synthetic_forecast(start: Timestamp, count: usize) -> Vec<WeatherHourSample> {
    let anchor = on_the_hour(start);
    (0_u32..)
        .zip(0..count)
        .map(|(step, _)| heuristic_hour(anchor + TimeDelta::hours(i64::from(step)), step))
        .collect()
}

/// Extend `samples` with heuristic hours until it holds `target` entries.
///
/// Padding continues hourly after the provider's hours, counted from the
/// first sample's time, or from `now` truncated to the hour when there are
/// none. Forecasts already long enough are returned unchanged.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use saltglow_data::pad_forecast;
///
/// let now = DateTime::parse_from_rfc3339("2025-06-01T08:20:00+08:00").unwrap();
/// let padded = pad_forecast(Vec::new(), 48, now);
/// assert_eq!(padded.len(), 48);
/// assert_eq!(padded[0].time.to_rfc3339(), "2025-06-01T08:00:00+08:00");
/// ```
#[must_use]
pub fn pad_forecast(
    mut samples: Vec<WeatherHourSample>,
    target: usize,
    now: Timestamp,
) -> Vec<WeatherHourSample> {
    let provided = samples.len();
    if provided >= target {
        return samples;
    }
    let anchor = samples
        .first()
        .map_or_else(|| on_the_hour(now), |sample| sample.time);
    let offset = i64::try_from(provided).unwrap_or(i64::MAX);
    let missing = target - provided;
    log::info!("padding forecast with {missing} heuristic hours after {provided} provided");
    samples.extend((0_u32..).zip(0..missing).map(|(step, _)| {
        let hours = offset.saturating_add(i64::from(step));
        heuristic_hour(anchor + TimeDelta::hours(hours), step)
    }));
    samples
}

fn on_the_hour(time: Timestamp) -> Timestamp {
    time.duration_trunc(TimeDelta::hours(1)).unwrap_or(time)
}
