//! Fuse on-site sensor readings into a score.
//!
//! Each present measurement contributes an independently clamped nudge. The
//! preferences are dry air, a moderate breeze, comfortable air and water
//! temperatures, and high salinity.

use saltglow_core::{Locale, SensorFactors, SensorReading};

use crate::phrases::{Measurement, measurement, phrases};
use crate::round_score;

/// Humidity that contributes no adjustment, in percent.
pub const NEUTRAL_HUMIDITY: f64 = 60.0;
/// Wind speed that earns the full wind bonus, in metres per second.
pub const PREFERRED_WIND: f64 = 4.0;
/// Air temperature that earns the full bonus, in degrees Celsius.
pub const PREFERRED_AIR_TEMP: f64 = 28.0;
/// Water temperature that earns the full bonus, in degrees Celsius.
pub const PREFERRED_WATER_TEMP: f64 = 25.0;
/// Salinity above which a bonus accrues.
pub const SALINITY_BASELINE: f64 = 20.0;

/// Largest magnitude of the humidity term.
pub const HUMIDITY_LIMIT: f64 = 4.0;
/// Largest magnitude of the wind and temperature terms.
pub const DISTANCE_LIMIT: f64 = 2.0;
/// Largest salinity bonus.
pub const SALINITY_LIMIT: f64 = 2.0;

/// Outcome of fusing a reading into a score.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorFusion {
    /// Adjusted score in `0..=100`.
    pub score: u8,
    /// Localised description of the readings, when any were reported.
    pub fragment: Option<String>,
    /// Reading to record in the factors, when one was fused.
    pub factors: Option<SensorFactors>,
}

#[expect(clippy::float_arithmetic, reason = "peaked distance term")]
fn distance_term(value: f64, preferred: f64, slope: f64) -> f64 {
    (DISTANCE_LIMIT - (value - preferred).abs() * slope).clamp(-DISTANCE_LIMIT, DISTANCE_LIMIT)
}

/// Sum the per-measurement adjustments of `reading`.
///
/// Absent measurements contribute nothing. Each term is clamped on its own
/// and the total is left unclamped.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use saltglow_core::SensorReading;
/// use saltglow_scorer::sensor_adjustment;
///
/// let at = DateTime::parse_from_rfc3339("2025-06-01T09:30:00+08:00").unwrap();
/// let mut reading = SensorReading::empty(at);
/// reading.humidity = Some(40.0);
/// assert_eq!(sensor_adjustment(&reading), 1.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "sum of scaled sensor terms")]
pub fn sensor_adjustment(reading: &SensorReading) -> f64 {
    let humidity = reading.humidity.map_or(0.0, |value| {
        ((NEUTRAL_HUMIDITY - value) * 0.05).clamp(-HUMIDITY_LIMIT, HUMIDITY_LIMIT)
    });
    let wind = reading
        .wind_speed
        .map_or(0.0, |value| distance_term(value, PREFERRED_WIND, 0.5));
    let air = reading
        .air_temp
        .map_or(0.0, |value| distance_term(value, PREFERRED_AIR_TEMP, 0.2));
    let water = reading
        .water_temp
        .map_or(0.0, |value| distance_term(value, PREFERRED_WATER_TEMP, 0.2));
    let salinity = reading.salinity.map_or(0.0, |value| {
        ((value - SALINITY_BASELINE) * 0.1).clamp(0.0, SALINITY_LIMIT)
    });
    humidity + wind + air + water + salinity
}

/// Describe the wind, humidity, water temperature, and salinity readings.
///
/// Returns `None` when none of the four is present.
#[must_use]
pub fn sensor_fragment(reading: &SensorReading, locale: Locale) -> Option<String> {
    let parts: Vec<String> = [
        (Measurement::Wind, reading.wind_speed),
        (Measurement::Humidity, reading.humidity),
        (Measurement::WaterTemp, reading.water_temp),
        (Measurement::Salinity, reading.salinity),
    ]
    .into_iter()
    .filter_map(|(kind, value)| value.map(|present| measurement(locale, kind, present)))
    .collect();
    if parts.is_empty() {
        return None;
    }
    let table = phrases(locale);
    Some(format!(
        "{}{}{}",
        table.sensor_lead,
        parts.join(table.sensor_separator),
        table.terminator
    ))
}

/// Apply an optional reading to `score`.
///
/// Without a reading the score passes through untouched. With one, the
/// adjustment is added, the result rounded half to even and clamped, and the
/// reading recorded for the factors. A snapshot without measurements is
/// still recorded but leaves the score unchanged.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "score plus adjustment")]
pub fn fuse_sensor(score: u8, reading: Option<&SensorReading>, locale: Locale) -> SensorFusion {
    let Some(reading) = reading else {
        return SensorFusion {
            score,
            fragment: None,
            factors: None,
        };
    };
    let adjustment = if reading.is_empty() {
        log::debug!("sensor snapshot carries no measurements");
        0.0
    } else {
        sensor_adjustment(reading)
    };
    log::debug!("sensor adjustment {adjustment:+.2} applied to score {score}");
    SensorFusion {
        score: round_score(f64::from(score) + adjustment),
        fragment: sensor_fragment(reading, locale),
        factors: Some(reading.clone()),
    }
}
