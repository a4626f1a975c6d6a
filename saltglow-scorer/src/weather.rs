//! Heuristic weather scoring.
//!
//! Two scorers are provided. The basic scorer is lenient and uses integer
//! truncation throughout; it drives best-window search and daily
//! predictions. The deep scorer adds precipitation and a low-cloud synergy
//! bonus; it drives the weather share of the realtime index.

use saltglow_core::{Locale, WeatherFactors, WeatherHourSample, WeatherScorer};

use crate::phrases::{forecast_body, phrases};
use crate::{round_score, truncate};

/// UV indices treated as ideal for colour.
pub const IDEAL_UV: std::ops::RangeInclusive<i32> = 4..=7;
/// Humidity the heuristics centre on, in percent.
pub const IDEAL_HUMIDITY: f64 = 60.0;
/// Temperature the heuristics centre on, in degrees Celsius.
pub const IDEAL_TEMP: f64 = 25.0;

/// Base score of the basic scorer.
pub const BASIC_BASE: i64 = 15;
/// Basic bonus for an ideal UV index.
pub const BASIC_UV_IDEAL_BONUS: i64 = 30;
/// Basic bonus per UV unit outside the ideal range.
pub const BASIC_UV_PER_UNIT: i64 = 8;
/// Basic cloud allowance.
pub const BASIC_CLOUD_MAX: i64 = 30;
/// Basic humidity allowance.
pub const BASIC_HUMIDITY_MAX: i64 = 20;
/// Basic wind allowance.
pub const BASIC_WIND_MAX: i64 = 20;
/// Basic temperature allowance.
pub const BASIC_TEMP_MAX: i64 = 15;

/// Deep bonus for an ideal UV index.
pub const DEEP_UV_IDEAL_BONUS: f64 = 28.0;
/// Deep cap on the UV contribution outside the ideal range.
pub const DEEP_UV_CAP: f64 = 24.0;
/// Deep cloud allowance.
pub const DEEP_CLOUD_MAX: f64 = 32.0;
/// Deep wind allowance.
pub const DEEP_WIND_MAX: f64 = 18.0;
/// Deep humidity allowance.
pub const DEEP_HUMIDITY_MAX: f64 = 18.0;
/// Deep temperature allowance.
pub const DEEP_TEMP_MAX: f64 = 12.0;
/// Largest deduction for precipitation.
pub const DEEP_PRECIP_FLOOR: f64 = -25.0;
/// Bonus for low cloud under ideal UV.
pub const DEEP_SYNERGY_BONUS: f64 = 6.0;
/// Cloud cover at or below which the synergy bonus applies.
pub const DEEP_SYNERGY_MAX_CLOUD: f64 = 30.0;

/// Lenient hourly scorer used for window search and daily predictions.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicWeatherScorer;

impl WeatherScorer for BasicWeatherScorer {
    fn score(&self, sample: &WeatherHourSample) -> u8 {
        basic_weather_score(sample)
    }
}

/// Stricter hourly scorer used for the realtime index.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeepWeatherScorer;

impl WeatherScorer for DeepWeatherScorer {
    fn score(&self, sample: &WeatherHourSample) -> u8 {
        deep_weather_score(sample)
    }
}

/// Score one hour with the lenient integer heuristic.
///
/// Each scaled term is truncated towards zero before it is subtracted from
/// its allowance, and negative allowances contribute nothing.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use saltglow_core::WeatherHourSample;
/// use saltglow_scorer::basic_weather_score;
///
/// let time = DateTime::parse_from_rfc3339("2025-06-01T12:00:00+08:00").unwrap();
/// let sample = WeatherHourSample::neutral(time).with_uv_index(2);
/// assert_eq!(basic_weather_score(&sample), 90);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "terms scale float readings")]
pub fn basic_weather_score(sample: &WeatherHourSample) -> u8 {
    let uv = i64::from(sample.uv_index);
    let uv_term = if IDEAL_UV.contains(&sample.uv_index) {
        BASIC_UV_IDEAL_BONUS
    } else {
        uv.saturating_mul(BASIC_UV_PER_UNIT).max(0)
    };
    let terms = [
        BASIC_BASE,
        uv_term,
        allowance(BASIC_CLOUD_MAX, sample.cloud * 0.4),
        allowance(
            BASIC_HUMIDITY_MAX,
            (IDEAL_HUMIDITY - sample.humidity).abs() * 0.4,
        ),
        allowance(BASIC_WIND_MAX, sample.wind_speed * 2.0),
        allowance(BASIC_TEMP_MAX, (IDEAL_TEMP - sample.temp).abs() * 0.4),
    ];
    let total = terms.iter().fold(0_i64, |acc, term| acc.saturating_add(*term));
    u8::try_from(total.clamp(0, 100)).unwrap_or(0)
}

fn allowance(max: i64, penalty: f64) -> i64 {
    max.saturating_sub(truncate(penalty)).max(0)
}

/// Score one hour with the stricter floating-point heuristic.
///
/// The sum is rounded half to even and clamped to `0..=100`.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "heuristic blends float readings")]
pub fn deep_weather_score(sample: &WeatherHourSample) -> u8 {
    let uv = f64::from(sample.uv_index);
    let ideal_uv = IDEAL_UV.contains(&sample.uv_index);

    let uv_term = if ideal_uv {
        DEEP_UV_IDEAL_BONUS
    } else {
        (uv * 4.5).clamp(0.0, DEEP_UV_CAP)
    };
    let cloud_term = (DEEP_CLOUD_MAX - sample.cloud * 0.4).max(0.0);
    let wind_term = (DEEP_WIND_MAX - sample.wind_speed.powf(1.2) * 2.5).max(0.0);
    let humidity_term = (DEEP_HUMIDITY_MAX - (IDEAL_HUMIDITY - sample.humidity).abs() * 0.3).max(0.0);
    let temp_term = (DEEP_TEMP_MAX - (IDEAL_TEMP - sample.temp).abs() * 0.6).max(0.0);
    let precip_term = (-sample.precip * 30.0).max(DEEP_PRECIP_FLOOR);
    let synergy = if sample.cloud <= DEEP_SYNERGY_MAX_CLOUD && ideal_uv {
        DEEP_SYNERGY_BONUS
    } else {
        0.0
    };

    round_score(
        uv_term + cloud_term + wind_term + humidity_term + temp_term + precip_term + synergy,
    )
}

fn cloud_label(cloud: i32) -> usize {
    match cloud {
        ..=20 => 0,
        21..=50 => 1,
        51..=80 => 2,
        _ => 3,
    }
}

fn uv_label(uv: i32) -> usize {
    match uv {
        7.. => 0,
        4..=6 => 1,
        _ => 2,
    }
}

fn wind_label(wind: f64) -> usize {
    if wind >= 8.0 {
        0
    } else if wind >= 4.0 {
        1
    } else {
        2
    }
}

fn label(labels: &[&'static str], index: usize) -> &'static str {
    labels.get(index).copied().unwrap_or_default()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "averages of i32 inputs fit back into i32"
)]
const fn truncate_i32(value: f64) -> i32 {
    truncate(value) as i32
}

/// Average two samples into weather factors.
///
/// Cloud, humidity, and UV hold the truncated mean.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "pairwise means")]
pub fn average_pair(first: &WeatherHourSample, second: &WeatherHourSample) -> WeatherFactors {
    WeatherFactors {
        cloud: truncate_i32((first.cloud + second.cloud) / 2.0),
        temp: (first.temp + second.temp) / 2.0,
        humidity: truncate_i32((first.humidity + second.humidity) / 2.0),
        uv_index: truncate_i32((f64::from(first.uv_index) + f64::from(second.uv_index)) / 2.0),
        wind_speed: (first.wind_speed + second.wind_speed) / 2.0,
        precip: (first.precip + second.precip) / 2.0,
    }
}

/// Explain a two-hour window and return its averaged factors.
///
/// The reason begins with the locale's forecast lead-in and labels cloud
/// cover, light, and wind.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use saltglow_core::{Locale, WeatherHourSample};
/// use saltglow_scorer::explain_weather_pair;
///
/// let time = DateTime::parse_from_rfc3339("2025-06-01T12:00:00+08:00").unwrap();
/// let a = WeatherHourSample::neutral(time).with_cloud(10.0).with_uv_index(5);
/// let b = a.clone().with_cloud(20.0);
/// let (reason, factors) = explain_weather_pair(&a, &b, Locale::English);
/// assert_eq!(factors.cloud, 15);
/// assert_eq!(
///     reason,
///     "Forecast: upcoming window clear, light moderate, wind light, favourable for algae colour."
/// );
/// ```
#[must_use]
pub fn explain_weather_pair(
    first: &WeatherHourSample,
    second: &WeatherHourSample,
    locale: Locale,
) -> (String, WeatherFactors) {
    let factors = average_pair(first, second);
    let table = phrases(locale);
    let body = forecast_body(
        locale,
        label(&table.cloud_labels, cloud_label(factors.cloud)),
        label(&table.uv_labels, uv_label(factors.uv_index)),
        label(&table.wind_labels, wind_label(factors.wind_speed)),
    );
    (format!("{}{body}", table.forecast_lead), factors)
}
