//! Hourly weather samples and the averaged factors derived from them.
//!
//! Samples are produced by an external forecast source and are read-only to
//! the engine. Missing numeric fields in a payload fall back to the neutral
//! values the heuristics were tuned around (UV 0, cloud 50 %, wind 3 m/s,
//! humidity 60 %, 25 °C) so that a sparse payload scores as "average" rather
//! than as a disaster.

use crate::Timestamp;

/// Neutral cloud cover assumed when a payload omits it.
pub const DEFAULT_CLOUD: f64 = 50.0;
/// Neutral wind speed assumed when a payload omits it.
pub const DEFAULT_WIND_SPEED: f64 = 3.0;
/// Neutral relative humidity assumed when a payload omits it.
pub const DEFAULT_HUMIDITY: f64 = 60.0;
/// Neutral air temperature assumed when a payload omits it.
pub const DEFAULT_TEMP: f64 = 25.0;

/// One hour of forecast weather.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use saltglow_core::WeatherHourSample;
///
/// let time = DateTime::parse_from_rfc3339("2025-06-01T12:00:00+08:00").unwrap();
/// let sample = WeatherHourSample::neutral(time).with_uv_index(5).with_cloud(10.0);
/// assert_eq!(sample.uv_index, 5);
/// assert_eq!(sample.humidity, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeatherHourSample {
    /// Start of the forecast hour.
    pub time: Timestamp,
    /// Air temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(default = "default_temp"))]
    pub temp: f64,
    /// Relative humidity in percent.
    #[cfg_attr(feature = "serde", serde(default = "default_humidity"))]
    pub humidity: f64,
    /// Wind speed in metres per second.
    #[cfg_attr(feature = "serde", serde(default = "default_wind_speed"))]
    pub wind_speed: f64,
    /// UV index.
    #[cfg_attr(feature = "serde", serde(default))]
    pub uv_index: i32,
    /// Cloud cover in percent.
    #[cfg_attr(feature = "serde", serde(default = "default_cloud"))]
    pub cloud: f64,
    /// Precipitation in millimetres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub precip: f64,
    /// Visibility in kilometres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: f64,
}

#[cfg(feature = "serde")]
const fn default_temp() -> f64 {
    DEFAULT_TEMP
}

#[cfg(feature = "serde")]
const fn default_humidity() -> f64 {
    DEFAULT_HUMIDITY
}

#[cfg(feature = "serde")]
const fn default_wind_speed() -> f64 {
    DEFAULT_WIND_SPEED
}

#[cfg(feature = "serde")]
const fn default_cloud() -> f64 {
    DEFAULT_CLOUD
}

impl WeatherHourSample {
    /// Build a sample holding the neutral defaults at `time`.
    #[must_use]
    pub const fn neutral(time: Timestamp) -> Self {
        Self {
            time,
            temp: DEFAULT_TEMP,
            humidity: DEFAULT_HUMIDITY,
            wind_speed: DEFAULT_WIND_SPEED,
            uv_index: 0,
            cloud: DEFAULT_CLOUD,
            precip: 0.0,
            visibility: 0.0,
        }
    }

    /// Set the air temperature.
    #[must_use]
    pub const fn with_temp(mut self, temp: f64) -> Self {
        self.temp = temp;
        self
    }

    /// Set the relative humidity.
    #[must_use]
    pub const fn with_humidity(mut self, humidity: f64) -> Self {
        self.humidity = humidity;
        self
    }

    /// Set the wind speed.
    #[must_use]
    pub const fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = wind_speed;
        self
    }

    /// Set the UV index.
    #[must_use]
    pub const fn with_uv_index(mut self, uv_index: i32) -> Self {
        self.uv_index = uv_index;
        self
    }

    /// Set the cloud cover.
    #[must_use]
    pub const fn with_cloud(mut self, cloud: f64) -> Self {
        self.cloud = cloud;
        self
    }

    /// Set the precipitation.
    #[must_use]
    pub const fn with_precip(mut self, precip: f64) -> Self {
        self.precip = precip;
        self
    }

    /// Set the visibility.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Weather conditions averaged over a two-hour window.
///
/// Integer fields hold the truncated mean, matching how the values have
/// always been reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeatherFactors {
    /// Mean cloud cover in percent.
    pub cloud: i32,
    /// Mean air temperature in degrees Celsius.
    pub temp: f64,
    /// Mean relative humidity in percent.
    pub humidity: i32,
    /// Mean UV index.
    pub uv_index: i32,
    /// Mean wind speed in metres per second.
    pub wind_speed: f64,
    /// Mean precipitation in millimetres.
    pub precip: f64,
}
