//! QWeather hourly forecast responses.
//!
//! The `/v7/weather/24h` endpoint returns every numeric field as text and
//! stamps hours without seconds (`2025-06-01T10:00+08:00`). Optional fields
//! the endpoint omits decode as zero.

use chrono::DateTime;
use saltglow_core::{Timestamp, WeatherHourSample};
use serde::Deserialize;

use crate::ForecastParseError;

const SUCCESS_CODE: &str = "200";
const MINUTE_PRECISION: &str = "%Y-%m-%dT%H:%M%:z";

#[derive(Debug, Deserialize)]
struct HourlyResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    hourly: Vec<HourlyItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HourlyItem {
    fx_time: String,
    temp: String,
    humidity: String,
    #[serde(default)]
    uv_index: Option<String>,
    #[serde(default)]
    wind_speed: Option<String>,
    #[serde(default)]
    cloud: Option<String>,
    #[serde(default)]
    precip: Option<String>,
    #[serde(default)]
    vis: Option<String>,
}

impl HourlyItem {
    fn into_sample(self) -> Result<WeatherHourSample, ForecastParseError> {
        let humidity = number("humidity", &self.humidity)?;
        let cloud = optional_number("cloud", self.cloud.as_deref())?;
        Ok(WeatherHourSample {
            time: parse_time(&self.fx_time)?,
            temp: number("temp", &self.temp)?,
            humidity: humidity.trunc(),
            wind_speed: optional_number("windSpeed", self.wind_speed.as_deref())?,
            uv_index: uv_index(self.uv_index.as_deref())?,
            cloud: cloud.trunc(),
            precip: optional_number("precip", self.precip.as_deref())?,
            visibility: optional_number("vis", self.vis.as_deref())?,
        })
    }
}

/// Decode a QWeather hourly response into forecast samples.
///
/// A missing `hourly` list yields no samples.
///
/// # Errors
/// Returns [`ForecastParseError::Upstream`] when the response carries a
/// status code other than `"200"`, [`ForecastParseError::InvalidNumber`] or
/// [`ForecastParseError::InvalidTime`] for unreadable fields, and
/// [`ForecastParseError::Json`] for malformed JSON.
///
/// # Examples
/// ```
/// use saltglow_data::parse_qweather_hourly;
///
/// let payload = r#"{"code": "200", "hourly": [{
///     "fxTime": "2025-06-01T10:00+08:00", "temp": "27", "humidity": "48",
///     "windSpeed": "11", "cloud": "15", "precip": "0.0", "vis": "16"
/// }]}"#;
/// let hours = parse_qweather_hourly(payload).unwrap();
/// assert_eq!(hours[0].temp, 27.0);
/// assert_eq!(hours[0].visibility, 16.0);
/// assert_eq!(hours[0].uv_index, 0);
/// ```
pub fn parse_qweather_hourly(payload: &str) -> Result<Vec<WeatherHourSample>, ForecastParseError> {
    let response: HourlyResponse = serde_json::from_str(payload)?;
    if let Some(code) = response.code.filter(|code| code != SUCCESS_CODE) {
        return Err(ForecastParseError::Upstream { code });
    }
    let hours = response
        .hourly
        .into_iter()
        .map(HourlyItem::into_sample)
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("decoded {} QWeather forecast hours", hours.len());
    Ok(hours)
}

fn parse_time(value: &str) -> Result<Timestamp, ForecastParseError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, MINUTE_PRECISION))
        .map_err(|source| ForecastParseError::InvalidTime {
            value: value.to_owned(),
            source,
        })
}

fn number(field: &'static str, value: &str) -> Result<f64, ForecastParseError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| ForecastParseError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}

fn optional_number(field: &'static str, value: Option<&str>) -> Result<f64, ForecastParseError> {
    value.map_or(Ok(0.0), |text| number(field, text))
}

fn uv_index(value: Option<&str>) -> Result<i32, ForecastParseError> {
    value.map_or(Ok(0), |text| {
        text.trim()
            .parse::<i32>()
            .map_err(|_| ForecastParseError::InvalidNumber {
                field: "uvIndex",
                value: text.to_owned(),
            })
    })
}
