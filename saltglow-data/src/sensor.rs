//! On-site sensor snapshots.

use saltglow_core::SensorReading;

use crate::SensorParseError;

/// Decode the latest sensor snapshot of a lake.
///
/// The payload is a reading object or `null` when the station has not
/// reported yet. Unknown fields are ignored and absent measurements stay
/// unset.
///
/// # Errors
/// Returns [`SensorParseError::Json`] for malformed payloads, including a
/// reading without `captured_at`.
///
/// # Examples
/// ```
/// use saltglow_data::parse_sensor_json;
///
/// let reading = parse_sensor_json(
///     r#"{"captured_at": "2025-06-01T09:30:00+08:00", "wind_speed": 4.0}"#,
/// )
/// .unwrap()
/// .unwrap();
/// assert_eq!(reading.wind_speed, Some(4.0));
/// assert!(parse_sensor_json("null").unwrap().is_none());
/// ```
pub fn parse_sensor_json(payload: &str) -> Result<Option<SensorReading>, SensorParseError> {
    let reading: Option<SensorReading> = serde_json::from_str(payload)?;
    if reading.is_none() {
        log::debug!("sensor payload carried no reading");
    }
    Ok(reading)
}
