//! On-site sensor snapshots.

use crate::Timestamp;

/// Latest reading from a lake's monitoring station.
///
/// Every measurement is optional because stations report partial snapshots;
/// absent values simply do not take part in score fusion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// Air temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub air_temp: Option<f64>,
    /// Relative humidity in percent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub humidity: Option<f64>,
    /// Wind speed in metres per second.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wind_speed: Option<f64>,
    /// Water temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub water_temp: Option<f64>,
    /// Salinity reading.
    #[cfg_attr(feature = "serde", serde(default))]
    pub salinity: Option<f64>,
    /// Dissolved oxygen.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dissolved_oxygen: Option<f64>,
    /// Total dissolved solids.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tds: Option<f64>,
    /// Turbidity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub turbidity: Option<f64>,
    /// When the snapshot was taken.
    pub captured_at: Timestamp,
}

impl SensorReading {
    /// Create an empty reading captured at `captured_at`.
    ///
    /// # Examples
    /// ```
    /// use chrono::DateTime;
    /// use saltglow_core::SensorReading;
    ///
    /// let at = DateTime::parse_from_rfc3339("2025-06-01T09:30:00+08:00").unwrap();
    /// let reading = SensorReading::empty(at);
    /// assert!(reading.is_empty());
    /// ```
    #[must_use]
    pub const fn empty(captured_at: Timestamp) -> Self {
        Self {
            air_temp: None,
            humidity: None,
            wind_speed: None,
            water_temp: None,
            salinity: None,
            dissolved_oxygen: None,
            tds: None,
            turbidity: None,
            captured_at,
        }
    }

    /// Report whether no measurement is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.air_temp.is_none()
            && self.humidity.is_none()
            && self.wind_speed.is_none()
            && self.water_temp.is_none()
            && self.salinity.is_none()
            && self.dissolved_oxygen.is_none()
            && self.tds.is_none()
            && self.turbidity.is_none()
    }
}
