//! Score a single hour of forecast weather.
//!
//! The `WeatherScorer` trait assigns a `0..=100` favourability score to a
//! [`WeatherHourSample`](crate::WeatherHourSample). Window search, daily
//! predictions and the realtime index all take a scorer, so alternative
//! heuristics can be swapped in without touching the aggregation.

use crate::{MAX_SCORE, WeatherHourSample};

/// Calculate a photogenic-weather score for one forecast hour.
///
/// Higher scores indicate conditions that bring out the lake's colour.
/// Implementations must be thread-safe (`Send` + `Sync`) and infallible:
/// every sample, however odd, maps to a score in `0..=100`.
///
/// Use [`sanitise`] to clamp raw heuristic sums.
///
/// # Examples
///
/// ```rust
/// use chrono::DateTime;
/// use saltglow_core::{WeatherHourSample, WeatherScorer, scorer::sanitise};
///
/// struct Flat;
///
/// impl WeatherScorer for Flat {
///     fn score(&self, _sample: &WeatherHourSample) -> u8 {
///         sanitise(140.0)
///     }
/// }
///
/// let time = DateTime::parse_from_rfc3339("2025-06-01T12:00:00+08:00").unwrap();
/// assert_eq!(Flat.score(&WeatherHourSample::neutral(time)), 100);
/// ```
pub trait WeatherScorer: Send + Sync {
    /// Return a score for `sample`.
    fn score(&self, sample: &WeatherHourSample) -> u8;
}

/// Clamp a raw score into `0..=100`.
///
/// Returns `0` for non-finite values. Fractions are truncated, so callers
/// that need rounding must round first.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped into the u8 range before the cast"
)]
#[must_use]
pub const fn sanitise(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.clamp(0.0, MAX_SCORE as f64) as u8
}
