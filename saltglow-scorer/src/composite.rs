//! Realtime photogenic index.
//!
//! When a frame is available the index blends the image score with the
//! weather score of the latest forecast window and then applies any sensor
//! reading. Without a frame the index falls back to a time-of-day heuristic
//! that peaks in the early afternoon.

use chrono::Timelike;
use image::RgbImage;
use saltglow_core::{
    ColorFeatures, CompositeScore, Factors, ImageFactors, Locale, SensorReading, Timestamp,
    WeatherFactors, WeatherHourSample, WeatherScorer,
};

use crate::phrases::phrases;
use crate::sensor::fuse_sensor;
use crate::window::pair_average;
use crate::{
    DeepWeatherScorer, compute_color_features, explain_features, explain_weather_pair,
    round_score, score_from_features,
};

/// Hour of day at which the fallback heuristic peaks.
pub const PEAK_HOUR: i64 = 14;
/// Lowest score the fallback heuristic reports.
pub const FALLBACK_MIN: i64 = 10;
/// Highest score the fallback heuristic reports.
pub const FALLBACK_MAX: i64 = 95;

/// Relative weights of the image and weather scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeWeights {
    /// Weight of the image score.
    pub image: f64,
    /// Weight of the weather score.
    pub weather: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            image: 0.75,
            weather: 0.25,
        }
    }
}

/// Inputs available for one realtime evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RealtimeInputs<'a> {
    /// Decoded frame, if one could be captured.
    pub image: Option<&'a RgbImage>,
    /// Forecast window to consult, normally the last two samples.
    pub weather: Option<(&'a WeatherHourSample, &'a WeatherHourSample)>,
    /// Latest on-site reading.
    pub sensor: Option<&'a SensorReading>,
    /// When the evaluation takes place.
    pub captured_at: Timestamp,
}

impl<'a> RealtimeInputs<'a> {
    /// Inputs with nothing available at `captured_at`.
    #[must_use]
    pub const fn new(captured_at: Timestamp) -> Self {
        Self {
            image: None,
            weather: None,
            sensor: None,
            captured_at,
        }
    }

    /// Attach a decoded frame.
    #[must_use]
    pub const fn with_image(mut self, image: &'a RgbImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Attach a forecast window.
    #[must_use]
    pub const fn with_weather(
        mut self,
        first: &'a WeatherHourSample,
        second: &'a WeatherHourSample,
    ) -> Self {
        self.weather = Some((first, second));
        self
    }

    /// Attach an on-site reading.
    #[must_use]
    pub const fn with_sensor(mut self, sensor: &'a SensorReading) -> Self {
        self.sensor = Some(sensor);
        self
    }
}

/// Select the forecast pair the realtime index consults.
///
/// That is the second-to-last and last samples, or the only sample twice.
/// Returns `None` for an empty forecast.
#[must_use]
pub fn trailing_pair(
    samples: &[WeatherHourSample],
) -> Option<(&WeatherHourSample, &WeatherHourSample)> {
    let last = samples.last()?;
    let first = samples.get(samples.len().saturating_sub(2))?;
    Some((first, last))
}

/// Compute the realtime index with the default weights and the deep
/// weather scorer.
#[must_use]
pub fn compute_realtime_index(inputs: &RealtimeInputs<'_>, locale: Locale) -> CompositeScore {
    compute_realtime_index_with(inputs, CompositeWeights::default(), &DeepWeatherScorer, locale)
}

/// Compute the realtime index with explicit weights and weather scorer.
///
/// Never fails: absent inputs select documented fallbacks.
#[must_use]
pub fn compute_realtime_index_with<S>(
    inputs: &RealtimeInputs<'_>,
    weights: CompositeWeights,
    scorer: &S,
    locale: Locale,
) -> CompositeScore
where
    S: WeatherScorer + ?Sized,
{
    inputs.image.map_or_else(
        || time_of_day_index(inputs.captured_at, locale),
        |image| image_index(image, inputs, weights, scorer, locale),
    )
}

#[expect(clippy::float_arithmetic, reason = "weighted blend of scores")]
fn image_index<S>(
    image: &RgbImage,
    inputs: &RealtimeInputs<'_>,
    weights: CompositeWeights,
    scorer: &S,
    locale: Locale,
) -> CompositeScore
where
    S: WeatherScorer + ?Sized,
{
    let table = phrases(locale);
    let features = compute_color_features(Some(image));
    let image_score = score_from_features(&features);
    let image_reason = explain_features(&features, locale);

    let (weather_score, weather_reason, weather_factors) = inputs.weather.map_or_else(
        || {
            log::warn!("no forecast window available, image score prevails");
            (
                0.0,
                table.weather_missing.to_owned(),
                WeatherFactors::default(),
            )
        },
        |(first, second)| {
            let (reason, factors) = explain_weather_pair(first, second, locale);
            let body = reason
                .strip_prefix(table.forecast_lead)
                .map_or_else(|| reason.clone(), str::to_owned);
            let score = pair_average(scorer.score(first), scorer.score(second));
            (score, body, factors)
        },
    );

    let blended =
        round_score(weights.image * f64::from(image_score) + weights.weather * weather_score);
    let fusion = fuse_sensor(blended, inputs.sensor, locale);

    let mut reason = format!("{image_reason}{}{weather_reason}", table.weather_reference);
    if let Some(fragment) = &fusion.fragment {
        reason.push_str(fragment);
    }
    log::debug!(
        "realtime index: image {image_score}, weather {weather_score:.1}, final {}",
        fusion.score
    );

    CompositeScore::new(
        fusion.score,
        reason,
        Factors {
            image_analysis: ImageFactors::from(features),
            weather: Some(weather_factors),
            sensor: fusion.factors,
        },
    )
}

/// Score implied by the hour of day alone.
///
/// # Examples
/// ```
/// use saltglow_scorer::composite::time_of_day_score;
///
/// assert_eq!(time_of_day_score(14), 95);
/// assert_eq!(time_of_day_score(8), 80);
/// assert_eq!(time_of_day_score(0), 56);
/// ```
#[must_use]
pub fn time_of_day_score(hour: u32) -> u8 {
    let distance = (PEAK_HOUR - i64::from(hour)).abs();
    let raw = 50 + (16 - distance) * 3;
    u8::try_from(raw.clamp(FALLBACK_MIN, FALLBACK_MAX)).unwrap_or_default()
}

fn time_of_day_index(captured_at: Timestamp, locale: Locale) -> CompositeScore {
    log::info!("no frame available, estimating realtime index from time of day");
    CompositeScore::new(
        time_of_day_score(captured_at.hour()),
        phrases(locale).no_image.to_owned(),
        Factors {
            image_analysis: ImageFactors::from(ColorFeatures::ZERO),
            weather: None,
            sensor: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use image::Rgb;
    use rstest::{fixture, rstest};

    fn at(stamp: &str) -> Timestamp {
        DateTime::parse_from_rfc3339(stamp).unwrap_or_else(|err| panic!("valid timestamp: {err}"))
    }

    #[fixture]
    fn pink_frame() -> RgbImage {
        RgbImage::from_pixel(10, 20, Rgb([230, 60, 180]))
    }

    #[rstest]
    #[case("2025-06-01T14:00:00+08:00", 95)]
    #[case("2025-06-01T08:00:00+08:00", 80)]
    #[case("2025-06-01T23:00:00+08:00", 71)]
    #[case("2025-06-01T02:00:00+08:00", 62)]
    fn no_image_uses_time_of_day(#[case] stamp: &str, #[case] expected: u8) {
        let inputs = RealtimeInputs::new(at(stamp));
        let result = compute_realtime_index(&inputs, Locale::English);
        assert_eq!(result.score, expected);
        assert_eq!(
            result.reason,
            "Realtime: no image available, estimated from time of day."
        );
        assert_eq!(result.factors.image_analysis, ImageFactors::default());
        assert!(result.factors.weather.is_none());
        assert!(result.factors.sensor.is_none());
    }

    #[rstest]
    fn no_image_ignores_sensor_and_weather() {
        let time = at("2025-06-01T14:00:00+08:00");
        let sample = WeatherHourSample::neutral(time);
        let reading = SensorReading::empty(time);
        let inputs = RealtimeInputs::new(time)
            .with_weather(&sample, &sample)
            .with_sensor(&reading);
        let result = compute_realtime_index(&inputs, Locale::English);
        assert_eq!(result.score, 95);
        assert!(result.factors.sensor.is_none());
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "expected blend is recomputed")]
    fn missing_weather_counts_as_zero(pink_frame: RgbImage) {
        let time = at("2025-06-01T10:00:00+08:00");
        let image_score = score_from_features(&compute_color_features(Some(&pink_frame)));
        let inputs = RealtimeInputs::new(time).with_image(&pink_frame);
        let result = compute_realtime_index(&inputs, Locale::English);
        let expected = (0.75 * f64::from(image_score)).round_ties_even();
        assert_eq!(f64::from(result.score), expected);
        assert!(result.reason.contains("Weather reference: Weather data missing, image prevails."));
        assert_eq!(result.factors.weather, Some(WeatherFactors::default()));
    }

    #[rstest]
    fn reason_strips_forecast_lead(pink_frame: RgbImage) {
        let time = at("2025-06-01T10:00:00+08:00");
        let sample = WeatherHourSample::neutral(time).with_uv_index(5).with_cloud(10.0);
        let inputs = RealtimeInputs::new(time)
            .with_image(&pink_frame)
            .with_weather(&sample, &sample);
        let result = compute_realtime_index(&inputs, Locale::English);
        assert!(result.reason.starts_with("Realtime: "));
        assert!(result.reason.contains(
            " Weather reference: upcoming window clear, light moderate, wind light, favourable for algae colour."
        ));
        assert!(!result.reason.contains("Forecast: "));
        assert_eq!(result.factors.weather.map(|w| w.cloud), Some(10));
    }

    #[rstest]
    fn sensor_fragment_is_appended(pink_frame: RgbImage) {
        let time = at("2025-06-01T10:00:00+08:00");
        let mut reading = SensorReading::empty(time);
        reading.wind_speed = Some(4.0);
        let without = compute_realtime_index(
            &RealtimeInputs::new(time).with_image(&pink_frame),
            Locale::Chinese,
        );
        let inputs = RealtimeInputs::new(time)
            .with_image(&pink_frame)
            .with_sensor(&reading);
        let with = compute_realtime_index(&inputs, Locale::Chinese);
        assert!(with.reason.ends_with(" 现场监测参考：风速4.0m/s。"));
        assert_eq!(with.score, without.score.saturating_add(2).min(100));
        assert_eq!(with.factors.sensor, Some(reading));
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "expected blend is recomputed")]
    fn weather_share_comes_from_supplied_scorer(pink_frame: RgbImage) {
        struct Perfect;

        impl WeatherScorer for Perfect {
            fn score(&self, _sample: &WeatherHourSample) -> u8 {
                100
            }
        }

        let time = at("2025-06-01T10:00:00+08:00");
        let sample = WeatherHourSample::neutral(time).with_precip(5.0);
        let image_score = score_from_features(&compute_color_features(Some(&pink_frame)));
        let inputs = RealtimeInputs::new(time)
            .with_image(&pink_frame)
            .with_weather(&sample, &sample);
        let result = compute_realtime_index_with(
            &inputs,
            CompositeWeights::default(),
            &Perfect,
            Locale::English,
        );
        let expected = (0.75 * f64::from(image_score) + 25.0).round_ties_even();
        assert_eq!(f64::from(result.score), expected.min(100.0));
    }

    #[rstest]
    fn trailing_pair_selects_last_two() {
        let base = at("2025-06-01T10:00:00+08:00");
        let samples: Vec<_> = (0..3)
            .map(|hour| WeatherHourSample::neutral(base + chrono::Duration::hours(hour)))
            .collect();
        let (first, second) = trailing_pair(&samples).expect("non-empty forecast");
        assert_eq!(first.time, samples[1].time);
        assert_eq!(second.time, samples[2].time);

        let single = &samples[..1];
        let (first, second) = trailing_pair(single).expect("single sample");
        assert_eq!(first, second);
        assert!(trailing_pair(&[]).is_none());
    }
}
