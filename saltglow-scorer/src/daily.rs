//! Daily best-window predictions for every monitored lake.
//!
//! The forecast's best window is found once. Each lake then receives a
//! deterministic per-day variation (a score offset and a window shift) so
//! neighbouring sites do not all report the same hour. The variation is
//! derived from the calendar date and the lake identifier only, making
//! repeated refreshes within a day stable.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use saltglow_core::scorer::sanitise;
use saltglow_core::{
    Lake, LakePrediction, Locale, PredictionFactors, Timestamp, TimeWindow, WeatherHourSample,
    WeatherScorer,
};

use crate::phrases::phrases;
use crate::window::pair_average;
use crate::{BasicWeatherScorer, best_window_with, explain_weather_pair};

/// Number of forecast hours considered when none is requested.
pub const DEFAULT_HORIZON: usize = 24;
/// Score reported for every lake when the forecast is empty.
pub const EMPTY_FORECAST_SCORE: u8 = 60;
/// Lowest score a daily prediction reports.
pub const MIN_DAILY_SCORE: f64 = 30.0;
/// Range of the per-day score offset.
pub const OFFSET_RANGE: std::ops::RangeInclusive<i8> = -10..=15;
/// Range of the per-day window shift, in forecast steps.
pub const SHIFT_RANGE: std::ops::RangeInclusive<i8> = -2..=2;
/// Offset magnitude beyond which a local note is appended.
pub const NOTE_THRESHOLD: i8 = 3;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Per-day, per-lake variation applied to the shared best window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyJitter {
    /// Points added to the window average, within [`OFFSET_RANGE`].
    pub offset: i8,
    /// Steps the window moves, within [`SHIFT_RANGE`].
    pub shift: i8,
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Derive the variation for `site_id` on `date`.
///
/// The key `"YYYYMMDD_<id>"` is hashed with FNV-1a into the seed of a local
/// `ChaCha8` generator, so the result depends on nothing else.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use saltglow_scorer::daily_jitter;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let jitter = daily_jitter(date, 7);
/// assert_eq!(jitter, daily_jitter(date, 7));
/// assert!((-10..=15).contains(&jitter.offset));
/// assert!((-2..=2).contains(&jitter.shift));
/// ```
#[must_use]
pub fn daily_jitter(date: NaiveDate, site_id: u64) -> DailyJitter {
    let key = format!("{}_{site_id}", date.format("%Y%m%d"));
    let mut rng = ChaCha8Rng::seed_from_u64(fnv1a(key.as_bytes()));
    let offset = rng.gen_range(OFFSET_RANGE);
    let shift = rng.gen_range(SHIFT_RANGE);
    DailyJitter { offset, shift }
}

/// Predict the best visiting window of each lake.
///
/// Only the first `horizon` samples are considered. An empty forecast yields
/// score [`EMPTY_FORECAST_SCORE`] with a degenerate window at `now` and no
/// explanation.
///
/// Each lake's window is the shared best window moved by its daily shift and
/// clamped into the forecast. Its score is the window's mean basic weather
/// score plus the daily offset, truncated and clamped to `30..=100`.
#[must_use]
pub fn predict_for_lakes(
    lakes: &[Lake],
    forecast: &[WeatherHourSample],
    horizon: usize,
    now: Timestamp,
    locale: Locale,
) -> Vec<LakePrediction> {
    predict_for_lakes_with(lakes, forecast, horizon, now, locale, &BasicWeatherScorer)
}

/// Predict the best visiting window of each lake, scoring hours with
/// `scorer`.
///
/// Behaves like [`predict_for_lakes`] in every other respect.
#[must_use]
pub fn predict_for_lakes_with<S>(
    lakes: &[Lake],
    forecast: &[WeatherHourSample],
    horizon: usize,
    now: Timestamp,
    locale: Locale,
    scorer: &S,
) -> Vec<LakePrediction>
where
    S: WeatherScorer + ?Sized,
{
    let window = forecast.get(..horizon).unwrap_or(forecast);
    let Some(best) = best_window_with(window, scorer) else {
        log::warn!(
            "forecast is empty, reporting default score for {} lakes",
            lakes.len()
        );
        return lakes.iter().map(|lake| fallback(lake, now)).collect();
    };

    let date = now.date_naive();
    let predictions: Vec<LakePrediction> = lakes
        .iter()
        .map(|lake| predict_lake(lake, window, best.start, date, now, locale, scorer))
        .collect();
    log::info!(
        "predicted {} lakes from {} forecast hours",
        predictions.len(),
        window.len()
    );
    predictions
}

fn fallback(lake: &Lake, now: Timestamp) -> LakePrediction {
    LakePrediction {
        lake_id: lake.id,
        lake_name: lake.name.clone(),
        score: EMPTY_FORECAST_SCORE,
        best_time: TimeWindow::instant(now),
        updated_at: now,
        reason: None,
        factors: None,
    }
}

#[expect(clippy::float_arithmetic, reason = "offset is added to a mean score")]
fn predict_lake<S>(
    lake: &Lake,
    window: &[WeatherHourSample],
    best_start: usize,
    date: NaiveDate,
    now: Timestamp,
    locale: Locale,
    scorer: &S,
) -> LakePrediction
where
    S: WeatherScorer + ?Sized,
{
    let jitter = daily_jitter(date, lake.id);
    let start = best_start
        .saturating_add_signed(isize::from(jitter.shift))
        .min(window.len().saturating_sub(2));
    let end = (start + 1).min(window.len().saturating_sub(1));
    let (Some(first), Some(second)) = (window.get(start), window.get(end)) else {
        return fallback(lake, now);
    };

    let average = pair_average(scorer.score(first), scorer.score(second));
    let score = sanitise((average + f64::from(jitter.offset)).max(MIN_DAILY_SCORE));

    let (mut reason, weather) = explain_weather_pair(first, second, locale);
    let table = phrases(locale);
    if jitter.offset > NOTE_THRESHOLD {
        reason.push_str(table.microclimate_bonus);
    } else if jitter.offset < -NOTE_THRESHOLD {
        reason.push_str(table.wind_caution);
    }

    LakePrediction {
        lake_id: lake.id,
        lake_name: lake.name.clone(),
        score,
        best_time: TimeWindow::new(first.time, second.time),
        updated_at: now,
        reason: Some(reason),
        factors: Some(PredictionFactors { weather }),
    }
}

/// Rebuild reasons and factors for stored predictions.
///
/// Each prediction is explained by the sample whose time equals its window
/// start and the sample after it. When no sample matches, the middle pair of
/// the forecast is used. Local notes are not reproduced. Predictions are
/// returned unchanged when the forecast is empty.
#[must_use]
pub fn attach_explanations(
    predictions: Vec<LakePrediction>,
    forecast: &[WeatherHourSample],
    locale: Locale,
) -> Vec<LakePrediction> {
    if forecast.is_empty() {
        return predictions;
    }
    predictions
        .into_iter()
        .map(|mut prediction| {
            if let Some((first, second)) = explanation_pair(forecast, prediction.best_time.start) {
                let (reason, weather) = explain_weather_pair(first, second, locale);
                prediction.reason = Some(reason);
                prediction.factors = Some(PredictionFactors { weather });
            }
            prediction
        })
        .collect()
}

#[expect(clippy::integer_division, reason = "middle index rounds down")]
fn explanation_pair(
    forecast: &[WeatherHourSample],
    start: Timestamp,
) -> Option<(&WeatherHourSample, &WeatherHourSample)> {
    let len = forecast.len();
    let index = forecast
        .iter()
        .position(|sample| sample.time == start)
        .unwrap_or_else(|| (len / 2).min(len.saturating_sub(2)));
    let first = forecast.get(index)?;
    let second = forecast.get((index + 1).min(len.saturating_sub(1)))?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_weather_score;
    use chrono::{DateTime, Duration};
    use rstest::{fixture, rstest};

    /// Rates every hour the same.
    struct Flat(u8);

    impl WeatherScorer for Flat {
        fn score(&self, _sample: &WeatherHourSample) -> u8 {
            self.0
        }
    }

    #[fixture]
    fn now() -> Timestamp {
        DateTime::parse_from_rfc3339("2025-06-01T06:00:00+08:00")
            .unwrap_or_else(|err| panic!("valid timestamp: {err}"))
    }

    fn hourly(start: Timestamp, count: i64) -> Vec<WeatherHourSample> {
        (0..count)
            .map(|hour| {
                let sunny = hour.rem_euclid(5) == 2;
                WeatherHourSample::neutral(start + Duration::hours(hour))
                    .with_uv_index(if sunny { 5 } else { 1 })
                    .with_cloud(if sunny { 10.0 } else { 70.0 })
            })
            .collect()
    }

    #[rstest]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[rstest]
    fn jitter_is_stable_within_a_day(now: Timestamp) {
        let date = now.date_naive();
        for id in 0..50 {
            assert_eq!(daily_jitter(date, id), daily_jitter(date, id));
        }
    }

    #[rstest]
    fn jitter_varies_across_lakes(now: Timestamp) {
        let date = now.date_naive();
        let first = daily_jitter(date, 0);
        assert!((1..50).any(|id| daily_jitter(date, id) != first));
    }

    #[rstest]
    fn empty_forecast_falls_back(now: Timestamp) {
        let lakes = [Lake::new(1, "North basin"), Lake::new(2, "South basin")];
        let predictions = predict_for_lakes(&lakes, &[], DEFAULT_HORIZON, now, Locale::English);
        assert_eq!(predictions.len(), 2);
        for prediction in predictions {
            assert_eq!(prediction.score, EMPTY_FORECAST_SCORE);
            assert_eq!(prediction.best_time, TimeWindow::instant(now));
            assert!(prediction.reason.is_none());
            assert!(prediction.factors.is_none());
        }
    }

    #[rstest]
    fn single_sample_forecast_uses_degenerate_window(now: Timestamp) {
        let forecast = hourly(now, 1);
        let lakes = [Lake::new(9, "Pond")];
        let predictions = predict_for_lakes(&lakes, &forecast, DEFAULT_HORIZON, now, Locale::English);
        let prediction = predictions.first().expect("one prediction");
        assert_eq!(prediction.best_time, TimeWindow::instant(now));
        assert!((30..=100).contains(&prediction.score));
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "expected score is recomputed")]
    fn score_adds_daily_offset_to_window_average(now: Timestamp) {
        let forecast: Vec<_> = (0..6)
            .map(|hour| WeatherHourSample::neutral(now + Duration::hours(hour)))
            .collect();
        let base = f64::from(basic_weather_score(&WeatherHourSample::neutral(now)));
        let lakes: Vec<_> = (0..40).map(|id| Lake::new(id, format!("Lake {id}"))).collect();
        let predictions = predict_for_lakes(&lakes, &forecast, DEFAULT_HORIZON, now, Locale::English);
        for prediction in predictions {
            let jitter = daily_jitter(now.date_naive(), prediction.lake_id);
            let expected = (base + f64::from(jitter.offset)).clamp(30.0, 100.0).trunc();
            assert_eq!(f64::from(prediction.score), expected);
        }
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "expected score is recomputed")]
    fn supplied_scorer_sets_the_base_score(now: Timestamp) {
        let forecast = hourly(now, 12);
        let lakes: Vec<_> = (0..20).map(|id| Lake::new(id, format!("Lake {id}"))).collect();
        let predictions = predict_for_lakes_with(
            &lakes,
            &forecast,
            DEFAULT_HORIZON,
            now,
            Locale::English,
            &Flat(50),
        );
        for prediction in predictions {
            let jitter = daily_jitter(now.date_naive(), prediction.lake_id);
            let expected = (50.0 + f64::from(jitter.offset)).max(MIN_DAILY_SCORE);
            assert_eq!(f64::from(prediction.score), expected);
        }
    }

    #[rstest]
    fn notes_follow_offset(now: Timestamp) {
        let forecast = hourly(now, 24);
        let lakes: Vec<_> = (0..60).map(|id| Lake::new(id, format!("Lake {id}"))).collect();
        let predictions = predict_for_lakes(&lakes, &forecast, DEFAULT_HORIZON, now, Locale::English);
        for prediction in predictions {
            let jitter = daily_jitter(now.date_naive(), prediction.lake_id);
            let reason = prediction.reason.expect("reason present");
            assert!(reason.starts_with("Forecast: "));
            assert_eq!(
                reason.ends_with(" Local terrain gives a better microclimate."),
                jitter.offset > NOTE_THRESHOLD
            );
            assert_eq!(
                reason.ends_with(" Local wind may be stronger; take precautions."),
                jitter.offset < -NOTE_THRESHOLD
            );
        }
    }

    #[rstest]
    fn windows_stay_inside_horizon(now: Timestamp) {
        let forecast = hourly(now, 48);
        let lakes: Vec<_> = (0..30).map(|id| Lake::new(id, format!("Lake {id}"))).collect();
        let horizon_end = now + Duration::hours(23);
        for prediction in predict_for_lakes(&lakes, &forecast, DEFAULT_HORIZON, now, Locale::English) {
            assert!(prediction.best_time.start >= now);
            assert!(prediction.best_time.end <= horizon_end);
            assert_eq!(
                prediction.best_time.end - prediction.best_time.start,
                Duration::hours(1)
            );
        }
    }

    #[rstest]
    fn explanations_use_matching_sample(now: Timestamp) {
        let forecast = hourly(now, 10);
        let stored = LakePrediction {
            lake_id: 1,
            lake_name: "North basin".to_owned(),
            score: 77,
            best_time: TimeWindow::new(forecast[2].time, forecast[3].time),
            updated_at: now,
            reason: None,
            factors: None,
        };
        let enriched = attach_explanations(vec![stored], &forecast, Locale::English);
        let factors = enriched[0].factors.expect("factors attached");
        // samples 2 and 3 average cloud (10 + 70) / 2 and UV (5 + 1) / 2
        assert_eq!(factors.weather.cloud, 40);
        assert_eq!(factors.weather.uv_index, 3);
        assert_eq!(enriched[0].score, 77);
    }

    #[rstest]
    fn explanations_fall_back_to_middle_pair(now: Timestamp) {
        let forecast = hourly(now, 10);
        let stored = LakePrediction {
            lake_id: 1,
            lake_name: "North basin".to_owned(),
            score: 77,
            best_time: TimeWindow::instant(now - Duration::days(1)),
            updated_at: now,
            reason: None,
            factors: None,
        };
        let enriched = attach_explanations(vec![stored], &forecast, Locale::English);
        // the middle pair is samples 5 and 6, both cloudy
        let factors = enriched[0].factors.expect("factors attached");
        assert_eq!(factors.weather.cloud, 70);
    }

    #[rstest]
    fn explanations_need_a_forecast(now: Timestamp) {
        let stored = fallback(&Lake::new(3, "Salt pan"), now);
        let enriched = attach_explanations(vec![stored.clone()], &[], Locale::English);
        assert_eq!(enriched, vec![stored]);
    }
}
