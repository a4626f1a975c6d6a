//! Best two-hour window search.

use saltglow_core::{WeatherHourSample, WeatherScorer};

use crate::BasicWeatherScorer;

/// The winning window of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPick {
    /// Index of the window's first item.
    pub start: usize,
    /// Index of the window's second item; equals `start` for a single item.
    pub end: usize,
    /// Mean score of the two items.
    pub average: f64,
}

/// Mean of two scores.
#[expect(clippy::float_arithmetic, reason = "mean of two scores")]
#[must_use]
pub fn pair_average(first: u8, second: u8) -> f64 {
    (f64::from(first) + f64::from(second)) / 2.0
}

/// Find the consecutive pair with the highest mean score.
///
/// Windows start at every index except the last (or at `0` for a single
/// item). The scan keeps the first window that strictly beats the running
/// best, so ties resolve to the earliest window. Returns `None` for empty
/// input.
///
/// # Examples
/// ```
/// use saltglow_scorer::best_window_by;
///
/// let pick = best_window_by(&[10_u8, 90, 90, 10], |score| *score).unwrap();
/// assert_eq!((pick.start, pick.end), (1, 2));
/// assert_eq!(pick.average, 90.0);
/// ```
#[must_use]
pub fn best_window_by<T, F>(items: &[T], score: F) -> Option<WindowPick>
where
    F: FnMut(&T) -> u8,
{
    let last = items.len().checked_sub(1)?;
    let scores: Vec<u8> = items.iter().map(score).collect();
    let score_at = |index: usize| scores.get(index).copied().unwrap_or_default();

    let mut best: Option<WindowPick> = None;
    for start in 0..last.max(1) {
        let end = (start + 1).min(last);
        let average = pair_average(score_at(start), score_at(end));
        if best.is_none_or(|current| average > current.average) {
            best = Some(WindowPick {
                start,
                end,
                average,
            });
        }
    }
    best
}

/// Find the best window of a forecast using the basic weather score.
#[must_use]
pub fn best_window(samples: &[WeatherHourSample]) -> Option<WindowPick> {
    best_window_with(samples, &BasicWeatherScorer)
}

/// Find the best window of a forecast, scoring each hour with `scorer`.
#[must_use]
pub fn best_window_with<S>(samples: &[WeatherHourSample], scorer: &S) -> Option<WindowPick>
where
    S: WeatherScorer + ?Sized,
{
    best_window_by(samples, |sample| scorer.score(sample))
}
