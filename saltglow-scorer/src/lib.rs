//! Scoring engine for the Saltglow photogenic index.
//!
//! The crate turns already-fetched inputs into scores and explanations:
//! - [`color`] extracts region-split colour features from a frame and scores
//!   them.
//! - [`weather`] scores individual forecast hours and explains two-hour
//!   windows.
//! - [`window`] finds the best two-hour window in a forecast.
//! - [`sensor`] nudges a score with on-site readings.
//! - [`composite`] fuses image, weather, and sensor inputs into the realtime
//!   index.
//! - [`daily`] produces per-lake best-window predictions with deterministic
//!   per-day variation.
//! - [`ahp`] ranks candidate sites with AHP-derived criterion weights.
//! - [`alerts`] decides which subscribers to notify.
//!
//! Every function is synchronous and free of I/O. Missing inputs degrade to
//! documented defaults instead of failing.
//!
//! # Examples
//!
//! ```
//! use chrono::DateTime;
//! use saltglow_core::Locale;
//! use saltglow_scorer::composite::{RealtimeInputs, compute_realtime_index};
//!
//! let at = DateTime::parse_from_rfc3339("2025-06-01T14:00:00+08:00").unwrap();
//! let result = compute_realtime_index(&RealtimeInputs::new(at), Locale::English);
//! assert_eq!(result.score, 95);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod ahp;
pub mod alerts;
pub mod color;
pub mod composite;
pub mod daily;
mod phrases;
pub mod sensor;
pub mod weather;
pub mod window;

pub use ahp::{RankOrder, RankedCandidate, Ranking, rank_candidates, unweighted_composite};
pub use alerts::{is_recommendation_worthy, push_triggers, score_lift};
pub use color::{compute_color_features, decode_image, explain_features, score_from_features};
pub use composite::{
    CompositeWeights, RealtimeInputs, compute_realtime_index, compute_realtime_index_with,
    trailing_pair,
};
pub use daily::{
    DailyJitter, attach_explanations, daily_jitter, predict_for_lakes, predict_for_lakes_with,
};
pub use sensor::{SensorFusion, fuse_sensor, sensor_adjustment, sensor_fragment};
pub use weather::{
    BasicWeatherScorer, DeepWeatherScorer, basic_weather_score, deep_weather_score,
    explain_weather_pair,
};
pub use window::{WindowPick, best_window, best_window_by, best_window_with};

use saltglow_core::scorer::sanitise;

/// Round half to even, then clamp into `0..=100`.
pub(crate) const fn round_score(raw: f64) -> u8 {
    sanitise(raw.round_ties_even())
}

/// Truncate towards zero, saturating at the `i64` bounds.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate and NaN maps to zero"
)]
pub(crate) const fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}
