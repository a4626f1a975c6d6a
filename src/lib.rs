//! Facade crate for the Saltglow photogenic index engine.
//!
//! This crate re-exports the domain types and scoring entry points, and
//! exposes the forecast and sensor payload decoders behind the `data`
//! feature.

#![forbid(unsafe_code)]

pub use saltglow_core::{
    Candidate, CandidateError, ColorFeatures, CompositeScore, CriterionWeights, Factors, Lake,
    LakePrediction, Locale, PairwiseRatios, PushTrigger, SensorReading, Subscription, TimeWindow,
    Timestamp, WeatherHourSample, WeatherScorer,
};

pub use saltglow_scorer::{
    RankOrder, Ranking, RealtimeInputs, attach_explanations, compute_realtime_index,
    predict_for_lakes, push_triggers, rank_candidates,
};

#[cfg(feature = "data")]
pub use saltglow_data::{
    ForecastParseError, SensorParseError, pad_forecast, parse_forecast_json, parse_qweather_hourly,
    parse_sensor_json,
};
