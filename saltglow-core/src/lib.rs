//! Core domain types for the Saltglow engine.
//!
//! These models describe the inputs the scoring engine consumes (hourly
//! weather samples, sensor snapshots, candidate sites) and the results it
//! emits (composite scores, lake predictions, factor records). Values that can
//! be invalid are built through constructors returning `Result` so bad input
//! surfaces at the boundary rather than inside the scorers.
//!
//! Serialisation is gated behind the default `serde` feature. Field names on
//! the wire follow the contract shared with the HTTP and persistence layers,
//! so renames in this crate are breaking changes.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod alert;
pub mod color;
pub mod criteria;
pub mod factors;
pub mod locale;
pub mod prediction;
pub mod scorer;
pub mod sensor;
pub mod weather;

pub use alert::{DEFAULT_ALERT_THRESHOLD, PushTrigger, Subscription};
pub use color::ColorFeatures;
pub use criteria::{AhpError, Candidate, CandidateError, CriterionWeights, PairwiseRatios};
pub use factors::{CompositeScore, Factors, ImageFactors, PredictionFactors, SensorFactors};
pub use locale::{Locale, ParseLocaleError};
pub use prediction::{Lake, LakePrediction, TimeWindow};
pub use scorer::WeatherScorer;
pub use sensor::SensorReading;
pub use weather::{WeatherFactors, WeatherHourSample};

/// Timestamp type used across the engine.
///
/// Forecast providers report local time with an explicit offset, so the
/// offset is preserved rather than normalising to UTC.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

/// Upper bound of every photogenic index.
pub const MAX_SCORE: u8 = 100;
