//! Structured explanations attached to every score.
//!
//! A [`Factors`] record holds one typed entry per input category. Categories
//! that did not influence a score are absent, so the record always explains
//! exactly the inputs that were used.

use crate::{ColorFeatures, SensorReading, WeatherFactors};

/// Image analysis entry of a factors record.
///
/// The encoded form already repeats the lake values under the legacy keys
/// older clients read, see [`ColorFeatures`].
pub type ImageFactors = ColorFeatures;

/// Sensor entry of a factors record: the reading that was fused.
pub type SensorFactors = SensorReading;

/// Per-category explanation of a realtime score.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factors {
    /// Colour features of the analysed frame.
    pub image_analysis: ImageFactors,
    /// Averaged weather of the consulted window.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub weather: Option<WeatherFactors>,
    /// On-site reading fused into the score.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sensor: Option<SensorFactors>,
}

/// Explanation attached to a daily prediction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictionFactors {
    /// Averaged weather of the predicted window.
    pub weather: WeatherFactors,
}

/// Realtime photogenic index with its explanation.
///
/// # Examples
/// ```
/// use saltglow_core::{CompositeScore, Factors};
///
/// let score = CompositeScore::new(120, "bright".to_owned(), Factors::default());
/// assert_eq!(score.score, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositeScore {
    /// Index in `0..=100`.
    pub score: u8,
    /// Human-readable explanation.
    pub reason: String,
    /// Structured explanation keyed by input category.
    pub factors: Factors,
}

impl CompositeScore {
    /// Build a score, clamping it to the valid range.
    #[must_use]
    pub fn new(score: u8, reason: String, factors: Factors) -> Self {
        Self {
            score: score.min(crate::MAX_SCORE),
            reason,
            factors,
        }
    }
}
