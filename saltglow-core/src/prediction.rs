//! Lakes, time windows, and daily predictions.

use crate::{PredictionFactors, Timestamp};

/// A monitored site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lake {
    /// Stable identifier, also used to seed per-lake variation.
    pub id: u64,
    /// Display name.
    pub name: String,
}

impl Lake {
    /// Construct a lake.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Interval between two consecutive forecast samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    /// Window start.
    pub start: Timestamp,
    /// Window end.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Construct a window.
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Degenerate window starting and ending at `instant`.
    #[must_use]
    pub const fn instant(instant: Timestamp) -> Self {
        Self::new(instant, instant)
    }
}

/// Best-window forecast for one lake.
///
/// A prediction is computed fresh every refresh cycle and superseded, never
/// updated, by the next cycle's record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LakePrediction {
    /// Identifier of the predicted lake.
    pub lake_id: u64,
    /// Display name of the predicted lake.
    pub lake_name: String,
    /// Index in `0..=100`.
    pub score: u8,
    /// Recommended visiting window.
    pub best_time: TimeWindow,
    /// When the prediction was generated.
    pub updated_at: Timestamp,
    /// Human-readable explanation, absent for the no-forecast fallback.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reason: Option<String>,
    /// Structured explanation, absent for the no-forecast fallback.
    #[cfg_attr(feature = "serde", serde(default))]
    pub factors: Option<PredictionFactors>,
}
