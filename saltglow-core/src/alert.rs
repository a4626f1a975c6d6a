//! Subscriptions to high-score alerts and the triggers they produce.

use crate::Timestamp;

/// Threshold applied when a subscription does not set one.
pub const DEFAULT_ALERT_THRESHOLD: u8 = 90;

/// A visitor's request to be told when watched lakes look promising.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subscription {
    /// Opaque subscriber identifier.
    pub subscriber: String,
    /// Lakes the subscriber watches.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lake_ids: Vec<u64>,
    /// Minimum score that triggers an alert.
    #[cfg_attr(feature = "serde", serde(default))]
    pub threshold: Option<u8>,
}

impl Subscription {
    /// Effective alert threshold.
    ///
    /// An unset or zero threshold falls back to [`DEFAULT_ALERT_THRESHOLD`].
    ///
    /// # Examples
    /// ```
    /// use saltglow_core::Subscription;
    ///
    /// let subscription = Subscription {
    ///     subscriber: "visitor-1".to_owned(),
    ///     lake_ids: vec![3],
    ///     threshold: Some(0),
    /// };
    /// assert_eq!(subscription.threshold_or_default(), 90);
    /// ```
    #[must_use]
    pub fn threshold_or_default(&self) -> u8 {
        self.threshold
            .filter(|threshold| *threshold != 0)
            .unwrap_or(DEFAULT_ALERT_THRESHOLD)
    }

    /// Report whether the subscription watches `lake_id`.
    #[must_use]
    pub fn watches(&self, lake_id: u64) -> bool {
        self.lake_ids.contains(&lake_id)
    }
}

/// An alert that should be pushed to a subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PushTrigger {
    /// Subscriber to notify.
    pub subscriber: String,
    /// Lake that crossed the threshold.
    pub lake_id: u64,
    /// Display name of the lake.
    pub lake_name: String,
    /// Predicted score.
    pub score: u8,
    /// Start of the predicted window.
    pub starts_at: Timestamp,
}
