//! Decide which subscribers to notify.

use chrono::TimeDelta;
use saltglow_core::{LakePrediction, PushTrigger, Subscription, Timestamp};

/// How far ahead a predicted window may start and still trigger an alert.
pub const ALERT_LEAD_HOURS: i64 = 2;
/// Relative improvement over yesterday's mean that warrants a recommendation.
pub const RECOMMENDATION_LIFT: f64 = 0.15;

/// Collect alerts for predictions that cross a subscriber's threshold.
///
/// A subscription fires for each watched lake whose score reaches the
/// subscription threshold (90 unless set to a non-zero value) and whose
/// window starts between `now` and two hours later, inclusive.
#[must_use]
pub fn push_triggers(
    predictions: &[LakePrediction],
    subscriptions: &[Subscription],
    now: Timestamp,
) -> Vec<PushTrigger> {
    let horizon = now + TimeDelta::hours(ALERT_LEAD_HOURS);
    let mut triggers = Vec::new();
    for subscription in subscriptions {
        let threshold = subscription.threshold_or_default();
        for prediction in predictions {
            let start = prediction.best_time.start;
            if !subscription.watches(prediction.lake_id)
                || prediction.score < threshold
                || start < now
                || start > horizon
            {
                continue;
            }
            log::info!(
                "push trigger: {} watching {} reaches {} at {}",
                subscription.subscriber,
                prediction.lake_name,
                prediction.score,
                start.format("%H:%M")
            );
            triggers.push(PushTrigger {
                subscriber: subscription.subscriber.clone(),
                lake_id: prediction.lake_id,
                lake_name: prediction.lake_name.clone(),
                score: prediction.score,
                starts_at: start,
            });
        }
    }
    triggers
}

/// Relative change of `current` against `yesterday_mean`.
///
/// Returns `None` when the mean is zero.
///
/// # Examples
/// ```
/// use saltglow_scorer::{is_recommendation_worthy, score_lift};
///
/// let lift = score_lift(70.0, 56.0).unwrap();
/// assert!(is_recommendation_worthy(lift));
/// assert_eq!(score_lift(70.0, 0.0), None);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "relative change")]
pub const fn score_lift(current: f64, yesterday_mean: f64) -> Option<f64> {
    if yesterday_mean == 0.0 {
        return None;
    }
    Some((current - yesterday_mean) / yesterday_mean)
}

/// Report whether a lift is large enough to recommend a site.
#[must_use]
pub const fn is_recommendation_worthy(lift: f64) -> bool {
    lift > RECOMMENDATION_LIFT
}
