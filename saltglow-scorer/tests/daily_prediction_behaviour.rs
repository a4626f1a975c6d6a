#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
//! Behavioural coverage for daily lake predictions and alerting.

use std::cell::RefCell;

use chrono::{DateTime, TimeDelta};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use saltglow_core::{
    Lake, LakePrediction, Locale, PushTrigger, Subscription, TimeWindow, Timestamp,
    WeatherHourSample,
};
use saltglow_scorer::daily::DEFAULT_HORIZON;
use saltglow_scorer::{attach_explanations, predict_for_lakes, push_triggers};

/// State shared by the steps of one scenario.
#[derive(Debug, Default)]
struct DailyWorld {
    lakes: RefCell<Vec<Lake>>,
    forecast: RefCell<Vec<WeatherHourSample>>,
    predictions: RefCell<Vec<LakePrediction>>,
    repeat: RefCell<Vec<LakePrediction>>,
    subscriptions: RefCell<Vec<Subscription>>,
    triggers: RefCell<Vec<PushTrigger>>,
}

#[fixture]
fn world() -> DailyWorld {
    DailyWorld::default()
}

fn now() -> Timestamp {
    DateTime::parse_from_rfc3339("2025-06-01T06:00:00+08:00").expect("valid timestamp")
}

fn predict(world: &DailyWorld) -> Vec<LakePrediction> {
    predict_for_lakes(
        &world.lakes.borrow(),
        &world.forecast.borrow(),
        DEFAULT_HORIZON,
        now(),
        Locale::English,
    )
}

#[given("three monitored lakes")]
fn given_lakes(world: &DailyWorld) {
    world.lakes.replace(vec![
        Lake::new(1, "Yuncheng Salt Lake"),
        Lake::new(2, "Chaka Salt Lake"),
        Lake::new(3, "Qarhan Salt Lake"),
    ]);
}

#[given("an empty forecast")]
fn given_empty_forecast(world: &DailyWorld) {
    world.forecast.replace(Vec::new());
}

#[given("a day of hourly forecast")]
fn given_day_forecast(world: &DailyWorld) {
    let forecast = (0..24)
        .map(|hour| {
            let midday = (10..=15).contains(&hour);
            WeatherHourSample::neutral(now() + TimeDelta::hours(hour))
                .with_uv_index(if midday { 5 } else { 1 })
                .with_cloud(if midday { 15.0 } else { 65.0 })
        })
        .collect();
    world.forecast.replace(forecast);
}

#[given("a prediction scoring 92 starting in one hour")]
fn given_high_prediction(world: &DailyWorld) {
    let start = now() + TimeDelta::hours(1);
    world.predictions.replace(vec![LakePrediction {
        lake_id: 7,
        lake_name: "Yuncheng Salt Lake".to_owned(),
        score: 92,
        best_time: TimeWindow::new(start, start + TimeDelta::hours(1)),
        updated_at: now(),
        reason: None,
        factors: None,
    }]);
}

#[given("a subscriber watching that lake with the default threshold")]
fn given_subscriber(world: &DailyWorld) {
    world.subscriptions.replace(vec![Subscription {
        subscriber: "visitor-1".to_owned(),
        lake_ids: vec![7],
        threshold: None,
    }]);
}

#[when("predictions are made")]
fn when_predicted(world: &DailyWorld) {
    let predictions = predict(world);
    world.predictions.replace(predictions);
}

#[when("predictions are made twice on the same day")]
fn when_predicted_twice(world: &DailyWorld) {
    let first = predict(world);
    let second = predict(world);
    world.predictions.replace(first);
    world.repeat.replace(second);
}

#[when("the stored predictions are explained again")]
fn when_explained(world: &DailyWorld) {
    let stored: Vec<LakePrediction> = world
        .predictions
        .take()
        .into_iter()
        .map(|mut prediction| {
            prediction.reason = None;
            prediction.factors = None;
            prediction
        })
        .collect();
    let explained = attach_explanations(stored, &world.forecast.borrow(), Locale::English);
    world.predictions.replace(explained);
}

#[when("alerts are evaluated")]
fn when_alerts(world: &DailyWorld) {
    let triggers = push_triggers(
        &world.predictions.borrow(),
        &world.subscriptions.borrow(),
        now(),
    );
    world.triggers.replace(triggers);
}

#[then("every lake scores 60")]
fn then_default_score(world: &DailyWorld) {
    let predictions = world.predictions.borrow();
    assert_eq!(predictions.len(), world.lakes.borrow().len());
    assert!(predictions.iter().all(|p| p.score == 60));
}

#[then("every window is the evaluation instant")]
fn then_instant_window(world: &DailyWorld) {
    assert!(
        world
            .predictions
            .borrow()
            .iter()
            .all(|p| p.best_time == TimeWindow::instant(now()))
    );
}

#[then("no prediction carries a reason")]
fn then_no_reason(world: &DailyWorld) {
    assert!(world.predictions.borrow().iter().all(|p| p.reason.is_none()));
}

#[then("both runs agree")]
fn then_runs_agree(world: &DailyWorld) {
    assert_eq!(*world.predictions.borrow(), *world.repeat.borrow());
}

#[then("every score lies between 30 and 100")]
fn then_scores_bounded(world: &DailyWorld) {
    assert!(
        world
            .predictions
            .borrow()
            .iter()
            .all(|p| (30..=100).contains(&p.score))
    );
}

#[then("every window lies inside the forecast")]
fn then_windows_inside(world: &DailyWorld) {
    let forecast = world.forecast.borrow();
    let first = forecast.first().expect("forecast is not empty").time;
    let last = forecast.last().expect("forecast is not empty").time;
    for prediction in world.predictions.borrow().iter() {
        assert!(prediction.best_time.start >= first);
        assert!(prediction.best_time.end <= last);
        assert_eq!(
            prediction.best_time.end - prediction.best_time.start,
            TimeDelta::hours(1)
        );
    }
}

#[then("every prediction carries a reason")]
fn then_reasons(world: &DailyWorld) {
    for prediction in world.predictions.borrow().iter() {
        let reason = prediction.reason.as_deref().expect("reason is attached");
        assert!(reason.starts_with("Forecast: upcoming window "));
        assert!(prediction.factors.is_some());
    }
}

#[then("one alert is raised for that subscriber")]
fn then_one_alert(world: &DailyWorld) {
    let triggers = world.triggers.borrow();
    assert_eq!(triggers.len(), 1);
    let trigger = triggers.first().expect("one trigger");
    assert_eq!(trigger.subscriber, "visitor-1");
    assert_eq!(trigger.lake_id, 7);
    assert_eq!(trigger.score, 92);
}

#[scenario(path = "tests/features/daily_prediction.feature", index = 0)]
fn empty_forecast_defaults(world: DailyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/daily_prediction.feature", index = 1)]
fn stable_within_a_day(world: DailyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/daily_prediction.feature", index = 2)]
fn windows_inside_forecast(world: DailyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/daily_prediction.feature", index = 3)]
fn stored_predictions_explained(world: DailyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/daily_prediction.feature", index = 4)]
fn imminent_high_score_alerts(world: DailyWorld) {
    let _ = world;
}
