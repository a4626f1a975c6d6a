//! Predict command implementation for the Saltglow CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use saltglow_core::{Lake, LakePrediction, Locale, PushTrigger, Subscription, Timestamp};
use saltglow_data::{FORECAST_TARGET_HOURS, pad_forecast};
use saltglow_scorer::{predict_for_lakes, push_triggers};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_forecast, load_json};
use crate::{
    ARG_AT, ARG_FORECAST, ARG_HORIZON, ARG_LAKES, ARG_LOCALE, ARG_SUBSCRIPTIONS, CliError,
    ENV_LAKES, evaluation_time, parse_locale, write_json,
};

/// Forecast hours searched for the best window unless configured.
pub(crate) const DEFAULT_HORIZON: usize = 24;

/// CLI arguments for the `predict` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Predict today's score and best visiting window for each lake \
                 in a JSON list. Forecasts shorter than two days are padded \
                 with heuristic hours. When a subscriptions file is given, \
                 alerts for windows starting within two hours are listed too.",
    about = "Predict the best visiting window of each lake"
)]
#[ortho_config(prefix = "SALTGLOW")]
pub(crate) struct PredictArgs {
    /// JSON list of lakes (`id`, `name`).
    #[arg(long = ARG_LAKES, value_name = "path")]
    #[serde(default)]
    pub(crate) lakes: Option<Utf8PathBuf>,
    /// Hourly forecast, native or QWeather JSON.
    #[arg(long = ARG_FORECAST, value_name = "path")]
    #[serde(default)]
    pub(crate) forecast: Option<Utf8PathBuf>,
    /// JSON list of alert subscriptions.
    #[arg(long = ARG_SUBSCRIPTIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) subscriptions: Option<Utf8PathBuf>,
    /// Number of forecast hours searched for the best window.
    #[arg(long = ARG_HORIZON, value_name = "hours")]
    #[serde(default)]
    pub(crate) horizon: Option<usize>,
    /// Language of the explanations (`en` or `zh`).
    #[arg(long = ARG_LOCALE, value_name = "tag")]
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Evaluation time as RFC 3339; defaults to now.
    #[arg(long = ARG_AT, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) at: Option<String>,
}

impl PredictArgs {
    pub(crate) fn into_config(self) -> Result<PredictConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PredictConfig::try_from(merged)
    }
}

/// Resolved `predict` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PredictConfig {
    pub(crate) lakes: Utf8PathBuf,
    pub(crate) forecast: Option<Utf8PathBuf>,
    pub(crate) subscriptions: Option<Utf8PathBuf>,
    pub(crate) horizon: usize,
    pub(crate) locale: Locale,
    pub(crate) now: Timestamp,
}

impl TryFrom<PredictArgs> for PredictConfig {
    type Error = CliError;

    fn try_from(args: PredictArgs) -> Result<Self, Self::Error> {
        let lakes = args.lakes.ok_or(CliError::MissingArgument {
            field: ARG_LAKES,
            env: ENV_LAKES,
        })?;
        Ok(Self {
            lakes,
            forecast: args.forecast,
            subscriptions: args.subscriptions,
            horizon: args.horizon.unwrap_or(DEFAULT_HORIZON),
            locale: parse_locale(args.locale.as_deref())?,
            now: evaluation_time(args.at.as_deref())?,
        })
    }
}

/// JSON document printed by `predict`.
#[derive(Debug, Serialize)]
pub(crate) struct PredictReport {
    pub(crate) generated_at: Timestamp,
    pub(crate) predictions: Vec<LakePrediction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) triggers: Vec<PushTrigger>,
}

pub(crate) fn run_predict(args: PredictArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = predict_report(&config)?;
    write_json(writer, &report)
}

pub(crate) fn predict_report(config: &PredictConfig) -> Result<PredictReport, CliError> {
    let lakes: Vec<Lake> = load_json(&config.lakes, ARG_LAKES)?;
    let subscriptions: Vec<Subscription> = config
        .subscriptions
        .as_deref()
        .map(|path| load_json(path, ARG_SUBSCRIPTIONS))
        .transpose()?
        .unwrap_or_default();
    let provided = load_forecast(config.forecast.as_deref());
    let forecast = pad_forecast(provided, FORECAST_TARGET_HOURS, config.now);

    let predictions =
        predict_for_lakes(&lakes, &forecast, config.horizon, config.now, config.locale);
    let triggers = push_triggers(&predictions, &subscriptions, config.now);
    log::info!(
        "predicted {} lakes over {} hours; {} alerts",
        predictions.len(),
        config.horizon,
        triggers.len()
    );
    Ok(PredictReport {
        generated_at: config.now,
        predictions,
        triggers,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PredictConfig, CliError> {
    let merged = PredictArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PredictConfig::try_from(merged)
}
