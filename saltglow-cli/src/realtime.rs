//! Realtime command implementation for the Saltglow CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use saltglow_core::{CompositeScore, Locale, Timestamp};
use saltglow_scorer::{RealtimeInputs, compute_realtime_index, trailing_pair};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_forecast, load_image, load_sensor};
use crate::{
    ARG_AT, ARG_FORECAST, ARG_IMAGE, ARG_LAKE_ID, ARG_LOCALE, ARG_SENSOR, CliError, ENV_LAKE_ID,
    evaluation_time, parse_locale, write_json,
};

/// CLI arguments for the `realtime` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score how photogenic a lake looks right now. The frame, \
                 forecast, and sensor snapshot are all optional: a missing \
                 frame falls back to a time-of-day estimate, and unreadable \
                 inputs are skipped with a warning.",
    about = "Compute the realtime photogenic index of a lake"
)]
#[ortho_config(prefix = "SALTGLOW")]
pub(crate) struct RealtimeArgs {
    /// Identifier of the lake being scored.
    #[arg(long = ARG_LAKE_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) lake_id: Option<u64>,
    /// Camera frame to analyse (JPEG or PNG).
    #[arg(long = ARG_IMAGE, value_name = "path")]
    #[serde(default)]
    pub(crate) image: Option<Utf8PathBuf>,
    /// Hourly forecast, native or QWeather JSON.
    #[arg(long = ARG_FORECAST, value_name = "path")]
    #[serde(default)]
    pub(crate) forecast: Option<Utf8PathBuf>,
    /// Latest on-site sensor snapshot as JSON.
    #[arg(long = ARG_SENSOR, value_name = "path")]
    #[serde(default)]
    pub(crate) sensor: Option<Utf8PathBuf>,
    /// Language of the explanation (`en` or `zh`).
    #[arg(long = ARG_LOCALE, value_name = "tag")]
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Evaluation time as RFC 3339; defaults to now.
    #[arg(long = ARG_AT, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) at: Option<String>,
}

impl RealtimeArgs {
    pub(crate) fn into_config(self) -> Result<RealtimeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RealtimeConfig::try_from(merged)
    }
}

/// Resolved `realtime` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RealtimeConfig {
    pub(crate) lake_id: u64,
    pub(crate) image: Option<Utf8PathBuf>,
    pub(crate) forecast: Option<Utf8PathBuf>,
    pub(crate) sensor: Option<Utf8PathBuf>,
    pub(crate) locale: Locale,
    pub(crate) captured_at: Timestamp,
}

impl TryFrom<RealtimeArgs> for RealtimeConfig {
    type Error = CliError;

    fn try_from(args: RealtimeArgs) -> Result<Self, Self::Error> {
        let lake_id = args.lake_id.ok_or(CliError::MissingArgument {
            field: ARG_LAKE_ID,
            env: ENV_LAKE_ID,
        })?;
        Ok(Self {
            lake_id,
            image: args.image,
            forecast: args.forecast,
            sensor: args.sensor,
            locale: parse_locale(args.locale.as_deref())?,
            captured_at: evaluation_time(args.at.as_deref())?,
        })
    }
}

/// JSON document printed by `realtime`.
#[derive(Debug, Serialize)]
pub(crate) struct RealtimeReport {
    pub(crate) lake_id: u64,
    pub(crate) captured_at: Timestamp,
    #[serde(flatten)]
    pub(crate) result: CompositeScore,
}

pub(crate) fn run_realtime(args: RealtimeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = realtime_report(&config);
    write_json(writer, &report)
}

pub(crate) fn realtime_report(config: &RealtimeConfig) -> RealtimeReport {
    let frame = load_image(config.image.as_deref());
    let forecast = load_forecast(config.forecast.as_deref());
    let sensor = load_sensor(config.sensor.as_deref());

    let mut inputs = RealtimeInputs::new(config.captured_at);
    if let Some(image) = frame.as_ref() {
        inputs = inputs.with_image(image);
    }
    if let Some((first, second)) = trailing_pair(&forecast) {
        inputs = inputs.with_weather(first, second);
    }
    if let Some(reading) = sensor.as_ref() {
        inputs = inputs.with_sensor(reading);
    }

    let result = compute_realtime_index(&inputs, config.locale);
    log::info!(
        "lake {} scored {} (frame: {}, forecast hours: {}, sensor: {})",
        config.lake_id,
        result.score,
        frame.is_some(),
        forecast.len(),
        sensor.is_some()
    );
    RealtimeReport {
        lake_id: config.lake_id,
        captured_at: config.captured_at,
        result,
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RealtimeConfig, CliError> {
    let merged = RealtimeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RealtimeConfig::try_from(merged)
}
