//! Command-line interface for the Saltglow photogenic index engine.
//!
//! Each subcommand reads already-fetched inputs from disk, runs the engine,
//! and prints JSON on stdout. Options can come from CLI flags, configuration
//! files, or `SALTGLOW_*` environment variables. Diagnostics go to stderr.
#![forbid(unsafe_code)]

use std::io::Write;

use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use saltglow_core::{Locale, Timestamp};
use serde::Serialize;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

mod error;
mod fs;
mod inputs;
mod predict;
mod rank;
mod realtime;

pub use error::CliError;

use predict::PredictArgs;
use rank::RankArgs;
use realtime::RealtimeArgs;

const ARG_LAKE_ID: &str = "lake-id";
const ARG_IMAGE: &str = "image";
const ARG_FORECAST: &str = "forecast";
const ARG_SENSOR: &str = "sensor";
const ARG_LOCALE: &str = "locale";
const ARG_AT: &str = "at";
const ARG_LAKES: &str = "lakes";
const ARG_HORIZON: &str = "horizon";
const ARG_SUBSCRIPTIONS: &str = "subscriptions";
const ARG_CANDIDATES: &str = "candidates";
const ARG_AHP_AT: &str = "ahp-at";
const ARG_AHP_TC: &str = "ahp-tc";
const ARG_AHP_AC: &str = "ahp-ac";
const ARG_LIMIT: &str = "limit";
const ENV_LAKE_ID: &str = "SALTGLOW_CMDS_REALTIME_LAKE_ID";
const ENV_LAKES: &str = "SALTGLOW_CMDS_PREDICT_LAKES";
const ENV_CANDIDATES: &str = "SALTGLOW_CMDS_RANK_CANDIDATES";
const ENV_LOG_LEVEL: &str = "SALTGLOW_LOG_LEVEL";

/// Run the Saltglow CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, required inputs cannot
/// be read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.log_level.as_deref())?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Realtime(args) => realtime::run_realtime(args, writer),
        Command::Predict(args) => predict::run_predict(args, writer),
        Command::Rank(args) => rank::run_rank(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "saltglow",
    about = "Photogenic index and best-visit predictions for salt lakes",
    version
)]
struct Cli {
    /// Log level for diagnostics on stderr (error, warn, info, debug, trace).
    #[arg(long = "log-level", value_name = "level", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a lake right now from a frame, forecast, and sensor snapshot.
    Realtime(RealtimeArgs),
    /// Predict the best visiting window of each lake.
    Predict(PredictArgs),
    /// Rank candidate sites, optionally with AHP preferences.
    Rank(RankArgs),
}

fn parse_log_level(value: &str) -> Result<LevelFilter, CliError> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| CliError::InvalidLogLevel {
            value: value.to_owned(),
        })
}

fn init_logging(flag: Option<&str>) -> Result<(), CliError> {
    let from_env = std::env::var(ENV_LOG_LEVEL).ok();
    let level = flag
        .or(from_env.as_deref())
        .map_or(Ok(LevelFilter::Info), parse_log_level)?;
    if TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        log::debug!("logger already installed; keeping it");
    }
    Ok(())
}

fn parse_locale(value: Option<&str>) -> Result<Locale, CliError> {
    value.map_or_else(
        || Ok(Locale::default()),
        |tag| tag.parse::<Locale>().map_err(CliError::from),
    )
}

fn evaluation_time(value: Option<&str>) -> Result<Timestamp, CliError> {
    value.map_or_else(
        || Ok(Local::now().fixed_offset()),
        |text| {
            DateTime::parse_from_rfc3339(text).map_err(|source| CliError::InvalidTimestamp {
                value: text.to_owned(),
                source,
            })
        },
    )
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
