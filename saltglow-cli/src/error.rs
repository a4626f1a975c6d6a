//! Error types emitted by the Saltglow CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use saltglow_core::{CandidateError, ParseLocaleError};
use thiserror::Error;

/// Errors emitted by the Saltglow CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The requested log level is not recognised.
    #[error("unknown log level {value:?} (use error, warn, info, debug, trace, or off)")]
    InvalidLogLevel {
        /// Rejected text.
        value: String,
    },
    /// The requested locale is not supported.
    #[error(transparent)]
    InvalidLocale(#[from] ParseLocaleError),
    /// The evaluation time could not be parsed.
    #[error("evaluation time {value:?} is not an RFC 3339 timestamp: {source}")]
    InvalidTimestamp {
        /// Rejected text.
        value: String,
        /// Underlying parse error.
        #[source]
        source: chrono::ParseError,
    },
    /// A required input file could not be read.
    #[error("failed to read {field} at {path:?}: {source}")]
    ReadInput {
        /// Flag that named the file.
        field: &'static str,
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A required input file held malformed JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Flag that named the file.
        field: &'static str,
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A candidate site failed validation.
    #[error("candidate {id} is invalid: {source}")]
    InvalidCandidate {
        /// Identifier of the rejected candidate.
        id: u64,
        /// Validation failure.
        #[source]
        source: CandidateError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
