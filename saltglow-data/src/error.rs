//! Error types produced while decoding payloads.

use thiserror::Error;

/// Errors raised while decoding a forecast payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ForecastParseError {
    /// The payload was not valid JSON of the expected shape.
    #[error("failed to decode forecast payload: {source}")]
    Json {
        /// Underlying decoder error.
        #[from]
        source: serde_json::Error,
    },
    /// The provider reported a failure instead of data.
    #[error("forecast provider returned status code {code}")]
    Upstream {
        /// Status code carried in the payload.
        code: String,
    },
    /// A numeric field held text that is not a number.
    #[error("forecast field {field} has non-numeric value {value:?}")]
    InvalidNumber {
        /// Field name as it appears on the wire.
        field: &'static str,
        /// Rejected text.
        value: String,
    },
    /// A forecast hour carried an unreadable timestamp.
    #[error("forecast time {value:?} is not an ISO-8601 timestamp: {source}")]
    InvalidTime {
        /// Rejected text.
        value: String,
        /// Underlying parse error.
        source: chrono::ParseError,
    },
}

/// Errors raised while decoding a sensor snapshot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SensorParseError {
    /// The payload was not valid JSON of the expected shape.
    #[error("failed to decode sensor payload: {source}")]
    Json {
        /// Underlying decoder error.
        #[from]
        source: serde_json::Error,
    },
}
