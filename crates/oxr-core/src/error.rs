use thiserror::Error;

use crate::http_client::HttpError;

/// Input errors detected before any request leaves the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency code cannot be empty")]
    EmptyCurrency,
    #[error("currency code length {len} exceeds max {max}")]
    CurrencyTooLong { len: usize, max: usize },
    #[error("currency code contains invalid character '{ch}' at index {index}")]
    CurrencyInvalidChar { ch: char, index: usize },

    #[error("invalid period '{value}', expected one of 1m, 5m, 15m, 30m, 1h, 12h, 1d, 1w, 1mo")]
    InvalidPeriod { value: String },

    #[error("date must be a valid YYYY-MM-DD calendar date: '{value}'")]
    InvalidDate { value: String },
    #[error("timestamp must be an RFC3339 datetime: '{value}'")]
    InvalidTimestamp { value: String },

    #[error("endpoint '{endpoint}' expects {expected} path segment(s), got {actual}")]
    PathSegmentCount {
        endpoint: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("base url must be an absolute http(s) URL: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("app_id cannot be empty")]
    EmptyAppId,
    #[error("environment variable {name} is not set")]
    MissingEnv { name: &'static str },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
}

/// Coarse error category, for callers that only branch on the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    /// The caller supplied bad input.
    Validation,
    /// The host could not be reached or the body could not be read.
    Connectivity,
    /// The API answered with a non-2xx status.
    Status,
    /// The API answered 2xx but the body did not match the expected shape.
    Decode,
}

/// Top-level error returned by every [`Client`](crate::Client) operation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The underlying transport error is available through `source()`.
    #[error("connectivity error: {0}")]
    Connectivity(#[from] HttpError),

    #[error("api returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub const fn kind(&self) -> ClientErrorKind {
        match self {
            Self::Validation(_) => ClientErrorKind::Validation,
            Self::Connectivity(_) => ClientErrorKind::Connectivity,
            Self::Status { .. } => ClientErrorKind::Status,
            Self::Decode(_) => ClientErrorKind::Decode,
        }
    }

    /// HTTP status of a rejected request, if the API answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Connectivity(error) if error.is_timeout())
    }
}
