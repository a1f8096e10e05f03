//! Shared error type across metricsd crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Route or metric does not exist.
    NotFound,
    /// Remote aggregator could not be reached or refused the metric.
    Transport,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Transport => "TRANSPORT",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core, server and agent.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricsError::BadRequest(_) | MetricsError::InvalidConfig(_) => ClientCode::BadRequest,
            MetricsError::NotFound(_) => ClientCode::NotFound,
            MetricsError::Transport(_) => ClientCode::Transport,
            MetricsError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message without the variant prefix, suitable for response bodies.
    pub fn reason(&self) -> &str {
        match self {
            MetricsError::BadRequest(m)
            | MetricsError::NotFound(m)
            | MetricsError::InvalidConfig(m)
            | MetricsError::Transport(m)
            | MetricsError::Internal(m) => m,
        }
    }
}
