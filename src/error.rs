//! API Error Type
//!
//! Every network call funnels its failure into `ApiError`; views forward it
//! to the shared error slot on `AppContext`, which renders the root banner.

use thiserror::Error;

/// Failure of a projects-API or palette-API call
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, fetch rejection)
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx HTTP status
    #[error("server responded with status {0}")]
    Status(u16),
    /// Response body did not decode as the expected shape
    #[error("unreadable response: {0}")]
    Decode(String),
    /// 2xx response carrying an API-level error message
    #[error("{0}")]
    Api(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
