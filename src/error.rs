// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for remote-store calls.
///
/// The remote store does not distinguish much beyond "the call failed":
/// a schema rejection and a network outage both surface to callers as an
/// error value. `NotFound` exists for single-row fetches and is folded
/// into an empty result before it reaches the public API.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("payload rejected by remote store: {0}")]
    Validation(String),

    #[error("row not found")]
    NotFound,

    #[error("remote store unreachable: {0}")]
    Transport(String),
}

impl StoreError {
    /// Map an HTTP status plus response body onto the taxonomy.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::NOT_FOUND | StatusCode::NOT_ACCEPTABLE => StoreError::NotFound,
            s if s.is_server_error() => StoreError::Transport(format!("{}: {}", s, body)),
            s => StoreError::Validation(format!("{}: {}", s, body)),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Validation(format!("malformed response: {}", err))
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}
