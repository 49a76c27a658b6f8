//! HTTP-layer error types.

use thiserror::Error;

/// Anything that stops a response body from turning into typed data.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
