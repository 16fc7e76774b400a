//! Retrieval error types.

use thiserror::Error;

/// Errors surfaced by the design API client.
///
/// All of these are fatal for a generation run; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request to design API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("design API returned {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode design API response: {0}")]
    Decode(#[from] serde_json::Error),
}
