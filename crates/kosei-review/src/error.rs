//! Review and submission error types.

use kosei_core::ValidationErrors;
use thiserror::Error;

/// Errors that can occur when talking to the review service.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The review service returned a non-success status code.
    #[error("review service returned status {status}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The response body did not match the expected feedback shape.
    #[error("failed to decode review response: {0}")]
    Decode(String),

    /// The configured endpoint is not a usable URL.
    #[error("invalid review endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Errors from one submission attempt. All are terminal for that attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed client-side validation; nothing was sent.
    #[error("draft is invalid:\n{0}")]
    Invalid(#[from] ValidationErrors),

    /// The review request failed.
    #[error(transparent)]
    Review(#[from] ReviewError),
}
