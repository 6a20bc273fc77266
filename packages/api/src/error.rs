//! Failure taxonomy for remote calls.
//!
//! Every error keeps the raw response text so the UI can show the user
//! exactly what the backend said. Nothing here is retried or logged on
//! its own; callers decide how to surface a failure.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a status other than the expected one.
    #[error("request failed: {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// The backend answered with the expected status but the body was
    /// not the JSON we asked for.
    #[error("failed to decode response: {body}")]
    DecodeFailed { body: String },

    /// The backend answered 200 with a blank body. Only the profile
    /// endpoint is known to do this; it is distinct from a decode error.
    #[error("empty response from server")]
    EmptyResponse,

    /// Transport-level failure: timeout, DNS, connection refused.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}
