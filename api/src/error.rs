use thiserror::Error;

/// Uniform failure raised by [`crate::ApiClient`].
///
/// Every variant carries a human-readable message; views render
/// `err.to_string()` next to the form that triggered the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend answered `401`. The stored session has already been
    /// cleared by the time this is returned; callers treat it as logout.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Non-2xx response. Carries the body's `message` field, or a generic
    /// message when the body had none.
    #[error("{0}")]
    Api(String),

    /// Network or JSON failure below the HTTP contract.
    #[error("Request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
