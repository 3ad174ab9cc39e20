use thiserror::Error;

/// Failure of a call to the indexing/query service.
///
/// The view collapses every variant into one generic status line; the
/// detail is kept for logging and for [`crate::state::Failure`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a user action was refused before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0}")]
    Validation(String),

    #[error("another request is still in flight")]
    Busy,
}
