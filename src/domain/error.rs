use std::io;

use thiserror::Error;

/// Library-wide error type for jimmystore operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Draft rejected before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A mutation against the inventory service failed.
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// A catalog fetch failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Admin command issued without a stored session token.
    #[error("Not logged in. Run 'jimmystore login <username>' first.")]
    NotLoggedIn,
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// Rejected user input; always recoverable locally by correcting it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming.
    #[error("Title must not be empty")]
    EmptyTitle,

    /// Price is not a non-negative number.
    #[error("Price must be a non-negative number")]
    InvalidPrice,

    /// Category is outside the known set.
    #[error("Unknown category '{0}': must be one of mice, mousepads")]
    UnknownCategory(String),
}

/// A write against the inventory service failed.
///
/// A failed mutation never touches the local snapshot: no reload runs,
/// so the view stays at the last known-good state.
#[derive(Debug, Error)]
pub enum MutationError {
    /// Target item no longer exists on the server.
    #[error("Item not found")]
    NotFound,

    /// The request never produced a server response.
    #[error("Request failed: {0}")]
    TransportFailure(String),

    /// The server answered with an error.
    #[error("Server rejected the request ({status}): {reason}")]
    ServerRejected { status: u16, reason: String },
}

/// A catalog fetch failed; the snapshot stays at its last good value
/// (or empty on first load).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a usable server response.
    #[error("Failed to load items: {0}")]
    TransportFailure(String),

    /// The response body did not decode as an item list.
    #[error("Failed to parse item list: {0}")]
    MalformedResponse(String),
}
