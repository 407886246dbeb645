//! Twitter-specific error types.

use thiserror::Error;

/// Errors surfaced by the client.
///
/// Every failure is returned to the immediate caller; nothing is retried
/// and nothing terminates the process.
#[derive(Error, Debug)]
pub enum TwitterError {
    /// Caller supplied insufficient or contradictory parameters.
    /// Surfaced before any network call is made.
    #[error("invalid parameters: {0}")]
    Validation(String),

    /// A resource call was attempted without a completed authorization
    /// flow (no active access token).
    #[error("authentication required: no active access token")]
    AuthenticationRequired,

    /// Network-level failure: connection, timeout, or body read.
    #[error("transport error: {0}")]
    Transport(String),

    /// Twitter rejected the request, either with a non-2xx status or a
    /// success response whose payload carries an error envelope.
    #[error("Twitter API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        error_code: Option<i32>,
    },

    /// OAuth signature generation failed.
    #[error("OAuth error: {0}")]
    OAuth(String),

    /// A token endpoint returned a body that does not parse as
    /// urlencoded token credentials.
    #[error("invalid token response: {0}")]
    InvalidTokenResponse(String),
}

impl TwitterError {
    /// Whether the provider itself rejected the request, as opposed to a
    /// failure reaching it.
    #[must_use]
    pub const fn is_protocol(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Whether the request never completed at the transport level.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for TwitterError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type for Twitter operations.
pub type TwitterResult<T> = Result<T, TwitterError>;
