//! OAuth 1.0a token pairs.

use serde::{Deserialize, Serialize};

/// Temporary credentials from the first step of the authorization flow.
///
/// Valid only long enough to send the user to the authorization page and
/// exchange the verifier PIN for an access token.
#[derive(Debug, Clone)]
pub struct RequestToken {
    /// OAuth token.
    pub token: String,
    /// OAuth token secret.
    pub secret: String,
    /// Whether the provider confirmed the out-of-band callback.
    pub callback_confirmed: bool,
}

/// Long-lived credentials authorizing API calls on behalf of a user.
///
/// Serializable so callers can persist a token between sessions and
/// reinstall it with [`crate::TwitterClient::set_access_token`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// OAuth token.
    pub token: String,
    /// OAuth token secret.
    pub secret: String,
    /// User ID, if the provider included one.
    pub user_id: Option<String>,
    /// Screen name, if the provider included one.
    pub screen_name: Option<String>,
}

impl AccessToken {
    /// Build a token from a pair obtained elsewhere (e.g. the developer
    /// portal or a previous session).
    #[must_use]
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
            user_id: None,
            screen_name: None,
        }
    }
}
