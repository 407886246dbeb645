//! Three-legged OAuth 1.0a authorization flow, out-of-band (PIN) variant.
//!
//! The dance: obtain temporary credentials signed with the consumer key
//! alone, send the user to the authorization page, then trade the
//! temporary token and the verifier PIN for a long-lived access token.
//! How the URL is shown and the PIN collected is the caller's business,
//! injected through [`VerifierPrompt`].

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::{TwitterError, TwitterResult};
use crate::token::{AccessToken, RequestToken};
use crate::transport::Method;

/// User-interaction surface for the PIN flow.
///
/// Implementations present the authorization URL to the user (terminal
/// prompt, browser launch, whatever fits the host application) and
/// return the verifier PIN shown after the user approves access. The
/// call blocks the flow until the human answers; that suspension is
/// deliberate.
#[async_trait]
pub trait VerifierPrompt: Send + Sync {
    async fn verifier(&self, authorization_url: &str) -> TwitterResult<String>;
}

impl TwitterClient {
    /// Request temporary credentials from `/oauth/request_token`.
    ///
    /// Signed with only the consumer key and secret; no token exists
    /// yet. Rejection by the provider (e.g. bad consumer credentials)
    /// surfaces as [`TwitterError::Api`].
    #[instrument(skip(self))]
    pub async fn request_token(&self) -> TwitterResult<RequestToken> {
        let url = self.api_endpoint(endpoints::REQUEST_TOKEN);
        let body = self
            .send_signed(Method::Post, &url, &[], None, &[("oauth_callback", "oob")])
            .await?;
        let token = parse_request_token(&body)?;
        debug!(callback_confirmed = token.callback_confirmed, "obtained temporary credentials");
        Ok(token)
    }

    /// The URL the user must visit to approve access for this token.
    #[must_use]
    pub fn authorization_url(&self, request_token: &RequestToken) -> String {
        format!(
            "{}?oauth_token={}",
            self.api_endpoint(endpoints::AUTHENTICATE),
            request_token.token
        )
    }

    /// Exchange temporary credentials and the verifier PIN for an
    /// access token. An empty PIN is rejected before any network call.
    #[instrument(skip(self, request_token, verifier))]
    pub async fn exchange_request_token(
        &self,
        request_token: &RequestToken,
        verifier: &str,
    ) -> TwitterResult<AccessToken> {
        let verifier = verifier.trim();
        if verifier.is_empty() {
            return Err(TwitterError::Validation(
                "verifier PIN cannot be empty".into(),
            ));
        }

        // oauth_verifier is a protocol parameter; it travels in the
        // Authorization header and nowhere else (RFC 5849 section 3.5).
        let url = self.api_endpoint(endpoints::ACCESS_TOKEN);
        let body = self
            .send_signed(
                Method::Post,
                &url,
                &[],
                Some((&request_token.token, &request_token.secret)),
                &[("oauth_verifier", verifier)],
            )
            .await?;
        parse_access_token(&body)
    }

    /// Run the whole flow and install the resulting access token as the
    /// client's active token.
    pub async fn authorize(&self, prompt: &dyn VerifierPrompt) -> TwitterResult<AccessToken> {
        let request_token = self.request_token().await?;
        let authorization_url = self.authorization_url(&request_token);

        let verifier = prompt.verifier(&authorization_url).await?;
        let token = self
            .exchange_request_token(&request_token, &verifier)
            .await?;

        info!(
            screen_name = token.screen_name.as_deref().unwrap_or("<unknown>"),
            "authorization complete"
        );
        self.set_access_token(token.clone()).await;
        Ok(token)
    }
}

fn token_fields(body: &str) -> TwitterResult<HashMap<String, String>> {
    serde_urlencoded::from_str(body).map_err(|e| TwitterError::InvalidTokenResponse(e.to_string()))
}

fn required(fields: &HashMap<String, String>, key: &str) -> TwitterResult<String> {
    fields
        .get(key)
        .cloned()
        .ok_or_else(|| TwitterError::InvalidTokenResponse(format!("missing {key}")))
}

fn parse_request_token(body: &str) -> TwitterResult<RequestToken> {
    let fields = token_fields(body)?;
    Ok(RequestToken {
        token: required(&fields, "oauth_token")?,
        secret: required(&fields, "oauth_token_secret")?,
        callback_confirmed: fields
            .get("oauth_callback_confirmed")
            .is_some_and(|v| v == "true"),
    })
}

fn parse_access_token(body: &str) -> TwitterResult<AccessToken> {
    let fields = token_fields(body)?;
    Ok(AccessToken {
        token: required(&fields, "oauth_token")?,
        secret: required(&fields, "oauth_token_secret")?,
        user_id: fields.get("user_id").cloned(),
        screen_name: fields.get("screen_name").cloned(),
    })
}
