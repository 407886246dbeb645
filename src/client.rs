//! Twitter REST API client and signed-request dispatcher.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::config::TwitterConfig;
use crate::error::{TwitterError, TwitterResult};
use crate::oauth::OAuthSigner;
use crate::token::AccessToken;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};

/// Client for the Twitter REST API v1.1.
///
/// Holds the consumer credentials and the currently active access token.
/// The token is per-instance state behind a read/write lock, so one
/// process can drive several independent authenticated sessions and a
/// single client is safe to share across tasks.
pub struct TwitterClient {
    config: TwitterConfig,
    signer: OAuthSigner,
    transport: Arc<dyn HttpTransport>,
    access: RwLock<Option<AccessToken>>,
}

impl TwitterClient {
    /// Create a client backed by the default [`ReqwestTransport`].
    pub fn new(config: TwitterConfig) -> TwitterResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client with a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: TwitterConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            signer: OAuthSigner::new(&config),
            config,
            transport,
            access: RwLock::new(None),
        }
    }

    /// Install an access token obtained outside the authorization flow,
    /// e.g. one persisted from a previous session.
    pub async fn set_access_token(&self, token: AccessToken) {
        *self.access.write().await = Some(token);
    }

    /// Clear the active access token. Idempotent; subsequent resource
    /// calls fail with [`TwitterError::AuthenticationRequired`] before
    /// any request is sent.
    pub async fn deauthorize(&self) {
        if self.access.write().await.take().is_some() {
            debug!("cleared access token");
        }
    }

    /// Whether an access token is currently active.
    pub async fn is_authorized(&self) -> bool {
        self.access.read().await.is_some()
    }

    /// Snapshot of the active access token, if any.
    pub async fn access_token(&self) -> Option<AccessToken> {
        self.access.read().await.clone()
    }

    pub(crate) fn config(&self) -> &TwitterConfig {
        &self.config
    }

    pub(crate) fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    pub(crate) fn upload_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.upload_url.trim_end_matches('/'), path)
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> TwitterResult<String> {
        let url = self.api_endpoint(path);
        self.request(Method::Get, &url, &params).await
    }

    pub(crate) async fn post(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> TwitterResult<String> {
        let url = self.api_endpoint(path);
        self.request(Method::Post, &url, &params).await
    }

    /// Perform exactly one OAuth-signed request against a concrete URL.
    ///
    /// Requires an active access token. GET parameters become the query
    /// string, POST parameters the form-encoded body; either way every
    /// pair participates in the signature. The full body is read before
    /// returning. No retries.
    #[instrument(skip(self, params), fields(method = %method))]
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        params: &[(String, String)],
    ) -> TwitterResult<String> {
        let token = self
            .access
            .read()
            .await
            .clone()
            .ok_or(TwitterError::AuthenticationRequired)?;

        self.send_signed(method, url, params, Some((&token.token, &token.secret)), &[])
            .await
    }

    /// Shared plumbing for resource calls and the handshake steps (which
    /// sign with no token or with temporary credentials).
    pub(crate) async fn send_signed(
        &self,
        method: Method,
        url: &str,
        params: &[(String, String)],
        token: Option<(&str, &str)>,
        extra_oauth: &[(&str, &str)],
    ) -> TwitterResult<String> {
        let auth_header = self
            .signer
            .authorization_header(method, url, params, token, extra_oauth)?;

        let encoded = serde_urlencoded::to_string(params)
            .map_err(|e| TwitterError::Validation(format!("unencodable parameters: {e}")))?;

        let (full_url, body) = match method {
            Method::Get if encoded.is_empty() => (url.to_string(), None),
            Method::Get => (format!("{url}?{encoded}"), None),
            Method::Post => (url.to_string(), Some(encoded)),
        };

        let mut headers = vec![("Authorization".to_string(), auth_header)];
        if body.is_some() {
            headers.push((
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ));
        }

        debug!(url = %full_url, "dispatching signed request");
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: full_url,
                headers,
                body,
            })
            .await?;

        handle_response(response)
    }
}

/// Map a finished HTTP exchange to the raw body or a protocol error.
///
/// Twitter sometimes reports failures inside a 200 response ("You have
/// already retweeted this Tweet"), so success bodies are checked for the
/// v1.1 error envelope as well.
fn handle_response(response: HttpResponse) -> TwitterResult<String> {
    let status = response.status;
    let envelope = parse_error_envelope(&response.body);

    if (200..300).contains(&status) {
        return match envelope {
            Some((message, error_code)) => Err(TwitterError::Api {
                status,
                message,
                error_code,
            }),
            None => Ok(response.body),
        };
    }

    let (message, error_code) = envelope.unwrap_or_else(|| {
        let trimmed = response.body.trim();
        if trimmed.is_empty() {
            ("unknown error".to_string(), None)
        } else {
            (trimmed.to_string(), None)
        }
    });

    Err(TwitterError::Api {
        status,
        message,
        error_code,
    })
}

/// Extract the first entry of a v1.1 error envelope, if the body is one.
fn parse_error_envelope(body: &str) -> Option<(String, Option<i32>)> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    if let Some(errors) = object.get("errors").and_then(|e| e.as_array()) {
        let first = errors.first()?;
        if let Some(message) = first.get("message").and_then(|m| m.as_str()) {
            let code = first
                .get("code")
                .and_then(serde_json::Value::as_i64)
                .and_then(|c| i32::try_from(c).ok());
            return Some((message.to_string(), code));
        }
        return Some((first.to_string(), None));
    }

    // Some endpoints use {"error": "..."} instead.
    object
        .get("error")
        .and_then(|e| e.as_str())
        .map(|message| (message.to_string(), None))
}
