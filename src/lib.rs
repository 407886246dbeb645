//! Client bindings for the Twitter REST API v1.1.
//!
//! The crate covers the OAuth 1.0a three-legged PIN flow, request
//! signing (HMAC-SHA1), and thin wrappers over the common v1.1
//! resource families. Wrappers return the raw response body text;
//! deserializing it is left to the caller.
//!
//! ```no_run
//! use twitter1::{TwitterClient, TwitterConfig};
//!
//! # async fn run() -> twitter1::TwitterResult<()> {
//! let client = TwitterClient::new(TwitterConfig::new("consumer-key", "consumer-secret"))?;
//! // client.authorize(&prompt).await?; or install a persisted token:
//! client
//!     .set_access_token(twitter1::AccessToken::new("token", "secret"))
//!     .await;
//! let timeline = client.home_timeline(Some(20)).await?;
//! println!("{timeline}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

mod api;
mod auth;
mod client;
mod config;
mod endpoints;
mod error;
mod oauth;
#[cfg(test)]
mod testutil;
mod token;
mod transport;

pub use api::account::{AccountSettingsUpdate, ProfileUpdate};
pub use api::tweets::{tweet_id_from_url, TweetOptions};
pub use auth::VerifierPrompt;
pub use client::TwitterClient;
pub use config::TwitterConfig;
pub use error::{TwitterError, TwitterResult};
pub use token::{AccessToken, RequestToken};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};
