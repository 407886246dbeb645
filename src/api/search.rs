//! Tweet search.

use crate::api::{push_opt, require};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;

impl TwitterClient {
    /// Search recent tweets. `geocode` is `lat,long,radius` when given.
    pub async fn search_tweets(
        &self,
        query: &str,
        geocode: Option<&str>,
    ) -> TwitterResult<String> {
        require("query", query)?;
        let mut params = vec![("q".to_string(), query.to_string())];
        push_opt(&mut params, "geocode", geocode);
        self.get(endpoints::SEARCH_TWEETS, params).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::TwitterConfig;
    use crate::error::TwitterError;
    use crate::testutil::RecordingTransport;
    use crate::token::AccessToken;

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        let client =
            TwitterClient::with_transport(TwitterConfig::new("ck", "cs"), transport.clone());
        client.set_access_token(AccessToken::new("t", "s")).await;

        let err = client.search_tweets("", None).await.unwrap_err();
        assert!(matches!(err, TwitterError::Validation(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn query_and_geocode_are_forwarded() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        let client =
            TwitterClient::with_transport(TwitterConfig::new("ck", "cs"), transport.clone());
        client.set_access_token(AccessToken::new("t", "s")).await;

        client
            .search_tweets("#rustlang", Some("37.78,-122.40,1mi"))
            .await
            .unwrap();

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("/1.1/search/tweets.json"));
        assert!(url.contains("q=%23rustlang"));
        assert!(url.contains("geocode="));
    }
}
