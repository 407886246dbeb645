//! Home, mentions and user timelines.

use crate::api::{identifying_user, push_flag, push_num};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;

impl TwitterClient {
    /// Tweets and retweets from the accounts the user follows.
    pub async fn home_timeline(&self, count: Option<u32>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_num(&mut params, "count", count);
        self.get(endpoints::HOME_TIMELINE, params).await
    }

    /// Tweets mentioning the authenticated user.
    pub async fn mentions_timeline(&self, count: Option<u32>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_num(&mut params, "count", count);
        self.get(endpoints::MENTIONS_TIMELINE, params).await
    }

    /// A user's own timeline, addressed by screen name and/or ID.
    pub async fn user_timeline(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
        count: Option<u32>,
        include_rts: bool,
    ) -> TwitterResult<String> {
        let mut params = identifying_user(screen_name, user_id)?;
        push_num(&mut params, "count", count);
        push_flag(&mut params, "include_rts", include_rts);
        self.get(endpoints::USER_TIMELINE, params).await
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

    async fn client(transport: Arc<RecordingTransport>) -> TwitterClient {
        let client = TwitterClient::with_transport(TwitterConfig::new("ck", "cs"), transport);
        client.set_access_token(AccessToken::new("t", "s")).await;
        client
    }

    #[tokio::test]
    async fn home_timeline_hits_the_home_endpoint() {
        let transport = Arc::new(RecordingTransport::ok("[]"));
        let client = client(transport.clone()).await;

        client.home_timeline(Some(20)).await.unwrap();

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("/1.1/statuses/home_timeline.json"));
        assert!(url.contains("count=20"));
    }

    #[tokio::test]
    async fn user_timeline_requires_an_identifier() {
        let transport = Arc::new(RecordingTransport::ok("[]"));
        let client = client(transport.clone()).await;

        let err = client
            .user_timeline(None, Some(""), Some(5), false)
            .await
            .unwrap_err();
        assert!(matches!(err, TwitterError::Validation(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn user_timeline_forwards_every_given_parameter() {
        let transport = Arc::new(RecordingTransport::ok("[]"));
        let client = client(transport.clone()).await;

        client
            .user_timeline(Some("rustlang"), Some("165262228"), Some(10), true)
            .await
            .unwrap();

        let url = transport.last_request().unwrap().url;
        for expected in [
            "screen_name=rustlang",
            "user_id=165262228",
            "count=10",
            "include_rts=true",
        ] {
            assert!(url.contains(expected), "missing {expected} in {url}");
        }
    }
}
