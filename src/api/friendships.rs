//! Follow relationships.

use crate::api::{identifying_user, push_num, push_opt, require};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;

impl TwitterClient {
    /// Follow a user.
    pub async fn follow(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.post(endpoints::CREATE_FRIENDSHIP, params).await
    }

    /// Unfollow a user.
    pub async fn unfollow(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.post(endpoints::DESTROY_FRIENDSHIP, params).await
    }

    /// Toggle device notifications and retweet visibility for a
    /// followed user. Only the supplied switches are sent.
    pub async fn update_friendship(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
        device: Option<bool>,
        retweets: Option<bool>,
    ) -> TwitterResult<String> {
        let mut params = identifying_user(screen_name, user_id)?;
        if let Some(device) = device {
            params.push(("device".into(), device.to_string()));
        }
        if let Some(retweets) = retweets {
            params.push(("retweets".into(), retweets.to_string()));
        }
        self.post(endpoints::UPDATE_FRIENDSHIP, params).await
    }

    /// The relationship between two users.
    pub async fn show_friendship(
        &self,
        source_screen_name: &str,
        target_screen_name: &str,
    ) -> TwitterResult<String> {
        require("source_screen_name", source_screen_name)?;
        require("target_screen_name", target_screen_name)?;
        self.get(
            endpoints::SHOW_FRIENDSHIP,
            vec![
                ("source_screen_name".into(), source_screen_name.into()),
                ("target_screen_name".into(), target_screen_name.into()),
            ],
        )
        .await
    }

    /// Relationship of the authenticated user to up to 100 users.
    pub async fn lookup_friendships(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.get(endpoints::LOOKUP_FRIENDSHIPS, params).await
    }

    /// IDs the addressed user follows.
    pub async fn friend_ids(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
        cursor: Option<&str>,
    ) -> TwitterResult<String> {
        let mut params = identifying_user(screen_name, user_id)?;
        push_opt(&mut params, "cursor", cursor);
        self.get(endpoints::FRIEND_IDS, params).await
    }

    /// IDs following the addressed user.
    pub async fn follower_ids(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
        cursor: Option<&str>,
    ) -> TwitterResult<String> {
        let mut params = identifying_user(screen_name, user_id)?;
        push_opt(&mut params, "cursor", cursor);
        self.get(endpoints::FOLLOWER_IDS, params).await
    }

    /// Hydrated users the addressed user follows.
    pub async fn friends_list(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
        cursor: Option<&str>,
        count: Option<u32>,
    ) -> TwitterResult<String> {
        let mut params = identifying_user(screen_name, user_id)?;
        push_opt(&mut params, "cursor", cursor);
        push_num(&mut params, "count", count);
        self.get(endpoints::FRIENDS_LIST, params).await
    }

    /// Hydrated users following the addressed user.
    pub async fn followers_list(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
        cursor: Option<&str>,
        count: Option<u32>,
    ) -> TwitterResult<String> {
        let mut params = identifying_user(screen_name, user_id)?;
        push_opt(&mut params, "cursor", cursor);
        push_num(&mut params, "count", count);
        self.get(endpoints::FOLLOWERS_LIST, params).await
    }

    /// Pending follow requests to the authenticated user (protected
    /// accounts only).
    pub async fn incoming_friendships(&self, cursor: Option<&str>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "cursor", cursor);
        self.get(endpoints::INCOMING_FRIENDSHIPS, params).await
    }

    /// Follow requests from the authenticated user awaiting approval.
    pub async fn outgoing_friendships(&self, cursor: Option<&str>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "cursor", cursor);
        self.get(endpoints::OUTGOING_FRIENDSHIPS, params).await
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
    async fn follow_requires_an_identifier() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        let client = client(transport.clone()).await;

        let err = client.follow(None, None).await.unwrap_err();
        assert!(matches!(err, TwitterError::Validation(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn followers_list_hits_the_list_endpoint_not_ids() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        let client = client(transport.clone()).await;

        client
            .followers_list(Some("rustlang"), None, Some("-1"), Some(200))
            .await
            .unwrap();

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("/1.1/followers/list.json"));
        assert!(url.contains("cursor=-1"));
        assert!(url.contains("count=200"));
    }

    #[tokio::test]
    async fn update_friendship_sends_only_supplied_switches() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        let client = client(transport.clone()).await;

        client
            .update_friendship(Some("rustlang"), None, Some(false), None)
            .await
            .unwrap();

        let body = transport.last_request().unwrap().body.unwrap();
        assert!(body.contains("device=false"));
        assert!(!body.contains("retweets="));
    }
}
