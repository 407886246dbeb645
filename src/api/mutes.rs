//! Muting.

use crate::api::{identifying_user, push_opt};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;

impl TwitterClient {
    /// Mute a user.
    pub async fn mute(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.post(endpoints::CREATE_MUTE, params).await
    }

    /// Remove a mute.
    pub async fn unmute(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.post(endpoints::DESTROY_MUTE, params).await
    }

    /// IDs of every muted user.
    pub async fn muted_ids(&self, cursor: Option<&str>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "cursor", cursor);
        self.get(endpoints::MUTED_IDS, params).await
    }

    /// Hydrated muted users.
    pub async fn muted_users(&self, cursor: Option<&str>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "cursor", cursor);
        self.get(endpoints::MUTED_USERS, params).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::TwitterConfig;
    use crate::testutil::RecordingTransport;
    use crate::token::AccessToken;

    #[tokio::test]
    async fn mute_endpoints_live_under_mutes_users() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        let client =
            TwitterClient::with_transport(TwitterConfig::new("ck", "cs"), transport.clone());
        client.set_access_token(AccessToken::new("t", "s")).await;

        client.mute(Some("loud"), None).await.unwrap();
        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("/1.1/mutes/users/create.json"));

        client.muted_ids(Some("-1")).await.unwrap();
        let url = transport.last_request().unwrap().url;
        assert!(url.contains("/1.1/mutes/users/ids.json"));
        assert!(url.contains("cursor=-1"));
    }
}
