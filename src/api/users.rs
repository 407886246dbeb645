//! User lookup, search and spam reporting.

use crate::api::{identifying_user, push_num, require};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;

impl TwitterClient {
    /// A single user's profile.
    pub async fn show_user(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.get(endpoints::SHOW_USER, params).await
    }

    /// Hydrate up to 100 users; the identifiers are comma-separated
    /// lists.
    pub async fn lookup_users(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.get(endpoints::LOOKUP_USERS, params).await
    }

    /// Simple relevance-based user search.
    pub async fn search_users(&self, query: &str, page: Option<u32>) -> TwitterResult<String> {
        require("query", query)?;
        let mut params = vec![("q".to_string(), query.to_string())];
        push_num(&mut params, "page", page);
        self.get(endpoints::SEARCH_USERS, params).await
    }

    /// Report a user as spam (also blocks them).
    pub async fn report_spam(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.post(endpoints::REPORT_SPAM, params).await
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
    async fn show_user_with_no_identifiers_never_dispatches() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        let client = client(transport.clone()).await;

        let err = client.show_user(Some(""), Some("")).await.unwrap_err();
        assert!(matches!(err, TwitterError::Validation(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn search_users_pages_through_results() {
        let transport = Arc::new(RecordingTransport::ok("[]"));
        let client = client(transport.clone()).await;

        client.search_users("rust", Some(3)).await.unwrap();

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("q=rust"));
        assert!(url.contains("page=3"));
    }
}
