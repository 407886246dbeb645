//! Blocking.

use crate::api::{identifying_user, push_opt};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;

impl TwitterClient {
    /// Block a user.
    pub async fn block(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.post(endpoints::CREATE_BLOCK, params).await
    }

    /// Remove a block.
    pub async fn unblock(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.post(endpoints::DESTROY_BLOCK, params).await
    }

    /// IDs of every blocked user.
    pub async fn blocked_ids(&self, cursor: Option<&str>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "cursor", cursor);
        self.get(endpoints::BLOCKED_IDS, params).await
    }

    /// Hydrated blocked users.
    pub async fn blocked_users(&self, cursor: Option<&str>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "cursor", cursor);
        self.get(endpoints::BLOCKED_USERS, params).await
    }
}
