//! Favorites (likes).

use crate::api::{push_num, push_opt, require};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;

impl TwitterClient {
    /// Like a tweet.
    pub async fn favorite(&self, id: &str) -> TwitterResult<String> {
        require("id", id)?;
        self.post(endpoints::CREATE_FAVORITE, vec![("id".into(), id.into())])
            .await
    }

    /// Remove a like.
    pub async fn unfavorite(&self, id: &str) -> TwitterResult<String> {
        require("id", id)?;
        self.post(endpoints::DESTROY_FAVORITE, vec![("id".into(), id.into())])
            .await
    }

    /// Recent likes, for the authenticated user or the addressed one.
    pub async fn favorites_list(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
        count: Option<u32>,
    ) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "screen_name", screen_name);
        push_opt(&mut params, "user_id", user_id);
        push_num(&mut params, "count", count);
        self.get(endpoints::LIST_FAVORITES, params).await
    }
}
