//! Direct messages.

use crate::api::{identifying_user, push_flag, push_num, require};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;

impl TwitterClient {
    /// Most recent DMs received by the authenticated user.
    /// `skip_status` omits the sender's embedded status object.
    pub async fn direct_messages(
        &self,
        count: Option<u32>,
        skip_status: bool,
    ) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_num(&mut params, "count", count);
        push_flag(&mut params, "skip_status", skip_status);
        self.get(endpoints::DIRECT_MESSAGES, params).await
    }

    /// Most recent DMs sent by the authenticated user.
    pub async fn sent_direct_messages(
        &self,
        page: Option<u32>,
        count: Option<u32>,
    ) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_num(&mut params, "page", page);
        push_num(&mut params, "count", count);
        self.get(endpoints::SENT_DIRECT_MESSAGES, params).await
    }

    /// A single DM by ID.
    pub async fn show_direct_message(&self, id: &str) -> TwitterResult<String> {
        require("id", id)?;
        self.get(
            endpoints::SHOW_DIRECT_MESSAGE,
            vec![("id".into(), id.into())],
        )
        .await
    }

    /// Send a DM to the addressed user.
    pub async fn send_direct_message(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
        text: &str,
    ) -> TwitterResult<String> {
        require("text", text)?;
        let mut params = identifying_user(screen_name, user_id)?;
        params.push(("text".into(), text.into()));
        self.post(endpoints::NEW_DIRECT_MESSAGE, params).await
    }

    /// Delete a DM the authenticated user received.
    pub async fn delete_direct_message(&self, id: &str) -> TwitterResult<String> {
        require("id", id)?;
        self.post(
            endpoints::DESTROY_DIRECT_MESSAGE,
            vec![("id".into(), id.into())],
        )
        .await
    }
}
