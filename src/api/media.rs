//! Media upload.
//!
//! The upload host is separate from the REST host; the returned
//! `media_id_string` feeds [`crate::TweetOptions::media_ids`].

use crate::api::require;
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::TwitterResult;
use crate::transport::Method;

impl TwitterClient {
    /// Upload one media file. `data` is the base64-encoded file content.
    pub async fn upload_media(&self, data: &str) -> TwitterResult<String> {
        require("media", data)?;
        let url = self.upload_endpoint(endpoints::MEDIA_UPLOAD);
        let params = vec![("media_data".to_string(), data.to_string())];
        self.request(Method::Post, &url, &params).await
    }
}
