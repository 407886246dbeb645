//! Tweet CRUD, retweets and oEmbed.

use url::Url;

use crate::api::{push_flag, push_opt, require};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::{TwitterError, TwitterResult};

/// Extract the numeric tweet ID from a tweet permalink, e.g.
/// `https://twitter.com/rustlang/status/1234567890`. Returns `None` when
/// the URL does not address a single tweet.
#[must_use]
pub fn tweet_id_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    segments.find(|segment| *segment == "status" || *segment == "statuses")?;
    let id = segments.next()?;
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(id.to_string())
}

/// Optional parameters for [`TwitterClient::tweet`].
#[derive(Debug, Clone, Default)]
pub struct TweetOptions {
    /// ID of an existing tweet this one replies to.
    pub in_reply_to_status_id: Option<String>,
    /// Comma-separated media IDs from a prior upload.
    pub media_ids: Option<String>,
    /// Mark the tweet as possibly sensitive.
    pub possibly_sensitive: bool,
    /// Attach the exact coordinates the tweet was sent from.
    pub display_coordinates: bool,
}

impl TwitterClient {
    /// Post a new tweet. Either the status text or attached media must
    /// be present.
    pub async fn tweet(&self, status: &str, options: &TweetOptions) -> TwitterResult<String> {
        if status.is_empty() && options.media_ids.as_deref().map_or(true, str::is_empty) {
            return Err(TwitterError::Validation(
                "status and media_ids cannot both be empty".into(),
            ));
        }

        let mut params = Vec::new();
        push_opt(&mut params, "status", Some(status));
        push_opt(
            &mut params,
            "in_reply_to_status_id",
            options.in_reply_to_status_id.as_deref(),
        );
        push_opt(&mut params, "media_ids", options.media_ids.as_deref());
        push_flag(&mut params, "possibly_sensitive", options.possibly_sensitive);
        push_flag(
            &mut params,
            "display_coordinates",
            options.display_coordinates,
        );

        self.post(endpoints::UPDATE_STATUS, params).await
    }

    /// Retweet by tweet ID. Retweeting an already-retweeted tweet comes
    /// back as [`TwitterError::Api`].
    pub async fn retweet(&self, id: &str) -> TwitterResult<String> {
        require("id", id)?;
        self.post(&endpoints::substitute_id(endpoints::RETWEET, id), Vec::new())
            .await
    }

    /// Delete one of the authenticated user's tweets.
    pub async fn delete_tweet(&self, id: &str) -> TwitterResult<String> {
        require("id", id)?;
        self.post(
            &endpoints::substitute_id(endpoints::DESTROY_STATUS, id),
            Vec::new(),
        )
        .await
    }

    /// Fetch a single tweet.
    pub async fn show_tweet(&self, id: &str) -> TwitterResult<String> {
        require("id", id)?;
        self.get(endpoints::SHOW_STATUS, vec![("id".into(), id.into())])
            .await
    }

    /// Fetch up to 100 tweets by ID in one call.
    pub async fn lookup_tweets(&self, ids: &[&str]) -> TwitterResult<String> {
        if ids.is_empty() {
            return Err(TwitterError::Validation("ids cannot be empty".into()));
        }
        self.get(
            endpoints::LOOKUP_STATUSES,
            vec![("id".into(), ids.join(","))],
        )
        .await
    }

    /// oEmbed markup for a tweet, addressed by ID or by URL.
    pub async fn oembed(&self, id: Option<&str>, url: Option<&str>) -> TwitterResult<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "id", id);
        push_opt(&mut params, "url", url);
        if params.is_empty() {
            return Err(TwitterError::Validation(
                "id and url cannot both be empty".into(),
            ));
        }
        self.get(endpoints::OEMBED, params).await
    }

    /// IDs of users who retweeted the given tweet.
    pub async fn retweeters(&self, id: &str) -> TwitterResult<String> {
        require("id", id)?;
        self.get(endpoints::RETWEETERS, vec![("id".into(), id.into())])
            .await
    }

    /// The most recent retweets of the given tweet.
    pub async fn retweets_of(&self, id: &str, count: Option<u32>) -> TwitterResult<String> {
        require("id", id)?;
        let mut params = Vec::new();
        crate::api::push_num(&mut params, "count", count);
        self.get(&endpoints::substitute_id(endpoints::RETWEETS, id), params)
            .await
    }

    /// The authenticated user's tweets that were retweeted by others.
    pub async fn retweets_of_me(&self, count: Option<u32>) -> TwitterResult<String> {
        let mut params = Vec::new();
        crate::api::push_num(&mut params, "count", count);
        self.get(endpoints::RETWEETS_OF_ME, params).await
    }
}
