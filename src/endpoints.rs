//! Endpoint catalog.
//!
//! Static mapping from logical operation to the path under the API base
//! URL. Paths containing `:id` must go through [`substitute_id`] before
//! signing; substitution happens exactly once per call.

// OAuth 1.0a handshake
pub(crate) const REQUEST_TOKEN: &str = "/oauth/request_token";
pub(crate) const AUTHENTICATE: &str = "/oauth/authenticate";
pub(crate) const ACCESS_TOKEN: &str = "/oauth/access_token";

// Tweets
pub(crate) const UPDATE_STATUS: &str = "/1.1/statuses/update.json";
pub(crate) const RETWEET: &str = "/1.1/statuses/retweet/:id.json";
pub(crate) const DESTROY_STATUS: &str = "/1.1/statuses/destroy/:id.json";
pub(crate) const SHOW_STATUS: &str = "/1.1/statuses/show.json";
pub(crate) const LOOKUP_STATUSES: &str = "/1.1/statuses/lookup.json";
pub(crate) const OEMBED: &str = "/1.1/statuses/oembed.json";
pub(crate) const RETWEETERS: &str = "/1.1/statuses/retweeters/ids.json";
pub(crate) const RETWEETS: &str = "/1.1/statuses/retweets/:id.json";
pub(crate) const RETWEETS_OF_ME: &str = "/1.1/statuses/retweets_of_me.json";

// Timelines
pub(crate) const HOME_TIMELINE: &str = "/1.1/statuses/home_timeline.json";
pub(crate) const MENTIONS_TIMELINE: &str = "/1.1/statuses/mentions_timeline.json";
pub(crate) const USER_TIMELINE: &str = "/1.1/statuses/user_timeline.json";

// Search
pub(crate) const SEARCH_TWEETS: &str = "/1.1/search/tweets.json";

// Favorites
pub(crate) const CREATE_FAVORITE: &str = "/1.1/favorites/create.json";
pub(crate) const DESTROY_FAVORITE: &str = "/1.1/favorites/destroy.json";
pub(crate) const LIST_FAVORITES: &str = "/1.1/favorites/list.json";

// Users
pub(crate) const SHOW_USER: &str = "/1.1/users/show.json";
pub(crate) const LOOKUP_USERS: &str = "/1.1/users/lookup.json";
pub(crate) const SEARCH_USERS: &str = "/1.1/users/search.json";
pub(crate) const REPORT_SPAM: &str = "/1.1/users/report_spam.json";
pub(crate) const PROFILE_BANNER: &str = "/1.1/users/profile_banner.json";

// Friendships
pub(crate) const CREATE_FRIENDSHIP: &str = "/1.1/friendships/create.json";
pub(crate) const DESTROY_FRIENDSHIP: &str = "/1.1/friendships/destroy.json";
pub(crate) const UPDATE_FRIENDSHIP: &str = "/1.1/friendships/update.json";
pub(crate) const SHOW_FRIENDSHIP: &str = "/1.1/friendships/show.json";
pub(crate) const LOOKUP_FRIENDSHIPS: &str = "/1.1/friendships/lookup.json";
pub(crate) const INCOMING_FRIENDSHIPS: &str = "/1.1/friendships/incoming.json";
pub(crate) const OUTGOING_FRIENDSHIPS: &str = "/1.1/friendships/outgoing.json";
pub(crate) const FRIEND_IDS: &str = "/1.1/friends/ids.json";
pub(crate) const FOLLOWER_IDS: &str = "/1.1/followers/ids.json";
pub(crate) const FRIENDS_LIST: &str = "/1.1/friends/list.json";
pub(crate) const FOLLOWERS_LIST: &str = "/1.1/followers/list.json";

// Direct messages
pub(crate) const DIRECT_MESSAGES: &str = "/1.1/direct_messages.json";
pub(crate) const SENT_DIRECT_MESSAGES: &str = "/1.1/direct_messages/sent.json";
pub(crate) const SHOW_DIRECT_MESSAGE: &str = "/1.1/direct_messages/show.json";
pub(crate) const NEW_DIRECT_MESSAGE: &str = "/1.1/direct_messages/new.json";
pub(crate) const DESTROY_DIRECT_MESSAGE: &str = "/1.1/direct_messages/destroy.json";

// Account
pub(crate) const VERIFY_CREDENTIALS: &str = "/1.1/account/verify_credentials.json";
pub(crate) const ACCOUNT_SETTINGS: &str = "/1.1/account/settings.json";
pub(crate) const UPDATE_PROFILE: &str = "/1.1/account/update_profile.json";
pub(crate) const UPDATE_PROFILE_IMAGE: &str = "/1.1/account/update_profile_image.json";
pub(crate) const UPDATE_BACKGROUND_IMAGE: &str =
    "/1.1/account/update_profile_background_image.json";
pub(crate) const UPDATE_PROFILE_BANNER: &str = "/1.1/account/update_profile_banner.json";
pub(crate) const REMOVE_PROFILE_BANNER: &str = "/1.1/account/remove_profile_banner.json";

// Blocks and mutes
pub(crate) const CREATE_BLOCK: &str = "/1.1/blocks/create.json";
pub(crate) const DESTROY_BLOCK: &str = "/1.1/blocks/destroy.json";
pub(crate) const BLOCKED_IDS: &str = "/1.1/blocks/ids.json";
pub(crate) const BLOCKED_USERS: &str = "/1.1/blocks/list.json";
pub(crate) const CREATE_MUTE: &str = "/1.1/mutes/users/create.json";
pub(crate) const DESTROY_MUTE: &str = "/1.1/mutes/users/destroy.json";
pub(crate) const MUTED_IDS: &str = "/1.1/mutes/users/ids.json";
pub(crate) const MUTED_USERS: &str = "/1.1/mutes/users/list.json";

// Media (upload host)
pub(crate) const MEDIA_UPLOAD: &str = "/1.1/media/upload.json";

/// Replace the `:id` placeholder with a concrete identifier.
pub(crate) fn substitute_id(template: &str, id: &str) -> String {
    template.replace(":id", id)
}
