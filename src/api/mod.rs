//! Thin per-endpoint wrapper methods, grouped by resource family.
//!
//! Every wrapper does the same dance: validate the identifying
//! parameters, collect the query/body parameter set, substitute the
//! `:id` placeholder where the endpoint has one, and make exactly one
//! dispatcher call. All responses come back as the raw body text.
//!
//! Unlike the classic wrappers this grew out of, independently supplied
//! optional parameters are all forwarded, not just the first one.

pub(crate) mod account;
pub(crate) mod blocks;
pub(crate) mod direct_messages;
pub(crate) mod favorites;
pub(crate) mod friendships;
pub(crate) mod media;
pub(crate) mod mutes;
pub(crate) mod search;
pub(crate) mod timelines;
pub(crate) mod tweets;
pub(crate) mod users;

use crate::error::{TwitterError, TwitterResult};

/// Append `key=value` when the value is present and non-empty.
pub(crate) fn push_opt(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            params.push((key.to_string(), value.to_string()));
        }
    }
}

/// Append a numeric parameter when present.
pub(crate) fn push_num(params: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}

/// Append `key=true` when the flag is set.
pub(crate) fn push_flag(params: &mut Vec<(String, String)>, key: &str, value: bool) {
    if value {
        params.push((key.to_string(), "true".to_string()));
    }
}

/// Require a non-empty identifier, e.g. a tweet ID destined for a path
/// placeholder.
pub(crate) fn require(name: &str, value: &str) -> TwitterResult<()> {
    if value.is_empty() {
        return Err(TwitterError::Validation(format!("{name} cannot be empty")));
    }
    Ok(())
}

/// Parameter set identifying a user by screen name and/or numeric ID.
/// At least one must be non-empty; both are forwarded when given.
pub(crate) fn identifying_user(
    screen_name: Option<&str>,
    user_id: Option<&str>,
) -> TwitterResult<Vec<(String, String)>> {
    let mut params = Vec::new();
    push_opt(&mut params, "screen_name", screen_name);
    push_opt(&mut params, "user_id", user_id);
    if params.is_empty() {
        return Err(TwitterError::Validation(
            "screen_name and user_id cannot both be empty".into(),
        ));
    }
    Ok(params)
}
