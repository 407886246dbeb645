//! Account settings and profile management.

use crate::api::{identifying_user, push_flag, push_opt, require};
use crate::client::TwitterClient;
use crate::endpoints;
use crate::error::{TwitterError, TwitterResult};

/// Profile fields that can be changed through
/// [`TwitterClient::update_profile`]. Unset fields are left alone.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub profile_link_color: Option<String>,
}

impl ProfileUpdate {
    fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "name", self.name.as_deref());
        push_opt(&mut params, "url", self.url.as_deref());
        push_opt(&mut params, "location", self.location.as_deref());
        push_opt(&mut params, "description", self.description.as_deref());
        push_opt(
            &mut params,
            "profile_link_color",
            self.profile_link_color.as_deref(),
        );
        params
    }
}

/// Settings accepted by [`TwitterClient::update_account_settings`].
/// Only the allow-listed keys below are ever sent.
#[derive(Debug, Default, Clone)]
pub struct AccountSettingsUpdate {
    pub sleep_time_enabled: Option<bool>,
    pub start_sleep_time: Option<String>,
    pub end_sleep_time: Option<String>,
    pub trend_location_woeid: Option<u32>,
    pub time_zone: Option<String>,
    pub lang: Option<String>,
}

impl AccountSettingsUpdate {
    fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(enabled) = self.sleep_time_enabled {
            params.push(("sleep_time_enabled".into(), enabled.to_string()));
        }
        push_opt(&mut params, "start_sleep_time", self.start_sleep_time.as_deref());
        push_opt(&mut params, "end_sleep_time", self.end_sleep_time.as_deref());
        if let Some(woeid) = self.trend_location_woeid {
            params.push(("trend_location_woeid".into(), woeid.to_string()));
        }
        push_opt(&mut params, "time_zone", self.time_zone.as_deref());
        push_opt(&mut params, "lang", self.lang.as_deref());
        params
    }
}

impl TwitterClient {
    /// The authenticated user's profile; also the cheapest way to check
    /// that the stored token still works.
    pub async fn verify_credentials(&self) -> TwitterResult<String> {
        self.get(endpoints::VERIFY_CREDENTIALS, Vec::new()).await
    }

    /// The authenticated user's account settings.
    pub async fn account_settings(&self) -> TwitterResult<String> {
        self.get(endpoints::ACCOUNT_SETTINGS, Vec::new()).await
    }

    /// Change account settings. Every supplied field is forwarded; an
    /// update with nothing to change is rejected locally.
    pub async fn update_account_settings(
        &self,
        update: &AccountSettingsUpdate,
    ) -> TwitterResult<String> {
        let params = update.params();
        if params.is_empty() {
            return Err(TwitterError::Validation(
                "account settings update has no fields to change".into(),
            ));
        }
        self.post(endpoints::ACCOUNT_SETTINGS, params).await
    }

    /// Change profile fields. Every supplied field is forwarded; an
    /// update with nothing to change is rejected locally.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> TwitterResult<String> {
        let params = update.params();
        if params.is_empty() {
            return Err(TwitterError::Validation(
                "profile update has no fields to change".into(),
            ));
        }
        self.post(endpoints::UPDATE_PROFILE, params).await
    }

    /// Replace the profile image. `image` is the base64-encoded file.
    pub async fn update_profile_image(&self, image: &str) -> TwitterResult<String> {
        require("image", image)?;
        self.post(
            endpoints::UPDATE_PROFILE_IMAGE,
            vec![("image".into(), image.into())],
        )
        .await
    }

    /// Replace the profile background image. `image` is the
    /// base64-encoded file; `tile` tiles it across the page.
    pub async fn update_background_image(&self, image: &str, tile: bool) -> TwitterResult<String> {
        require("image", image)?;
        let mut params = vec![("image".to_string(), image.to_string())];
        push_flag(&mut params, "tile", tile);
        self.post(endpoints::UPDATE_BACKGROUND_IMAGE, params).await
    }

    /// Stop using a background image without uploading a new one.
    pub async fn remove_background_image(&self) -> TwitterResult<String> {
        self.post(
            endpoints::UPDATE_BACKGROUND_IMAGE,
            vec![("use".into(), "false".into())],
        )
        .await
    }

    /// Upload a new profile banner. `banner` is the base64-encoded
    /// image; the optional geometry crops it server-side and every
    /// supplied component is forwarded.
    pub async fn update_profile_banner(
        &self,
        banner: &str,
        width: Option<u32>,
        height: Option<u32>,
        offset_left: Option<u32>,
        offset_top: Option<u32>,
    ) -> TwitterResult<String> {
        require("banner", banner)?;
        let mut params = vec![("banner".to_string(), banner.to_string())];
        for (key, value) in [
            ("width", width),
            ("height", height),
            ("offset_left", offset_left),
            ("offset_top", offset_top),
        ] {
            if let Some(value) = value {
                params.push((key.to_string(), value.to_string()));
            }
        }
        self.post(endpoints::UPDATE_PROFILE_BANNER, params).await
    }

    /// Remove the profile banner.
    pub async fn remove_profile_banner(&self) -> TwitterResult<String> {
        self.post(endpoints::REMOVE_PROFILE_BANNER, Vec::new()).await
    }

    /// Banner image variants for the addressed user.
    pub async fn profile_banner(
        &self,
        screen_name: Option<&str>,
        user_id: Option<&str>,
    ) -> TwitterResult<String> {
        let params = identifying_user(screen_name, user_id)?;
        self.get(endpoints::PROFILE_BANNER, params).await
    }
}
