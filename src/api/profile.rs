//! Profile operations.

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::config;
use crate::error::{Error, Result};
use crate::models::profile::{AvatarUpload, ProfileUpdate, UserProfile};
use crate::models::response::ApiResponse;
use crate::transport::http::HttpClient;

/// Profile namespace.
///
/// Obtained from [`ServimavClient::profile`](crate::ServimavClient::profile).
#[derive(Debug)]
pub struct ProfileApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the authenticated user's profile.
    pub async fn get_profile(&self) -> Result<ApiResponse<UserProfile>> {
        debug!(path = config::PROFILE_PATH, "get profile");
        let response = self.http.get(config::PROFILE_PATH).await?;
        ApiResponse::read(response).await
    }

    /// Replace the authenticated user's profile.
    pub async fn set_profile(&self, profile: &UserProfile) -> Result<ApiResponse<UserProfile>> {
        debug!(path = config::PROFILE_PATH, "set profile");
        let response = self.http.post_json(config::PROFILE_PATH, profile).await?;
        ApiResponse::read(response).await
    }

    /// Apply a partial profile update with a new avatar.
    ///
    /// Sent as a multipart form: set fields become text parts (`address`
    /// JSON-encoded), the avatar a file part named `avatar`.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<ApiResponse<UserProfile>> {
        let form = update_form(update)?;
        debug!(path = config::PROFILE_UPDATE_PATH, "update profile");
        let response = self
            .http
            .post_multipart(config::PROFILE_UPDATE_PATH, form)
            .await?;
        ApiResponse::read(response).await
    }
}

/// Encode a [`ProfileUpdate`] as a multipart form, omitting unset fields.
fn update_form(update: ProfileUpdate) -> Result<Form> {
    let mut form = Form::new();

    if let Some(first_name) = update.first_name {
        form = form.text("first_name", first_name);
    }
    if let Some(last_name) = update.last_name {
        form = form.text("last_name", last_name);
    }
    if let Some(mobile_phone) = update.mobile_phone {
        form = form.text("mobile_phone", mobile_phone);
    }
    if let Some(address) = update.address {
        let encoded = serde_json::to_string(&address)
            .map_err(|e| Error::Conversion(format!("failed to encode address: {e}")))?;
        form = form.text("address", encoded);
    }
    if let Some(lang) = update.lang {
        form = form.text("lang", lang.as_str());
    }

    let AvatarUpload {
        file_name,
        content_type,
        bytes,
    } = update.avatar;
    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(&content_type)
        .map_err(|e| Error::Config(format!("invalid avatar content type '{content_type}': {e}")))?;

    Ok(form.part("avatar", part))
}
