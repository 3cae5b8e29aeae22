/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::SharedContext;
use crate::model::requests::CustomTags;
use crate::{impl_custom_tags, impl_request};
use serde::Serialize;

/// Logs a player in with a custom id
///
/// On success the session ticket and entity token are stored in the
/// resolved authentication context.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithCustomIdRequest {
    /// Custom id identifying the player
    pub custom_id: String,
    /// Create the account when it does not exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_account: Option<bool>,
    /// Title to log into, the configured title when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_id: Option<String>,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl LoginWithCustomIdRequest {
    /// Creates the request
    pub fn new(custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            ..Default::default()
        }
    }

    /// Sets whether a missing account is created
    #[must_use]
    pub fn with_create_account(mut self, create_account: bool) -> Self {
        self.create_account = Some(create_account);
        self
    }

    /// Logs into a specific title
    #[must_use]
    pub fn with_title_id(mut self, title_id: impl Into<String>) -> Self {
        self.title_id = Some(title_id.into());
        self
    }
}

/// Retrieves account information of the logged in player, or of another one
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountInfoRequest {
    /// Player to look up, the caller when every lookup field is unset
    #[serde(rename = "PlayFabId", skip_serializing_if = "Option::is_none")]
    pub playfab_id: Option<String>,
    /// Look up by email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Look up by title display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_display_name: Option<String>,
    /// Look up by username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl GetAccountInfoRequest {
    /// Creates a request for the caller's own account
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up by PlayFab id
    #[must_use]
    pub fn with_playfab_id(mut self, playfab_id: impl Into<String>) -> Self {
        self.playfab_id = Some(playfab_id.into());
        self
    }

    /// Looks up by email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Looks up by title display name
    #[must_use]
    pub fn with_title_display_name(mut self, name: impl Into<String>) -> Self {
        self.title_display_name = Some(name.into());
        self
    }

    /// Looks up by username
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

impl_request!(LoginWithCustomIdRequest, GetAccountInfoRequest);
impl_custom_tags!(LoginWithCustomIdRequest);
