/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::SharedContext;
use crate::model::requests::CustomTags;
use crate::{impl_custom_tags, impl_request};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Adds a news item to the title's news feed
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddNewsRequest {
    /// Body text of the news
    pub body: String,
    /// Title of the news
    pub title: String,
    /// Time the news was published, server time when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl AddNewsRequest {
    /// Creates a news item
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Sets the publication time
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A single ban within a [`BanUsersRequest`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BanRequest {
    /// Player to ban
    #[serde(rename = "PlayFabId")]
    pub playfab_id: String,
    /// Duration of the ban, permanent when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_hours: Option<u32>,
    /// IP address to ban
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Reason shown for the ban
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BanRequest {
    /// Creates a permanent ban for a player
    pub fn new(playfab_id: impl Into<String>) -> Self {
        Self {
            playfab_id: playfab_id.into(),
            ..Default::default()
        }
    }

    /// Limits the ban to a number of hours
    #[must_use]
    pub fn with_duration_in_hours(mut self, hours: u32) -> Self {
        self.duration_in_hours = Some(hours);
        self
    }

    /// Also bans an IP address
    #[must_use]
    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    /// Sets the reason
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Bans one or more players
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BanUsersRequest {
    /// Bans to apply
    pub bans: Vec<BanRequest>,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl BanUsersRequest {
    /// Creates the request
    #[must_use]
    pub fn new(bans: Vec<BanRequest>) -> Self {
        Self {
            bans,
            ..Default::default()
        }
    }
}

/// Retrieves account information of a player
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserAccountInfoRequest {
    /// Player to look up
    #[serde(rename = "PlayFabId")]
    pub playfab_id: String,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl GetUserAccountInfoRequest {
    /// Creates the request
    pub fn new(playfab_id: impl Into<String>) -> Self {
        Self {
            playfab_id: playfab_id.into(),
            ..Default::default()
        }
    }
}

/// Creates, updates or deletes a title data key
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetTitleDataRequest {
    /// Key to write
    pub key: String,
    /// New value, the key is deleted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Title to write to, the configured title when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_id: Option<String>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl SetTitleDataRequest {
    /// Creates a request deleting `key` until a value is set
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Sets the value to store
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Targets a specific title
    #[must_use]
    pub fn with_title_id(mut self, title_id: impl Into<String>) -> Self {
        self.title_id = Some(title_id.into());
        self
    }
}

/// Credits virtual currency to a player
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddUserVirtualCurrencyRequest {
    /// Amount to add
    pub amount: i32,
    /// Player to credit
    #[serde(rename = "PlayFabId")]
    pub playfab_id: String,
    /// Two letter currency code
    pub virtual_currency: String,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl AddUserVirtualCurrencyRequest {
    /// Creates the request
    pub fn new(
        playfab_id: impl Into<String>,
        virtual_currency: impl Into<String>,
        amount: i32,
    ) -> Self {
        Self {
            amount,
            playfab_id: playfab_id.into(),
            virtual_currency: virtual_currency.into(),
            ..Default::default()
        }
    }
}

/// Changes a player's display name
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserTitleDisplayNameRequest {
    /// New display name
    pub display_name: String,
    /// Player to rename
    #[serde(rename = "PlayFabId")]
    pub playfab_id: String,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl UpdateUserTitleDisplayNameRequest {
    /// Creates the request
    pub fn new(playfab_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            playfab_id: playfab_id.into(),
            display_name: display_name.into(),
            ..Default::default()
        }
    }
}

/// Deletes a master player account and all of its title data
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMasterPlayerAccountRequest {
    /// Player to delete
    #[serde(rename = "PlayFabId")]
    pub playfab_id: String,
    /// Developer note stored with the deletion job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<String>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl DeleteMasterPlayerAccountRequest {
    /// Creates the request
    pub fn new(playfab_id: impl Into<String>) -> Self {
        Self {
            playfab_id: playfab_id.into(),
            ..Default::default()
        }
    }

    /// Attaches a developer note
    #[must_use]
    pub fn with_meta_data(mut self, meta_data: impl Into<String>) -> Self {
        self.meta_data = Some(meta_data.into());
        self
    }
}

impl_request!(
    AddNewsRequest,
    BanUsersRequest,
    GetUserAccountInfoRequest,
    SetTitleDataRequest,
    AddUserVirtualCurrencyRequest,
    UpdateUserTitleDisplayNameRequest,
    DeleteMasterPlayerAccountRequest,
);

impl_custom_tags!(
    AddNewsRequest,
    BanUsersRequest,
    AddUserVirtualCurrencyRequest,
    UpdateUserTitleDisplayNameRequest,
);
