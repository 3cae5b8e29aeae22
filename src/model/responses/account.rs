use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Title specific part of a user account
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct UserTitleInfo {
    /// Display name within the title
    pub display_name: Option<String>,
    /// When the player first logged into the title
    pub created: Option<DateTime<Utc>>,
    /// Most recent login to the title
    pub last_login: Option<DateTime<Utc>>,
    /// First login to the title
    pub first_login: Option<DateTime<Utc>>,
    /// Whether the player is banned from the title
    #[serde(rename = "isBanned")]
    pub is_banned: Option<bool>,
    /// Platform the account originated from
    pub origination: Option<String>,
}

/// Master player account information
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct UserAccountInfo {
    /// Master player account id
    #[serde(rename = "PlayFabId")]
    pub playfab_id: Option<String>,
    /// Account creation time
    pub created: Option<DateTime<Utc>>,
    /// Username, when the account has one
    pub username: Option<String>,
    /// Title specific information
    pub title_info: Option<UserTitleInfo>,
}
