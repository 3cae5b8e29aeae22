/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::account::UserAccountInfo;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Result of `AddNews`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct AddNewsResult {
    /// Id of the created news item
    pub news_id: Option<String>,
}

/// A ban applied to a player
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct BanInfo {
    /// Whether the ban is currently active
    #[serde(default)]
    pub active: bool,
    /// Ban id
    pub ban_id: Option<String>,
    /// When the ban was created
    pub created: Option<DateTime<Utc>>,
    /// When the ban ends, `None` for permanent bans
    pub expires: Option<DateTime<Utc>>,
    /// Banned IP address
    #[serde(rename = "IPAddress")]
    pub ip_address: Option<String>,
    /// Banned player
    #[serde(rename = "PlayFabId")]
    pub playfab_id: Option<String>,
    /// Reason given for the ban
    pub reason: Option<String>,
}

/// Result of `BanUsers`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct BanUsersResult {
    /// Bans that were applied
    #[serde(default)]
    pub ban_data: Vec<BanInfo>,
}

/// Result of `GetUserAccountInfo`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct LookupUserAccountInfoResult {
    /// Account information
    pub user_info: Option<UserAccountInfo>,
}

/// Result of `AddUserVirtualCurrency`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyUserVirtualCurrencyResult {
    /// Balance after the change
    #[serde(default)]
    pub balance: i64,
    /// Amount the balance changed by
    #[serde(default)]
    pub balance_change: i64,
    /// Player whose balance changed
    #[serde(rename = "PlayFabId")]
    pub playfab_id: Option<String>,
    /// Currency code
    pub virtual_currency: Option<String>,
}

/// Result of `UpdateUserTitleDisplayName`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserTitleDisplayNameResult {
    /// Display name now in effect
    pub display_name: Option<String>,
}

/// Result of `DeleteMasterPlayerAccount`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMasterPlayerAccountResult {
    /// Receipt for tracking the deletion job
    pub job_receipt_id: Option<String>,
    /// Titles the player had data in
    #[serde(default)]
    pub title_ids: Vec<String>,
}
