use crate::model::entity::EntityTokenResponse;
use crate::model::responses::account::UserAccountInfo;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Result of a client login
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResult {
    /// Entity token of the title player account
    pub entity_token: Option<EntityTokenResponse>,
    /// Previous login time, absent on first login
    pub last_login_time: Option<DateTime<Utc>>,
    /// Whether the account was created by this login
    #[serde(default)]
    pub newly_created: bool,
    /// Master player account id
    #[serde(rename = "PlayFabId")]
    pub playfab_id: Option<String>,
    /// Session ticket sent as `X-Authorization` by Client API calls
    pub session_ticket: Option<String>,
}

/// Result of `GetAccountInfo`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountInfoResult {
    /// Account information
    pub account_info: Option<UserAccountInfo>,
}
