/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Identifies an entity (player, title, character, group, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, DisplaySimple)]
pub struct EntityKey {
    /// Unique id of the entity
    #[serde(rename = "Id")]
    pub id: String,
    /// Entity type, e.g. `title_player_account` or `title`
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

impl EntityKey {
    /// Creates an entity key with an explicit type
    pub fn new(id: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: Some(entity_type.into()),
        }
    }
}

/// Entity token issued by a login or by `GetEntityToken`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct EntityTokenResponse {
    /// Entity the token was issued for
    pub entity: Option<EntityKey>,
    /// The token to send as `X-EntityToken`
    pub entity_token: Option<String>,
    /// When the token stops being accepted
    pub token_expiration: Option<DateTime<Utc>>,
}

/// Response of endpoints that return no data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, DisplaySimple)]
pub struct EmptyResponse {}
