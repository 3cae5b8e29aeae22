use crate::model::entity::{EntityKey, EntityTokenResponse};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Result of `GetEntityToken`
pub type GetEntityTokenResponse = EntityTokenResponse;

/// Chain of entities an entity belongs to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct EntityLineage {
    /// Character id
    pub character_id: Option<String>,
    /// Group id
    pub group_id: Option<String>,
    /// Master player account id
    pub master_player_account_id: Option<String>,
    /// Namespace id
    pub namespace_id: Option<String>,
    /// Title id
    pub title_id: Option<String>,
    /// Title player account id
    pub title_player_account_id: Option<String>,
}

/// Result of `ValidateEntityToken`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateEntityTokenResponse {
    /// Entity the token belongs to
    pub entity: Option<EntityKey>,
    /// Device type the token was issued to
    pub identified_device_type: Option<String>,
    /// Identity provider used to log in
    pub identity_provider: Option<String>,
    /// Id issued by the identity provider
    pub identity_provider_issued_id: Option<String>,
    /// Lineage of the entity
    pub lineage: Option<EntityLineage>,
}

/// Result of `AuthenticateGameServerWithCustomId`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticateCustomIdResult {
    /// Entity token of the game server
    pub entity_token: Option<EntityTokenResponse>,
    /// Whether a new game server identity was created
    #[serde(default)]
    pub newly_created: bool,
}
