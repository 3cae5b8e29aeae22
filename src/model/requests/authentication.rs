use crate::application::auth::SharedContext;
use crate::model::entity::EntityKey;
use crate::model::requests::CustomTags;
use crate::{impl_custom_tags, impl_request};
use serde::Serialize;

/// Requests an entity token
///
/// Accepted credentials are an entity token, the developer secret key or a
/// client session ticket; see [`crate::application::auth::AuthType::select`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityTokenRequest {
    /// Entity to issue the token for, derived from the credential when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityKey>,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl GetEntityTokenRequest {
    /// Creates a request for the entity implied by the credential
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a token for a specific entity
    #[must_use]
    pub fn with_entity(mut self, entity: EntityKey) -> Self {
        self.entity = Some(entity);
        self
    }
}

/// Validates an entity token issued to another entity
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateEntityTokenRequest {
    /// Token to validate
    pub entity_token: String,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl ValidateEntityTokenRequest {
    /// Creates the request
    pub fn new(entity_token: impl Into<String>) -> Self {
        Self {
            entity_token: entity_token.into(),
            ..Default::default()
        }
    }
}

/// Authenticates a game server with a custom id
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticateCustomIdRequest {
    /// Custom id of the game server
    pub custom_id: String,
    /// Create the identity when it does not exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_account: Option<bool>,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl AuthenticateCustomIdRequest {
    /// Creates the request
    pub fn new(custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            ..Default::default()
        }
    }

    /// Sets whether a missing identity is created
    #[must_use]
    pub fn with_create_account(mut self, create_account: bool) -> Self {
        self.create_account = Some(create_account);
        self
    }
}

/// Deletes a game server identity
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGameServerRequest {
    /// Custom id of the game server to delete
    pub server_custom_id: String,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl DeleteGameServerRequest {
    /// Creates the request
    pub fn new(server_custom_id: impl Into<String>) -> Self {
        Self {
            server_custom_id: server_custom_id.into(),
            ..Default::default()
        }
    }
}

impl_request!(
    GetEntityTokenRequest,
    ValidateEntityTokenRequest,
    AuthenticateCustomIdRequest,
    DeleteGameServerRequest,
);

impl_custom_tags!(
    GetEntityTokenRequest,
    ValidateEntityTokenRequest,
    AuthenticateCustomIdRequest,
    DeleteGameServerRequest,
);
