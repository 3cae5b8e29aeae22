use crate::error::AppError;
use crate::model::entity::EmptyResponse;
use crate::model::requests::{
    AuthenticateCustomIdRequest, DeleteGameServerRequest, GetEntityTokenRequest,
    ValidateEntityTokenRequest,
};
use crate::model::responses::{
    AuthenticateCustomIdResult, GetEntityTokenResponse, ValidateEntityTokenResponse,
};
use async_trait::async_trait;

/// Interface for the Authentication API
#[async_trait]
pub trait AuthenticationApi: Send + Sync {
    /// Issues an entity token
    ///
    /// The credential is picked from the resolved context and the settings:
    /// entity token over developer secret key over session ticket. With none
    /// available the call is sent unauthenticated. On success the new token
    /// and entity key are stored in the resolved context.
    async fn get_entity_token(
        &self,
        request: GetEntityTokenRequest,
    ) -> Result<GetEntityTokenResponse, AppError>;

    /// Validates an entity token issued to another entity
    async fn validate_entity_token(
        &self,
        request: ValidateEntityTokenRequest,
    ) -> Result<ValidateEntityTokenResponse, AppError>;

    /// Authenticates a game server with a custom id
    async fn authenticate_game_server_with_custom_id(
        &self,
        request: AuthenticateCustomIdRequest,
    ) -> Result<AuthenticateCustomIdResult, AppError>;

    /// Deletes a game server identity
    async fn delete_game_server(
        &self,
        request: DeleteGameServerRequest,
    ) -> Result<EmptyResponse, AppError>;
}
