/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::AuthType;
use crate::application::client::{PlayFabClient, decode};
use crate::application::interfaces::authentication::AuthenticationApi;
use crate::error::AppError;
use crate::model::entity::EmptyResponse;
use crate::model::http::Transport;
use crate::model::requests::{
    AuthenticateCustomIdRequest, DeleteGameServerRequest, GetEntityTokenRequest,
    ValidateEntityTokenRequest,
};
use crate::model::responses::{
    AuthenticateCustomIdResult, GetEntityTokenResponse, ValidateEntityTokenResponse,
};
use async_trait::async_trait;
use tracing::{debug, info};

/// `/Authentication/GetEntityToken`
pub const GET_ENTITY_TOKEN: &str = "/Authentication/GetEntityToken";
/// `/Authentication/ValidateEntityToken`
pub const VALIDATE_ENTITY_TOKEN: &str = "/Authentication/ValidateEntityToken";
/// `/GameServerIdentity/AuthenticateGameServerWithCustomId`
pub const AUTHENTICATE_GAME_SERVER_WITH_CUSTOM_ID: &str =
    "/GameServerIdentity/AuthenticateGameServerWithCustomId";
/// `/GameServerIdentity/Delete`
pub const DELETE_GAME_SERVER: &str = "/GameServerIdentity/Delete";

#[async_trait]
impl<T: Transport + 'static> AuthenticationApi for PlayFabClient<T> {
    async fn get_entity_token(
        &self,
        request: GetEntityTokenRequest,
    ) -> Result<GetEntityTokenResponse, AppError> {
        let context = self.resolve_context(&request);
        let auth_type = self.select_auth_type(&context).await;
        info!("Requesting entity token with {} auth", auth_type);

        let value = self
            .dispatch(GET_ENTITY_TOKEN, &request, &context, auth_type, None)
            .await?;
        let response: GetEntityTokenResponse = decode(GET_ENTITY_TOKEN, value)?;

        context.write().await.apply_entity_token(&response);
        debug!("Entity token stored, expires {:?}", response.token_expiration);
        Ok(response)
    }

    async fn validate_entity_token(
        &self,
        request: ValidateEntityTokenRequest,
    ) -> Result<ValidateEntityTokenResponse, AppError> {
        self.execute(VALIDATE_ENTITY_TOKEN, &request, AuthType::EntityToken, None)
            .await
    }

    async fn authenticate_game_server_with_custom_id(
        &self,
        request: AuthenticateCustomIdRequest,
    ) -> Result<AuthenticateCustomIdResult, AppError> {
        info!("Authenticating game server {}", request.custom_id);
        let result: AuthenticateCustomIdResult = self
            .execute(
                AUTHENTICATE_GAME_SERVER_WITH_CUSTOM_ID,
                &request,
                AuthType::EntityToken,
                None,
            )
            .await?;
        debug!("Game server newly created: {}", result.newly_created);
        Ok(result)
    }

    async fn delete_game_server(
        &self,
        request: DeleteGameServerRequest,
    ) -> Result<EmptyResponse, AppError> {
        info!("Deleting game server {}", request.server_custom_id);
        self.execute(DELETE_GAME_SERVER, &request, AuthType::EntityToken, None)
            .await
    }
}
