/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::AuthType;
use crate::application::client::{PlayFabClient, decode};
use crate::application::interfaces::client::ClientApi;
use crate::error::AppError;
use crate::model::http::Transport;
use crate::model::requests::{GetAccountInfoRequest, GetTitleDataRequest, LoginWithCustomIdRequest};
use crate::model::responses::{GetAccountInfoResult, GetTitleDataResult, LoginResult};
use async_trait::async_trait;
use tracing::{debug, info};

/// `/Client/LoginWithCustomID`
pub const LOGIN_WITH_CUSTOM_ID: &str = "/Client/LoginWithCustomID";
/// `/Client/GetAccountInfo`
pub const GET_ACCOUNT_INFO: &str = "/Client/GetAccountInfo";
/// `/Client/GetTitleData`
pub const GET_TITLE_DATA: &str = "/Client/GetTitleData";

#[async_trait]
impl<T: Transport + 'static> ClientApi for PlayFabClient<T> {
    async fn login_with_custom_id(
        &self,
        mut request: LoginWithCustomIdRequest,
    ) -> Result<LoginResult, AppError> {
        if request.title_id.is_none() {
            request.title_id = self.config().title_id.clone();
        }
        info!("Logging in with custom id {}", request.custom_id);

        let context = self.resolve_context(&request);
        let value = self
            .dispatch(LOGIN_WITH_CUSTOM_ID, &request, &context, AuthType::None, None)
            .await?;
        let result: LoginResult = decode(LOGIN_WITH_CUSTOM_ID, value)?;

        context.write().await.apply_login(&result);
        debug!(
            "Logged in as {:?}, newly created: {}",
            result.playfab_id, result.newly_created
        );
        Ok(result)
    }

    async fn get_account_info(
        &self,
        request: GetAccountInfoRequest,
    ) -> Result<GetAccountInfoResult, AppError> {
        self.execute(GET_ACCOUNT_INFO, &request, AuthType::LoginSession, None)
            .await
    }

    async fn get_client_title_data(
        &self,
        request: GetTitleDataRequest,
    ) -> Result<GetTitleDataResult, AppError> {
        let result: GetTitleDataResult = self
            .execute(GET_TITLE_DATA, &request, AuthType::LoginSession, None)
            .await?;
        debug!("Title data obtained: {} keys", result.data.len());
        Ok(result)
    }
}
