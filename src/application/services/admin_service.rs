/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::AuthType;
use crate::application::client::PlayFabClient;
use crate::application::interfaces::admin::AdminApi;
use crate::error::AppError;
use crate::model::entity::EmptyResponse;
use crate::model::http::Transport;
use crate::model::requests::{
    AddNewsRequest, AddUserVirtualCurrencyRequest, BanUsersRequest,
    DeleteMasterPlayerAccountRequest, GetTitleDataRequest, GetUserAccountInfoRequest,
    SetTitleDataRequest, UpdateUserTitleDisplayNameRequest,
};
use crate::model::responses::{
    AddNewsResult, BanUsersResult, DeleteMasterPlayerAccountResult, GetTitleDataResult,
    LookupUserAccountInfoResult, ModifyUserVirtualCurrencyResult,
    UpdateUserTitleDisplayNameResult,
};
use async_trait::async_trait;
use tracing::{debug, info};

/// `/Admin/AddNews`
pub const ADD_NEWS: &str = "/Admin/AddNews";
/// `/Admin/BanUsers`
pub const BAN_USERS: &str = "/Admin/BanUsers";
/// `/Admin/GetUserAccountInfo`
pub const GET_USER_ACCOUNT_INFO: &str = "/Admin/GetUserAccountInfo";
/// `/Admin/GetTitleData`
pub const GET_TITLE_DATA: &str = "/Admin/GetTitleData";
/// `/Admin/SetTitleData`
pub const SET_TITLE_DATA: &str = "/Admin/SetTitleData";
/// `/Admin/AddUserVirtualCurrency`
pub const ADD_USER_VIRTUAL_CURRENCY: &str = "/Admin/AddUserVirtualCurrency";
/// `/Admin/UpdateUserTitleDisplayName`
pub const UPDATE_USER_TITLE_DISPLAY_NAME: &str = "/Admin/UpdateUserTitleDisplayName";
/// `/Admin/DeleteMasterPlayerAccount`
pub const DELETE_MASTER_PLAYER_ACCOUNT: &str = "/Admin/DeleteMasterPlayerAccount";

#[async_trait]
impl<T: Transport + 'static> AdminApi for PlayFabClient<T> {
    async fn add_news(&self, request: AddNewsRequest) -> Result<AddNewsResult, AppError> {
        info!("Adding news: {}", request.title);
        let result: AddNewsResult = self
            .execute(ADD_NEWS, &request, AuthType::DevSecretKey, None)
            .await?;
        debug!("News added: {:?}", result.news_id);
        Ok(result)
    }

    async fn ban_users(&self, request: BanUsersRequest) -> Result<BanUsersResult, AppError> {
        info!("Banning {} players", request.bans.len());
        let result: BanUsersResult = self
            .execute(BAN_USERS, &request, AuthType::DevSecretKey, None)
            .await?;
        debug!("Bans applied: {}", result.ban_data.len());
        Ok(result)
    }

    async fn get_user_account_info(
        &self,
        request: GetUserAccountInfoRequest,
    ) -> Result<LookupUserAccountInfoResult, AppError> {
        debug!("Getting account info for {}", request.playfab_id);
        self.execute(GET_USER_ACCOUNT_INFO, &request, AuthType::DevSecretKey, None)
            .await
    }

    async fn get_title_data(
        &self,
        request: GetTitleDataRequest,
    ) -> Result<GetTitleDataResult, AppError> {
        let result: GetTitleDataResult = self
            .execute(GET_TITLE_DATA, &request, AuthType::DevSecretKey, None)
            .await?;
        debug!("Title data obtained: {} keys", result.data.len());
        Ok(result)
    }

    async fn set_title_data(
        &self,
        request: SetTitleDataRequest,
    ) -> Result<EmptyResponse, AppError> {
        info!("Setting title data key {}", request.key);
        self.execute(SET_TITLE_DATA, &request, AuthType::DevSecretKey, None)
            .await
    }

    async fn add_user_virtual_currency(
        &self,
        request: AddUserVirtualCurrencyRequest,
    ) -> Result<ModifyUserVirtualCurrencyResult, AppError> {
        info!(
            "Adding {} {} to {}",
            request.amount, request.virtual_currency, request.playfab_id
        );
        self.execute(
            ADD_USER_VIRTUAL_CURRENCY,
            &request,
            AuthType::DevSecretKey,
            None,
        )
        .await
    }

    async fn update_user_title_display_name(
        &self,
        request: UpdateUserTitleDisplayNameRequest,
    ) -> Result<UpdateUserTitleDisplayNameResult, AppError> {
        self.execute(
            UPDATE_USER_TITLE_DISPLAY_NAME,
            &request,
            AuthType::DevSecretKey,
            None,
        )
        .await
    }

    async fn delete_master_player_account(
        &self,
        request: DeleteMasterPlayerAccountRequest,
    ) -> Result<DeleteMasterPlayerAccountResult, AppError> {
        info!("Deleting master player account {}", request.playfab_id);
        let result: DeleteMasterPlayerAccountResult = self
            .execute(
                DELETE_MASTER_PLAYER_ACCOUNT,
                &request,
                AuthType::DevSecretKey,
                None,
            )
            .await?;
        debug!("Deletion job receipt: {:?}", result.job_receipt_id);
        Ok(result)
    }
}
