use crate::error::AppError;
use crate::model::requests::{
    AddNewsRequest, AddUserVirtualCurrencyRequest, BanUsersRequest,
    DeleteMasterPlayerAccountRequest, GetTitleDataRequest, GetUserAccountInfoRequest,
    SetTitleDataRequest, UpdateUserTitleDisplayNameRequest,
};
use crate::model::entity::EmptyResponse;
use crate::model::responses::{
    AddNewsResult, BanUsersResult, DeleteMasterPlayerAccountResult, GetTitleDataResult,
    LookupUserAccountInfoResult, ModifyUserVirtualCurrencyResult,
    UpdateUserTitleDisplayNameResult,
};
use async_trait::async_trait;

/// Interface for the Admin API
///
/// Every method is authenticated with the developer secret key and fails with
/// `AppError::DeveloperKeyNotSet` when none is configured.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Adds a news item to the title's news feed
    async fn add_news(&self, request: AddNewsRequest) -> Result<AddNewsResult, AppError>;

    /// Bans one or more players
    async fn ban_users(&self, request: BanUsersRequest) -> Result<BanUsersResult, AppError>;

    /// Retrieves account information of a player
    async fn get_user_account_info(
        &self,
        request: GetUserAccountInfoRequest,
    ) -> Result<LookupUserAccountInfoResult, AppError>;

    /// Reads title data
    async fn get_title_data(
        &self,
        request: GetTitleDataRequest,
    ) -> Result<GetTitleDataResult, AppError>;

    /// Creates, updates or deletes a title data key
    async fn set_title_data(&self, request: SetTitleDataRequest)
    -> Result<EmptyResponse, AppError>;

    /// Credits virtual currency to a player
    async fn add_user_virtual_currency(
        &self,
        request: AddUserVirtualCurrencyRequest,
    ) -> Result<ModifyUserVirtualCurrencyResult, AppError>;

    /// Changes a player's display name
    async fn update_user_title_display_name(
        &self,
        request: UpdateUserTitleDisplayNameRequest,
    ) -> Result<UpdateUserTitleDisplayNameResult, AppError>;

    /// Deletes a master player account and its data in every title
    async fn delete_master_player_account(
        &self,
        request: DeleteMasterPlayerAccountRequest,
    ) -> Result<DeleteMasterPlayerAccountResult, AppError>;
}
