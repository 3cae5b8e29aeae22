use crate::error::AppError;
use crate::model::requests::{GetAccountInfoRequest, GetTitleDataRequest, LoginWithCustomIdRequest};
use crate::model::responses::{GetAccountInfoResult, GetTitleDataResult, LoginResult};
use async_trait::async_trait;

/// Interface for the player facing Client API
#[async_trait]
pub trait ClientApi: Send + Sync {
    /// Logs a player in with a custom id and stores the session ticket,
    /// PlayFab id and entity token in the resolved context
    async fn login_with_custom_id(
        &self,
        request: LoginWithCustomIdRequest,
    ) -> Result<LoginResult, AppError>;

    /// Retrieves account information
    async fn get_account_info(
        &self,
        request: GetAccountInfoRequest,
    ) -> Result<GetAccountInfoResult, AppError>;

    /// Reads title data as the logged in player
    async fn get_client_title_data(
        &self,
        request: GetTitleDataRequest,
    ) -> Result<GetTitleDataResult, AppError>;
}
