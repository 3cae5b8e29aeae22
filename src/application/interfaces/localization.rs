use crate::error::AppError;
use crate::model::requests::GetLanguageListRequest;
use crate::model::responses::GetLanguageListResponse;
use async_trait::async_trait;

/// Interface for the Localization API
#[async_trait]
pub trait LocalizationApi: Send + Sync {
    /// Lists the languages supported by the localization service
    async fn get_language_list(
        &self,
        request: GetLanguageListRequest,
    ) -> Result<GetLanguageListResponse, AppError>;
}
