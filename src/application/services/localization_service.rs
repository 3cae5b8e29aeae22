use crate::application::auth::AuthType;
use crate::application::client::PlayFabClient;
use crate::application::interfaces::localization::LocalizationApi;
use crate::error::AppError;
use crate::model::http::Transport;
use crate::model::requests::GetLanguageListRequest;
use crate::model::responses::GetLanguageListResponse;
use async_trait::async_trait;

/// `/Locale/GetLanguageList`
pub const GET_LANGUAGE_LIST: &str = "/Locale/GetLanguageList";

#[async_trait]
impl<T: Transport + 'static> LocalizationApi for PlayFabClient<T> {
    async fn get_language_list(
        &self,
        request: GetLanguageListRequest,
    ) -> Result<GetLanguageListResponse, AppError> {
        self.execute(GET_LANGUAGE_LIST, &request, AuthType::EntityToken, None)
            .await
    }
}
