use crate::application::auth::AuthType;
use crate::application::client::PlayFabClient;
use crate::application::interfaces::cloud_script::CloudScriptApi;
use crate::error::AppError;
use crate::model::entity::EmptyResponse;
use crate::model::http::Transport;
use crate::model::requests::{
    ExecuteEntityCloudScriptRequest, ExecuteFunctionRequest, ListFunctionsRequest,
    RegisterHttpFunctionRequest, UnregisterFunctionRequest,
};
use crate::model::responses::{ExecuteCloudScriptResult, ExecuteFunctionResult, ListFunctionsResult};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// `/CloudScript/ExecuteEntityCloudScript`
pub const EXECUTE_ENTITY_CLOUD_SCRIPT: &str = "/CloudScript/ExecuteEntityCloudScript";
/// `/CloudScript/ExecuteFunction`
pub const EXECUTE_FUNCTION: &str = "/CloudScript/ExecuteFunction";
/// `/CloudScript/ListFunctions`
pub const LIST_FUNCTIONS: &str = "/CloudScript/ListFunctions";
/// `/CloudScript/RegisterHttpFunction`
pub const REGISTER_HTTP_FUNCTION: &str = "/CloudScript/RegisterHttpFunction";
/// `/CloudScript/UnregisterFunction`
pub const UNREGISTER_FUNCTION: &str = "/CloudScript/UnregisterFunction";

#[async_trait]
impl<T: Transport + 'static> CloudScriptApi for PlayFabClient<T> {
    async fn execute_entity_cloud_script(
        &self,
        request: ExecuteEntityCloudScriptRequest,
    ) -> Result<ExecuteCloudScriptResult, AppError> {
        info!("Executing CloudScript handler {}", request.function_name);
        let result: ExecuteCloudScriptResult = self
            .execute(
                EXECUTE_ENTITY_CLOUD_SCRIPT,
                &request,
                AuthType::EntityToken,
                None,
            )
            .await?;
        // script errors come back inside a successful response
        if let Some(error) = &result.error {
            warn!(
                "CloudScript handler {} raised {:?}: {:?}",
                request.function_name, error.error, error.message
            );
        }
        debug!(
            "Handler {} ran revision {} in {}s",
            request.function_name, result.revision, result.execution_time_seconds
        );
        Ok(result)
    }

    async fn execute_function(
        &self,
        request: ExecuteFunctionRequest,
    ) -> Result<ExecuteFunctionResult, AppError> {
        info!("Executing function {}", request.function_name);
        let result: ExecuteFunctionResult = self
            .execute(EXECUTE_FUNCTION, &request, AuthType::EntityToken, None)
            .await?;
        if let Some(error) = &result.error {
            warn!(
                "Function {} raised {:?}: {:?}",
                request.function_name, error.error, error.message
            );
        }
        Ok(result)
    }

    async fn list_functions(
        &self,
        request: ListFunctionsRequest,
    ) -> Result<ListFunctionsResult, AppError> {
        let result: ListFunctionsResult = self
            .execute(LIST_FUNCTIONS, &request, AuthType::EntityToken, None)
            .await?;
        debug!("Functions obtained: {}", result.functions.len());
        Ok(result)
    }

    async fn register_http_function(
        &self,
        request: RegisterHttpFunctionRequest,
    ) -> Result<EmptyResponse, AppError> {
        info!(
            "Registering function {} at {}",
            request.function_name, request.function_url
        );
        self.execute(REGISTER_HTTP_FUNCTION, &request, AuthType::EntityToken, None)
            .await
    }

    async fn unregister_function(
        &self,
        request: UnregisterFunctionRequest,
    ) -> Result<EmptyResponse, AppError> {
        info!("Unregistering function {}", request.function_name);
        self.execute(UNREGISTER_FUNCTION, &request, AuthType::EntityToken, None)
            .await
    }
}
