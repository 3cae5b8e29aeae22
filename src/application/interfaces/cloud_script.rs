use crate::error::AppError;
use crate::model::entity::EmptyResponse;
use crate::model::requests::{
    ExecuteEntityCloudScriptRequest, ExecuteFunctionRequest, ListFunctionsRequest,
    RegisterHttpFunctionRequest, UnregisterFunctionRequest,
};
use crate::model::responses::{ExecuteCloudScriptResult, ExecuteFunctionResult, ListFunctionsResult};
use async_trait::async_trait;

/// Interface for the CloudScript API, authenticated with an entity token
#[async_trait]
pub trait CloudScriptApi: Send + Sync {
    /// Runs a CloudScript handler
    async fn execute_entity_cloud_script(
        &self,
        request: ExecuteEntityCloudScriptRequest,
    ) -> Result<ExecuteCloudScriptResult, AppError>;

    /// Runs a registered Azure Function
    async fn execute_function(
        &self,
        request: ExecuteFunctionRequest,
    ) -> Result<ExecuteFunctionResult, AppError>;

    /// Lists registered functions
    async fn list_functions(
        &self,
        request: ListFunctionsRequest,
    ) -> Result<ListFunctionsResult, AppError>;

    /// Registers an HTTP triggered function
    async fn register_http_function(
        &self,
        request: RegisterHttpFunctionRequest,
    ) -> Result<EmptyResponse, AppError>;

    /// Unregisters a function
    async fn unregister_function(
        &self,
        request: UnregisterFunctionRequest,
    ) -> Result<EmptyResponse, AppError>;
}
