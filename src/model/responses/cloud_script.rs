/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error raised by a CloudScript handler
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct ScriptExecutionError {
    /// Error code, e.g. `CloudScriptNotFound` or `JavascriptException`
    pub error: Option<String>,
    /// Details of the error
    pub message: Option<String>,
    /// Stack trace of the script
    pub stack_trace: Option<String>,
}

/// Log line written by a CloudScript handler
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct LogStatement {
    /// Optional structured data
    pub data: Option<Value>,
    /// `Debug`, `Info` or `Error`
    pub level: Option<String>,
    /// Log message
    pub message: Option<String>,
}

/// Result of `ExecuteEntityCloudScript`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteCloudScriptResult {
    /// Number of PlayFab API requests issued by the handler
    #[serde(rename = "APIRequestsIssued", default)]
    pub api_requests_issued: i32,
    /// Error raised by the handler, if any
    pub error: Option<ScriptExecutionError>,
    /// Wall clock execution time
    #[serde(default)]
    pub execution_time_seconds: f64,
    /// Executed handler
    pub function_name: Option<String>,
    /// Value returned by the handler
    pub function_result: Option<Value>,
    /// Whether the result was dropped for exceeding the size limit
    pub function_result_too_large: Option<bool>,
    /// Number of external HTTP requests issued by the handler
    #[serde(default)]
    pub http_requests_issued: i32,
    /// Log lines written by the handler
    #[serde(default)]
    pub logs: Vec<LogStatement>,
    /// Whether logs were truncated
    pub logs_too_large: Option<bool>,
    /// Peak memory use
    #[serde(default)]
    pub memory_consumed_bytes: u64,
    /// CPU time consumed
    #[serde(default)]
    pub processor_time_seconds: f64,
    /// Revision that ran
    #[serde(default)]
    pub revision: i32,
}

/// Error raised by an Azure Function
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionExecutionError {
    /// Error code
    pub error: Option<String>,
    /// Details of the error
    pub message: Option<String>,
    /// Stack trace
    pub stack_trace: Option<String>,
}

/// Result of `ExecuteFunction`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteFunctionResult {
    /// Error raised by the function, if any
    pub error: Option<FunctionExecutionError>,
    /// Execution time in milliseconds
    #[serde(default)]
    pub execution_time_milliseconds: i32,
    /// Executed function
    pub function_name: Option<String>,
    /// Value returned by the function
    pub function_result: Option<Value>,
    /// Whether the result was dropped for exceeding the size limit
    pub function_result_too_large: Option<bool>,
}

/// A registered function
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionModel {
    /// URL or queue the function is bound to
    pub function_address: Option<String>,
    /// Function name
    pub function_name: Option<String>,
    /// `HTTP` or `Queue`
    pub trigger_type: Option<String>,
}

/// Result of `ListFunctions`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct ListFunctionsResult {
    /// Registered functions
    #[serde(default)]
    pub functions: Vec<FunctionModel>,
}
