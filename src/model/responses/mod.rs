/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// User account models shared by the Admin and Client APIs
mod account;
/// Admin API responses
mod admin;
/// Authentication API responses
mod authentication;
/// Client API responses
mod client;
/// CloudScript API responses
mod cloud_script;
/// Localization API responses
mod localization;
/// Title data responses shared by the Admin and Client APIs
mod title_data;

pub use account::*;
pub use admin::*;
pub use authentication::*;
pub use client::*;
pub use cloud_script::*;
pub use localization::*;
pub use title_data::*;

/// Error body returned by the PlayFab service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "camelCase")]
pub struct PlayFabError {
    /// HTTP status code
    pub code: u16,
    /// HTTP status text
    #[serde(default)]
    pub status: String,
    /// Error name, e.g. `InvalidParams`
    #[serde(default)]
    pub error: String,
    /// Numeric PlayFab error code
    #[serde(default)]
    pub error_code: i64,
    /// Human readable message
    #[serde(default)]
    pub error_message: String,
    /// Per-field validation messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<HashMap<String, Vec<String>>>,
}

impl fmt::Display for PlayFabErrorSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.0;
        write!(f, "{} ({}): {}", e.error, e.error_code, e.error_message)
    }
}

/// Short one line rendering of a [`PlayFabError`] used in logs
pub struct PlayFabErrorSummary<'a>(pub &'a PlayFabError);

impl PlayFabError {
    /// One line summary: `Error (code): message`
    #[must_use]
    pub fn summary(&self) -> PlayFabErrorSummary<'_> {
        PlayFabErrorSummary(self)
    }
}

/// Envelope wrapping every PlayFab response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope {
    /// HTTP status code
    pub code: u16,
    /// HTTP status text
    #[serde(default)]
    pub status: Option<String>,
    /// Payload of a successful call
    #[serde(default)]
    pub data: Option<Value>,
    /// Error name of a failed call
    #[serde(default)]
    pub error: Option<String>,
    /// Numeric error code of a failed call
    #[serde(default)]
    pub error_code: Option<i64>,
    /// Message of a failed call
    #[serde(default)]
    pub error_message: Option<String>,
    /// Per-field validation messages
    #[serde(default)]
    pub error_details: Option<HashMap<String, Vec<String>>>,
}

impl ApiEnvelope {
    /// Whether the envelope describes a failed call
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some() || !(200..300).contains(&self.code)
    }

    /// Returns the payload, or the service error as `AppError::Api`
    pub fn into_result(self) -> Result<Value, AppError> {
        if self.is_error() {
            return Err(AppError::Api(PlayFabError {
                code: self.code,
                status: self.status.unwrap_or_default(),
                error: self.error.unwrap_or_default(),
                error_code: self.error_code.unwrap_or_default(),
                error_message: self.error_message.unwrap_or_default(),
                error_details: self.error_details,
            }));
        }
        Ok(self.data.unwrap_or(Value::Object(serde_json::Map::new())))
    }
}
