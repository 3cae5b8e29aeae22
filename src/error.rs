/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::PlayFabError;
use reqwest::StatusCode;
use std::fmt;
use std::io;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Network level failure reported by reqwest
    Network(reqwest::Error),
    /// IO error
    Io(io::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// Unexpected HTTP status without a PlayFab error body
    Unexpected(StatusCode),
    /// Error envelope returned by the PlayFab service
    Api(PlayFabError),
    /// The resolved authentication context lacks the credential the endpoint needs
    NotLoggedIn(String),
    /// The endpoint requires a developer secret key and none is configured
    DeveloperKeyNotSet,
    /// No title id, vertical or absolute environment URL is configured
    TitleNotSet,
    /// Response could not be mapped to the expected type
    Deserialization(String),
    /// Invalid configuration
    Config(String),
}

/// Result alias used across the crate
pub type PlayFabResult<T> = Result<T, AppError>;

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Api(e) => write!(f, "playfab error: {}", e.summary()),
            AppError::NotLoggedIn(msg) => write!(f, "not logged in: {msg}"),
            AppError::DeveloperKeyNotSet => write!(f, "developer secret key not set"),
            AppError::TitleNotSet => write!(f, "title id not set"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<PlayFabError> for AppError {
    fn from(e: PlayFabError) -> Self {
        AppError::Api(e)
    }
}
