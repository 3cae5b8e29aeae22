/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # PlayFab Client
//!
//! Async Rust client for the PlayFab game backend web API.
//!
//! Every remote operation is exposed as a method on one of the module traits
//! (`AdminApi`, `AuthenticationApi`, `CloudScriptApi`, `LocalizationApi`,
//! `ClientApi`), all implemented for [`application::client::PlayFabClient`].
//! Each call builds a request body, resolves which authentication context to
//! use, picks the credential to attach and hands the call to a [`model::http::Transport`].
//!
//! ## Example
//!
//! ```ignore
//! use playfab_client::prelude::*;
//!
//! let config = Config::new().with_title_id("ABCD");
//! let client = PlayFabClient::new(config)?;
//!
//! let login = client
//!     .login_with_custom_id(LoginWithCustomIdRequest::new("player-1").with_create_account(true))
//!     .await?;
//!
//! // The default context now holds the session ticket and entity token
//! let languages = client.get_language_list(GetLanguageListRequest::new()).await?;
//! ```

/// Application layer: client, configuration, authentication and API traits
pub mod application;
/// Library wide constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and the HTTP transport
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Utility helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
