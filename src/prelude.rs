/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # PlayFab Client Prelude
//!
//! Imports the client, its settings, the API traits and the request/response
//! models in one line.
//!
//! ```rust
//! use playfab_client::prelude::*;
//!
//! let config = Config::empty().with_title_id("ABCD");
//! let context = AuthenticationContext::new();
//! assert_eq!(
//!     AuthType::select(CredentialSources::collect(&context, &config)),
//!     AuthType::None
//! );
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Settings for the PlayFab client
pub use crate::application::config::{Config, RateLimiterConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, PlayFabResult};

/// Error body returned by the service
pub use crate::model::responses::PlayFabError;

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Authentication context and credential selection
pub use crate::application::auth::{
    AuthType, AuthenticationContext, Credential, CredentialSources, SharedContext,
    resolve_credential,
};

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// PlayFab client
pub use crate::application::client::PlayFabClient;

/// Transport trait and the HTTP implementation
pub use crate::model::http::{ApiCall, HttpTransport, Transport};

// ============================================================================
// API TRAITS
// ============================================================================

/// One trait per PlayFab API module
pub use crate::application::services::{
    AdminApi, AuthenticationApi, ClientApi, CloudScriptApi, LocalizationApi,
};

// ============================================================================
// MODELS
// ============================================================================

/// Entity models
pub use crate::model::entity::{EmptyResponse, EntityKey, EntityTokenResponse};

/// Request models
pub use crate::model::requests::*;

/// Response models
pub use crate::model::responses::*;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
