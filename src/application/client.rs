/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! PlayFab client
//!
//! The client owns the settings, a default authentication context and a
//! transport. Every API method funnels through [`PlayFabClient::execute`]:
//! resolve the context, pick the credential, hand the call to the transport,
//! decode the payload.
//!
//! # Example
//! ```ignore
//! use playfab_client::prelude::*;
//!
//! let client = PlayFabClient::new(Config::new())?;
//! let news = client
//!     .add_news(AddNewsRequest::new("Patch 1.2", "New maps are live"))
//!     .await?;
//! ```

use crate::application::auth::{
    AuthType, AuthenticationContext, CredentialSources, SharedContext, resolve_credential,
};
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::{ApiCall, HttpTransport, Transport};
use crate::model::requests::PlayFabRequest;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Client for the PlayFab API
///
/// Generic over the [`Transport`] so calls can be routed somewhere other than
/// the public REST endpoints, e.g. a recording transport in tests.
pub struct PlayFabClient<T: Transport = HttpTransport> {
    config: Arc<Config>,
    transport: Arc<T>,
    context: SharedContext,
}

impl PlayFabClient<HttpTransport> {
    /// Creates a client talking to the PlayFab REST endpoints
    ///
    /// # Arguments
    /// * `config` - Settings used for every call made by this client
    ///
    /// # Returns
    /// * `Ok(PlayFabClient)` - Client with an empty default context
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::from_shared_config(Arc::new(config))
    }

    /// Creates a client from an already shared configuration
    pub fn from_shared_config(config: Arc<Config>) -> Result<Self, AppError> {
        let transport = HttpTransport::new(config.clone())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl Default for PlayFabClient<HttpTransport> {
    fn default() -> Self {
        Self::from_shared_config(Config::global()).expect("Failed to create HTTP client")
    }
}

impl<T: Transport> PlayFabClient<T> {
    /// Creates a client using a custom transport
    pub fn with_transport(config: Arc<Config>, transport: T) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
            context: AuthenticationContext::new().into_shared(),
        }
    }

    /// Replaces the default authentication context
    #[must_use]
    pub fn with_context(mut self, context: SharedContext) -> Self {
        self.context = context;
        self
    }

    /// Settings used by this client
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Transport used by this client
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Default authentication context, used when a request carries no override
    pub fn context(&self) -> SharedContext {
        self.context.clone()
    }

    /// Returns the context a request is authenticated with: its own override
    /// when present, the client's default otherwise
    pub fn resolve_context<R: PlayFabRequest>(&self, request: &R) -> SharedContext {
        request
            .authentication_context()
            .cloned()
            .unwrap_or_else(|| self.context.clone())
    }

    /// Auth type a multi-credential endpoint would use with `context`
    pub async fn select_auth_type(&self, context: &SharedContext) -> AuthType {
        let context = context.read().await;
        AuthType::select(CredentialSources::collect(&context, &self.config))
    }

    /// Whether the default context holds a session ticket
    pub async fn is_client_logged_in(&self) -> bool {
        self.context.read().await.is_client_logged_in()
    }

    /// Whether the default context holds an entity token
    pub async fn is_entity_logged_in(&self) -> bool {
        self.context.read().await.is_entity_logged_in()
    }

    /// Clears every credential of the default context
    pub async fn forget_all_credentials(&self) {
        self.context.write().await.forget_all_credentials();
        debug!("Default authentication context cleared");
    }

    /// Calls an endpoint with a fixed auth type and decodes the response
    ///
    /// # Arguments
    /// * `path` - Endpoint path, e.g. `/Admin/AddNews`
    /// * `request` - Request body, possibly carrying a context override
    /// * `auth_type` - Credential the endpoint requires
    /// * `custom_data` - Opaque data handed to the transport with the call
    pub async fn execute<R, O>(
        &self,
        path: &'static str,
        request: &R,
        auth_type: AuthType,
        custom_data: Option<Value>,
    ) -> Result<O, AppError>
    where
        R: PlayFabRequest,
        O: DeserializeOwned,
    {
        let context = self.resolve_context(request);
        let value = self
            .dispatch(path, request, &context, auth_type, custom_data)
            .await?;
        decode(path, value)
    }

    /// Sends a request authenticated with the already resolved `context`
    pub(crate) async fn dispatch<R: PlayFabRequest>(
        &self,
        path: &'static str,
        request: &R,
        context: &SharedContext,
        auth_type: AuthType,
        custom_data: Option<Value>,
    ) -> Result<Value, AppError> {
        if !self.config.has_endpoint() {
            return Err(AppError::TitleNotSet);
        }

        let credential = {
            let context = context.read().await;
            resolve_credential(auth_type, &context, &self.config)?
        };

        let call = ApiCall {
            path,
            body: serde_json::to_value(request)?,
            auth_type,
            credential,
            extra_headers: self.config.extra_headers.clone(),
            custom_data,
        };

        debug!("Calling {} with {} auth", path, auth_type);
        self.transport.call(call).await
    }
}

/// Decodes a response payload into the endpoint's result type
pub(crate) fn decode<O: DeserializeOwned>(path: &str, value: Value) -> Result<O, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Deserialization(format!("{path}: {e}")))
}
