/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication context and credential selection
//!
//! A call consults exactly one [`AuthenticationContext`]: the override carried
//! by the request when present, otherwise the client's default context.
//! Credentials are never merged across the two.

use crate::application::config::Config;
use crate::constants::{HEADER_ENTITY_TOKEN, HEADER_SECRET_KEY, HEADER_SESSION_TICKET};
use crate::error::AppError;
use crate::model::entity::{EntityKey, EntityTokenResponse};
use crate::model::responses::LoginResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Authentication context shared between a client and its callers
pub type SharedContext = Arc<RwLock<AuthenticationContext>>;

/// How an outgoing request is authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuthType {
    /// No credential header
    #[default]
    None,
    /// Legacy client session ticket (`X-Authorization`)
    LoginSession,
    /// Developer secret key (`X-SecretKey`)
    DevSecretKey,
    /// Entity token (`X-EntityToken`)
    EntityToken,
}

impl AuthType {
    /// Selects the auth type for endpoints accepting several credential kinds
    ///
    /// Checks run in a fixed order and each matching check overwrites the
    /// previous result: session ticket, then secret key, then entity token.
    /// The outcome is a static priority, not "most recent login wins".
    #[must_use]
    pub fn select(sources: CredentialSources) -> Self {
        let mut auth_type = AuthType::None;
        if sources.session_ticket {
            auth_type = AuthType::LoginSession;
        }
        if sources.secret_key {
            auth_type = AuthType::DevSecretKey;
        }
        if sources.entity_token {
            auth_type = AuthType::EntityToken;
        }
        auth_type
    }

    /// Header carrying the credential for this auth type
    #[must_use]
    pub fn header_name(&self) -> Option<&'static str> {
        match self {
            AuthType::None => None,
            AuthType::LoginSession => Some(HEADER_SESSION_TICKET),
            AuthType::DevSecretKey => Some(HEADER_SECRET_KEY),
            AuthType::EntityToken => Some(HEADER_ENTITY_TOKEN),
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthType::None => "None",
            AuthType::LoginSession => "LoginSession",
            AuthType::DevSecretKey => "DevSecretKey",
            AuthType::EntityToken => "EntityToken",
        };
        f.write_str(name)
    }
}

/// Which credentials are available for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CredentialSources {
    /// The resolved context holds a client session ticket
    pub session_ticket: bool,
    /// A developer secret key is configured
    pub secret_key: bool,
    /// The resolved context holds an entity token
    pub entity_token: bool,
}

impl CredentialSources {
    /// Collects the presence flags from a context and the client settings
    #[must_use]
    pub fn collect(context: &AuthenticationContext, config: &Config) -> Self {
        Self {
            session_ticket: context.session_ticket().is_some(),
            secret_key: config.has_developer_secret_key(),
            entity_token: context.entity_token().is_some(),
        }
    }
}

/// A credential ready to be attached to a request
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Header name
    pub header: &'static str,
    /// Header value
    pub value: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("header", &self.header)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Picks the credential for `auth_type` out of the resolved context and settings
///
/// # Errors
/// * `AppError::NotLoggedIn` - session ticket or entity token required but missing
/// * `AppError::DeveloperKeyNotSet` - secret key required but not configured
pub fn resolve_credential(
    auth_type: AuthType,
    context: &AuthenticationContext,
    config: &Config,
) -> Result<Option<Credential>, AppError> {
    let value = match auth_type {
        AuthType::None => return Ok(None),
        AuthType::LoginSession => context.session_ticket().ok_or_else(|| {
            AppError::NotLoggedIn("Must be logged in to call this method".to_string())
        })?,
        AuthType::DevSecretKey => config.secret_key().ok_or(AppError::DeveloperKeyNotSet)?,
        AuthType::EntityToken => context.entity_token().ok_or_else(|| {
            AppError::NotLoggedIn(
                "Must call Client Login or GetEntityToken before calling this method".to_string(),
            )
        })?,
    };

    Ok(auth_type.header_name().map(|header| Credential {
        header,
        value: value.to_string(),
    }))
}

/// Credentials of one logical caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticationContext {
    /// Legacy client session ticket
    pub client_session_ticket: Option<String>,
    /// Entity token
    pub entity_token: Option<String>,
    /// Entity the token was issued for
    pub entity: Option<EntityKey>,
    /// Master player account id
    pub playfab_id: Option<String>,
}

impl AuthenticationContext {
    /// Creates an empty context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client session ticket
    #[must_use]
    pub fn with_session_ticket(mut self, ticket: impl Into<String>) -> Self {
        self.client_session_ticket = Some(ticket.into());
        self
    }

    /// Sets the entity token
    #[must_use]
    pub fn with_entity_token(mut self, token: impl Into<String>) -> Self {
        self.entity_token = Some(token.into());
        self
    }

    /// Sets the entity key
    #[must_use]
    pub fn with_entity(mut self, entity: EntityKey) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Wraps the context for sharing between a client and its callers
    #[must_use]
    pub fn into_shared(self) -> SharedContext {
        Arc::new(RwLock::new(self))
    }

    /// Session ticket, when present and non-empty
    #[must_use]
    pub fn session_ticket(&self) -> Option<&str> {
        self.client_session_ticket
            .as_deref()
            .filter(|t| !t.is_empty())
    }

    /// Entity token, when present and non-empty
    #[must_use]
    pub fn entity_token(&self) -> Option<&str> {
        self.entity_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether a client login has stored a session ticket
    #[must_use]
    pub fn is_client_logged_in(&self) -> bool {
        self.session_ticket().is_some()
    }

    /// Whether an entity token is available
    #[must_use]
    pub fn is_entity_logged_in(&self) -> bool {
        self.entity_token().is_some()
    }

    /// Stores the entity token and entity key of a token response
    pub fn apply_entity_token(&mut self, token: &EntityTokenResponse) {
        if let Some(value) = &token.entity_token {
            self.entity_token = Some(value.clone());
        }
        if let Some(entity) = &token.entity {
            self.entity = Some(entity.clone());
        }
    }

    /// Stores the credentials returned by a client login
    pub fn apply_login(&mut self, login: &LoginResult) {
        if let Some(ticket) = &login.session_ticket {
            self.client_session_ticket = Some(ticket.clone());
        }
        if let Some(playfab_id) = &login.playfab_id {
            self.playfab_id = Some(playfab_id.clone());
        }
        if let Some(token) = &login.entity_token {
            self.apply_entity_token(token);
        }
    }

    /// Clears every credential held by the context
    pub fn forget_all_credentials(&mut self) {
        self.client_session_ticket = None;
        self.entity_token = None;
        self.entity = None;
        self.playfab_id = None;
    }
}
