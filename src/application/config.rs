/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_ENVIRONMENT_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::utils::config::{get_env_non_empty, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Environment variable pointing at a JSON settings file used by [`Config::load`]
pub const SETTINGS_FILE_ENV: &str = "PLAYFAB_SETTINGS_FILE";

static GLOBAL: Lazy<Arc<Config>> = Lazy::new(|| Arc::new(Config::load()));

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for client side request throttling
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default = "Config::empty")]
/// Settings shared by every call a client makes
///
/// The developer secret key is never serialized, so printing a `Config`
/// through `Display` or `Debug` does not leak it.
pub struct Config {
    /// Title id, used as the host prefix of the API URL
    #[serde(alias = "TitleId")]
    pub title_id: Option<String>,
    /// Developer secret key granting server/admin privileges
    #[serde(alias = "DeveloperSecretKey", skip_serializing)]
    pub developer_secret_key: Option<String>,
    /// Environment host suffix, or an absolute base URL starting with `http`
    #[serde(alias = "ProductionEnvironmentUrl")]
    pub environment_url: String,
    /// Vertical name, replaces the title id as host prefix when set
    #[serde(alias = "VerticalName")]
    pub vertical_name: Option<String>,
    /// Timeout in seconds for a single request
    pub timeout_secs: u64,
    /// Optional client side throttling, disabled when `None`
    pub rate_limiter: Option<RateLimiterConfig>,
    /// Headers added to every request
    pub extra_headers: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables and the `.env` file
    ///
    /// Recognised variables: `PLAYFAB_TITLE_ID`, `PLAYFAB_DEVELOPER_SECRET_KEY`,
    /// `PLAYFAB_ENVIRONMENT_URL`, `PLAYFAB_VERTICAL_NAME`, `PLAYFAB_TIMEOUT_SECS`
    /// and the `PLAYFAB_RATE_LIMIT_*` family.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let title_id = get_env_non_empty("PLAYFAB_TITLE_ID");
        if title_id.is_none() {
            warn!("PLAYFAB_TITLE_ID not found in environment variables or .env file");
        }

        let max_requests: Option<u32> = get_env_or_none("PLAYFAB_RATE_LIMIT_MAX_REQUESTS");
        let rate_limiter = max_requests.map(|max_requests| RateLimiterConfig {
            max_requests,
            period_seconds: get_env_or_default("PLAYFAB_RATE_LIMIT_PERIOD_SECONDS", 60),
            burst_size: get_env_or_default("PLAYFAB_RATE_LIMIT_BURST_SIZE", max_requests),
        });

        Config {
            title_id,
            developer_secret_key: get_env_non_empty("PLAYFAB_DEVELOPER_SECRET_KEY"),
            environment_url: get_env_or_default(
                "PLAYFAB_ENVIRONMENT_URL",
                DEFAULT_ENVIRONMENT_URL.to_string(),
            ),
            vertical_name: get_env_non_empty("PLAYFAB_VERTICAL_NAME"),
            timeout_secs: get_env_or_default("PLAYFAB_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            rate_limiter,
            extra_headers: BTreeMap::new(),
        }
    }

    /// Creates a configuration with no credentials and default endpoints,
    /// without reading the environment
    #[must_use]
    pub fn empty() -> Self {
        Config {
            title_id: None,
            developer_secret_key: None,
            environment_url: DEFAULT_ENVIRONMENT_URL.to_string(),
            vertical_name: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            rate_limiter: None,
            extra_headers: BTreeMap::new(),
        }
    }

    /// Loads a configuration from a JSON settings file
    ///
    /// Keys may be snake_case (`title_id`) or the PascalCase names used by
    /// PlayFab shared settings files (`TitleId`, `DeveloperSecretKey`, ...).
    /// Missing keys keep the values of [`Config::empty`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        debug!("Loaded settings from {}", path.display());
        Ok(config.normalized())
    }

    /// Loads the settings file named by `PLAYFAB_SETTINGS_FILE` when present,
    /// falling back to [`Config::new`]
    pub fn load() -> Self {
        match get_env_non_empty(SETTINGS_FILE_ENV) {
            Some(path) => Self::from_json_file(&path).unwrap_or_else(|e| {
                warn!("Failed to load settings file {path}: {e}, using environment");
                Self::new()
            }),
            None => Self::new(),
        }
    }

    /// Process wide configuration, initialised lazily on first access
    ///
    /// Only [`crate::application::client::PlayFabClient::default`] relies on it;
    /// every other constructor takes its configuration explicitly.
    pub fn global() -> Arc<Config> {
        GLOBAL.clone()
    }

    /// Sets the title id
    #[must_use]
    pub fn with_title_id(mut self, title_id: impl Into<String>) -> Self {
        self.title_id = Some(title_id.into());
        self
    }

    /// Sets the developer secret key
    #[must_use]
    pub fn with_developer_secret_key(mut self, key: impl Into<String>) -> Self {
        self.developer_secret_key = Some(key.into());
        self
    }

    /// Sets the environment URL
    #[must_use]
    pub fn with_environment_url(mut self, url: impl Into<String>) -> Self {
        self.environment_url = url.into();
        self
    }

    /// Sets the vertical name
    #[must_use]
    pub fn with_vertical_name(mut self, vertical: impl Into<String>) -> Self {
        self.vertical_name = Some(vertical.into());
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Enables client side throttling
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Adds a header sent with every request
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Returns the developer secret key when one is configured and non-empty
    #[must_use]
    pub fn secret_key(&self) -> Option<&str> {
        self.developer_secret_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }

    /// Whether a developer secret key is configured
    #[must_use]
    pub fn has_developer_secret_key(&self) -> bool {
        self.secret_key().is_some()
    }

    /// Whether a base URL can be built: a vertical, a title id, or an
    /// absolute environment URL
    #[must_use]
    pub fn has_endpoint(&self) -> bool {
        let non_empty = |v: &Option<String>| v.as_deref().is_some_and(|v| !v.is_empty());
        non_empty(&self.vertical_name)
            || non_empty(&self.title_id)
            || self.environment_url.trim().starts_with("http")
    }

    fn normalized(mut self) -> Self {
        for field in [
            &mut self.title_id,
            &mut self.developer_secret_key,
            &mut self.vertical_name,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        if self.environment_url.trim().is_empty() {
            self.environment_url = DEFAULT_ENVIRONMENT_URL.to_string();
        }
        self
    }
}
