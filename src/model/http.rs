/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::{AuthType, Credential};
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{HEADER_SDK, SDK_VERSION, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::ApiEnvelope;
use crate::utils::url::build_url;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, trace, warn};

/// One outgoing API call, fully resolved
#[derive(Debug, Clone)]
pub struct ApiCall {
    /// Endpoint path, e.g. `/Admin/AddNews`
    pub path: &'static str,
    /// Serialized request body
    pub body: Value,
    /// Auth type chosen for the call
    pub auth_type: AuthType,
    /// Credential matching `auth_type`, `None` for unauthenticated calls
    pub credential: Option<Credential>,
    /// Additional headers
    pub extra_headers: BTreeMap<String, String>,
    /// Opaque caller data handed through to the transport
    pub custom_data: Option<Value>,
}

/// Performs API calls on behalf of [`crate::application::client::PlayFabClient`]
///
/// Implementations serialize the call to the wire, attach the credential,
/// and return the `data` payload of the response or the service error.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the call and returns the response payload
    async fn call(&self, call: ApiCall) -> Result<Value, AppError>;
}

/// reqwest backed transport talking to the PlayFab REST endpoints
pub struct HttpTransport {
    client: Client,
    config: Arc<Config>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpTransport {
    /// Creates the transport for a configuration
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let rate_limiter = config.rate_limiter.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Configuration the transport builds URLs from
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, call: ApiCall) -> Result<Value, AppError> {
        let url = build_url(&self.config, call.path)?;

        let mut headers = vec![
            ("Content-Type", "application/json"),
            (HEADER_SDK, SDK_VERSION),
        ];
        if let Some(credential) = &call.credential {
            headers.push((credential.header, credential.value.as_str()));
        }
        for (name, value) in &call.extra_headers {
            headers.push((name.as_str(), value.as_str()));
        }

        if let Some(custom_data) = &call.custom_data {
            trace!("{} custom data: {}", call.path, custom_data);
        }

        let response = make_http_request(
            &self.client,
            self.rate_limiter.as_ref(),
            Method::POST,
            &url,
            headers,
            &Some(&call.body),
        )
        .await?;

        parse_envelope(call.path, response).await
    }
}

/// Makes an HTTP request, waiting on the rate limiter first when one is given
///
/// No retries are performed: a failed request surfaces as an error and a
/// non-success status is returned to the caller with its body intact, so the
/// PlayFab error envelope can be read.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Optional limiter to wait on before sending
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body (will be serialized to JSON)
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Option<&RateLimiter>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
) -> Result<Response, AppError> {
    if let Some(limiter) = rate_limiter {
        limiter.wait().await;
    }

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);
    if !status.is_success() {
        warn!("Request to {} failed with status {}", url, status);
    }

    Ok(response)
}

/// Reads a PlayFab response envelope and returns its `data` payload
async fn parse_envelope(path: &str, response: Response) -> Result<Value, AppError> {
    let status = response.status();
    let text = response.text().await?;

    match serde_json::from_str::<ApiEnvelope>(&text) {
        Ok(envelope) => envelope.into_result().inspect_err(|e| {
            if let AppError::Api(api) = e {
                error!("{} failed: {}", path, api.summary());
            }
        }),
        Err(e) if status.is_success() => Err(AppError::Deserialization(format!(
            "{path}: invalid response envelope: {e}"
        ))),
        Err(_) => {
            error!("{} failed with status {}: {}", path, status, text);
            Err(AppError::Unexpected(status))
        }
    }
}
