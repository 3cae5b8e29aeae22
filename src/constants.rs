/// SDK identifier sent in the `X-PlayFabSDK` header and the `sdk` query parameter
pub const SDK_VERSION: &str = concat!("RustSdk-", env!("CARGO_PKG_VERSION"));
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = concat!("playfab-client/", env!("CARGO_PKG_VERSION"));
/// Default PlayFab production environment host suffix
pub const DEFAULT_ENVIRONMENT_URL: &str = "playfabapi.com";
/// Default timeout in seconds for a single API request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the client session ticket
pub const HEADER_SESSION_TICKET: &str = "X-Authorization";
/// Header carrying the developer secret key
pub const HEADER_SECRET_KEY: &str = "X-SecretKey";
/// Header carrying the entity token
pub const HEADER_ENTITY_TOKEN: &str = "X-EntityToken";
/// Header identifying the SDK
pub const HEADER_SDK: &str = "X-PlayFabSDK";
