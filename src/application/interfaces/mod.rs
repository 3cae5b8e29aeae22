/// Admin API interface
pub mod admin;
/// Authentication API interface
pub mod authentication;
/// Client API interface
pub mod client;
/// CloudScript API interface
pub mod cloud_script;
/// Localization API interface
pub mod localization;
