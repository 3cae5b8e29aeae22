/// Admin API implementation
pub mod admin_service;
/// Authentication API implementation
pub mod authentication_service;
/// Client API implementation
pub mod client_service;
/// CloudScript API implementation
pub mod cloud_script_service;
/// Localization API implementation
pub mod localization_service;

pub use crate::application::interfaces::admin::*;
pub use crate::application::interfaces::authentication::*;
pub use crate::application::interfaces::client::*;
pub use crate::application::interfaces::cloud_script::*;
pub use crate::application::interfaces::localization::*;
