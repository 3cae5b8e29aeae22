/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::SDK_VERSION;
use crate::error::AppError;

/// Builds the full URL for an API path
///
/// An environment URL that already starts with `http` is used verbatim (private
/// clouds, local mocks). Otherwise the host is prefixed with the vertical name
/// when set, or with the title id: `https://{title}.playfabapi.com`.
///
/// # Errors
/// `AppError::TitleNotSet` when neither a vertical, a title id nor an absolute
/// environment URL is available.
pub fn build_url(config: &Config, path: &str) -> Result<String, AppError> {
    let environment = config.environment_url.trim().trim_end_matches('/');

    let base = if environment.starts_with("http") {
        environment.to_string()
    } else {
        let host = environment.trim_start_matches('.');
        let prefix = config
            .vertical_name
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| config.title_id.as_deref().filter(|t| !t.is_empty()))
            .ok_or(AppError::TitleNotSet)?;
        format!("https://{prefix}.{host}")
    };

    let path = path.trim_start_matches('/');
    Ok(format!("{base}/{path}?sdk={SDK_VERSION}"))
}
