use crate::application::auth::SharedContext;
use crate::model::requests::CustomTags;
use crate::{impl_custom_tags, impl_request};
use serde::Serialize;

/// Lists the languages supported by the localization service
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLanguageListRequest {
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl GetLanguageListRequest {
    /// Creates the request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl_request!(GetLanguageListRequest);
impl_custom_tags!(GetLanguageListRequest);
