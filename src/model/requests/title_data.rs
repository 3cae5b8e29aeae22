use crate::application::auth::SharedContext;
use crate::impl_request;
use serde::Serialize;

/// Reads title data, used by both the Admin and the Client API
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleDataRequest {
    /// Keys to read, all keys when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
    /// Label of an override to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_label: Option<String>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl GetTitleDataRequest {
    /// Creates a request reading every key
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the read to `keys`
    #[must_use]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the override label
    #[must_use]
    pub fn with_override_label(mut self, label: impl Into<String>) -> Self {
        self.override_label = Some(label.into());
        self
    }
}

impl_request!(GetTitleDataRequest);
