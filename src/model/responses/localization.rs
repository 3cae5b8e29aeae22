use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Result of `GetLanguageList`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct GetLanguageListResponse {
    /// Supported language codes
    #[serde(default)]
    pub language_list: Vec<String>,
}
