use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Title data key/value pairs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, DisplaySimple)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleDataResult {
    /// Requested key/value pairs
    #[serde(default)]
    pub data: HashMap<String, String>,
}
