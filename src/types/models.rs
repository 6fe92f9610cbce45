//! Model catalog descriptors returned by `list_models`.

use serde::{Deserialize, Serialize};

/// Model information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model ID
    pub id: String,
    /// Model owner/organization
    #[serde(default)]
    pub owned_by: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
}

impl ModelInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owned_by: String::new(),
            created: None,
        }
    }
}
