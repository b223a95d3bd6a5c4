//! Error Types
//!
//! Failures raised while booting the reorder list or talking to the page bridge.

#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    #[error("Config element #{0} not found")]
    MissingConfig(String),

    #[error("Invalid reorder config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Item container {index} has no element id starting with {prefix:?}")]
    MissingItemId { index: usize, prefix: String },

    #[error("Malformed item id: {0:?}")]
    MalformedItemId(String),

    #[error("Invalid item id prefix: {0}")]
    InvalidPrefix(#[from] regex::Error),

    #[error("Remote call {method} failed: {message}")]
    Remote { method: String, message: String },
}
