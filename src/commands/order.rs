//! Order Commands
//!
//! Persisting the item order through the ajax channel.

use crate::error::ReorderError;
use crate::models::OrderRequest;
use super::{ajax_call, js_error_message};

pub async fn update_questions_order(method: &str, request: &OrderRequest) -> Result<(), ReorderError> {
    let remote = |message: String| ReorderError::Remote {
        method: method.to_string(),
        message,
    };
    let js_args = serde_wasm_bindgen::to_value(request).map_err(|e| remote(e.to_string()))?;
    ajax_call(method, js_args)
        .await
        .map(|_| ())
        .map_err(|e| remote(js_error_message(&e)))
}
