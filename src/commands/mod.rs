//! Page Bridge Wrappers
//!
//! Frontend bindings to the host page: the ajax channel, the icon
//! renderer and the localization helpers.

mod order;
mod templates;
mod strings;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "feedbackReorder"], js_name = ajaxCall)]
    async fn ajax_call(methodname: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "feedbackReorder"], js_name = renderPix)]
    async fn render_pix_js(name: &str, component: &str) -> Result<JsValue, JsValue>;
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use order::*;
pub use templates::*;
pub use strings::*;
