//! Localization Lookups
//!
//! Synchronous string and image lookups provided by the page.

use wasm_bindgen::prelude::*;

use crate::config::LangKey;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["M", "util"], js_name = get_string)]
    fn m_get_string(identifier: &str, component: &str) -> String;

    #[wasm_bindgen(js_namespace = ["M", "util"], js_name = image_url)]
    fn m_image_url(imagename: &str, component: &str) -> String;
}

pub fn get_string(key: &LangKey) -> String {
    m_get_string(&key.key, &key.component)
}

pub fn image_url(key: &LangKey) -> String {
    m_image_url(&key.key, &key.component)
}
