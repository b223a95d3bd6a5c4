//! Template Commands

use super::{js_error_message, render_pix_js};

/// Render an icon to markup, e.g. `render_pix("i/move_2d", "core")`
pub async fn render_pix(name: &str, component: &str) -> Result<String, String> {
    let html = render_pix_js(name, component)
        .await
        .map_err(|e| js_error_message(&e))?;
    html.as_string()
        .ok_or_else(|| format!("icon {} rendered to non-string value", name))
}
