//! Drag Handle Component
//!
//! Focusable grip users drag to start a move. The icon arrives asynchronously.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::LangKey;

#[component]
pub fn DragHandle(
    handle_class: String,
    /// Localized hover text
    title: String,
    icon: LangKey,
) -> impl IntoView {
    let (icon_html, set_icon_html) = signal(String::new());

    spawn_local(async move {
        match commands::render_pix(&icon.key, &icon.component).await {
            Ok(html) => set_icon_html.set(html),
            // Handle stays usable without its icon
            Err(e) => log::debug!("icon {} not rendered: {}", icon.key, e),
        }
    });

    view! {
        <span
            class=handle_class
            title=title
            tabindex="0"
            role="button"
            draggable="true"
            inner_html=move || icon_html.get()
        />
    }
}
