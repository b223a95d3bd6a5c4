//! Item Slot Component
//!
//! Contents of one page container: its current item's markup, a drag handle
//! and any busy indicators. The container element itself stays the page's own;
//! drag events are bound to it directly and only its active class is toggled.

use leptos::prelude::*;
use leptos_dragswap::SlotId;
use web_sys::Element;

use crate::components::{BusyImages, DragHandle};
use crate::context::ReorderContext;
use crate::dom;

#[component]
pub fn ItemSlot(
    ctx: ReorderContext,
    slot_id: SlotId,
    /// Page element this slot is mounted in
    container: Element,
    handle_title: String,
    busy_src: String,
) -> impl IntoView {
    let options = ctx.options.get_value();
    let board = ctx.board;

    // Memos keep unrelated board updates from rewriting the markup
    let payload = Memo::new(move |_| ctx.payload_at(slot_id));
    let is_active = Memo::new(move |_| board.with(|b| b.is_active(slot_id)));
    let pointer_events = Memo::new(move |_| {
        if board.with(|b| b.pointer_events_enabled()) { "auto" } else { "none" }
    });

    let active_class = options.active_class.clone();
    Effect::new(move |_| {
        let active = is_active.get();
        container.set_class_name(&dom::toggle_class(&container.class_name(), &active_class, active));
    });

    view! {
        // pointer-events is inherited by the item markup
        <div
            class="feedback-reorder-payload"
            style:pointer-events=move || pointer_events.get()
            inner_html=move || payload.get()
        />
        <DragHandle
            handle_class=options.handle_class.clone()
            title=handle_title
            icon=options.handle_icon.clone()
        />
        <BusyImages slot_id=slot_id markers=ctx.busy src=busy_src />
    }
}
