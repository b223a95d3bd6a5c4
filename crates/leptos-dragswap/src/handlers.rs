//! Event Handler Factories
//!
//! Builds `DragEvent` handlers bound to a shared board signal, one set per slot.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, EventTarget};

use crate::board::{EnterOutcome, SlotId, SwapBoard};

/// Shared board state for one list instance
pub type BoardSignal<T> = RwSignal<SwapBoard<T>>;

pub fn create_swap_board<T>(items: Vec<T>) -> BoardSignal<T>
where
    T: Send + Sync + 'static,
{
    RwSignal::new(SwapBoard::new(items))
}

/// Create dragstart handler: records the slot as drag source
pub fn make_on_dragstart<T>(board: BoardSignal<T>, slot: SlotId) -> impl Fn(DragEvent) + Copy + 'static
where
    T: Send + Sync + 'static,
{
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
        }
        board.update(|b| match b.drag_start(slot) {
            Ok(()) => log::debug!(target: "dnd", "drag start on {}", slot),
            Err(e) => log::warn!(target: "dnd", "drag start ignored: {}", e),
        });
    }
}

/// Create dragover handler: every slot accepts drops while dragging
pub fn make_on_dragover() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
    }
}

/// Create dragenter handler: swaps contents with the current source
pub fn make_on_dragenter<T>(board: BoardSignal<T>, slot: SlotId) -> impl Fn(DragEvent) + Copy + 'static
where
    T: Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        board.update(|b| match b.drag_enter(slot) {
            Ok(EnterOutcome::Swapped { from, to }) => {
                log::debug!(target: "dnd", "swapped {} -> {}", from, to)
            }
            Ok(_) => {}
            Err(e) => log::warn!(target: "dnd", "drag enter ignored: {}", e),
        });
    }
}

/// Create dragleave handler
pub fn make_on_dragleave<T>(board: BoardSignal<T>, slot: SlotId) -> impl Fn(DragEvent) + Copy + 'static
where
    T: Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        board.update(|b| {
            if let Err(e) = b.drag_leave(slot) {
                log::warn!(target: "dnd", "drag leave ignored: {}", e);
            }
        });
    }
}

/// Create drop handler. `on_drop` receives the drop slot and the items in slot order.
pub fn make_on_drop<T, F>(board: BoardSignal<T>, slot: SlotId, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    T: Clone + Send + Sync + 'static,
    F: Fn(SlotId, Vec<T>) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        match board.try_update(|b| b.drop_on(slot)) {
            Some(Ok(order)) => {
                log::debug!(target: "dnd", "drop on {} with {} slots", slot, order.len());
                on_drop(slot, order);
            }
            Some(Err(e)) => log::warn!(target: "dnd", "drop ignored: {}", e),
            // Board disposed with its owner
            None => {}
        }
    }
}

/// Attach every drag handler for `slot` to an element already in the page
pub fn bind_slot_handlers<T, F>(target: &EventTarget, board: BoardSignal<T>, slot: SlotId, on_drop: F)
where
    T: Clone + Send + Sync + 'static,
    F: Fn(SlotId, Vec<T>) + Clone + 'static,
{
    listen(target, "dragstart", make_on_dragstart(board, slot));
    listen(target, "dragover", make_on_dragover());
    listen(target, "dragenter", make_on_dragenter(board, slot));
    listen(target, "dragleave", make_on_dragleave(board, slot));
    listen(target, "drop", make_on_drop(board, slot, on_drop));
}

fn listen<H>(target: &EventTarget, event: &str, handler: H)
where
    H: Fn(DragEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(DragEvent)>::new(handler);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!(target: "dnd", "could not listen for {}", event);
    }
    // Slots live as long as the page
    cb.forget();
}
