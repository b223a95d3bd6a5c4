//! UI Components
//!
//! Leptos components of the reorder list.

mod item_slot;
mod drag_handle;
mod busy_indicator;

pub use item_slot::ItemSlot;
pub use drag_handle::DragHandle;
pub use busy_indicator::{BusyImages, BusyMarkers, SpinnerHandle};
