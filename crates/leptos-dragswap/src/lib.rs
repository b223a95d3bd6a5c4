//! Leptos DragSwap Utilities
//!
//! Reorder a fixed set of slots with native HTML5 drag events.
//! Hovering a dragged slot over another one swaps their contents in place,
//! and dropping hands the final order back to the caller.

mod board;
mod handlers;

pub use board::{DragSession, EnterOutcome, SlotId, SwapBoard, SwapError};
pub use handlers::*;
