//! Reorder Context
//!
//! Per-list state handed to every slot of the list.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_dragswap::{create_swap_board, BoardSignal, SlotId};

use crate::components::BusyMarkers;
use crate::config::ReorderConfig;
use crate::models::Item;

/// Signals and settings shared by every slot of one list
#[derive(Clone, Copy)]
pub struct ReorderContext {
    /// Course module id sent with every save
    pub cmid: u32,
    pub options: StoredValue<ReorderConfig>,
    /// Slot -> item id mapping and the drag session
    pub board: BoardSignal<u32>,
    /// Item id -> container markup
    payloads: StoredValue<HashMap<u32, String>>,
    /// Busy indicators appended by drops
    pub busy: RwSignal<BusyMarkers>,
}

impl ReorderContext {
    pub fn new(cmid: u32, options: ReorderConfig, items: Vec<Item>) -> Self {
        let board = create_swap_board(items.iter().map(|item| item.id).collect());
        let payloads = items.into_iter().map(|item| (item.id, item.html)).collect();
        Self {
            cmid,
            options: StoredValue::new(options),
            board,
            payloads: StoredValue::new(payloads),
            busy: RwSignal::new(BusyMarkers::default()),
        }
    }

    /// Markup of whichever item currently sits in `slot`
    pub fn payload_at(&self, slot: SlotId) -> String {
        let id = self.board.with(|b| b.item_at(slot).copied());
        id.and_then(|id| self.payloads.with_value(|p| p.get(&id).cloned()))
            .unwrap_or_default()
    }
}
