//! Frontend Models
//!
//! Items found in the page and the order payload sent back.

use serde::Serialize;

use crate::ids::format_order;

/// One reorderable entry as found in the page
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    /// Container markup, moved wholesale on swaps
    pub html: String,
}

/// Arguments of the order update call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub cmid: u32,
    /// Comma-joined item ids in display order
    pub itemorder: String,
}

impl OrderRequest {
    pub fn new(cmid: u32, ids: &[u32]) -> Self {
        Self {
            cmid,
            itemorder: format_order(ids),
        }
    }
}
