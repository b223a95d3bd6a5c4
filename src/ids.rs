//! Item Identifiers
//!
//! Extracting numeric item ids from DOM ids and formatting the final order.

use regex::{Regex, RegexBuilder};

use crate::error::ReorderError;

/// Strips everything up to and including the item prefix, case-insensitively,
/// then parses the rest as the item id.
#[derive(Debug, Clone)]
pub struct ItemIdParser {
    prefix: String,
    pattern: Regex,
}

impl ItemIdParser {
    pub fn new(prefix: &str) -> Result<Self, ReorderError> {
        let pattern = RegexBuilder::new(&format!("^.*{}", regex::escape(prefix)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether a DOM id carries the item prefix at all
    pub fn matches(&self, dom_id: &str) -> bool {
        self.pattern.is_match(dom_id)
    }

    /// `feedback_item_22` -> 22
    pub fn parse(&self, dom_id: &str) -> Result<u32, ReorderError> {
        let malformed = || ReorderError::MalformedItemId(dom_id.to_string());
        let m = self.pattern.find(dom_id).ok_or_else(malformed)?;
        dom_id[m.end()..].parse::<u32>().map_err(|_| malformed())
    }
}

/// Item id of the container at `index`, from the ids of its descendants.
///
/// The first id that parses wins, so `feedback_item_22_label` ahead of
/// `feedback_item_22` still yields 22.
pub fn pick_item_id<I>(parser: &ItemIdParser, dom_ids: I, index: usize) -> Result<u32, ReorderError>
where
    I: IntoIterator<Item = String>,
{
    let mut first_match = None;
    for dom_id in dom_ids {
        if !parser.matches(&dom_id) {
            continue;
        }
        match parser.parse(&dom_id) {
            Ok(id) => return Ok(id),
            Err(_) => {
                first_match.get_or_insert(dom_id);
            }
        }
    }
    Err(match first_match {
        Some(dom_id) => ReorderError::MalformedItemId(dom_id),
        None => ReorderError::MissingItemId {
            index,
            prefix: parser.prefix().to_string(),
        },
    })
}

/// Comma-joined order as the remote service expects it: `"30,20,10"`
pub fn format_order(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// DOM id for the n-th slot, e.g. `mod_feedback3`
pub fn instance_dom_id(instance_prefix: &str, index: usize) -> String {
    format!("{}{}", instance_prefix, index)
}
