//! Reorder Configuration
//!
//! Page-supplied settings, read from a JSON script element at boot.

use serde::{Deserialize, Serialize};

use crate::dom;
use crate::error::ReorderError;

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "feedback-reorder-config";

/// A (key, component) pair for string, icon and image lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangKey {
    pub key: String,
    pub component: String,
}

impl LangKey {
    fn new(key: &str, component: &str) -> Self {
        Self {
            key: key.to_string(),
            component: component.to_string(),
        }
    }
}

/// Boot config: the list's context id plus optional overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootConfig {
    /// Course module id the list belongs to
    pub cmid: u32,
    #[serde(flatten)]
    pub options: ReorderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// Form holding the item containers
    pub list_selector: String,
    /// Class on each item container
    pub item_class: String,
    /// Prefix of the element id carrying the item id
    pub item_id_prefix: String,
    /// Prefix of the per-container instance ids
    pub instance_id_prefix: String,
    pub handle_class: String,
    pub active_class: String,
    /// Remote method persisting the order
    pub reorder_method: String,
    pub handle_title: LangKey,
    pub handle_icon: LangKey,
    pub busy_image: LangKey,
    /// `log` level filter name
    pub log_level: String,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            list_selector: "#feedback_dragarea form".to_string(),
            item_class: "feedback_itemlist".to_string(),
            item_id_prefix: "feedback_item_".to_string(),
            instance_id_prefix: "mod_feedback".to_string(),
            handle_class: "itemhandle".to_string(),
            active_class: "drag_item_active".to_string(),
            reorder_method: "mod_feedback_update_questions_order".to_string(),
            handle_title: LangKey::new("move_item", "feedback"),
            handle_icon: LangKey::new("i/move_2d", "core"),
            busy_image: LangKey::new("i/loading_small", "moodle"),
            log_level: "info".to_string(),
        }
    }
}

impl ReorderConfig {
    /// Selector for the item containers inside the list
    pub fn item_selector(&self) -> String {
        format!("div.{}", self.item_class)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl BootConfig {
    pub fn from_json(json: &str) -> Result<Self, ReorderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config from the page's JSON script element
    pub fn load() -> Result<Self, ReorderError> {
        let missing = || ReorderError::MissingConfig(CONFIG_ELEMENT_ID.to_string());
        let element = dom::document()?
            .get_element_by_id(CONFIG_ELEMENT_ID).ok_or_else(missing)?;
        let json = element.text_content().ok_or_else(missing)?;
        Self::from_json(&json)
    }
}
