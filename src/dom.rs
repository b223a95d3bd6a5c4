//! DOM Glue
//!
//! Reading the server-rendered item containers and turning them into slots.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::ReorderConfig;
use crate::error::ReorderError;
use crate::ids::{pick_item_id, ItemIdParser};
use crate::models::Item;

/// Server-rendered list found in the page
pub struct ScannedList {
    /// Original containers in document order, one per slot
    pub containers: Vec<Element>,
    pub items: Vec<Item>,
}

pub fn document() -> Result<Document, ReorderError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ReorderError::MissingElement("document".to_string()))
}

fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, ReorderError> {
    let list = root
        .query_selector_all(selector)
        .map_err(|_| ReorderError::MissingElement(selector.to_string()))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Find every item container and extract its id and markup.
///
/// The containers themselves stay in the page with their classes, attributes
/// and surrounding siblings; only their inner markup becomes the payload that
/// moves on swaps. A container without a parseable item id fails the whole scan.
pub fn scan_items(options: &ReorderConfig, parser: &ItemIdParser) -> Result<ScannedList, ReorderError> {
    let document = document()?;
    let list_root = document
        .query_selector(&options.list_selector)
        .ok()
        .flatten()
        .ok_or_else(|| ReorderError::MissingElement(options.list_selector.clone()))?;

    let containers = query_all(&list_root, &options.item_selector())?;
    let mut items = Vec::with_capacity(containers.len());
    for (index, container) in containers.iter().enumerate() {
        let dom_ids = query_all(container, "[id]")?.into_iter().map(|el| el.id());
        items.push(Item {
            id: pick_item_id(parser, dom_ids, index)?,
            html: container.inner_html(),
        });
    }

    Ok(ScannedList { containers, items })
}

/// Turn an original container into an empty, draggable slot host
pub fn prepare_container(container: &Element, instance_id: &str) -> Result<HtmlElement, ReorderError> {
    container.set_id(instance_id);
    container
        .set_attribute("draggable", "true")
        .map_err(|_| ReorderError::MissingElement(instance_id.to_string()))?;
    container.set_inner_html("");
    container
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| ReorderError::MissingElement(instance_id.to_string()))
}

/// Class attribute with `class` added or removed, other classes untouched
pub fn toggle_class(current: &str, class: &str, on: bool) -> String {
    let mut classes: Vec<&str> = current.split_whitespace().filter(|c| *c != class).collect();
    if on {
        classes.push(class);
    }
    classes.join(" ")
}
