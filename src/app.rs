//! Reorder App
//!
//! Boots the list: reads the page config, scans the server-rendered items
//! and mounts a slot inside each of the page's own containers.

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos_dragswap::{bind_slot_handlers, SlotId};
use web_sys::Element;

use crate::commands;
use crate::components::{ItemSlot, SpinnerHandle};
use crate::config::BootConfig;
use crate::context::ReorderContext;
use crate::dom;
use crate::error::ReorderError;
use crate::ids::{instance_dom_id, ItemIdParser};
use crate::logger;
use crate::persist;

/// Mount the reorder list for the current page
pub fn boot() -> Result<(), ReorderError> {
    let BootConfig { cmid, options } = BootConfig::load()?;
    logger::init(options.level_filter());

    let parser = ItemIdParser::new(&options.item_id_prefix)?;
    let scanned = dom::scan_items(&options, &parser)?;
    if scanned.items.is_empty() {
        log::info!("no items under {}, nothing to reorder", options.list_selector);
        return Ok(());
    }
    log::info!("cmid {}: {} items ready for reordering", cmid, scanned.items.len());

    // Root owner for the list's signals, alive for the page
    let owner = Owner::new();
    owner.set();

    let ctx = ReorderContext::new(cmid, options, scanned.items);
    mount_slots(ctx, scanned.containers)
}

/// Bind drag handlers to every container and mount its slot contents in place
fn mount_slots(ctx: ReorderContext, containers: Vec<Element>) -> Result<(), ReorderError> {
    let options = ctx.options.get_value();
    let handle_title = commands::get_string(&options.handle_title);
    let busy_src = commands::image_url(&options.busy_image);

    let cmid = ctx.cmid;
    let method = options.reorder_method.clone();
    let on_drop = Callback::new(move |(slot, order): (SlotId, Vec<u32>)| {
        log::info!("drop on {}, saving {} items", slot, order.len());
        let spinner = SpinnerHandle::append(ctx.busy, slot);
        persist::persist(cmid, &order, method.clone(), spinner);
    });

    for (index, container) in containers.into_iter().enumerate() {
        let slot_id = SlotId(index);
        let host = dom::prepare_container(&container, &instance_dom_id(&options.instance_id_prefix, index))?;
        bind_slot_handlers(&host, ctx.board, slot_id, move |slot, order| on_drop.run((slot, order)));

        let handle_title = handle_title.clone();
        let busy_src = busy_src.clone();
        leptos::mount::mount_to(host, move || {
            view! {
                <ItemSlot
                    ctx=ctx
                    slot_id=slot_id
                    container=container
                    handle_title=handle_title
                    busy_src=busy_src
                />
            }
        })
        .forget();
    }
    Ok(())
}
