//! Watches the page for the player to appear and attaches the overlay to it.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, MutationObserver, MutationObserverInit, MutationRecord};

use crate::config::ZoomConfig;
use crate::dom::binding::ControllerSlot;
use crate::dom::host::{CONTAINER_ID, DomHost};
use crate::dom::listeners::wire_controls;
use crate::error::Result;
use crate::mount::attach;

struct Watcher {
    document: Document,
    config: ZoomConfig,
    slot: Rc<ControllerSlot>,
    attempt_pending: Cell<bool>,
}

/// Called for every batch of mutations. Schedules at most one attach attempt
/// at a time.
fn on_mutations(watcher: &Rc<Watcher>, records: &js_sys::Array) {
    let child_list_changed = records.iter().any(|record| {
        record
            .dyn_into::<MutationRecord>()
            .map(|record| record.type_() == "childList")
            .unwrap_or(false)
    });
    if !child_list_changed || watcher.attempt_pending.get() {
        return;
    }
    if watcher.document.get_element_by_id(CONTAINER_ID).is_some() {
        return;
    }
    let player_present = watcher
        .document
        .query_selector(&watcher.config.player_selector)
        .ok()
        .flatten()
        .is_some();
    if !player_present {
        return;
    }

    watcher.attempt_pending.set(true);
    let w = Rc::clone(watcher);
    Timeout::new(watcher.config.init_delay_ms, move || {
        w.attempt_pending.set(false);
        w.initialize();
    })
    .forget();
}

impl Watcher {
    fn initialize(&self) {
        // The player may have been swapped out during the delay.
        let Some(player) = self
            .document
            .query_selector(&self.config.player_selector)
            .ok()
            .flatten()
        else {
            log::debug!("player vanished before initialization");
            return;
        };
        log::info!("player found, initializing zoom controls");

        let mut host = DomHost::new(
            &self.document,
            &player,
            &self.config,
            Rc::downgrade(&self.slot),
        );
        let controller = match attach(&mut host, &self.config) {
            Ok(Some(controller)) => controller,
            Ok(None) => return,
            Err(e) => {
                log::error!("zoom controls not attached: {}", e);
                return;
            }
        };

        let elements = controller.readout().map(|readout| readout.elements().clone());
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => *slot = Some(controller),
            Err(_) => {
                log::error!("controller slot busy, attach abandoned");
                return;
            }
        }
        if let Some(elements) = elements {
            if let Err(e) = wire_controls(&self.slot, &elements) {
                log::error!("failed to wire zoom controls: {}", e);
            }
        }
    }
}

/// Starts observing `document.body`. The observer stays alive for the
/// lifetime of the page.
pub fn watch(document: &Document, config: ZoomConfig, slot: Rc<ControllerSlot>) -> Result<()> {
    let Some(body) = document.body() else {
        log::warn!("document has no body to observe");
        return Ok(());
    };

    let watcher = Rc::new(Watcher {
        document: document.clone(),
        config,
        slot,
        attempt_pending: Cell::new(false),
    });

    let w = watcher.clone();
    let callback = Closure::wrap(Box::new(move |records: js_sys::Array, _: MutationObserver| {
        on_mutations(&w, &records);
    }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(&body, &options)?;
    callback.forget();

    log::info!("watching for player container {}", watcher.config.player_selector);
    Ok(())
}
