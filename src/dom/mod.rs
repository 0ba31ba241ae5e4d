//! Browser glue: everything that touches `web_sys`.

pub mod binding;
pub mod host;
pub mod listeners;
pub mod observer;
pub mod style;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ZoomConfig;
use crate::error::{Result, ZoomPanError};

const CONFIG_ELEMENT_ID: &str = "vidzoom-config";

/// Reads overrides from `<script type="application/json" id="vidzoom-config">`
/// if the page provides one. Anything unusable falls back to defaults.
pub fn read_config(document: &web_sys::Document) -> ZoomConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return ZoomConfig::default();
    };
    match ZoomConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::error!("ignoring #{}: {:#}", CONFIG_ELEMENT_ID, e);
            ZoomConfig::default()
        }
    }
}

/// Injects styles, registers window listeners and starts watching for the
/// player.
pub fn install() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| ZoomPanError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ZoomPanError::Dom("no document".to_string()))?;

    let config = read_config(&document);
    style::inject(&document)?;

    let slot = Rc::new(RefCell::new(None));
    listeners::wire_window(&slot, &window)?;
    observer::watch(&document, config, slot)
}
