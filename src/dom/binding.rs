//! `web_sys` implementations of the controller seams.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::controller::{TransformController, TransformTarget, ZoomReadout, format_scale};
use crate::indicator::HideTicket;

pub type DomController = TransformController<DomTarget, DomReadout>;

/// The single controller slot every listener dispatches into. Empty until the
/// first successful attach.
pub type ControllerSlot = RefCell<Option<DomController>>;

pub struct DomTarget {
    element: HtmlElement,
}

impl DomTarget {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl TransformTarget for DomTarget {
    fn write_transform(&mut self, transform: &str, origin: &str) {
        let style = self.element.style();
        if let Err(e) = style
            .set_property("transform", transform)
            .and_then(|_| style.set_property("transform-origin", origin))
        {
            log::warn!("failed to write transform: {:?}", e);
        }
    }

    fn set_transition(&mut self, transition: Option<&str>) {
        let value = transition.unwrap_or("none");
        if let Err(e) = self.element.style().set_property("transition", value) {
            log::warn!("failed to set transition: {:?}", e);
        }
    }
}

/// Elements making up the mounted control, looked up once at insertion.
#[derive(Clone)]
pub struct ControlElements {
    pub area: HtmlElement,
    pub indicator: HtmlElement,
    pub value: HtmlElement,
    pub slider: HtmlInputElement,
    pub reset: HtmlElement,
}

pub struct DomReadout {
    elements: ControlElements,
    slot: Weak<ControllerSlot>,
    pending_hide: Option<Timeout>,
}

impl DomReadout {
    pub fn new(elements: ControlElements, slot: Weak<ControllerSlot>) -> Self {
        Self {
            elements,
            slot,
            pending_hide: None,
        }
    }

    pub fn elements(&self) -> &ControlElements {
        &self.elements
    }
}

impl ZoomReadout for DomReadout {
    fn show_scale(&mut self, scale: f64) {
        let text = format_scale(scale);
        self.elements.value.set_text_content(Some(&text));
        self.elements.slider.set_value(&scale.to_string());
        self.elements.slider.set_title(&format!("Zoom: {}", text));
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        let cursor = if grabbing { "grabbing" } else { "grab" };
        if let Err(e) = self.elements.area.style().set_property("cursor", cursor) {
            log::warn!("failed to set cursor: {:?}", e);
        }
    }

    fn show_indicator(&mut self, scale: f64) {
        self.elements
            .indicator
            .set_text_content(Some(&format_scale(scale)));
        if let Err(e) = self.elements.indicator.class_list().add_1("visible") {
            log::warn!("failed to show indicator: {:?}", e);
        }
    }

    fn hide_indicator(&mut self) {
        if let Err(e) = self.elements.indicator.class_list().remove_1("visible") {
            log::warn!("failed to hide indicator: {:?}", e);
        }
    }

    fn schedule_indicator_hide(&mut self, ticket: HideTicket, after: Duration) {
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        let slot = self.slot.clone();
        // Replacing the handle drops, and so cancels, the previous timeout.
        self.pending_hide = Some(Timeout::new(millis, move || {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            match slot.try_borrow_mut() {
                Ok(mut controller) => {
                    if let Some(controller) = controller.as_mut() {
                        controller.expire_indicator(ticket);
                    }
                }
                Err(_) => log::warn!("controller busy, indicator hide skipped"),
            };
        }));
    }
}
