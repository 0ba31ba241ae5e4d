use std::rc::Rc;

use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, WheelEvent};

use crate::dom::binding::{ControlElements, ControllerSlot};
use crate::error::Result;
use crate::event_handler::InputEvent;

/// Sends `event` to the bound controller, if any. Returns whether it was
/// consumed.
fn dispatch(slot: &ControllerSlot, event: InputEvent) -> bool {
    match slot.try_borrow_mut() {
        Ok(mut controller) => controller
            .as_mut()
            .map(|controller| controller.handle(&event))
            .unwrap_or(false),
        Err(_) => {
            log::warn!("controller busy, dropped {:?}", event);
            false
        }
    }
}

fn swallow(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}

fn listen<E, F>(
    target: &EventTarget,
    name: &str,
    options: Option<&AddEventListenerOptions>,
    mut handler: F,
) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| match event.dyn_into::<E>() {
        Ok(event) => handler(event),
        Err(_) => log::debug!("unexpected event type"),
    }) as Box<dyn FnMut(Event)>);

    match options {
        Some(options) => target.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            options,
        )?,
        None => target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?,
    }

    closure.forget();
    Ok(())
}

fn page_pos(event: &MouseEvent) -> (f64, f64) {
    (f64::from(event.page_x()), f64::from(event.page_y()))
}

/// Listeners on the freshly mounted control. Registered once per mount.
pub fn wire_controls(slot: &Rc<ControllerSlot>, elements: &ControlElements) -> Result<()> {
    let non_passive = AddEventListenerOptions::new();
    non_passive.set_passive(false);

    let s = slot.clone();
    listen(&elements.area, "mousedown", None, move |event: MouseEvent| {
        let (x, y) = page_pos(&event);
        if dispatch(&s, InputEvent::PointerDown { x, y }) {
            swallow(&event);
        }
    })?;

    let s = slot.clone();
    listen(&elements.area, "wheel", Some(&non_passive), move |event: WheelEvent| {
        let wheel = InputEvent::Wheel {
            delta_y: event.delta_y(),
            over_control: true,
        };
        if dispatch(&s, wheel) {
            swallow(&event);
        }
    })?;

    let s = slot.clone();
    listen(&elements.area, "dblclick", None, move |event: MouseEvent| {
        if dispatch(&s, InputEvent::DoubleClick) {
            swallow(&event);
        }
    })?;

    let s = slot.clone();
    let slider = elements.slider.clone();
    listen(&elements.slider, "input", None, move |_: Event| {
        match slider.value().parse::<f64>() {
            Ok(value) => {
                dispatch(&s, InputEvent::SliderInput(value));
            }
            Err(e) => log::warn!("bad slider value {:?}: {}", slider.value(), e),
        }
    })?;

    let s = slot.clone();
    listen(&elements.reset, "click", None, move |_: Event| {
        dispatch(&s, InputEvent::ResetClick);
    })?;

    Ok(())
}

/// Window-level listeners that follow a drag outside the control. Registered
/// once for the lifetime of the page; they dispatch into whichever controller
/// currently occupies the slot.
pub fn wire_window(slot: &Rc<ControllerSlot>, window: &web_sys::Window) -> Result<()> {
    let s = slot.clone();
    listen(window, "mousemove", None, move |event: MouseEvent| {
        let (x, y) = page_pos(&event);
        dispatch(&s, InputEvent::PointerMove { x, y });
    })?;

    let s = slot.clone();
    listen(window, "mouseup", None, move |_: MouseEvent| {
        dispatch(&s, InputEvent::PointerUp);
    })?;

    // Capture phase so a drag-time wheel is claimed before the page sees it.
    let hijack = AddEventListenerOptions::new();
    hijack.set_passive(false);
    hijack.set_capture(true);
    let s = slot.clone();
    listen(window, "wheel", Some(&hijack), move |event: WheelEvent| {
        let wheel = InputEvent::Wheel {
            delta_y: event.delta_y(),
            over_control: false,
        };
        if dispatch(&s, wheel) {
            swallow(&event);
        }
    })?;

    Ok(())
}
