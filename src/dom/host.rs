use std::rc::Weak;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::ZoomConfig;
use crate::discovery::find_zoom_target;
use crate::dom::binding::{ControlElements, ControllerSlot, DomReadout, DomTarget};
use crate::error::{Result, ZoomPanError};
use crate::mount::OverlayHost;

pub const CONTAINER_ID: &str = "zoom-pan-container";

/// The host page as seen from one player container.
pub struct DomHost<'a> {
    document: &'a Document,
    player: &'a Element,
    config: &'a ZoomConfig,
    slot: Weak<ControllerSlot>,
}

impl<'a> DomHost<'a> {
    pub fn new(
        document: &'a Document,
        player: &'a Element,
        config: &'a ZoomConfig,
        slot: Weak<ControllerSlot>,
    ) -> Self {
        Self {
            document,
            player,
            config,
            slot,
        }
    }

    fn controls_markup(&self) -> String {
        format!(
            r#"<div id="zoom-pan-area" title="Drag to pan | Wheel to zoom | Double-click to reset"></div>
<div id="zoom-pan-indicator"></div>
<div class="zoom-pan-panel">
  <span id="zoom-pan-value">1.00x</span>
  <input type="range" id="zoom-pan-slider" min="{min}" max="{max}" step="{step}" value="1.0" title="Zoom: 1.00x">
  <button id="zoom-pan-reset" title="Reset zoom and position">&#x21BB;</button>
</div>"#,
            min = self.config.min_scale,
            max = self.config.max_scale,
            step = self.config.slider_step,
        )
    }
}

fn child<E: JsCast>(container: &Element, id: &str) -> Result<E> {
    container
        .query_selector(&format!("#{}", id))?
        .ok_or_else(|| ZoomPanError::Dom(format!("control element #{} missing", id)))?
        .dyn_into::<E>()
        .map_err(|_| ZoomPanError::Dom(format!("control element #{} has unexpected type", id)))
}

impl OverlayHost for DomHost<'_> {
    type Target = DomTarget;
    type Readout = DomReadout;

    fn controls_mounted(&self) -> bool {
        self.document.get_element_by_id(CONTAINER_ID).is_some()
    }

    fn find_target(&self) -> Option<DomTarget> {
        let video = self.document.query_selector("video").ok().flatten();
        find_zoom_target(
            video,
            &self.config.wrapper_class,
            self.config.ancestor_search_depth,
        )
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(DomTarget::new)
    }

    fn insert_controls(&mut self) -> Result<DomReadout> {
        let selector = &self.config.control_region_selector;
        let region = self
            .player
            .query_selector(selector)?
            .ok_or_else(|| ZoomPanError::MountPointNotFound {
                selector: selector.clone(),
            })?;

        let container = self.document.create_element("div")?;
        container.set_id(CONTAINER_ID);
        container.class_list().add_1("bpx-player-ctrl-btn")?;
        container.set_inner_html(&self.controls_markup());
        region.insert_before(&container, region.first_child().as_ref())?;

        let elements = ControlElements {
            area: child(&container, "zoom-pan-area")?,
            indicator: child(&container, "zoom-pan-indicator")?,
            value: child(&container, "zoom-pan-value")?,
            slider: child(&container, "zoom-pan-slider")?,
            reset: child(&container, "zoom-pan-reset")?,
        };
        Ok(DomReadout::new(elements, self.slot.clone()))
    }
}
