//! The transform controller: owns the zoom/pan state of one video element and
//! turns input operations into transform writes.
//!
//! The controller knows nothing about the DOM. It talks to the page through two
//! seams:
//! - [`TransformTarget`]: the element that gets the CSS transform.
//! - [`ZoomReadout`]: the slider, value text, and transient indicator.
//!
//! Either may be absent; operations then only update the stored state.

use std::time::Duration;

use crate::config::ZoomConfig;
use crate::indicator::{HideTicket, TransientIndicator};
use crate::state::{DragTracker, UserInputState};
use crate::transform::{TRANSFORM_ORIGIN, TransformState};

pub trait TransformTarget {
    fn write_transform(&mut self, transform: &str, origin: &str);
    /// `None` suspends the transition so the element tracks the pointer.
    fn set_transition(&mut self, transition: Option<&str>);
}

pub trait ZoomReadout {
    /// Syncs the numeric readout and slider position.
    fn show_scale(&mut self, scale: f64);
    fn set_grabbing(&mut self, grabbing: bool);
    fn show_indicator(&mut self, scale: f64);
    fn hide_indicator(&mut self);
    /// Arrange for `ticket` to be passed to
    /// [`TransformController::expire_indicator`] after `after`. Any hide
    /// scheduled earlier may be dropped.
    fn schedule_indicator_hide(&mut self, ticket: HideTicket, after: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scrolling up zooms in. A zero vertical delta (horizontal scroll) has no
    /// direction.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Text used by every scale readout, e.g. `1.25x`.
pub fn format_scale(scale: f64) -> String {
    format!("{:.2}x", scale)
}

pub struct TransformController<T, R> {
    config: ZoomConfig,
    transform: TransformState,
    drag: DragTracker,
    indicator: TransientIndicator,
    target: Option<T>,
    readout: Option<R>,
}

impl<T: TransformTarget, R: ZoomReadout> TransformController<T, R> {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            transform: TransformState::new(),
            drag: DragTracker::new(),
            indicator: TransientIndicator::new(),
            target: None,
            readout: None,
        }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn translate(&self) -> [f64; 2] {
        self.transform.translate
    }

    pub fn input_state(&self) -> UserInputState {
        self.drag.state
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator.is_visible()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn readout(&self) -> Option<&R> {
        self.readout.as_ref()
    }

    /// Binds (or rebinds) the element the transform is written to.
    pub fn bind_target(&mut self, mut target: T) {
        let transition = if self.drag.is_dragging() {
            None
        } else {
            Some(self.config.transition.as_str())
        };
        target.set_transition(transition);
        self.target = Some(target);
        self.apply_transform();
    }

    pub fn bind_readout(&mut self, mut readout: R) {
        readout.show_scale(self.transform.scale);
        self.readout = Some(readout);
    }

    pub fn set_scale(&mut self, scale: f64) {
        let scale = self
            .transform
            .set_scale(scale, self.config.min_scale, self.config.max_scale);
        if let Some(readout) = self.readout.as_mut() {
            readout.show_scale(scale);
        }
        self.apply_transform();
    }

    pub fn apply_transform(&mut self) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        target.write_transform(&self.transform.to_css(), TRANSFORM_ORIGIN);
    }

    pub fn reset(&mut self) {
        log::debug!("resetting transform");
        self.transform.translate = [0.0, 0.0];
        self.set_scale(1.0);
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag.begin([x, y]);
        if let Some(readout) = self.readout.as_mut() {
            readout.set_grabbing(true);
        }
        if let Some(target) = self.target.as_mut() {
            target.set_transition(None);
        }
    }

    pub fn continue_drag(&mut self, x: f64, y: f64) {
        let Some([dx, dy]) = self.drag.step([x, y]) else {
            return;
        };
        let dy = if dy < 0.0 {
            dy * self.config.drag_sensitivity_y_up
        } else {
            dy * self.config.drag_sensitivity_y_down
        };
        let dx = dx * self.config.drag_sensitivity_x;
        self.transform.pan_by_screen([dx, dy]);
        self.apply_transform();
    }

    pub fn end_drag(&mut self) {
        if !self.drag.end() {
            return;
        }
        if let Some(readout) = self.readout.as_mut() {
            readout.set_grabbing(false);
        }
        if let Some(target) = self.target.as_mut() {
            target.set_transition(Some(self.config.transition.as_str()));
        }
        self.hide_indicator();
    }

    pub fn zoom_by(&mut self, direction: ZoomDirection, show_indicator: bool) {
        let step = match direction {
            ZoomDirection::In => self.config.wheel_step,
            ZoomDirection::Out => -self.config.wheel_step,
        };
        self.set_scale(self.transform.scale + step);
        if show_indicator {
            self.show_indicator();
        }
    }

    /// Called when a scheduled hide fires. Stale tickets are ignored.
    pub fn expire_indicator(&mut self, ticket: HideTicket) {
        if self.indicator.expire(ticket) {
            if let Some(readout) = self.readout.as_mut() {
                readout.hide_indicator();
            }
        }
    }

    fn show_indicator(&mut self) {
        let ticket = self.indicator.show();
        let timeout = Duration::from_millis(u64::from(self.config.indicator_timeout_ms));
        if let Some(readout) = self.readout.as_mut() {
            readout.show_indicator(self.transform.scale);
            readout.schedule_indicator_hide(ticket, timeout);
        }
    }

    fn hide_indicator(&mut self) {
        self.indicator.hide();
        if let Some(readout) = self.readout.as_mut() {
            readout.hide_indicator();
        }
    }
}
