use crate::controller::{TransformController, TransformTarget, ZoomDirection, ZoomReadout};

/// Browser input, reduced to what the controller reacts to. Coordinates are
/// page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed on the pan area.
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// `over_control` is true when the wheel event targets the pan area
    /// itself rather than arriving at the window.
    Wheel { delta_y: f64, over_control: bool },
    SliderInput(f64),
    ResetClick,
    DoubleClick,
}

impl<T: TransformTarget, R: ZoomReadout> TransformController<T, R> {
    /// Routes one input event. Returns true when the event was consumed and
    /// the page should not see it (default action and propagation stopped).
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.begin_drag(x, y);
                true
            }
            InputEvent::PointerMove { x, y } => {
                if !self.is_dragging() {
                    return false;
                }
                self.continue_drag(x, y);
                false
            }
            InputEvent::PointerUp => {
                if !self.is_dragging() {
                    return false;
                }
                self.end_drag();
                false
            }
            InputEvent::Wheel {
                delta_y,
                over_control,
            } => {
                let dragging = self.is_dragging();
                // While dragging the wheel is hijacked everywhere so the page
                // does not scroll under the pointer.
                if !dragging && !over_control {
                    return false;
                }
                if let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) {
                    log::debug!("wheel zoom {:?} (dragging: {})", direction, dragging);
                    self.zoom_by(direction, dragging);
                }
                true
            }
            InputEvent::SliderInput(value) => {
                self.set_scale(value);
                false
            }
            InputEvent::ResetClick => {
                self.reset();
                false
            }
            InputEvent::DoubleClick => {
                self.reset();
                true
            }
        }
    }

    fn is_dragging(&self) -> bool {
        self.input_state() == crate::state::UserInputState::Dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::tests::bound_controller;
    use crate::state::UserInputState;

    #[test]
    fn test_drag_sequence() {
        let mut controller = bound_controller();
        assert!(controller.handle(&InputEvent::PointerDown { x: 100.0, y: 100.0 }));
        assert_eq!(controller.input_state(), UserInputState::Dragging);
        controller.handle(&InputEvent::PointerMove { x: 150.0, y: 80.0 });
        controller.handle(&InputEvent::PointerUp);
        assert_eq!(controller.input_state(), UserInputState::Idle);
        assert_eq!(controller.translate(), [50.0, -20.0]);

        controller.handle(&InputEvent::PointerMove { x: 500.0, y: 500.0 });
        assert_eq!(controller.translate(), [50.0, -20.0]);
    }

    #[test]
    fn test_idle_wheel_outside_control_passes_through() {
        let mut controller = bound_controller();
        let consumed = controller.handle(&InputEvent::Wheel {
            delta_y: -120.0,
            over_control: false,
        });
        assert!(!consumed);
        assert_eq!(controller.scale(), 1.0);
    }

    #[test]
    fn test_idle_wheel_over_control_zooms_without_indicator() {
        let mut controller = bound_controller();
        assert!(controller.handle(&InputEvent::Wheel {
            delta_y: -120.0,
            over_control: true,
        }));
        assert!((controller.scale() - 1.1).abs() < 1e-9);
        assert!(!controller.indicator_visible());
        assert!(controller.readout().unwrap().scheduled.is_empty());
    }

    #[test]
    fn test_wheel_while_dragging_is_hijacked() {
        let mut controller = bound_controller();
        controller.handle(&InputEvent::PointerDown { x: 0.0, y: 0.0 });
        assert!(controller.handle(&InputEvent::Wheel {
            delta_y: 53.0,
            over_control: false,
        }));
        assert!((controller.scale() - 0.9).abs() < 1e-9);
        assert!(controller.indicator_visible());
        assert_eq!(
            controller.readout().unwrap().indicator_text.as_deref(),
            Some("0.90x")
        );

        controller.handle(&InputEvent::PointerUp);
        assert!(!controller.indicator_visible());
    }

    #[test]
    fn test_horizontal_wheel_does_not_zoom() {
        let mut controller = bound_controller();
        assert!(controller.handle(&InputEvent::Wheel {
            delta_y: 0.0,
            over_control: true,
        }));
        assert_eq!(controller.scale(), 1.0);
    }

    #[test]
    fn test_slider_and_resets() {
        let mut controller = bound_controller();
        controller.handle(&InputEvent::SliderInput(2.25));
        assert_eq!(controller.scale(), 2.25);
        assert_eq!(controller.readout().unwrap().scale_text, "2.25x");

        controller.handle(&InputEvent::PointerDown { x: 0.0, y: 0.0 });
        controller.handle(&InputEvent::PointerMove { x: 45.0, y: 0.0 });
        controller.handle(&InputEvent::PointerUp);
        assert_eq!(controller.translate(), [20.0, 0.0]);

        assert!(controller.handle(&InputEvent::DoubleClick));
        assert_eq!(controller.scale(), 1.0);
        assert_eq!(controller.translate(), [0.0, 0.0]);

        controller.handle(&InputEvent::SliderInput(0.5));
        controller.handle(&InputEvent::ResetClick);
        assert_eq!(controller.scale(), 1.0);
    }
}
