use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ZoomPanError;

/// Tuning for the overlay. Every field has a default, so a config document
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Granularity of the slider control.
    pub slider_step: f64,
    /// Scale change per wheel notch.
    pub wheel_step: f64,
    pub drag_sensitivity_x: f64,
    /// Applied to pointer movement towards the top of the screen.
    pub drag_sensitivity_y_up: f64,
    /// Applied to pointer movement towards the bottom of the screen.
    pub drag_sensitivity_y_down: f64,
    pub indicator_timeout_ms: u32,
    /// Delay between spotting the player container and binding to it.
    pub init_delay_ms: u32,
    /// How many ancestors of the video are searched for the wrapper.
    pub ancestor_search_depth: usize,
    pub wrapper_class: String,
    pub player_selector: String,
    pub control_region_selector: String,
    pub transition: String,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 3.0,
            slider_step: 0.05,
            wheel_step: 0.1,
            drag_sensitivity_x: 1.0,
            drag_sensitivity_y_up: 1.0,
            drag_sensitivity_y_down: 2.0,
            indicator_timeout_ms: 800,
            init_delay_ms: 500,
            ancestor_search_depth: 5,
            wrapper_class: "bpx-player-video-wrap".to_string(),
            player_selector: ".bpx-player-container".to_string(),
            control_region_selector: ".bpx-player-control-bottom-right".to_string(),
            transition: "transform 0.1s ease-out".to_string(),
        }
    }
}

impl ZoomConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("parsing zoom config")?;
        config.validate().context("validating zoom config")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ZoomPanError> {
        let numbers = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("slider_step", self.slider_step),
            ("wheel_step", self.wheel_step),
            ("drag_sensitivity_x", self.drag_sensitivity_x),
            ("drag_sensitivity_y_up", self.drag_sensitivity_y_up),
            ("drag_sensitivity_y_down", self.drag_sensitivity_y_down),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ZoomPanError::InvalidConfig(format!("{} must be finite", name)));
        }
        if self.min_scale <= 0.0 {
            return Err(ZoomPanError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(ZoomPanError::InvalidConfig(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        // Fresh state and reset both sit at scale 1.
        if self.min_scale > 1.0 || self.max_scale < 1.0 {
            return Err(ZoomPanError::InvalidConfig(format!(
                "scale range [{}, {}] must contain 1",
                self.min_scale, self.max_scale
            )));
        }
        if self.wheel_step <= 0.0 || self.slider_step <= 0.0 {
            return Err(ZoomPanError::InvalidConfig(
                "zoom steps must be positive".to_string(),
            ));
        }
        let sensitivities = [
            ("drag_sensitivity_x", self.drag_sensitivity_x),
            ("drag_sensitivity_y_up", self.drag_sensitivity_y_up),
            ("drag_sensitivity_y_down", self.drag_sensitivity_y_down),
        ];
        if let Some((name, value)) = sensitivities.iter().find(|(_, v)| *v < 0.0) {
            return Err(ZoomPanError::InvalidConfig(format!(
                "{} must not be negative, got {}",
                name, value
            )));
        }
        Ok(())
    }
}
