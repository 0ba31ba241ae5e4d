//! Error types for the zoom/pan overlay.
//!
//! None of these are fatal. The overlay logs them and waits for the host page
//! to change before trying again.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoomPanError {
    /// No video-bearing element is present in the document yet.
    #[error("no video element found to zoom")]
    TargetNotFound,
    /// The host control bar region the controls attach to is absent.
    #[error("player control region `{selector}` not found")]
    MountPointNotFound { selector: String },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A browser API call failed.
    #[error("dom error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, ZoomPanError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ZoomPanError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ZoomPanError::MountPointNotFound {
            selector: ".bpx-player-control-bottom-right".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "player control region `.bpx-player-control-bottom-right` not found"
        );
        assert_eq!(
            ZoomPanError::TargetNotFound.to_string(),
            "no video element found to zoom"
        );
    }
}
