mod app;
pub mod config;
pub mod controller;
pub mod discovery;
pub mod error;
pub mod event_handler;
pub mod indicator;
mod math;
pub mod mount;
pub mod state;
pub mod transform;

#[cfg(target_arch = "wasm32")]
pub mod dom;

// Re-export the main public interface
pub use app::{init_logging, run};
pub use config::ZoomConfig;
pub use controller::{TransformController, TransformTarget, ZoomDirection, ZoomReadout};
pub use error::ZoomPanError;
pub use event_handler::InputEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn start() {
    run();
}
