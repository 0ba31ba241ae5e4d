/// Installs the log backend for the current target. Safe to call more than
/// once.
pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            if console_log::init_with_level(log::Level::Info).is_err() {
                log::debug!("logger already installed");
            }
        } else {
            if env_logger::try_init().is_err() {
                log::debug!("logger already installed");
            }
        }
    }
}

pub fn run() {
    init_logging();

    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            if let Err(e) = crate::dom::install() {
                log::error!("zoom overlay not installed: {}", e);
            }
        } else {
            log::warn!("the zoom overlay needs a browser document; nothing to attach to");
        }
    }
}
