use web_sys::Document;

use crate::error::Result;

const STYLE_ID: &str = "zoom-pan-style";

const STYLESHEET: &str = r#"
#zoom-pan-container {
    position: relative; padding: 0 !important; margin: 0 4px;
    height: 32px; width: 32px; display: flex; align-items: center; justify-content: center;
}
#zoom-pan-area {
    width: 100%; height: 100%; cursor: grab; border-radius: 4px;
    background-color: rgba(255, 255, 255, 0.15);
    transition: background-color .2s;
    background-image: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23FFFFFF' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'%3E%3Cpath d='M15 3h6v6M9 21H3v-6M21 3l-7 7M3 21l7-7'/%3E%3C/svg%3E");
    background-repeat: no-repeat; background-position: center; background-size: 20px 20px;
}
#zoom-pan-area:hover { background-color: rgba(255, 255, 255, 0.25); }
#zoom-pan-area:active { cursor: grabbing; background-color: rgba(255, 255, 255, 0.35); }
.zoom-pan-panel {
    position: absolute; bottom: calc(100% + 5px); left: 50%; transform: translateX(-50%);
    display: flex; align-items: center; gap: 8px; padding: 6px 10px; border-radius: 2px;
    background-color: hsla(0, 0%, 8%, .9); backdrop-filter: blur(5px);
    opacity: 0; visibility: hidden;
    transition: opacity 0.2s ease-out, visibility 0.2s ease-out, transform 0.2s ease-out;
    z-index: 100;
}
#zoom-pan-container:hover .zoom-pan-panel {
    opacity: 1; visibility: visible; transform: translateX(-50%) translateY(-3px);
}
#zoom-pan-value {
    color: #eee; font-size: 12px; width: 38px; text-align: center; user-select: none;
    font-family: Consolas, Monaco, monospace;
}
#zoom-pan-slider {
    width: 70px; -webkit-appearance: none; appearance: none; height: 4px;
    background: #555; border-radius: 2px; outline: none; cursor: pointer;
}
#zoom-pan-slider::-webkit-slider-thumb {
    -webkit-appearance: none; appearance: none; width: 12px; height: 12px;
    background: #fb7299; border-radius: 50%; cursor: pointer;
}
#zoom-pan-slider::-moz-range-thumb {
    width: 12px; height: 12px; background: #fb7299; border-radius: 50%; cursor: pointer;
}
#zoom-pan-reset {
    background: none; border: none; color: white; font-size: 16px; padding: 0; margin: 0;
    cursor: pointer; opacity: 0.8; user-select: none; transition: opacity .2s, color .2s;
}
#zoom-pan-reset:hover { opacity: 1; color: #fb7299; }
#zoom-pan-indicator {
    position: absolute; left: calc(-100% - 15px); top: 50%; transform: translateY(-50%);
    padding: 4px 8px; background-color: hsla(0, 0%, 8%, .9); backdrop-filter: blur(5px);
    color: #eee; font-size: 12px; font-family: Consolas, Monaco, monospace; border-radius: 2px;
    user-select: none; pointer-events: none;
    opacity: 0; visibility: hidden; transition: opacity 0.2s ease-out, visibility 0.2s ease-out;
}
#zoom-pan-indicator.visible { opacity: 1; visibility: visible; }
"#;

/// Adds the overlay stylesheet to `<head>`. Does nothing if it is already there.
pub fn inject(document: &Document) -> Result<()> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        log::warn!("document has no <head>, overlay styles not injected");
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}
