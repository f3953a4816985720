//! Landscape blocker. Portrait-first page; landscape shows a "rotate your
//! device" overlay unless the player opted out for this session.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::{document, find_element};

/// sessionStorage key set by the "try anyway" button.
pub const ALLOW_LANDSCAPE_KEY: &str = "allowLandscape";

const LANDSCAPE_QUERY: &str = "(orientation: landscape)";

/// CSS `display` value for the blocker.
pub fn blocker_display(is_landscape: bool, allowed: bool) -> &'static str {
    if !allowed && is_landscape {
        "flex"
    } else {
        "none"
    }
}

fn is_landscape() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(LANDSCAPE_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

fn landscape_allowed() -> bool {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .and_then(|s| s.get_item(ALLOW_LANDSCAPE_KEY).ok().flatten())
        .is_some_and(|v| v == "1")
}

/// Show or hide the blocker for the current orientation.
pub fn sync_rotate_blocker(blocker_id: &str) {
    let Some(blocker) = document()
        .and_then(|d| find_element(&d, blocker_id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let display = blocker_display(is_landscape(), landscape_allowed());
    let _ = blocker.style().set_property("display", display);
}

/// Remember the opt-out for this tab and re-sync.
pub fn allow_landscape(blocker_id: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
        let _ = storage.set_item(ALLOW_LANDSCAPE_KEY, "1");
    }
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.set_attribute("data-allow-landscape", "");
    }
    log::info!("vitals: landscape allowed for this session");
    sync_rotate_blocker(blocker_id);
}
