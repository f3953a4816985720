//! Heart HUD for the Jazz the Cat in the Hat game page.
//!
//! The page calls `vitals_init()` on `DOMContentLoaded`, `vitals_start()` from the
//! play button, and `sync_rotate_blocker()` on resize/orientation changes.

use wasm_bindgen::prelude::*;

vitals_web::export_vitals!("jazz-cat");
