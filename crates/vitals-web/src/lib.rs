pub mod runner;
pub mod dom;
pub mod canvas;
pub mod overlay;
pub mod orientation;

pub use runner::{VitalsRunner, preview_json};
pub use dom::{DomSurface, DomIds, HEART_PATH};
pub use canvas::{CanvasSurface, CanvasStyle};
pub use overlay::Overlay;
pub use orientation::{sync_rotate_blocker, allow_landscape, blocker_display};

// Used by `export_vitals!` expansions in page crates.
pub use js_sys;
pub use vitals_engine;

/// Generate all `#[wasm_bindgen]` exports for a vitals HUD page.
///
/// Generates:
/// - `thread_local!` storage for the VitalsRunner
/// - `with_runner()` helper function
/// - wasm-bindgen exports for transitions, score/level writes, reads,
///   the event buffer and the landscape blocker
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// vitals_web::export_vitals!("my-page");
/// // or draw onto a canvas instead of the DOM hearts container:
/// vitals_web::export_vitals!("my-page", canvas = "hud-canvas");
/// ```
///
/// The page crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`.
#[macro_export]
macro_rules! export_vitals {
    (@surface $page_name:literal, $surface:ty, $make_surface:expr) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::VitalsRunner<$surface>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::VitalsRunner<$surface>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Vitals not initialized. Call vitals_init() first.");
                f(runner)
            })
        }

        /// Bind the HUD on first call, then reset vitals to their starting values.
        #[wasm_bindgen]
        pub fn vitals_init() {
            let first = RUNNER.with(|cell| cell.borrow().is_none());
            if first {
                console_error_panic_hook::set_once();
                let _ = console_log::init_with_level(log::Level::Info);

                let ids = $crate::DomIds::default();
                let make_surface = $make_surface;
                let mut runner = $crate::VitalsRunner::new(make_surface(&ids));
                runner.subscribe($crate::Overlay::bind(&ids.overlay).into_observer());

                RUNNER.with(|cell| {
                    *cell.borrow_mut() = Some(runner);
                });
                log::info!("{}: initialized", $page_name);
            }
            with_runner(|r| r.init());
        }

        #[wasm_bindgen]
        pub fn vitals_configure(json: &str) -> Result<(), wasm_bindgen::JsValue> {
            with_runner(|r| r.configure(json))
                .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen]
        pub fn vitals_hit() {
            with_runner(|r| r.hit());
        }

        #[wasm_bindgen]
        pub fn vitals_heal() {
            with_runner(|r| r.heal());
        }

        #[wasm_bindgen]
        pub fn vitals_start() {
            with_runner(|r| r.start());
        }

        #[wasm_bindgen]
        pub fn vitals_set_score(score: f64) {
            with_runner(|r| r.set_score(score.max(0.0) as u64));
        }

        #[wasm_bindgen]
        pub fn vitals_add_score(points: f64) {
            with_runner(|r| r.add_score(points.max(0.0) as u64));
        }

        #[wasm_bindgen]
        pub fn vitals_set_level(level: u32) {
            with_runner(|r| r.set_level(level));
        }

        // ---- Reads ----

        #[wasm_bindgen]
        pub fn get_score() -> f64 {
            with_runner(|r| r.score() as f64)
        }

        #[wasm_bindgen]
        pub fn get_level() -> u32 {
            with_runner(|r| r.level())
        }

        #[wasm_bindgen]
        pub fn get_lives() -> u32 {
            with_runner(|r| r.lives())
        }

        #[wasm_bindgen]
        pub fn get_partial_damage() -> u32 {
            with_runner(|r| r.partial_damage())
        }

        #[wasm_bindgen]
        pub fn is_running() -> bool {
            with_runner(|r| r.running())
        }

        #[wasm_bindgen]
        pub fn get_hud_json() -> String {
            with_runner(|r| r.hud_json())
        }

        #[wasm_bindgen]
        pub fn get_heart_classes() -> $crate::js_sys::Array {
            with_runner(|r| {
                r.heart_classes()
                    .into_iter()
                    .map(wasm_bindgen::JsValue::from_str)
                    .collect::<$crate::js_sys::Array>()
            })
        }

        /// Heart row for arbitrary inputs, as a JSON array of class names. Does not touch the session.
        #[wasm_bindgen]
        pub fn render_lives_json(lives: i32, partial_damage: i32, steps: u32) -> Result<String, wasm_bindgen::JsValue> {
            $crate::preview_json(lives as i64, partial_damage as i64, steps)
                .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
        }

        // ---- Event buffer accessors ----

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        // ---- Landscape blocker ----

        #[wasm_bindgen]
        pub fn sync_rotate_blocker() {
            $crate::sync_rotate_blocker(&$crate::DomIds::default().rotate_blocker);
        }

        #[wasm_bindgen]
        pub fn allow_landscape() {
            $crate::allow_landscape(&$crate::DomIds::default().rotate_blocker);
        }
    };

    ($page_name:literal) => {
        $crate::export_vitals!(
            @surface $page_name,
            $crate::DomSurface,
            |ids: &$crate::DomIds| $crate::DomSurface::bind(ids)
        );
    };

    // Variant drawing the HUD on a canvas element
    ($page_name:literal, canvas = $canvas_id:literal) => {
        $crate::export_vitals!(
            @surface $page_name,
            $crate::CanvasSurface,
            |_ids: &$crate::DomIds| {
                $crate::CanvasSurface::bind($canvas_id, $crate::vitals_engine::HeartRowLayout::default())
            }
        );
    };
}
