//! Ourstory core crate.
//!
//! Drives the scripted scroll journey of the single-page presentation: a
//! continuous auto-scroll whose rate follows what is on screen (fast over
//! photos, slow over captions), pausing on any user scroll gesture and
//! resuming from a floating continue button. Decorative page effects
//! (particles, music, countdown, intro doors) stay on the JS side; they hook
//! into the journey through the `ourstory:boost` event it dispatches.

use wasm_bindgen::prelude::*;

mod scroll;

pub use scroll::BOOST_EVENT;
pub use scroll::session::{
    BOTTOM_TOLERANCE_PX, Band, FrameHandle, RegionBounds, SPEED_FAST, SPEED_NORMAL, SPEED_SLOW,
    ScrollHost, ScrollSession, compute_speed,
};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Wire the journey to the page: continue button, start button, and the
/// pause-on-input listeners. Call once after the document is ready.
#[wasm_bindgen]
pub fn init_journey() -> Result<(), JsValue> {
    scroll::install()
}

/// Start (or restart) the auto-scroll journey without going through the
/// start button.
#[wasm_bindgen]
pub fn start_auto_scroll() {
    scroll::begin()
}
