//! Browser wiring for the auto-scroll journey.
//!
//! Owns the singleton [`ScrollSession`] in a `thread_local!`, implements the
//! session's [`ScrollHost`] port against the real DOM, and installs the event
//! listeners that drive it: the start button, the floating continue button,
//! and the pause-on-user-input observers (wheel / touch / pointer / nav keys).
//! The engagement boost is surfaced as a `ourstory:boost` DOM event on
//! `window` so decorative collaborators can react without this crate linking
//! against any presentation code.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

pub mod session;

use session::{Band, FrameHandle, RegionBounds, ScrollHost, ScrollSession};

// Selectors / ids of the provided document structure.
const REGION_SELECTOR: &str = ".memory";
const FOCUS_SELECTOR: &str = ".photo";
const DETAIL_SELECTOR: &str = ".caption";
const START_BUTTON_ID: &str = "startBtn";
const CONTINUE_BUTTON_ID: &str = "continueBtn";

/// Event dispatched on `window` whenever a journey starts.
pub const BOOST_EVENT: &str = "ourstory:boost";

/// Navigation keys that pause the journey, mirroring native scroll keys.
const PAUSE_KEYS: [&str; 5] = ["ArrowDown", "ArrowUp", "PageDown", "PageUp", " "];

thread_local! {
    static SESSION: RefCell<ScrollSession> = RefCell::new(ScrollSession::new());
    // The single long-lived rAF callback; scheduling hands the browser this
    // closure and the session tracks the returned handle.
    static FRAME_CB: RefCell<Option<Closure<dyn FnMut(f64)>>> = RefCell::new(None);
    // Set once `install` has wired the page; repeat calls are no-ops.
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

// --- DOM Host ----------------------------------------------------------------

/// [`ScrollHost`] over the live page. Stateless: every call re-acquires
/// window/document, degrading to no-ops / zero geometry when unavailable.
struct DomHost;

impl ScrollHost for DomHost {
    fn viewport_height(&self) -> f64 {
        window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn content_height(&self) -> f64 {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|b| b.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    fn scroll_offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn scroll_by(&mut self, delta_px: f64) {
        if let Some(w) = window() {
            w.scroll_by_with_x_and_y(0.0, delta_px);
        }
    }

    fn regions(&self) -> Vec<RegionBounds> {
        collect_regions().unwrap_or_default()
    }

    fn schedule_frame(&mut self) -> FrameHandle {
        FRAME_CB.with(|cb| {
            let cb = cb.borrow();
            match (window(), cb.as_ref()) {
                (Some(win), Some(closure)) => win
                    .request_animation_frame(closure.as_ref().unchecked_ref())
                    .unwrap_or(0),
                _ => 0,
            }
        })
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = window() {
            let _ = w.cancel_animation_frame(handle);
        }
    }

    fn show_resume_control(&mut self) {
        set_continue_visible(true);
    }

    fn hide_resume_control(&mut self) {
        set_continue_visible(false);
    }

    fn engagement_boost(&mut self) {
        if let (Some(win), Ok(ev)) = (window(), web_sys::Event::new(BOOST_EVENT)) {
            let _ = win.dispatch_event(&ev);
        }
    }
}

/// Measure every region's focus and detail sub-areas against the viewport.
/// Regions missing either sub-area are skipped.
fn collect_regions() -> Option<Vec<RegionBounds>> {
    let doc = window()?.document()?;
    let list = doc.query_selector_all(REGION_SELECTOR).ok()?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Some(el) = node.dyn_ref::<Element>() else {
            continue;
        };
        let focus = el.query_selector(FOCUS_SELECTOR).ok().flatten();
        let detail = el.query_selector(DETAIL_SELECTOR).ok().flatten();
        if let (Some(focus), Some(detail)) = (focus, detail) {
            out.push(RegionBounds {
                focus: band_of(&focus),
                detail: band_of(&detail),
            });
        }
    }
    Some(out)
}

fn band_of(el: &Element) -> Band {
    let rect = el.get_bounding_client_rect();
    Band {
        top: rect.top(),
        bottom: rect.bottom(),
    }
}

/// Toggle only the `display` property so other inline styles survive.
fn set_continue_visible(visible: bool) {
    let el = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONTINUE_BUTTON_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = el {
        let display = if visible { "block" } else { "none" };
        el.style().set_property("display", display).ok();
    }
}

// --- Wiring ------------------------------------------------------------------

/// One-time setup: frame callback, continue button, and all input listeners.
/// Safe to call again; once the page is wired, repeat calls are no-ops.
pub fn install() -> Result<(), JsValue> {
    if INSTALLED.with(|i| i.get()) {
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    FRAME_CB.with(|cb| {
        if cb.borrow().is_some() {
            return;
        }
        *cb.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            SESSION.with(|s| s.borrow_mut().on_frame(&mut DomHost, ts));
        }) as Box<dyn FnMut(f64)>));
    });

    ensure_continue_button(&doc)?;

    // Start button kicks off the journey.
    if let Some(btn) = doc.get_element_by_id(START_BUTTON_ID) {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            SESSION.with(|s| s.borrow_mut().start(&mut DomHost));
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Any direct scroll gesture pauses the journey (no-op while idle).
    for ev in ["wheel", "touchstart", "pointerdown"] {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            SESSION.with(|s| s.borrow_mut().pause_for_user(&mut DomHost));
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback(ev, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard navigation pauses too.
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        let key = evt.key();
        if PAUSE_KEYS.contains(&key.as_str()) {
            SESSION.with(|s| s.borrow_mut().pause_for_user(&mut DomHost));
        }
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();

    INSTALLED.with(|i| i.set(true));
    Ok(())
}

/// Programmatic start, equivalent to pressing the start button.
pub fn begin() {
    SESSION.with(|s| s.borrow_mut().start(&mut DomHost));
}

/// Reuse the page's continue button or create the floating one, then wire it
/// to resume. Runs once per page (`install` is guarded), so the resume
/// listener is attached exactly once either way. Hidden until a pause makes
/// it relevant.
fn ensure_continue_button(doc: &Document) -> Result<(), JsValue> {
    let btn = if let Some(el) = doc.get_element_by_id(CONTINUE_BUTTON_ID) {
        el
    } else {
        let btn = doc.create_element("button")?;
        btn.set_id(CONTINUE_BUTTON_ID);
        btn.set_attribute("class", "continue-btn")?;
        btn.set_text_content(Some("Continue"));
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&btn)?;
        btn
    };

    let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        evt.stop_propagation();
        SESSION.with(|s| s.borrow_mut().resume(&mut DomHost));
    }) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    set_continue_visible(false);
    Ok(())
}
