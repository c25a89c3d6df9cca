// Browser-side continue-button test (run via `wasm-pack test --headless`).
// Compiled to nothing on native targets.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

// A continue button shipped by the page itself must still drive resume:
// the wiring attaches its listener to a found element, not only to one it
// created.
#[wasm_bindgen_test]
fn page_provided_continue_button_resumes() {
    let win = web_sys::window().unwrap();
    let doc = win.document().unwrap();

    let btn: HtmlElement = doc.create_element("button").unwrap().dyn_into().unwrap();
    btn.set_id("continueBtn");
    doc.body().unwrap().append_child(&btn).unwrap();

    ourstory::init_journey().unwrap();
    ourstory::start_auto_scroll();

    // Any scroll gesture pauses the journey and shows the control.
    let wheel = web_sys::Event::new("wheel").unwrap();
    win.dispatch_event(&wheel).unwrap();
    assert_eq!(btn.style().get_property_value("display").unwrap(), "block");

    // Clicking the page's own button resumes and hides it again.
    btn.click();
    assert_eq!(btn.style().get_property_value("display").unwrap(), "none");
}
