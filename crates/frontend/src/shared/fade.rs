use super::dom;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Show `element` by animating its opacity from 0 to 1 over `duration_ms`.
pub fn fade_in(element: &Element, duration_ms: u32) {
    let Some(html) = element.dyn_ref::<HtmlElement>().cloned() else {
        dom::show(element);
        return;
    };

    let style = html.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transition", &format!("opacity {}ms ease-in-out", duration_ms));
    dom::show(element);

    // The browser needs one frame at opacity 0 before the transition can run.
    Timeout::new(0, move || {
        let style = html.style();
        let _ = style.set_property("opacity", "1");

        Timeout::new(duration_ms, move || {
            let _ = style.remove_property("transition");
            let _ = style.remove_property("opacity");
        })
        .forget();
    })
    .forget();
}
