//! Thin helpers over web-sys for measuring and mutating elements.

use contracts::widgets::pin::Viewport;
use contracts::WidgetError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Turn a JS exception into a widget error.
pub fn js_error(err: JsValue) -> WidgetError {
    WidgetError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

pub fn window() -> Result<Window, WidgetError> {
    web_sys::window().ok_or_else(|| WidgetError::Dom("no global window".into()))
}

pub fn document() -> Result<Document, WidgetError> {
    window()?
        .document()
        .ok_or_else(|| WidgetError::Dom("window has no document".into()))
}

pub fn find_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, WidgetError> {
    let nodes = root.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Document-wide variant of [`query_all`].
pub fn query_document(selector: &str) -> Result<Vec<Element>, WidgetError> {
    let nodes = document()?.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn viewport() -> Viewport {
    let Ok(window) = window() else {
        return Viewport::default();
    };
    let size = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport {
        width: size(window.inner_width()),
        height: size(window.inner_height()),
    }
}

/// Vertical scroll offset of the window.
pub fn scroll_top() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Border-box height of the element.
pub fn outer_height(element: &Element) -> f64 {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => f64::from(html.offset_height()),
        None => element.get_bounding_client_rect().height(),
    }
}

/// Distance from the top of the document to the element's top edge.
pub fn offset_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_top()
}

pub fn add_class(element: &Element, class: &str) {
    if !class.is_empty() {
        let _ = element.class_list().add_1(class);
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if !class.is_empty() {
        let _ = element.class_list().remove_1(class);
    }
}

pub fn set_styles(element: &Element, declarations: &[(&str, String)]) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (property, value) in declarations {
            let _ = style.set_property(property, value);
        }
    }
}

pub fn hide(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", "none");
    }
}

/// Undo [`hide`], falling back to whatever display the stylesheet gives.
pub fn show(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property("display");
    }
}
