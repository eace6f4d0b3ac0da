//! Pin and Tabs widgets for the browser.
//!
//! Usable three ways: the JS exports below, the [`widgets`] controllers on
//! existing markup, or the Leptos [`components`].

pub mod app;
pub mod components;
pub mod shared;
pub mod widgets;

use contracts::shared::options::merge_options;
use contracts::widgets::pin::PinOptions;
use contracts::widgets::tabs::TabsOptions;
use contracts::WidgetError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dom;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use widgets::tabs::{ShowCallback, TabRef};

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Mount the demo page showing both widgets.
#[wasm_bindgen]
pub fn mount_demo() {
    leptos::mount::mount_to_body(app::App);
}

fn to_js(err: WidgetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Merge a JS options object over `defaults`.
fn options_from_js<T>(defaults: &T, options: JsValue) -> Result<T, JsValue>
where
    T: Serialize + DeserializeOwned,
{
    let overrides = if options.is_undefined() || options.is_null() {
        serde_json::Value::Null
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|err| to_js(WidgetError::InvalidOptions(err.to_string())))?
    };
    merge_options(defaults, &overrides).map_err(to_js)
}

/// Pin every element matching `selector`. Elements already pinned keep their
/// instance. Returns how many elements matched.
#[wasm_bindgen]
pub fn pin(selector: &str, options: JsValue) -> Result<u32, JsValue> {
    let options: PinOptions = options_from_js(&widgets::pin::defaults(), options)?;
    let elements = dom::query_document(selector).map_err(to_js)?;

    for element in &elements {
        widgets::pin::pin(element.clone(), options.clone()).map_err(to_js)?;
    }
    Ok(elements.len() as u32)
}

fn with_pins(selector: &str, apply: impl Fn(&widgets::PinWidget)) -> Result<u32, JsValue> {
    let mut count = 0;
    for element in dom::query_document(selector).map_err(to_js)? {
        if let Some(widget) = widgets::pin::instance(&element) {
            apply(&widget);
            count += 1;
        }
    }
    Ok(count)
}

#[wasm_bindgen]
pub fn pin_enable(selector: &str) -> Result<u32, JsValue> {
    with_pins(selector, |widget| {
        widget.enable().reposition();
    })
}

#[wasm_bindgen]
pub fn pin_disable(selector: &str) -> Result<u32, JsValue> {
    with_pins(selector, |widget| {
        widget.disable();
    })
}

/// Detach the pins on every element matching `selector`.
#[wasm_bindgen]
pub fn unpin(selector: &str) -> Result<u32, JsValue> {
    let elements = dom::query_document(selector).map_err(to_js)?;
    Ok(elements.iter().filter(|element| widgets::pin::unpin(element)).count() as u32)
}

/// Override the options every later `pin()` starts from.
#[wasm_bindgen]
pub fn set_pin_defaults(options: JsValue) -> Result<(), JsValue> {
    let options = options_from_js(&widgets::pin::defaults(), options)?;
    widgets::pin::set_defaults(options);
    Ok(())
}

/// Create (or fetch) the tabs rooted at the element with id `query`.
///
/// `on_show` is called as `on_show(index, tabElement)`.
#[wasm_bindgen]
pub fn tabs(query: &str, options: JsValue, on_show: Option<js_sys::Function>) -> Result<(), JsValue> {
    let options: TabsOptions = options_from_js(&TabsOptions::default(), options)?;
    let callback = on_show.map(|function| {
        Rc::new(move |index: usize, tab: &web_sys::Element| {
            if let Err(err) = function.call2(&JsValue::NULL, &JsValue::from(index as u32), tab) {
                log::warn!("tabs: onShow threw {:?}", err);
            }
        }) as ShowCallback
    });

    widgets::tabs::factory(query, options, callback).map_err(to_js)?;
    Ok(())
}

/// Show tab `index` of the tabs registered under `query`.
#[wasm_bindgen]
pub fn tabs_show(query: &str, index: u32) -> bool {
    widgets::tabs::instance(query)
        .and_then(|widget| widget.show(TabRef::Index(index as usize)))
        .is_some()
}

/// Show the tab whose anchor is `tab`.
#[wasm_bindgen]
pub fn tabs_show_tab(query: &str, tab: web_sys::Element) -> bool {
    widgets::tabs::instance(query)
        .and_then(|widget| widget.show(TabRef::Element(tab)))
        .is_some()
}

#[wasm_bindgen]
pub fn tabs_current(query: &str) -> Option<u32> {
    widgets::tabs::instance(query).map(|widget| widget.current_index() as u32)
}

/// Forget the persisted tab for `query`.
#[wasm_bindgen]
pub fn tabs_forget(query: &str) -> Result<(), JsValue> {
    match widgets::tabs::instance(query) {
        Some(widget) => widget.clear_persisted_state().map_err(to_js),
        None => Err(to_js(WidgetError::ElementNotFound(query.to_string()))),
    }
}

#[wasm_bindgen]
pub fn tabs_destroy(query: &str) -> bool {
    widgets::tabs::destroy(query)
}
