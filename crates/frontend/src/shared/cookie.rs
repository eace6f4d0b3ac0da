//! `document.cookie` access.

use super::dom::{document, js_error};
use chrono::Utc;
use contracts::shared::cookie::{expire_cookie, read_cookie, CookieWrite};
use contracts::WidgetError;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Result<HtmlDocument, WidgetError> {
    document()?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| WidgetError::Dom("document is not an HTML document".into()))
}

pub fn read(name: &str) -> Option<String> {
    let header = html_document().ok()?.cookie().ok()?;
    read_cookie(&header, name)
}

pub fn write(cookie: &CookieWrite) -> Result<(), WidgetError> {
    html_document()?
        .set_cookie(&cookie.to_header(Utc::now()))
        .map_err(js_error)
}

pub fn remove(name: &str) -> Result<(), WidgetError> {
    html_document()?
        .set_cookie(&expire_cookie(name, "/"))
        .map_err(js_error)
}
