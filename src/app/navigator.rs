// src/app/navigator.rs
//! 表示件数ドロップダウンの変更でページを再読み込みする処理。

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlSelectElement, Location};

use crate::app::dom;
use crate::config::page::{LIMIT_PARAM, LIMIT_PATH, LIMIT_SELECTOR_ID};

/// `/?limit=<value>`. The value goes in as-is, without percent-encoding.
pub fn limit_href(value: &str) -> String {
    format!("{}?{}={}", LIMIT_PATH, LIMIT_PARAM, value)
}

/// ドロップダウンで今選ばれている値の遷移先。
pub fn selected_href(selector: &HtmlSelectElement) -> String {
    limit_href(&selector.value())
}

/// Navigates `location` to the page for the selector's current value.
pub fn navigate_to_limit(selector: &HtmlSelectElement, location: &Location) -> Result<(), JsValue> {
    let href = selected_href(selector);
    info!("Navigator: limit changed, navigating to {}", href);
    location.set_href(&href)
}

/// Wired to `#limit-selector`'s own change event, so the control is expected
/// to exist. If it doesn't, this throws instead of silently doing nothing.
#[wasm_bindgen(js_name = updateLimit)]
pub fn update_limit() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let selector = dom::require_select(&document, LIMIT_SELECTOR_ID)?;
    navigate_to_limit(&selector, &window.location())
}
