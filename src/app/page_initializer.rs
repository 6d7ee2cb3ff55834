// src/app/page_initializer.rs
//! ページ読み込み時に URL の `limit` をドロップダウンへ反映させる。

use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, HtmlSelectElement, UrlSearchParams, Window};

use crate::app::dom;
use crate::components::limit::Limit;
use crate::config::page::{LIMIT_PARAM, LIMIT_SELECTOR_ID};

/// Reads `limit` out of a query string such as `location.search`.
pub fn limit_from_search(search: &str) -> Result<Limit, JsValue> {
    let params = UrlSearchParams::new_with_str(search)?;
    Ok(Limit::from_param(params.get(LIMIT_PARAM)))
}

pub fn sync_limit_selector(selector: &HtmlSelectElement, limit: &Limit) {
    selector.set_value(limit.as_str());
}

/// Applies the current URL's limit to `#limit-selector`, if the page has one.
pub fn initialize_page(window: &Window) -> Result<(), JsValue> {
    let limit = limit_from_search(&window.location().search()?)?;
    let document = dom::document(window)?;
    match dom::find_select(&document, LIMIT_SELECTOR_ID) {
        Ok(Some(selector)) => {
            sync_limit_selector(&selector, &limit);
            info!("PageInitializer: limit selector set to {}", limit);
        }
        Ok(None) => debug!("PageInitializer: no #{} on this page", LIMIT_SELECTOR_ID),
        Err(e) => warn!("PageInitializer: {}", e),
    }
    Ok(())
}

/// `document.readyState` が "loading" 以外なら DOMContentLoaded はもう終わってる。
pub fn initialize_now(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Runs `initialize_page` once the DOM is ready.
///
/// The wasm module is fetched asynchronously, so `DOMContentLoaded` may
/// already be gone by the time this runs; in that case initialize right away.
pub fn install() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if initialize_now(&document.ready_state()) {
        debug!("PageInitializer: document already parsed, initializing now");
        return initialize_page(&window);
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(move |_event: Event| {
        if let Err(e) = initialize_page(&window) {
            error!("PageInitializer: failed: {:?}", e);
        }
    });
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    )?;
    debug!("PageInitializer: waiting for DOMContentLoaded");
    Ok(())
}

/// The limit the page is currently showing, with the same defaulting.
#[wasm_bindgen(js_name = currentLimit)]
pub fn current_limit() -> Result<String, JsValue> {
    let window = dom::window()?;
    Ok(limit_from_search(&window.location().search()?)?.into())
}
