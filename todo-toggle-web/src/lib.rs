#![forbid(unsafe_code)]
//! Browser side of the to-do completion toggle.
//!
//! Clicking a task item POSTs to the toggle route with the page's CSRF token
//! and mirrors the server's `complete` flag onto the item's class and glyph.

use todo_toggle_core::cookie_value;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub mod bindings;
pub mod config;
pub mod dom;
pub mod element;
pub mod logger;
pub mod ready;
pub mod transport;

pub use bindings::{ToggleBindings, install};
pub use element::DomTaskItem;
pub use transport::FetchTransport;

#[cfg(all(target_arch = "wasm32", feature = "autostart"))]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let document = dom::document()?;
    let ready_document = document.clone();
    ready::on_ready(&document, move || {
        if let Err(err) = boot(&ready_document) {
            log::error!("todo toggle failed to start: {}", dom::js_error_message(&err));
        }
    })
}

/// Bind every task item in the page using the embedded configuration.
#[cfg(all(target_arch = "wasm32", feature = "autostart"))]
fn boot(document: &web_sys::Document) -> Result<(), JsValue> {
    let config = config::page_config(document);
    log::set_max_level(config.log_level);
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;
    let token = cookie_value(&dom::cookie_string(document), &config.csrf_cookie);
    install(&root, config, token, FetchTransport)?.leak();
    Ok(())
}

/// Bind the task items under `root` for hosts that manage their own markup
/// (built without the `autostart` feature).
/// `config` is an optional object of overrides, e.g. `{ itemSelector: "li.task" }`.
///
/// Returns the number of items bound.
///
/// # Errors
/// Returns an error for an invalid configuration, a root outside any
/// document, or a listener that cannot be registered.
#[wasm_bindgen(js_name = initTodoToggle)]
pub fn init_todo_toggle(root: &Element, config: JsValue) -> Result<u32, JsValue> {
    let config =
        config::config_from_js(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(config.log_level);
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("root element has no owner document"))?;
    let token = cookie_value(&dom::cookie_string(&document), &config.csrf_cookie);
    let bindings = install(root, config, token, FetchTransport)?;
    let bound = u32::try_from(bindings.len()).unwrap_or(u32::MAX);
    bindings.leak();
    Ok(bound)
}
