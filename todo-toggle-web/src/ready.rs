use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document};

const LOADING: &str = "loading";

/// Run `callback` once the document can be queried: immediately when parsing
/// has finished, otherwise on the one-shot `DOMContentLoaded` event.
///
/// # Errors
/// Returns an error if the event listener cannot be registered.
pub fn on_ready(document: &Document, callback: impl FnOnce() + 'static) -> Result<(), JsValue> {
    if document.ready_state() != LOADING {
        callback();
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let listener = Closure::once_into_js(callback);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        listener.unchecked_ref(),
        &options,
    )
}
