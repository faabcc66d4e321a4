use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Headers, HtmlDocument, Request, RequestInit, Response, Window};

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns an error outside of a browser context where `window` is unavailable.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("`window` is unavailable"))
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when the document cannot be accessed from the current window.
pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("`document` is unavailable"))
}

/// Raw `document.cookie` string; empty for documents that carry no cookies.
#[must_use]
pub fn cookie_string(document: &Document) -> String {
    document
        .dyn_ref::<HtmlDocument>()
        .and_then(|html| html.cookie().ok())
        .unwrap_or_default()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// POST without a body and return the browser `Response`, whatever its status.
///
/// # Errors
/// Returns an error if the request cannot be built, the fetch rejects, or the
/// result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post(url: &str, headers: &[(String, String)]) -> Result<Response, JsValue> {
    let header_map = Headers::new()?;
    for (name, value) in headers {
        header_map.set(name, value)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&header_map);
    let request = Request::new_with_str_and_init(url, &init)?;

    let resp_value = JsFuture::from(window()?.fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body cannot be read or is not a string.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}
