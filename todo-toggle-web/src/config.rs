//! Where the page supplies configuration overrides.

use thiserror::Error;
use todo_toggle_core::{ConfigError, ToggleConfig};
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Id of an optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "todo-toggle-config";

#[derive(Debug, Error)]
pub enum JsConfigError {
    #[error("configuration object could not be read: {0}")]
    Convert(#[from] serde_wasm_bindgen::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Configuration embedded in the page, or the defaults when there is none.
/// Invalid JSON is logged and ignored.
#[must_use]
pub fn page_config(document: &Document) -> ToggleConfig {
    let Some(script) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return ToggleConfig::default();
    };
    let text = script.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return ToggleConfig::default();
    }
    ToggleConfig::from_json(&text).unwrap_or_else(|err| {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        ToggleConfig::default()
    })
}

/// Configuration passed from JavaScript; `undefined`/`null` mean defaults.
///
/// # Errors
/// Returns an error when the object has the wrong shape or fails validation.
pub fn config_from_js(value: JsValue) -> Result<ToggleConfig, JsConfigError> {
    if value.is_undefined() || value.is_null() {
        return Ok(ToggleConfig::default());
    }
    // Via `Value` so every key of the object is seen and unknown ones rejected.
    let raw: serde_json::Value = serde_wasm_bindgen::from_value(value)?;
    let config: ToggleConfig = serde_json::from_value(raw).map_err(ConfigError::from)?;
    Ok(config.validate()?)
}
