//! Handler configuration: route, CSRF wiring, selectors and glyphs.
//!
//! Every field has a default matching the server's template and routes, so an
//! empty JSON object (or no configuration at all) yields a working setup.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::in_flight::InFlightPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ToggleConfig {
    /// Route prefix; the item id is appended as one path segment.
    pub endpoint_prefix: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    /// Selector for the clickable task items below the root.
    pub item_selector: String,
    pub id_attribute: String,
    pub glyph_selector: String,
    pub completed_class: String,
    pub complete_glyph: String,
    pub incomplete_glyph: String,
    pub in_flight: InFlightPolicy,
    pub log_level: LevelFilter,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            endpoint_prefix: "/toggle/".into(),
            csrf_cookie: "csrftoken".into(),
            csrf_header: "X-CSRFToken".into(),
            item_selector: "li".into(),
            id_attribute: "data-id".into(),
            glyph_selector: ".emoji".into(),
            completed_class: "completed".into(),
            complete_glyph: "✅".into(),
            incomplete_glyph: "❌".into(),
            in_flight: InFlightPolicy::default(),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid toggle configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toggle configuration field `{0}` must not be empty")]
    Empty(&'static str),
}

impl ToggleConfig {
    /// Parse overrides from JSON; missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns an error for malformed JSON, unknown keys, or an empty required
    /// field.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Reject configurations that could never match or route anything.
    ///
    /// # Errors
    /// Returns [`ConfigError::Empty`] naming the first empty required field.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let required = [
            ("endpointPrefix", &self.endpoint_prefix),
            ("csrfHeader", &self.csrf_header),
            ("itemSelector", &self.item_selector),
            ("idAttribute", &self.id_attribute),
            ("glyphSelector", &self.glyph_selector),
            ("completedClass", &self.completed_class),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Empty(*field));
        }
        Ok(self)
    }

    #[must_use]
    pub fn glyph_for(&self, complete: bool) -> &str {
        if complete {
            &self.complete_glyph
        } else {
            &self.incomplete_glyph
        }
    }
}
