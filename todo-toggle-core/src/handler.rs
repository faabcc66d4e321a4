//! The toggle click: read id → POST → apply the server's answer.

use crate::config::ToggleConfig;
use crate::endpoint::toggle_path;
use crate::error::ToggleError;
use crate::in_flight::InFlightRegistry;
use crate::response::ToggleReply;
use crate::task::{TaskElement, apply_completion};
use crate::transport::{ToggleRequest, ToggleTransport};

/// What a click did to its item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server toggled the task and the item now shows `complete`.
    Applied {
        id: String,
        complete: bool,
        glyph_updated: bool,
    },
    /// A request for this id was still pending, so nothing was sent.
    Skipped { id: String },
}

/// Owns the CSRF token, configuration and transport for every bound item.
#[derive(Debug)]
pub struct ToggleHandler<T> {
    config: ToggleConfig,
    csrf_token: Option<String>,
    transport: T,
    in_flight: InFlightRegistry,
}

impl<T: ToggleTransport> ToggleHandler<T> {
    pub fn new(config: ToggleConfig, csrf_token: Option<String>, transport: T) -> Self {
        Self {
            config,
            csrf_token,
            transport,
            in_flight: InFlightRegistry::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ToggleConfig {
        &self.config
    }

    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub const fn in_flight(&self) -> &InFlightRegistry {
        &self.in_flight
    }

    /// The POST for one task id. The CSRF header is omitted when no token
    /// cookie was found.
    ///
    /// # Errors
    /// Returns [`ToggleError::InvalidId`] for ids that would leave the toggle
    /// route (`.` and `..`).
    pub fn request_for(&self, id: &str) -> Result<ToggleRequest, ToggleError> {
        let path = toggle_path(&self.config.endpoint_prefix, id)
            .ok_or_else(|| ToggleError::InvalidId(id.to_string()))?;
        let headers = self
            .csrf_token
            .iter()
            .map(|token| (self.config.csrf_header.clone(), token.clone()))
            .collect();
        Ok(ToggleRequest { path, headers })
    }

    /// Toggle one item and mirror the server's answer onto it.
    ///
    /// The item is only touched after a validated success reply.
    ///
    /// # Errors
    /// Returns an error when the item has no id, the request fails, the body
    /// does not match the response schema, or the server rejects the toggle.
    #[allow(clippy::future_not_send)]
    pub async fn toggle<E: TaskElement + ?Sized>(
        &self,
        item: &E,
    ) -> Result<ToggleOutcome, ToggleError> {
        let id = item
            .attribute(&self.config.id_attribute)
            .ok_or(ToggleError::MissingId)?;
        let Some(_guard) = self.in_flight.begin(&id, self.config.in_flight) else {
            return Ok(ToggleOutcome::Skipped { id });
        };

        let request = self.request_for(&id)?;
        let response = self.transport.post(&request).await?;
        let complete = ToggleReply::decode(response.status, &response.body)?.into_complete()?;

        let glyph_updated = apply_completion(item, complete, &self.config);
        Ok(ToggleOutcome::Applied {
            id,
            complete,
            glyph_updated,
        })
    }

    /// Click entry point: toggles and reports the result to the log. Failures
    /// leave the item exactly as it was.
    #[allow(clippy::future_not_send)]
    pub async fn handle_click<E: TaskElement + ?Sized>(&self, item: &E) {
        match self.toggle(item).await {
            Ok(ToggleOutcome::Applied { id, complete, .. }) => {
                log::debug!("task {id} is now complete={complete}");
            }
            Ok(ToggleOutcome::Skipped { id }) => {
                log::debug!("ignoring click on task {id}: toggle already in flight");
            }
            Err(err) => {
                let id = item
                    .attribute(&self.config.id_attribute)
                    .unwrap_or_else(|| "<missing id>".into());
                log::error!("Error toggling task {id}: {err}");
            }
        }
    }
}
