//! Network seam between the toggle algorithm and whatever performs the POST.

use thiserror::Error;

/// A single toggle POST: no body, only a path and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl ToggleRequest {
    /// Value of the first header with this name, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of the server's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The request never produced a readable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

}

/// Sends toggle requests. Implementations are single-threaded (wasm futures
/// are not `Send`), so no `Send` bound is placed on the returned future.
#[allow(async_fn_in_trait)]
pub trait ToggleTransport {
    /// Issue the POST and return whatever the server answered, whatever its
    /// HTTP status.
    ///
    /// # Errors
    /// Returns an error when no response could be obtained or its body could
    /// not be read.
    async fn post(&self, request: &ToggleRequest) -> Result<TransportResponse, TransportError>;
}
