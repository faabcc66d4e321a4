use todo_toggle_core::{ToggleRequest, ToggleTransport, TransportError, TransportResponse};

use crate::dom;

/// Sends toggle requests with the browser's `fetch`, relative to the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl ToggleTransport for FetchTransport {
    async fn post(&self, request: &ToggleRequest) -> Result<TransportResponse, TransportError> {
        let response = dom::post(&request.path, &request.headers)
            .await
            .map_err(|err| TransportError::new(dom::js_error_message(&err)))?;
        let body = dom::response_text(&response)
            .await
            .map_err(|err| TransportError::new(dom::js_error_message(&err)))?;
        Ok(TransportResponse::new(response.status(), body))
    }
}
