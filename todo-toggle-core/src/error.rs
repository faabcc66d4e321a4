use thiserror::Error;

use crate::transport::TransportError;

/// Everything that can end a single toggle click without touching the item.
#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("task item has no identifier attribute")]
    MissingId,
    #[error("task identifier {0:?} cannot be used as a path segment")]
    InvalidId(String),
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("HTTP {status}: {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },
    #[error("HTTP {status}: success response is missing the `complete` flag")]
    Schema { status: u16 },
    #[error("{}", .message.as_deref().unwrap_or("toggle rejected without a message"))]
    Rejected {
        status: String,
        message: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_displays_server_message() {
        let err = ToggleError::Rejected {
            status: "error".into(),
            message: Some("Task not found".into()),
        };
        assert_eq!(err.to_string(), "Task not found");
    }

    #[test]
    fn rejection_without_message_has_fallback() {
        let err = ToggleError::Rejected {
            status: "error".into(),
            message: None,
        };
        assert_eq!(err.to_string(), "toggle rejected without a message");
    }

    #[test]
    fn transport_error_wraps_message() {
        let err = ToggleError::from(TransportError::new("Failed to fetch"));
        assert_eq!(err.to_string(), "request failed: Failed to fetch");
    }
}
