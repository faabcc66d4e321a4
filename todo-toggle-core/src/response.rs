use serde::{Deserialize, Serialize};

use crate::error::ToggleError;

/// Status value the server uses for an applied toggle.
pub const SUCCESS_STATUS: &str = "success";

/// Body of a toggle response as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToggleResponse {
    pub status: String,
    #[serde(default)]
    pub complete: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A toggle response that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleReply {
    Toggled { complete: bool },
    Rejected { status: String, message: Option<String> },
}

impl ToggleReply {
    /// Decode and validate a response body. The HTTP status is only used for
    /// error context: servers report application failures as JSON on 4xx.
    ///
    /// # Errors
    /// Returns [`ToggleError::Decode`] when the body is not a JSON object with
    /// a string `status`, and [`ToggleError::Schema`] when a success lacks
    /// `complete`.
    pub fn decode(http_status: u16, body: &str) -> Result<Self, ToggleError> {
        let raw: RawToggleResponse =
            serde_json::from_str(body).map_err(|source| ToggleError::Decode {
                status: http_status,
                source,
            })?;
        Self::validate(http_status, raw)
    }

    fn validate(http_status: u16, raw: RawToggleResponse) -> Result<Self, ToggleError> {
        if raw.status != SUCCESS_STATUS {
            return Ok(Self::Rejected {
                status: raw.status,
                message: raw.message,
            });
        }
        raw.complete
            .map(|complete| Self::Toggled { complete })
            .ok_or(ToggleError::Schema {
                status: http_status,
            })
    }

    /// Turn a rejection into the error the caller reports.
    ///
    /// # Errors
    /// Returns [`ToggleError::Rejected`] for any non-success reply.
    pub fn into_complete(self) -> Result<bool, ToggleError> {
        match self {
            Self::Toggled { complete } => Ok(complete),
            Self::Rejected { status, message } => Err(ToggleError::Rejected { status, message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_complete_flag() {
        let reply = ToggleReply::decode(200, r#"{"status":"success","complete":true}"#).unwrap();
        assert_eq!(reply, ToggleReply::Toggled { complete: true });
    }

    #[test]
    fn not_found_body_on_404_is_a_rejection() {
        let reply =
            ToggleReply::decode(404, r#"{"status":"error","message":"Task not found"}"#).unwrap();
        assert_eq!(
            reply,
            ToggleReply::Rejected {
                status: "error".into(),
                message: Some("Task not found".into()),
            }
        );
    }

    #[test]
    fn success_without_complete_is_schema_error() {
        let err = ToggleReply::decode(200, r#"{"status":"success"}"#).unwrap_err();
        assert!(matches!(err, ToggleError::Schema { status: 200 }));
    }

    #[test]
    fn wrong_type_for_complete_is_decode_error() {
        let err =
            ToggleReply::decode(200, r#"{"status":"success","complete":"yes"}"#).unwrap_err();
        assert!(matches!(err, ToggleError::Decode { status: 200, .. }));
    }

    #[test]
    fn html_error_page_reports_http_status() {
        let err = ToggleReply::decode(500, "<h1>Server Error</h1>").unwrap_err();
        assert!(err.to_string().starts_with("HTTP 500: "));
    }

    #[test]
    fn rejection_converts_to_error() {
        let err = ToggleReply::Rejected {
            status: "error".into(),
            message: Some("Invalid request".into()),
        }
        .into_complete()
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid request");
    }
}
