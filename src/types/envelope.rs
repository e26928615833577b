//! Error envelope types returned by the Commerce API
//!
//! Every non-2xx response carries a JSON body of the shape
//! `{status, error: {type, message}, warnings: [..]}`. The client decodes it
//! into [`ChargeError`] and wraps it in
//! [`CommerceError::Api`](crate::CommerceError::Api).

use serde::{Deserialize, Serialize};

/// The `error` object inside an API error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error category (e.g., "not_found", "invalid_request")
    pub r#type: String,
    /// Human-readable description of the failure
    pub message: String,
}

/// Structured error envelope returned by the API on non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeError {
    /// HTTP status code echoed in the body
    pub status: u16,
    /// Error type and message
    pub error: ApiErrorDetail,
    /// Non-fatal warnings attached to the rejection
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl std::fmt::Display for ChargeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}, warnings: {:?}",
            self.error.r#type, self.status, self.error.message, self.warnings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_api_error_envelope() {
        let body = json!({
            "status": 404,
            "error": {
                "type": "not_found",
                "message": "event not found"
            },
            "warnings": []
        });

        let envelope: ChargeError = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.error.r#type, "not_found");
        assert_eq!(envelope.error.message, "event not found");
        assert!(envelope.warnings.is_empty());
    }

    #[test]
    fn missing_warnings_defaults_to_empty() {
        let body = json!({
            "status": 401,
            "error": {"type": "auth_error", "message": "invalid api key"}
        });

        let envelope: ChargeError = serde_json::from_value(body).unwrap();
        assert!(envelope.warnings.is_empty());
    }

    #[test]
    fn display_includes_type_status_and_message() {
        let envelope = ChargeError {
            status: 429,
            error: ApiErrorDetail {
                r#type: "rate_limit_exceeded".to_string(),
                message: "Too many requests".to_string(),
            },
            warnings: vec![],
        };

        let rendered = envelope.to_string();
        assert!(rendered.contains("rate_limit_exceeded"));
        assert!(rendered.contains("429"));
        assert!(rendered.contains("Too many requests"));
    }
}
