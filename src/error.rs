//! Error types for the Commerce client
//!
//! Every failure surfaces as a [`CommerceError`]. The enum splits into two
//! families that callers are expected to match on:
//!
//! - [`CommerceError::Api`] — the server answered with a non-2xx status and a
//!   decodable error envelope. The decoded [`ChargeError`] carries the HTTP
//!   status, an error type/message pair, and any warnings.
//! - Everything else — a local failure: missing credentials, a request that
//!   failed validation before any network activity, a transport failure
//!   (connect, DNS, TLS, timeout, cancellation), or a JSON body that would
//!   not decode.
//!
//! A decode failure is always a local [`CommerceError::Json`] error, never an
//! API error, so callers can tell "the server rejected the request" apart
//! from "the response could not be understood".

use crate::types::ChargeError;

/// Result type alias for Commerce operations
pub type Result<T> = std::result::Result<T, CommerceError>;

/// Error type for all Commerce client operations
#[derive(Debug, thiserror::Error)]
pub enum CommerceError {
    /// The API answered with a non-2xx status and a structured error envelope
    #[error("Commerce API error: {0}")]
    Api(ChargeError),

    /// A required credential environment variable was unset or empty
    #[error("missing credential: environment variable {variable} is not set or empty")]
    MissingCredential {
        /// Name of the environment variable that was consulted
        variable: String,
    },

    /// A request failed local validation before any network activity
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected
        reason: String,
    },

    /// Client configuration was rejected at construction time
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Transport-level failure: connect, DNS, TLS, timeout, or cancellation
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON body (success payload or error envelope) failed to decode
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommerceError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error is a structured API rejection
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The decoded API error envelope, if this is an API rejection
    pub fn api_error(&self) -> Option<&ChargeError> {
        match self {
            Self::Api(envelope) => Some(envelope),
            _ => None,
        }
    }

    /// The HTTP status echoed in the API error envelope, if any
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// Whether this error is a transport timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiErrorDetail, ChargeError};

    fn sample_envelope() -> ChargeError {
        ChargeError {
            status: 400,
            error: ApiErrorDetail {
                r#type: "invalid_request".to_string(),
                message: "Amount must be positive".to_string(),
            },
            warnings: vec!["deprecated field".to_string()],
        }
    }

    #[test]
    fn api_error_accessors() {
        let err = CommerceError::Api(sample_envelope());
        assert!(err.is_api_error());
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.api_error().unwrap().error.message, "Amount must be positive");
    }

    #[test]
    fn local_errors_are_not_api_errors() {
        let err = CommerceError::invalid_request("PricingType is required");
        assert!(!err.is_api_error());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("PricingType is required"));
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = CommerceError::MissingCredential {
            variable: "COMMERCE_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("COMMERCE_API_KEY"));
    }
}
