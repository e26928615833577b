//! API credential loading

use std::env;

use crate::{CommerceError, Result};

/// Default environment variable consulted for the API key
pub const API_KEY_ENV: &str = "COMMERCE_API_KEY";

/// An API key for the Commerce API
///
/// Created once at startup and held by the client for its lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from an explicit API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Read the API key from the named environment variable
    ///
    /// Fails with [`CommerceError::MissingCredential`] when the variable is
    /// unset or empty.
    pub fn from_env(variable: &str) -> Result<Self> {
        match env::var(variable) {
            Ok(value) if !value.is_empty() => Ok(Self::new(value)),
            _ => Err(CommerceError::MissingCredential {
                variable: variable.to_string(),
            }),
        }
    }

    /// Read the API key from [`API_KEY_ENV`]
    pub fn from_default_env() -> Result<Self> {
        Self::from_env(API_KEY_ENV)
    }

    /// The raw API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_set_variable() {
        env::set_var("COMMERCE_TEST_KEY_SET", "test-api-key");
        let credentials = Credentials::from_env("COMMERCE_TEST_KEY_SET").unwrap();
        assert_eq!(credentials.api_key(), "test-api-key");
        env::remove_var("COMMERCE_TEST_KEY_SET");
    }

    #[test]
    fn from_env_fails_when_unset() {
        let result = Credentials::from_env("COMMERCE_TEST_KEY_UNSET");
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CommerceError::MissingCredential { ref variable } if variable == "COMMERCE_TEST_KEY_UNSET"
        ));
    }

    #[test]
    fn from_env_fails_when_empty() {
        env::set_var("COMMERCE_TEST_KEY_EMPTY", "");
        let result = Credentials::from_env("COMMERCE_TEST_KEY_EMPTY");
        assert!(result.is_err());
        env::remove_var("COMMERCE_TEST_KEY_EMPTY");
    }
}
