//! Credential handling for Basic authentication.
//!
//! # Design
//! The API authenticates every request with `Authorization: Basic
//! base64(apiKey:apiSecret)`. The token is derived once at client
//! construction and reused verbatim for the client's lifetime, so the
//! per-request cost is a string clone. Missing credentials are caught here,
//! before any request exists.

use base64::{engine::general_purpose, Engine as _};

use crate::error::PostcodeError;

/// Opaque Basic-auth token derived from an API key/secret pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Derive the token from credentials.
    ///
    /// Fails with a `Configuration` error naming the missing field when
    /// either credential is empty.
    pub fn derive(api_key: &str, api_secret: &str) -> Result<Self, PostcodeError> {
        if api_key.is_empty() {
            return Err(PostcodeError::config("api_key is required and must be non-empty"));
        }
        if api_secret.is_empty() {
            return Err(PostcodeError::config("api_secret is required and must be non-empty"));
        }
        let encoded = general_purpose::STANDARD.encode(format!("{api_key}:{api_secret}"));
        Ok(AuthToken(encoded))
    }

    /// The base64 payload, without the `Basic ` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_standard_base64_of_key_colon_secret() {
        let token = AuthToken::derive("my-key", "my-secret").unwrap();
        // base64("my-key:my-secret")
        assert_eq!(token.as_str(), "bXkta2V5Om15LXNlY3JldA==");
        assert_eq!(token.header_value(), "Basic bXkta2V5Om15LXNlY3JldA==");
    }

    #[test]
    fn empty_key_is_a_configuration_error() {
        let err = AuthToken::derive("", "secret").unwrap_err();
        match err {
            PostcodeError::Configuration { message } => assert!(message.contains("api_key")),
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn empty_secret_is_a_configuration_error() {
        let err = AuthToken::derive("key", "").unwrap_err();
        match err {
            PostcodeError::Configuration { message } => assert!(message.contains("api_secret")),
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn token_handles_non_ascii_credentials() {
        // base64 runs over the UTF-8 bytes of the concatenation.
        let token = AuthToken::derive("sleutel", "gehëim").unwrap();
        assert_eq!(token.as_str(), "c2xldXRlbDpnZWjDq2lt");
    }
}
