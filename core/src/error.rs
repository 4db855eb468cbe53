//! Error types for the postcode.eu API client.
//!
//! # Design
//! One closed enum instead of an error hierarchy, so callers pattern-match
//! on the variant. `Configuration` covers everything caught locally before a
//! request is built; `Api` covers everything the remote service reported.
//! The normalization of a failed response into an `Api` value lives here as
//! a pure function of `(status, status_text, body)` — the only place in the
//! crate where status codes are interpreted. There is no per-status
//! special-casing: 401, 404, and 429 all take the identical path, and
//! callers branch on `status_code`/`error_kind` themselves.

use thiserror::Error;

/// Errors returned by `PostcodeClient` build and parse methods.
#[derive(Debug, Error)]
pub enum PostcodeError {
    /// Caller-supplied input was structurally invalid (missing credentials,
    /// malformed country code). Raised before any request is built.
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// The remote service answered with a non-2xx status. `error_kind` and
    /// `message` come from the JSON error body when one was present;
    /// `raw_body` retains the parsed body for callers that want `details`.
    #[error("HTTP {status_code} {error_kind}: {message}")]
    Api {
        status_code: u16,
        error_kind: String,
        message: String,
        raw_body: Option<serde_json::Value>,
    },

    /// A success response body could not be deserialized into the expected
    /// shape.
    #[error("deserialization failed: {0}")]
    Deserialize(String),
}

/// Error kind used whenever the error body carries none.
const UNKNOWN_KIND: &str = "Unknown";

impl PostcodeError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        PostcodeError::Configuration { message: message.into() }
    }

    /// Normalize a failed transport response into an `Api` error.
    ///
    /// The body is parsed as JSON on a best-effort basis. A parseable body
    /// supplies `message` and `error` fields and is retained whole in
    /// `raw_body`; anything else falls back to the response's status text,
    /// or to a generic status message when that is empty too.
    pub fn from_error_response(status: u16, status_text: &str, body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(parsed) => {
                let message = parsed
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| generic_message(status));
                let error_kind = parsed
                    .get("error")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or(UNKNOWN_KIND)
                    .to_string();
                PostcodeError::Api {
                    status_code: status,
                    error_kind,
                    message,
                    raw_body: Some(parsed),
                }
            }
            Err(_) => {
                let message = if status_text.is_empty() {
                    generic_message(status)
                } else {
                    status_text.to_string()
                };
                PostcodeError::Api {
                    status_code: status,
                    error_kind: UNKNOWN_KIND.to_string(),
                    message,
                    raw_body: None,
                }
            }
        }
    }
}

fn generic_message(status: u16) -> String {
    format!("request failed with status {status}")
}
