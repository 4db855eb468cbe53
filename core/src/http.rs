//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test, and leaves timeouts, retries, and cancellation to whatever HTTP
//! stack the host already has.
//!
//! All three API operations are read-only lookups issued as GET, so a
//! request carries no method or body.

/// An HTTP GET request described as plain data.
///
/// Built by `PostcodeClient::build_*` methods. The `url` is the full target:
/// base URL, percent-encoded path segments, and a form-encoded query string
/// where the operation has one. The caller executes this request against the
/// network and returns the corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `PostcodeClient::parse_*` methods. `status_text` may be empty when the
/// transport does not surface a reason phrase; error normalization falls
/// back to a generic message in that case.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}
