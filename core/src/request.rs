//! Request descriptor: path segments, query pairs, and headers.
//!
//! # Design
//! A `RequestDescriptor` is built fresh per call and rendered once into an
//! `HttpRequest`; it is never reused or cached. Path segments are
//! percent-encoded independently as they are pushed, so a `/` inside a
//! segment value (common in drilldown contexts) cannot split into two path
//! segments. Query pairs keep insertion order and are form-encoded at render
//! time (space becomes `+`), which keeps the output deterministic for
//! identical inputs. Absent parameters are never pushed, so they are omitted
//! from the target entirely rather than sent as empty strings.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

use crate::http::HttpRequest;

/// Everything except RFC 3986 unreserved characters is percent-encoded,
/// including `/` and space.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A single GET request under assembly.
#[derive(Debug, Clone)]
pub(crate) struct RequestDescriptor {
    segments: Vec<String>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Start a descriptor for an endpoint path such as
    /// `international/v1/autocomplete`. The endpoint is a trusted literal
    /// and is not re-encoded.
    pub fn new(endpoint: &str) -> Self {
        Self {
            segments: endpoint.split('/').map(str::to_string).collect(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Append a caller-supplied path segment, percent-encoding it.
    pub fn segment(mut self, value: &str) -> Self {
        self.segments.push(utf8_percent_encode(value, PATH_SEGMENT).to_string());
        self
    }

    /// Append a literal path segment from a closed set of known-safe values
    /// (e.g. `short`/`paged`), skipping encoding.
    pub fn raw_segment(mut self, value: &str) -> Self {
        self.segments.push(value.to_string());
        self
    }

    /// Append a query parameter when a value is present; `None` is omitted
    /// entirely.
    pub fn query_opt(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Render the descriptor into a full GET request against `base_url`
    /// (already stripped of any trailing slash).
    pub fn into_request(self, base_url: &str) -> HttpRequest {
        let mut url = format!("{}/{}", base_url, self.segments.join("/"));
        if !self.query.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        HttpRequest { url, headers: self.headers }
    }
}
