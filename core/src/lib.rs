//! Synchronous client core for the postcode.eu international address API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! Three operations are exposed, each as a `build_*`/`parse_*` pair on
//! [`PostcodeClient`]: autocomplete, address-detail retrieval, and address
//! validation. All are authenticated GET lookups.
//!
//! # Design
//! - `PostcodeClient` is immutable — it holds the base URL and the Basic
//!   auth token derived once from the API key/secret pair.
//! - Request construction percent-encodes each path segment independently
//!   and form-encodes query parameters; absent parameters are omitted.
//! - Failed responses are normalized into one [`PostcodeError::Api`] value
//!   carrying the status code, the service's error kind and message, and the
//!   raw error body when it parsed as JSON.

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
mod request;
pub mod types;

pub use client::{PostcodeClient, DEFAULT_BASE_URL, SESSION_HEADER};
pub use error::PostcodeError;
pub use http::{HttpRequest, HttpResponse};
pub use types::{
    Address, AddressDetails, AutocompleteMatch, AutocompleteResponse, BuildingListMode,
    CountryInfo, GeoCoordinates, Grade, Precision, ValidateMatch, ValidateParams,
    ValidateResponse, ValidationLevel, ValidationStatus,
};
