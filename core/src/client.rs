//! Stateless HTTP request builder and response parser for the postcode.eu
//! international address API.
//!
//! # Design
//! `PostcodeClient` holds only the stripped base URL and the derived auth
//! token, and carries no mutable state between calls. Each operation is
//! split into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`. The caller executes the
//! actual HTTP round-trip, keeping the core deterministic and free of I/O
//! dependencies.

use serde::de::DeserializeOwned;

use crate::auth::AuthToken;
use crate::error::PostcodeError;
use crate::http::{HttpRequest, HttpResponse};
use crate::request::RequestDescriptor;
use crate::types::{
    AddressDetails, AutocompleteResponse, BuildingListMode, ValidateParams, ValidateResponse,
};

/// Production host of the international v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.postcode.eu";

/// Header carrying the optional autocomplete session id, used by the service
/// to correlate a sequence of autocomplete calls for billing.
pub const SESSION_HEADER: &str = "X-Autocomplete-Session";

const AUTOCOMPLETE_ENDPOINT: &str = "international/v1/autocomplete";
const ADDRESS_ENDPOINT: &str = "international/v1/address";
const VALIDATE_ENDPOINT: &str = "international/v1/validate";

/// Stateless client for the international address API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`. Immutable after construction,
/// so clones can be used concurrently without coordination.
#[derive(Debug, Clone)]
pub struct PostcodeClient {
    base_url: String,
    token: AuthToken,
}

impl PostcodeClient {
    /// Create a client against the production host.
    ///
    /// Fails with a `Configuration` error when either credential is empty.
    pub fn new(api_key: &str, api_secret: &str) -> Result<Self, PostcodeError> {
        Self::with_base_url(api_key, api_secret, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom host. A trailing slash on
    /// `base_url` is stripped.
    pub fn with_base_url(
        api_key: &str,
        api_secret: &str,
        base_url: &str,
    ) -> Result<Self, PostcodeError> {
        let token = AuthToken::derive(api_key, api_secret)?;
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), token })
    }

    /// Build the autocomplete request:
    /// `GET /international/v1/autocomplete/{context}/{term}/{language}/{mode}`.
    ///
    /// `context` is either a country code to start a search or the opaque
    /// context of a prior match to drill down; it is passed through without
    /// local validation, as are `term` and `language` — malformed input is
    /// rejected by the service and surfaces as an `Api` error.
    pub fn build_autocomplete(
        &self,
        context: &str,
        term: &str,
        language: &str,
        mode: BuildingListMode,
        session: Option<&str>,
    ) -> HttpRequest {
        self.descriptor(AUTOCOMPLETE_ENDPOINT, session)
            .segment(context)
            .segment(term)
            .segment(language)
            .raw_segment(mode.as_str())
            .into_request(&self.base_url)
    }

    pub fn parse_autocomplete(
        &self,
        response: HttpResponse,
    ) -> Result<AutocompleteResponse, PostcodeError> {
        parse_body(response)
    }

    /// Build the address-details request:
    /// `GET /international/v1/address/{context}/{dispatchCountry}`.
    ///
    /// `context` must come from an autocomplete match with `Address`
    /// precision (not locally enforced). An empty `dispatch_country` is
    /// legal and encodes to an empty segment; it omits the country line from
    /// the formatted mail lines.
    pub fn build_address_details(
        &self,
        context: &str,
        dispatch_country: &str,
        session: Option<&str>,
    ) -> HttpRequest {
        self.descriptor(ADDRESS_ENDPOINT, session)
            .segment(context)
            .segment(dispatch_country)
            .into_request(&self.base_url)
    }

    pub fn parse_address_details(
        &self,
        response: HttpResponse,
    ) -> Result<AddressDetails, PostcodeError> {
        parse_body(response)
    }

    /// Build the validate request:
    /// `GET /international/v1/validate/{country}?{params}`.
    ///
    /// `country` must be exactly 3 lowercase ASCII letters; violations fail
    /// here with a `Configuration` error, before any request exists. Only
    /// `Some` fields of `params` become query parameters.
    pub fn build_validate(
        &self,
        country: &str,
        params: &ValidateParams,
    ) -> Result<HttpRequest, PostcodeError> {
        check_country(country)?;
        Ok(self
            .descriptor(VALIDATE_ENDPOINT, None)
            .segment(country)
            .query_opt("postcode", params.postcode.as_deref())
            .query_opt("locality", params.locality.as_deref())
            .query_opt("street", params.street.as_deref())
            .query_opt("building", params.building.as_deref())
            .query_opt("region", params.region.as_deref())
            .query_opt("streetAndBuilding", params.street_and_building.as_deref())
            .into_request(&self.base_url))
    }

    pub fn parse_validate(&self, response: HttpResponse) -> Result<ValidateResponse, PostcodeError> {
        parse_body(response)
    }

    fn descriptor(&self, endpoint: &str, session: Option<&str>) -> RequestDescriptor {
        RequestDescriptor::new(endpoint)
            .header("Authorization", &self.token.header_value())
            .header("Accept", "application/json")
            .header_opt(SESSION_HEADER, session)
    }
}

/// Reject anything that is not exactly 3 lowercase ASCII letters.
fn check_country(country: &str) -> Result<(), PostcodeError> {
    if country.is_empty() {
        return Err(PostcodeError::config("country is required and must be non-empty"));
    }
    if country.len() != 3 {
        return Err(PostcodeError::config(format!(
            "country must be exactly 3 letters, got {country:?}"
        )));
    }
    if !country.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(PostcodeError::config(format!(
            "country must be lowercase ASCII letters, got {country:?}"
        )));
    }
    Ok(())
}

/// Shared success path: 2xx bodies deserialize into the operation's shape,
/// anything else goes through error normalization.
fn parse_body<T: DeserializeOwned>(response: HttpResponse) -> Result<T, PostcodeError> {
    if !(200..300).contains(&response.status) {
        return Err(PostcodeError::from_error_response(
            response.status,
            &response.status_text,
            &response.body,
        ));
    }
    serde_json::from_str(&response.body).map_err(|e| PostcodeError::Deserialize(e.to_string()))
}
