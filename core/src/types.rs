//! DTOs for the three API operations.
//!
//! # Design
//! These types mirror the remote service's documented JSON shapes and are a
//! direct pass-through: no local validation or transformation happens beyond
//! deserialization. Wire names are camelCase; enum tiers are declared in
//! ascending order so the derived `Ord` matches the documented ranking.

use serde::{Deserialize, Serialize};

/// Fourth path segment of the autocomplete endpoint. A closed set, so it is
/// inserted into the path literally, without percent-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingListMode {
    Short,
    Paged,
}

impl BuildingListMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildingListMode::Short => "short",
            BuildingListMode::Paged => "paged",
        }
    }
}

/// Granularity tier of an autocomplete match, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Precision {
    None,
    Locality,
    PostalCode,
    Street,
    Address,
}

/// One autocomplete suggestion.
///
/// `context` is an opaque locator: feed it back into `autocomplete` to drill
/// down, or into `address_details` once `precision` is `Address`. Contexts
/// may expire and must not be persisted. `highlights` holds `[start, end)`
/// byte ranges into `value` marking the matched portions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteMatch {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    pub context: String,
    pub precision: Precision,
    #[serde(default)]
    pub highlights: Vec<[usize; 2]>,
}

/// Response of the autocomplete operation. When the service rewrites the
/// search scope it returns `new_context`, which supersedes the context the
/// caller sent on subsequent calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResponse {
    pub matches: Vec<AutocompleteMatch>,
    #[serde(default)]
    pub new_context: Option<String>,
}

/// Structured address fields. Fields the service has no value for come back
/// null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub building_number: Option<i64>,
    #[serde(default)]
    pub building_number_addition: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Country metadata attached to a resolved address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub name: String,
    pub iso3_code: String,
}

/// Full address record returned by the address-details operation.
///
/// `mail_lines` is the ready-to-print postal form; when the request's
/// dispatch country was empty the country line is omitted from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    pub language: String,
    pub address: Address,
    pub mail_lines: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoCoordinates>,
    pub is_po_box: bool,
    pub country: CountryInfo,
}

/// Optional address fields submitted to the validate operation.
///
/// Only `Some` fields are sent, as query parameters. `street_and_building`
/// is meant for input where street and building are not separable; it is
/// semantically exclusive with `street`/`building`, but that exclusivity is
/// the caller's responsibility — the library sends whatever is set and the
/// remote service's conflict resolution governs the outcome.
#[derive(Debug, Clone, Default)]
pub struct ValidateParams {
    pub postcode: Option<String>,
    pub locality: Option<String>,
    pub street: Option<String>,
    pub building: Option<String>,
    pub region: Option<String>,
    pub street_and_building: Option<String>,
}

/// Letter grade ranking how well the validated input matched a real address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Which address component tier was confirmed, least confirmed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValidationLevel {
    None,
    Locality,
    Street,
    BuildingPartial,
    Building,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStatus {
    pub grade: Grade,
    pub validation_level: ValidationLevel,
    pub is_ambiguous: bool,
}

/// One candidate corrected address from the validate operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateMatch {
    pub address: Address,
    pub mail_lines: Vec<String>,
    pub status: ValidationStatus,
}

/// Response of the validate operation. An empty `matches` list is a normal
/// outcome: no candidate met the service's confidence bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub matches: Vec<ValidateMatch>,
}
