//! Mock of the postcode.eu international v1 API for integration tests.
//!
//! Serves the autocomplete, address, and validate routes with canned data,
//! checks Basic authentication on every route, and answers with the same
//! JSON error shape as the real service (`{"error", "message"}`), so the
//! client's error normalization can be exercised end-to-end.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Value};

/// Autocomplete context of the canned street match; drilling down on it
/// yields the address-precision match.
pub const STREET_CONTEXT: &str = "nldS3RyYWF0";

/// Context of the canned address match, accepted by the address route.
pub const ADDRESS_CONTEXT: &str = "nldQWRyZXM=";

type MockState = Arc<String>;

type ApiRejection = (StatusCode, Json<Value>);

pub fn app(api_key: &str, api_secret: &str) -> Router {
    let expected = format!(
        "Basic {}",
        general_purpose::STANDARD.encode(format!("{api_key}:{api_secret}"))
    );
    let state: MockState = Arc::new(expected);
    Router::new()
        .route(
            "/international/v1/autocomplete/{context}/{term}/{language}/{mode}",
            get(autocomplete),
        )
        .route("/international/v1/address/{context}/{dispatch_country}", get(address))
        .route("/international/v1/validate/{country}", get(validate))
        .with_state(state)
}

pub async fn run(
    listener: tokio::net::TcpListener,
    api_key: &str,
    api_secret: &str,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key, api_secret)).await
}

fn check_auth(expected: &str, headers: &HeaderMap) -> Result<(), ApiRejection> {
    match headers.get(header::AUTHORIZATION) {
        Some(value) if value.as_bytes() == expected.as_bytes() => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "AuthenticationFailed", "message": "Invalid credentials"})),
        )),
    }
}

async fn autocomplete(
    State(expected): State<MockState>,
    Path((context, term, _language, mode)): Path<(String, String, String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiRejection> {
    check_auth(&expected, &headers)?;
    if mode != "short" && mode != "paged" {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "UnknownBuildingListMode", "message": "Unknown building list mode"})),
        ));
    }

    // Drilling down on the street context yields the single building.
    if context == STREET_CONTEXT {
        return Ok(Json(json!({
            "matches": [{
                "value": "Kalverstraat 1, Amsterdam",
                "label": "Kalverstraat 1",
                "description": "Amsterdam",
                "context": ADDRESS_CONTEXT,
                "precision": "Address",
                "highlights": []
            }]
        })));
    }

    if term.to_lowercase().contains("kalver") {
        return Ok(Json(json!({
            "matches": [{
                "value": "Kalverstraat, Amsterdam",
                "label": "Kalverstraat",
                "description": "Amsterdam",
                "context": STREET_CONTEXT,
                "precision": "Street",
                "highlights": [[0, 6]]
            }],
            "newContext": "nld"
        })));
    }

    Ok(Json(json!({"matches": []})))
}

async fn address(
    State(expected): State<MockState>,
    Path((context, dispatch_country)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiRejection> {
    check_auth(&expected, &headers)?;
    if context != ADDRESS_CONTEXT {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "UnknownContext", "message": "Context not found"})),
        ));
    }

    // The country line is part of the mail lines only for cross-border
    // dispatch, mirroring the real service.
    let mut mail_lines = vec![json!("Kalverstraat 1"), json!("1012 NX Amsterdam")];
    if !dispatch_country.is_empty() && dispatch_country != "NLD" {
        mail_lines.push(json!("NETHERLANDS"));
    }

    Ok(Json(json!({
        "language": "nl",
        "address": {
            "country": "Nederland",
            "locality": "Amsterdam",
            "street": "Kalverstraat",
            "postcode": "1012 NX",
            "building": "1",
            "buildingNumber": 1,
            "buildingNumberAddition": null
        },
        "mailLines": mail_lines,
        "location": {"latitude": 52.370216, "longitude": 4.895168},
        "isPoBox": false,
        "country": {"name": "Netherlands", "iso3Code": "NLD"}
    })))
}

async fn validate(
    State(expected): State<MockState>,
    Path(country): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiRejection> {
    check_auth(&expected, &headers)?;
    if country != "nld" {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "UnknownCountry", "message": "Country not supported"})),
        ));
    }

    let postcode = params.get("postcode").map(String::as_str).unwrap_or_default();
    let street_and_building =
        params.get("streetAndBuilding").map(String::as_str).unwrap_or_default();
    let hit = postcode.replace(' ', "").eq_ignore_ascii_case("2012ES")
        || street_and_building.contains("Kalverstraat");

    if !hit {
        // No confident candidate: an empty list, not an error.
        return Ok(Json(json!({"matches": []})));
    }

    Ok(Json(json!({
        "matches": [{
            "address": {
                "country": "Nederland",
                "locality": "Haarlem",
                "street": "Prinsen Bolwerk",
                "postcode": "2012 ES",
                "building": "3",
                "buildingNumber": 3,
                "buildingNumberAddition": null
            },
            "mailLines": ["Prinsen Bolwerk 3", "2012 ES Haarlem"],
            "status": {"grade": "A", "validationLevel": "Building", "isAmbiguous": false}
        }]
    })))
}
