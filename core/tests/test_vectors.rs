//! Verify build/parse methods against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request (full URL and
//! headers), a simulated response, and the expected parse outcome — either a
//! success payload or a normalized error. Comparing parsed results as JSON
//! (not raw strings) avoids false negatives from field-ordering differences.

use postcode_client::{
    BuildingListMode, HttpRequest, HttpResponse, PostcodeClient, PostcodeError, ValidateParams,
};
use serde_json::Value;

const BASE_URL: &str = "https://api.postcode.eu";

fn client() -> PostcodeClient {
    PostcodeClient::with_base_url("demo-key", "demo-secret", BASE_URL).unwrap()
}

fn opt_str(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn parse_mode(s: &str) -> BuildingListMode {
    match s {
        "short" => BuildingListMode::Short,
        "paged" => BuildingListMode::Paged,
        other => panic!("unknown building list mode: {other}"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        status_text: sim["status_text"].as_str().unwrap().to_string(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.url, expected["url"].as_str().unwrap(), "{name}: url");

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");
}

fn check_error(name: &str, err: PostcodeError, expected: &Value) {
    match expected["type"].as_str().unwrap() {
        "Api" => match err {
            PostcodeError::Api { status_code, error_kind, message, raw_body } => {
                assert_eq!(
                    u64::from(status_code),
                    expected["statusCode"].as_u64().unwrap(),
                    "{name}: status code"
                );
                assert_eq!(error_kind, expected["errorKind"].as_str().unwrap(), "{name}: kind");
                assert_eq!(message, expected["message"].as_str().unwrap(), "{name}: message");
                assert_eq!(
                    raw_body.is_some(),
                    expected["hasRawBody"].as_bool().unwrap(),
                    "{name}: raw body presence"
                );
            }
            other => panic!("{name}: expected Api error, got {other:?}"),
        },
        "Configuration" => match err {
            PostcodeError::Configuration { message } => {
                let needle = expected["messageContains"].as_str().unwrap();
                assert!(message.contains(needle), "{name}: message {message:?} lacks {needle:?}");
            }
            other => panic!("{name}: expected Configuration error, got {other:?}"),
        },
        other => panic!("{name}: unknown expected error type: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Autocomplete
// ---------------------------------------------------------------------------

#[test]
fn autocomplete_test_vectors() {
    let raw = include_str!("../../test-vectors/autocomplete.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];

        let req = c.build_autocomplete(
            input["context"].as_str().unwrap(),
            input["term"].as_str().unwrap(),
            input["language"].as_str().unwrap(),
            parse_mode(input["mode"].as_str().unwrap()),
            input["session"].as_str(),
        );
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_autocomplete(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            let parsed = serde_json::to_value(result.unwrap()).unwrap();
            assert_eq!(parsed, case["expected_result"], "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Address details
// ---------------------------------------------------------------------------

#[test]
fn address_test_vectors() {
    let raw = include_str!("../../test-vectors/address.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];

        let req = c.build_address_details(
            input["context"].as_str().unwrap(),
            input["dispatch_country"].as_str().unwrap(),
            input["session"].as_str(),
        );
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_address_details(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            let parsed = serde_json::to_value(result.unwrap()).unwrap();
            assert_eq!(parsed, case["expected_result"], "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Validate
// ---------------------------------------------------------------------------

#[test]
fn validate_test_vectors() {
    let raw = include_str!("../../test-vectors/validate.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let p = &input["params"];
        let params = ValidateParams {
            postcode: opt_str(&p["postcode"]),
            locality: opt_str(&p["locality"]),
            street: opt_str(&p["street"]),
            building: opt_str(&p["building"]),
            region: opt_str(&p["region"]),
            street_and_building: opt_str(&p["street_and_building"]),
        };

        let built = c.build_validate(input["country"].as_str().unwrap(), &params);
        let req = match built {
            Ok(req) => req,
            Err(err) => {
                let expected_error = case
                    .get("expected_error")
                    .unwrap_or_else(|| panic!("{name}: unexpected build error: {err:?}"));
                check_error(name, err, expected_error);
                continue;
            }
        };
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_validate(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            let parsed = serde_json::to_value(result.unwrap()).unwrap();
            assert_eq!(parsed, case["expected_result"], "{name}: parsed result");
        }
    }
}
