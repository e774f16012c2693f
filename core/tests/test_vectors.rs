//! Verify every service operation against JSON test vectors in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected outgoing request, a
//! simulated response, and the expected result or error. A replaying
//! transport captures the request and hands back the simulated response.
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use std::sync::Mutex;

use serde_json::Value;
use trip_core::{
    ApiClient, ClientConfig, CreateTripRequest, HttpMethod, HttpRequest, HttpResponse,
    NetworkError, Transport, TripService,
};

const BASE_URL: &str = "http://localhost:3000";

/// Returns a fixed response and keeps the request it was given.
struct Replay {
    response: HttpResponse,
    captured: Mutex<Option<HttpRequest>>,
}

impl Transport for Replay {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        *self.captured.lock().unwrap() = Some(request);
        Ok(self.response.clone())
    }
}

fn service_for(case: &Value) -> TripService<Replay> {
    let sim = &case["simulated_response"];
    let response = HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    );
    let replay = Replay {
        response,
        captured: Mutex::new(None),
    };
    TripService::new(ApiClient::new(ClientConfig::new(BASE_URL), replay))
}

fn captured(service: &TripService<Replay>) -> HttpRequest {
    service
        .client()
        .transport()
        .captured
        .lock()
        .unwrap()
        .clone()
        .expect("no request was sent")
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match &expected["body"] {
        Value::Null => assert!(req.body.is_none(), "{name}: body should be None"),
        body => {
            let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&sent, body, "{name}: body");
        }
    }
}

/// Compare an outcome with `expected_result` or `expected_error`.
fn check_outcome<T: serde::Serialize>(name: &str, case: &Value, outcome: Result<T, NetworkError>) {
    match case.get("expected_error").and_then(Value::as_str) {
        Some(expected) => {
            let err = match outcome {
                Ok(_) => panic!("{name}: expected {expected}, got success"),
                Err(err) => err,
            };
            match expected.split_once(':') {
                Some(("ServerError", code)) => {
                    assert_eq!(err, NetworkError::ServerError(code.parse().unwrap()), "{name}")
                }
                _ => match expected {
                    "Decoding" => assert!(matches!(err, NetworkError::Decoding(_)), "{name}: {err:?}"),
                    "NoData" => assert_eq!(err, NetworkError::NoData, "{name}"),
                    other => panic!("{name}: unknown expected_error: {other}"),
                },
            }
        }
        None => {
            let value = outcome.unwrap_or_else(|err| panic!("{name}: unexpected error {err:?}"));
            if let Some(expected) = case.get("expected_result") {
                assert_eq!(&serde_json::to_value(value).unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        let service = service_for(&case);
        let outcome = service.list_trips();
        check_request(name, &captured(&service), &case["expected_request"]);
        check_outcome(name, &case, outcome);
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        let service = service_for(&case);
        let outcome = service.get_trip(id);
        check_request(name, &captured(&service), &case["expected_request"]);
        check_outcome(name, &case, outcome);
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTripRequest = serde_json::from_value(case["input"].clone()).unwrap();
        let service = service_for(&case);
        let outcome = service.create_trip(&input);
        check_request(name, &captured(&service), &case["expected_request"]);
        check_outcome(name, &case, outcome);
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        let input: CreateTripRequest = serde_json::from_value(case["input"].clone()).unwrap();
        let service = service_for(&case);
        let outcome = service.update_trip(id, &input);
        check_request(name, &captured(&service), &case["expected_request"]);
        check_outcome(name, &case, outcome);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        let service = service_for(&case);
        let outcome = service.delete_trip(id);
        check_request(name, &captured(&service), &case["expected_request"]);
        check_outcome(name, &case, outcome);
    }
}
