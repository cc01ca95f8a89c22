//! Assertions for the backend's JSON error body.
//!
//! Kept free of backend types so the contract is checked as clients see it.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Wire shape of an error response.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

/// Check status, code, trace-id parity and optionally the `error` text.
///
/// Returns the parsed body for further assertions.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_error_contains: Option<&str>,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let parsed: ErrorBodyLike =
        serde_json::from_slice(body).expect("error body should be JSON with error/code/status/trace_id");

    let header_trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be ASCII");
    assert_eq!(
        parsed.trace_id, header_trace_id,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(parsed.code, expected_code);
    assert_eq!(parsed.status, expected_status.as_u16());
    assert!(!parsed.error.is_empty(), "error field should not be empty");

    if let Some(expected) = expected_error_contains {
        assert!(
            parsed.error.contains(expected),
            "expected error to contain '{expected}', got '{}'",
            parsed.error
        );
    }
    parsed
}

pub async fn assert_error_body_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_error_contains: Option<&str>,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;
    assert_error_body_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_error_contains,
    )
}
