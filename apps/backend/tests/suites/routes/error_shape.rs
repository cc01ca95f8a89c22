use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend_test_support::error_body::assert_error_body_from_service_response;
use dictation_backend::infra::state::build_state;
use dictation_backend::{AppError, ErrorCode};

use crate::support::create_test_app;

async fn validation_error() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::NoValidWords, "No valid words found"))
}

async fn not_found_error() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::SessionNotFound, "Game session not found"))
}

async fn too_large_error() -> Result<HttpResponse, AppError> {
    Err(AppError::payload_too_large("Upload exceeds 10 bytes"))
}

async fn internal_error() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("Failed to render CSV"))
}

async fn store_down_error() -> Result<HttpResponse, AppError> {
    Err(AppError::store_unavailable("session store offline"))
}

#[actix_web::test]
async fn every_error_variant_uses_the_json_contract() {
    let app = create_test_app(build_state().build())
        .with_routes(|cfg| {
            cfg.route("/_test/validation", web::get().to(validation_error))
                .route("/_test/not_found", web::get().to(not_found_error))
                .route("/_test/too_large", web::get().to(too_large_error))
                .route("/_test/internal", web::get().to(internal_error))
                .route("/_test/store_down", web::get().to(store_down_error));
        })
        .build()
        .await;

    let cases = [
        ("/_test/validation", "NO_VALID_WORDS", StatusCode::BAD_REQUEST, "No valid words"),
        ("/_test/not_found", "SESSION_NOT_FOUND", StatusCode::NOT_FOUND, "not found"),
        ("/_test/too_large", "PAYLOAD_TOO_LARGE", StatusCode::PAYLOAD_TOO_LARGE, "exceeds"),
        ("/_test/internal", "INTERNAL", StatusCode::INTERNAL_SERVER_ERROR, "CSV"),
        ("/_test/store_down", "STORE_UNAVAILABLE", StatusCode::SERVICE_UNAVAILABLE, "offline"),
    ];

    for (uri, code, status, detail) in cases {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_error_body_from_service_response(resp, code, status, Some(detail)).await;
    }
}

#[actix_web::test]
async fn trace_id_comes_from_the_request_scope() {
    let app = create_test_app(build_state().build())
        .with_routes(|cfg| {
            cfg.route("/_test/validation", web::get().to(validation_error));
        })
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/_test/validation").to_request(),
    )
    .await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id header");

    let body = assert_error_body_from_service_response(
        resp,
        "NO_VALID_WORDS",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    assert_eq!(body.trace_id, request_id);
    assert_ne!(body.trace_id, "unknown");
}
