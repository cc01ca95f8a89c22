use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body_from_service_response;
use dictation_backend::config::server::ServerConfig;
use dictation_backend::infra::state::build_state;
use serde_json::Value;

use crate::common::multipart_upload;
use crate::support::create_test_app;

fn upload_request(field: &str, file_name: &str, content: &[u8]) -> actix_http::Request {
    let (content_type, body) = multipart_upload(field, file_name, content);
    test::TestRequest::post()
        .uri("/api/parse-file")
        .insert_header((CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request()
}

#[actix_web::test]
async fn csv_upload_returns_normalized_words() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = upload_request("file", "Spelling.CSV", b"Cat, DOG\n123, bird\r\n");
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "words": ["cat", "dog", "bird"] }));
}

#[actix_web::test]
async fn unsupported_extension_is_rejected() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, upload_request("file", "words.txt", b"cat, dog")).await;
    assert_error_body_from_service_response(
        resp,
        "UNSUPPORTED_FILE_TYPE",
        StatusCode::BAD_REQUEST,
        Some("Unsupported file type. Please upload CSV or XLSX files."),
    )
    .await;
}

#[actix_web::test]
async fn file_without_valid_words_is_rejected() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, upload_request("file", "numbers.csv", b"1,2,3")).await;
    assert_error_body_from_service_response(
        resp,
        "NO_VALID_WORDS",
        StatusCode::BAD_REQUEST,
        Some("No valid words found"),
    )
    .await;
}

#[actix_web::test]
async fn missing_file_field_is_rejected() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, upload_request("other", "words.csv", b"cat")).await;
    assert_error_body_from_service_response(
        resp,
        "EMPTY_UPLOAD",
        StatusCode::BAD_REQUEST,
        Some("No file uploaded"),
    )
    .await;
}

#[actix_web::test]
async fn xlsx_upload_uses_first_sheet() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let words = workbook.add_worksheet();
    words.write_string(0, 0, "Apple").unwrap();
    words.write_number(0, 1, 42).unwrap();
    words.write_string(1, 0, "  banana ").unwrap();
    let extra = workbook.add_worksheet();
    extra.write_string(0, 0, "cherry").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let resp = test::call_service(&app, upload_request("file", "Week1.xlsx", &bytes)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "words": ["apple", "banana"] }));
}

#[actix_web::test]
async fn unreadable_workbook_is_malformed() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, upload_request("file", "words.xlsx", b"not a workbook")).await;
    assert_error_body_from_service_response(
        resp,
        "MALFORMED_FILE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn oversized_upload_is_rejected() {
    let state = build_state()
        .with_config(ServerConfig {
            upload_max_bytes: 16,
            ..ServerConfig::default()
        })
        .build();
    let app = create_test_app(state).with_prod_routes().build().await;

    let content = b"apple, banana, cherry, damson, elderberry";
    let resp = test::call_service(&app, upload_request("file", "fruit.csv", content)).await;
    assert_error_body_from_service_response(
        resp,
        "PAYLOAD_TOO_LARGE",
        StatusCode::PAYLOAD_TOO_LARGE,
        None,
    )
    .await;
}
