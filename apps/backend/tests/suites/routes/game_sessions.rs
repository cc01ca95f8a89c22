use actix_web::http::header::CONTENT_DISPOSITION;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body_from_service_response;
use dictation_backend::infra::state::build_state;
use serde_json::{json, Value};

use crate::common::sample_session_json;
use crate::support::create_test_app;

#[actix_web::test]
async fn create_then_get_round_trips() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let body = sample_session_json(7);
    let req = test::TestRequest::post()
        .uri("/api/game-sessions")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["totalScore"], 7);
    assert_eq!(created["results"], body["results"]);

    let req = test::TestRequest::get()
        .uri("/api/game-sessions/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn ids_increase_per_created_session() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    for expected in 1..=3 {
        let req = test::TestRequest::post()
            .uri("/api/game-sessions")
            .set_json(sample_session_json(5))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created["id"], expected);
    }
}

#[actix_web::test]
async fn unknown_session_is_404() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/game-sessions/42").to_request(),
    )
    .await;
    assert_error_body_from_service_response(
        resp,
        "SESSION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Game session not found"),
    )
    .await;
}

#[actix_web::test]
async fn non_numeric_id_is_400() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/game-sessions/abc").to_request(),
    )
    .await;
    assert_error_body_from_service_response(
        resp,
        "INVALID_SESSION_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn malformed_bodies_are_400() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let mut bad_timestamp = sample_session_json(3);
    bad_timestamp["completedAt"] = json!("last tuesday");
    let mut wrong_type = sample_session_json(3);
    wrong_type["totalScore"] = json!("three");

    let bodies = [
        json!({ "wordBank": ["cat"] }),
        bad_timestamp,
        wrong_type,
    ];
    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/api/game-sessions")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_body_from_service_response(
            resp,
            "VALIDATION_ERROR",
            StatusCode::BAD_REQUEST,
            Some("Invalid game session data"),
        )
        .await;
    }

    let req = test::TestRequest::post()
        .uri("/api/game-sessions")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
}

#[actix_web::test]
async fn score_above_results_is_rejected() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let mut body = sample_session_json(3);
    body["results"] = json!([]);
    let req = test::TestRequest::post()
        .uri("/api/game-sessions")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body_from_service_response(
        resp,
        "INVALID_SESSION",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn export_returns_csv_attachment() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/game-sessions")
        .set_json(sample_session_json(2))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/game-sessions/1/export")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/csv"));
    let disposition = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("dictation-champ-results-"));

    let body = test::read_body(resp).await;
    let csv = std::str::from_utf8(&body).unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "Word,User Answer,Correct,Hints Used");
    assert_eq!(lines[1], "cat,cat,Yes,No");
    assert_eq!(lines[3], "fish,,No,No");
    assert_eq!(lines[10], "ant,,No,Yes");
    assert!(!csv.ends_with('\n'));
}

#[actix_web::test]
async fn report_summarizes_accuracy_and_badges() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/game-sessions")
        .set_json(sample_session_json(8))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let report: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/game-sessions/1/report")
            .to_request(),
    )
    .await;
    assert_eq!(report["correct"], 8);
    assert_eq!(report["incorrect"], 2);
    assert_eq!(report["accuracy"], 80);
    let titles: Vec<&str> = report["badges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    // The last round in the sample used a hint.
    assert_eq!(titles, vec!["Star Student!", "Great Job!"]);
}
