//! HTTP-level integration tests for the `/validation` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /api/v1/validation/rule-types lists the catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_rule_types_returns_catalog() {
    let response = get(build_test_app(), "/api/v1/validation/rule-types").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 8);
    assert!(data.iter().any(|t| t == "min_length"));
    assert!(data.iter().any(|t| t == "message"));
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/validation/validate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dry_run_valid_record() {
    let response = post_json(
        build_test_app(),
        "/api/v1/validation/validate",
        json!({
            "record": {"Name": "ada", "Site": "https://example.com"},
            "fields": {
                "Name": [{"name": "required"}, {"name": "min_length", "config": 2}],
                "Site": [{"name": "url"}],
            },
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_valid"], true);
    assert_eq!(json["data"]["violations"], json!([]));
    assert_eq!(json["data"]["errors"], json!({}));
}

#[tokio::test]
async fn dry_run_reports_last_failure_and_override() {
    let response = post_json(
        build_test_app(),
        "/api/v1/validation/validate",
        json!({
            "record": {"Name": "", "Email": ""},
            "fields": {
                "Name": [{"name": "required"}, {"name": "min_length", "config": 5}],
                "Email": [{"name": "required"}, {"name": "message", "config": "custom text"}],
                "lower": [{"name": "required"}],
            },
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["is_valid"], false);
    assert_eq!(
        data["errors"],
        json!({
            "Name": "Name should be at least 5 characters long",
            "Email": "custom text",
        })
    );

    let violations = data["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 4);
    assert!(violations.iter().all(|v| v["field"] != "lower"));
}

#[tokio::test]
async fn dry_run_rejects_non_object_record() {
    let response = post_json(
        build_test_app(),
        "/api/v1/validation/validate",
        json!({"record": "nope", "fields": {}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn dry_run_rejects_unknown_rule_name() {
    let response = post_json(
        build_test_app(),
        "/api/v1/validation/validate",
        json!({
            "record": {"Name": "x"},
            "fields": {"Name": [{"name": "uppercase"}]},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
