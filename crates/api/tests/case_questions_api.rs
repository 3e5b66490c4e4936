//! HTTP-level integration tests for the `/case-questions` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::{json, Value};

fn favourable_inputs() -> Value {
    json!({
        "orderDate": "2024-01-01",
        "hearingRequestDate": "2024-01-31",
        "caseProperStatute": "yes",
        "caseProperRegulations": "yes",
        "properNoticeGiven": "yes",
        "jurisdictionalStanding": "yes",
        "proceduralRequirements": "yes",
        "legalBarriers": "no"
    })
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/case-questions/days-between
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_days_between_within_window() {
    let response = get(
        build_test_app(),
        "/api/v1/case-questions/days-between?from=2024-01-01&to=2024-01-31",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["days"], 30);
    assert_eq!(json["data"]["hearingRequestTimely"], "yes");
}

#[tokio::test]
async fn test_days_between_past_window() {
    let response = get(
        build_test_app(),
        "/api/v1/case-questions/days-between?from=2024-01-01&to=2024-02-05",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["days"], 35);
    assert_eq!(json["data"]["hearingRequestTimely"], "no");
}

#[tokio::test]
async fn test_days_between_rejects_malformed_dates() {
    let response = get(
        build_test_app(),
        "/api/v1/case-questions/days-between?from=01/01/2024&to=2024-02-05",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_days_between_reversed_dates_leave_timeliness_unset() {
    let response = get(
        build_test_app(),
        "/api/v1/case-questions/days-between?from=2024-02-05&to=2024-01-01",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["days"], -35);
    assert!(json["data"]["hearingRequestTimely"].is_null());
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/case-questions/evaluate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_evaluate_all_favourable_is_ready() {
    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/evaluate",
        json!({ "inputs": favourable_inputs() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["daysBetween"], 30);
    assert_eq!(json["data"]["hearingRequestTimely"]["kind"], "computed");
    assert_eq!(json["data"]["hearingRequestTimely"]["value"], "yes");
    assert_eq!(json["data"]["readyToProceed"]["value"], "yes");
}

#[tokio::test]
async fn test_evaluate_legal_barrier_blocks_readiness() {
    let mut inputs = favourable_inputs();
    inputs["legalBarriers"] = json!("yes");

    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/evaluate",
        json!({ "inputs": inputs }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["readyToProceed"]["value"], "no");
}

#[tokio::test]
async fn test_evaluate_late_request_is_untimely_with_advisory() {
    let mut inputs = favourable_inputs();
    inputs["hearingRequestDate"] = json!("2024-02-05");

    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/evaluate",
        json!({ "inputs": inputs }),
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["hearingRequestTimely"]["value"], "no");
    assert_eq!(json["data"]["readyToProceed"]["value"], "no");
    let advisories = json["data"]["advisories"].as_array().unwrap();
    assert!(advisories
        .iter()
        .any(|a| a["code"] == "hearing_request_untimely"
            && a["message"].as_str().unwrap().contains("35 days")));
}

#[tokio::test]
async fn test_evaluate_without_dates_leaves_flags_unset() {
    let response = post_json(build_test_app(), "/api/v1/case-questions/evaluate", json!({})).await;
    let json = body_json(response).await;

    assert!(json["data"]["daysBetween"].is_null());
    assert!(json["data"]["hearingRequestTimely"].is_null());
    assert!(json["data"]["readyToProceed"].is_null());
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/case-questions/overrides
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_override_timeliness_sticks_until_dates_change() {
    let mut inputs = favourable_inputs();
    inputs["hearingRequestDate"] = json!("2024-02-05");

    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/overrides",
        json!({
            "target": "hearing_request_timely",
            "value": "yes",
            "actor": "ALJ Ortiz",
            "inputs": inputs
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let outcome = &json["data"]["outcome"];
    assert_eq!(outcome["hearingRequestTimely"]["kind"], "overridden");
    assert_eq!(outcome["hearingRequestTimely"]["value"], "yes");
    assert_eq!(outcome["readyToProceed"]["value"], "yes");
    let overrides = json["data"]["overrides"].clone();

    // Same inputs: the override is still in force.
    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/evaluate",
        json!({ "inputs": inputs, "overrides": overrides }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["hearingRequestTimely"]["kind"], "overridden");
    assert_eq!(json["data"]["lapsedOverrides"], json!([]));

    // A different hearing request date: the override lapses.
    inputs["hearingRequestDate"] = json!("2024-02-10");
    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/evaluate",
        json!({ "inputs": inputs, "overrides": overrides }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["hearingRequestTimely"]["kind"], "computed");
    assert_eq!(json["data"]["hearingRequestTimely"]["value"], "no");
    assert_eq!(json["data"]["lapsedOverrides"], json!(["hearing_request_timely"]));
}

#[tokio::test]
async fn test_override_readiness() {
    let mut inputs = favourable_inputs();
    inputs["legalBarriers"] = json!("yes");

    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/overrides",
        json!({
            "target": "ready_to_proceed",
            "value": "yes",
            "actor": "ALJ Ortiz",
            "inputs": inputs
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ready = &json["data"]["outcome"]["readyToProceed"];
    assert_eq!(ready["kind"], "overridden");
    assert_eq!(ready["actor"], "ALJ Ortiz");
    assert_eq!(ready["value"], "yes");
}

#[tokio::test]
async fn test_override_requires_actor() {
    for actor in ["", "   "] {
        let response = post_json(
            build_test_app(),
            "/api/v1/case-questions/overrides",
            json!({
                "target": "ready_to_proceed",
                "value": "no",
                "actor": actor,
                "inputs": favourable_inputs()
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "actor {actor:?}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

// ---------------------------------------------------------------------------
// Test: blank form values
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_evaluate_treats_blank_values_as_unanswered() {
    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/evaluate",
        json!({
            "inputs": {
                "orderDate": "2024-01-01",
                "hearingRequestDate": "",
                "caseProperRegulations": "",
                "legalBarriers": "Yes"
            }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["daysBetween"].is_null());
    assert!(json["data"]["hearingRequestTimely"].is_null());
    assert!(json["data"]["readyToProceed"].is_null());
}

#[tokio::test]
async fn test_override_accepts_blank_inputs() {
    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/overrides",
        json!({
            "target": "hearing_request_timely",
            "value": "yes",
            "actor": "Judge Ortiz",
            "inputs": { "orderDate": "", "hearingRequestDate": "" }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"]["hearingRequestTimely"]["kind"], "overridden");
    assert!(json["data"]["overrides"]["hearingRequestTimely"]["basis"]["orderDate"].is_null());
}

#[tokio::test]
async fn test_evaluate_reports_request_before_order() {
    let mut inputs = favourable_inputs();
    inputs["hearingRequestDate"] = json!("2023-12-01");
    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/evaluate",
        json!({ "inputs": inputs }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["daysBetween"], -31);
    assert!(json["data"]["hearingRequestTimely"].is_null());
    assert_eq!(json["data"]["advisories"][0]["code"], "hearing_request_before_order");
}

#[tokio::test]
async fn test_evaluate_rejects_non_json_body_with_envelope() {
    let response = post_json(
        build_test_app(),
        "/api/v1/case-questions/evaluate",
        json!("not an object"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}
