use super::common::*;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::funding::domain::FundingCalculatorInput;
use crate::funding::router::{calculate_handler, evaluate_handler, programs_handler, ProgramsQuery};

#[tokio::test]
async fn calculate_handler_returns_result_and_summary() {
    let service = Arc::new(build_service());

    let response = calculate_handler(State(service), axum::Json(young_jobseeker_input())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let eligible_ids: Vec<&str> = body["result"]["eligiblePrograms"]
        .as_array()
        .expect("eligible list")
        .iter()
        .filter_map(|program| program["id"].as_str())
        .collect();
    assert!(eligible_ids.contains(&"nsw-youth-fee-free"));
    assert_eq!(body["result"]["estimatedCost"]["min"], json!(0));
    assert_eq!(body["result"]["fullFee"], json!({ "min": 4800, "max": 4800 }));
    assert_eq!(body["summary"]["estimated_cost_label"], json!("Free"));
    assert_eq!(body["summary"]["potential_saving_label"], json!("$4,800"));
}

#[tokio::test]
async fn calculate_handler_rejects_missing_jurisdiction() {
    let service = Arc::new(build_service());
    let mut input = young_jobseeker_input();
    input.jurisdiction = None;

    let response = calculate_handler(State(service), axum::Json(input)).await;

    assert_unprocessable(&response);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], json!("applicant jurisdiction is required"));
}

#[tokio::test]
async fn evaluate_handler_reports_reason_for_ineligible_program() {
    let service = Arc::new(build_service());
    let mut input = young_jobseeker_input();
    input.is_citizen_or_pr = Some(false);

    let response = evaluate_handler(
        State(service),
        Path("nsw-youth-fee-free".to_string()),
        axum::Json(input),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["programId"], json!("nsw-youth-fee-free"));
    assert_eq!(body["eligible"], json!(false));
    assert!(body["reason"]
        .as_str()
        .expect("reason")
        .contains("citizenship"));
}

#[tokio::test]
async fn evaluate_handler_returns_not_found_for_unknown_program() {
    let service = Arc::new(build_service());

    let response = evaluate_handler(
        State(service),
        Path("does-not-exist".to_string()),
        axum::Json(young_jobseeker_input()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn evaluate_handler_rejects_cross_jurisdiction_pairs() {
    let service = Arc::new(build_service());

    let response = evaluate_handler(
        State(service),
        Path("vic-skills-first".to_string()),
        axum::Json(young_jobseeker_input()),
    )
    .await;

    assert_unprocessable(&response);
}

#[tokio::test]
async fn programs_handler_filters_by_jurisdiction() {
    let service = Arc::new(build_service());

    let response = programs_handler(
        State(service),
        Query(ProgramsQuery {
            jurisdiction: Some("VIC".to_string()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let programs = body.as_array().expect("program list");
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0]["id"], json!("vic-skills-first"));
}

#[tokio::test]
async fn programs_handler_rejects_unknown_jurisdiction() {
    let service = Arc::new(build_service());

    let response = programs_handler(
        State(service),
        Query(ProgramsQuery {
            jurisdiction: Some("atlantis".to_string()),
        }),
    )
    .await;

    assert_unprocessable(&response);
}

#[tokio::test]
async fn calculate_route_accepts_json_payloads() {
    let router = funding_router_with_service(build_service());
    let payload = json!({
        "jurisdiction": "nsw",
        "isCitizenOrPR": true,
        "age": 20,
        "employmentStatus": "unemployed",
        "priorQualification": "none"
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/funding/calculate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_json_body(response).await;
    assert!(body["result"].get("fullFee").is_none());
    assert_eq!(body["result"]["jurisdiction"], json!("nsw"));
}

#[tokio::test]
async fn evaluate_route_uses_path_parameter() {
    let router = funding_router_with_service(build_service());
    let input = FundingCalculatorInput {
        jurisdiction: Some("nsw".to_string()),
        is_citizen_or_pr: Some(true),
        age: Some(16),
        ..FundingCalculatorInput::default()
    };

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/funding/programs/nsw-youth-fee-free/evaluate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&input).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["reason"],
        json!("Applicants must be at least 17 years old.")
    );
}

#[tokio::test]
async fn programs_route_lists_catalog_in_order() {
    let router = funding_router_with_service(build_service());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/funding/programs")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .expect("program list")
        .iter()
        .filter_map(|program| program["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "nsw-smart-and-skilled",
            "nsw-youth-fee-free",
            "vic-skills-first",
            "nsw-employer-traineeship"
        ]
    );
}
