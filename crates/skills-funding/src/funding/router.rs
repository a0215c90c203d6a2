use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::calculator::CalculationResult;
use super::domain::{FundingCalculatorInput, Jurisdiction};
use super::service::{FundingService, FundingServiceError};
use super::summary::FundingSummary;

/// Router builder exposing the calculator, single-program evaluation, and catalog listing.
pub fn funding_router(service: Arc<FundingService>) -> Router {
    Router::new()
        .route("/api/v1/funding/calculate", post(calculate_handler))
        .route("/api/v1/funding/programs", get(programs_handler))
        .route(
            "/api/v1/funding/programs/:program_id/evaluate",
            post(evaluate_handler),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct CalculationResponse {
    pub(crate) result: CalculationResult,
    pub(crate) summary: FundingSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluationResponse {
    pub(crate) program_id: String,
    pub(crate) eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProgramsQuery {
    #[serde(default)]
    pub(crate) jurisdiction: Option<String>,
}

pub(crate) async fn calculate_handler(
    State(service): State<Arc<FundingService>>,
    axum::Json(input): axum::Json<FundingCalculatorInput>,
) -> Response {
    match service.calculate(input) {
        Ok(result) => {
            let summary = result.summary();
            (
                StatusCode::OK,
                axum::Json(CalculationResponse { result, summary }),
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<FundingService>>,
    Path(program_id): Path<String>,
    axum::Json(input): axum::Json<FundingCalculatorInput>,
) -> Response {
    match service.evaluate(&program_id, input) {
        Ok(verdict) => {
            let body = EvaluationResponse {
                program_id,
                eligible: verdict.is_eligible(),
                reason: verdict.reason(),
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn programs_handler(
    State(service): State<Arc<FundingService>>,
    Query(query): Query<ProgramsQuery>,
) -> Response {
    let jurisdiction = match query.jurisdiction.as_deref().map(str::parse::<Jurisdiction>) {
        None => None,
        Some(Ok(jurisdiction)) => Some(jurisdiction),
        Some(Err(error)) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let programs = service.programs(jurisdiction);
    (StatusCode::OK, axum::Json(programs)).into_response()
}

fn error_response(error: FundingServiceError) -> Response {
    let status = match error {
        FundingServiceError::Contract(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FundingServiceError::UnknownProgram(_) => StatusCode::NOT_FOUND,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
