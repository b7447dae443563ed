use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use calculator_sdk::{CalculationOutcome, CalculationResponse};
use utoipa::OpenApi;

use crate::domain::{DomainError, Service};

use super::dto::{CalculateRequest, HealthResponse};
use super::error::reject_body;
use super::openapi::ApiDoc;

/// Evaluate one binary operation.
///
/// # Errors
/// Any refusal is rendered as a 400 failure body; a body over the size limit
/// is refused with 413.
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Numeric result", body = CalculationResponse),
        (
            status = 400,
            description = "Validation or arithmetic failure",
            body = CalculationResponse
        ),
        (status = 413, description = "Request body too large"),
    )
)]
pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, Response> {
    let Json(req) = payload.map_err(reject_body)?;

    let value = svc
        .calculate(&req.into())
        .map_err(DomainError::into_response)?;
    Ok(Json(CalculationOutcome::Success { value }.into()))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "calculator",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
