use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calculator_sdk::{CalculationOutcome, CalculationResponse};

use crate::domain::DomainError;

/// Every domain error is a client error: 400 with the failure body.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        tracing::debug!(code = %kind, error = %self, "calculation rejected");

        let body = CalculationResponse::from(CalculationOutcome::failure(kind));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Map a body extraction failure: 413 passes through, anything else is a
/// malformed request.
#[must_use]
pub fn reject_body(rejection: JsonRejection) -> Response {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::debug!(error = %rejection.body_text(), "request body over limit");
        return rejection.into_response();
    }
    DomainError::MalformedRequest(rejection.body_text()).into_response()
}
