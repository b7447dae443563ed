use calculator_sdk::{CalculationResponse, ErrorKind, wire::ResultField};
use utoipa::OpenApi;

use super::dto::{CalculateRequest, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator", description = "Stateless binary arithmetic"),
    paths(super::handlers::calculate, super::handlers::health),
    components(schemas(
        CalculateRequest,
        CalculationResponse,
        ResultField,
        ErrorKind,
        HealthResponse
    )),
    tags((name = "calculator", description = "Calculation endpoints"))
)]
pub struct ApiDoc;
