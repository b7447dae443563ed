use std::sync::Arc;

use anyhow::Result;
use axum::{Router, extract::DefaultBodyLimit, http::HeaderName};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::api::rest::{cors::build_cors_layer, routes::register_routes};
use crate::config::CalculatorConfig;
use crate::domain::Service;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the HTTP router with its middleware stack.
///
/// Layers are registered innermost first, so the request passes through them
/// in this order: `SetRequestId` → `PropagateRequestId` → Trace → CORS → body limit.
///
/// # Errors
/// Returns an error if the CORS configuration is invalid.
pub fn build_router(service: Arc<Service>, config: &CalculatorConfig) -> Result<Router> {
    let mut router = register_routes(Router::new(), service);

    // 5) Body limit
    router = router.layer(RequestBodyLimitLayer::new(config.max_body_bytes));
    router = router.layer(DefaultBodyLimit::max(config.max_body_bytes));

    // 4) CORS
    if config.cors.enabled {
        router = router.layer(build_cors_layer(&config.cors)?);
    }

    // 3) Trace
    router = router.layer(TraceLayer::new_for_http());

    // 2) PropagateRequestId
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

    // 1) SetRequestId (registered last, runs first)
    router = router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid));

    Ok(router)
}
