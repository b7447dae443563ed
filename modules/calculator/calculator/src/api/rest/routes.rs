use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::domain::Service;

use super::handlers;

/// Mount the calculator endpoints on `router`.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/calculate", post(handlers::calculate))
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(handlers::openapi))
        .layer(Extension(service))
}
