//! REST surface tests: routes, status codes, bodies and middleware.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use calculator::{CalculatorConfig, Service, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    build_router(Arc::new(Service::new()), &CalculatorConfig::default()).unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn calculate(body: Value) -> (StatusCode, Value) {
    send(app(), post_json(&body.to_string())).await
}

#[tokio::test]
async fn addition_returns_integral_result() {
    let (status, body) = calculate(json!({"num1": 2, "num2": 3, "operator": "+"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": 5}));
}

#[tokio::test]
async fn fractional_result_is_float() {
    let (status, body) = calculate(json!({"num1": 3, "num2": 2, "operator": "/"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64(), Some(1.5));
}

#[tokio::test]
async fn numeric_strings_are_accepted() {
    let (status, body) = calculate(json!({"num1": "4", "num2": "2.5", "operator": "*"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": 10}));
}

#[tokio::test]
async fn division_by_zero_is_rejected() {
    let (status, body) = calculate(json!({"num1": 10, "num2": 0, "operator": "/"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], "Error: Division by zero");
    assert_eq!(body["code"], "division_by_zero");
}

#[tokio::test]
async fn invalid_operator_is_rejected_before_operands() {
    let (status, body) = calculate(json!({"num1": "abc", "num2": 1, "operator": "%"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], "Error: Invalid operator");
    assert_eq!(body["code"], "invalid_operator");
}

#[tokio::test]
async fn bad_operands_are_rejected() {
    for payload in [
        json!({"num1": "", "num2": 1, "operator": "+"}),
        json!({"num1": 1, "num2": "abc", "operator": "+"}),
        json!({"num1": null, "num2": 1, "operator": "+"}),
        json!({"num2": 1, "operator": "-"}),
        json!({"num1": [1], "num2": 1, "operator": "*"}),
    ] {
        let (status, body) = calculate(payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body["result"], "Error: Invalid number input");
        assert_eq!(body["code"], "invalid_operand");
    }
}

#[tokio::test]
async fn overflow_is_out_of_range() {
    let (status, body) = calculate(json!({"num1": 1e308, "num2": 10, "operator": "*"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "result_out_of_range");
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let (status, body) = send(app(), post_json("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], "Error: Malformed request body");
    assert_eq!(body["code"], "malformed_request");
}

#[tokio::test]
async fn missing_content_type_is_malformed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/calculate")
        .body(Body::from(r#"{"num1":1,"num2":2,"operator":"+"}"#))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "malformed_request");
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let config = CalculatorConfig {
        max_body_bytes: 64,
        ..CalculatorConfig::default()
    };
    let app = build_router(Arc::new(Service::new()), &config).unwrap();
    let padding = "x".repeat(128);
    let body = json!({"num1": 1, "num2": 2, "operator": "+", "pad": padding}).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn oversized_body_without_length_header_is_refused() {
    let config = CalculatorConfig {
        max_body_bytes: 64,
        ..CalculatorConfig::default()
    };
    let app = build_router(Arc::new(Service::new()), &config).unwrap();
    let padding = "x".repeat(128);
    let body = json!({"num1": 1, "num2": 2, "operator": "+", "pad": padding}).to_string();
    let response = app.oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn get_on_calculate_is_not_allowed() {
    let request = Request::builder()
        .uri("/calculate")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let request = Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/calculate"]["post"].is_object());
}

#[tokio::test]
async fn request_id_is_generated_and_propagated() {
    let response = app()
        .oneshot(post_json(r#"{"num1":1,"num2":1,"operator":"+"}"#))
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/calculate")
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn cors_disabled_sends_no_headers() {
    let mut config = CalculatorConfig::default();
    config.cors.enabled = false;
    let app = build_router(Arc::new(Service::new()), &config).unwrap();

    let mut request = post_json(r#"{"num1":1,"num2":1,"operator":"+"}"#);
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://localhost:8080".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();
    assert!(!response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
