use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use matelas::{LayoutService, export::CSV_HEADER};
use matelas_server::router;

fn app() -> Router {
    router(Arc::new(LayoutService::default()))
}

fn standard_rectangle() -> Value {
    json!({"x": 220, "y": 240, "min_dist_x": 30, "min_dist_y": 40, "edge_distance": 15})
}

async fn post(uri: &str, content_type: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();
    app().oneshot(request).await.unwrap()
}

async fn post_json(uri: &str, body: &Value) -> Response {
    post(uri, "application/json", body.to_string()).await
}

async fn get(uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

async fn assert_error(response: Response, status: StatusCode, needle: &str) {
    assert_eq!(response.status(), status);
    let body = body_json(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(
        message.to_lowercase().contains(needle),
        "`{message}` does not mention `{needle}`"
    );
}

#[tokio::test]
async fn index_serves_form_and_canvas() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await.to_lowercase();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("calculateur"));
    assert!(html.contains("id=\"canvas\""));
    for id in ["id=\"x\"", "id=\"y\"", "id=\"dist_x\"", "id=\"dist_y\"", "id=\"edge\""] {
        assert!(html.contains(id), "missing input {id}");
    }
    for name in ["visualizepoints", "updateinfo", "updatevisualization", "/calculate", "/download_csv"] {
        assert!(html.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn health_reports_service() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({"status": "healthy", "service": "matelas-calc"}));
}

#[tokio::test]
async fn calculate_returns_points_and_rectangle() {
    let response = post_json("/calculate", &standard_rectangle()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body = body_json(response).await;
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 72);
    assert_eq!(points[0], json!([15.0, 15.0]));
    assert_eq!(body["rectangle"], json!({"x": 220.0, "y": 240.0}));
}

#[tokio::test]
async fn calculate_uses_defaults_for_missing_distances() {
    let response = post_json("/calculate", &json!({"x": 220, "y": 240})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["points"].as_array().unwrap().len(), 72);
}

#[tokio::test]
async fn calculate_accepts_numeric_strings_and_decimals() {
    let response = post_json(
        "/calculate",
        &json!({"x": "220", "y": "240", "min_dist_x": "30", "min_dist_y": "40", "edge_distance": "15"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["rectangle"], json!({"x": 220.0, "y": 240.0}));

    let response = post_json(
        "/calculate",
        &json!({"x": 220.5, "y": 240.7, "min_dist_x": 30.2, "min_dist_y": 40.8, "edge_distance": 15.3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["rectangle"]["x"], 220.5);
    assert_eq!(body["rectangle"]["y"], 240.7);
}

#[tokio::test]
async fn calculate_handles_large_rectangles() {
    let response = post_json(
        "/calculate",
        &json!({"x": 5000, "y": 3000, "min_dist_x": 100, "min_dist_y": 150, "edge_distance": 50}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_json(response).await["points"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn calculate_rejects_invalid_values() {
    assert_error(
        post_json("/calculate", &json!({"x": 220})).await,
        StatusCode::BAD_REQUEST,
        "invalid",
    )
    .await;
    assert_error(
        post_json("/calculate", &json!({"x": "not_a_number", "y": 240})).await,
        StatusCode::BAD_REQUEST,
        "invalid",
    )
    .await;
    assert_error(
        post_json("/calculate", &json!({"x": -10, "y": 240})).await,
        StatusCode::BAD_REQUEST,
        "positive",
    )
    .await;
    assert_error(
        post_json("/calculate", &json!({"x": 0, "y": 240})).await,
        StatusCode::BAD_REQUEST,
        "positive",
    )
    .await;
    assert_error(
        post_json("/calculate", &json!({"x": 220, "y": 240, "min_dist_x": -5})).await,
        StatusCode::BAD_REQUEST,
        "positive",
    )
    .await;
    assert_error(
        post_json("/calculate", &json!({"x": 220, "y": 240, "min_dist_x": 0})).await,
        StatusCode::BAD_REQUEST,
        "positive",
    )
    .await;
}

#[tokio::test]
async fn calculate_rejects_malformed_bodies() {
    assert_error(
        post("/calculate", "application/json", "invalid json").await,
        StatusCode::BAD_REQUEST,
        "invalid",
    )
    .await;
    assert_error(
        post("/calculate", "application/json", "").await,
        StatusCode::BAD_REQUEST,
        "invalid",
    )
    .await;
    assert_error(
        post("/calculate", "application/json", r#"{"x": true, "y": 240}"#).await,
        StatusCode::BAD_REQUEST,
        "invalid",
    )
    .await;
}

#[tokio::test]
async fn calculate_requires_json_content_type() {
    let response = post("/calculate", "text/plain", standard_rectangle().to_string()).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn calculate_rejects_overly_dense_layouts() {
    assert_error(
        post_json(
            "/calculate",
            &json!({"x": 100000, "y": 100000, "min_dist_x": 0.01, "min_dist_y": 0.01, "edge_distance": 1}),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "limit",
    )
    .await;
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let first = body_json(post_json("/calculate", &standard_rectangle()).await).await;
    for _ in 0..4 {
        let next = body_json(post_json("/calculate", &standard_rectangle()).await).await;
        assert_eq!(next, first);
    }
}

#[tokio::test]
async fn download_csv_is_an_attachment() {
    let response = post_json("/download_csv", &standard_rectangle()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=rectangle_points.csv"
    );

    let csv = body_text(response).await;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER.join(",").as_str()));
    assert_eq!(lines.next(), Some("1,15,15"));
    assert_eq!(lines.next(), Some("2,46.67,15"));
    assert_eq!(csv.lines().count(), 73);
}

#[tokio::test]
async fn download_csv_validates_like_calculate() {
    assert_error(
        post_json("/download_csv", &json!({"x": 220, "y": 240, "edge_distance": 0})).await,
        StatusCode::BAD_REQUEST,
        "positive",
    )
    .await;
}
