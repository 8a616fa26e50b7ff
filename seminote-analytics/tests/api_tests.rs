//! Integration tests for the analytics service HTTP surface

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt; // for `oneshot` method

use seminote_analytics::build_router;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_returns_exact_banner() {
    let response = build_router().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    assert_eq!(
        bytes,
        "📊 Seminote Analytics Service is running! Tracking piano learning progress."
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = build_router().oneshot(get("/analytics/report")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
