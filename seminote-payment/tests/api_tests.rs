//! Integration tests for the payment service HTTP surface

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt; // for `oneshot` method

use seminote_payment::build_router;

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
        "💳 Seminote Payment Service is running! Processing piano lesson subscriptions."
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = build_router().oneshot(get("/subscriptions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
