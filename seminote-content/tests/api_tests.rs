//! Integration tests for the content service HTTP surface

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt; // for `oneshot` method

use seminote_content::build_router;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

#[tokio::test]
async fn health_returns_exact_banner() {
    let response = build_router().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response.into_body()).await,
        "🎼 Seminote Content Service is running! Delivering world-class piano education content."
    );
}

#[tokio::test]
async fn content_status_reports_empty_catalog() {
    let response = build_router().oneshot(get("/content/status")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response.into_body()).await,
        "📚 Content Service: ACTIVE | Lessons: 0 | Sheet Music: 0 | Interactive Exercises: 0"
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = build_router().oneshot(get("/lessons/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
