//! Integration tests for the HTTP layer.
//!
//! These drive the real router with `tower::ServiceExt::oneshot`; no
//! socket is bound.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pogoda_cities::{CityCatalog, SuggestionEngine};
use pogoda_core::Theme;
use pogoda_server::{router, AppState};
use tower::ServiceExt;

/// Router over the default catalog with a throwaway static directory.
fn app() -> (Router, tempfile::TempDir) {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<html>pogoda</html>").unwrap();

    let engine = SuggestionEngine::new(CityCatalog::default_cities());
    let state = AppState::new(engine, Theme::Light);
    (router(state, static_dir.path()), static_dir)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_cities_prefix_query() {
    let (app, _static_dir) = app();

    // "мо", percent-encoded
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cities?q=%D0%BC%D0%BE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!(["Москва"]));
}

#[tokio::test]
async fn test_cities_substring_query_ordered_by_length() {
    let (app, _static_dir) = app();

    // "ск" matches three cities as a substring
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cities?q=%D1%81%D0%BA")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!(["Москва", "Хабаровск", "Благовещенск"])
    );
}

#[tokio::test]
async fn test_cities_short_query_is_empty_ok() {
    let (app, _static_dir) = app();

    // single character "м": valid response, no matches, never an error
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cities?q=%D0%BC")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_cities_missing_query_parameter() {
    let (app, _static_dir) = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_cities_unmatched_query() {
    let (app, _static_dir) = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cities?q=xyz123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_set_theme_sets_cookie() {
    let (app, _static_dir) = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/theme")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"theme":"dark"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("theme=dark"));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Max-Age=604800"));
    assert!(set_cookie.contains("Path=/"));

    assert_eq!(
        body_json(response).await,
        serde_json::json!({"status": "success", "theme": "dark"})
    );
}

#[tokio::test]
async fn test_get_theme_reads_cookie() {
    let (app, _static_dir) = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/theme")
                .header(header::COOKIE, "theme=dark")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"theme": "dark"}));
}

#[tokio::test]
async fn test_get_theme_defaults_without_cookie() {
    let (app, _static_dir) = app();

    let response = app
        .oneshot(Request::builder().uri("/api/theme").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"theme": "light"}));
}

#[tokio::test]
async fn test_get_theme_ignores_unknown_cookie_value() {
    let (app, _static_dir) = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/theme")
                .header(header::COOKIE, "theme=neon")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"theme": "light"}));
}

#[tokio::test]
async fn test_set_theme_rejects_unknown_value() {
    let (app, _static_dir) = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/theme")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"theme":"neon"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_index_served_from_static_dir() {
    let (app, _static_dir) = app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<html>pogoda</html>");
}
