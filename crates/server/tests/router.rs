//! Router-level checks that need no database: the handlers under test either
//! fail before touching the pool or hit a mock pool that returns errors.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

fn router_with(db: MockDatabase) -> Router {
    let state = ServerState::new(db.into_connection());
    routes::build_router(state, CorsLayer::very_permissive(), Duration::from_secs(5))
}

fn app() -> Router {
    router_with(MockDatabase::new(DatabaseBackend::Postgres))
}

/// First query fails as if the database were unreachable.
fn failing_app() -> Router {
    router_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())]),
    )
}

async fn send(req: Request<Body>) -> (StatusCode, String) {
    send_to(app(), req).await
}

async fn send_to(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_ok() {
    let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["status"], "ok");
}

#[tokio::test]
async fn metrics_count_requests() {
    send(Request::get("/health").body(Body::empty()).unwrap()).await;
    let (status, body) = send(Request::get("/metrics").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("menu_catalog_http_requests_total"));
}

#[tokio::test]
async fn openapi_document_served() {
    let (status, body) = send(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert!(v["paths"]["/api/v1/menus"].is_object());
}

#[tokio::test]
async fn malformed_json_is_client_error() {
    let (status, body) = send(json_request(Method::POST, "/api/v1/menus", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["error"], "Invalid Request Body");
}

#[tokio::test]
async fn missing_field_is_unprocessable() {
    let (status, _) = send(json_request(Method::POST, "/api/v1/menus/", r#"{"title":"Lunch"}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn blank_title_is_unprocessable() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/menus",
        r#"{"title":"   ","description":"x"}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["error"], "Validation Error");
}

#[tokio::test]
async fn nul_in_title_is_unprocessable() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/menus",
        r#"{"title":"a\u0000b","description":"x"}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["error"], "Validation Error");
}

#[tokio::test]
async fn unknown_update_field_is_unprocessable() {
    let (status, _) = send(json_request(Method::PATCH, "/api/v1/menus/abc", r#"{"id":"other"}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn database_failure_is_internal_error() {
    let req = Request::get("/api/v1/menus/abc").body(Body::empty()).unwrap();
    let (status, body) = send_to(failing_app(), req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["error"], "Internal Server Error");
    assert!(v.get("detail").is_none());
    assert!(!body.contains("connection refused"));
}

#[tokio::test]
async fn trailing_slash_routes_resolve() {
    // Both forms reach the handler, which fails on the mock pool.
    for uri in ["/api/v1/menus", "/api/v1/menus/"] {
        let (status, _) = send_to(failing_app(), Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(Request::get("/api/v1/nope").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
