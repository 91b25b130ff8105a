use std::time::Duration;

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::observability;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod dishes;
pub mod menus;
pub mod submenus;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

/// Register `path` both with and without a trailing slash.
fn route_both(
    router: Router<ServerState>,
    path: &str,
    method_router: MethodRouter<ServerState>,
) -> Router<ServerState> {
    let trimmed = path.trim_end_matches('/');
    router
        .route(&format!("{}/", trimmed), method_router.clone())
        .route(trimmed, method_router)
}

fn catalog_routes() -> Router<ServerState> {
    let mut api = Router::new();
    api = route_both(api, "/menus", get(menus::list).post(menus::create));
    api = route_both(
        api,
        "/menus/:menu_id",
        get(menus::get).put(menus::update).patch(menus::update).delete(menus::delete),
    );
    api = route_both(
        api,
        "/menus/:menu_id/submenus",
        get(submenus::list).post(submenus::create),
    );
    api = route_both(
        api,
        "/menus/:menu_id/submenus/:submenu_id",
        get(submenus::get).put(submenus::update).patch(submenus::update).delete(submenus::delete),
    );
    api = route_both(
        api,
        "/menus/:menu_id/submenus/:submenu_id/dishes",
        get(dishes::list).post(dishes::create),
    );
    api = route_both(
        api,
        "/menus/:menu_id/submenus/:submenu_id/dishes/:dish_id",
        get(dishes::get).put(dishes::update).patch(dishes::update).delete(dishes::delete),
    );
    api
}

/// Build the full application router: catalog API, health, metrics and docs.
pub fn build_router(state: ServerState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public
        .nest("/api/v1", catalog_routes())
        .with_state(state)
        .layer(middleware::from_fn(observability::track_requests))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and timeouts
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
