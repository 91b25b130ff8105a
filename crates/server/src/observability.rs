use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "menu_catalog_http_requests_total",
        "Total HTTP requests handled",
        &["method", "status"]
    )
    .expect("register http_requests_total")
});

pub static ENTITIES_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "menu_catalog_entities_created_total",
        "Total catalog entities created",
        &["entity"]
    )
    .expect("register entities_created_total")
});

pub static ENTITIES_DELETED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "menu_catalog_entities_deleted_total",
        "Total catalog entities deleted (cascaded children not counted)",
        &["entity"]
    )
    .expect("register entities_deleted_total")
});

pub fn record_created(entity: &str) {
    ENTITIES_CREATED_TOTAL.with_label_values(&[entity]).inc();
}

pub fn record_deleted(entity: &str) {
    ENTITIES_DELETED_TOTAL.with_label_values(&[entity]).inc();
}

/// Middleware counting every response by method and status.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let resp = next.run(req).await;
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), resp.status().as_str()])
        .inc();
    resp
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
