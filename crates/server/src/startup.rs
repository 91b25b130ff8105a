use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; shutting down");
    }
    info!("shutdown signal received");
}

/// Public entry: serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    run_until(shutdown_signal()).await
}

/// Load config, connect the pool, apply migrations, then serve until
/// `shutdown` resolves. In-flight requests drain before the pool closes.
pub async fn run_until<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.server.run_migrations {
        Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Runtime(format!("migrations failed: {e}")))?;
        info!("migrations applied");
    }

    let state = ServerState::new(db.clone());
    let app: Router = routes::build_router(state, build_cors(), cfg.server.request_timeout());

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "menu catalog listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    db.close().await?;
    info!("database pool closed");
    Ok(())
}
