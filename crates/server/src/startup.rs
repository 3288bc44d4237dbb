use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use dotenvy::dotenv;
use service::shopping::repo::SeaOrmShoppingRepository;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::{errors::StartupError, routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the store and wrap it in handler state. The `shopping` table must already exist.
pub async fn build_state(cfg: &DatabaseConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    Ok(ServerState::with_repository(Arc::new(SeaOrmShoppingRepository::new(db))))
}

pub fn build_app(state: ServerState, cfg: &AppConfig) -> Router {
    routes::build_router(state, build_cors(), &cfg.server.frontend_dir)
}

/// Public entry: load config, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::check_frontend_dir(&cfg.server.frontend_dir).await;

    let state = build_state(&cfg.database).await?;
    let app = build_app(state, &cfg);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    info!(%addr, "starting shopping list server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(event = "stop", "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(event = "signal_error", error = %e, "failed to listen for Ctrl+C");
        // keep serving; without a signal handler there is no clean stop
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}
