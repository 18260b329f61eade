use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use configs::{AppConfig, CorsConfig};
use migration::MigratorTrait;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Cross-origin access is restricted to the configured allow-list. With
/// credentials permitted a wildcard is not allowed, so methods and headers
/// mirror whatever the preflight request asks for.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("invalid cors origin '{}': {}", o, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Load the config file named by `CONFIG_PATH` (default `config.toml`).
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_config_from(&path)
}

/// A missing file falls back to defaults plus `DATABASE_URL`. A file that
/// exists but fails to parse or validate aborts startup instead of silently
/// running without the operator's settings.
fn load_config_from(path: &str) -> Result<AppConfig, StartupError> {
    let mut cfg = if std::path::Path::new(path).exists() {
        configs::load_from_file(path)
            .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?
    } else {
        AppConfig::default()
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Public entry: build the app and run the HTTP server. The caller loads the
/// config once (see `load_config`) and hands it in.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // Pool is opened here, handed to the service layer through router state,
    // and closed after the server stops.
    let db = models::db::connect(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");

    let state = ServerState { db: db.clone() };
    let cors = build_cors(&cfg.cors)?;
    let app: Router = routes::build_router(state, cors);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting equitrack server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
