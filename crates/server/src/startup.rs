use std::{future::Future, net::SocketAddr};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info, warn};

use crate::{routes, state::ServerState};

/// CORS for the configured origins; an empty list is permissive.
pub fn build_cors(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Config file first, then `SERVER_*`/`DATABASE_URL` env vars, with sensible fallbacks
pub fn load_config() -> AppConfig {
    match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file unusable; using environment");
            let mut cfg = AppConfig::from_env();
            if cfg.database.url.trim().is_empty() {
                cfg.database.url = models::db::DATABASE_URL.clone();
            }
            cfg
        }
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect, migrate when enabled, and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }
    let state = ServerState::new(db);
    Ok(routes::build_router(state, build_cors(&cfg.server.cors_allowed_origins)))
}

/// Resolves once `signal` fires. A signal listener that fails never
/// resolves, so the server keeps running instead of draining at startup.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!(event = "signal_error", error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

/// Run the HTTP server, draining in-flight requests once `shutdown` resolves.
pub async fn run_with_shutdown<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let cfg = load_config();
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "car rental server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server drained");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 8090;
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "0.0.0.0:8090");
    }

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }

    #[test]
    fn cors_builds_for_lists_and_empty() {
        let _ = build_cors(&[]);
        let _ = build_cors(&["http://localhost:3000".to_string(), "bad\nvalue".to_string()]);
    }

    #[tokio::test]
    async fn shutdown_follows_signal() {
        let fired = tokio::time::timeout(Duration::from_millis(200), shutdown_on(async { Ok::<(), std::io::Error>(()) })).await;
        assert!(fired.is_ok());
    }

    #[tokio::test]
    async fn broken_signal_listener_never_shuts_down() {
        let failing = async { Err::<(), _>(std::io::Error::other("no signal handler")) };
        let fired = tokio::time::timeout(Duration::from_millis(200), shutdown_on(failing)).await;
        assert!(fired.is_err());
    }
}
