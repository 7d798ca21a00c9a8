//! Axum server setup
//!
//! Two independent services share this skeleton:
//! - blog: post list, creation form and JSON API
//! - dbcheck: database connectivity check
//!
//! Both get localhost-only CORS by default, request tracing, and graceful
//! shutdown on SIGTERM/Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::FailureStatus;
use crate::db::{PostStore, VersionSource};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl ServerConfig {
    /// Default config for the blog (127.0.0.1:8000)
    pub fn blog() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_permissive: false,
        }
    }

    /// Default config for the connectivity check (127.0.0.1:5000)
    pub fn dbcheck() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            cors_permissive: false,
        }
    }
}

/// Shared state for the blog service
#[derive(Clone)]
pub struct BlogState {
    pub posts: Arc<dyn PostStore>,
}

impl BlogState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }
}

/// Shared state for the connectivity check service
#[derive(Clone)]
pub struct DbCheckState {
    pub source: Arc<dyn VersionSource>,
    pub failure_status: FailureStatus,
}

impl DbCheckState {
    pub fn new(source: Arc<dyn VersionSource>, failure_status: FailureStatus) -> Self {
        Self {
            source,
            failure_status,
        }
    }
}

/// Build the blog router with all routes and middleware.
pub fn blog_router(state: BlogState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::health::router("blog"))
        .merge(routes::posts::router())
        .merge(routes::api::router())
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Build the connectivity check router with all routes and middleware.
pub fn dbcheck_router(state: DbCheckState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::health::router("dbcheck"))
        .merge(routes::version::router())
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the blog service until shutdown.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let state = BlogState::new(Arc::new(PgPostStore::new(pool)));
/// run_blog(state, ServerConfig::blog()).await?;
/// ```
pub async fn run_blog(state: BlogState, config: ServerConfig) -> Result<(), ServerError> {
    let app = blog_router(state, &config);
    serve(app, config.bind_addr, "blog").await
}

/// Run the connectivity check service until shutdown.
pub async fn run_dbcheck(state: DbCheckState, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(failure_status = %state.failure_status, "Connectivity check configured");
    let app = dbcheck_router(state, &config);
    serve(app, config.bind_addr, "dbcheck").await
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }

    let port = config.bind_addr.port();
    let origins: Vec<HeaderValue> = [
        format!("http://localhost:{}", port),
        format!("http://127.0.0.1:{}", port),
    ]
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn serve(app: Router, bind_addr: SocketAddr, service: &'static str) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(service, "Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(service, "Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
