//! Health check endpoint, mounted on both services
//!
//! Reports which service answered, so a misrouted probe is obvious.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

fn health(service: &'static str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health for the named service ("blog" or "dbcheck")
pub fn router<S>(service: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(move || async move { health(service) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_names_the_service() {
        let Json(body) = health("dbcheck");
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "dbcheck");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
