//! Connectivity check page
//!
//! GET / - plain-text database server version, or the error that stopped us
//! from reading it.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::config::FailureStatus;
use crate::db::VersionError;
use crate::http::server::DbCheckState;

/// Status code for a failed check under the given policy
pub fn failure_status_code(err: &VersionError, policy: FailureStatus) -> StatusCode {
    match (policy, err) {
        (FailureStatus::Legacy, _) => StatusCode::OK,
        (FailureStatus::Strict, VersionError::Connect(_)) => StatusCode::SERVICE_UNAVAILABLE,
        (FailureStatus::Strict, VersionError::Query(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /
async fn index(State(state): State<Arc<DbCheckState>>) -> Response {
    match state.source.server_version().await {
        Ok(version) => {
            tracing::debug!(%version, "Connectivity check passed");
            (StatusCode::OK, format!("Database version: {}", version)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, kind = ?e, "Connectivity check failed");
            let status = failure_status_code(&e, state.failure_status);
            (status, format!("An error occurred: {}", e)).into_response()
        }
    }
}

/// Connectivity check routes
pub fn router() -> Router<Arc<DbCheckState>> {
    Router::new().route("/", get(index))
}
