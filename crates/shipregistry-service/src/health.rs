//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "degraded".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of registered ships (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ships_registered: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            ships_registered: None,
        }
    }

    /// Create a ready status with registry information.
    pub fn ready(service: &str, version: &str, ships: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            ships_registered: Some(ships),
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the service is running; does not depend on any state.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// The registry is held in memory, so readiness only reports how many ships
/// it currently holds; an empty registry is still ready.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let ships = state.registry().read().await.store().len();

    let status = HealthStatus::ready(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), ships);
    (StatusCode::OK, Json(status))
}
