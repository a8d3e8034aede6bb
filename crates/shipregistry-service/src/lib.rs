//! Ship registry HTTP service.
//!
//! HTTP glue over `shipregistry-lib`: handlers decode parameters, call the
//! registry, and format responses; all business logic stays in the library.
//!
//! # Endpoints
//!
//! - `GET    /rest/ships` - List ships with optional filters, ordering, and
//!   pagination
//! - `GET    /rest/ships/count` - Count ships matching the same filters
//! - `POST   /rest/ships` - Register a new ship
//! - `GET    /rest/ships/{id}` - Fetch a ship
//! - `POST   /rest/ships/{id}` - Partially update a ship
//! - `DELETE /rest/ships/{id}` - Remove a ship
//! - `GET    /metrics` - Prometheus metrics endpoint
//! - `GET    /health/live` / `GET /health/ready` - Kubernetes probes

#![deny(warnings)]

pub mod handlers;
pub mod health;
pub mod logging;
pub mod metrics;
pub mod params;
pub mod problem;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use problem::ProblemDetails;
pub use state::AppState;

/// Build the service router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/rest/ships",
            get(handlers::list_ships).post(handlers::create_ship),
        )
        .route("/rest/ships/count", get(handlers::count_ships))
        .route(
            "/rest/ships/{id}",
            get(handlers::find_ship)
                .post(handlers::update_ship)
                .delete(handlers::delete_ship),
        )
        .route("/metrics", get(metrics::metrics_handler))
        .route("/health/live", get(health::health_live))
        .route("/health/ready", get(health::health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
