//! REST handlers for the ship registry.
//!
//! Handlers stay thin: decode parameters, call the registry, map errors to
//! problem responses, record metrics. All business logic lives in
//! `shipregistry-lib`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use shipregistry_lib::{Error as LibError, Ship, ShipInput};

use crate::metrics::{record_ship_written, record_ships_listed, record_write_rejected};
use crate::params::{parse_ship_id, ShipQueryParams};
use crate::problem::{from_lib_error, ProblemDetails};
use crate::state::AppState;

/// Handle `GET /rest/ships`.
pub async fn list_ships(
    State(state): State<AppState>,
    Query(params): Query<ShipQueryParams>,
) -> Result<Json<Vec<Ship>>, ProblemDetails> {
    let request_id = generate_request_id();

    let filter = params.filter(&request_id).map_err(|problem| *problem)?;
    let page = params.page(&request_id).map_err(|problem| *problem)?;

    let ships = state.registry().read().await.list(&filter, params.order, page);
    record_ships_listed(ships.len());

    info!(
        request_id = %request_id,
        returned = ships.len(),
        order = ?params.order,
        "listed ships"
    );
    Ok(Json(ships))
}

/// Handle `GET /rest/ships/count`.
///
/// Shares filter semantics with the listing endpoint; ordering and
/// pagination parameters are ignored rather than applied.
pub async fn count_ships(
    State(state): State<AppState>,
    Query(params): Query<ShipQueryParams>,
) -> Result<Json<usize>, ProblemDetails> {
    let request_id = generate_request_id();

    let filter = params.filter(&request_id).map_err(|problem| *problem)?;
    let count = state.registry().read().await.count(&filter);

    info!(request_id = %request_id, count, "counted ships");
    Ok(Json(count))
}

/// Handle `POST /rest/ships`.
pub async fn create_ship(
    State(state): State<AppState>,
    Json(input): Json<ShipInput>,
) -> Result<Json<Ship>, ProblemDetails> {
    let request_id = generate_request_id();

    match state.registry().write().await.create(input) {
        Ok(ship) => {
            record_ship_written("create");
            info!(request_id = %request_id, id = ship.id, "ship created");
            Ok(Json(ship))
        }
        Err(error) => {
            record_write_rejected("create", rejection_reason(&error));
            Err(from_lib_error(&error, &request_id))
        }
    }
}

/// Handle `GET /rest/ships/{id}`.
pub async fn find_ship(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Ship>, ProblemDetails> {
    let request_id = generate_request_id();
    let id = parse_ship_id(&raw_id, &request_id).map_err(|problem| *problem)?;

    let ship = state
        .registry()
        .read()
        .await
        .find(id)
        .map_err(|error| from_lib_error(&error, &request_id))?;
    Ok(Json(ship))
}

/// Handle `POST /rest/ships/{id}` (partial update).
pub async fn update_ship(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<ShipInput>,
) -> Result<Json<Ship>, ProblemDetails> {
    let request_id = generate_request_id();
    let id = parse_ship_id(&raw_id, &request_id).map_err(|problem| *problem)?;

    match state.registry().write().await.update(id, input) {
        Ok(ship) => {
            record_ship_written("update");
            info!(request_id = %request_id, id, "ship updated");
            Ok(Json(ship))
        }
        Err(error) => {
            record_write_rejected("update", rejection_reason(&error));
            Err(from_lib_error(&error, &request_id))
        }
    }
}

/// Handle `DELETE /rest/ships/{id}`.
pub async fn delete_ship(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ProblemDetails> {
    let request_id = generate_request_id();
    let id = parse_ship_id(&raw_id, &request_id).map_err(|problem| *problem)?;

    match state.registry().write().await.delete(id) {
        Ok(()) => {
            record_ship_written("delete");
            info!(request_id = %request_id, id, "ship deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(error) => {
            record_write_rejected("delete", rejection_reason(&error));
            Err(from_lib_error(&error, &request_id))
        }
    }
}

fn rejection_reason(error: &LibError) -> &'static str {
    match error {
        LibError::Validation { .. } => "validation_error",
        LibError::NotFound { .. } => "not_found",
    }
}

/// Generate a unique request ID for tracing.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    format!("req-{:x}", timestamp)
}
