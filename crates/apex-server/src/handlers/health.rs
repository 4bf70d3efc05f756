//! Liveness and database connectivity handlers.

use apex_core::repository::{ApplicationRepository, DatabaseProbe};
use axum::{Json, extract::State};
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    models::{DatabaseStatusResponse, HealthResponse},
    state::AppState,
};

/// `GET /health`. Never touches the database.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /test`. Enumerates collections; an empty database is still "ok".
pub async fn database_status<R, P>(
    State(state): State<AppState<R, P>>,
) -> ApiResult<Json<DatabaseStatusResponse>>
where
    R: ApplicationRepository,
    P: DatabaseProbe,
{
    let collections = state.probe.collections().await.map_err(|e| {
        error!(error = %e, "Database connectivity check failed");
        ApiError::internal(e)
    })?;

    Ok(Json(DatabaseStatusResponse {
        database: "ok",
        collections,
    }))
}
