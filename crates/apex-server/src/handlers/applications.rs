//! Application submission and listing handlers.

use apex_core::models::application::{CreateApplication, NewApplication};
use apex_core::repository::{ApplicationRepository, DatabaseProbe};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tracing::{error, info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{ApplicationResponse, ApplyResponse, ListApplicationsQuery},
    state::AppState,
};

/// `POST /apply`. Every failure, including a failed insert, is a 400.
pub async fn apply<R, P>(
    State(state): State<AppState<R, P>>,
    payload: Result<Json<CreateApplication>, JsonRejection>,
) -> ApiResult<Json<ApplyResponse>>
where
    R: ApplicationRepository,
    P: DatabaseProbe,
{
    let Json(input) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected application payload");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let record = NewApplication::new(input)
        .inspect_err(|e| warn!(error = %e, "Invalid application"))?;

    let id = state.applications.create(record).await.map_err(|e| {
        error!(error = %e, "Failed to store application");
        ApiError::bad_request(e)
    })?;

    info!(id = %id, "Application received");

    Ok(Json(ApplyResponse { ok: true, id }))
}

/// `GET /applications?limit=N`.
pub async fn list_applications<R, P>(
    State(state): State<AppState<R, P>>,
    query: Result<Query<ListApplicationsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ApplicationResponse>>>
where
    R: ApplicationRepository,
    P: DatabaseProbe,
{
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let applications = state.applications.list(query.limit).await.map_err(|e| {
        error!(error = %e, limit = query.limit, "Failed to list applications");
        ApiError::internal(e)
    })?;

    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}
