//! API route definitions.

use apex_core::repository::{ApplicationRepository, DatabaseProbe};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{applications, health},
    state::AppState,
};

/// Build the router with permissive CORS and per-request tracing.
pub fn router<R, P>(state: AppState<R, P>) -> Router
where
    R: ApplicationRepository + 'static,
    P: DatabaseProbe + 'static,
{
    Router::new()
        .route("/health", get(health::health))
        .route("/test", get(health::database_status::<R, P>))
        .route("/apply", post(applications::apply::<R, P>))
        .route("/applications", get(applications::list_applications::<R, P>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
