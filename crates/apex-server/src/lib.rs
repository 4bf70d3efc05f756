//! Apex Server — HTTP layer for the lead-generation applications API.
//!
//! Routes:
//! - `GET /health` — static liveness indicator
//! - `GET /test` — database connectivity check
//! - `POST /apply` — submit an application
//! - `GET /applications?limit=N` — list submitted applications

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use apex_db::{
    DbManager,
    repository::{SurrealApplicationRepository, SurrealDatabaseProbe},
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use routes::router;
pub use state::AppState;

/// Load configuration, connect to the database and serve until a shutdown
/// signal arrives.
pub async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    info!("Connecting to database...");
    let manager = DbManager::connect(&config.db).await?;
    let db = manager.client().clone();

    let state = AppState::new(
        SurrealApplicationRepository::new(db.clone()),
        SurrealDatabaseProbe::new(db),
    );
    let app = router(state);

    let address = config.bind_address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
