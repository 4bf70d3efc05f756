//! Apex Server — application entry point.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("apex=info".parse().unwrap()))
        .json()
        .init();

    tracing::info!("Starting Apex API server...");

    if let Err(e) = apex_server::run().await {
        tracing::error!(error = %e, "Apex API server failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Apex API server stopped.");
    ExitCode::SUCCESS
}
