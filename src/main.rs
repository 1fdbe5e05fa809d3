//! PayrollMaster API server: loads settings, prepares the employee table, serves HTTP.

use payroll_api::{app, ensure_schema, AppState, PgEmployeeStore, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.default_log_filter())),
        )
        .init();
    tracing::debug!(?settings, "settings loaded");

    let store = PgEmployeeStore::connect(&settings).await?;
    ensure_schema(store.pool()).await?;

    let addr = settings.bind_address();
    tracing::info!(environment = %settings.environment, "starting PayrollMaster API");
    let state = AppState::new(settings, Arc::new(store));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
