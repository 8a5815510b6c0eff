//! HTTP server initialization and runtime setup.
//!
//! Handles the SQLite pool, migrations, service wiring and the Axum server
//! lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{
    SqliteCompanyRepository, SqliteFinancialRepository, SqliteUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::application::services::{AnalyticsService, AuthService};

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the store file if missing)
/// - Schema migrations
/// - Repository and service wiring
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the store cannot be opened, migrations fail, or the
/// listener cannot bind. Store connectivity failure is fatal by design;
/// nothing downstream can recover from it.
pub async fn run(config: Config) -> Result<()> {
    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(connect_options)
        .await?;
    tracing::info!(database_url = %config.database_url, "Connected to store");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let financial_repository = Arc::new(SqliteFinancialRepository::new(pool.clone()));
    let company_repository = Arc::new(SqliteCompanyRepository::new(pool.clone()));
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));

    let analytics_service = Arc::new(AnalyticsService::new(
        financial_repository,
        company_repository,
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        config.session_signing_secret.clone(),
        config.session_ttl_seconds,
    ));

    let state = AppState::new(analytics_service, auth_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
