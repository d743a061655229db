//! pmdash - Project Management Dashboard backend
//!
//! Serves the CRUD API over SQLite and drives KPI classification
//! through a local generation endpoint.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pmdash::config::Args;
use pmdash::services::KpiClient;
use pmdash::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pmdash=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification immediately after tracing init
    info!(
        "Starting pmdash v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    info!("Database: {}", args.database.display());
    let pool = pmdash::db::init_database(&args.database).await?;

    info!(
        "KPI classification endpoint: {} (model: {})",
        args.generate_url, args.model
    );
    let kpi_client = KpiClient::new(args.generate_url, args.model);

    let state = AppState::new(pool, kpi_client);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("pmdash listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
