//! car-events - Car catalog microservice
//!
//! Serves a seeded car catalog over HTTP: list, fetch by id, and a
//! per-car server-sent-event stream emitting one event per second.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;

use car_events::{build_router, db, AppState};

/// Command-line arguments for car-events
#[derive(Parser, Debug)]
#[command(name = "car-events")]
#[command(about = "Car catalog microservice with per-car SSE event streams")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "CAR_EVENTS_PORT")]
    port: u16,

    /// Path to the SQLite database file
    #[arg(short, long, default_value = "cars.db", env = "CAR_EVENTS_DB")]
    database: PathBuf,

    /// Keep the existing catalog instead of clearing and reseeding it
    #[arg(long, env = "CAR_EVENTS_NO_SEED")]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting car-events v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let pool = db::connect(&args.database)
        .await
        .context("Failed to open car database")?;
    info!("✓ Connected to database");

    // Seeding completes before the listener binds; the first request always
    // sees the full catalog
    if args.no_seed {
        info!("Seeding disabled, keeping existing catalog");
    } else {
        db::seed::seed(&pool)
            .await
            .context("Failed to seed car catalog")?;
        info!("✓ Car catalog seeded");
    }

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("car-events listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
