//! car-events library - car catalog with per-car SSE event streams
//!
//! Three layers: the SQLite-backed car store (`db`), the query service that
//! derives per-car event streams (`service`), and the axum HTTP surface
//! (`api`). `build_router` wires them together so integration tests can
//! drive the full router in-process.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use error::{Error, Result};

use service::CarService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-side service over the car store
    pub cars: CarService,
}

impl AppState {
    /// Create new application state over a connected pool
    pub fn new(db: SqlitePool) -> Self {
        Self {
            cars: CarService::new(db),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/cars", get(api::list_cars))
        .route("/cars/:car_id", get(api::get_car))
        .route("/cars/:car_id/events", get(api::car_events))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
}
