//! Startup catalog seeding
//!
//! Clears and repopulates the cars table with a fixed set of models. Runs
//! once at startup, before the listener binds, so the first request always
//! sees a fully seeded catalog.

use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::db::cars;
use crate::error::Result;
use crate::models::Car;

/// Model names inserted by the seed routine.
const SEED_MODELS: [&str; 10] = [
    "Koenigsegg One:1",
    "Hennessy Venom GT",
    "Bugatti Veyron Super Sport",
    "SSC Ultimate Aero",
    "McLaren F1",
    "Pagani Huayra",
    "Noble M600",
    "Aston Martin One-77",
    "Ferrari LaFerrari",
    "Lamborghini Aventador",
];

/// Clear-then-repopulate the car catalog.
///
/// Idempotent: every run leaves exactly `SEED_MODELS.len()` cars in the
/// store, each with a fresh UUID id.
pub async fn seed(pool: &SqlitePool) -> Result<()> {
    info!("Seeding car catalog ({} models)", SEED_MODELS.len());

    cars::delete_all(pool).await?;

    for model in SEED_MODELS {
        let car = cars::insert(
            pool,
            Car {
                id: Uuid::new_v4().to_string(),
                model: model.to_string(),
            },
        )
        .await?;
        debug!("Seeded {} ({})", car.model, car.id);
    }

    Ok(())
}
