//! Car store queries

use sqlx::{Row, SqlitePool};

use crate::error::Result;
use crate::models::Car;

/// Fetch every car currently in the store, unordered.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Car>> {
    let rows = sqlx::query("SELECT id, model FROM cars")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| Car {
            id: row.get(0),
            model: row.get(1),
        })
        .collect())
}

/// Fetch one car by id. Returns `None` when no record matches; a missing
/// car is an empty result, not an error.
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Car>> {
    let row = sqlx::query("SELECT id, model FROM cars WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Car {
        id: row.get(0),
        model: row.get(1),
    }))
}

/// Remove every car from the store. Used only by the seed routine.
pub async fn delete_all(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM cars").execute(pool).await?;
    Ok(())
}

/// Persist a car and hand it back. Used only by the seed routine.
pub async fn insert(pool: &SqlitePool, car: Car) -> Result<Car> {
    sqlx::query("INSERT INTO cars (id, model) VALUES (?, ?)")
        .bind(&car.id)
        .bind(&car.model)
        .execute(pool)
        .await?;

    Ok(car)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // Single connection so every query sees the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Should open in-memory database");
        crate::db::init_schema(&pool)
            .await
            .expect("Should create schema");
        pool
    }

    #[tokio::test]
    async fn test_find_by_id_returns_stored_car() {
        let pool = test_pool().await;

        let stored = insert(
            &pool,
            Car {
                id: "A".to_string(),
                model: "Ferrari LaFerrari".to_string(),
            },
        )
        .await
        .expect("Should insert car");

        let found = find_by_id(&pool, "A")
            .await
            .expect("Should query car")
            .expect("Car should exist");
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let pool = test_pool().await;

        let found = find_by_id(&pool, "no-such-id")
            .await
            .expect("Should query car");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_all_empties_store() {
        let pool = test_pool().await;

        insert(
            &pool,
            Car {
                id: "A".to_string(),
                model: "McLaren F1".to_string(),
            },
        )
        .await
        .expect("Should insert car");

        delete_all(&pool).await.expect("Should delete cars");

        let cars = list_all(&pool).await.expect("Should list cars");
        assert!(cars.is_empty());
    }
}
