//! Car query service
//!
//! Wraps the car store with the read operations the HTTP layer exposes,
//! plus the per-car event stream derivation.

use std::time::Duration;

use futures::stream::Stream;
use sqlx::SqlitePool;
use tokio::time::{self, MissedTickBehavior};

use crate::db::cars;
use crate::error::Result;
use crate::models::{Car, CarEvent};

/// Period of the event stream timer.
pub const EVENT_PERIOD: Duration = Duration::from_secs(1);

/// Read-side service over the car store.
#[derive(Clone)]
pub struct CarService {
    db: SqlitePool,
}

impl CarService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// All cars currently in the store.
    pub async fn list_all(&self) -> Result<Vec<Car>> {
        cars::list_all(&self.db).await
    }

    /// One car by id, `None` when absent.
    pub async fn get_by_id(&self, car_id: &str) -> Result<Option<Car>> {
        cars::find_by_id(&self.db, car_id).await
    }

    /// Infinite event stream for one car, paced by a one-second timer.
    ///
    /// The car is resolved once, here, and the same snapshot rides every
    /// event for the life of the stream. An unknown id yields an empty
    /// stream that closes immediately rather than an error.
    ///
    /// Each event is generated only after its tick: the Nth event cannot be
    /// emitted before N periods have elapsed, and nothing is buffered ahead
    /// of the consumer. A slow consumer gets at most one event per period,
    /// never a catch-up burst. Dropping the stream cancels the timer with it.
    pub async fn event_stream(
        &self,
        car_id: &str,
    ) -> Result<impl Stream<Item = CarEvent> + Send + 'static> {
        let car = self.get_by_id(car_id).await?;

        Ok(async_stream::stream! {
            let car = match car {
                Some(car) => car,
                None => return,
            };

            // First tick one full period after subscription
            let mut ticks =
                time::interval_at(time::Instant::now() + EVENT_PERIOD, EVENT_PERIOD);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;
                yield CarEvent::new(car.clone());
            }
        })
    }
}
