//! Domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry: opaque string id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub model: String,
}

/// One emission on a car's event stream.
///
/// Ephemeral: constructed fresh per tick, never persisted. The `car`
/// snapshot is resolved once when the stream opens and stays fixed for the
/// life of that stream.
#[derive(Debug, Clone, Serialize)]
pub struct CarEvent {
    pub car: Car,
    pub when: DateTime<Utc>,
}

impl CarEvent {
    /// Wrap a car snapshot with the current timestamp.
    pub fn new(car: Car) -> Self {
        Self {
            car,
            when: Utc::now(),
        }
    }
}
