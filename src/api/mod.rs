//! HTTP API handlers for car-events

pub mod cars;
pub mod health;
pub mod sse;

pub use cars::{get_car, list_cars};
pub use health::health_routes;
pub use sse::car_events;
