//! Car catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::Error;
use crate::models::Car;
use crate::AppState;

/// GET /cars
///
/// Returns the full catalog as a JSON array.
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, Error> {
    let cars = state.cars.list_all().await?;
    Ok(Json(cars))
}

/// GET /cars/:car_id
///
/// Returns the car as JSON, or 200 with an empty body when the id is
/// unknown. A missing car is an empty result here, not a 404.
pub async fn get_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<Response, Error> {
    match state.cars.get_by_id(&car_id).await? {
        Some(car) => Ok(Json(car).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}
