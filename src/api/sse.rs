//! Server-Sent Events (SSE) endpoint
//!
//! Streams one CarEvent frame per second to each connected client, each
//! frame flushed as it is produced. The stream never ends on its own; it
//! runs until the client disconnects.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::error::Error;
use crate::AppState;

/// GET /cars/:car_id/events
///
/// Unknown ids produce an immediately-closed stream, zero frames. A store
/// failure while resolving the car fails the request before the stream
/// opens.
pub async fn car_events(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, Error> {
    debug!("New SSE client for car {}", car_id);

    let events = state.cars.event_stream(&car_id).await?;

    let stream = events.filter_map(|event| async move {
        match serde_json::to_string(&event) {
            Ok(json) => Some(Ok(Event::default().data(json))),
            Err(e) => {
                warn!("Failed to serialize event: {}", e);
                None
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    ))
}
