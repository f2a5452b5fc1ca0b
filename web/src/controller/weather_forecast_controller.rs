use crate::extractors::last_event_id::LastEventId;
use crate::AppState;
use axum::extract::State;
use axum::response::sse::{Event, Sse};
use domain::{EventId, Forecast, ForecastFeed};
use futures::Stream;
use log::*;
use std::convert::Infallible;
use std::time::Duration;

pub(crate) const WEATHER_FORECAST_EVENT: &str = "weatherForecast";

/// Pause between two forecasts on one stream.
pub(crate) const FORECAST_INTERVAL: Duration = Duration::from_secs(1);

/// Reconnection delay suggested to clients with every event.
pub(crate) const RECONNECT_INTERVAL: Duration = Duration::from_millis(500);

/// GET an endless stream of synthetic weather forecasts
///
/// One `weatherForecast` event is sent every second until the client
/// disconnects or the server shuts down. A `Last-Event-ID` sent on reconnect is
/// accepted but there is no replay: the stream always starts fresh.
#[utoipa::path(
    get,
    path = "/weatherforecast",
    operation_id = "GetWeatherForecast",
    params(
        ("Last-Event-ID" = Option<String>, Header, description = "Id of the last event received before reconnecting", example = "2024-01-01T00:00:00.0000000+00:00"),
    ),
    responses(
        (status = 200, description = "Server-sent event stream, one forecast per `data` field", body = Forecast, content_type = "text/event-stream"),
        (status = 307, description = "Plaintext request redirected to HTTPS"),
    )
)]
pub async fn index(
    State(app_state): State<AppState>,
    LastEventId(last_event_id): LastEventId,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    match last_event_id {
        Some(raw) => match EventId::parse(&raw) {
            // Resuming is not supported; reconnecting clients get a fresh stream.
            Ok(id) => debug!("Client reconnected after event {id}, starting a new forecast stream"),
            Err(e) => debug!("Ignoring unparsable Last-Event-ID {raw:?}: {e}"),
        },
        None => debug!("Starting forecast stream"),
    }

    let mut feed = ForecastFeed::from_entropy();
    let stream = sse::stream::periodic(app_state.request_token(), FORECAST_INTERVAL, move || {
        let (id, forecast) = feed.next_event();
        Event::default()
            .event(WEATHER_FORECAST_EVENT)
            .id(id.to_string())
            .retry(RECONNECT_INTERVAL)
            .json_data(&forecast)
    });

    Sse::new(stream)
}
