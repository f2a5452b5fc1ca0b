use async_stream::stream;
use axum::response::sse::Event;
use futures::Stream;
use log::*;
use std::convert::Infallible;
use std::fmt::Display;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Produces one event from `next_event`, then waits `interval`, until `cancel`
/// fires or the producer fails.
///
/// Cancellation is checked before every event and raced against the wait, so a
/// cancelled stream ends right away and never yields a partial event. Dropping
/// the stream (the client hung up) stops it just the same.
pub fn periodic<F, E>(
    cancel: CancellationToken,
    interval: Duration,
    mut next_event: F,
) -> impl Stream<Item = Result<Event, Infallible>> + Send + 'static
where
    F: FnMut() -> Result<Event, E> + Send + 'static,
    E: Display + Send + 'static,
{
    stream! {
        let mut tally = Tally::default();

        while !cancel.is_cancelled() {
            let event = match next_event() {
                Ok(event) => event,
                Err(e) => {
                    error!("Failed to produce event, closing stream: {e}");
                    break;
                }
            };

            yield Ok::<_, Infallible>(event);
            tally.sent += 1;

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }
    }
}

#[derive(Default)]
struct Tally {
    sent: u64,
}

impl Drop for Tally {
    fn drop(&mut self) {
        debug!("Event stream closed after {} events", self.sent);
    }
}
