//! Per-connection source of forecast events.
use crate::event_id::{EventId, EventIdClock};
use crate::forecast::{Forecast, ForecastGenerator};
use chrono::{Local, NaiveDate};
use log::*;
use rand::rngs::StdRng;
use rand::Rng;

/// Pairs every generated forecast with the id it is published under. Each
/// stream owns its feed, so nothing here is shared between connections.
pub struct ForecastFeed<R: Rng = StdRng> {
    generator: ForecastGenerator<R>,
    clock: EventIdClock,
}

impl ForecastFeed<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(ForecastGenerator::from_entropy())
    }
}

impl<R: Rng> ForecastFeed<R> {
    pub fn new(generator: ForecastGenerator<R>) -> Self {
        Self {
            generator,
            clock: EventIdClock::new(),
        }
    }

    /// Next event, dated with today's local calendar date.
    pub fn next_event(&mut self) -> (EventId, Forecast) {
        self.next_event_on(Local::now().date_naive())
    }

    pub fn next_event_on(&mut self, date: NaiveDate) -> (EventId, Forecast) {
        let id = self.clock.next_id();
        let forecast = self.generator.next_forecast(date);
        trace!("Generated forecast {id}: {forecast:?}");
        (id, forecast)
    }
}
