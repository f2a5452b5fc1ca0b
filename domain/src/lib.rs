//! Forecast domain: the synthetic forecast model, its random generator and the
//! ids forecasts are published under.

pub mod event_id;
pub mod feed;
pub mod forecast;

pub use event_id::EventId;
pub use feed::ForecastFeed;
pub use forecast::{Forecast, ForecastGenerator, Summary};
