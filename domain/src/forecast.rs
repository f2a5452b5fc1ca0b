//! Synthetic weather forecasts.
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::ops::Range;
use utoipa::ToSchema;

/// Half-open range temperatures are drawn from, giving -20..=54 °C.
pub const TEMPERATURE_C_RANGE: Range<i32> = -20..55;

/// Divisor used to convert Celsius to Fahrenheit, `5 / 9` to four places.
const CELSIUS_PER_FAHRENHEIT: f64 = 0.5556;

/// Descriptive label attached to a forecast, ordered from coldest to hottest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum Summary {
    Freezing,
    Bracing,
    Chilly,
    Cool,
    Mild,
    Warm,
    Balmy,
    Hot,
    Sweltering,
    Scorching,
}

impl Summary {
    pub const ALL: [Summary; 10] = [
        Summary::Freezing,
        Summary::Bracing,
        Summary::Chilly,
        Summary::Cool,
        Summary::Mild,
        Summary::Warm,
        Summary::Balmy,
        Summary::Hot,
        Summary::Sweltering,
        Summary::Scorching,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Summary::Freezing => "Freezing",
            Summary::Bracing => "Bracing",
            Summary::Chilly => "Chilly",
            Summary::Cool => "Cool",
            Summary::Mild => "Mild",
            Summary::Warm => "Warm",
            Summary::Balmy => "Balmy",
            Summary::Hot => "Hot",
            Summary::Sweltering => "Sweltering",
            Summary::Scorching => "Scorching",
        }
    }
}

/// A single forecast. Fahrenheit is derived once at construction, so the two
/// temperatures can never disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    #[schema(example = "2024-01-01")]
    date: NaiveDate,
    temperature_c: i32,
    temperature_f: i32,
    summary: Option<Summary>,
}

impl Forecast {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Option<Summary>) -> Self {
        Self {
            date,
            temperature_c,
            temperature_f: fahrenheit(temperature_c),
            summary,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn temperature_c(&self) -> i32 {
        self.temperature_c
    }

    pub fn temperature_f(&self) -> i32 {
        self.temperature_f
    }

    pub fn summary(&self) -> Option<Summary> {
        self.summary
    }
}

/// `32 + round(celsius / 0.5556)`
pub fn fahrenheit(celsius: i32) -> i32 {
    32 + (f64::from(celsius) / CELSIUS_PER_FAHRENHEIT).round() as i32
}

/// Draws forecasts from an explicitly owned random source.
pub struct ForecastGenerator<R: Rng> {
    rng: R,
}

impl ForecastGenerator<StdRng> {
    /// A generator seeded from the operating system, one per stream.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ForecastGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_forecast(&mut self, date: NaiveDate) -> Forecast {
        let temperature_c = self.rng.gen_range(TEMPERATURE_C_RANGE);
        let summary = Summary::ALL[self.rng.gen_range(0..Summary::ALL.len())];

        Forecast::new(date, temperature_c, Some(summary))
    }
}
